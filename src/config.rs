use std::path::PathBuf;

/// Catalog the filter reads.
pub const DEFAULT_INPUT_PATH: &str = "app/public/BSC.json";
/// Where the filtered catalog is written.
pub const DEFAULT_OUTPUT_PATH: &str = "app/public/BSC_filtered.json";
/// Stars with `MAG` at or above this are kept.
pub const MAG_THRESHOLD: f64 = 4.0;

/// Paths and threshold for one filtering run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            threshold: MAG_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_constants() {
        let cfg = FilterConfig::default();
        assert_eq!(cfg.input_path, PathBuf::from("app/public/BSC.json"));
        assert_eq!(cfg.output_path, PathBuf::from("app/public/BSC_filtered.json"));
        assert_eq!(cfg.threshold, 4.0);
    }
}
