use anyhow::{Context, Result};
use bsc_filter::{pipeline, FilterConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = FilterConfig::default();
    pipeline::run(&config).with_context(|| {
        format!(
            "filtering {:?} into {:?}",
            config.input_path, config.output_path
        )
    })?;

    Ok(())
}
