use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::model::Catalog;
use crate::error::CatalogError;

const INDENT: &[u8] = b"    ";

/// Serialize a catalog as a 4-space indented JSON array, without a trailing
/// newline.
pub fn to_pretty_json(catalog: &Catalog) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, catalog)?;
    Ok(buf)
}

fn write_pretty<W: Write>(writer: W, catalog: &Catalog) -> serde_json::Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    catalog.serialize(&mut ser)
}

/// Write the catalog to `path`, replacing any existing file atomically.
///
/// Output goes to `<path>.tmp` first and is renamed into place once it is
/// fully flushed. On failure the temp file is removed and `path` is left
/// as it was.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let tmp_path = temp_path_for(path);

    if let Err(source) = write_then_rename(&tmp_path, path, catalog) {
        if tmp_path.exists() {
            if let Err(e) = fs::remove_file(&tmp_path) {
                warn!("could not remove {tmp_path:?}: {e}");
            }
        }
        return Err(CatalogError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("wrote {} records to {path:?}", catalog.len());
    Ok(())
}

fn write_then_rename(tmp_path: &Path, path: &Path, catalog: &Catalog) -> io::Result<()> {
    {
        let file = File::create(tmp_path)?;
        let mut writer = BufWriter::new(file);
        write_pretty(&mut writer, catalog)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let cat = catalog(r#"[{"MAG":"4.0","NAME":"B"}]"#);
        let text = String::from_utf8(to_pretty_json(&cat).unwrap()).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"MAG\": \"4.0\",\n        \"NAME\": \"B\"\n    }\n]"
        );
    }

    #[test]
    fn empty_catalog_is_empty_array() {
        assert_eq!(to_pretty_json(&Catalog::default()).unwrap(), b"[]");
    }

    #[test]
    fn keys_keep_source_order() {
        let cat = catalog(r#"[{"RA":"1","DEC":"2","MAG":"5"}]"#);
        let text = String::from_utf8(to_pretty_json(&cat).unwrap()).unwrap();
        let ra = text.find("RA").unwrap();
        let dec = text.find("DEC").unwrap();
        let mag = text.find("MAG").unwrap();
        assert!(ra < dec && dec < mag, "{text}");
    }

    #[test]
    fn numbers_keep_their_source_text() {
        let cat =
            catalog(r#"[{"MAG":"5.0","HR":123456789012345678901234567890,"PMRA":6.70}]"#);
        let text = String::from_utf8(to_pretty_json(&cat).unwrap()).unwrap();
        assert!(text.contains("\"HR\": 123456789012345678901234567890"), "{text}");
        assert!(text.contains("\"PMRA\": 6.70"), "{text}");
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path_for(Path::new("app/public/BSC_filtered.json")),
            PathBuf::from("app/public/BSC_filtered.json.tmp")
        );
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        fs::write(&out, "stale").unwrap();

        let cat = catalog(r#"[{"MAG":"5.0"}]"#);
        save_catalog(&out, &cat).unwrap();

        assert_eq!(fs::read(&out).unwrap(), to_pretty_json(&cat).unwrap());
        assert!(!temp_path_for(&out).exists());
    }

    #[test]
    fn missing_parent_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.json");

        let err = save_catalog(&out, &Catalog::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(!out.exists());
    }
}
