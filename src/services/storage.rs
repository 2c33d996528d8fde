use crate::domain::errors::CardError;
use crate::domain::models::ConfigFile;
use crate::domain::record::CardRecord;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn read_record(path: &Path) -> Result<CardRecord, CardError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    CardRecord::parse(path, &raw)
}

/// Serializes the whole record first, then swaps it in from a uniquely named
/// temp file in the target's directory. Symlinks are followed and the card's
/// permissions are carried over; read-only cards are refused.
pub fn write_record(path: &Path, record: &CardRecord) -> Result<(), CardError> {
    let body = record.to_canonical()?;
    let write_err = |source: std::io::Error| CardError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = std::fs::canonicalize(path).map_err(write_err)?;
    let perms = std::fs::metadata(&target).map_err(write_err)?.permissions();
    if perms.readonly() {
        return Err(write_err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "card is read-only",
        )));
    }
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(body.as_bytes()).map_err(write_err)?;
    tmp.as_file().set_permissions(perms).map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/cardclass/config.toml"))
}

/// Explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, CardError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| CardError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config: ConfigFile = toml::from_str(&raw).map_err(|e| CardError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), extra_classes = config.classes.len(), "loaded config");
    Ok(config)
}
