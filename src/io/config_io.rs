use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::prefs::Preferences;

/// Error type for preference persistence
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Load preferences from a TOML file. A missing file yields defaults;
/// a malformed file is an error the caller surfaces.
pub fn load_prefs(path: &Path) -> Result<Preferences, ConfigError> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist preferences, atomically replacing the previous file.
pub fn save_prefs(path: &Path, prefs: &Preferences) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(prefs)?;

    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prefs::{LineBreakMode, Locale, Theme};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = load_prefs(&dir.path().join("taskmd.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskmd.toml");
        let prefs = Preferences {
            theme: Theme::Dark,
            locale: Locale::En,
            line_break: LineBreakMode::Crlf,
            marker: "[[X]]".into(),
        };
        save_prefs(&path, &prefs).unwrap();
        assert_eq!(load_prefs(&path).unwrap(), prefs);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskmd.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(matches!(
            load_prefs(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
