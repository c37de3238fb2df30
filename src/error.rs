use std::path::PathBuf;
use thiserror::Error;

/// Failures inside the file-backed store.
///
/// These never cross the option-tree API: the store logs them and the tree
/// falls back to compiled-in defaults. They are public so alternative
/// [`SettingsStore`](crate::SettingsStore) backends can reuse them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = StoreError::Io {
            path: "/tmp/settings/app.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("app.toml"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn parse_error_names_the_path() {
        let source = "not [ valid".parse::<toml_edit::DocumentMut>().unwrap_err();
        let err = StoreError::Parse {
            path: "/tmp/bad.toml".into(),
            source,
        };
        assert!(err.to_string().contains("bad.toml"));
    }
}
