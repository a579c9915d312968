use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Settings of the selection host adapter.
///
/// Can be read from TOML, missing keys take default values:
/// ```toml
/// chunk_size = 10
/// implicit_selection = "sele"
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostOptions {
    /// Maximal number of indices passed to the host in a single call
    pub chunk_size: usize,
    /// Name of the selection the host creates implicitly
    pub implicit_selection: String,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            chunk_size: 10,
            implicit_selection: "sele".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HostOptionsError {
    #[error("can't read host options file {0}")]
    Io(std::path::PathBuf, #[source] std::io::Error),

    #[error("invalid host options")]
    Toml(#[from] toml::de::Error),

    #[error("chunk_size must be positive")]
    ZeroChunk,
}

impl HostOptions {
    pub fn from_toml_str(s: &str) -> Result<Self, HostOptionsError> {
        let opts: HostOptions = toml::from_str(s)?;
        if opts.chunk_size == 0 {
            return Err(HostOptionsError::ZeroChunk);
        }
        Ok(opts)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HostOptionsError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| HostOptionsError::Io(path.to_owned(), e))?;
        Self::from_toml_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() -> Result<()> {
        assert_eq!(HostOptions::from_toml_str("")?, HostOptions::default());
        let opts = HostOptions::from_toml_str("chunk_size = 3")?;
        assert_eq!(opts.chunk_size, 3);
        assert_eq!(opts.implicit_selection, "sele");
        Ok(())
    }

    #[test]
    fn test_full() -> Result<()> {
        let opts = HostOptions::from_toml_str("chunk_size = 25\nimplicit_selection = \"active\"")?;
        assert_eq!(opts.chunk_size, 25);
        assert_eq!(opts.implicit_selection, "active");
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            HostOptions::from_toml_str("chunk_size = 0"),
            Err(HostOptionsError::ZeroChunk)
        ));
        assert!(matches!(
            HostOptions::from_toml_str("chunk = 5"),
            Err(HostOptionsError::Toml(_))
        ));
        assert!(matches!(
            HostOptions::from_file("tests/no_such.toml"),
            Err(HostOptionsError::Io(..))
        ));
    }
}
