use super::{ForceClamp, Potential, PotentialError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid parameters in '{path}': {source}")]
    Invalid {
        path: String,
        source: PotentialError,
    },
}

/// An interaction description loaded from a TOML parameter file.
///
/// The file carries one `[potential]` table selecting a variant by `kind`
/// plus its coefficients, and an optional `[clamp]` table overriding the
/// near-overlap defaults. Loading validates both before the description is
/// handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PotentialFile {
    pub potential: Potential,
    #[serde(default)]
    pub clamp: ForceClamp,
}

impl PotentialFile {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        file.validate().map_err(|e| ParamLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), PotentialError> {
        self.potential.validate()?;
        self.clamp.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_param_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let (_dir, path) = write_param_file(
            r#"
            [potential]
            kind = "mie"
            epsilon = 1.0
            sigma = 1.0
            repulsive_exponent = 12.0
            attractive_exponent = 6.0

            [clamp]
            min_distance = 1e-4
            max_magnitude = 1e9
            "#,
        );

        let file = PotentialFile::load(&path).unwrap();
        assert_eq!(
            file.potential,
            Potential::Mie {
                epsilon: 1.0,
                sigma: 1.0,
                repulsive_exponent: 12.0,
                attractive_exponent: 6.0
            }
        );
        assert_eq!(file.clamp.min_distance, 1e-4);
        assert_eq!(file.clamp.max_magnitude, 1e9);
    }

    #[test]
    fn load_defaults_the_clamp_when_absent() {
        let (_dir, path) = write_param_file(
            r#"
            [potential]
            kind = "lennard_jones"
            epsilon = 1.0
            sigma = 1.0
            "#,
        );

        let file = PotentialFile::load(&path).unwrap();
        assert_eq!(file.clamp, ForceClamp::default());
    }

    #[test]
    fn load_partially_defaults_the_clamp_table() {
        let (_dir, path) = write_param_file(
            r#"
            [potential]
            kind = "ideal"

            [clamp]
            min_distance = 0.01
            "#,
        );

        let file = PotentialFile::load(&path).unwrap();
        assert_eq!(file.clamp.min_distance, 0.01);
        assert_eq!(file.clamp.max_magnitude, super::super::DEFAULT_MAX_FORCE);
    }

    #[test]
    fn load_fails_for_a_missing_file() {
        let dir = tempdir().unwrap();
        let result = PotentialFile::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let (_dir, path) = write_param_file("potential = \"not a table\"");
        let result = PotentialFile::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_fast_on_invalid_coefficients() {
        let (_dir, path) = write_param_file(
            r#"
            [potential]
            kind = "lennard_jones"
            epsilon = -1.0
            sigma = 1.0
            "#,
        );

        let result = PotentialFile::load(&path);
        assert!(matches!(
            result,
            Err(ParamLoadError::Invalid {
                source: PotentialError::InvalidEpsilon(_),
                ..
            })
        ));
    }
}
