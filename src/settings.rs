use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_MAX_RESULTS, DEFAULT_OUTPUT_DIR, DEFAULT_RADIUS_NM, ENV_PREFIX,
    FORMAT_JSON,
};
use crate::writers::ReportFormat;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: ReportFormat,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NearestSettings {
    #[validate(range(min = 1, max = 500))]
    pub radius_nm: u32,

    #[validate(range(min = 1))]
    pub max_results: usize,
}

/// Runtime settings for the CLI. The reference tables are not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub nearest: NearestSettings,
}

impl Settings {
    /// Layer defaults, an optional TOML file, and `FUEL_PRICES_*` environment
    /// variables (e.g. `FUEL_PRICES_NEAREST__RADIUS_NM=75`).
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// `FUEL_PRICES` + `_`, then `__` between nested keys
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let config = Config::builder()
            .set_default("output.format", FORMAT_JSON)?
            .set_default("output.directory", DEFAULT_OUTPUT_DIR)?
            .set_default("nearest.radius_nm", i64::from(DEFAULT_RADIUS_NM))?
            .set_default("nearest.max_results", DEFAULT_MAX_RESULTS as i64)?
            .add_source(File::from(file.clone()).required(required))
            .add_source(environment)
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.nearest.validate()?;

        debug!(file = %file.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputSettings {
                format: ReportFormat::Json,
                directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
            nearest: NearestSettings {
                radius_nm: DEFAULT_RADIUS_NM,
                max_results: DEFAULT_MAX_RESULTS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::io::Write;

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_empty_file_yields_defaults() -> Result<()> {
        let file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        assert_eq!(Settings::load(Some(file.path()))?, Settings::default());
        Ok(())
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[output]")?;
        writeln!(file, "format = \"csv\"")?;
        writeln!(file, "[nearest]")?;
        writeln!(file, "radius_nm = 120")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.output.format, ReportFormat::Csv);
        assert_eq!(settings.output.directory, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(settings.nearest.radius_nm, 120);
        assert_eq!(settings.nearest.max_results, DEFAULT_MAX_RESULTS);
        Ok(())
    }

    #[test]
    fn test_out_of_range_radius_is_rejected() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[nearest]")?;
        writeln!(file, "radius_nm = 900")?;

        let result = Settings::load(Some(file.path()));
        assert!(matches!(result, Err(ProcessingError::Validation(_))));
        Ok(())
    }

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        Settings::environment().source(Some(source))
    }

    #[test]
    fn test_env_overrides_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[nearest]")?;
        writeln!(file, "radius_nm = 120")?;

        let env = env_of(&[
            ("FUEL_PRICES_NEAREST__RADIUS_NM", "75"),
            ("FUEL_PRICES_OUTPUT__FORMAT", "table"),
        ]);
        let settings = Settings::load_with_env(Some(file.path()), env)?;

        assert_eq!(settings.nearest.radius_nm, 75);
        assert_eq!(settings.output.format, ReportFormat::Table);
        assert_eq!(settings.nearest.max_results, DEFAULT_MAX_RESULTS);
        Ok(())
    }

    #[test]
    fn test_env_without_prefix_is_ignored() -> Result<()> {
        let file = tempfile::Builder::new().suffix(".toml").tempfile()?;

        let env = env_of(&[("NEAREST__RADIUS_NM", "75")]);
        let settings = Settings::load_with_env(Some(file.path()), env)?;

        assert_eq!(settings.nearest.radius_nm, DEFAULT_RADIUS_NM);
        Ok(())
    }
}
