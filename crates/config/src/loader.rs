use crate::{ConfigError, Result};
use sqlint_linter::Settings;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".sqlintrc.yaml",
    ".sqlintrc.yml",
    ".sqlintrc.json",
    ".sqlintrc",
    "sqlint.config.yaml",
    "sqlint.config.json",
];

/// Find a settings file by walking up the directory tree from `start_dir`.
/// Returns the path to the first file found, nearest directory first.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_settings(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load settings from the specified path.
/// The format is detected from the file name.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_settings(path: &Path) -> Result<Settings> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let settings = load_settings_from_str(&contents, path)?;
    tracing::info!(
        rules = settings.lint.configured_rule_names().len(),
        max_number_of_problems = settings.max_number_of_problems,
        "Config loaded successfully"
    );
    Ok(settings)
}

/// Load settings from a string.
/// The path is used for error messages and format detection.
///
/// A blank file yields [`Settings::default`].
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_settings_from_str(contents: &str, path: &Path) -> Result<Settings> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    tracing::debug!(extension, file_name, "Detecting config format");

    if !matches!(extension, "yml" | "yaml" | "json") && file_name != ".sqlintrc" {
        return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
    }

    if contents.trim().is_empty() {
        tracing::debug!("Empty config file, using defaults");
        return Ok(Settings::default());
    }

    let settings = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        // .sqlintrc without extension: YAML first, then JSON
        _ => parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?,
    };

    tracing::debug!("Validating config");
    validate_settings(&settings, path)?;

    Ok(settings)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<Settings> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<Settings> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Reject unknown rule ids and presets, and a zero problem cap.
fn validate_settings(settings: &Settings, path: &Path) -> Result<()> {
    if settings.max_number_of_problems == 0 {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "maxNumberOfProblems must be greater than 0".to_string(),
        });
    }

    settings
        .lint
        .validate()
        .map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        })?;

    tracing::debug!("Config validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_linter::RuleSeverity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let yaml = r"
maxNumberOfProblems: 50
lint:
  extends: recommended
  rules:
    leading-comma: error
    final-newline: off
";
        let file = write_temp(".yaml", yaml);

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.max_number_of_problems, 50);
        assert_eq!(
            settings.lint.get_severity("leading-comma"),
            Some(RuleSeverity::Error)
        );
        assert!(!settings.lint.is_enabled("final-newline"));
        assert!(settings.lint.is_enabled("trailing-whitespace"));
    }

    #[test]
    fn test_load_json() {
        let json = r#"{ "lint": { "rules": { "trailing-whitespace": "warn" } } }"#;
        let file = write_temp(".json", json);

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.max_number_of_problems, 1000);
        assert!(settings.lint.is_enabled("trailing-whitespace"));
        assert!(!settings.lint.is_enabled("leading-comma"));
    }

    #[test]
    fn test_rc_without_extension_accepts_json() {
        let settings = load_settings_from_str(
            r#"{ "maxNumberOfProblems": 3 }"#,
            Path::new("/project/.sqlintrc"),
        )
        .unwrap();
        assert_eq!(settings.max_number_of_problems, 3);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = load_settings_from_str("\n", Path::new("/project/.sqlintrc.yml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_settings_from_str("max = 1", Path::new("/project/sqlint.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unknown_rule_is_invalid() {
        let yaml = "lint:\n  rules:\n    no-such-rule: error\n";
        let result = load_settings_from_str(yaml, Path::new("/project/.sqlintrc.yaml"));
        let Err(ConfigError::Invalid { message, .. }) = result else {
            panic!("expected an invalid config error, got {result:?}");
        };
        assert!(message.contains("no-such-rule"));
    }

    #[test]
    fn test_zero_max_problems_is_invalid() {
        let result = load_settings_from_str(
            r#"{ "maxNumberOfProblems": 0 }"#,
            Path::new("/project/.sqlintrc.json"),
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_parse_error_is_invalid() {
        let result = load_settings_from_str("{ not json", Path::new("/project/.sqlintrc.json"));
        let Err(ConfigError::Invalid { message, .. }) = result else {
            panic!("expected an invalid config error, got {result:?}");
        };
        assert!(message.starts_with("JSON parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_settings(&temp_dir.path().join(".sqlintrc.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_find_settings_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".sqlintrc.yaml");
        fs::write(&config_path, "maxNumberOfProblems: 10").unwrap();

        let found = find_settings(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_settings_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".sqlintrc.json");
        fs::write(&config_path, "{}").unwrap();

        let sub_dir = temp_dir.path().join("queries");
        fs::create_dir(&sub_dir).unwrap();

        let found = find_settings(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_settings_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let found = find_settings(temp_dir.path()).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".sqlintrc.yaml"), "{}").unwrap();
        fs::write(temp_dir.path().join("sqlint.config.json"), "{}").unwrap();

        let found = find_settings(temp_dir.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), ".sqlintrc.yaml");
    }
}
