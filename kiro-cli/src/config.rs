//! CLI configuration, loaded from environment variables.

use anyhow::Result;
use dialogue_engine::Script;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the `kiro` binary.
pub struct KiroConfig {
    /// Optional script file; when absent the built-in Kiro script is used.
    pub script_path: Option<PathBuf>,
    pub log_file: String,
}

impl KiroConfig {
    /// Loads configuration from environment variables.
    /// If `script_path` is provided it overrides KIRO_SCRIPT_PATH.
    pub fn load(script_path: Option<PathBuf>) -> Result<Self> {
        let script_path = script_path
            .or_else(|| env::var("KIRO_SCRIPT_PATH").ok().map(PathBuf::from));
        let log_file =
            env::var("KIRO_LOG_FILE").unwrap_or_else(|_| "logs/kiro.log".to_string());

        Ok(Self {
            script_path,
            log_file,
        })
    }

    /// Loads the configured script: the file when a path is set, the built-in
    /// Kiro script otherwise. Validation happens at engine construction.
    pub fn load_script(&self) -> Result<Script> {
        match &self.script_path {
            Some(path) => Ok(Script::from_json_file(path)?),
            None => Ok(Script::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        env::remove_var("KIRO_SCRIPT_PATH");
        env::remove_var("KIRO_LOG_FILE");

        let config = KiroConfig::load(None).unwrap();
        assert_eq!(config.script_path, None);
        assert_eq!(config.log_file, "logs/kiro.log");
    }

    #[test]
    #[serial]
    fn test_env_vars_are_honored() {
        env::set_var("KIRO_SCRIPT_PATH", "/tmp/script.json");
        env::set_var("KIRO_LOG_FILE", "/tmp/kiro.log");

        let config = KiroConfig::load(None).unwrap();
        assert_eq!(config.script_path, Some(PathBuf::from("/tmp/script.json")));
        assert_eq!(config.log_file, "/tmp/kiro.log");

        env::remove_var("KIRO_SCRIPT_PATH");
        env::remove_var("KIRO_LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_cli_arg_overrides_env() {
        env::set_var("KIRO_SCRIPT_PATH", "/tmp/from-env.json");

        let config = KiroConfig::load(Some(PathBuf::from("/tmp/from-arg.json"))).unwrap();
        assert_eq!(config.script_path, Some(PathBuf::from("/tmp/from-arg.json")));

        env::remove_var("KIRO_SCRIPT_PATH");
    }

    #[test]
    #[serial]
    fn test_load_script_falls_back_to_builtin() {
        env::remove_var("KIRO_SCRIPT_PATH");

        let config = KiroConfig::load(None).unwrap();
        let script = config.load_script().unwrap();
        assert_eq!(script.bot_name, "Kiro");
    }

    #[test]
    #[serial]
    fn test_load_script_reads_the_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Script::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = KiroConfig::load(Some(file.path().to_path_buf())).unwrap();
        let script = config.load_script().unwrap();
        assert_eq!(script, Script::builtin());
    }
}
