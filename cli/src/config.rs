use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use token_engine::EngineConfig;

use crate::error::CliError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Base58 key used when `--signer` is not given.
    pub signer: Option<String>,
    pub default_decimals: u8,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            signer: None,
            default_decimals: 9,
            engine: EngineConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }

    let contents =
        fs::read_to_string(path).map_err(|e| CliError::ConfigNotFound(e.to_string()))?;

    let config: CliConfig =
        toml::from_str(&contents).map_err(|e| CliError::InvalidConfig(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("does/not/exist.toml")).expect("should default");

        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let program_id = anchor_lang::prelude::Pubkey::new_unique().to_string();
        let signer = anchor_lang::prelude::Pubkey::new_unique().to_string();
        let contents = format!(
            r#"
signer = "{signer}"
default_decimals = 6

[engine]
program_id = "{program_id}"
"#
        );

        let config: CliConfig = toml::from_str(&contents).expect("should parse");

        assert_eq!(config.signer, Some(signer));
        assert_eq!(config.default_decimals, 6);
        assert_eq!(config.engine.program_id, program_id);
        assert_eq!(
            config.engine.token_program_id,
            EngineConfig::default().token_program_id
        );
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "token-cli-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "default_decimals = \"nine\"").expect("should write");

        let result = load_config(&path);
        fs::remove_file(&path).expect("should clean up");

        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
