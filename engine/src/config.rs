use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Identities the engine derives addresses from. Keys are base58 strings so
/// the struct reads and writes cleanly as TOML.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub program_id: String,
    pub token_program_id: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program_id: token_program::ID.to_string(),
            token_program_id: anchor_spl::token_2022::ID.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn program_id(&self) -> Result<Pubkey, EngineError> {
        parse_key("program_id", &self.program_id)
    }

    pub fn token_program_id(&self) -> Result<Pubkey, EngineError> {
        parse_key("token_program_id", &self.token_program_id)
    }
}

fn parse_key(field: &str, value: &str) -> Result<Pubkey, EngineError> {
    Pubkey::from_str(value)
        .map_err(|e| EngineError::InvalidConfig(format!("{field} `{value}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_program_and_token_2022() {
        let config = EngineConfig::default();

        assert_eq!(config.program_id().expect("valid"), token_program::ID);
        assert_eq!(
            config.token_program_id().expect("valid"),
            anchor_spl::token_2022::ID
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let program_id = Pubkey::new_unique();
        let config: EngineConfig =
            toml::from_str(&format!("program_id = \"{program_id}\"")).expect("should parse");

        assert_eq!(config.program_id().expect("valid"), program_id);
        assert_eq!(config.token_program_id, EngineConfig::default().token_program_id);
    }

    #[test]
    fn test_invalid_key_is_reported() {
        let config = EngineConfig {
            program_id: "not-a-key".to_string(),
            ..EngineConfig::default()
        };

        let err = config.program_id().expect_err("should reject");
        assert!(err.to_string().contains("program_id"));
    }
}
