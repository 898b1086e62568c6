pub mod handlers;

use anchor_lang::prelude::Pubkey;

use crate::error::CliError;

pub fn parse_pubkey(value: &str) -> Result<Pubkey, CliError> {
    value
        .parse::<Pubkey>()
        .map_err(|_| CliError::InvalidPubkey(value.to_string()))
}

pub fn parse_pubkeys(values: &[String]) -> Result<Vec<Pubkey>, CliError> {
    values.iter().map(|value| parse_pubkey(value)).collect()
}
