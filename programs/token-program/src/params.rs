use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::TokenProgramError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

impl CreateTokenParams {
    pub fn validate(&self) -> std::result::Result<(), TokenProgramError> {
        validate_name(&self.name)?;
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(TokenProgramError::SymbolTooLong);
        }
        if self.uri.len() > MAX_URI_LENGTH {
            return Err(TokenProgramError::UriTooLong);
        }
        Ok(())
    }
}

/// Arguments shared by `mint_token`, `burn_token` and `burn_token_from`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenParams {
    pub name: String,
    pub amount: u64,
}

impl TokenParams {
    pub fn validate(&self) -> std::result::Result<(), TokenProgramError> {
        validate_name(&self.name)?;
        if self.amount == 0 {
            return Err(TokenProgramError::InvalidAmount);
        }
        Ok(())
    }
}

/// Names are seeds, so anything that cannot be a seed is rejected here rather
/// than truncated.
pub fn validate_name(name: &str) -> std::result::Result<(), TokenProgramError> {
    if name.is_empty() {
        return Err(TokenProgramError::EmptyName);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(TokenProgramError::NameTooLong);
    }
    Ok(())
}
