use anchor_lang::prelude::Pubkey;
use thiserror::Error;
use token_program::access::Operation;
use token_program::error::TokenProgramError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Global state is already initialized")]
    AlreadyInitialized,

    #[error("Global state has not been initialized")]
    NotInitialized,

    #[error("Unauthorized: {signer} may not perform {operation:?}")]
    Unauthorized { signer: Pubkey, operation: Operation },

    #[error("Token already exists: {0}")]
    TokenAlreadyExists(String),

    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Arithmetic overflow")]
    MathOverflow,

    #[error("Account {address} is owned by {owner}, not this program")]
    AccountOwnerMismatch { address: Pubkey, owner: Pubkey },

    #[error("No token ledger at {0}")]
    LedgerNotFound(Pubkey),

    #[error("Token ledger already exists at {0}")]
    LedgerExists(Pubkey),

    #[error("{0} is not an authority for this ledger operation")]
    InvalidAuthority(Pubkey),

    #[error("Balance record {0} does not belong to this token")]
    InvalidTokenAccount(Pubkey),

    #[error("Rejected by program: {0}")]
    Program(TokenProgramError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<TokenProgramError> for EngineError {
    fn from(e: TokenProgramError) -> Self {
        match e {
            TokenProgramError::AlreadyInitialized => EngineError::AlreadyInitialized,
            TokenProgramError::InvalidAmount => EngineError::InvalidAmount,
            TokenProgramError::MathOverflow => EngineError::MathOverflow,
            other => EngineError::Program(other),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Serialization(e.to_string())
    }
}

impl From<anchor_lang::error::Error> for EngineError {
    fn from(e: anchor_lang::error::Error) -> Self {
        EngineError::Serialization(e.to_string())
    }
}
