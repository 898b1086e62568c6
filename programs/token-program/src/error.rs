use anchor_lang::prelude::*;

#[error_code]
pub enum TokenProgramError {
    #[msg("Global state is already initialized")]
    AlreadyInitialized,
    #[msg("Not authorized for this action")]
    Unauthorized,
    #[msg("A token with this name already exists")]
    TokenAlreadyExists,
    #[msg("No token is registered under this name")]
    TokenNotFound,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Token name must not be empty")]
    EmptyName,
    #[msg("Name too long (max 32 bytes)")]
    NameTooLong,
    #[msg("Symbol too long (max 10 bytes)")]
    SymbolTooLong,
    #[msg("URI too long (max 200 bytes)")]
    UriTooLong,
    #[msg("Sub-admin list is full")]
    TooManySubAdmins,
    #[msg("Whitelist is full")]
    WhitelistFull,
    #[msg("The admin cannot be removed from the sub-admin list")]
    CannotRemoveAdmin,
    #[msg("Token account does not belong to this token")]
    InvalidTokenAccount,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("No valid program address exists for these seeds")]
    AddressDerivationFailed,
}
