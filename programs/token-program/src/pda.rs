//! Canonical addresses of every record the program owns.
//!
//! None of these addresses has a private key: writes to them can only be
//! authorized by this program signing with the same seeds.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::*;
use crate::error::TokenProgramError;
use crate::params::validate_name;

pub fn derive_maintainers(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MAINTAINERS_TAG], program_id)
}

pub fn derive_whitelist(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WHITELIST_TAG], program_id)
}

pub fn derive_config(
    program_id: &Pubkey,
    name: &str,
) -> std::result::Result<(Pubkey, u8), TokenProgramError> {
    derive_named(CONFIG_TAG, name, program_id)
}

pub fn derive_mint(
    program_id: &Pubkey,
    name: &str,
) -> std::result::Result<(Pubkey, u8), TokenProgramError> {
    derive_named(MINT_TAG, name, program_id)
}

/// Holder balances live at the associated token account of `(owner, mint)`.
pub fn derive_holder_balance(owner: &Pubkey, mint: &Pubkey, token_program_id: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program_id)
}

fn derive_named(
    tag: &[u8],
    name: &str,
    program_id: &Pubkey,
) -> std::result::Result<(Pubkey, u8), TokenProgramError> {
    validate_name(name)?;
    Pubkey::try_find_program_address(&[tag, name.as_bytes()], program_id)
        .ok_or(TokenProgramError::AddressDerivationFailed)
}
