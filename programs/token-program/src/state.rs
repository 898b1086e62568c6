use anchor_lang::prelude::*;

use crate::constants::{MAX_SUB_ADMINS, MAX_WHITELISTED_USERS};
use crate::error::TokenProgramError;

/// Root admin plus the bounded set of sub-admins allowed to mint and burn-from.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Maintainers {
    pub admin: Pubkey,
    #[max_len(10)]
    pub sub_admins: Vec<Pubkey>,
    pub bump: u8,
}

impl Maintainers {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            sub_admins: vec![admin],
            bump,
        }
    }

    /// A freshly allocated registry is all zeroes; only `init` writes a real admin.
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.is_initialized() && self.admin == *key
    }

    pub fn is_sub_admin_or_admin(&self, key: &Pubkey) -> bool {
        self.is_admin(key) || (self.is_initialized() && self.sub_admins.contains(key))
    }

    /// Appends every key not already present. Nothing is written when the
    /// result would exceed the bound.
    pub fn add_sub_admins(
        &mut self,
        keys: &[Pubkey],
    ) -> std::result::Result<Vec<Pubkey>, TokenProgramError> {
        let added = missing_from(&self.sub_admins, keys);
        if self.sub_admins.len() + added.len() > MAX_SUB_ADMINS {
            return Err(TokenProgramError::TooManySubAdmins);
        }
        self.sub_admins.extend_from_slice(&added);
        Ok(added)
    }

    pub fn remove_sub_admins(
        &mut self,
        keys: &[Pubkey],
    ) -> std::result::Result<Vec<Pubkey>, TokenProgramError> {
        if keys.contains(&self.admin) {
            return Err(TokenProgramError::CannotRemoveAdmin);
        }
        Ok(remove_present(&mut self.sub_admins, keys))
    }
}

/// Holder addresses (vaults) that maintainers may burn from through `burn_token`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct WhitelistedUser {
    #[max_len(50)]
    pub users: Vec<Pubkey>,
    pub bump: u8,
}

impl WhitelistedUser {
    pub fn new(users: &[Pubkey], bump: u8) -> std::result::Result<Self, TokenProgramError> {
        let mut whitelist = Self {
            users: Vec::new(),
            bump,
        };
        whitelist.add_users(users)?;
        Ok(whitelist)
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.users.contains(key)
    }

    pub fn add_users(
        &mut self,
        keys: &[Pubkey],
    ) -> std::result::Result<Vec<Pubkey>, TokenProgramError> {
        let added = missing_from(&self.users, keys);
        if self.users.len() + added.len() > MAX_WHITELISTED_USERS {
            return Err(TokenProgramError::WhitelistFull);
        }
        self.users.extend_from_slice(&added);
        Ok(added)
    }

    pub fn remove_users(&mut self, keys: &[Pubkey]) -> Vec<Pubkey> {
        remove_present(&mut self.users, keys)
    }
}

/// Binds a token name to its metadata and to the mint derived from that name.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    #[max_len(200)]
    pub uri: String,
    pub decimals: u8,
    pub mint: Pubkey,
    pub mint_bump: u8,
    pub bump: u8,
}

impl TokenConfig {
    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }
}

fn missing_from(existing: &[Pubkey], keys: &[Pubkey]) -> Vec<Pubkey> {
    let mut added: Vec<Pubkey> = Vec::new();
    for key in keys {
        if !existing.contains(key) && !added.contains(key) {
            added.push(*key);
        }
    }
    added
}

fn remove_present(existing: &mut Vec<Pubkey>, keys: &[Pubkey]) -> Vec<Pubkey> {
    let removed: Vec<Pubkey> = existing
        .iter()
        .filter(|key| keys.contains(key))
        .copied()
        .collect();
    existing.retain(|key| !keys.contains(key));
    removed
}
