//! The token-balance primitive the lifecycle delegates to.
//!
//! On the ledger this is Token-2022; [`MemoryLedger`] reproduces the parts
//! the program relies on: mint authority, permanent delegate, checked supply
//! and per-holder balances created on first mint.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;
use tracing::debug;

use crate::error::EngineError;
use crate::math::{safe_add, safe_sub, update_supply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLedger {
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: Pubkey,
    /// May burn from any holder without the holder's signature.
    pub permanent_delegate: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderBalance {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

pub trait BalancePrimitive {
    /// Creates a ledger with zero supply whose mint authority and permanent
    /// delegate are both `authority`.
    fn create_ledger(
        &mut self,
        mint: &Pubkey,
        decimals: u8,
        authority: &Pubkey,
    ) -> Result<(), EngineError>;

    /// Credits `account`, creating it for `owner` if absent.
    fn mint_to(
        &mut self,
        mint: &Pubkey,
        account: &Pubkey,
        owner: &Pubkey,
        amount: u64,
        authority: &Pubkey,
    ) -> Result<(), EngineError>;

    /// `authority` must be the holder or the ledger's permanent delegate.
    fn burn(
        &mut self,
        mint: &Pubkey,
        account: &Pubkey,
        amount: u64,
        authority: &Pubkey,
    ) -> Result<(), EngineError>;

    fn ledger(&self, mint: &Pubkey) -> Option<&TokenLedger>;

    fn holder(&self, account: &Pubkey) -> Option<&HolderBalance>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    mints: BTreeMap<Pubkey, TokenLedger>,
    holders: BTreeMap<Pubkey, HolderBalance>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        mints: impl IntoIterator<Item = (Pubkey, TokenLedger)>,
        holders: impl IntoIterator<Item = (Pubkey, HolderBalance)>,
    ) -> Self {
        Self {
            mints: mints.into_iter().collect(),
            holders: holders.into_iter().collect(),
        }
    }

    pub fn mints(&self) -> impl Iterator<Item = (&Pubkey, &TokenLedger)> {
        self.mints.iter()
    }

    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, &HolderBalance)> {
        self.holders.iter()
    }

    fn existing(&self, mint: &Pubkey) -> Result<&TokenLedger, EngineError> {
        self.mints.get(mint).ok_or(EngineError::LedgerNotFound(*mint))
    }
}

impl BalancePrimitive for MemoryLedger {
    fn create_ledger(
        &mut self,
        mint: &Pubkey,
        decimals: u8,
        authority: &Pubkey,
    ) -> Result<(), EngineError> {
        if self.mints.contains_key(mint) {
            return Err(EngineError::LedgerExists(*mint));
        }
        self.mints.insert(
            *mint,
            TokenLedger {
                supply: 0,
                decimals,
                mint_authority: *authority,
                permanent_delegate: *authority,
            },
        );
        debug!("Ledger created for {} with {} decimals", mint, decimals);
        Ok(())
    }

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        account: &Pubkey,
        owner: &Pubkey,
        amount: u64,
        authority: &Pubkey,
    ) -> Result<(), EngineError> {
        let ledger = self.existing(mint)?;
        if ledger.mint_authority != *authority {
            return Err(EngineError::InvalidAuthority(*authority));
        }
        let supply = update_supply(ledger.supply, amount, true)?;

        let balance = match self.holders.get(account) {
            Some(holder) if holder.mint != *mint || holder.owner != *owner => {
                return Err(EngineError::InvalidTokenAccount(*account));
            }
            Some(holder) => safe_add(holder.amount, amount)?,
            None => amount,
        };

        if let Some(ledger) = self.mints.get_mut(mint) {
            ledger.supply = supply;
        }
        self.holders.insert(
            *account,
            HolderBalance {
                owner: *owner,
                mint: *mint,
                amount: balance,
            },
        );
        Ok(())
    }

    fn burn(
        &mut self,
        mint: &Pubkey,
        account: &Pubkey,
        amount: u64,
        authority: &Pubkey,
    ) -> Result<(), EngineError> {
        let ledger = self.existing(mint)?;
        let Some(holder) = self.holders.get(account) else {
            return Err(EngineError::InsufficientBalance {
                required: amount,
                available: 0,
            });
        };
        if holder.mint != *mint {
            return Err(EngineError::InvalidTokenAccount(*account));
        }
        if holder.owner != *authority && ledger.permanent_delegate != *authority {
            return Err(EngineError::InvalidAuthority(*authority));
        }
        if holder.amount < amount {
            return Err(EngineError::InsufficientBalance {
                required: amount,
                available: holder.amount,
            });
        }
        let balance = safe_sub(holder.amount, amount)?;
        let supply = update_supply(ledger.supply, amount, false)?;

        if let Some(ledger) = self.mints.get_mut(mint) {
            ledger.supply = supply;
        }
        if let Some(holder) = self.holders.get_mut(account) {
            holder.amount = balance;
        }
        Ok(())
    }

    fn ledger(&self, mint: &Pubkey) -> Option<&TokenLedger> {
        self.mints.get(mint)
    }

    fn holder(&self, account: &Pubkey) -> Option<&HolderBalance> {
        self.holders.get(account)
    }
}
