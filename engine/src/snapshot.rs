//! JSON persistence of a [`TokenLifecycle`] backed by a [`MemoryLedger`].
//!
//! Keys are stored as base58 strings and account data as the raw bytes the
//! program would hold, discriminator included.

use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::ledger::{HolderBalance, MemoryLedger, TokenLedger};
use crate::lifecycle::TokenLifecycle;
use crate::store::AccountStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub program_id: String,
    pub token_program_id: String,
    pub accounts: Vec<AccountEntry>,
    pub mints: Vec<MintEntry>,
    pub holders: Vec<HolderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub address: String,
    pub owner: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintEntry {
    pub address: String,
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: String,
    pub permanent_delegate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderEntry {
    pub address: String,
    pub owner: String,
    pub mint: String,
    pub amount: u64,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TokenLifecycle<MemoryLedger> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            program_id: self.program_id().to_string(),
            token_program_id: self.token_program_id().to_string(),
            accounts: self
                .store()
                .iter()
                .map(|(address, account)| AccountEntry {
                    address: address.to_string(),
                    owner: account.owner.to_string(),
                    data: account.data.clone(),
                })
                .collect(),
            mints: self
                .ledger()
                .mints()
                .map(|(address, ledger)| MintEntry {
                    address: address.to_string(),
                    supply: ledger.supply,
                    decimals: ledger.decimals,
                    mint_authority: ledger.mint_authority.to_string(),
                    permanent_delegate: ledger.permanent_delegate.to_string(),
                })
                .collect(),
            holders: self
                .ledger()
                .holders()
                .map(|(address, holder)| HolderEntry {
                    address: address.to_string(),
                    owner: holder.owner.to_string(),
                    mint: holder.mint.to_string(),
                    amount: holder.amount,
                })
                .collect(),
        }
    }

    /// Rebuilds the lifecycle a snapshot was taken from. The event log starts
    /// empty.
    pub fn restore(snapshot: &Snapshot) -> Result<Self, EngineError> {
        let mut store = AccountStore::new();
        for entry in &snapshot.accounts {
            store.insert(
                key(&entry.address)?,
                key(&entry.owner)?,
                entry.data.clone(),
            );
        }

        let mints = snapshot
            .mints
            .iter()
            .map(|entry| {
                Ok((
                    key(&entry.address)?,
                    TokenLedger {
                        supply: entry.supply,
                        decimals: entry.decimals,
                        mint_authority: key(&entry.mint_authority)?,
                        permanent_delegate: key(&entry.permanent_delegate)?,
                    },
                ))
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        let holders = snapshot
            .holders
            .iter()
            .map(|entry| {
                Ok((
                    key(&entry.address)?,
                    HolderBalance {
                        owner: key(&entry.owner)?,
                        mint: key(&entry.mint)?,
                        amount: entry.amount,
                    },
                ))
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(Self::from_parts(
            key(&snapshot.program_id)?,
            key(&snapshot.token_program_id)?,
            store,
            MemoryLedger::from_parts(mints, holders),
        ))
    }
}

fn key(value: &str) -> Result<Pubkey, EngineError> {
    Pubkey::from_str(value)
        .map_err(|e| EngineError::Serialization(format!("invalid key `{value}`: {e}")))
}
