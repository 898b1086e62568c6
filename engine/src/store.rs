//! Arena of program-owned accounts keyed by derived address.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, AccountSerialize};

use crate::error::EngineError;

/// Raw account contents as the ledger would hold them: discriminator plus
/// borsh body, tagged with the owning program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

#[derive(Debug, Default, Clone)]
pub struct AccountStore {
    accounts: BTreeMap<Pubkey, StoredAccount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.accounts.contains_key(address)
    }

    pub fn get(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.accounts.get(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pubkey, &StoredAccount)> {
        self.accounts.iter()
    }

    /// Returns `None` for an empty address. Data owned by another program is
    /// never deserialized.
    pub fn load<T: AccountDeserialize>(
        &self,
        address: &Pubkey,
        owner: &Pubkey,
    ) -> Result<Option<T>, EngineError> {
        let Some(account) = self.accounts.get(address) else {
            return Ok(None);
        };
        if account.owner != *owner {
            return Err(EngineError::AccountOwnerMismatch {
                address: *address,
                owner: account.owner,
            });
        }
        let mut data: &[u8] = &account.data;
        Ok(Some(T::try_deserialize(&mut data)?))
    }

    pub fn encode<T: AccountSerialize>(account: &T) -> Result<Vec<u8>, EngineError> {
        let mut data = Vec::new();
        account.try_serialize(&mut data)?;
        Ok(data)
    }

    /// Infallible write; callers encode first so that a failed encode leaves
    /// the arena untouched.
    pub fn insert(&mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, StoredAccount { owner, data });
    }
}
