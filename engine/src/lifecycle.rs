use anchor_lang::prelude::Pubkey;
use tracing::{debug, info, warn};

use token_program::access::{authorize, Operation};
use token_program::error::TokenProgramError;
use token_program::pda::{
    derive_config, derive_holder_balance, derive_maintainers, derive_mint, derive_whitelist,
};
use token_program::state::{Maintainers, TokenConfig, WhitelistedUser};
use token_program::{CreateTokenParams, TokenParams};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::LifecycleEvent;
use crate::ledger::{BalancePrimitive, MemoryLedger};
use crate::store::AccountStore;

/// Executes the program's instructions against an [`AccountStore`] and a
/// [`BalancePrimitive`].
///
/// Every operation resolves its addresses, loads state and authorizes the
/// signer before touching anything. The single mutating step is either a
/// store write of already-encoded bytes or one call into the balance
/// primitive, so a rejected operation leaves the lifecycle unchanged.
#[derive(Debug)]
pub struct TokenLifecycle<L: BalancePrimitive = MemoryLedger> {
    program_id: Pubkey,
    token_program_id: Pubkey,
    store: AccountStore,
    ledger: L,
    events: Vec<LifecycleEvent>,
}

impl TokenLifecycle<MemoryLedger> {
    pub fn new(program_id: Pubkey, token_program_id: Pubkey) -> Self {
        Self::with_ledger(program_id, token_program_id, MemoryLedger::new())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::new(config.program_id()?, config.token_program_id()?))
    }
}

impl<L: BalancePrimitive> TokenLifecycle<L> {
    pub fn with_ledger(program_id: Pubkey, token_program_id: Pubkey, ledger: L) -> Self {
        Self::from_parts(program_id, token_program_id, AccountStore::new(), ledger)
    }

    pub(crate) fn from_parts(
        program_id: Pubkey,
        token_program_id: Pubkey,
        store: AccountStore,
        ledger: L,
    ) -> Self {
        Self {
            program_id,
            token_program_id,
            store,
            ledger,
            events: Vec::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn token_program_id(&self) -> &Pubkey {
        &self.token_program_id
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Events of operations committed since this lifecycle was built.
    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    pub fn is_initialized(&self) -> bool {
        let (address, _) = derive_maintainers(&self.program_id);
        self.store.contains(&address)
    }

    pub fn maintainers(&self) -> Result<Maintainers, EngineError> {
        let (address, _) = derive_maintainers(&self.program_id);
        self.store
            .load::<Maintainers>(&address, &self.program_id)?
            .filter(Maintainers::is_initialized)
            .ok_or(EngineError::NotInitialized)
    }

    pub fn whitelist(&self) -> Result<WhitelistedUser, EngineError> {
        let (address, _) = derive_whitelist(&self.program_id);
        self.store
            .load(&address, &self.program_id)?
            .ok_or(EngineError::NotInitialized)
    }

    pub fn token_config(&self, name: &str) -> Result<TokenConfig, EngineError> {
        let (address, _) = derive_config(&self.program_id, name)?;
        self.store
            .load::<TokenConfig>(&address, &self.program_id)?
            .filter(TokenConfig::is_initialized)
            .ok_or_else(|| EngineError::TokenNotFound(name.to_string()))
    }

    pub fn supply(&self, name: &str) -> Result<u64, EngineError> {
        let config = self.token_config(name)?;
        self.ledger
            .ledger(&config.mint)
            .map(|ledger| ledger.supply)
            .ok_or(EngineError::LedgerNotFound(config.mint))
    }

    /// Address of `owner`'s balance record for token `name`.
    pub fn holder_account(&self, name: &str, owner: &Pubkey) -> Result<Pubkey, EngineError> {
        let config = self.token_config(name)?;
        Ok(derive_holder_balance(owner, &config.mint, &self.token_program_id))
    }

    /// A holder that was never minted to has a zero balance.
    pub fn balance_of(&self, name: &str, owner: &Pubkey) -> Result<u64, EngineError> {
        let account = self.holder_account(name, owner)?;
        Ok(self
            .ledger
            .holder(&account)
            .map_or(0, |holder| holder.amount))
    }

    pub fn init(
        &mut self,
        signer: &Pubkey,
        whitelisted_users: &[Pubkey],
    ) -> Result<(), EngineError> {
        let (maintainers_address, maintainers_bump) = derive_maintainers(&self.program_id);
        let (whitelist_address, whitelist_bump) = derive_whitelist(&self.program_id);

        if self.store.contains(&maintainers_address) {
            warn!("Rejected init by {}: registry already exists", signer);
            return Err(EngineError::AlreadyInitialized);
        }
        // An all-zero admin reads back as an uninitialized registry.
        if *signer == Pubkey::default() {
            warn!("Rejected init by the default key");
            return Err(EngineError::InvalidAuthority(*signer));
        }

        let maintainers = Maintainers::new(*signer, maintainers_bump);
        let whitelist = WhitelistedUser::new(whitelisted_users, whitelist_bump)?;
        let maintainers_data = AccountStore::encode(&maintainers)?;
        let whitelist_data = AccountStore::encode(&whitelist)?;

        self.store
            .insert(maintainers_address, self.program_id, maintainers_data);
        self.store
            .insert(whitelist_address, self.program_id, whitelist_data);

        info!(
            "Initialized: admin={}, whitelisted={}",
            signer,
            whitelist.users.len()
        );
        self.events.push(LifecycleEvent::Initialized {
            admin: *signer,
            sub_admin: *signer,
        });
        Ok(())
    }

    /// Returns the address of the new token's mint.
    pub fn create_token(
        &mut self,
        signer: &Pubkey,
        params: &CreateTokenParams,
    ) -> Result<Pubkey, EngineError> {
        params.validate()?;
        let maintainers = self.maintainers()?;
        self.authorize(Operation::CreateToken, signer, &maintainers, None, None)?;

        let (config_address, config_bump) = derive_config(&self.program_id, &params.name)?;
        let (mint, mint_bump) = derive_mint(&self.program_id, &params.name)?;
        debug!("Token {} resolves to config {} and mint {}", params.name, config_address, mint);

        if self.store.contains(&config_address) || self.ledger.ledger(&mint).is_some() {
            warn!("Rejected create of {}: name already taken", params.name);
            return Err(EngineError::TokenAlreadyExists(params.name.clone()));
        }

        let config = TokenConfig {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            decimals: params.decimals,
            mint,
            mint_bump,
            bump: config_bump,
        };
        let data = AccountStore::encode(&config)?;

        // The mint address is its own authority and permanent delegate.
        self.ledger.create_ledger(&mint, params.decimals, &mint)?;
        self.store.insert(config_address, self.program_id, data);

        info!(
            "Created token {}: mint={}, decimals={}",
            params.name, mint, params.decimals
        );
        self.events.push(LifecycleEvent::TokenCreated {
            name: params.name.clone(),
            mint,
        });
        Ok(mint)
    }

    /// Returns the recipient's balance record, created if this is its first mint.
    pub fn mint_token(
        &mut self,
        signer: &Pubkey,
        params: &TokenParams,
        recipient: &Pubkey,
    ) -> Result<Pubkey, EngineError> {
        params.validate()?;
        let maintainers = self.maintainers()?;
        self.authorize(Operation::MintToken, signer, &maintainers, None, None)?;

        let config = self.token_config(&params.name)?;
        let account = derive_holder_balance(recipient, &config.mint, &self.token_program_id);

        self.ledger
            .mint_to(&config.mint, &account, recipient, params.amount, &config.mint)?;

        info!(
            "Minted {} {} to {} (account {})",
            params.amount, params.name, recipient, account
        );
        self.events.push(LifecycleEvent::Minted {
            token: params.name.clone(),
            to: account,
            amount: params.amount,
        });
        Ok(account)
    }

    /// Burns from `holder`'s balance. `holder` must be the signer unless the
    /// signer is a maintainer and `holder` is whitelisted.
    pub fn burn_token(
        &mut self,
        signer: &Pubkey,
        params: &TokenParams,
        holder: &Pubkey,
    ) -> Result<(), EngineError> {
        params.validate()?;
        let maintainers = self.maintainers()?;
        let whitelist = self.whitelist()?;
        self.authorize(
            Operation::BurnToken,
            signer,
            &maintainers,
            Some(&whitelist),
            Some(holder),
        )?;

        let config = self.token_config(&params.name)?;
        let account = self.checked_balance(&config, holder, params.amount)?;
        let authority = if holder == signer { *signer } else { config.mint };

        self.ledger
            .burn(&config.mint, &account, params.amount, &authority)?;

        info!(
            "Burned {} {} from {} (signed by {})",
            params.amount, params.name, holder, signer
        );
        self.events.push(LifecycleEvent::Burned {
            token: params.name.clone(),
            from: account,
            amount: params.amount,
        });
        Ok(())
    }

    pub fn burn_token_from(
        &mut self,
        signer: &Pubkey,
        params: &TokenParams,
        holder: &Pubkey,
    ) -> Result<(), EngineError> {
        params.validate()?;
        let maintainers = self.maintainers()?;
        self.authorize(Operation::BurnTokenFrom, signer, &maintainers, None, None)?;

        let config = self.token_config(&params.name)?;
        let account = self.checked_balance(&config, holder, params.amount)?;

        self.ledger
            .burn(&config.mint, &account, params.amount, &config.mint)?;

        info!(
            "Burned {} {} from {} on behalf of {}",
            params.amount, params.name, holder, signer
        );
        self.events.push(LifecycleEvent::Burned {
            token: params.name.clone(),
            from: account,
            amount: params.amount,
        });
        Ok(())
    }

    /// Returns the keys that were not already sub-admins.
    pub fn add_sub_admins(
        &mut self,
        signer: &Pubkey,
        keys: &[Pubkey],
    ) -> Result<Vec<Pubkey>, EngineError> {
        let mut maintainers = self.maintainers()?;
        self.authorize(Operation::UpdateSubAdmins, signer, &maintainers, None, None)?;

        let added = maintainers.add_sub_admins(keys)?;
        self.commit_maintainers(signer, maintainers)?;
        Ok(added)
    }

    pub fn remove_sub_admins(
        &mut self,
        signer: &Pubkey,
        keys: &[Pubkey],
    ) -> Result<Vec<Pubkey>, EngineError> {
        let mut maintainers = self.maintainers()?;
        self.authorize(Operation::UpdateSubAdmins, signer, &maintainers, None, None)?;

        let removed = maintainers.remove_sub_admins(keys)?;
        self.commit_maintainers(signer, maintainers)?;
        Ok(removed)
    }

    pub fn add_whitelisted_users(
        &mut self,
        signer: &Pubkey,
        users: &[Pubkey],
    ) -> Result<Vec<Pubkey>, EngineError> {
        let maintainers = self.maintainers()?;
        let mut whitelist = self.whitelist()?;
        self.authorize(Operation::UpdateWhitelist, signer, &maintainers, None, None)?;

        let added = whitelist.add_users(users)?;
        self.commit_whitelist(signer, whitelist)?;
        Ok(added)
    }

    pub fn remove_whitelisted_users(
        &mut self,
        signer: &Pubkey,
        users: &[Pubkey],
    ) -> Result<Vec<Pubkey>, EngineError> {
        let maintainers = self.maintainers()?;
        let mut whitelist = self.whitelist()?;
        self.authorize(Operation::UpdateWhitelist, signer, &maintainers, None, None)?;

        let removed = whitelist.remove_users(users);
        self.commit_whitelist(signer, whitelist)?;
        Ok(removed)
    }

    fn authorize(
        &self,
        operation: Operation,
        signer: &Pubkey,
        maintainers: &Maintainers,
        whitelist: Option<&WhitelistedUser>,
        holder: Option<&Pubkey>,
    ) -> Result<(), EngineError> {
        match authorize(operation, signer, maintainers, whitelist, holder) {
            Ok(()) => {
                debug!("{} authorized for {:?}", signer, operation);
                Ok(())
            }
            Err(TokenProgramError::Unauthorized) => {
                warn!("Rejected {:?} signed by {}", operation, signer);
                Err(EngineError::Unauthorized {
                    signer: *signer,
                    operation,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves `holder`'s balance record and checks it covers `amount`.
    fn checked_balance(
        &self,
        config: &TokenConfig,
        holder: &Pubkey,
        amount: u64,
    ) -> Result<Pubkey, EngineError> {
        let account = derive_holder_balance(holder, &config.mint, &self.token_program_id);
        let available = self.ledger.holder(&account).map_or(0, |h| h.amount);
        if available < amount {
            warn!(
                "Rejected burn of {} {}: {} holds {}",
                amount, config.name, holder, available
            );
            return Err(EngineError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        Ok(account)
    }

    fn commit_maintainers(
        &mut self,
        signer: &Pubkey,
        maintainers: Maintainers,
    ) -> Result<(), EngineError> {
        let (address, _) = derive_maintainers(&self.program_id);
        let data = AccountStore::encode(&maintainers)?;
        self.store.insert(address, self.program_id, data);

        info!("Sub-admins updated by {}: {}", signer, maintainers.sub_admins.len());
        self.events.push(LifecycleEvent::SubAdminsUpdated {
            admin: *signer,
            sub_admins: maintainers.sub_admins,
        });
        Ok(())
    }

    fn commit_whitelist(
        &mut self,
        signer: &Pubkey,
        whitelist: WhitelistedUser,
    ) -> Result<(), EngineError> {
        let (address, _) = derive_whitelist(&self.program_id);
        let data = AccountStore::encode(&whitelist)?;
        self.store.insert(address, self.program_id, data);

        info!("Whitelist updated by {}: {}", signer, whitelist.users.len());
        self.events.push(LifecycleEvent::WhitelistUpdated {
            authority: *signer,
            users: whitelist.users,
        });
        Ok(())
    }
}
