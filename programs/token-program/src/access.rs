//! Role checks shared by the instruction handlers and the host-side engine.
//!
//! Each operation names the permission it needs in [`Operation::required_permission`];
//! [`authorize`] evaluates that permission against the signer's capabilities.

use anchor_lang::prelude::*;

use crate::error::TokenProgramError;
use crate::state::{Maintainers, WhitelistedUser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Init,
    CreateToken,
    MintToken,
    BurnToken,
    BurnTokenFrom,
    UpdateSubAdmins,
    UpdateWhitelist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    /// First-call-only; guarded by the registry presence check instead of a role.
    Anyone,
    Admin,
    /// Admin or sub-admin.
    Maintainer,
    /// The holder of the balance, or a maintainer acting on a whitelisted vault.
    BalanceOwner,
}

impl Operation {
    pub const fn required_permission(self) -> Permission {
        match self {
            Operation::Init => Permission::Anyone,
            Operation::CreateToken | Operation::UpdateSubAdmins => Permission::Admin,
            Operation::MintToken | Operation::BurnTokenFrom | Operation::UpdateWhitelist => {
                Permission::Maintainer
            }
            Operation::BurnToken => Permission::BalanceOwner,
        }
    }
}

/// What a single principal is allowed to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub admin: bool,
    pub sub_admin: bool,
    pub whitelisted: bool,
}

impl Capabilities {
    pub fn of(
        key: &Pubkey,
        maintainers: &Maintainers,
        whitelist: Option<&WhitelistedUser>,
    ) -> Self {
        Self {
            admin: maintainers.is_admin(key),
            sub_admin: maintainers.is_sub_admin_or_admin(key),
            whitelisted: whitelist.is_some_and(|list| list.contains(key)),
        }
    }

    pub fn is_maintainer(&self) -> bool {
        self.admin || self.sub_admin
    }
}

/// `holder` is the owner of the balance an operation touches, when it touches one.
pub fn authorize(
    operation: Operation,
    signer: &Pubkey,
    maintainers: &Maintainers,
    whitelist: Option<&WhitelistedUser>,
    holder: Option<&Pubkey>,
) -> std::result::Result<(), TokenProgramError> {
    let caps = Capabilities::of(signer, maintainers, whitelist);
    let allowed = match operation.required_permission() {
        Permission::Anyone => true,
        Permission::Admin => caps.admin,
        Permission::Maintainer => caps.is_maintainer(),
        Permission::BalanceOwner => match holder {
            Some(holder) if holder == signer => true,
            Some(holder) => {
                caps.is_maintainer()
                    && Capabilities::of(holder, maintainers, whitelist).whitelisted
            }
            None => false,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(TokenProgramError::Unauthorized)
    }
}
