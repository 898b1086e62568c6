use std::fmt;

use anchor_lang::prelude::Pubkey;

/// Host-side mirror of the events the program emits, one per committed
/// instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Initialized {
        admin: Pubkey,
        sub_admin: Pubkey,
    },
    TokenCreated {
        name: String,
        mint: Pubkey,
    },
    Minted {
        token: String,
        to: Pubkey,
        amount: u64,
    },
    Burned {
        token: String,
        from: Pubkey,
        amount: u64,
    },
    SubAdminsUpdated {
        admin: Pubkey,
        sub_admins: Vec<Pubkey>,
    },
    WhitelistUpdated {
        authority: Pubkey,
        users: Vec<Pubkey>,
    },
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::Initialized { admin, .. } => write!(f, "initialized by {admin}"),
            LifecycleEvent::TokenCreated { name, mint } => write!(f, "created {name} at {mint}"),
            LifecycleEvent::Minted { token, to, amount } => {
                write!(f, "minted {amount} {token} to {to}")
            }
            LifecycleEvent::Burned { token, from, amount } => {
                write!(f, "burned {amount} {token} from {from}")
            }
            LifecycleEvent::SubAdminsUpdated { sub_admins, .. } => {
                write!(f, "sub-admins now {}", sub_admins.len())
            }
            LifecycleEvent::WhitelistUpdated { users, .. } => {
                write!(f, "whitelist now {}", users.len())
            }
        }
    }
}
