//! Host-side engine for the token program.
//!
//! [`TokenLifecycle`] runs the same instructions as the on-ledger program
//! against an arena of program-owned accounts ([`AccountStore`]) and an
//! injected [`BalancePrimitive`]. Each operation checks every precondition
//! before its single mutating step, so a failed call leaves no trace.

pub mod config;
pub mod error;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod math;
pub mod snapshot;
pub mod store;

pub use config::EngineConfig;
pub use error::EngineError;
pub use events::LifecycleEvent;
pub use ledger::{BalancePrimitive, HolderBalance, MemoryLedger, TokenLedger};
pub use lifecycle::TokenLifecycle;
pub use snapshot::Snapshot;
pub use store::{AccountStore, StoredAccount};

pub use token_program::access::Operation;
pub use token_program::state::{Maintainers, TokenConfig, WhitelistedUser};
pub use token_program::{CreateTokenParams, TokenParams};
