use anchor_lang::prelude::*;

#[event]
pub struct InitEvent {
    pub admin: Pubkey,
    pub sub_admin: Pubkey,
}

#[event]
pub struct CreateTokenEvent {
    /// Token name
    pub name: String,
    pub mint: Pubkey,
}

#[event]
pub struct MintEvent {
    pub token: String,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BurnEvent {
    pub token: String,
    pub from: Pubkey,
    pub amount: u64,
}

#[event]
pub struct SubAdminsUpdated {
    pub admin: Pubkey,
    pub sub_admins: Vec<Pubkey>,
}

#[event]
pub struct WhitelistUpdated {
    pub authority: Pubkey,
    pub users: Vec<Pubkey>,
}
