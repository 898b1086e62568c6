use anchor_lang::prelude::*;

pub mod access;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod params;
pub mod pda;
pub mod state;

use instructions::*;
pub use params::{CreateTokenParams, TokenParams};

declare_id!("D5W4yH27EwaATTYjaLLidx6sLRJ9AsXH6kZCSGvoritn");

#[program]
pub mod token_program {
    use super::*;

    pub fn init(ctx: Context<Initialize>, whitelisted_users: Vec<Pubkey>) -> Result<()> {
        instructions::initialize::handler(ctx, whitelisted_users)
    }

    pub fn create(ctx: Context<CreateToken>, params: CreateTokenParams) -> Result<()> {
        instructions::create_token::handler(ctx, params)
    }

    pub fn mint_token(ctx: Context<MintToken>, params: TokenParams) -> Result<()> {
        instructions::mint::handler(ctx, params)
    }

    pub fn burn_token(ctx: Context<BurnToken>, params: TokenParams) -> Result<()> {
        instructions::burn::handler(ctx, params)
    }

    pub fn burn_token_from(ctx: Context<BurnTokenFrom>, params: TokenParams) -> Result<()> {
        instructions::burn_from::handler(ctx, params)
    }

    pub fn add_sub_admins(ctx: Context<UpdateSubAdmins>, keys: Vec<Pubkey>) -> Result<()> {
        instructions::maintainers::add_sub_admins(ctx, keys)
    }

    pub fn remove_sub_admins(ctx: Context<UpdateSubAdmins>, keys: Vec<Pubkey>) -> Result<()> {
        instructions::maintainers::remove_sub_admins(ctx, keys)
    }

    pub fn add_whitelisted_users(ctx: Context<UpdateWhitelist>, users: Vec<Pubkey>) -> Result<()> {
        instructions::whitelist::add_users(ctx, users)
    }

    pub fn remove_whitelisted_users(
        ctx: Context<UpdateWhitelist>,
        users: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::whitelist::remove_users(ctx, users)
    }
}
