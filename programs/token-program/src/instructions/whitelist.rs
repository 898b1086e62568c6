use crate::access::{authorize, Operation};
use crate::constants::*;
use crate::events::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateWhitelist<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [MAINTAINERS_TAG],
        bump = maintainers.bump,
    )]
    pub maintainers: Account<'info, Maintainers>,

    #[account(
        mut,
        seeds = [WHITELIST_TAG],
        bump = whitelist.bump,
    )]
    pub whitelist: Account<'info, WhitelistedUser>,
}

pub fn add_users(ctx: Context<UpdateWhitelist>, users: Vec<Pubkey>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    authorize(
        Operation::UpdateWhitelist,
        &authority,
        &ctx.accounts.maintainers,
        None,
        None,
    )?;

    let whitelist = &mut ctx.accounts.whitelist;
    whitelist.add_users(&users)?;

    emit!(WhitelistUpdated {
        authority,
        users: whitelist.users.clone(),
    });
    Ok(())
}

pub fn remove_users(ctx: Context<UpdateWhitelist>, users: Vec<Pubkey>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    authorize(
        Operation::UpdateWhitelist,
        &authority,
        &ctx.accounts.maintainers,
        None,
        None,
    )?;

    let whitelist = &mut ctx.accounts.whitelist;
    whitelist.remove_users(&users);

    emit!(WhitelistUpdated {
        authority,
        users: whitelist.users.clone(),
    });
    Ok(())
}
