use crate::constants::*;
use crate::error::TokenProgramError;
use crate::events::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        constraint = authority.key() != Pubkey::default() @ TokenProgramError::Unauthorized
    )]
    pub authority: Signer<'info>,

    // A repeated init loads the existing registry and trips the presence check.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Maintainers::INIT_SPACE,
        seeds = [MAINTAINERS_TAG],
        bump,
        constraint = !maintainers.is_initialized() @ TokenProgramError::AlreadyInitialized
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + WhitelistedUser::INIT_SPACE,
        seeds = [WHITELIST_TAG],
        bump
    )]
    pub whitelist: Box<Account<'info, WhitelistedUser>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, whitelisted_users: Vec<Pubkey>) -> Result<()> {
    let admin = ctx.accounts.authority.key();

    ctx.accounts
        .maintainers
        .set_inner(Maintainers::new(admin, ctx.bumps.maintainers));
    ctx.accounts.whitelist.set_inner(WhitelistedUser::new(
        &whitelisted_users,
        ctx.bumps.whitelist,
    )?);

    msg!("Initialized maintainers with admin {}", admin);

    emit!(InitEvent {
        admin,
        sub_admin: admin,
    });

    Ok(())
}
