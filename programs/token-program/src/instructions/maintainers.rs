use crate::access::{authorize, Operation};
use crate::constants::*;
use crate::events::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateSubAdmins<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [MAINTAINERS_TAG],
        bump = maintainers.bump,
    )]
    pub maintainers: Account<'info, Maintainers>,
}

pub fn add_sub_admins(ctx: Context<UpdateSubAdmins>, keys: Vec<Pubkey>) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    authorize(
        Operation::UpdateSubAdmins,
        &admin,
        &ctx.accounts.maintainers,
        None,
        None,
    )?;

    let maintainers = &mut ctx.accounts.maintainers;

    let added = maintainers.add_sub_admins(&keys)?;
    msg!("Added {} sub-admins", added.len());

    emit!(SubAdminsUpdated {
        admin,
        sub_admins: maintainers.sub_admins.clone(),
    });
    Ok(())
}

pub fn remove_sub_admins(ctx: Context<UpdateSubAdmins>, keys: Vec<Pubkey>) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    authorize(
        Operation::UpdateSubAdmins,
        &admin,
        &ctx.accounts.maintainers,
        None,
        None,
    )?;

    let maintainers = &mut ctx.accounts.maintainers;

    let removed = maintainers.remove_sub_admins(&keys)?;
    msg!("Removed {} sub-admins", removed.len());

    emit!(SubAdminsUpdated {
        admin,
        sub_admins: maintainers.sub_admins.clone(),
    });
    Ok(())
}
