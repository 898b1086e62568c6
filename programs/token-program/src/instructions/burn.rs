use crate::access::{authorize, Operation};
use crate::constants::*;
use crate::error::TokenProgramError;
use crate::events::*;
use crate::params::TokenParams;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_2022::{self, Burn, Token2022};
use anchor_spl::token_interface::{Mint, TokenAccount};

#[derive(Accounts)]
#[instruction(params: TokenParams)]
pub struct BurnToken<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [MAINTAINERS_TAG],
        bump = maintainers.bump,
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    #[account(
        seeds = [WHITELIST_TAG],
        bump = whitelist.bump,
    )]
    pub whitelist: Box<Account<'info, WhitelistedUser>>,

    #[account(
        seeds = [CONFIG_TAG, params.name.as_bytes()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, TokenConfig>>,

    #[account(
        mut,
        address = config.mint @ TokenProgramError::TokenNotFound,
        mint::token_program = token_program,
    )]
    pub mint_account: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::token_program = token_program,
        constraint = from.mint == mint_account.key() @ TokenProgramError::InvalidTokenAccount,
    )]
    pub from: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Program<'info, Token2022>,
}

pub fn handler(ctx: Context<BurnToken>, params: TokenParams) -> Result<()> {
    params.validate()?;

    let signer_key = ctx.accounts.authority.key();
    let holder = ctx.accounts.from.owner;
    let whitelist: &WhitelistedUser = &ctx.accounts.whitelist;
    authorize(
        Operation::BurnToken,
        &signer_key,
        &ctx.accounts.maintainers,
        Some(whitelist),
        Some(&holder),
    )?;
    require!(
        ctx.accounts.from.amount >= params.amount,
        TokenProgramError::InsufficientBalance
    );

    let mint_bump = [ctx.accounts.config.mint_bump];
    let mint_seeds: &[&[u8]] = &[MINT_TAG, params.name.as_bytes(), &mint_bump];
    let signer = &[mint_seeds];

    if holder == signer_key {
        let cpi_accounts = Burn {
            mint: ctx.accounts.mint_account.to_account_info(),
            from: ctx.accounts.from.to_account_info(),
            authority: ctx.accounts.authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token_2022::burn(cpi_ctx, params.amount)?;
    } else {
        // Whitelisted vault: the mint PDA burns as permanent delegate.
        let cpi_accounts = Burn {
            mint: ctx.accounts.mint_account.to_account_info(),
            from: ctx.accounts.from.to_account_info(),
            authority: ctx.accounts.mint_account.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        token_2022::burn(cpi_ctx, params.amount)?;
    }

    emit!(BurnEvent {
        token: params.name,
        from: ctx.accounts.from.key(),
        amount: params.amount,
    });

    Ok(())
}
