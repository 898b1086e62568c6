use crate::access::{authorize, Operation};
use crate::constants::*;
use crate::error::TokenProgramError;
use crate::events::*;
use crate::params::TokenParams;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_2022::{self, MintTo, Token2022};
use anchor_spl::token_interface::{Mint, TokenAccount};

#[derive(Accounts)]
#[instruction(params: TokenParams)]
pub struct MintToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [MAINTAINERS_TAG],
        bump = maintainers.bump,
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

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

    /// CHECK: Only used as the owner of the balance record being credited
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint_account,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub to_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintToken>, params: TokenParams) -> Result<()> {
    params.validate()?;
    authorize(
        Operation::MintToken,
        &ctx.accounts.authority.key(),
        &ctx.accounts.maintainers,
        None,
        None,
    )?;

    let mint_bump = [ctx.accounts.config.mint_bump];
    let mint_seeds: &[&[u8]] = &[MINT_TAG, params.name.as_bytes(), &mint_bump];
    let signer = &[mint_seeds];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint_account.to_account_info(),
        to: ctx.accounts.to_account.to_account_info(),
        authority: ctx.accounts.mint_account.to_account_info(),
    };

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );

    token_2022::mint_to(cpi_ctx, params.amount)?;

    emit!(MintEvent {
        token: params.name,
        to: ctx.accounts.to_account.key(),
        amount: params.amount,
    });

    Ok(())
}
