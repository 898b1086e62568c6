use crate::constants::*;
use crate::error::TokenProgramError;
use crate::events::*;
use crate::params::CreateTokenParams;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token_2022::Token2022;
use anchor_spl::token_interface::{token_metadata_initialize, Mint, TokenMetadataInitialize};

#[derive(Accounts)]
#[instruction(params: CreateTokenParams)]
pub struct CreateToken<'info> {
    #[account(
        mut,
        constraint = !params.name.is_empty() @ TokenProgramError::EmptyName,
        constraint = params.name.len() <= MAX_NAME_LENGTH @ TokenProgramError::NameTooLong
    )]
    pub payer: Signer<'info>,

    #[account(
        seeds = [MAINTAINERS_TAG],
        bump = maintainers.bump,
        constraint = maintainers.is_admin(&payer.key()) @ TokenProgramError::Unauthorized
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    // The name seed makes this address the uniqueness check for the token name.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + TokenConfig::INIT_SPACE,
        seeds = [CONFIG_TAG, params.name.as_bytes()],
        bump,
        constraint = !config.is_initialized() @ TokenProgramError::TokenAlreadyExists
    )]
    pub config: Box<Account<'info, TokenConfig>>,

    #[account(
        init,
        payer = payer,
        seeds = [MINT_TAG, params.name.as_bytes()],
        bump,
        mint::decimals = params.decimals,
        mint::authority = mint_account,
        mint::freeze_authority = mint_account,
        mint::token_program = token_program,
        extensions::metadata_pointer::authority = mint_account,
        extensions::metadata_pointer::metadata_address = mint_account,
        extensions::permanent_delegate::delegate = mint_account,
    )]
    pub mint_account: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Program<'info, Token2022>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateToken>, params: CreateTokenParams) -> Result<()> {
    params.validate()?;

    let mint_info = ctx.accounts.mint_account.to_account_info();

    // Token-2022 grows the mint when metadata is written but does not fund it.
    let required = Rent::get()?.minimum_balance(mint_info.data_len() + metadata_space(&params));
    let top_up = required.saturating_sub(mint_info.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: mint_info.clone(),
                },
            ),
            top_up,
        )?;
    }

    let mint_bump = [ctx.bumps.mint_account];
    let mint_seeds: &[&[u8]] = &[MINT_TAG, params.name.as_bytes(), &mint_bump];
    let signer = &[mint_seeds];

    token_metadata_initialize(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TokenMetadataInitialize {
                program_id: ctx.accounts.token_program.to_account_info(),
                mint: mint_info.clone(),
                metadata: mint_info.clone(),
                mint_authority: mint_info.clone(),
                update_authority: mint_info.clone(),
            },
            signer,
        ),
        params.name.clone(),
        params.symbol.clone(),
        params.uri.clone(),
    )?;

    let mint = ctx.accounts.mint_account.key();
    ctx.accounts.config.set_inner(TokenConfig {
        name: params.name.clone(),
        symbol: params.symbol,
        uri: params.uri,
        decimals: params.decimals,
        mint,
        mint_bump: ctx.bumps.mint_account,
        bump: ctx.bumps.config,
    });

    msg!("Created token {} at {}", params.name, mint);

    emit!(CreateTokenEvent {
        name: params.name,
        mint,
    });

    Ok(())
}

/// Bytes the metadata TLV entry adds to the mint: TLV header, update
/// authority, mint, three length-prefixed strings and an empty
/// additional-metadata vector.
fn metadata_space(params: &CreateTokenParams) -> usize {
    4 + 32 + 32 + (4 + params.name.len()) + (4 + params.symbol.len()) + (4 + params.uri.len()) + 4
}
