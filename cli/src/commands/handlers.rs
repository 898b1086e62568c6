use anchor_lang::prelude::Pubkey;
use serde::Serialize;
use std::fs;
use token_engine::{CreateTokenParams, TokenLifecycle, TokenParams};

use crate::error::CliError;

fn report(engine: &TokenLifecycle) {
    if let Some(event) = engine.events().last() {
        println!("{event}");
    }
}

pub fn handle_init(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    vaults: &[Pubkey],
) -> Result<(), CliError> {
    engine.init(signer, vaults)?;
    report(engine);
    Ok(())
}

pub fn handle_create(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    params: CreateTokenParams,
) -> Result<(), CliError> {
    engine.create_token(signer, &params)?;
    report(engine);
    Ok(())
}

pub fn handle_mint(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    params: TokenParams,
    recipient: &Pubkey,
) -> Result<(), CliError> {
    engine.mint_token(signer, &params, recipient)?;
    report(engine);
    println!(
        "Balance of {}: {}",
        recipient,
        engine.balance_of(&params.name, recipient)?
    );
    Ok(())
}

/// `holder` defaults to the signer.
pub fn handle_burn(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    params: TokenParams,
    holder: Option<Pubkey>,
) -> Result<(), CliError> {
    let holder = holder.unwrap_or(*signer);
    engine.burn_token(signer, &params, &holder)?;
    report(engine);
    Ok(())
}

pub fn handle_burn_from(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    params: TokenParams,
    holder: &Pubkey,
) -> Result<(), CliError> {
    engine.burn_token_from(signer, &params, holder)?;
    report(engine);
    Ok(())
}

pub fn handle_sub_admins(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    keys: &[Pubkey],
    add: bool,
) -> Result<(), CliError> {
    let changed = if add {
        engine.add_sub_admins(signer, keys)?
    } else {
        engine.remove_sub_admins(signer, keys)?
    };
    println!("{} sub-admin(s) {}", changed.len(), if add { "added" } else { "removed" });
    report(engine);
    Ok(())
}

pub fn handle_whitelist(
    engine: &mut TokenLifecycle,
    signer: &Pubkey,
    users: &[Pubkey],
    add: bool,
) -> Result<(), CliError> {
    let changed = if add {
        engine.add_whitelisted_users(signer, users)?
    } else {
        engine.remove_whitelisted_users(signer, users)?
    };
    println!("{} user(s) {}", changed.len(), if add { "added" } else { "removed" });
    report(engine);
    Ok(())
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusReport {
    pub program_id: String,
    pub initialized: bool,
    pub admin: Option<String>,
    pub sub_admins: Vec<String>,
    pub whitelist: Vec<String>,
    pub token: Option<TokenStatus>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenStatus {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub mint: String,
    pub supply: u64,
}

pub fn status_report(
    engine: &TokenLifecycle,
    token: Option<&str>,
) -> Result<StatusReport, CliError> {
    let mut report = StatusReport {
        program_id: engine.program_id().to_string(),
        initialized: engine.is_initialized(),
        admin: None,
        sub_admins: Vec::new(),
        whitelist: Vec::new(),
        token: None,
    };
    if report.initialized {
        let maintainers = engine.maintainers()?;
        report.admin = Some(maintainers.admin.to_string());
        report.sub_admins = maintainers.sub_admins.iter().map(Pubkey::to_string).collect();
        report.whitelist = engine
            .whitelist()?
            .users
            .iter()
            .map(Pubkey::to_string)
            .collect();
    }
    if let Some(name) = token {
        let config = engine.token_config(name)?;
        report.token = Some(TokenStatus {
            supply: engine.supply(name)?,
            name: config.name,
            symbol: config.symbol,
            uri: config.uri,
            decimals: config.decimals,
            mint: config.mint.to_string(),
        });
    }
    Ok(report)
}

pub fn handle_status(
    engine: &TokenLifecycle,
    token: Option<&str>,
    export: Option<&str>,
) -> Result<(), CliError> {
    let report = status_report(engine, token)?;
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    if let Some(path) = export {
        fs::write(path, &json)?;
        println!("Exported status to {path}");
    }
    Ok(())
}

pub fn handle_supply(engine: &TokenLifecycle, name: &str) -> Result<(), CliError> {
    let config = engine.token_config(name)?;
    println!(
        "Total Supply of {}: {} (decimals {})",
        name,
        engine.supply(name)?,
        config.decimals
    );
    Ok(())
}

pub fn handle_balance(engine: &TokenLifecycle, name: &str, owner: &Pubkey) -> Result<(), CliError> {
    println!(
        "{} {} held by {} at {}",
        engine.balance_of(name, owner)?,
        name,
        owner,
        engine.holder_account(name, owner)?
    );
    Ok(())
}
