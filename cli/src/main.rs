use anchor_lang::prelude::Pubkey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use token_engine::{CreateTokenParams, TokenParams};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod state;

use commands::{handlers, parse_pubkey, parse_pubkeys};
use error::CliError;

#[derive(Parser)]
#[command(name = "token-cli")]
#[command(about = "Operator CLI for the permissioned token program")]
struct Cli {
    /// Path to the TOML configuration file; defaults apply when it does not exist
    #[arg(long, env = "TOKEN_CLI_CONFIG", default_value = "token-cli.toml")]
    config: PathBuf,

    /// Path to the JSON state file; a fresh state is used when it does not exist
    #[arg(long, env = "TOKEN_CLI_STATE", default_value = "token-state.json")]
    state: PathBuf,

    /// Public key the command is signed by; overrides `signer` from the config file
    #[arg(long, env = "TOKEN_CLI_SIGNER")]
    signer: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the maintainer registry with the signer as admin, plus the whitelist
    Init {
        /// Vault addresses to whitelist at creation
        #[arg(long = "vault")]
        vaults: Vec<String>,
    },
    /// Create a new token type (admin only)
    Create {
        /// Unique token name, 1 to 32 bytes
        name: String,
        /// The ticker symbol for the token
        #[arg(long, default_value = "")]
        symbol: String,
        /// The URI pointing to the off-chain metadata JSON file
        #[arg(long, default_value = "")]
        uri: String,
        /// The number of decimal places; defaults to `default_decimals` from the config
        #[arg(long)]
        decimals: Option<u8>,
    },
    /// Mint new tokens to a recipient (admin or sub-admin)
    Mint {
        /// The token name
        name: String,
        /// The public key of the recipient
        recipient: String,
        /// The amount of tokens to mint (in base units)
        amount: u64,
    },
    /// Burn tokens from the signer's own balance
    Burn {
        /// The token name
        name: String,
        /// The amount of tokens to burn (in base units)
        amount: u64,
        /// Burn from a whitelisted vault instead of the signer (maintainers only)
        #[arg(long)]
        holder: Option<String>,
    },
    /// Burn tokens from any holder's balance (admin or sub-admin)
    BurnFrom {
        /// The token name
        name: String,
        /// The public key of the holder to burn from
        holder: String,
        /// The amount of tokens to burn (in base units)
        amount: u64,
    },
    /// Manage sub-admins (admin only)
    SubAdmins {
        #[command(subcommand)]
        command: MembershipCommands,
    },
    /// Manage whitelisted vaults (admin or sub-admin)
    Whitelist {
        #[command(subcommand)]
        command: MembershipCommands,
    },
    /// Display the registry, whitelist and optionally one token's configuration
    Status {
        /// Include this token's configuration and supply
        #[arg(long)]
        token: Option<String>,
        /// Optional file path to export the status information in JSON format
        #[arg(long)]
        export: Option<String>,
    },
    /// Display the current total supply of a token
    Supply {
        /// The token name
        name: String,
    },
    /// Display a holder's balance of a token
    Balance {
        /// The token name
        name: String,
        /// The public key of the holder
        owner: String,
    },
}

#[derive(Subcommand)]
enum MembershipCommands {
    /// Add accounts to the list
    Add {
        /// Public keys to add
        #[arg(required = true)]
        accounts: Vec<String>,
    },
    /// Remove accounts from the list
    Remove {
        /// Public keys to remove
        #[arg(required = true)]
        accounts: Vec<String>,
    },
}

impl MembershipCommands {
    fn split(&self) -> Result<(Vec<Pubkey>, bool), CliError> {
        match self {
            MembershipCommands::Add { accounts } => Ok((parse_pubkeys(accounts)?, true)),
            MembershipCommands::Remove { accounts } => Ok((parse_pubkeys(accounts)?, false)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_cli=info,token_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;
    tracing::debug!("Configuration loaded from {}", cli.config.display());

    let mut engine = state::load_state(&cli.state, &config.engine)?;
    let signer = || -> Result<Pubkey, CliError> {
        let key = cli
            .signer
            .as_deref()
            .or(config.signer.as_deref())
            .ok_or(CliError::MissingSigner)?;
        parse_pubkey(key)
    };

    let mutated = match &cli.command {
        Commands::Init { vaults } => {
            handlers::handle_init(&mut engine, &signer()?, &parse_pubkeys(vaults)?)?;
            true
        }
        Commands::Create {
            name,
            symbol,
            uri,
            decimals,
        } => {
            let params = CreateTokenParams {
                name: name.clone(),
                symbol: symbol.clone(),
                uri: uri.clone(),
                decimals: decimals.unwrap_or(config.default_decimals),
            };
            handlers::handle_create(&mut engine, &signer()?, params)?;
            true
        }
        Commands::Mint {
            name,
            recipient,
            amount,
        } => {
            let params = TokenParams {
                name: name.clone(),
                amount: *amount,
            };
            handlers::handle_mint(&mut engine, &signer()?, params, &parse_pubkey(recipient)?)?;
            true
        }
        Commands::Burn {
            name,
            amount,
            holder,
        } => {
            let params = TokenParams {
                name: name.clone(),
                amount: *amount,
            };
            let holder = holder.as_deref().map(parse_pubkey).transpose()?;
            handlers::handle_burn(&mut engine, &signer()?, params, holder)?;
            true
        }
        Commands::BurnFrom {
            name,
            holder,
            amount,
        } => {
            let params = TokenParams {
                name: name.clone(),
                amount: *amount,
            };
            handlers::handle_burn_from(&mut engine, &signer()?, params, &parse_pubkey(holder)?)?;
            true
        }
        Commands::SubAdmins { command } => {
            let (keys, add) = command.split()?;
            handlers::handle_sub_admins(&mut engine, &signer()?, &keys, add)?;
            true
        }
        Commands::Whitelist { command } => {
            let (users, add) = command.split()?;
            handlers::handle_whitelist(&mut engine, &signer()?, &users, add)?;
            true
        }
        Commands::Status { token, export } => {
            handlers::handle_status(&engine, token.as_deref(), export.as_deref())?;
            false
        }
        Commands::Supply { name } => {
            handlers::handle_supply(&engine, name)?;
            false
        }
        Commands::Balance { name, owner } => {
            handlers::handle_balance(&engine, name, &parse_pubkey(owner)?)?;
            false
        }
    };

    if mutated {
        state::save_state(&cli.state, &engine)?;
    }
    Ok(())
}
