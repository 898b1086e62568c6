#![allow(dead_code)]

use anchor_lang::prelude::Pubkey;
use token_engine::{CreateTokenParams, EngineError, TokenLifecycle, TokenParams};

pub const TOKEN: &str = "Test";

/// Initialized lifecycle with a created token, an admin, a sub-admin, a
/// whitelisted vault and two plain holders.
pub struct TestContext {
    pub engine: TokenLifecycle,
    pub admin: Pubkey,
    pub sub_admin: Pubkey,
    pub vault: Pubkey,
    pub user1: Pubkey,
    pub user2: Pubkey,
}

pub fn new_engine() -> TokenLifecycle {
    TokenLifecycle::new(token_program::ID, anchor_spl::token_2022::ID)
}

pub fn create_params(name: &str, decimals: u8) -> CreateTokenParams {
    CreateTokenParams {
        name: name.to_string(),
        symbol: "tes".to_string(),
        uri: "https://arweave.net/dEGah51x5Dlvbfcl8UUGz52KovgWh6QmrYIW48hi244?ext=png".to_string(),
        decimals,
    }
}

pub fn token(amount: u64) -> TokenParams {
    TokenParams {
        name: TOKEN.to_string(),
        amount,
    }
}

pub fn setup_initialized() -> TestContext {
    let mut engine = new_engine();
    let admin = Pubkey::new_unique();
    let sub_admin = Pubkey::new_unique();
    let vault = Pubkey::new_unique();

    engine.init(&admin, &[vault]).expect("should init");
    engine
        .add_sub_admins(&admin, &[sub_admin])
        .expect("should add sub-admin");
    engine
        .create_token(&admin, &create_params(TOKEN, 9))
        .expect("should create token");

    TestContext {
        engine,
        admin,
        sub_admin,
        vault,
        user1: Pubkey::new_unique(),
        user2: Pubkey::new_unique(),
    }
}

pub fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, EngineError>) {
    match result {
        Err(EngineError::Unauthorized { .. }) => {}
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}
