//! Role gating tests
//!
//! Covers:
//! - Admin-only token creation and sub-admin management
//! - Maintainer-only mint and burn-from
//! - Self-service burn isolation
//! - Custody burns of whitelisted vaults
//! - Sub-admin and whitelist management

mod common;

use anchor_lang::prelude::Pubkey;
use common::*;
use pretty_assertions::assert_eq;
use token_engine::{EngineError, LifecycleEvent, Operation};
use token_program::error::TokenProgramError;

#[test]
fn test_only_admin_creates_tokens() {
    let mut ctx = setup_initialized();

    for signer in [ctx.sub_admin, ctx.user1, ctx.vault] {
        assert_unauthorized(ctx.engine.create_token(&signer, &create_params("Other", 6)));
    }
    assert!(matches!(
        ctx.engine.token_config("Other"),
        Err(EngineError::TokenNotFound(_))
    ));

    ctx.engine
        .create_token(&ctx.admin, &create_params("Other", 6))
        .expect("admin should create");
}

#[test]
fn test_unauthorized_reports_signer_and_operation() {
    let mut ctx = setup_initialized();

    let err = ctx
        .engine
        .mint_token(&ctx.user1, &token(1), &ctx.user1)
        .expect_err("should reject");

    match err {
        EngineError::Unauthorized { signer, operation } => {
            assert_eq!(signer, ctx.user1);
            assert_eq!(operation, Operation::MintToken);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_mint_requires_maintainer() {
    let mut ctx = setup_initialized();

    assert_unauthorized(ctx.engine.mint_token(&ctx.user1, &token(1), &ctx.user1));
    assert_unauthorized(ctx.engine.mint_token(&ctx.vault, &token(1), &ctx.vault));

    ctx.engine
        .mint_token(&ctx.admin, &token(1), &ctx.user1)
        .expect("admin should mint");
    ctx.engine
        .mint_token(&ctx.sub_admin, &token(1), &ctx.user1)
        .expect("sub-admin should mint");
    assert_eq!(ctx.engine.balance_of(TOKEN, &ctx.user1).expect("should exist"), 2);
}

#[test]
fn test_burn_from_requires_maintainer() {
    let mut ctx = setup_initialized();
    ctx.engine
        .mint_token(&ctx.admin, &token(100), &ctx.user1)
        .expect("should mint");
    ctx.engine
        .mint_token(&ctx.admin, &token(100), &ctx.user2)
        .expect("should mint");

    assert_unauthorized(ctx.engine.burn_token_from(&ctx.user2, &token(10), &ctx.user1));
    // not even on the signer's own balance
    assert_unauthorized(ctx.engine.burn_token_from(&ctx.user2, &token(10), &ctx.user2));

    ctx.engine
        .burn_token_from(&ctx.sub_admin, &token(10), &ctx.user1)
        .expect("sub-admin should burn from");
    assert_eq!(ctx.engine.balance_of(TOKEN, &ctx.user1).expect("should exist"), 90);
    assert_eq!(ctx.engine.balance_of(TOKEN, &ctx.user2).expect("should exist"), 100);
}

#[test]
fn test_self_burn_cannot_reach_other_holders() {
    let mut ctx = setup_initialized();
    ctx.engine
        .mint_token(&ctx.admin, &token(100), &ctx.user1)
        .expect("should mint");
    let before = ctx.engine.snapshot();

    assert_unauthorized(ctx.engine.burn_token(&ctx.user2, &token(10), &ctx.user1));
    // maintainers go through burn-from for plain holders
    assert_unauthorized(ctx.engine.burn_token(&ctx.admin, &token(10), &ctx.user1));
    assert_unauthorized(ctx.engine.burn_token(&ctx.sub_admin, &token(10), &ctx.user1));

    assert_eq!(ctx.engine.snapshot(), before);
}

#[test]
fn test_maintainers_burn_whitelisted_vaults() {
    let mut ctx = setup_initialized();
    ctx.engine
        .mint_token(&ctx.admin, &token(100), &ctx.vault)
        .expect("should mint to vault");

    assert_unauthorized(ctx.engine.burn_token(&ctx.user1, &token(10), &ctx.vault));

    ctx.engine
        .burn_token(&ctx.admin, &token(30), &ctx.vault)
        .expect("admin should burn vault balance");
    ctx.engine
        .burn_token(&ctx.sub_admin, &token(20), &ctx.vault)
        .expect("sub-admin should burn vault balance");
    ctx.engine
        .burn_token(&ctx.vault, &token(5), &ctx.vault)
        .expect("vault should burn its own balance");

    assert_eq!(ctx.engine.balance_of(TOKEN, &ctx.vault).expect("should exist"), 45);
    assert_eq!(ctx.engine.supply(TOKEN).expect("should exist"), 45);
}

#[test]
fn test_sub_admin_management_is_admin_only() {
    let mut ctx = setup_initialized();
    let candidate = Pubkey::new_unique();

    assert_unauthorized(ctx.engine.add_sub_admins(&ctx.sub_admin, &[candidate]));
    assert_unauthorized(ctx.engine.remove_sub_admins(&ctx.sub_admin, &[ctx.sub_admin]));
    assert_unauthorized(ctx.engine.add_sub_admins(&ctx.user1, &[ctx.user1]));

    let added = ctx
        .engine
        .add_sub_admins(&ctx.admin, &[candidate, ctx.sub_admin])
        .expect("should add");
    assert_eq!(added, vec![candidate]);
    assert_eq!(
        ctx.engine.maintainers().expect("should load").sub_admins,
        vec![ctx.admin, ctx.sub_admin, candidate]
    );

    let removed = ctx
        .engine
        .remove_sub_admins(&ctx.admin, &[ctx.sub_admin])
        .expect("should remove");
    assert_eq!(removed, vec![ctx.sub_admin]);
    assert_unauthorized(ctx.engine.mint_token(&ctx.sub_admin, &token(1), &ctx.user1));

    assert_eq!(
        ctx.engine.events().last(),
        Some(&LifecycleEvent::SubAdminsUpdated {
            admin: ctx.admin,
            sub_admins: vec![ctx.admin, candidate],
        })
    );
}

#[test]
fn test_admin_stays_a_maintainer() {
    let mut ctx = setup_initialized();

    let result = ctx.engine.remove_sub_admins(&ctx.admin, &[ctx.admin]);

    assert!(matches!(
        result,
        Err(EngineError::Program(TokenProgramError::CannotRemoveAdmin))
    ));
    ctx.engine
        .mint_token(&ctx.admin, &token(1), &ctx.user1)
        .expect("admin should still mint");
}

#[test]
fn test_sub_admin_bound_applies_atomically() {
    let mut ctx = setup_initialized();
    let before = ctx.engine.maintainers().expect("should load");
    let keys: Vec<Pubkey> = (0..9).map(|_| Pubkey::new_unique()).collect();

    let result = ctx.engine.add_sub_admins(&ctx.admin, &keys);

    assert!(matches!(
        result,
        Err(EngineError::Program(TokenProgramError::TooManySubAdmins))
    ));
    assert_eq!(ctx.engine.maintainers().expect("should load"), before);
}

#[test]
fn test_whitelist_management_by_maintainers() {
    let mut ctx = setup_initialized();
    ctx.engine
        .mint_token(&ctx.admin, &token(50), &ctx.user2)
        .expect("should mint");

    assert_unauthorized(ctx.engine.add_whitelisted_users(&ctx.user1, &[ctx.user2]));
    assert_unauthorized(ctx.engine.burn_token(&ctx.sub_admin, &token(10), &ctx.user2));

    ctx.engine
        .add_whitelisted_users(&ctx.sub_admin, &[ctx.user2])
        .expect("sub-admin should whitelist");
    ctx.engine
        .burn_token(&ctx.sub_admin, &token(10), &ctx.user2)
        .expect("whitelisted balance should be burnable");

    let removed = ctx
        .engine
        .remove_whitelisted_users(&ctx.admin, &[ctx.user2, ctx.vault])
        .expect("admin should unlist");
    assert_eq!(removed, vec![ctx.vault, ctx.user2]);
    assert!(ctx.engine.whitelist().expect("should load").users.is_empty());
    assert_unauthorized(ctx.engine.burn_token(&ctx.sub_admin, &token(10), &ctx.user2));
    assert_eq!(ctx.engine.balance_of(TOKEN, &ctx.user2).expect("should exist"), 40);
}
