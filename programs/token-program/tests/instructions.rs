//! Instruction tests through the program entry
//!
//! Drives `token_program::entry` with hand-built accounts, so account
//! constraints, handler logic and the written-back account data are all
//! exercised:
//! - Sub-admin management by the admin, rejected for sub-admins
//! - Whitelist management by maintainers, rejected for plain holders
//! - Missing signatures and foreign registries

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::system_program;
use anchor_lang::{AccountDeserialize, AccountSerialize, InstructionData};
use pretty_assertions::assert_eq;
use token_program::error::TokenProgramError;
use token_program::instruction;
use token_program::pda::{derive_maintainers, derive_whitelist};
use token_program::state::{Maintainers, WhitelistedUser};

/// Account backed by leaked buffers so it satisfies the entry's `'info`
/// bound for the rest of the test.
fn account(
    key: Pubkey,
    owner: Pubkey,
    is_signer: bool,
    is_writable: bool,
    data: Vec<u8>,
) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        is_writable,
        Box::leak(Box::new(1_000_000_000u64)),
        Vec::leak(data),
        Box::leak(Box::new(owner)),
        false,
        0,
    )
}

fn encode<T: AccountSerialize>(state: &T, space: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(space);
    state.try_serialize(&mut data).expect("should serialize");
    data.resize(space, 0);
    data
}

fn decode<T: AccountDeserialize>(info: &AccountInfo) -> T {
    let data = info.try_borrow_data().expect("should borrow");
    T::try_deserialize(&mut &data[..]).expect("should deserialize")
}

fn program_error(error: TokenProgramError) -> ProgramError {
    anchor_lang::error::Error::from(error).into()
}

struct Registry {
    admin: Pubkey,
    sub_admin: Pubkey,
    vault: Pubkey,
    maintainers: Maintainers,
    whitelist: WhitelistedUser,
}

fn registry() -> Registry {
    let admin = Pubkey::new_unique();
    let sub_admin = Pubkey::new_unique();
    let vault = Pubkey::new_unique();
    let mut maintainers = Maintainers::new(admin, derive_maintainers(&token_program::ID).1);
    maintainers.add_sub_admins(&[sub_admin]).expect("should add");
    let whitelist = WhitelistedUser::new(&[vault], derive_whitelist(&token_program::ID).1)
        .expect("should build");

    Registry {
        admin,
        sub_admin,
        vault,
        maintainers,
        whitelist,
    }
}

fn maintainers_account(maintainers: &Maintainers, is_writable: bool) -> AccountInfo<'static> {
    account(
        derive_maintainers(&token_program::ID).0,
        token_program::ID,
        false,
        is_writable,
        encode(maintainers, 8 + Maintainers::INIT_SPACE),
    )
}

fn whitelist_account(whitelist: &WhitelistedUser) -> AccountInfo<'static> {
    account(
        derive_whitelist(&token_program::ID).0,
        token_program::ID,
        false,
        true,
        encode(whitelist, 8 + WhitelistedUser::INIT_SPACE),
    )
}

fn signer(key: Pubkey) -> AccountInfo<'static> {
    account(key, system_program::ID, true, false, Vec::new())
}

fn run(
    accounts: Vec<AccountInfo<'static>>,
    data: Vec<u8>,
) -> (ProgramResult, &'static [AccountInfo<'static>]) {
    let accounts: &'static [AccountInfo<'static>] = Vec::leak(accounts);
    (token_program::entry(&token_program::ID, accounts, &data), accounts)
}

#[test]
fn test_admin_adds_and_removes_sub_admins() {
    let r = registry();
    let candidate = Pubkey::new_unique();

    let (result, accounts) = run(
        vec![signer(r.admin), maintainers_account(&r.maintainers, true)],
        instruction::AddSubAdmins {
            keys: vec![candidate, r.sub_admin],
        }
        .data(),
    );
    result.expect("admin should add");
    let stored: Maintainers = decode(&accounts[1]);
    assert_eq!(stored.sub_admins, vec![r.admin, r.sub_admin, candidate]);

    let (result, accounts) = run(
        vec![signer(r.admin), maintainers_account(&stored, true)],
        instruction::RemoveSubAdmins {
            keys: vec![r.sub_admin],
        }
        .data(),
    );
    result.expect("admin should remove");
    let stored: Maintainers = decode(&accounts[1]);
    assert_eq!(stored.sub_admins, vec![r.admin, candidate]);
}

#[test]
fn test_sub_admin_cannot_manage_sub_admins() {
    let r = registry();

    let (result, accounts) = run(
        vec![signer(r.sub_admin), maintainers_account(&r.maintainers, true)],
        instruction::AddSubAdmins {
            keys: vec![Pubkey::new_unique()],
        }
        .data(),
    );

    assert_eq!(result, Err(program_error(TokenProgramError::Unauthorized)));
    assert_eq!(decode::<Maintainers>(&accounts[1]), r.maintainers);
}

#[test]
fn test_admin_cannot_be_removed_through_the_instruction() {
    let r = registry();

    let (result, _) = run(
        vec![signer(r.admin), maintainers_account(&r.maintainers, true)],
        instruction::RemoveSubAdmins {
            keys: vec![r.admin],
        }
        .data(),
    );

    assert_eq!(result, Err(program_error(TokenProgramError::CannotRemoveAdmin)));
}

#[test]
fn test_unsigned_authority_is_rejected() {
    let r = registry();
    let unsigned = account(r.admin, system_program::ID, false, false, Vec::new());

    let (result, _) = run(
        vec![unsigned, maintainers_account(&r.maintainers, true)],
        instruction::AddSubAdmins {
            keys: vec![Pubkey::new_unique()],
        }
        .data(),
    );

    assert!(result.is_err());
}

#[test]
fn test_registry_owned_by_another_program_is_rejected() {
    let r = registry();
    let foreign = account(
        derive_maintainers(&token_program::ID).0,
        Pubkey::new_unique(),
        false,
        true,
        encode(&r.maintainers, 8 + Maintainers::INIT_SPACE),
    );

    let (result, _) = run(
        vec![signer(r.admin), foreign],
        instruction::AddSubAdmins {
            keys: vec![Pubkey::new_unique()],
        }
        .data(),
    );

    assert!(result.is_err());
}

#[test]
fn test_maintainers_manage_whitelist() {
    let r = registry();
    let user = Pubkey::new_unique();

    let (result, accounts) = run(
        vec![
            signer(r.sub_admin),
            maintainers_account(&r.maintainers, false),
            whitelist_account(&r.whitelist),
        ],
        instruction::AddWhitelistedUsers { users: vec![user] }.data(),
    );
    result.expect("sub-admin should whitelist");
    let stored: WhitelistedUser = decode(&accounts[2]);
    assert_eq!(stored.users, vec![r.vault, user]);

    let (result, accounts) = run(
        vec![
            signer(r.admin),
            maintainers_account(&r.maintainers, false),
            whitelist_account(&stored),
        ],
        instruction::RemoveWhitelistedUsers {
            users: vec![r.vault],
        }
        .data(),
    );
    result.expect("admin should unlist");
    assert_eq!(decode::<WhitelistedUser>(&accounts[2]).users, vec![user]);
}

#[test]
fn test_plain_holder_cannot_manage_whitelist() {
    let r = registry();
    let holder = Pubkey::new_unique();

    let (result, accounts) = run(
        vec![
            signer(holder),
            maintainers_account(&r.maintainers, false),
            whitelist_account(&r.whitelist),
        ],
        instruction::AddWhitelistedUsers {
            users: vec![holder],
        }
        .data(),
    );

    assert_eq!(result, Err(program_error(TokenProgramError::Unauthorized)));
    assert_eq!(decode::<WhitelistedUser>(&accounts[2]), r.whitelist);
}
