#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{TreeRewardToken, TreeRewardTokenClient};

fn setup<'a>() -> (Env, TreeRewardTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let client = TreeRewardTokenClient::new(&env, &env.register(TreeRewardToken, ()));
    client.initialize(
        &admin,
        &7,
        &String::from_str(&env, "TreeChain Reward Token"),
        &String::from_str(&env, "TRT"),
    );
    (env, client, admin)
}

#[test]
fn metadata_is_stored() {
    let (env, token, _) = setup();
    assert_eq!(token.decimals(), 7);
    assert_eq!(token.name(), String::from_str(&env, "TreeChain Reward Token"));
    assert_eq!(token.symbol(), String::from_str(&env, "TRT"));
    assert_eq!(token.total_supply(), 0);
}

#[test]
#[should_panic(expected = "already initialized")]
fn initialize_twice_panics() {
    let (env, token, admin) = setup();
    token.initialize(
        &admin,
        &7,
        &String::from_str(&env, "TreeChain Reward Token"),
        &String::from_str(&env, "TRT"),
    );
}

#[test]
#[should_panic(expected = "decimal must not be greater than 18")]
fn initialize_rejects_oversized_decimal() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let client = TreeRewardTokenClient::new(&env, &env.register(TreeRewardToken, ()));
    client.initialize(
        &admin,
        &19,
        &String::from_str(&env, "Bad"),
        &String::from_str(&env, "BAD"),
    );
}

#[test]
fn admin_mints_until_minter_is_set() {
    let (env, token, admin) = setup();
    let user = Address::generate(&env);

    token.mint(&user, &1_000);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);
    assert_eq!(token.balance(&user), 1_000);
    assert_eq!(token.total_supply(), 1_000);

    let minter = Address::generate(&env);
    token.set_minter(&minter);
    assert_eq!(token.minter(), Some(minter.clone()));

    token.mint(&user, &500);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    // once delegated, minting runs on the minter's authority, not the admin's
    assert_eq!(auths[0].0, minter);
    assert_eq!(token.balance(&user), 1_500);
    assert_eq!(token.total_supply(), 1_500);
}

#[test]
#[should_panic(expected = "negative amount is not allowed")]
fn mint_rejects_negative_amount() {
    let (env, token, _) = setup();
    let user = Address::generate(&env);
    token.mint(&user, &-1);
}

#[test]
fn transfer_moves_balance() {
    let (env, token, _) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    token.mint(&a, &1_000);

    token.transfer(&a, &b, &400);
    assert_eq!(token.balance(&a), 600);
    assert_eq!(token.balance(&b), 400);
    // transfers do not change supply
    assert_eq!(token.total_supply(), 1_000);
}

#[test]
#[should_panic(expected = "insufficient balance")]
fn transfer_rejects_overdraft() {
    let (env, token, _) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    token.mint(&a, &100);
    token.transfer(&a, &b, &101);
}

#[test]
fn approve_then_transfer_from() {
    let (env, token, _) = setup();
    let from = Address::generate(&env);
    let spender = Address::generate(&env);
    let to = Address::generate(&env);
    token.mint(&from, &1_000);

    let expiration = env.ledger().sequence() + 200;
    token.approve(&from, &spender, &500, &expiration);
    assert_eq!(token.allowance(&from, &spender), 500);

    token.transfer_from(&spender, &from, &to, &400);
    assert_eq!(token.balance(&from), 600);
    assert_eq!(token.balance(&to), 400);
    assert_eq!(token.allowance(&from, &spender), 100);
}

#[test]
#[should_panic(expected = "insufficient allowance")]
fn transfer_from_rejects_excess() {
    let (env, token, _) = setup();
    let from = Address::generate(&env);
    let spender = Address::generate(&env);
    let to = Address::generate(&env);
    token.mint(&from, &1_000);

    let expiration = env.ledger().sequence() + 200;
    token.approve(&from, &spender, &100, &expiration);
    token.transfer_from(&spender, &from, &to, &101);
}

#[test]
fn allowance_expires_with_the_ledger() {
    let (env, token, _) = setup();
    let from = Address::generate(&env);
    let spender = Address::generate(&env);
    token.mint(&from, &1_000);

    env.ledger().set_sequence_number(10);
    token.approve(&from, &spender, &500, &110);
    assert_eq!(token.allowance(&from, &spender), 500);

    env.ledger().set_sequence_number(111);
    assert_eq!(token.allowance(&from, &spender), 0);
}

#[test]
#[should_panic(expected = "expiration_ledger is less than ledger seq when amount > 0")]
fn approve_rejects_past_expiration() {
    let (env, token, _) = setup();
    let from = Address::generate(&env);
    let spender = Address::generate(&env);

    env.ledger().set_sequence_number(10);
    token.approve(&from, &spender, &500, &5);
}

#[test]
fn burn_reduces_supply() {
    let (env, token, _) = setup();
    let a = Address::generate(&env);
    token.mint(&a, &1_000);

    token.burn(&a, &300);
    assert_eq!(token.balance(&a), 700);
    assert_eq!(token.total_supply(), 700);
}

#[test]
fn burn_from_spends_allowance() {
    let (env, token, _) = setup();
    let from = Address::generate(&env);
    let spender = Address::generate(&env);
    token.mint(&from, &1_000);

    let expiration = env.ledger().sequence() + 200;
    token.approve(&from, &spender, &400, &expiration);
    token.burn_from(&spender, &from, &300);
    assert_eq!(token.balance(&from), 700);
    assert_eq!(token.allowance(&from, &spender), 100);
    assert_eq!(token.total_supply(), 700);
}

#[test]
fn set_admin_rotates_control() {
    let (env, token, admin) = setup();
    let new_admin = Address::generate(&env);
    token.set_admin(&new_admin);
    assert_eq!(token.admin(), new_admin);
    assert_ne!(token.admin(), admin);
}
