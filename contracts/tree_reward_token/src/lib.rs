//! TRT, the reward token minted to executors for verified plantings.
//! Standard SEP-41 token plus a mint capability that the admin hands to the
//! tree ledger contract.
#![no_std]

mod test;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token::TokenInterface, Address, Env,
    String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

#[contracttype]
#[derive(Clone)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Minter,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

fn read_admin(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Admin).expect("not initialized")
}

fn read_minter(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Minter)
}

fn read_total_supply(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

fn write_total_supply(e: &Env, supply: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
}

fn check_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("negative amount is not allowed: {}", amount)
    }
}

fn read_balance(e: &Env, addr: &Address) -> i128 {
    e.storage().persistent().get(&DataKey::Balance(addr.clone())).unwrap_or(0)
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    e.storage().persistent().set(&DataKey::Balance(addr.clone()), &amount);
}

fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, balance.checked_add(amount).expect("balance overflow"));
}

fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    if balance < amount {
        panic!("insufficient balance");
    }
    write_balance(e, addr, balance - amount);
}

fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(a) if a.expiration_ledger >= e.ledger().sequence() => a,
        Some(a) => AllowanceValue { amount: 0, expiration_ledger: a.expiration_ledger },
        None => AllowanceValue { amount: 0, expiration_ledger: 0 },
    }
}

fn write_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic!("expiration_ledger is less than ledger seq when amount > 0")
    }
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().temporary().set(&key, &AllowanceValue { amount, expiration_ledger });
    if amount > 0 {
        // Entry must not outlive its own expiration.
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        panic!("insufficient allowance");
    }
    if amount > 0 {
        write_allowance(e, from, spender, allowance.amount - amount, allowance.expiration_ledger);
    }
}

#[contract]
pub struct TreeRewardToken;

#[contractimpl]
impl TreeRewardToken {
    pub fn initialize(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if has_admin(&e) {
            panic!("already initialized")
        }
        if decimal > 18 {
            panic!("decimal must not be greater than 18")
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        TokenUtils::new(&e).metadata().set_metadata(&TokenMetadata { decimal, name, symbol });
    }

    /// Hand the mint capability to `minter`, normally the tree ledger
    /// contract. Replaces any previous minter.
    pub fn set_minter(e: Env, minter: Address) {
        read_admin(&e).require_auth();
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.events().publish((symbol_short!("set_mint"),), minter);
    }

    pub fn minter(e: Env) -> Option<Address> {
        read_minter(&e)
    }

    pub fn set_admin(e: Env, new_admin: Address) {
        let admin = read_admin(&e);
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &new_admin);
        TokenUtils::new(&e).events().set_admin(admin, new_admin);
    }

    pub fn admin(e: Env) -> Address {
        read_admin(&e)
    }

    /// Create `amount` new tokens for `to`. Requires the minter's
    /// authorization, or the admin's while no minter is set.
    pub fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(amount);
        let authority = read_minter(&e).unwrap_or_else(|| read_admin(&e));
        authority.require_auth();

        receive_balance(&e, &to, amount);
        let supply = read_total_supply(&e).checked_add(amount).expect("total supply overflow");
        write_total_supply(&e, supply);
        TokenUtils::new(&e).events().mint(authority, to, amount);
    }

    pub fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }
}

#[contractimpl]
impl TokenInterface for TreeRewardToken {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(amount);
        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&e).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(amount);
        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        spend_balance(&e, &from, amount);
        write_total_supply(&e, read_total_supply(&e).checked_sub(amount).expect("supply underflow"));
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(amount);
        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        write_total_supply(&e, read_total_supply(&e).checked_sub(amount).expect("supply underflow"));
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn decimals(e: Env) -> u32 {
        TokenUtils::new(&e).metadata().get_metadata().decimal
    }

    fn name(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().name
    }

    fn symbol(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().symbol
    }
}
