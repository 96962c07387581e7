use soroban_sdk::{Address, Env};

use crate::types::{DataKey, EnterpriseStats, TreeRecord, UserStats};

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, token);
}

/// None when the deployment runs without a reward token.
pub fn reward_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::RewardToken)
}

pub fn set_reward_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::RewardToken, token);
}

pub fn tree_price(e: &Env) -> Option<i128> {
    e.storage().instance().get(&DataKey::TreePrice)
}

pub fn set_tree_price(e: &Env, price: i128) {
    e.storage().instance().set(&DataKey::TreePrice, &price);
}

pub fn executor_reward(e: &Env) -> Option<i128> {
    e.storage().instance().get(&DataKey::ExecutorReward)
}

pub fn set_executor_reward(e: &Env, reward: i128) {
    e.storage().instance().set(&DataKey::ExecutorReward, &reward);
}

pub fn token_reward_per_tree(e: &Env) -> Option<i128> {
    e.storage().instance().get(&DataKey::TokenRewardPerTree)
}

pub fn set_token_reward_per_tree(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::TokenRewardPerTree, &amount);
}

/// Allocates the next tree id. Ids start at 1; None once the counter
/// would wrap.
pub fn next_tree_id(e: &Env) -> Option<u64> {
    let n: u64 = e.storage().instance().get(&DataKey::NextTreeId).unwrap_or(0);
    let n = n.checked_add(1)?;
    e.storage().instance().set(&DataKey::NextTreeId, &n);
    Some(n)
}

/// Highest tree id handed out so far.
pub fn total_trees(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextTreeId).unwrap_or(0)
}

pub fn get_tree(e: &Env, id: u64) -> Option<TreeRecord> {
    e.storage().persistent().get(&DataKey::Tree(id))
}

pub fn put_tree(e: &Env, tree: &TreeRecord) {
    e.storage().persistent().set(&DataKey::Tree(tree.id), tree);
}

pub fn get_user_stats(e: &Env, user: &Address) -> UserStats {
    e.storage()
        .persistent()
        .get(&DataKey::UserStats(user.clone()))
        .unwrap_or(UserStats { donated_trees: 0, planted_trees: 0 })
}

pub fn put_user_stats(e: &Env, user: &Address, stats: &UserStats) {
    e.storage().persistent().set(&DataKey::UserStats(user.clone()), stats);
}

pub fn get_enterprise_stats(e: &Env, enterprise: &Address) -> EnterpriseStats {
    e.storage()
        .persistent()
        .get(&DataKey::EnterpriseStats(enterprise.clone()))
        .unwrap_or(EnterpriseStats { donated_trees: 0, total_spent: 0 })
}

pub fn put_enterprise_stats(e: &Env, enterprise: &Address, stats: &EnterpriseStats) {
    e.storage().persistent().set(&DataKey::EnterpriseStats(enterprise.clone()), stats);
}

pub fn total_planted(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::TotalPlanted).unwrap_or(0)
}

pub fn set_total_planted(e: &Env, total: u64) {
    e.storage().instance().set(&DataKey::TotalPlanted, &total);
}

pub fn total_donations(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalDonations).unwrap_or(0)
}

pub fn set_total_donations(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalDonations, &total);
}

pub fn total_rewards_paid(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalRewardsPaid).unwrap_or(0)
}

pub fn set_total_rewards_paid(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalRewardsPaid, &total);
}
