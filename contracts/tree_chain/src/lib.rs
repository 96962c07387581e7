//! Tree planting ledger: donors fund trees, executors plant them and submit
//! proof, the platform owner verifies the proof and releases rewards.
#![no_std]

mod storage;
pub mod types;

use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, String,
};

use crate::types::{EnterpriseStats, PlatformStats, TreeRecord, TreeStatus, UserStats};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidConfig = 4,
    InvalidTreeCount = 5,
    EmptyLocation = 6,
    EmptyEnterpriseName = 7,
    InsufficientPayment = 8,
    ExcessPayment = 9,
    InvalidTreeId = 10,
    TreeAlreadyAssigned = 11,
    EmptyProofHash = 12,
    NotYetPlanted = 13,
    TreeAlreadyProcessed = 14,
    InvalidAmount = 15,
    InsufficientBalance = 16,
    Overflow = 17,
}

#[contract]
pub struct TreeChain;

#[contractimpl]
impl TreeChain {
    /// One-time setup. `reward_token` is optional; when set, every verified
    /// tree also mints `token_reward_per_tree` per tree to the executor.
    pub fn initialize(
        e: Env,
        owner: Address,
        payment_token: Address,
        reward_token: Option<Address>,
        tree_price: i128,
        executor_reward: i128,
        token_reward_per_tree: i128,
    ) -> Result<(), Error> {
        if storage::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        if tree_price <= 0 || executor_reward <= 0 || executor_reward >= tree_price {
            return Err(Error::InvalidConfig);
        }
        if reward_token.is_some() && token_reward_per_tree <= 0 {
            return Err(Error::InvalidConfig);
        }
        storage::set_owner(&e, &owner);
        storage::set_payment_token(&e, &payment_token);
        storage::set_tree_price(&e, tree_price);
        storage::set_executor_reward(&e, executor_reward);
        if let Some(rt) = &reward_token {
            storage::set_reward_token(&e, rt);
            storage::set_token_reward_per_tree(&e, token_reward_per_tree);
        }
        Ok(())
    }

    /// Buy `tree_count` trees to be planted at `location`. `payment` must be
    /// exactly `tree_count * tree_price` and is pulled from the donor.
    /// Returns the new tree id.
    pub fn purchase_tree(
        e: Env,
        donor: Address,
        tree_count: u32,
        location: String,
        payment: i128,
    ) -> Result<u64, Error> {
        purchase_impl(&e, &donor, tree_count, &location, None, payment)
    }

    /// Same as `purchase_tree`, additionally crediting the purchase to the
    /// caller's enterprise record under `enterprise_name`.
    pub fn purchase_tree_as_enterprise(
        e: Env,
        donor: Address,
        tree_count: u32,
        location: String,
        enterprise_name: String,
        payment: i128,
    ) -> Result<u64, Error> {
        if enterprise_name.len() == 0 {
            return Err(Error::EmptyEnterpriseName);
        }
        let id = purchase_impl(&e, &donor, tree_count, &location, Some(enterprise_name), payment)?;

        let mut stats = storage::get_enterprise_stats(&e, &donor);
        stats.donated_trees = stats
            .donated_trees
            .checked_add(u64::from(tree_count))
            .ok_or(Error::Overflow)?;
        stats.total_spent = stats.total_spent.checked_add(payment).ok_or(Error::Overflow)?;
        storage::put_enterprise_stats(&e, &donor, &stats);
        Ok(id)
    }

    /// Claim an unassigned tree. The first executor to submit proof hashes
    /// takes the record to Planted; later claims fail.
    pub fn plant_tree(
        e: Env,
        executor: Address,
        tree_id: u64,
        image_hash: String,
        document_hash: String,
    ) -> Result<(), Error> {
        executor.require_auth();

        if image_hash.len() == 0 || document_hash.len() == 0 {
            return Err(Error::EmptyProofHash);
        }
        let mut tree = storage::get_tree(&e, tree_id).ok_or(Error::InvalidTreeId)?;
        if tree.status != TreeStatus::Created {
            return Err(Error::TreeAlreadyAssigned);
        }

        tree.executor = Some(executor.clone());
        tree.image_hash = Some(image_hash.clone());
        tree.document_hash = Some(document_hash.clone());
        tree.planted_at = e.ledger().timestamp();
        tree.status = TreeStatus::Planted;
        storage::put_tree(&e, &tree);

        e.events().publish(
            (symbol_short!("planted"), tree_id),
            (executor, image_hash, document_hash),
        );
        Ok(())
    }

    /// Owner review of a planted tree. Approval pays the executor reward
    /// from held donations, mints reward tokens when configured, and updates
    /// the planting totals. Rejection only marks the record; both outcomes
    /// are final.
    pub fn verify_tree(e: Env, caller: Address, tree_id: u64, approved: bool) -> Result<(), Error> {
        require_owner(&e, &caller)?;

        let mut tree = storage::get_tree(&e, tree_id).ok_or(Error::InvalidTreeId)?;
        match tree.status {
            TreeStatus::Created => return Err(Error::NotYetPlanted),
            TreeStatus::Verified | TreeStatus::Rejected => {
                return Err(Error::TreeAlreadyProcessed)
            }
            TreeStatus::Planted => {}
        }
        let executor = tree.executor.clone().ok_or(Error::NotYetPlanted)?;

        tree.verified_at = e.ledger().timestamp();
        if !approved {
            tree.status = TreeStatus::Rejected;
            storage::put_tree(&e, &tree);
            e.events().publish((symbol_short!("rejected"), tree_id), executor);
            return Ok(());
        }

        let token_addr = storage::payment_token(&e).ok_or(Error::NotInitialized)?;
        let client = token::Client::new(&e, &token_addr);
        let contract = e.current_contract_address();
        if client.balance(&contract) < tree.reward_amount {
            return Err(Error::InsufficientBalance);
        }

        tree.status = TreeStatus::Verified;
        storage::put_tree(&e, &tree);

        let mut stats = storage::get_user_stats(&e, &executor);
        stats.planted_trees = stats
            .planted_trees
            .checked_add(u64::from(tree.tree_count))
            .ok_or(Error::Overflow)?;
        storage::put_user_stats(&e, &executor, &stats);

        let planted = storage::total_planted(&e)
            .checked_add(u64::from(tree.tree_count))
            .ok_or(Error::Overflow)?;
        storage::set_total_planted(&e, planted);
        let paid = storage::total_rewards_paid(&e)
            .checked_add(tree.reward_amount)
            .ok_or(Error::Overflow)?;
        storage::set_total_rewards_paid(&e, paid);

        client.transfer(&contract, &executor, &tree.reward_amount);

        if let Some(reward_token) = storage::reward_token(&e) {
            let per_tree = storage::token_reward_per_tree(&e).ok_or(Error::NotInitialized)?;
            let amount = per_tree
                .checked_mul(i128::from(tree.tree_count))
                .ok_or(Error::Overflow)?;
            // Any contract exposing the asset-admin mint entry point works
            // here; this one must be set as the token's minter.
            token::StellarAssetClient::new(&e, &reward_token).mint(&executor, &amount);
        }

        e.events().publish(
            (symbol_short!("verified"), tree_id),
            (executor, tree.reward_amount),
        );
        Ok(())
    }

    /// Move accumulated platform funds to the owner. `memo` is carried on
    /// the event for off-chain bookkeeping.
    pub fn withdraw_funds(
        e: Env,
        caller: Address,
        amount: i128,
        memo: String,
    ) -> Result<(), Error> {
        require_owner(&e, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token_addr = storage::payment_token(&e).ok_or(Error::NotInitialized)?;
        let client = token::Client::new(&e, &token_addr);
        let contract = e.current_contract_address();
        if client.balance(&contract) < amount {
            return Err(Error::InsufficientBalance);
        }

        client.transfer(&contract, &caller, &amount);

        e.events().publish((symbol_short!("withdrawn"), caller), (amount, memo));
        Ok(())
    }

    pub fn get_tree(e: Env, tree_id: u64) -> Result<TreeRecord, Error> {
        storage::get_tree(&e, tree_id).ok_or(Error::InvalidTreeId)
    }

    pub fn get_user_stats(e: Env, user: Address) -> UserStats {
        storage::get_user_stats(&e, &user)
    }

    pub fn get_enterprise_stats(e: Env, enterprise: Address) -> EnterpriseStats {
        storage::get_enterprise_stats(&e, &enterprise)
    }

    pub fn get_platform_stats(e: Env) -> Result<PlatformStats, Error> {
        let token_addr = storage::payment_token(&e).ok_or(Error::NotInitialized)?;
        let balance = token::Client::new(&e, &token_addr).balance(&e.current_contract_address());
        Ok(PlatformStats {
            total_trees_planted: storage::total_planted(&e),
            total_donations: storage::total_donations(&e),
            total_rewards_paid: storage::total_rewards_paid(&e),
            available_balance: balance,
        })
    }

    /// Number of tree records ever created; ids run from 1 to this value.
    pub fn total_trees(e: Env) -> u64 {
        storage::total_trees(&e)
    }

    pub fn owner(e: Env) -> Result<Address, Error> {
        storage::owner(&e).ok_or(Error::NotInitialized)
    }

    pub fn payment_token(e: Env) -> Result<Address, Error> {
        storage::payment_token(&e).ok_or(Error::NotInitialized)
    }

    pub fn reward_token(e: Env) -> Option<Address> {
        storage::reward_token(&e)
    }

    pub fn tree_price(e: Env) -> Result<i128, Error> {
        storage::tree_price(&e).ok_or(Error::NotInitialized)
    }

    pub fn executor_reward(e: Env) -> Result<i128, Error> {
        storage::executor_reward(&e).ok_or(Error::NotInitialized)
    }

    /// Per-tree margin kept by the platform.
    pub fn platform_fee(e: Env) -> Result<i128, Error> {
        let price = storage::tree_price(&e).ok_or(Error::NotInitialized)?;
        let reward = storage::executor_reward(&e).ok_or(Error::NotInitialized)?;
        Ok(price - reward)
    }

    pub fn token_reward_per_tree(e: Env) -> Option<i128> {
        storage::token_reward_per_tree(&e)
    }
}

fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = storage::owner(e).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn purchase_impl(
    e: &Env,
    donor: &Address,
    tree_count: u32,
    location: &String,
    enterprise_name: Option<String>,
    payment: i128,
) -> Result<u64, Error> {
    donor.require_auth();

    if tree_count == 0 {
        return Err(Error::InvalidTreeCount);
    }
    if location.len() == 0 {
        return Err(Error::EmptyLocation);
    }

    let token_addr = storage::payment_token(e).ok_or(Error::NotInitialized)?;
    let price = storage::tree_price(e).ok_or(Error::NotInitialized)?;
    let reward = storage::executor_reward(e).ok_or(Error::NotInitialized)?;

    let cost = price.checked_mul(i128::from(tree_count)).ok_or(Error::Overflow)?;
    if payment < cost {
        return Err(Error::InsufficientPayment);
    }
    if payment > cost {
        return Err(Error::ExcessPayment);
    }
    let reward_amount = reward.checked_mul(i128::from(tree_count)).ok_or(Error::Overflow)?;

    // Pull the exact cost in before any record is written.
    token::Client::new(e, &token_addr).transfer(donor, &e.current_contract_address(), &payment);

    let id = storage::next_tree_id(e).ok_or(Error::Overflow)?;
    let tree = TreeRecord {
        id,
        donor: donor.clone(),
        executor: None,
        tree_count,
        location: location.clone(),
        enterprise_name,
        donation_amount: payment,
        reward_amount,
        image_hash: None,
        document_hash: None,
        planted_at: 0,
        verified_at: 0,
        status: TreeStatus::Created,
    };
    storage::put_tree(e, &tree);

    let mut stats = storage::get_user_stats(e, donor);
    stats.donated_trees = stats
        .donated_trees
        .checked_add(u64::from(tree_count))
        .ok_or(Error::Overflow)?;
    storage::put_user_stats(e, donor, &stats);

    let donations = storage::total_donations(e).checked_add(payment).ok_or(Error::Overflow)?;
    storage::set_total_donations(e, donations);

    e.events().publish(
        (symbol_short!("purchased"), id),
        (donor.clone(), payment, tree_count, location.clone()),
    );
    Ok(id)
}
