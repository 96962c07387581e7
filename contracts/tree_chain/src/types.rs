use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a tree donation. Verified and Rejected are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeStatus {
    /// Paid for, waiting for an executor to claim it.
    Created,
    /// Claimed by an executor who submitted proof, waiting for review.
    Planted,
    /// Approved by the owner; rewards have been paid out.
    Verified,
    /// Proof was rejected by the owner; no rewards were paid.
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeRecord {
    pub id: u64,
    pub donor: Address,
    /// Set when the record reaches Planted.
    pub executor: Option<Address>,
    pub tree_count: u32,
    pub location: String,
    /// Present only for enterprise purchases.
    pub enterprise_name: Option<String>,
    /// Exact payment pulled from the donor, in payment-token units.
    pub donation_amount: i128,
    /// Executor payout owed on verification, fixed at purchase time.
    pub reward_amount: i128,
    pub image_hash: Option<String>,
    pub document_hash: Option<String>,
    /// Ledger timestamp of the Planted transition, 0 before it.
    pub planted_at: u64,
    /// Ledger timestamp of the Verified/Rejected transition, 0 before it.
    pub verified_at: u64,
    pub status: TreeStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStats {
    /// Trees this address has paid for, across all its purchases.
    pub donated_trees: u64,
    /// Trees this address has planted that passed verification.
    pub planted_trees: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnterpriseStats {
    pub donated_trees: u64,
    pub total_spent: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    pub total_trees_planted: u64,
    pub total_donations: i128,
    pub total_rewards_paid: i128,
    /// Live payment-token balance held by the contract.
    pub available_balance: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Owner,
    PaymentToken,
    RewardToken,
    TreePrice,
    ExecutorReward,
    TokenRewardPerTree,
    NextTreeId,
    TotalPlanted,
    TotalDonations,
    TotalRewardsPaid,
    // persistent
    Tree(u64),
    UserStats(Address),
    EnterpriseStats(Address),
}
