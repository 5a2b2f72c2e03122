#![no_main]

use access_control::{AccessControlContract, AccessControlContractClient};
use arbitrary::Arbitrary;
use common::roles;
use contracts_repository::ContractsRepositoryContract;
use escrow_token::{EscrowTokenContract, EscrowTokenContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env, String,
};
use staking::{StakingConfig, StakingContract, StakingContractClient};

const FEES: i128 = 100;
const START: u64 = 1_000;
const DURATION: u64 = 100_000;
const HORIZON: u64 = START + DURATION + 50 * 86_400;
const REWARD_AMOUNT: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake { amount: u64, delay: u64 },
    GetReward,
    Withdraw { round: u8 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let acl_id = env.register(AccessControlContract, (admin.clone(),));
    let repo_id = env.register(ContractsRepositoryContract, (acl_id.clone(),));
    let escrow_id = env.register(
        EscrowTokenContract,
        (
            acl_id.clone(),
            String::from_str(&env, "Staked Sparta"),
            String::from_str(&env, "stSPARTA"),
            18u32,
        ),
    );
    let principal = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let native = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(
        StakingContract,
        (StakingConfig {
            principal_token: principal.clone(),
            escrow_token: escrow_id.clone(),
            access_control: acl_id.clone(),
            repository: repo_id,
            treasury: Address::generate(&env),
            fee_token: native.clone(),
            fees: FEES,
        },),
    );
    let client = StakingContractClient::new(&env, &contract_id);
    let escrow = EscrowTokenContractClient::new(&env, &escrow_id);
    AccessControlContractClient::new(&env, &acl_id).grant_role(
        &admin,
        &roles::ESCROW_MINTER,
        &contract_id,
    );

    StellarAssetClient::new(&env, &principal).mint(&contract_id, &REWARD_AMOUNT);
    client.initialize(&admin, &REWARD_AMOUNT, &START, &DURATION, &HORIZON);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for user in &users {
        StellarAssetClient::new(&env, &principal).mint(user, &(u64::MAX as i128));
        StellarAssetClient::new(&env, &native).mint(user, &(FEES * 10_000));
    }

    // Errors are expected; panics and broken invariants are not.
    for (i, action) in actions.into_iter().enumerate() {
        let user = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(user, &(amount as i128));
            }
            FuzzAction::Unstake { amount, delay } => {
                let amount = amount as i128;
                let _ = escrow.try_approve(user, &contract_id, &amount);
                let _ = client.try_unstake(user, &amount, &delay, &FEES);
            }
            FuzzAction::GetReward => {
                let _ = client.try_get_reward(user, &FEES);
            }
            FuzzAction::Withdraw { round } => {
                let _ = client.try_withdraw_tokens_to_claim(user, &(round as u32), &FEES);
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
        }

        let total = client.total_supply();
        let sum: i128 = users.iter().map(|u| client.balance_of(u)).sum();
        assert_eq!(total, sum);
        assert_eq!(escrow.total_supply(), total);
    }
});
