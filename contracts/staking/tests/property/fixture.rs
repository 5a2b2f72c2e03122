use access_control::{AccessControlContract, AccessControlContractClient};
use common::roles;
use contracts_repository::ContractsRepositoryContract;
use escrow_token::{EscrowTokenContract, EscrowTokenContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};
use staking::{penalty::DAY, StakingConfig, StakingContract, StakingContractClient};

pub const ONE: i128 = 1_000_000_000_000_000_000;
pub const REWARD_AMOUNT: i128 = 1_000_000 * ONE;
pub const START: u64 = 100_000;
pub const DURATION: u64 = 1_000_000;
pub const HORIZON: u64 = START + DURATION + 90 * DAY;
pub const FEES: i128 = 500;

pub struct Pool {
    pub env: Env,
    pub client: StakingContractClient<'static>,
    pub escrow: EscrowTokenContractClient<'static>,
    pub principal: TokenClient<'static>,
    pub treasury: Address,
}

/// Deploys and initialises a pool whose schedule starts at the current
/// ledger time.
pub fn pool() -> Pool {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let acl_id = env.register(AccessControlContract, (admin.clone(),));
    let acl = AccessControlContractClient::new(&env, &acl_id);
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
    let principal_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let native_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let treasury = Address::generate(&env);
    let staking_id = env.register(
        StakingContract,
        (StakingConfig {
            principal_token: principal_id.clone(),
            escrow_token: escrow_id.clone(),
            access_control: acl_id,
            repository: repo_id,
            treasury: treasury.clone(),
            fee_token: native_id,
            fees: FEES,
        },),
    );
    acl.grant_role(&admin, &roles::ESCROW_MINTER, &staking_id);

    StellarAssetClient::new(&env, &principal_id).mint(&staking_id, &REWARD_AMOUNT);
    let client = StakingContractClient::new(&env, &staking_id);
    client.initialize(&admin, &REWARD_AMOUNT, &START, &DURATION, &HORIZON);

    Pool {
        client,
        escrow: EscrowTokenContractClient::new(&env, &escrow_id),
        principal: TokenClient::new(&env, &principal_id),
        treasury,
        env,
    }
}

impl Pool {
    /// A user holding `principal` tokens and native asset for fees.
    pub fn user(&self, principal: i128) -> Address {
        let user = Address::generate(&self.env);
        let config = self.client.get_config();
        StellarAssetClient::new(&self.env, &config.principal_token).mint(&user, &principal);
        StellarAssetClient::new(&self.env, &config.fee_token).mint(&user, &(FEES * 1_000));
        user
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }
}
