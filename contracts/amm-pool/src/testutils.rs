use crate::{AmmPool, AmmPoolClient};
use amm_types::PoolId;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

/// Balance minted to every funded user, per asset
pub const STARTING_BALANCE: i128 = 1_000_000;

/// Ledger until which test allowances stay valid
pub const APPROVAL_LEDGER: u32 = 1_000;

/// Registered AMM contract plus two Stellar asset contracts
pub struct Fixture<'a> {
    pub env: Env,
    pub amm: AmmPoolClient<'a>,
    pub token_a: token::Client<'a>,
    pub token_b: token::Client<'a>,
    admin_a: token::StellarAssetClient<'a>,
    admin_b: token::StellarAssetClient<'a>,
}

#[contracttype]
#[derive(Clone)]
enum CallbackKey {
    Amm,
    Armed,
}

/// Token whose transfer hooks call back into the AMM once armed.
///
/// Disarmed, it accepts every transfer without tracking balances.
#[contract]
pub struct CallbackToken;

#[contractimpl]
impl CallbackToken {
    pub fn set_amm(env: Env, amm: Address) {
        env.storage().instance().set(&CallbackKey::Amm, &amm);
    }

    pub fn arm(env: Env, armed: bool) {
        env.storage().instance().set(&CallbackKey::Armed, &armed);
    }

    pub fn transfer_from(env: Env, _spender: Address, _from: Address, _to: Address, _amount: i128) {
        call_amm(&env);
    }

    pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) {
        call_amm(&env);
    }
}

/// Read AMM state from inside a transfer the AMM is still executing
fn call_amm(env: &Env) {
    let armed: bool = env
        .storage()
        .instance()
        .get(&CallbackKey::Armed)
        .unwrap_or(false);
    if !armed {
        return;
    }
    let amm: Address = env.storage().instance().get(&CallbackKey::Amm).unwrap();
    let client = AmmPoolClient::new(env, &amm);
    for id in client.pools_paginated(&0, &amm_types::MAX_POOLS_PER_PAGE).iter() {
        client.get_pool(&id);
    }
}

fn create_token<'a>(env: &Env) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let issuer = Address::generate(env);
    let address = env.register_stellar_asset_contract_v2(issuer).address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

impl<'a> Fixture<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(AmmPool, ());
        let amm = AmmPoolClient::new(&env, &contract_id);
        let (token_a, admin_a) = create_token(&env);
        let (token_b, admin_b) = create_token(&env);

        Self {
            env,
            amm,
            token_a,
            token_b,
            admin_a,
            admin_b,
        }
    }

    /// Mint `amount` of both assets to `user`
    pub fn mint(&self, user: &Address, amount: i128) {
        self.admin_a.mint(user, &amount);
        self.admin_b.mint(user, &amount);
    }

    /// Let the AMM pull up to `amount` of both assets from `user`
    pub fn approve(&self, user: &Address, amount: i128) {
        self.token_a
            .approve(user, &self.amm.address, &amount, &APPROVAL_LEDGER);
        self.token_b
            .approve(user, &self.amm.address, &amount, &APPROVAL_LEDGER);
    }

    pub fn approve_all(&self, user: &Address) {
        self.approve(user, STARTING_BALANCE);
    }

    /// New account holding and approving `amount` of both assets
    pub fn user_with(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.mint(&user, amount);
        self.approve(&user, amount);
        user
    }

    pub fn funded_user(&self) -> Address {
        self.user_with(STARTING_BALANCE)
    }

    /// A third asset held and approved by `user`
    pub fn new_token(&self, user: &Address) -> Address {
        let (client, admin) = create_token(&self.env);
        admin.mint(user, &STARTING_BALANCE);
        client.approve(user, &self.amm.address, &STARTING_BALANCE, &APPROVAL_LEDGER);
        client.address
    }

    /// Callback token pointed at this fixture's AMM, disarmed
    pub fn callback_token(&self) -> CallbackTokenClient<'a> {
        let address = self.env.register(CallbackToken, ());
        let client = CallbackTokenClient::new(&self.env, &address);
        client.set_amm(&self.amm.address);
        client
    }

    /// Create the A/B pool with `caller` as first depositor
    pub fn create_pool(&self, caller: &Address, amount_a: u128, amount_b: u128) -> PoolId {
        self.amm.create_pool(
            caller,
            &self.token_a.address,
            &self.token_b.address,
            &amount_a,
            &amount_b,
        )
    }

    /// Current (asset A, asset B) balances of `account`
    pub fn balances(&self, account: &Address) -> (i128, i128) {
        (self.token_a.balance(account), self.token_b.balance(account))
    }
}
