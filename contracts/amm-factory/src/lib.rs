#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env,
    IntoVal, Symbol, Vec,
};

#[contract]
pub struct Factory;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 200,
    IdenticalTokens = 201,
    PairExists = 202,
}

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to change the fee recipient and itself
    FeeToSetter,
    /// Protocol fee recipient; absent while the fee switch is off
    FeeTo,
    /// Pair WASM hash for deployment
    PairWasmHash,
    /// (token0, token1) -> pair address, keyed on the sorted pair
    Pair(Address, Address),
    /// Total number of pairs created (counter for indexed storage)
    PairCount,
    /// Pair address at index (indexed storage to avoid unbounded Vec)
    PairAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl Factory {
    /// Initialize the factory with the fee-setter authority and the pair
    /// WASM hash used for deployments. The fee switch starts off.
    pub fn initialize(
        env: Env,
        fee_to_setter: Address,
        pair_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::FeeToSetter) {
            return Err(FactoryError::AlreadyInitialized);
        }

        env.storage()
            .instance()
            .set(&DataKey::FeeToSetter, &fee_to_setter);
        env.storage()
            .instance()
            .set(&DataKey::PairWasmHash, &pair_wasm_hash);
        env.storage().instance().set(&DataKey::PairCount, &0u32);

        extend_instance_ttl(&env);
        Ok(())
    }

    /// Create the pair for a token pair, at most once per unordered pair.
    /// Returns the pair contract address.
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, FactoryError> {
        if token_a == token_b {
            return Err(FactoryError::IdenticalTokens);
        }

        // Sort tokens: (A, B) and (B, A) are the same pair
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let pair_key = DataKey::Pair(token0.clone(), token1.clone());
        if env.storage().persistent().has(&pair_key) {
            return Err(FactoryError::PairExists);
        }

        let pair_wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .expect("Not initialized");

        // Salt from the sorted token addresses: the same unordered pair
        // always derives the same pair address from this factory
        let salt = pair_salt(&env, &token0, &token1);
        let pair_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(pair_wasm_hash, ());

        init_pair(
            &env,
            &pair_address,
            &env.current_contract_address(),
            &token0,
            &token1,
        );

        // Store pair address by sorted token pair; lookups sort the same way
        env.storage().persistent().set(&pair_key, &pair_address);
        extend_persistent_ttl(&env, &pair_key);

        // Store pair at index (indexed storage - O(1) append)
        let pair_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0);
        let pair_at_key = DataKey::PairAt(pair_count);
        env.storage().persistent().set(&pair_at_key, &pair_address);
        extend_persistent_ttl(&env, &pair_at_key);

        env.storage()
            .instance()
            .set(&DataKey::PairCount, &(pair_count + 1));

        env.events().publish(
            (Symbol::new(&env, "pair_created"),),
            (token0, token1, pair_address.clone(), pair_count + 1),
        );

        extend_instance_ttl(&env);
        Ok(pair_address)
    }

    /// Get the pair address for a token pair, in either order
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let pair_key = DataKey::Pair(token0, token1);
        env.storage().persistent().get(&pair_key)
    }

    /// Get total number of pairs created
    pub fn all_pairs_length(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0)
    }

    /// Get the pair address at a creation index
    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        let pair_at_key = DataKey::PairAt(index);
        env.storage().persistent().get(&pair_at_key)
    }

    /// Get pairs with pagination
    /// Returns up to `limit` pairs starting from `start_index`
    /// Maximum limit is 50 to stay within Soroban's read entry limits
    pub fn get_pairs_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let safe_limit = if limit > 50 { 50 } else { limit };

        let pair_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0);

        let mut pairs: Vec<Address> = Vec::new(&env);

        let end_index = if start_index + safe_limit > pair_count {
            pair_count
        } else {
            start_index + safe_limit
        };

        for i in start_index..end_index {
            if let Some(pair) = env.storage().persistent().get(&DataKey::PairAt(i)) {
                pairs.push_back(pair);
            }
        }

        pairs
    }

    /// Get the protocol fee recipient; `None` means the fee switch is off
    pub fn get_fee_to(env: Env) -> Option<Address> {
        extend_instance_ttl(&env);
        env.storage().instance().get(&DataKey::FeeTo)
    }

    /// Set or clear the protocol fee recipient. Only the fee setter may call.
    pub fn set_fee_to(env: Env, new_fee_to: Option<Address>) {
        let setter: Address = env
            .storage()
            .instance()
            .get(&DataKey::FeeToSetter)
            .expect("Not initialized");
        setter.require_auth();

        let old_fee_to: Option<Address> = env.storage().instance().get(&DataKey::FeeTo);
        match &new_fee_to {
            Some(recipient) => env.storage().instance().set(&DataKey::FeeTo, recipient),
            None => env.storage().instance().remove(&DataKey::FeeTo),
        }

        env.events().publish(
            (Symbol::new(&env, "fee_to_updated"),),
            (new_fee_to, old_fee_to),
        );

        extend_instance_ttl(&env);
    }

    /// Get the fee-setter authority
    pub fn get_fee_to_setter(env: Env) -> Address {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::FeeToSetter)
            .expect("Not initialized")
    }

    /// Hand the fee-setter authority to a new address. Only the current
    /// fee setter may call.
    pub fn set_fee_to_setter(env: Env, new_setter: Address) {
        let setter: Address = env
            .storage()
            .instance()
            .get(&DataKey::FeeToSetter)
            .expect("Not initialized");
        setter.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::FeeToSetter, &new_setter);
        extend_instance_ttl(&env);
    }

    /// Get the pair WASM hash
    pub fn get_pair_wasm_hash(env: Env) -> BytesN<32> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .expect("Not initialized")
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

/// Deterministic deployment salt for a sorted token pair
fn pair_salt(env: &Env, token0: &Address, token1: &Address) -> BytesN<32> {
    let mut salt_data = Bytes::new(env);
    salt_data.append(&token0.clone().to_xdr(env));
    salt_data.append(&token1.clone().to_xdr(env));
    env.crypto().sha256(&salt_data).to_bytes()
}

// Pair initialization via invoke
fn init_pair(env: &Env, pair: &Address, factory: &Address, token0: &Address, token1: &Address) {
    env.invoke_contract::<()>(
        pair,
        &Symbol::new(env, "initialize"),
        (factory, token0, token1).into_val(env),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, BytesN, Env};

    fn setup_factory<'a>(env: &Env) -> (FactoryClient<'a>, Address) {
        env.mock_all_auths();
        let fee_to_setter = Address::generate(env);
        let contract_id = env.register(Factory, ());
        let client = FactoryClient::new(env, &contract_id);
        let pair_wasm_hash = BytesN::from_array(env, &[1u8; 32]);
        client.initialize(&fee_to_setter, &pair_wasm_hash);
        (client, fee_to_setter)
    }

    // === Initialization Tests ===

    #[test]
    fn test_initialize_factory() {
        let env = Env::default();
        let (client, fee_to_setter) = setup_factory(&env);

        assert_eq!(client.get_fee_to_setter(), fee_to_setter);
        assert_eq!(
            client.get_pair_wasm_hash(),
            BytesN::from_array(&env, &[1u8; 32])
        );
        // fee switch starts off
        assert!(client.get_fee_to().is_none());
        assert_eq!(client.all_pairs_length(), 0);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        let (client, fee_to_setter) = setup_factory(&env);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        let result = client.try_initialize(&fee_to_setter, &pair_wasm_hash);
        assert_eq!(result, Err(Ok(FactoryError::AlreadyInitialized)));
    }

    // === Pair Creation Tests ===

    #[test]
    fn test_create_pair_identical_tokens_fails() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        let token = Address::generate(&env);
        let result = client.try_create_pair(&token, &token);
        assert_eq!(result, Err(Ok(FactoryError::IdenticalTokens)));
    }

    #[test]
    fn test_get_pair_not_exists() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);
        assert!(client.get_pair(&token_a, &token_b).is_none());
    }

    #[test]
    fn test_get_pair_token_order_invariant() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);

        // querying with either order resolves the same slot
        let pair_ab = client.get_pair(&token_a, &token_b);
        let pair_ba = client.get_pair(&token_b, &token_a);
        assert_eq!(pair_ab, pair_ba);
    }

    // === Registry Tests ===

    #[test]
    fn test_registry_empty() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        assert_eq!(client.all_pairs_length(), 0);
        assert!(client.all_pairs(&0).is_none());
        assert_eq!(client.get_pairs_paginated(&0, &10).len(), 0);
    }

    #[test]
    fn test_pagination_limit_is_capped() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        // oversized limits are tolerated, not rejected
        assert_eq!(client.get_pairs_paginated(&0, &1000).len(), 0);
    }

    // === Fee Admin Tests ===

    #[test]
    fn test_set_fee_to_round_trip() {
        let env = Env::default();
        let (client, _) = setup_factory(&env);

        assert!(client.get_fee_to().is_none());

        let recipient = Address::generate(&env);
        client.set_fee_to(&Some(recipient.clone()));
        assert_eq!(client.get_fee_to(), Some(recipient));

        // clearing turns the fee switch back off
        client.set_fee_to(&None);
        assert!(client.get_fee_to().is_none());
    }

    #[test]
    fn test_set_fee_to_setter() {
        let env = Env::default();
        let (client, fee_to_setter) = setup_factory(&env);

        assert_eq!(client.get_fee_to_setter(), fee_to_setter);

        let new_setter = Address::generate(&env);
        client.set_fee_to_setter(&new_setter);
        assert_eq!(client.get_fee_to_setter(), new_setter);
    }
}
