//! End-to-end coverage of the public router surface, driven the way the
//! hosting runtime would drive it: distinct caller identities, tagged
//! results, one call at a time.

use arb_router::{
    PermissionLevel, Principal, Router, RouterError, TokenId,
    errors::{PermissionError, RegistryError},
};

fn deployer() -> Principal {
    Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
}

fn token(name: &str) -> TokenId {
    TokenId::new(format!("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.{name}"))
}

#[test]
fn register_liquidity_pool() {
    let mut router = Router::new(deployer());

    let ok = router
        .register_pool(
            &deployer(),
            "test-pool-1",
            "stackswap",
            token("token-a"),
            token("token-b"),
            10_000,
            5_000,
            30,
        )
        .unwrap();
    assert!(ok);

    let pool = router
        .get_liquidity_pool("test-pool-1", "stackswap")
        .expect("registered pool must be readable");
    assert_eq!(pool.token_a, token("token-a"));
    assert_eq!(pool.token_b, token("token-b"));
    assert_eq!(pool.reserve_a, 10_000);
    assert_eq!(pool.reserve_b, 5_000);
    assert_eq!(pool.fee_bps, 30);

    assert!(router.get_liquidity_pool("test-pool-1", "otherswap").is_none());
}

#[test]
fn simulate_arbitrage_trade() {
    let mut router = Router::new(deployer());
    let token_in = token("token-x");

    router
        .register_pool(
            &deployer(), "source-pool", "dex1",
            token_in.clone(), token("token-y"),
            10_000, 5_000, 30,
        )
        .unwrap();
    router
        .register_pool(
            &deployer(), "dest-pool", "dex2",
            token_in.clone(), token("token-y"),
            8_000, 6_000, 25,
        )
        .unwrap();

    let quote = router
        .simulate_arbitrage("source-pool", "dest-pool", &token_in, 1_000)
        .unwrap();

    // Constant product with fee on the input leg, truncating division:
    //   leg 1: 1000 -> 997 after 30 bps; 997*5000/10997 = 453
    //   leg 2: 453 -> 451 after 25 bps; 451*8000/6451 = 559
    assert_eq!(quote.amount_in, 1_000);
    assert_eq!(quote.leg1_out, 453);
    assert_eq!(quote.leg2_out, 559);
    assert_eq!(quote.net_profit, -441);
    assert!(!quote.profitable);

    // Identical inputs, identical quote.
    let again = router
        .simulate_arbitrage("source-pool", "dest-pool", &token_in, 1_000)
        .unwrap();
    assert_eq!(again.leg1_out, quote.leg1_out);
    assert_eq!(again.leg2_out, quote.leg2_out);
    assert_eq!(again.net_profit, quote.net_profit);
}

#[test]
fn permission_management() {
    let mut router = Router::new(deployer());
    let wallet_1 = Principal::from("ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5");

    // Owner grants EXECUTE (ordinal 2).
    assert_eq!(router.grant_permission(&deployer(), wallet_1.clone(), 2), Ok(true));
    assert_eq!(router.get_permission(&wallet_1), PermissionLevel::Execute);

    // An EXECUTE holder cannot grant.
    let wallet_2 = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");
    let err = router
        .grant_permission(&wallet_1, wallet_2.clone(), 2)
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Permission(PermissionError::Unauthorized { .. })
    ));
    assert_eq!(router.get_permission(&wallet_2), PermissionLevel::None);
}

#[test]
fn permission_gate_on_registration() {
    let mut router = Router::new(deployer());
    let wallet_1 = Principal::from("ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5");

    // No grant yet: registration refused, registry untouched.
    let err = router
        .register_pool(
            &wallet_1, "p1", "dex1",
            token("token-a"), token("token-b"),
            1_000, 1_000, 30,
        )
        .unwrap_err();
    assert_eq!(err.code(), 100);
    assert!(router.get_liquidity_pool("p1", "dex1").is_none());

    // After EXECUTE, the same call lands.
    router.grant_permission(&deployer(), wallet_1.clone(), 2).unwrap();
    assert_eq!(
        router.register_pool(
            &wallet_1, "p1", "dex1",
            token("token-a"), token("token-b"),
            1_000, 1_000, 30,
        ),
        Ok(true)
    );
}

#[test]
fn registration_preconditions() {
    let mut router = Router::new(deployer());

    let err = router
        .register_pool(
            &deployer(), "p1", "dex1",
            token("token-a"), token("token-a"),
            1_000, 1_000, 30,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Registry(RegistryError::InvalidTokenPair(_))
    ));

    let err = router
        .register_pool(
            &deployer(), "p1", "dex1",
            token("token-a"), token("token-b"),
            1_000, 1_000, 10_001,
        )
        .unwrap_err();
    assert_eq!(err.code(), 103);
    assert!(router.get_liquidity_pool("p1", "dex1").is_none());
}

#[test]
fn zero_reserve_pool_registers_but_refuses_simulation() {
    let mut router = Router::new(deployer());
    let token_in = token("token-x");

    router
        .register_pool(
            &deployer(), "dry-pool", "dex1",
            token_in.clone(), token("token-y"),
            0, 5_000, 30,
        )
        .unwrap();
    router
        .register_pool(
            &deployer(), "dest-pool", "dex2",
            token_in.clone(), token("token-y"),
            8_000, 6_000, 25,
        )
        .unwrap();

    assert!(router.get_liquidity_pool("dry-pool", "dex1").is_some());

    let err = router
        .simulate_arbitrage("dry-pool", "dest-pool", &token_in, 1_000)
        .unwrap_err();
    assert_eq!(err.code(), 107);
}

#[test]
fn reserve_updates_flow_into_quotes() {
    let mut router = Router::new(deployer());
    let token_in = token("token-x");

    router
        .register_pool(
            &deployer(), "source-pool", "dex1",
            token_in.clone(), token("token-y"),
            10_000, 5_000, 30,
        )
        .unwrap();
    router
        .register_pool(
            &deployer(), "dest-pool", "dex2",
            token_in.clone(), token("token-y"),
            8_000, 6_000, 25,
        )
        .unwrap();

    let before = router
        .simulate_arbitrage("source-pool", "dest-pool", &token_in, 1_000)
        .unwrap();

    router
        .update_reserves(&deployer(), "source-pool", "dex1", 10_000, 8_000)
        .unwrap();

    let after = router
        .simulate_arbitrage("source-pool", "dest-pool", &token_in, 1_000)
        .unwrap();

    // More token-y behind the same token-x means a better first leg.
    assert!(after.leg1_out > before.leg1_out);
    assert!(after.net_profit > before.net_profit);
}
