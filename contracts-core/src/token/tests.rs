//! Contract-level tests, each running against a fresh deployment on a local chain

use alloy_primitives::{Address, U256};
use contracts_common::{
    constants::{TOKEN_NAME, TOKEN_SYMBOL, V1, V2},
    solidity::{Approval, HolderEnriched, Initialized, Paused, Transfer},
    types::{CallContext, TokenEvent},
};

use crate::{
    backends::TokenStorage,
    components::{ownable::Ownable, pausable::Pausable},
    errors::TokenError,
    test_helpers::{one_ether, LocalChain, MemoryBackend},
};

use super::{custody::EthCustody, erc20::Erc20, MyToken};

/// Deploys a fresh token, returning the chain along with the deployer and a second signer
fn setup() -> (LocalChain, Address, Address) {
    let chain = LocalChain::deploy().unwrap();
    let deployer = chain.deployer();
    let addr1 = chain.signer(1);
    (chain, deployer, addr1)
}

/// The token balance of `account`
fn balance_of(chain: &LocalChain, account: Address) -> U256 {
    chain.view(|b| Erc20::balance_of(b, account))
}

/// Asserts that the sum of all balances equals the total supply
fn assert_supply_invariant(chain: &LocalChain) {
    chain.view(|b: &MemoryBackend| {
        let sum = b.balances.values().fold(U256::ZERO, |acc, bal| acc + *bal);
        assert_eq!(sum, b.get_total_supply());
    });
}

// ------------------
// | INITIALIZATION |
// ------------------

#[test]
fn test_initializes() {
    let (chain, deployer, _) = setup();

    assert_eq!(balance_of(&chain, deployer), one_ether());
    assert_eq!(chain.view(|b| Ownable::owner(b)), deployer);
    assert_eq!(Erc20::name(), TOKEN_NAME);
    assert_eq!(Erc20::symbol(), TOKEN_SYMBOL);
    assert_eq!(Erc20::decimals(), 18);
    assert_eq!(chain.view(|b| b.get_initialized_version()), V1);
}

#[test]
fn test_initialize_twice_reverts() {
    let (mut chain, deployer, addr1) = setup();

    for caller in [deployer, addr1] {
        let res = chain.execute(CallContext::new(caller), MyToken::initialize);
        assert_eq!(res, Err(TokenError::AlreadyInitialized));
    }
    assert_eq!(chain.view(|b| Ownable::owner(b)), deployer);
}

// -------------------
// | WORK WITH ETHER |
// -------------------

#[test]
fn test_zero_deposit_reverts() {
    let (mut chain, deployer, addr1) = setup();

    for caller in [deployer, addr1] {
        let res = chain.execute(CallContext::new(caller), MyToken::deposit);
        assert_eq!(res, Err(TokenError::ZeroDeposit));
    }
}

#[test]
fn test_deposit_recorded() {
    let (mut chain, deployer, _) = setup();

    chain.execute(CallContext::with_value(deployer, one_ether()), MyToken::deposit).unwrap();
    assert_eq!(chain.view(|b| EthCustody::get_eth_balance(b, deployer)), one_ether());
}

#[test]
fn test_deposit_and_withdraw() {
    let (mut chain, deployer, _) = setup();
    let starting_contract_balance = chain.contract_eth_balance();
    let starting_deployer_balance = chain.eth_balance(deployer);

    chain.execute(CallContext::with_value(deployer, one_ether()), MyToken::deposit).unwrap();
    assert_eq!(chain.contract_eth_balance(), one_ether());

    let paid = chain.execute(CallContext::new(deployer), MyToken::withdraw_balance).unwrap();
    assert_eq!(paid, one_ether());
    assert_eq!(chain.contract_eth_balance(), starting_contract_balance);
    assert_eq!(chain.eth_balance(deployer), starting_deployer_balance);
}

#[test]
fn test_withdraw_only_own_deposit() {
    let (mut chain, deployer, addr1) = setup();

    chain.execute(CallContext::with_value(addr1, one_ether()), MyToken::deposit).unwrap();
    let res = chain.execute(CallContext::new(deployer), MyToken::withdraw_balance);
    assert_eq!(res, Err(TokenError::NothingToWithdraw));
    assert_eq!(chain.contract_eth_balance(), one_ether());
}

#[test]
fn test_owner_withdraws_all() {
    let (mut chain, deployer, _) = setup();
    let starting_contract_balance = chain.contract_eth_balance();

    for i in 1..6 {
        let ctx = CallContext::with_value(chain.signer(i), one_ether());
        chain.execute(ctx, MyToken::deposit).unwrap();
    }
    assert_eq!(chain.contract_eth_balance(), U256::from(5) * one_ether());

    let before = chain.eth_balance(deployer);
    let swept = chain.execute(CallContext::new(deployer), MyToken::withdraw_all).unwrap();
    assert_eq!(swept, U256::from(5) * one_ether());
    assert_eq!(chain.contract_eth_balance(), starting_contract_balance);
    assert_eq!(chain.eth_balance(deployer), before + swept);

    // No depositor can claim a stale record
    for i in 1..6 {
        let signer = chain.signer(i);
        assert_eq!(chain.view(|b| EthCustody::get_eth_balance(b, signer)), U256::ZERO);
        let res = chain.execute(CallContext::new(signer), MyToken::withdraw_balance);
        assert_eq!(res, Err(TokenError::NothingToWithdraw));
    }
    assert_eq!(chain.view(|b| EthCustody::total_eth_deposits(b)), U256::ZERO);
}

#[test]
fn test_withdraw_all_only_owner() {
    let (mut chain, _, _) = setup();

    for i in 1..4 {
        let res = chain.execute(CallContext::new(chain.signer(i)), MyToken::withdraw_all);
        assert_eq!(res, Err(TokenError::NotOwner));
    }
}

#[test]
fn test_failed_payout_reverts_withdrawal() {
    let (mut chain, _, addr1) = setup();

    chain.execute(CallContext::with_value(addr1, one_ether()), MyToken::deposit).unwrap();
    chain.reject_eth(addr1);

    let res = chain.execute(CallContext::new(addr1), MyToken::withdraw_balance);
    assert_eq!(res, Err(TokenError::EthTransferFailed));
    assert_eq!(chain.view(|b| EthCustody::get_eth_balance(b, addr1)), one_ether());
}

// --------------------
// | WORK WITH TOKENS |
// --------------------

#[test]
fn test_mint() {
    let (mut chain, deployer, _) = setup();
    let starting_balance = balance_of(&chain, deployer);

    let ctx = CallContext::new(deployer);
    chain.execute(ctx, |b, ctx| MyToken::mint(b, ctx, deployer, one_ether())).unwrap();

    assert_eq!(balance_of(&chain, deployer), starting_balance + one_ether());
    assert_supply_invariant(&chain);
}

#[test]
fn test_mint_only_owner() {
    let (mut chain, _, addr1) = setup();

    let ctx = CallContext::new(addr1);
    let res = chain.execute(ctx, |b, ctx| MyToken::mint(b, ctx, addr1, one_ether()));
    assert_eq!(res, Err(TokenError::NotOwner));
}

#[test]
fn test_increase_allowance() {
    let (mut chain, deployer, addr1) = setup();
    let starting_allowance = chain.view(|b| Erc20::allowance(b, deployer, addr1));

    let ctx = CallContext::new(deployer);
    chain
        .execute(ctx, |b, ctx| MyToken::increase_allowance(b, ctx, addr1, one_ether()))
        .unwrap();

    let allowance = chain.view(|b| Erc20::allowance(b, deployer, addr1));
    assert_eq!(allowance, starting_allowance + one_ether());
}

#[test]
fn test_transfer() {
    let (mut chain, deployer, addr1) = setup();
    let starting_owner_balance = balance_of(&chain, deployer);
    let starting_user_balance = balance_of(&chain, addr1);

    let ctx = CallContext::new(deployer);
    chain
        .execute(ctx, |b, ctx| MyToken::increase_allowance(b, ctx, addr1, one_ether()))
        .unwrap();
    chain.execute(ctx, |b, ctx| MyToken::transfer(b, ctx, addr1, one_ether())).unwrap();

    assert_eq!(balance_of(&chain, deployer), starting_owner_balance - one_ether());
    assert_eq!(balance_of(&chain, addr1), starting_user_balance + one_ether());
    assert_supply_invariant(&chain);
}

#[test]
fn test_transfer_from_consumes_allowance() {
    let (mut chain, deployer, addr1) = setup();
    let addr2 = chain.signer(2);
    let half = one_ether() / U256::from(2);

    let owner_ctx = CallContext::new(deployer);
    chain.execute(owner_ctx, |b, ctx| MyToken::approve(b, ctx, addr1, half)).unwrap();

    let spender_ctx = CallContext::new(addr1);
    chain
        .execute(spender_ctx, |b, ctx| MyToken::transfer_from(b, ctx, deployer, addr2, half))
        .unwrap();
    assert_eq!(balance_of(&chain, addr2), half);
    assert_eq!(chain.view(|b| Erc20::allowance(b, deployer, addr1)), U256::ZERO);

    let res =
        chain.execute(spender_ctx, |b, ctx| MyToken::transfer_from(b, ctx, deployer, addr2, half));
    assert_eq!(res, Err(TokenError::InsufficientAllowance));
    assert_supply_invariant(&chain);
}

#[test]
fn test_decrease_allowance() {
    let (mut chain, deployer, addr1) = setup();
    let approved = U256::from(100);
    let subtracted = U256::from(30);

    let ctx = CallContext::new(deployer);
    chain.execute(ctx, |b, ctx| MyToken::approve(b, ctx, addr1, approved)).unwrap();
    let res = chain.execute(ctx, |b, ctx| MyToken::decrease_allowance(b, ctx, addr1, subtracted));
    assert_eq!(res, Ok(true));

    let remaining = approved - subtracted;
    assert_eq!(chain.view(|b| Erc20::allowance(b, deployer, addr1)), remaining);
    assert_eq!(
        chain.logs().last(),
        Some(&TokenEvent::Approval(Approval {
            owner: deployer,
            spender: addr1,
            value: remaining,
        }))
    );
}

#[test]
fn test_decrease_allowance_below_zero() {
    let (mut chain, deployer, addr1) = setup();

    let ctx = CallContext::new(deployer);
    let res = chain.execute(ctx, |b, ctx| MyToken::decrease_allowance(b, ctx, addr1, U256::from(1)));
    assert_eq!(res, Err(TokenError::InsufficientAllowance));
}

#[test]
fn test_burn() {
    let (mut chain, deployer, _) = setup();
    let starting_balance = balance_of(&chain, deployer);
    let starting_supply = chain.view(|b| Erc20::total_supply(b));

    let ctx = CallContext::new(deployer);
    chain.execute(ctx, |b, ctx| MyToken::burn(b, ctx, one_ether())).unwrap();

    assert_eq!(balance_of(&chain, deployer) + one_ether(), starting_balance);
    assert_eq!(chain.view(|b| Erc20::total_supply(b)), starting_supply - one_ether());
    assert_supply_invariant(&chain);
}

#[test]
fn test_make_holder_rich() {
    let (mut chain, deployer, addr1) = setup();
    let total_supply = chain.view(|b| Erc20::total_supply(b));
    let starting_holder_balance = balance_of(&chain, addr1);

    let ctx = CallContext::new(deployer);
    let amount =
        chain.execute(ctx, |b, ctx| MyToken::make_holder_rich(b, ctx, addr1)).unwrap();

    assert_eq!(amount, total_supply);
    assert_eq!(balance_of(&chain, addr1), starting_holder_balance + total_supply);
    assert_eq!(chain.view(|b| Erc20::total_supply(b)), total_supply * U256::from(2));
    assert_eq!(
        chain.logs().last(),
        Some(&TokenEvent::HolderEnriched(HolderEnriched { holder: addr1, amount }))
    );
    assert_supply_invariant(&chain);
}

#[test]
fn test_make_holder_rich_only_owner() {
    let (mut chain, _, addr1) = setup();

    let ctx = CallContext::new(addr1);
    let res = chain.execute(ctx, |b, ctx| MyToken::make_holder_rich(b, ctx, addr1));
    assert_eq!(res, Err(TokenError::NotOwner));
}

// -----------------------
// | ADMIN FUNCTIONALITY |
// -----------------------

#[test]
fn test_pause() {
    let (mut chain, deployer, _) = setup();

    chain.execute(CallContext::new(deployer), MyToken::pause).unwrap();
    assert!(chain.view(|b| Pausable::paused(b)));
    assert_eq!(
        chain.logs().last(),
        Some(&TokenEvent::Paused(Paused { account: deployer }))
    );
}

#[test]
fn test_unpause() {
    let (mut chain, deployer, _) = setup();

    chain.execute(CallContext::new(deployer), MyToken::pause).unwrap();
    assert!(chain.view(|b| Pausable::paused(b)));

    chain.execute(CallContext::new(deployer), MyToken::unpause).unwrap();
    assert!(!chain.view(|b| Pausable::paused(b)));
}

#[test]
fn test_pause_only_owner() {
    let (mut chain, deployer, addr1) = setup();

    let res = chain.execute(CallContext::new(addr1), MyToken::pause);
    assert_eq!(res, Err(TokenError::NotOwner));

    chain.execute(CallContext::new(deployer), MyToken::pause).unwrap();
    let res = chain.execute(CallContext::new(addr1), MyToken::unpause);
    assert_eq!(res, Err(TokenError::NotOwner));
}

#[test]
fn test_paused_blocks_gated_operations() {
    let (mut chain, deployer, addr1) = setup();
    chain.execute(CallContext::with_value(addr1, one_ether()), MyToken::deposit).unwrap();
    chain.execute(CallContext::new(deployer), MyToken::pause).unwrap();

    let ctx = CallContext::new(deployer);
    let amount = U256::from(1);
    assert_eq!(
        chain.execute(CallContext::with_value(deployer, one_ether()), MyToken::deposit),
        Err(TokenError::Paused)
    );
    assert_eq!(
        chain.execute(ctx, |b, ctx| MyToken::mint(b, ctx, deployer, amount)),
        Err(TokenError::Paused)
    );
    assert_eq!(chain.execute(ctx, |b, ctx| MyToken::burn(b, ctx, amount)), Err(TokenError::Paused));
    assert_eq!(
        chain.execute(ctx, |b, ctx| MyToken::transfer(b, ctx, addr1, amount)),
        Err(TokenError::Paused)
    );
    assert_eq!(
        chain.execute(ctx, |b, ctx| MyToken::make_holder_rich(b, ctx, addr1)),
        Err(TokenError::Paused)
    );

    // Approvals and withdrawals stay available
    chain.execute(ctx, |b, ctx| MyToken::approve(b, ctx, addr1, amount)).unwrap();
    let res = chain.execute(CallContext::new(addr1), |b, ctx| {
        MyToken::transfer_from(b, ctx, deployer, addr1, amount)
    });
    assert_eq!(res, Err(TokenError::Paused));
    chain.execute(CallContext::new(addr1), MyToken::withdraw_balance).unwrap();
}

#[test]
fn test_pause_twice_reverts() {
    let (mut chain, deployer, _) = setup();

    assert_eq!(chain.execute(CallContext::new(deployer), MyToken::unpause), Err(TokenError::NotPaused));
    chain.execute(CallContext::new(deployer), MyToken::pause).unwrap();
    assert_eq!(chain.execute(CallContext::new(deployer), MyToken::pause), Err(TokenError::Paused));
}

// ------------
// | UPGRADES |
// ------------

#[test]
fn test_upgrade_preserves_state() {
    let (mut chain, deployer, addr1) = setup();

    let ctx = CallContext::new(deployer);
    chain.execute(ctx, |b, ctx| MyToken::transfer(b, ctx, addr1, U256::from(42))).unwrap();
    chain.execute(CallContext::with_value(addr1, one_ether()), MyToken::deposit).unwrap();

    chain.upgrade_and_initialize(V2).unwrap();
    assert_eq!(chain.implementation_version(), V2);
    assert_eq!(chain.view(|b| b.get_initialized_version()), V2);
    assert_eq!(
        chain.logs().last(),
        Some(&TokenEvent::Initialized(Initialized { version: V2 }))
    );

    assert_eq!(balance_of(&chain, addr1), U256::from(42));
    assert_eq!(chain.view(|b| Ownable::owner(b)), deployer);
    assert_eq!(chain.view(|b| EthCustody::get_eth_balance(b, addr1)), one_ether());
}

#[test]
fn test_initialize_v2_runs_once() {
    let (mut chain, _, addr1) = setup();

    chain.upgrade_and_initialize(V2).unwrap();
    let res = chain.execute(CallContext::new(addr1), |b, _| MyToken::initialize_v2(b, V2));
    assert_eq!(res, Err(TokenError::AlreadyInitialized));
}

#[test]
fn test_initialize_v2_requires_v2_implementation() {
    let (mut chain, _, _) = setup();

    assert_eq!(chain.upgrade_and_initialize(V1), Err(TokenError::InvalidVersion));
    assert_eq!(chain.implementation_version(), V1);
    assert_eq!(chain.view(|b| b.get_initialized_version()), V1);
}

#[test]
fn test_initialize_v2_requires_v1() {
    let mut backend = MemoryBackend::default();

    assert_eq!(MyToken::initialize_v2(&mut backend, V2), Err(TokenError::InvalidVersion));
}

// --------------
// | INVARIANTS |
// --------------

#[test]
fn test_supply_invariant_over_sequence() {
    let (mut chain, deployer, addr1) = setup();
    let addr2 = chain.signer(2);
    let ctx = CallContext::new(deployer);

    chain.execute(ctx, |b, ctx| MyToken::mint(b, ctx, addr2, U256::from(1000))).unwrap();
    chain.execute(ctx, |b, ctx| MyToken::transfer(b, ctx, addr1, U256::from(500))).unwrap();
    chain.execute(ctx, |b, ctx| MyToken::make_holder_rich(b, ctx, addr1)).unwrap();
    chain
        .execute(CallContext::new(addr1), |b, ctx| MyToken::burn(b, ctx, U256::from(250)))
        .unwrap();
    chain
        .execute(CallContext::new(addr2), |b, ctx| MyToken::transfer(b, ctx, addr1, U256::from(1)))
        .unwrap();

    // A failed call must not disturb balances
    let res = chain.execute(CallContext::new(addr2), |b, ctx| {
        MyToken::transfer(b, ctx, addr1, U256::from(10_000))
    });
    assert_eq!(res, Err(TokenError::InsufficientBalance));

    assert_supply_invariant(&chain);
}

#[test]
fn test_reverted_call_leaves_no_logs() {
    let (mut chain, _, addr1) = setup();
    let num_logs = chain.logs().len();

    let res = chain.execute(CallContext::new(addr1), |b, ctx| {
        MyToken::transfer(b, ctx, Address::ZERO, U256::ZERO)
    });
    assert_eq!(res, Err(TokenError::ZeroAddress));
    assert_eq!(chain.logs().len(), num_logs);
}

#[test]
fn test_initialize_mints_to_deployer() {
    let (chain, deployer, _) = setup();

    let mint = TokenEvent::Transfer(Transfer {
        from: Address::ZERO,
        to: deployer,
        value: one_ether(),
    });
    assert!(chain.logs().contains(&mint));
}
