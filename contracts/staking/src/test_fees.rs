extern crate std;

use crate::{
    penalty::DAY,
    test::{Fixture, FEES, ONE, START},
    ContractError,
};

#[test]
fn test_fee_must_match_exactly() {
    let f = Fixture::initialized();
    let user = f.user(10 * ONE);
    f.set_time(START);
    f.client.stake(&user, &(10 * ONE));
    f.set_time(START + 10);

    for wrong in [0i128, FEES - 1, FEES + 1] {
        let result = f.client.try_get_reward(&user, &wrong);
        match result {
            Err(Ok(e)) => assert_eq!(e, ContractError::OnlyWithFees),
            _ => unreachable!("Expected OnlyWithFees error"),
        }
    }
    assert_eq!(f.client.collected_fees(), 0);

    assert_eq!(f.client.get_reward(&user, &FEES), 10 * ONE);
    assert_eq!(f.client.collected_fees(), FEES);
    assert_eq!(f.native.balance(&f.client.address), FEES);
}

#[test]
fn test_every_gated_call_charges_fee() {
    let f = Fixture::initialized();
    let user = f.user(ONE);
    let native_before = f.native.balance(&user);
    f.set_time(START);
    f.client.stake(&user, &ONE);
    f.approve_escrow(&user, ONE);

    let result = f.client.try_unstake(&user, &ONE, &(10 * DAY), &(FEES * 2));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OnlyWithFees),
        _ => unreachable!("Expected OnlyWithFees error"),
    }

    f.client.unstake(&user, &ONE, &(10 * DAY), &FEES);
    f.set_time(START + 10 * DAY);

    let result = f.client.try_withdraw_tokens_to_claim(&user, &0, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OnlyWithFees),
        _ => unreachable!("Expected OnlyWithFees error"),
    }
    f.client.withdraw_tokens_to_claim(&user, &0, &FEES);

    assert_eq!(f.client.fees(), FEES);
    assert_eq!(f.client.collected_fees(), 2 * FEES);
    assert_eq!(f.native.balance(&user), native_before - 2 * FEES);
}

#[test]
fn test_transfer_fees_by_manager() {
    let f = Fixture::initialized();
    let user = f.user(ONE);
    f.set_time(START);
    f.client.stake(&user, &ONE);
    f.client.get_reward(&user, &FEES);
    f.client.get_reward(&user, &FEES);

    let swept = f.client.transfer_fees(&f.manager);

    assert_eq!(swept, 2 * FEES);
    assert_eq!(f.native.balance(&f.treasury), 2 * FEES);
    assert_eq!(f.native.balance(&f.client.address), 0);
    assert_eq!(f.client.collected_fees(), 0);

    // Nothing left to sweep.
    assert_eq!(f.client.transfer_fees(&f.manager), 0);
}

#[test]
fn test_transfer_fees_by_non_manager_fails() {
    let f = Fixture::initialized();
    let user = f.user(ONE);
    f.set_time(START);
    f.client.stake(&user, &ONE);
    f.client.get_reward(&user, &FEES);

    for caller in [user.clone(), f.admin.clone()] {
        let result = f.client.try_transfer_fees(&caller);
        match result {
            Err(Ok(e)) => assert_eq!(e, ContractError::OnlyFeesManagerAccess),
            _ => unreachable!("Expected OnlyFeesManagerAccess error"),
        }
    }
    assert_eq!(f.client.collected_fees(), FEES);
    assert_eq!(f.native.balance(&f.treasury), 0);
}
