//! Custodial ledger for sale proceeds.
//!
//! Ledger writes and the bank messages built by [`payout`] end up in the same
//! execution, so they commit together or are reverted together.

use cosmwasm_std::{coins, Addr, BankMsg, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::BALANCE;

pub fn balance(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(BALANCE.may_load(storage)?.unwrap_or_default())
}

/// Credits `amount` and returns the new balance.
pub fn deposit(storage: &mut dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    let current = balance(storage)?;
    let updated = current.checked_add(amount)?;
    BALANCE.save(storage, &updated)?;
    Ok(updated)
}

/// Empties the ledger and returns what it held.
pub fn drain(storage: &mut dyn Storage) -> StdResult<Uint128> {
    let amount = balance(storage)?;
    BALANCE.save(storage, &Uint128::zero())?;
    Ok(amount)
}

/// Messages moving `amount` of `denom` out of the contract. The bank module
/// rejects zero-coin sends, so nothing is emitted for an empty payout.
pub fn payout(to: &Addr, denom: &str, amount: Uint128) -> Vec<BankMsg> {
    if amount.is_zero() {
        return vec![];
    }
    vec![BankMsg::Send {
        to_address: to.to_string(),
        amount: coins(amount.u128(), denom),
    }]
}
