use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Domain {id} does not exist")]
    NotFound { id: u64 },

    #[error("Domain {id} is already owned")]
    AlreadyOwned { id: u64 },

    #[error("Insufficient payment: required {required}, sent {sent}")]
    InsufficientPayment { required: Uint128, sent: Uint128 },

    #[error("Registry is full: max supply is {max_supply}")]
    CapacityExceeded { max_supply: u64 },

    #[error("Invalid configuration: {reason}")]
    ConfigurationError { reason: String },
}
