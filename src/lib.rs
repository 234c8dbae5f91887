pub mod contract;
mod error;
pub mod msg;
pub mod state;
pub mod treasury;

pub use crate::error::ContractError;
