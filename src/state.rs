use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub name: String,
    pub symbol: String,
    /// admin is the only address allowed to list domains and withdraw funds
    pub admin: Addr,
    /// denom is the native coin accepted as payment
    pub denom: String,
    /// max_supply bounds how many domains can ever be listed
    pub max_supply: u64,
}

#[cw_serde]
pub struct Domain {
    pub name: String,
    pub price: Uint128,
    /// owner is set once by a successful mint and never cleared
    pub owner: Option<Addr>,
}

impl Domain {
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// DOMAIN_COUNT holds the last listed domain id; ids are dense from 1
pub const DOMAIN_COUNT: Item<u64> = Item::new("domain_count");
/// MINTED counts domains that have an owner
pub const MINTED: Item<u64> = Item::new("minted");
pub const DOMAINS: Map<u64, Domain> = Map::new("domains");

/// BALANCE is the custodial amount collected from sales, see `treasury`
pub const BALANCE: Item<Uint128> = Item::new("balance");
