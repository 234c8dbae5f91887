use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

use crate::state::{Config, Domain};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// denom is the only native coin accepted by `Mint`
    pub denom: String,
    /// max_supply defaults to 1 when omitted
    pub max_supply: Option<u64>,
    /// listings seeds the catalog; the whole instantiation fails if any of them fails
    #[serde(default)]
    pub listings: Vec<ListingMsg>,
}

#[cw_serde]
pub struct ListingMsg {
    pub name: String,
    pub price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// List adds a new domain for sale. Admin only.
    List { name: String, price: Uint128 },
    /// Mint buys domain `id` with the attached coins.
    Mint { id: u64 },
    /// Withdraw sends the whole custodial balance to the admin. Admin only.
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(SupplyResponse)]
    Supply {},
    #[returns(DomainResponse)]
    Domain { id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { id: u64 },
    /// Domains pages through the catalog in listing order
    #[returns(DomainsResponse)]
    Domains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(BalanceResponse)]
    Balance {},
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
    pub admin: String,
    pub denom: String,
}

impl From<Config> for ContractInfoResponse {
    fn from(config: Config) -> Self {
        ContractInfoResponse {
            name: config.name,
            symbol: config.symbol,
            admin: config.admin.into_string(),
            denom: config.denom,
        }
    }
}

#[cw_serde]
pub struct SupplyResponse {
    pub max_supply: u64,
    pub listed: u64,
    pub minted: u64,
}

#[cw_serde]
pub struct DomainResponse {
    pub id: u64,
    pub name: String,
    pub cost: Uint128,
    pub is_owned: bool,
}

impl DomainResponse {
    pub fn new(id: u64, domain: Domain) -> Self {
        DomainResponse {
            id,
            is_owned: domain.is_owned(),
            name: domain.name,
            cost: domain.price,
        }
    }
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Option<String>,
}

#[cw_serde]
pub struct DomainsResponse {
    pub domains: Vec<DomainResponse>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Coin,
}
