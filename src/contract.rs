#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    Storage, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::may_pay;

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ContractInfoResponse, DomainResponse, DomainsResponse, ExecuteMsg,
    InstantiateMsg, OwnerOfResponse, QueryMsg, SupplyResponse,
};
use crate::state::{Config, Domain, BALANCE, CONFIG, DOMAINS, DOMAIN_COUNT, MINTED};
use crate::treasury;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-domain-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_MAX_SUPPLY: u64 = 1;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let max_supply = msg.max_supply.unwrap_or(DEFAULT_MAX_SUPPLY);
    if max_supply == 0 {
        return Err(ContractError::ConfigurationError {
            reason: "max_supply must be positive".to_string(),
        });
    }
    if msg.denom.trim().is_empty() {
        return Err(ContractError::ConfigurationError {
            reason: "denom must not be empty".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        name: msg.name,
        symbol: msg.symbol,
        admin: info.sender,
        denom: msg.denom,
        max_supply,
    };
    CONFIG.save(deps.storage, &config)?;
    DOMAIN_COUNT.save(deps.storage, &0)?;
    MINTED.save(deps.storage, &0)?;
    BALANCE.save(deps.storage, &Uint128::zero())?;

    // seed the catalog, any failure aborts the whole instantiation
    let seeded = msg.listings.len();
    for listing in msg.listings {
        list_domain(deps.storage, &config, listing.name, listing.price)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("max_supply", max_supply.to_string())
        .add_attribute("seeded", seeded.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::List { name, price } => execute_list(deps, info, name, price),
        ExecuteMsg::Mint { id } => execute_mint(deps, info, id),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
    }
}

pub fn execute_list(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    price: Uint128,
) -> Result<Response, ContractError> {
    // admin authentication
    let config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let id = list_domain(deps.storage, &config, name.clone(), price)?;

    Ok(Response::new()
        .add_attribute("action", "list")
        .add_attribute("id", id.to_string())
        .add_attribute("name", name)
        .add_attribute("price", price))
}

/// Appends a domain under the next id. Callers are responsible for authorization.
fn list_domain(
    storage: &mut dyn Storage,
    config: &Config,
    name: String,
    price: Uint128,
) -> Result<u64, ContractError> {
    let count = DOMAIN_COUNT.load(storage)?;
    if count >= config.max_supply {
        return Err(ContractError::CapacityExceeded {
            max_supply: config.max_supply,
        });
    }

    let id = count + 1;
    let domain = Domain {
        name,
        price,
        owner: None,
    };
    DOMAINS.save(storage, id, &domain)?;
    DOMAIN_COUNT.save(storage, &id)?;
    Ok(id)
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mut domain = load_domain(deps.storage, id)?;
    if domain.is_owned() {
        return Err(ContractError::AlreadyOwned { id });
    }

    let payment = may_pay(&info, &config.denom)?;
    if payment < domain.price {
        return Err(ContractError::InsufficientPayment {
            required: domain.price,
            sent: payment,
        });
    }

    // any excess over the price is kept
    let balance = treasury::deposit(deps.storage, payment)?;

    domain.owner = Some(info.sender.clone());
    DOMAINS.save(deps.storage, id, &domain)?;
    MINTED.update(deps.storage, |minted| -> StdResult<_> { Ok(minted + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("id", id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("paid", payment)
        .add_attribute("balance", balance))
}

pub fn execute_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let amount = treasury::drain(deps.storage)?;

    Ok(Response::new()
        .add_messages(treasury::payout(&config.admin, &config.denom, amount))
        .add_attribute("action", "withdraw")
        .add_attribute("admin", config.admin)
        .add_attribute("amount", amount))
}

fn load_domain(storage: &dyn Storage, id: u64) -> Result<Domain, ContractError> {
    DOMAINS
        .may_load(storage, id)?
        .ok_or(ContractError::NotFound { id })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::ContractInfo {} => to_binary(&query_contract_info(deps)?),
        QueryMsg::Supply {} => to_binary(&query_supply(deps)?),
        QueryMsg::Domain { id } => to_binary(&query_domain(deps, id)?),
        QueryMsg::OwnerOf { id } => to_binary(&query_owner_of(deps, id)?),
        QueryMsg::Domains { start_after, limit } => {
            to_binary(&query_domains(deps, start_after, limit)?)
        }
        QueryMsg::Balance {} => to_binary(&query_balance(deps)?),
    };
    Ok(res?)
}

fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.into())
}

fn query_supply(deps: Deps) -> StdResult<SupplyResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(SupplyResponse {
        max_supply: config.max_supply,
        listed: DOMAIN_COUNT.load(deps.storage)?,
        minted: MINTED.load(deps.storage)?,
    })
}

fn query_domain(deps: Deps, id: u64) -> Result<DomainResponse, ContractError> {
    let domain = load_domain(deps.storage, id)?;
    Ok(DomainResponse::new(id, domain))
}

fn query_owner_of(deps: Deps, id: u64) -> Result<OwnerOfResponse, ContractError> {
    let domain = load_domain(deps.storage, id)?;
    Ok(OwnerOfResponse {
        owner: domain.owner.map(|owner| owner.into_string()),
    })
}

fn query_domains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DomainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let domains = DOMAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, domain)| DomainResponse::new(id, domain)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DomainsResponse { domains })
}

fn query_balance(deps: Deps) -> StdResult<BalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = treasury::balance(deps.storage)?;
    Ok(BalanceResponse {
        balance: Coin {
            denom: config.denom,
            amount,
        },
    })
}
