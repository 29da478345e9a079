use amm_math::to_token_amount;
use amm_types::AmmError;
use soroban_sdk::{log, token, Address, Env};

/// Pull `amount` of `asset` from `owner` into contract custody.
///
/// Uses the allowance `owner` granted to this contract, so the owner must
/// have called `approve` on the asset beforehand.
pub fn pull(env: &Env, asset: &Address, owner: &Address, amount: u128) -> Result<(), AmmError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_token_amount(amount).ok_or(AmmError::ArithmeticOverflow)?;

    let contract_address = env.current_contract_address();
    let client = token::Client::new(env, asset);
    match client.try_transfer_from(&contract_address, owner, &contract_address, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer_from failed", asset, owner, amount);
            Err(AmmError::AssetTransferFailed)
        }
    }
}

/// Pay `amount` of `asset` out of contract custody to `recipient`
pub fn push(env: &Env, asset: &Address, recipient: &Address, amount: u128) -> Result<(), AmmError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_token_amount(amount).ok_or(AmmError::ArithmeticOverflow)?;

    let contract_address = env.current_contract_address();
    let client = token::Client::new(env, asset);
    match client.try_transfer(&contract_address, recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer failed", asset, recipient, amount);
            Err(AmmError::AssetTransferFailed)
        }
    }
}
