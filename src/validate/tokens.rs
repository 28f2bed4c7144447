use crate::model::TokenMeta;

use super::ValidationError;

/// Decimal scales beyond 10^38 overflow u128 amounts.
const MAX_DECIMALS: u8 = 38;

pub fn check_token(token: &TokenMeta) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if token.decimals > MAX_DECIMALS {
        errors.push(ValidationError::DecimalsTooLarge {
            symbol: token.symbol.clone(),
            decimals: token.decimals,
        });
    }
    if token.price_usd_e12 == Some(0) {
        errors.push(ValidationError::ZeroPrice {
            symbol: token.symbol.clone(),
        });
    }

    errors
}
