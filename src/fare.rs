//! Fare estimation across vehicle tiers.
//!
//! Pure pricing: base price plus a per-kilometre rate, floored at the
//! tier's minimum. No rounding happens here; quotes keep full precision
//! until they are formatted for display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, VehicleTier};

#[derive(Debug, Error, PartialEq)]
pub enum FareError {
    /// Negative distances indicate an upstream routing bug and are
    /// rejected rather than clamped.
    #[error("negative trip distance {distance_km} km")]
    InvalidDistance { distance_km: f64 },
}

/// A computed price for one tier. Derived, never cached across a
/// distance change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub tier_id: String,
    pub price: f64,
}

/// One row of the tier picker: a real quote when a route distance is
/// known, otherwise the tier's floor price as a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow<'a> {
    pub tier: &'a VehicleTier,
    pub quote: Option<FareQuote>,
}

impl QuoteRow<'_> {
    /// The amount the picker shows for this row.
    pub fn display_price(&self) -> f64 {
        match &self.quote {
            Some(quote) => quote.price,
            None => self.tier.min_price,
        }
    }
}

/// Estimates the fare for a tier over a trip distance in kilometres.
///
/// Distance zero is valid and yields `max(base_price, min_price)`.
pub fn estimate(tier: &VehicleTier, distance_km: f64) -> Result<f64, FareError> {
    if distance_km < 0.0 {
        return Err(FareError::InvalidDistance { distance_km });
    }
    let fare = tier.base_price + distance_km * tier.price_per_km;
    Ok(fare.max(tier.min_price))
}

/// Quotes every catalog tier at once for the tier picker.
///
/// `distance_km = None` means no route has been planned yet; every row
/// falls back to its floor price.
pub fn quote_sheet<'a>(
    catalog: &'a Catalog,
    distance_km: Option<f64>,
) -> Result<Vec<QuoteRow<'a>>, FareError> {
    let mut rows = Vec::with_capacity(catalog.tiers().len());
    for tier in catalog.tiers() {
        let quote = match distance_km {
            Some(distance) => Some(FareQuote {
                tier_id: tier.id.clone(),
                price: estimate(tier, distance)?,
            }),
            None => None,
        };
        rows.push(QuoteRow { tier, quote });
    }
    Ok(rows)
}

/// Formats a TRY amount to its minor unit for display.
pub fn format_try(amount: f64) -> String {
    format!("₺{:.2}", amount)
}
