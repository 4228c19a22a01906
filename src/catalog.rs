//! Static vehicle-tier and payment-method catalogs.
//!
//! Loaded once at startup and immutable afterwards. Prices are in TRY;
//! they stay unrounded `f64` internally and are only formatted to the
//! minor unit at display time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A priced vehicle category the rider can choose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTier {
    pub id: String,
    pub display_name: String,
    pub base_price: f64,
    pub price_per_km: f64,
    pub min_price: f64,
}

/// A way the rider can pay for the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A zero-distance trip must still charge at least the base price.
    #[error("tier '{tier_id}' has min_price {min_price} below base_price {base_price}")]
    MinBelowBase {
        tier_id: String,
        min_price: f64,
        base_price: f64,
    },
    #[error("catalog must contain at least one vehicle tier")]
    NoTiers,
}

/// Immutable tier/payment/tip configuration for one deployment.
#[derive(Debug, Clone)]
pub struct Catalog {
    tiers: Vec<VehicleTier>,
    payment_methods: Vec<PaymentMethod>,
    tip_options: Vec<f64>,
}

impl Catalog {
    /// Builds a catalog, checking `min_price >= base_price` on every tier.
    pub fn new(
        tiers: Vec<VehicleTier>,
        payment_methods: Vec<PaymentMethod>,
        tip_options: Vec<f64>,
    ) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }
        for tier in &tiers {
            if tier.min_price < tier.base_price {
                return Err(CatalogError::MinBelowBase {
                    tier_id: tier.id.clone(),
                    min_price: tier.min_price,
                    base_price: tier.base_price,
                });
            }
        }
        Ok(Self {
            tiers,
            payment_methods,
            tip_options,
        })
    }

    pub fn tiers(&self) -> &[VehicleTier] {
        &self.tiers
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    /// Tip amounts offered by the tip picker.
    pub fn tip_options(&self) -> &[f64] {
        &self.tip_options
    }

    pub fn tier(&self, tier_id: &str) -> Option<&VehicleTier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    pub fn payment_method(&self, method_id: &str) -> Option<&PaymentMethod> {
        self.payment_methods
            .iter()
            .find(|method| method.id == method_id)
    }

    /// The tier preselected when a session starts.
    pub fn default_tier(&self) -> &VehicleTier {
        &self.tiers[0]
    }
}

impl Default for Catalog {
    /// The Istanbul taxi fleet this client ships with.
    fn default() -> Self {
        let tiers = vec![
            VehicleTier {
                id: "sari".to_string(),
                display_name: "Sarı Taksi".to_string(),
                base_price: 42.00,
                price_per_km: 28.00,
                min_price: 135.00,
            },
            VehicleTier {
                id: "turkuaz".to_string(),
                display_name: "Turkuaz Taksi".to_string(),
                base_price: 46.58,
                price_per_km: 31.05,
                min_price: 155.25,
            },
            VehicleTier {
                id: "vip".to_string(),
                display_name: "VIP Taksi".to_string(),
                base_price: 68.85,
                price_per_km: 45.90,
                min_price: 229.50,
            },
            VehicleTier {
                id: "xl".to_string(),
                display_name: "8+1 Taksi".to_string(),
                base_price: 52.65,
                price_per_km: 35.10,
                min_price: 175.50,
            },
        ];
        let payment_methods = vec![
            PaymentMethod {
                id: "cash".to_string(),
                display_name: "Nakit".to_string(),
            },
            PaymentMethod {
                id: "card".to_string(),
                display_name: "Kredi Kartı".to_string(),
            },
        ];
        let tip_options = vec![50.0, 100.0, 150.0];

        Self {
            tiers,
            payment_methods,
            tip_options,
        }
    }
}
