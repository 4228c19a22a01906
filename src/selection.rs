//! Rider selection state for one planning session.
//!
//! Tier, payment method, taxi-meter toggle, and tip are mutated only
//! through the methods here so the tip invariant cannot drift: a tip
//! amount exists iff tipping is enabled, and disabling tipping clears the
//! amount in the same transition.

use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown vehicle tier '{tier_id}'")]
    UnknownTier { tier_id: String },
    #[error("unknown payment method '{method_id}'")]
    UnknownPaymentMethod { method_id: String },
    #[error("cannot select a tip amount while tipping is disabled")]
    TipDisabled,
}

/// The rider's current choices.
///
/// Created with defaults when the screen mounts and discarded when the
/// trip is dispatched or the screen unmounts. Failed operations leave
/// every field untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSelection {
    selected_tier_id: String,
    payment_method_id: String,
    meter_enabled: bool,
    tip_enabled: bool,
    tip_amount: Option<f64>,
}

impl TripSelection {
    /// Session defaults: first catalog tier, cash, both toggles off.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selected_tier_id: catalog.default_tier().id.clone(),
            payment_method_id: "cash".to_string(),
            meter_enabled: false,
            tip_enabled: false,
            tip_amount: None,
        }
    }

    pub fn selected_tier_id(&self) -> &str {
        &self.selected_tier_id
    }

    pub fn payment_method_id(&self) -> &str {
        &self.payment_method_id
    }

    pub fn meter_enabled(&self) -> bool {
        self.meter_enabled
    }

    pub fn tip_enabled(&self) -> bool {
        self.tip_enabled
    }

    pub fn tip_amount(&self) -> Option<f64> {
        self.tip_amount
    }

    /// Switches the active tier. No history is kept.
    pub fn select_tier(&mut self, catalog: &Catalog, tier_id: &str) -> Result<(), SelectionError> {
        if catalog.tier(tier_id).is_none() {
            return Err(SelectionError::UnknownTier {
                tier_id: tier_id.to_string(),
            });
        }
        debug!(tier_id, "tier selected");
        self.selected_tier_id = tier_id.to_string();
        Ok(())
    }

    pub fn select_payment_method(
        &mut self,
        catalog: &Catalog,
        method_id: &str,
    ) -> Result<(), SelectionError> {
        if catalog.payment_method(method_id).is_none() {
            return Err(SelectionError::UnknownPaymentMethod {
                method_id: method_id.to_string(),
            });
        }
        debug!(method_id, "payment method selected");
        self.payment_method_id = method_id.to_string();
        Ok(())
    }

    pub fn set_meter_enabled(&mut self, enabled: bool) {
        self.meter_enabled = enabled;
    }

    /// Enables or disables tipping.
    ///
    /// Disabling clears any chosen amount as part of the same transition;
    /// enabling leaves the amount unset until the rider picks one.
    pub fn set_tip_enabled(&mut self, enabled: bool) {
        self.tip_enabled = enabled;
        if !enabled {
            self.tip_amount = None;
        }
    }

    /// Picks a tip amount, or clears it when the same amount is picked
    /// again (tapping the highlighted option deselects it).
    pub fn select_tip_amount(&mut self, amount: f64) -> Result<(), SelectionError> {
        if !self.tip_enabled {
            return Err(SelectionError::TipDisabled);
        }
        self.tip_amount = if self.tip_amount == Some(amount) {
            None
        } else {
            Some(amount)
        };
        Ok(())
    }
}
