use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal ship free: ₹3,750.
pub const FREE_SHIPPING_THRESHOLD_PAISE: u64 = 375_000;

/// Flat shipping charge below the threshold: ₹449.
pub const FLAT_SHIPPING_PAISE: u64 = 44_900;

/// Tax rate applied to the subtotal: 8.5%, expressed per mille ×10.
const TAX_RATE_PER_MILLE: u64 = 85;

/// Checkout price breakdown derived from a cart subtotal. The stored
/// order keeps only the subtotal; shipping and tax are presentation
/// amounts computed at checkout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    pub subtotal_paise: u64,
    pub shipping_paise: u64,
    pub tax_paise: u64,
    pub grand_total_paise: u64,
}

impl CheckoutTotals {
    pub fn compute(subtotal_paise: u64) -> Self {
        let shipping_paise = if subtotal_paise >= FREE_SHIPPING_THRESHOLD_PAISE {
            0
        } else {
            FLAT_SHIPPING_PAISE
        };
        // Round to the nearest paisa
        let tax_paise = (subtotal_paise * TAX_RATE_PER_MILLE + 500) / 1000;
        Self {
            subtotal_paise,
            shipping_paise,
            tax_paise,
            grand_total_paise: subtotal_paise + shipping_paise + tax_paise,
        }
    }

    /// How much more the cart needs to qualify for free shipping, if anything.
    pub fn remaining_for_free_shipping(&self) -> Option<u64> {
        if self.subtotal_paise >= FREE_SHIPPING_THRESHOLD_PAISE {
            None
        } else {
            Some(FREE_SHIPPING_THRESHOLD_PAISE - self.subtotal_paise)
        }
    }
}
