//! # Order Pricing
//!
//! The bill for a cart is its subtotal minus `subtotal × discount_fraction`.
//!
//! How the subtotal treats quantities is a [`QuantityRule`]. The default,
//! [`QuantityRule::IgnoreQuantity`], charges every line once at its unit price
//! whatever its quantity; this is how the platform has always billed.
//! [`QuantityRule::MultiplyQuantity`] charges `unit_price × quantity`. Switching
//! rules changes what customers pay, so it is a configuration decision
//! (`DELIVERY_QUANTITY_RULE`), never a silent default change.

use crate::model::Cart;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

/// How line quantities enter the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuantityRule {
    /// Each line counts once.
    #[default]
    IgnoreQuantity,
    /// Each line counts `quantity` times.
    MultiplyQuantity,
}

impl FromStr for QuantityRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(QuantityRule::IgnoreQuantity),
            "multiply" => Ok(QuantityRule::MultiplyQuantity),
            other => Err(format!("unknown quantity rule: {other}")),
        }
    }
}

/// Supplies the discount fraction for a cart.
pub trait DiscountPolicy: Send + Sync + Debug {
    /// Fraction of the subtotal to take off. Values outside `[0, 1]` are clamped.
    fn discount_fraction(&self, cart: &Cart) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn discount_fraction(&self, _cart: &Cart) -> f64 {
        0.0
    }
}

/// The same fraction off every cart.
#[derive(Debug, Clone, Copy)]
pub struct FlatDiscount(pub f64);

impl DiscountPolicy for FlatDiscount {
    fn discount_fraction(&self, _cart: &Cart) -> f64 {
        self.0
    }
}

/// Quantity rule plus discount policy.
#[derive(Debug, Clone)]
pub struct Pricing {
    pub rule: QuantityRule,
    pub discount: Arc<dyn DiscountPolicy>,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            rule: QuantityRule::default(),
            discount: Arc::new(NoDiscount),
        }
    }
}

impl Pricing {
    pub fn new(rule: QuantityRule, discount: Arc<dyn DiscountPolicy>) -> Self {
        Self { rule, discount }
    }

    pub fn subtotal(&self, cart: &Cart) -> f64 {
        cart.lines()
            .map(|line| match self.rule {
                QuantityRule::IgnoreQuantity => line.unit_price,
                QuantityRule::MultiplyQuantity => line.unit_price * f64::from(line.quantity),
            })
            .sum()
    }

    pub fn total(&self, cart: &Cart) -> f64 {
        let subtotal = self.subtotal(cart);
        let fraction = self.discount.discount_fraction(cart);
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        subtotal - subtotal * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartKey, CustomerId, FoodItem, FoodItemId, RestaurantId};
    use std::num::NonZeroU32;

    fn cart_with(items: &[(u32, f64, u32)]) -> Cart {
        let mut cart = Cart::new(CartKey::new(CustomerId(1), RestaurantId(1)));
        for &(id, price, quantity) in items {
            let item = FoodItem::new(FoodItemId(id), format!("item {id}"), price);
            cart.set_item(&item, NonZeroU32::new(quantity).unwrap());
        }
        cart
    }

    #[test]
    fn default_rule_ignores_quantity() {
        let cart = cart_with(&[(1, 50.0, 3), (2, 30.0, 2)]);
        assert_eq!(Pricing::default().total(&cart), 80.0);
    }

    #[test]
    fn multiply_rule_counts_each_unit() {
        let cart = cart_with(&[(1, 50.0, 3), (2, 30.0, 2)]);
        let pricing = Pricing::new(QuantityRule::MultiplyQuantity, Arc::new(NoDiscount));
        assert_eq!(pricing.total(&cart), 210.0);
    }

    #[test]
    fn discount_comes_off_the_subtotal() {
        let cart = cart_with(&[(1, 50.0, 1), (2, 30.0, 1)]);
        let pricing = Pricing::new(QuantityRule::IgnoreQuantity, Arc::new(FlatDiscount(0.25)));
        assert_eq!(pricing.total(&cart), 60.0);
    }

    #[test]
    fn out_of_range_discount_is_clamped() {
        let cart = cart_with(&[(1, 40.0, 1)]);
        let generous = Pricing::new(QuantityRule::IgnoreQuantity, Arc::new(FlatDiscount(1.5)));
        assert_eq!(generous.total(&cart), 0.0);

        let negative = Pricing::new(QuantityRule::IgnoreQuantity, Arc::new(FlatDiscount(-0.5)));
        assert_eq!(negative.total(&cart), 40.0);
    }

    #[test]
    fn empty_cart_costs_nothing() {
        assert_eq!(Pricing::default().total(&cart_with(&[])), 0.0);
    }

    #[test]
    fn rule_parses_from_config_values() {
        assert_eq!(
            "Multiply".parse::<QuantityRule>(),
            Ok(QuantityRule::MultiplyQuantity)
        );
        assert!("sometimes".parse::<QuantityRule>().is_err());
    }
}
