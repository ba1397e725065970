//! Runtime settings for [`DeliverySystem`](crate::lifecycle::DeliverySystem).
//!
//! | Variable | Default |
//! |---|---|
//! | `DELIVERY_CHANNEL_CAPACITY` | `32` |
//! | `DELIVERY_QUANTITY_RULE` | `ignore` (or `multiply`) |
//! | `DELIVERY_FLAT_DISCOUNT` | `0` |
//!
//! Unset or unparsable values fall back to the default.

use crate::pricing::{FlatDiscount, NoDiscount, Pricing, QuantityRule};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Request buffer of each actor's channel.
    pub channel_capacity: usize,
    pub quantity_rule: QuantityRule,
    /// Fraction taken off every order, clamped to `[0, 1]` at pricing time.
    pub flat_discount: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            quantity_rule: QuantityRule::IgnoreQuantity,
            flat_discount: 0.0,
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with `lookup` standing in for the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            channel_capacity: lookup("DELIVERY_CHANNEL_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.channel_capacity),
            quantity_rule: lookup("DELIVERY_QUANTITY_RULE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.quantity_rule),
            flat_discount: lookup("DELIVERY_FLAT_DISCOUNT")
                .and_then(|v| v.trim().parse().ok())
                .filter(|d: &f64| d.is_finite())
                .unwrap_or(defaults.flat_discount),
        }
    }

    pub fn pricing(&self) -> Pricing {
        if self.flat_discount == 0.0 {
            Pricing::new(self.quantity_rule, Arc::new(NoDiscount))
        } else {
            Pricing::new(self.quantity_rule, Arc::new(FlatDiscount(self.flat_discount)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(SystemConfig::from_lookup(|_| None), SystemConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            ("DELIVERY_CHANNEL_CAPACITY", "64"),
            ("DELIVERY_QUANTITY_RULE", "multiply"),
            ("DELIVERY_FLAT_DISCOUNT", "0.25"),
        ]));

        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.quantity_rule, QuantityRule::MultiplyQuantity);
        assert_eq!(config.flat_discount, 0.25);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            ("DELIVERY_CHANNEL_CAPACITY", "0"),
            ("DELIVERY_QUANTITY_RULE", "sometimes"),
            ("DELIVERY_FLAT_DISCOUNT", "NaN"),
        ]));

        assert_eq!(config, SystemConfig::default());
    }
}
