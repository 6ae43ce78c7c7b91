use serde::{Deserialize, Serialize};

use crate::render;

/// A single trade: the unit price paid, how much was exchanged, and when.
///
/// Observations are plain values. Nothing is validated on construction, so
/// negative or non-finite prices and volumes are carried through as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    price: f64,  // price of 1 unit of the traded asset at the time of the trade
    volume: f64, // how much of the asset was exchanged
    timestamp: i64,
}

impl Observation {
    pub fn new(price: f64, volume: f64, timestamp: i64) -> Self {
        Observation {
            price,
            volume,
            timestamp,
        }
    }

    pub fn get_price(&self) -> f64 {
        self.price
    }

    pub fn get_volume(&self) -> f64 {
        self.volume
    }

    pub fn get_time(&self) -> i64 {
        self.timestamp
    }

    // The dollar value of the trade which occurred
    pub fn dollar_value(&self) -> f64 {
        self.price * self.volume
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&render::render(self))
    }
}
