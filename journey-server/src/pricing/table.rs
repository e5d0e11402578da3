//! Fee lookup with a zero default.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// A partial map from names to fees, read as a total function.
///
/// Names without an entry cost zero. This is the only way the estimator
/// reads prices, so unpriced catalog entries degrade to free rather than
/// failing the whole estimate.
///
/// # Examples
///
/// ```
/// use journey_server::pricing::FeeSchedule;
///
/// let fees: FeeSchedule = [("Car", 1000)].into_iter().collect();
/// assert_eq!(fees.fee_or_zero("Car"), 1000);
/// assert_eq!(fees.fee_or_zero("Hovercraft"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeSchedule(HashMap<String, u64>);

impl FeeSchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fee for a name, replacing any previous fee.
    pub fn insert(&mut self, name: impl Into<String>, fee: u64) {
        self.0.insert(name.into(), fee);
    }

    /// The fee for `name`, if it has been priced.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    /// The fee for `name`, or zero if it has not been priced.
    pub fn fee_or_zero(&self, name: &str) -> u64 {
        self.get(name).unwrap_or(0)
    }

    /// Number of priced names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is priced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FeeSchedule {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Entrance fees and transport fares, in whole rupees.
///
/// Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    /// Flat fare per transport mode
    #[serde(default)]
    pub transport: FeeSchedule,

    /// Entrance fee per place
    #[serde(default)]
    pub entrance_fees: FeeSchedule,
}

impl PricingTable {
    /// Create a table from its two schedules.
    pub fn new(transport: FeeSchedule, entrance_fees: FeeSchedule) -> Self {
        Self {
            transport,
            entrance_fees,
        }
    }

    /// The prices the application ships with.
    ///
    /// Some priced places (the Mangalore ones) are not in the built-in
    /// catalog, and some catalog places are not priced.
    pub fn builtin() -> Self {
        let transport = [
            ("Car", 1000),
            ("Bus", 400),
            ("MiniCab", 600),
            ("Auto", 200),
            ("Bicycle", 50),
        ]
        .into_iter()
        .collect();

        let entrance_fees = [
            ("Lalbagh Botanical Garden", 100),
            ("Bangalore Palace", 150),
            ("Vidhana Soudha", 50),
            ("Mysore Palace", 200),
            ("Chamundi Hill", 120),
            ("Brindavan Gardens", 100),
            ("Panambur Beach", 50),
            ("Mangaladevi Temple", 70),
            ("Kadri Manjunath Temple", 80),
        ]
        .into_iter()
        .collect();

        Self::new(transport, entrance_fees)
    }

    /// Parse a table from JSON.
    ///
    /// Expects `{"transport": {...}, "entranceFees": {...}}`. Either key may
    /// be omitted. Negative or fractional fees are rejected.
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        serde_json::from_str(json).map_err(|e| PricingError::Json {
            message: e.to_string(),
        })
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PricingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Fare for a transport mode; zero if unpriced.
    pub fn transport_fee(&self, mode: &str) -> u64 {
        self.transport.fee_or_zero(mode)
    }

    /// Entrance fee for a place; zero if unpriced.
    pub fn entrance_fee(&self, place: &str) -> u64 {
        self.entrance_fees.fee_or_zero(place)
    }
}
