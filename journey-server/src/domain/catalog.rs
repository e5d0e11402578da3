//! Reference dataset of regions, cities, places and transport modes.
//!
//! The catalog is static and read-only. It drives what the selection
//! store will accept; prices live separately in the pricing table.

use serde::{Deserialize, Serialize};

/// A city and the landmarks that can be visited in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Display name, unique within its region
    pub name: String,

    /// Place names, in display order
    pub places: Vec<String>,
}

impl City {
    /// Create a city with the given places.
    pub fn new<I, S>(name: impl Into<String>, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            places: places.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a place belongs to this city.
    pub fn has_place(&self, place: &str) -> bool {
        self.places.iter().any(|p| p == place)
    }
}

/// A top-level destination (a state, in the built-in dataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Display name, unique within the catalog
    pub name: String,

    /// Cities, in display order
    pub cities: Vec<City>,
}

impl Region {
    /// Create a region with the given cities.
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            name: name.into(),
            cities,
        }
    }

    /// Look up a city of this region by name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }
}

/// A way of getting around, with display metadata.
///
/// Only the name matters for pricing; icon and description are for
/// whatever renders the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportMode {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl TransportMode {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }
}

/// The full reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    regions: Vec<Region>,
    transport: Vec<TransportMode>,
}

impl Catalog {
    /// Create a catalog from regions and transport modes.
    pub fn new(regions: Vec<Region>, transport: Vec<TransportMode>) -> Self {
        Self { regions, transport }
    }

    /// The dataset the application ships with.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// let karnataka = catalog.region("Karnataka").unwrap();
    /// assert!(karnataka.city("Mysore").is_some());
    /// assert!(catalog.transport_mode("Bicycle").is_some());
    /// ```
    pub fn builtin() -> Self {
        let regions = vec![
            Region::new(
                "Karnataka",
                vec![
                    City::new(
                        "Bangalore",
                        [
                            "Lalbagh Botanical Garden",
                            "Bangalore Palace",
                            "Vidhana Soudha",
                        ],
                    ),
                    City::new(
                        "Mysore",
                        ["Mysore Palace", "Chamundi Hill", "Brindavan Gardens"],
                    ),
                ],
            ),
            Region::new(
                "Gujarat",
                vec![City::new(
                    "Ahmedabad",
                    ["Sabarmati Ashram", "Adalaj Stepwell"],
                )],
            ),
            Region::new(
                "Rajasthan",
                vec![City::new(
                    "Jaipur",
                    ["Hawa Mahal", "Amer Fort", "City Palace"],
                )],
            ),
        ];

        let transport = vec![
            TransportMode::new("Car", "car", "Private & Fast"),
            TransportMode::new("Bus", "bus", "Eco-friendly"),
            TransportMode::new("Auto", "taxi", "Local Vibes"),
            TransportMode::new("Bicycle", "bicycle", "Fitness First"),
        ];

        Self::new(regions, transport)
    }

    /// All regions, in display order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All transport modes, in display order.
    pub fn transport_modes(&self) -> &[TransportMode] {
        &self.transport
    }

    /// Look up a region by name.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Look up a transport mode by name.
    pub fn transport_mode(&self, name: &str) -> Option<&TransportMode> {
        self.transport.iter().find(|t| t.name == name)
    }

    /// Regions whose name contains `query`, ignoring case.
    ///
    /// An empty query matches every region.
    pub fn search_regions(&self, query: &str) -> Vec<&Region> {
        let query = query.to_lowercase();
        self.regions
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect()
    }
}
