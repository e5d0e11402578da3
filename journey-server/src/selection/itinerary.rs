//! The in-progress itinerary and its cascade rules.

use crate::estimate::ItineraryPayload;

/// The four selection steps, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Region,
    City,
    Places,
    Transport,
}

impl Stage {
    /// Every stage, in display order.
    pub const ALL: [Stage; 4] = [Stage::Region, Stage::City, Stage::Places, Stage::Transport];
}

/// A user's uncommitted choice of region, city, places and transport.
///
/// All mutation goes through the `select_*`/`toggle_*` methods, which
/// clear whatever depends on the field being changed:
///
/// - a new region clears the city and the places
/// - a new city clears the places
/// - transport never clears anything and is never cleared
///
/// These methods do not check names against a catalog; see
/// [`SelectionStore`](super::SelectionStore) for that.
///
/// # Examples
///
/// ```
/// use journey_server::selection::Itinerary;
///
/// let mut itinerary = Itinerary::new();
/// itinerary
///     .select_region("Karnataka")
///     .select_city("Bangalore")
///     .toggle_place("Bangalore Palace")
///     .select_transport("Car");
/// assert!(itinerary.can_submit());
///
/// itinerary.select_region("Gujarat");
/// assert_eq!(itinerary.city(), None);
/// assert!(itinerary.places().is_empty());
/// assert_eq!(itinerary.transport(), Some("Car"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    region: Option<String>,
    city: Option<String>,
    places: Vec<String>,
    transport: Option<String>,
}

impl Itinerary {
    /// Create an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Selected places, in the order they were added.
    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn transport(&self) -> Option<&str> {
        self.transport.as_deref()
    }

    /// Check whether a place is selected.
    pub fn has_place(&self, place: &str) -> bool {
        self.places.iter().any(|p| p == place)
    }

    /// Choose a region. Clears city and places, even when re-selecting the
    /// current region.
    pub fn select_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.region = Some(region.into());
        self.city = None;
        self.places.clear();
        self
    }

    /// Choose a city. Clears places.
    pub fn select_city(&mut self, city: impl Into<String>) -> &mut Self {
        self.city = Some(city.into());
        self.places.clear();
        self
    }

    /// Add a place, or remove it if already selected.
    pub fn toggle_place(&mut self, place: impl Into<String>) -> &mut Self {
        let place = place.into();
        if let Some(pos) = self.places.iter().position(|p| *p == place) {
            self.places.remove(pos);
        } else {
            self.places.push(place);
        }
        self
    }

    /// Choose a transport mode.
    pub fn select_transport(&mut self, mode: impl Into<String>) -> &mut Self {
        self.transport = Some(mode.into());
        self
    }

    /// Fraction of the four stages that are satisfied, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let done = [
            self.region.is_some(),
            self.city.is_some(),
            !self.places.is_empty(),
            self.transport.is_some(),
        ]
        .into_iter()
        .filter(|&d| d)
        .count();

        done as f64 / Stage::ALL.len() as f64
    }

    /// True once a transport mode and at least one place are chosen.
    ///
    /// Region and city are not checked: places can only be chosen within
    /// a city, so non-empty places already imply both.
    pub fn can_submit(&self) -> bool {
        self.transport.is_some() && !self.places.is_empty()
    }

    /// Whether a stage should be offered to the user.
    ///
    /// Cities appear once a region is chosen, places once a city is
    /// chosen. Region and transport are always available.
    pub fn is_stage_visible(&self, stage: Stage) -> bool {
        match stage {
            Stage::Region | Stage::Transport => true,
            Stage::City => self.region.is_some(),
            Stage::Places => self.city.is_some(),
        }
    }

    /// Stages to offer, in display order.
    pub fn visible_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|&s| self.is_stage_visible(s))
            .collect()
    }

    /// Snapshot the itinerary as a submission body.
    pub fn to_payload(&self) -> ItineraryPayload {
        ItineraryPayload {
            selected_state: self.region.clone(),
            selected_city: self.city.clone(),
            selected_places: self.places.clone(),
            selected_transport: self.transport.clone(),
        }
    }
}
