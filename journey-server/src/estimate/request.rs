//! The itinerary as it crosses the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::EstimateError;

/// A submitted itinerary.
///
/// This is the body of `POST /submit-form`. Unset selections serialize as
/// `null`, matching what a browser client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPayload {
    /// Region name
    #[serde(default)]
    pub selected_state: Option<String>,

    /// City name
    #[serde(default)]
    pub selected_city: Option<String>,

    /// Place names; may be empty
    #[serde(default)]
    pub selected_places: Vec<String>,

    /// Transport mode name
    #[serde(default)]
    pub selected_transport: Option<String>,
}

impl ItineraryPayload {
    /// Create a payload with no places.
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        transport: impl Into<String>,
    ) -> Self {
        Self {
            selected_state: Some(state.into()),
            selected_city: Some(city.into()),
            selected_places: Vec::new(),
            selected_transport: Some(transport.into()),
        }
    }

    /// Set the places.
    pub fn with_places<I, S>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_places = places.into_iter().map(Into::into).collect();
        self
    }

    /// Check that state, city and transport are all present and non-empty.
    ///
    /// Places are not required; an itinerary with none costs just the fare.
    pub fn validate(&self) -> Result<(), EstimateError> {
        require(self.selected_state.as_deref())?;
        require(self.selected_city.as_deref())?;
        require(self.selected_transport.as_deref())?;
        Ok(())
    }

    /// The transport mode, once validated.
    pub fn transport(&self) -> Result<&str, EstimateError> {
        require(self.selected_transport.as_deref())
    }

    /// Read a payload from an arbitrary JSON value.
    ///
    /// Required fields are checked first, so a body missing one of them is
    /// always a [`EstimateError::MissingField`] whatever else is wrong with
    /// it. A required field is missing when it is absent, `null`, `false`,
    /// zero or the empty string. Any other non-string value is kept in its
    /// JSON text form and so prices as an unknown name.
    ///
    /// Only then is `selectedPlaces` read. An absent key means no places. An
    /// array is taken entry by entry, non-string entries again kept as JSON
    /// text. Anything else, `null` included, is an [`EstimateError::Internal`].
    pub fn from_json(value: &Value) -> Result<Self, EstimateError> {
        let field = |key: &str| value.get(key).filter(|v| is_set(v)).map(name_of);

        let mut payload = Self {
            selected_state: field("selectedState"),
            selected_city: field("selectedCity"),
            selected_places: Vec::new(),
            selected_transport: field("selectedTransport"),
        };
        payload.validate()?;

        payload.selected_places = places_from_json(value.get("selectedPlaces"))?;
        Ok(payload)
    }
}

fn require(field: Option<&str>) -> Result<&str, EstimateError> {
    match field {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(EstimateError::MissingField),
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn name_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn places_from_json(value: Option<&Value>) -> Result<Vec<String>, EstimateError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.iter().map(name_of).collect()),
        Some(other) => Err(EstimateError::Internal(format!(
            "selectedPlaces is not an array: {other}"
        ))),
    }
}
