use serde::{Deserialize, Serialize};

/// Filter criteria shared by the /ask and /export endpoints. Every field
/// except `month` falls back to a default when the client omits it.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryQuery {
    #[serde(default = "default_city")]
    pub city: String,
    pub month: Option<i64>,
    #[serde(default = "default_min_temp")]
    pub min_temp: f64,
    #[serde(default = "default_max_temp")]
    pub max_temp: f64,
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default = "default_budget")]
    pub budget: f64,
    // Accepted from clients but not part of any filter yet.
    pub departure_date: Option<String>,
}

fn default_city() -> String {
    "大阪".to_string()
}

fn default_min_temp() -> f64 {
    10.0
}

fn default_max_temp() -> f64 {
    20.0
}

fn default_min_rating() -> f64 {
    4.0
}

fn default_budget() -> f64 {
    5000.0
}

impl ItineraryQuery {
    /// Returns the requested month, or an error message when it is missing
    /// or outside 1-12.
    pub fn validated_month(&self) -> Result<i64, &'static str> {
        match self.month {
            Some(month) if (1..=12).contains(&month) => Ok(month),
            _ => Err("Please provide a valid month (1-12)"),
        }
    }
}
