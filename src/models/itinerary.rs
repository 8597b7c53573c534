use serde::{Deserialize, Serialize};

/// One itinerary joined with its location and the weather sample matched
/// for the requested month.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItineraryMatch {
    pub itinerary_name: String,
    pub url: String,
    pub rating: f64,
    pub review_count: i64,
    pub participant_count: i64,
    pub min_price: f64,
    pub city: String,
    pub country: String,
    pub average_temperature: f64,
    pub precipitation_mm: f64,
}
