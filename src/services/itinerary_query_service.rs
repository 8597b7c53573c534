use sqlx::SqlitePool;

use crate::models::{itinerary::ItineraryMatch, search::ItineraryQuery};

const FILTER_QUERY: &str = "
    SELECT DISTINCT
        i.itinerary_name,
        i.url,
        i.rating,
        i.review_count,
        i.participant_count,
        i.min_price,
        l.city,
        l.country,
        w.average_temperature,
        w.precipitation_mm
    FROM itineraries i
    JOIN locations l ON i.location_id = l.location_id
    JOIN weather w ON l.location_id = w.location_id
    WHERE l.city = ?
      AND w.month = ?
      AND w.average_temperature BETWEEN ? AND ?
      AND i.rating >= ?
      AND i.min_price <= ?
";

/// Runs the shared itinerary filter: the location must match the requested
/// city, its weather sample for `month` must fall inside the temperature
/// band (inclusive), and the itinerary must clear the rating floor and stay
/// under the budget ceiling. An empty result set is not an error.
pub async fn filter_itineraries(
    pool: &SqlitePool,
    params: &ItineraryQuery,
    month: i64,
) -> Result<Vec<ItineraryMatch>, sqlx::Error> {
    sqlx::query_as::<_, ItineraryMatch>(FILTER_QUERY)
        .bind(&params.city)
        .bind(month)
        .bind(params.min_temp)
        .bind(params.max_temp)
        .bind(params.min_rating)
        .bind(params.budget)
        .fetch_all(pool)
        .await
}
