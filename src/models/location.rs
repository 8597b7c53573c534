use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct CityEntry {
    pub city: String,
    pub country: String,
}
