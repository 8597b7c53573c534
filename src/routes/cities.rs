use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

use crate::models::location::CityEntry;

/*
    GET /cities
*/
pub async fn get_cities(data: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query_as::<_, CityEntry>("SELECT DISTINCT city, country FROM locations")
        .fetch_all(data.get_ref())
        .await
    {
        Ok(cities) => HttpResponse::Ok().json(json!({
            "status": "success",
            "data": cities,
        })),
        Err(err) => {
            eprintln!("Failed to query cities: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to query cities" }))
        }
    }
}
