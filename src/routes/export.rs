use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

use crate::models::search::ItineraryQuery;
use crate::services::export_service::itineraries_to_csv;
use crate::services::itinerary_query_service::filter_itineraries;

/*
    POST /export
*/
pub async fn export(
    data: web::Data<SqlitePool>,
    input: web::Json<ItineraryQuery>,
) -> impl Responder {
    let params = input.into_inner();

    let month = match params.validated_month() {
        Ok(month) => month,
        Err(msg) => return HttpResponse::BadRequest().json(json!({ "error": msg })),
    };

    let rows = match filter_itineraries(&data, &params, month).await {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("Failed to query itineraries for export: {:?}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "error": "Database query failed" }));
        }
    };

    if rows.is_empty() {
        return HttpResponse::NotFound()
            .json(json!({ "message": "No recommended itineraries in this range" }));
    }

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=itineraries.csv",
        ))
        .body(itineraries_to_csv(&rows))
}
