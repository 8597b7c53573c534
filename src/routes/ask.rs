use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

use crate::models::search::ItineraryQuery;
use crate::services::itinerary_query_service::filter_itineraries;
use crate::services::recommendation_service::{RecommendationService, FALLBACK_RECOMMENDATION};

/*
    POST /ask
*/
pub async fn ask(data: web::Data<SqlitePool>, input: web::Json<ItineraryQuery>) -> impl Responder {
    let params = input.into_inner();

    let month = match params.validated_month() {
        Ok(month) => month,
        Err(msg) => return HttpResponse::BadRequest().json(json!({ "error": msg })),
    };

    // Missing API key is a server configuration problem; fail before
    // running any query.
    let service = match RecommendationService::from_env() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Recommendation service unavailable: {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "error": "Server is missing the OpenRouter API key configuration"
            }));
        }
    };

    let rows = match filter_itineraries(&data, &params, month).await {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("Failed to query itineraries: {:?}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "error": "Database query failed" }));
        }
    };

    if rows.is_empty() {
        return HttpResponse::NotFound()
            .json(json!({ "message": "No recommended itineraries in this range" }));
    }

    match service.recommend(&params, month, &rows).await {
        Ok(recommendation) => HttpResponse::Ok().json(json!({
            "status": "success",
            "data": rows,
            "aiRecommendation": recommendation,
        })),
        Err(err) => {
            // The external dependency being down never fails the request;
            // serve the rows with a placeholder instead.
            eprintln!("AI recommendation failed: {}", err);
            HttpResponse::Ok().json(json!({
                "status": "partial_success",
                "data": rows,
                "aiRecommendation": FALLBACK_RECOMMENDATION,
            }))
        }
    }
}
