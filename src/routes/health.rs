use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

/*
    GET /health
*/
pub async fn health_check(data: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query("SELECT 1").execute(data.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "message": "Server and database are up",
        })),
        Err(err) => {
            eprintln!("Database health check failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "Database connection failed",
            }))
        }
    }
}
