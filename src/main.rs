use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use cruise_adviser_api::{db, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE_URL: &str = "sqlite://itineraries.db";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string());
    let pool = db::sqlite::create_db_pool(&database_url).await;

    println!("Starting HTTP server on {}:{}", host, port);

    let server_pool = pool.clone();
    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(server_pool.clone()))
            .route(
                "/",
                web::get().to(|| async {
                    "Cruise Adviser API is running. POST /ask to get itinerary recommendations."
                }),
            )
            .route("/ask", web::post().to(routes::ask::ask))
            .route("/export", web::post().to(routes::export::export))
            .route("/cities", web::get().to(routes::cities::get_cities))
            .route("/health", web::get().to(routes::health::health_check))
    })
    .bind((host, port))?
    .run()
    .await;

    // The pool is the one long-lived store handle; close it once the server
    // has drained on shutdown.
    pool.close().await;
    result
}
