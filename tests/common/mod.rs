use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use cruise_adviser_api::routes;

pub struct TestApp {
    pub pool: SqlitePool,
}

impl TestApp {
    /// In-memory store seeded with two cities; the single-connection pool
    /// keeps every query on the same in-memory database.
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        create_schema(&pool).await;
        seed(&pool).await;

        Self { pool }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.pool.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
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
    }
}

async fn create_schema(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE locations (
            location_id INTEGER PRIMARY KEY,
            city TEXT NOT NULL,
            country TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create locations table");

    sqlx::query(
        "CREATE TABLE itineraries (
            itinerary_id INTEGER PRIMARY KEY,
            itinerary_name TEXT NOT NULL,
            url TEXT NOT NULL,
            rating REAL NOT NULL,
            review_count INTEGER NOT NULL,
            participant_count INTEGER NOT NULL,
            min_price REAL NOT NULL,
            location_id INTEGER NOT NULL REFERENCES locations(location_id)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create itineraries table");

    sqlx::query(
        "CREATE TABLE weather (
            location_id INTEGER NOT NULL REFERENCES locations(location_id),
            month INTEGER NOT NULL,
            average_temperature REAL NOT NULL,
            precipitation_mm REAL NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create weather table");
}

/// Fixture: Osaka holds one itinerary matching the default criteria for
/// April (rating 4.5, price 4000, 15°C), one over the default budget and
/// one under the default rating floor; Tokyo holds one April match of its
/// own. July in Osaka is too hot for the default temperature band.
async fn seed(pool: &SqlitePool) {
    sqlx::query(
        "INSERT INTO locations (location_id, city, country) VALUES
            (1, '大阪', '日本'),
            (2, '東京', '日本')",
    )
    .execute(pool)
    .await
    .expect("Failed to seed locations");

    sqlx::query(
        "INSERT INTO itineraries
            (itinerary_name, url, rating, review_count, participant_count, min_price, location_id)
         VALUES
            ('Osaka Bay Cruise', 'https://example.com/osaka-bay', 4.5, 812, 2400, 4000.0, 1),
            ('Osaka Luxury Liner', 'https://example.com/osaka-luxury', 4.8, 455, 1200, 8800.0, 1),
            ('Osaka Harbor Ferry', 'https://example.com/osaka-ferry', 3.8, 1400, 5100, 1200.0, 1),
            ('Tokyo Bay Dinner Cruise', 'https://example.com/tokyo-bay', 4.6, 903, 3100, 4500.0, 2)",
    )
    .execute(pool)
    .await
    .expect("Failed to seed itineraries");

    sqlx::query(
        "INSERT INTO weather (location_id, month, average_temperature, precipitation_mm) VALUES
            (1, 4, 15.0, 103.5),
            (1, 7, 28.0, 157.0),
            (2, 4, 14.0, 110.0)",
    )
    .execute(pool)
    .await
    .expect("Failed to seed weather");
}
