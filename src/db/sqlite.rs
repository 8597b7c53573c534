use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

pub async fn create_db_pool(url: &str) -> SqlitePool {
    println!("Connecting to database: {}", url);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(url)
        .await
        .expect("DATABASE_URL may be incorrect! Failed to open the database.");

    // Test the connection to make sure it works
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => println!("Successfully connected to the database and verified with a ping query"),
        Err(e) => {
            eprintln!("WARNING: Opened the database but the ping query failed: {}", e);
            eprintln!("The API may still work, but some functionality might be impaired");
        }
    }

    pool
}
