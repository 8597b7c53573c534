pub mod ask;
pub mod cities;
pub mod export;
pub mod health;
