pub mod export_service;
pub mod itinerary_query_service;
pub mod recommendation_service;
