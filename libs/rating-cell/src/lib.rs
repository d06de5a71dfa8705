pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Rating, UpdateRatingRequest};
pub use router::rating_routes;
pub use services::RatingService;
