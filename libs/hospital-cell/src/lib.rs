pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Hospital, UpdateHospitalRequest};
pub use router::hospital_routes;
pub use services::HospitalService;
