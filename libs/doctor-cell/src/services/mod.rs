pub mod doctor;
pub mod query;
pub mod analytics;
pub mod summary;

pub use doctor::DoctorService;
pub use query::{filter_doctors, paginate};
pub use analytics::build_analytics;
pub use summary::calculate_stats;
