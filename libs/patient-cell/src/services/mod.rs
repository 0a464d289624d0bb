pub mod patient;
pub mod upload;

pub use patient::PatientService;
pub use upload::read_upload;
