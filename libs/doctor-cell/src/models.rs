use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use shared_database::FixtureError;

/// Sentinel meaning "do not filter" for department and specialization.
pub const ALL_FILTER: &str = "all";
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Numeric or string, whatever the fixture carries.
    pub id: Value,
    pub name: String,
    pub specialization: String,
    pub department: String,
    /// Numbers are kept as the fixture wrote them, so `10` stays `10`.
    pub experience: Number,
    pub rating: Number,
    #[serde(rename = "successRate")]
    pub success_rate: Number,
    /// Everything else (education, contact, availability...) passes through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Widens a fixture number for arithmetic.
pub fn as_f64(number: &Number) -> f64 {
    number.as_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorsFixture {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub summary: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl DoctorSearchQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub limit: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total_records: usize) -> Self {
        let total_pages = total_records.div_ceil(limit);
        Self {
            current_page: page,
            total_pages,
            total_records,
            has_next: page < total_pages,
            has_prev: page > 1,
            limit,
        }
    }

    pub fn empty(page: usize, limit: usize) -> Self {
        Self::new(page, limit, 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorsPage {
    pub doctors: Vec<Doctor>,
    pub pagination: Pagination,
    pub summary: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationCount {
    pub specialization: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperiencePoint {
    pub experience: Number,
    #[serde(rename = "successRate")]
    pub success_rate: Number,
    pub rating: Number,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorAnalytics {
    pub specialization_distribution: Vec<SpecializationCount>,
    pub department_distribution: Vec<DepartmentCount>,
    pub rating_distribution: Vec<RatingCount>,
    pub experience_vs_success: Vec<ExperiencePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedStats {
    pub average_experience: f64,
    pub average_rating: f64,
    pub average_success_rate: f64,
    pub departments: Vec<String>,
    pub specializations: Vec<String>,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctors data not found")]
    DataNotFound,

    #[error(transparent)]
    Fixture(FixtureError),
}

impl From<FixtureError> for DoctorError {
    fn from(err: FixtureError) -> Self {
        if err.is_not_found() {
            DoctorError::DataNotFound
        } else {
            DoctorError::Fixture(err)
        }
    }
}
