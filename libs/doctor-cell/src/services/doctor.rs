use serde_json::{json, Map, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::{Fixture, FixtureStore};

use crate::models::{
    DoctorAnalytics, DoctorError, DoctorSearchQuery, DoctorsFixture, DoctorsPage,
};
use crate::services::{analytics, query, summary};

pub struct DoctorService {
    store: FixtureStore,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: FixtureStore::new(config),
        }
    }

    pub async fn load_fixture(&self) -> Result<DoctorsFixture, DoctorError> {
        let fixture: DoctorsFixture = self.store.load(Fixture::Doctors).await?;
        debug!("Loaded {} doctors from fixture", fixture.doctors.len());
        Ok(fixture)
    }

    /// Filtered, paginated listing with the fixture's static summary attached.
    pub async fn search_doctors(&self, search: &DoctorSearchQuery) -> Result<DoctorsPage, DoctorError> {
        let fixture = self.load_fixture().await?;

        let filtered = query::filter_doctors(&fixture.doctors, search);
        debug!(
            "Doctor search matched {} of {} records",
            filtered.len(),
            fixture.doctors.len()
        );

        let (page, pagination) = query::paginate(&filtered, search.page(), search.limit());

        Ok(DoctorsPage {
            doctors: page.into_iter().cloned().collect(),
            pagination,
            summary: fixture.summary,
        })
    }

    pub async fn get_analytics(&self) -> Result<DoctorAnalytics, DoctorError> {
        let fixture = self.load_fixture().await?;
        Ok(analytics::build_analytics(&fixture.doctors))
    }

    /// The fixture summary merged with freshly calculated stats. With no
    /// doctors to average over, the fixture summary is returned as-is.
    pub async fn get_summary(&self) -> Result<Map<String, Value>, DoctorError> {
        let fixture = self.load_fixture().await?;
        let mut body = fixture.summary;

        if let Some(stats) = summary::calculate_stats(&fixture.doctors) {
            body.insert("calculated_stats".to_string(), json!(stats));
        }

        Ok(body)
    }
}
