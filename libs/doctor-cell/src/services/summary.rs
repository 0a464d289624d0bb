use std::collections::BTreeSet;

use crate::models::{as_f64, CalculatedStats, Doctor};

/// One decimal place, ties to even like the `{:.1}` rating keys.
fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

fn mean<'a>(values: impl Iterator<Item = &'a serde_json::Number>, len: usize) -> f64 {
    round1(values.map(as_f64).sum::<f64>() / len as f64)
}

/// `None` for an empty roster; callers fall back to the fixture summary.
pub fn calculate_stats(doctors: &[Doctor]) -> Option<CalculatedStats> {
    if doctors.is_empty() {
        return None;
    }

    let len = doctors.len();
    let departments: BTreeSet<&str> = doctors.iter().map(|d| d.department.as_str()).collect();
    let specializations: BTreeSet<&str> = doctors.iter().map(|d| d.specialization.as_str()).collect();

    Some(CalculatedStats {
        average_experience: mean(doctors.iter().map(|d| &d.experience), len),
        average_rating: mean(doctors.iter().map(|d| &d.rating), len),
        average_success_rate: mean(doctors.iter().map(|d| &d.success_rate), len),
        departments: departments.into_iter().map(String::from).collect(),
        specializations: specializations.into_iter().map(String::from).collect(),
    })
}
