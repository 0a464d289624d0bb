use std::collections::HashMap;

use crate::models::{
    as_f64, DepartmentCount, Doctor, DoctorAnalytics, ExperiencePoint, RatingCount,
    SpecializationCount,
};

/// Counts occurrences of each key, keeping the order in which keys were first seen.
fn count_in_order<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

pub fn rating_key(rating: f64) -> String {
    format!("{:.1}", rating)
}

pub fn build_analytics(doctors: &[Doctor]) -> DoctorAnalytics {
    let specialization_distribution = count_in_order(doctors.iter().map(|d| d.specialization.clone()))
        .into_iter()
        .map(|(specialization, count)| SpecializationCount { specialization, count })
        .collect();

    let department_distribution = count_in_order(doctors.iter().map(|d| d.department.clone()))
        .into_iter()
        .map(|(department, count)| DepartmentCount { department, count })
        .collect();

    let rating_distribution = count_in_order(doctors.iter().map(|d| rating_key(as_f64(&d.rating))))
        .into_iter()
        .map(|(rating, count)| RatingCount { rating, count })
        .collect();

    let experience_vs_success = doctors
        .iter()
        .map(|d| ExperiencePoint {
            experience: d.experience.clone(),
            success_rate: d.success_rate.clone(),
            rating: d.rating.clone(),
            name: d.name.clone(),
        })
        .collect();

    DoctorAnalytics {
        specialization_distribution,
        department_distribution,
        rating_distribution,
        experience_vs_success,
    }
}
