use crate::models::{Doctor, DoctorSearchQuery, Pagination, ALL_FILTER};

fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_FILTER)
}

/// Applies free-text search, then department, then specialization.
/// Search is an OR across name, specialization and department; the two
/// exact-match filters are ANDed on top.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], query: &DoctorSearchQuery) -> Vec<&'a Doctor> {
    let search = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let department = active_filter(query.department.as_deref());
    let specialization = active_filter(query.specialization.as_deref());

    doctors
        .iter()
        .filter(|doctor| match &search {
            Some(term) => {
                doctor.name.to_lowercase().contains(term)
                    || doctor.specialization.to_lowercase().contains(term)
                    || doctor.department.to_lowercase().contains(term)
            }
            None => true,
        })
        .filter(|doctor| department.map_or(true, |d| doctor.department == d))
        .filter(|doctor| specialization.map_or(true, |s| doctor.specialization == s))
        .collect()
}

/// Slices `[(page-1)*limit, page*limit)`. Pages past the end come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> (Vec<T>, Pagination) {
    let pagination = Pagination::new(page, limit, items.len());

    let start = page.saturating_sub(1).saturating_mul(limit);
    let slice = items
        .iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    (slice, pagination)
}
