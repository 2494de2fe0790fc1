use super::comparator::{SortState, compare_records, stable_sort_by};
use super::criteria::FilterCriteria;
use super::entities::Company;
use super::predicate::Predicate;
use super::record::Record;
use super::value_objects::CompanyField;

/// Visible rows of a view: the store filtered by `criteria`, then ordered by
/// `sort` when a sort is active. Store order is kept otherwise.
///
/// Pure and total. Rows are borrowed from `store`, never copied.
pub fn query_records<'a, R: Record>(
    store: &'a [R],
    criteria: &FilterCriteria<R::Field>,
    sort: &SortState<R::Field>,
) -> Vec<&'a R> {
    let predicate = Predicate::build(criteria);
    let mut rows: Vec<&R> = if predicate.is_unconstrained() {
        store.iter().collect()
    } else {
        store.iter().filter(|record| predicate.matches(*record)).collect()
    };

    if let Some(key) = sort.active() {
        stable_sort_by(&mut rows, |a, b| compare_records(*a, *b, key));
    }

    rows
}

/// Distinct non-empty categories in first-seen order (filter options).
pub fn distinct_categories<R: Record>(store: &[R]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for record in store {
        let category = record.category();
        if !category.is_empty() && !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// First company (store order) whose symbol or name contains `term`,
/// case-insensitively. A blank term finds nothing.
pub fn find_company<'a>(store: &'a [Company], term: &str) -> Option<&'a Company> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let predicate = Predicate::build(&FilterCriteria::<CompanyField>::new().with_search(term));
    store.iter().find(|company| predicate.matches(*company))
}
