use super::criteria::{FilterCriteria, parse_bound};
use super::record::Record;

#[derive(Debug, Clone, PartialEq)]
struct CompiledRange<F> {
    field: F,
    min: Option<f64>,
    max: Option<f64>,
}

/// Filter criteria compiled once per query: the needle is lower-cased and
/// the bounds are parsed, so `matches` does no string parsing per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<F> {
    needle: String,
    category: Option<String>,
    range: Option<CompiledRange<F>>,
}

impl<F: Copy + PartialEq> Predicate<F> {
    pub fn build(criteria: &FilterCriteria<F>) -> Self {
        let category = (!criteria.category.is_empty()).then(|| criteria.category.clone());
        let range = criteria.range.as_ref().and_then(|range| {
            let min = parse_bound(&range.min);
            let max = parse_bound(&range.max);
            (min.is_some() || max.is_some()).then_some(CompiledRange { field: range.field, min, max })
        });

        Self {
            needle: criteria.search.to_lowercase(),
            category,
            range,
        }
    }

    /// True when no constraint is active and every record passes
    pub fn is_unconstrained(&self) -> bool {
        self.needle.is_empty() && self.category.is_none() && self.range.is_none()
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_category(record) && self.matches_range(record)
    }

    fn matches_text<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.needle.is_empty()
            || record
                .search_fields()
                .any(|text| text.to_lowercase().contains(&self.needle))
    }

    fn matches_category<R: Record<Field = F>>(&self, record: &R) -> bool {
        match &self.category {
            Some(category) => record.category() == category.as_str(),
            None => true,
        }
    }

    // A row without a value for the bounded field cannot satisfy the bound.
    fn matches_range<R: Record<Field = F>>(&self, record: &R) -> bool {
        let Some(range) = &self.range else {
            return true;
        };
        let Some(value) = record.number(range.field) else {
            return false;
        };
        range.min.is_none_or(|min| value >= min) && range.max.is_none_or(|max| value <= max)
    }
}
