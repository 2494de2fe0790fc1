use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inclusive range over one numeric field, kept as the raw text the user
/// typed. Parsing happens when the predicate is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRange<F> {
    pub field: F,
    #[serde(default, deserialize_with = "bound_text")]
    pub min: String,
    #[serde(default, deserialize_with = "bound_text")]
    pub max: String,
}

/// JS callers pass bounds as text, numbers or `null`. Anything that is not
/// text or a number reads as an unset bound.
fn bound_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

impl<F> NumericRange<F> {
    pub fn new(field: F, min: impl Into<String>, max: impl Into<String>) -> Self {
        Self { field, min: min.into(), max: max.into() }
    }
}

/// User-chosen constraints for a screener view. Empty strings mean "no
/// constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria<F> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
    pub range: Option<NumericRange<F>>,
}

impl<F> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self { search: String::new(), category: String::new(), range: None }
    }
}

impl<F: Copy> FilterCriteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_range(mut self, field: F, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.range = Some(NumericRange::new(field, min, max));
        self
    }

    /// Update the lower bound text, creating the range over `field` if needed
    pub fn set_min(&mut self, field: F, min: impl Into<String>) {
        self.range_mut(field).min = min.into();
    }

    pub fn set_max(&mut self, field: F, max: impl Into<String>) {
        self.range_mut(field).max = max.into();
    }

    fn range_mut(&mut self, field: F) -> &mut NumericRange<F> {
        let range = self.range.get_or_insert_with(|| NumericRange::new(field, "", ""));
        range.field = field;
        range
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse a bound typed by the user the way a browser number field reads
/// it: the longest leading decimal (`"160abc"` is 160), or a signed
/// `Infinity`. Empty, blank, NaN or otherwise unparseable input is no
/// bound at all.
pub fn parse_bound(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        let infinity = if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(infinity);
    }

    let digits_from = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_from;
    if bytes.get(end) == Some(&b'.') {
        let fraction_from = end + 1;
        let mut fraction_end = fraction_from;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_from;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_from = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_from {
            end = exponent_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| !value.is_nan())
}
