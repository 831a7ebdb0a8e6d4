//! Physical dimensions as entered on a product page. Merchants routinely
//! leave some or all of these blank, so "unset" is a real state here and is
//! distinct from zero.

use getset::Getters;
use serde::{Serialize, Deserialize};

/// A product's physical dimensions, in the store's configured length unit.
/// Any field can be unset.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Dimensions {
    height: Option<f64>,
    width: Option<f64>,
    length: Option<f64>,
}

impl Dimensions {
    /// Create a fully-measured dimension set.
    pub fn new(height: f64, width: f64, length: f64) -> Self {
        Self {
            height: Some(height),
            width: Some(width),
            length: Some(length),
        }
    }

    /// A dimension set with nothing filled in.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Build dimensions from the raw strings the host platform stores as
    /// product metadata. Blank means unset; anything else is coerced the way
    /// the platform coerces it: longest numeric prefix, falling back to zero
    /// when there isn't one.
    pub fn from_raw(height: &str, width: &str, length: &str) -> Self {
        Self {
            height: coerce_raw(height),
            width: coerce_raw(width),
            length: coerce_raw(length),
        }
    }

    /// True if all three measurements are present.
    pub fn is_fully_set(&self) -> bool {
        self.height.is_some() && self.width.is_some() && self.length.is_some()
    }
}

/// Loose numeric coercion for metadata strings. Blank is unset; a value with
/// a numeric prefix parses to that prefix; garbage parses to `0.0`.
fn coerce_raw(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut parsed = 0.0;
    for end in 1..=trimmed.len() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        match trimmed[..end].parse::<f64>() {
            Ok(val) => parsed = val,
            Err(_) => {}
        }
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makes_dimensions() {
        let dims = Dimensions::new(12.0, 4.5, 100.0);
        assert_eq!(dims.height(), &Some(12.0));
        assert_eq!(dims.width(), &Some(4.5));
        assert_eq!(dims.length(), &Some(100.0));
        assert!(dims.is_fully_set());
        assert!(!Dimensions::unset().is_fully_set());
    }

    #[test]
    fn coerces_raw_metadata() {
        let dims = Dimensions::from_raw("12.5", "", "banana");
        assert_eq!(dims.height(), &Some(12.5));
        assert_eq!(dims.width(), &None);
        assert_eq!(dims.length(), &Some(0.0));
        assert!(!dims.is_fully_set());

        // numeric prefixes survive trailing units, like the platform's
        // coercion does
        let dims = Dimensions::from_raw("12.5cm", " 42 ", "-3junk");
        assert_eq!(dims.height(), &Some(12.5));
        assert_eq!(dims.width(), &Some(42.0));
        assert_eq!(dims.length(), &Some(-3.0));
    }

    #[test]
    fn partial_is_not_fully_set() {
        let dims = Dimensions::from_raw("1", "1", "");
        assert!(!dims.is_fully_set());
        let dims = Dimensions::from_raw("", "", "");
        assert_eq!(dims, Dimensions::unset());
    }
}
