//! Size classification maps a product's physical dimensions onto the coarse
//! 1-5 bucket the provider's pricing model wants.
//!
//! The scheme is a fuzzy-membership scoring pass: each bucket has a "typical
//! diameter", and a fixed set of probe values is scored against each bucket's
//! diameter (full marks below the diameter, a linear falloff inside the
//! membership radius past it, nothing beyond). The highest-scoring bucket
//! wins, lowest bucket first on ties.
//!
//! COMPATIBILITY WARNING: the probe set is a constant. After the unset
//! checks, a product's actual measurements are never consulted, so every
//! fully-measured product classifies to the same bucket. This is almost
//! certainly a defect in the sizing scheme as shipped, but downstream pricing
//! has only ever seen its output, so we reproduce it exactly instead of
//! quietly rewiring the probes to the real dimensions. Unmeasured products
//! keep classifying to the neutral bucket 3.

use std::convert::TryFrom;
use serde::{Serialize, Deserialize};
use crate::models::dimensions::Dimensions;

/// The typical diameter for each bucket, smallest bucket first.
pub(crate) const TYPICAL_DIAMETERS: [f64; 5] = [50.0, 80.0, 120.0, 150.0, 150.0];

/// How far past a bucket's diameter a probe can land and still score.
pub(crate) const MEMBERSHIP_RADIUS: f64 = 10.0;

/// The probe values scored against each bucket. Fixed, see the module docs.
pub(crate) const PROBES: [f64; 3] = [10.0, 10.0, 10.0];

/// The provider's discrete package sizes, 1 (extra small) through 5 (extra
/// large). Serialized as the bare integer the delivery schema expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SizeBucket {
    XSmall = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
    XLarge = 5,
}

impl SizeBucket {
    /// All buckets, ascending. Classification order matters: ties resolve to
    /// the earliest bucket.
    pub const ALL: [SizeBucket; 5] = [
        SizeBucket::XSmall,
        SizeBucket::Small,
        SizeBucket::Medium,
        SizeBucket::Large,
        SizeBucket::XLarge,
    ];
}

impl Default for SizeBucket {
    /// The neutral bucket used whenever a product is missing measurements.
    fn default() -> Self {
        SizeBucket::Medium
    }
}

impl From<SizeBucket> for u8 {
    fn from(bucket: SizeBucket) -> Self {
        bucket as u8
    }
}

impl TryFrom<u8> for SizeBucket {
    type Error = String;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(SizeBucket::XSmall),
            2 => Ok(SizeBucket::Small),
            3 => Ok(SizeBucket::Medium),
            4 => Ok(SizeBucket::Large),
            5 => Ok(SizeBucket::XLarge),
            _ => Err(format!("size bucket out of range: {}", val)),
        }
    }
}

/// Classify a product's dimensions into a [`SizeBucket`].
///
/// Total and deterministic: every input maps to a bucket, the same bucket
/// every time. Products missing any measurement go straight to the neutral
/// bucket without scoring.
pub fn classify(dimensions: &Dimensions) -> SizeBucket {
    if !dimensions.is_fully_set() {
        return SizeBucket::default();
    }

    let max_per_probe = 100.0 / 3.0;
    let mut best = SizeBucket::default();
    let mut best_score = std::f64::NEG_INFINITY;
    for (bucket, diameter) in SizeBucket::ALL.iter().zip(TYPICAL_DIAMETERS.iter()) {
        let mut score = 0.0;
        for probe in PROBES.iter() {
            if probe < diameter {
                score += max_per_probe;
            } else if *probe < diameter + MEMBERSHIP_RADIUS {
                // linear falloff inside the membership band, floored at zero
                let membership = 1.0 - ((diameter - probe).abs() / (2.0 * MEMBERSHIP_RADIUS));
                let membership = if membership < 0.0 { 0.0 } else { membership };
                score += membership * max_per_probe;
            }
        }
        // strict comparison so ties keep the earliest bucket
        if score > best_score {
            best_score = score;
            best = *bucket;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_measurements_go_neutral() {
        assert_eq!(classify(&Dimensions::unset()), SizeBucket::Medium);
        assert_eq!(classify(&Dimensions::from_raw("", "20", "30")), SizeBucket::Medium);
        assert_eq!(classify(&Dimensions::from_raw("20", "", "30")), SizeBucket::Medium);
        assert_eq!(classify(&Dimensions::from_raw("20", "30", "")), SizeBucket::Medium);
    }

    #[test]
    fn total_over_valid_triples() {
        let samples = [
            Dimensions::new(0.0, 0.0, 0.0),
            Dimensions::new(1.0, 1.0, 1.0),
            Dimensions::new(49.9, 50.0, 50.1),
            Dimensions::new(1000.0, 1000.0, 1000.0),
        ];
        for dims in samples.iter() {
            let bucket = classify(dims);
            assert!(SizeBucket::ALL.contains(&bucket));
        }
    }

    // The constant probe set means measurements don't influence the result.
    // Asserted on purpose: downstream pricing depends on today's answers, so
    // a change here has to be deliberate.
    #[test]
    fn fully_measured_products_all_classify_alike() {
        let tiny = classify(&Dimensions::new(1.0, 1.0, 1.0));
        let huge = classify(&Dimensions::new(200.0, 35.0, 90.0));
        let zero = classify(&Dimensions::new(0.0, 0.0, 0.0));
        assert_eq!(tiny, huge);
        assert_eq!(huge, zero);
        assert_eq!(tiny, SizeBucket::XSmall);
    }

    #[test]
    fn deterministic() {
        let dims = Dimensions::new(12.0, 33.0, 4.0);
        assert_eq!(classify(&dims), classify(&dims));
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&SizeBucket::XLarge).unwrap(), "5");
        let bucket: SizeBucket = serde_json::from_str("3").unwrap();
        assert_eq!(bucket, SizeBucket::Medium);
        assert!(serde_json::from_str::<SizeBucket>("6").is_err());
        assert!(serde_json::from_str::<SizeBucket>("0").is_err());
    }
}
