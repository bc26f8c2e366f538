/// Health-advisory classification for particulate concentrations.
///
/// Maps a single concentration (typically the furthest-future forecast
/// point) onto one of four ordered grades and a fixed behavioral
/// recommendation. Each pollutant kind has its own grade scale.
///
/// Classification is top-down: the value is tested against each tier's
/// lower bound with `>=`, most severe tier first. Because the tiers are
/// contiguous and the top one is unbounded, that order is what makes a
/// single comparison operator sufficient; testing bottom-up would need
/// upper-bound checks too.

use serde::Serialize;

use crate::model::{Grade, GradeBand, GradeScale, PmKind};

// ---------------------------------------------------------------------------
// Grade scales
// ---------------------------------------------------------------------------

/// PM10 grade scale (µg/m³), Korean ambient-air standard breakpoints.
pub static PM10_SCALE: GradeScale = GradeScale {
    bands: [
        GradeBand { grade: Grade::Good, lower: 0.0, upper: Some(30.0) },
        GradeBand { grade: Grade::Moderate, lower: 31.0, upper: Some(80.0) },
        GradeBand { grade: Grade::Unhealthy, lower: 81.0, upper: Some(150.0) },
        GradeBand { grade: Grade::VeryUnhealthy, lower: 151.0, upper: None },
    ],
};

/// PM2.5 grade scale (µg/m³), Korean ambient-air standard breakpoints.
pub static PM25_SCALE: GradeScale = GradeScale {
    bands: [
        GradeBand { grade: Grade::Good, lower: 0.0, upper: Some(15.0) },
        GradeBand { grade: Grade::Moderate, lower: 16.0, upper: Some(35.0) },
        GradeBand { grade: Grade::Unhealthy, lower: 36.0, upper: Some(75.0) },
        GradeBand { grade: Grade::VeryUnhealthy, lower: 76.0, upper: None },
    ],
};

/// The grade scale matching a pollutant kind. Callers must pair this with
/// the same kind used to build the series.
pub fn scale_for(kind: PmKind) -> &'static GradeScale {
    match kind {
        PmKind::Pm10 => &PM10_SCALE,
        PmKind::Pm25 => &PM25_SCALE,
    }
}

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

/// Message shown when there is no value to classify.
pub const NO_DATA_MESSAGE: &str = "No measurement or forecast value is available.";

/// A classified value: the grade and its recommendation.
///
/// `grade` is `None` only for the no-data terminal state, which is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub grade: Option<Grade>,
    pub message: &'static str,
}

/// The fixed recommendation for a grade.
pub fn advisory_message(grade: Grade) -> &'static str {
    match grade {
        Grade::Good => "Good: outdoor activity is safe",
        Grade::Moderate => "Moderate: sensitive groups should take care; light outdoor activity is fine",
        Grade::Unhealthy => "Unhealthy: avoid prolonged time outdoors and wear a mask",
        Grade::VeryUnhealthy => "Very unhealthy: stay indoors and avoid going out",
    }
}

/// Classifies a concentration against the grade scale for `kind`.
///
/// `None` means no forecast or measurement was available and yields the
/// dedicated no-data advisory.
pub fn classify(value: Option<f64>, kind: PmKind) -> Advisory {
    let Some(value) = value else {
        return Advisory { grade: None, message: NO_DATA_MESSAGE };
    };

    let scale = scale_for(kind);

    // Most severe tier first; each tier claims everything at or above its
    // lower bound that a more severe tier has not already claimed.
    for band in scale.bands.iter().rev() {
        if value >= band.lower {
            return Advisory {
                grade: Some(band.grade),
                message: advisory_message(band.grade),
            };
        }
    }

    // Below every lower bound (only reachable for negative input): Good.
    let good = scale.bands[0].grade;
    Advisory { grade: Some(good), message: advisory_message(good) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn grade_of(value: f64, kind: PmKind) -> Grade {
        classify(Some(value), kind)
            .grade
            .expect("a concrete value must always grade")
    }

    // --- Boundary behavior --------------------------------------------------

    #[test]
    fn test_pm10_boundaries_tie_break_upward_at_each_tier() {
        assert_eq!(grade_of(0.0, PmKind::Pm10), Grade::Good);
        assert_eq!(grade_of(30.0, PmKind::Pm10), Grade::Good);
        assert_eq!(grade_of(31.0, PmKind::Pm10), Grade::Moderate);
        assert_eq!(grade_of(80.0, PmKind::Pm10), Grade::Moderate);
        assert_eq!(grade_of(81.0, PmKind::Pm10), Grade::Unhealthy);
        assert_eq!(grade_of(150.0, PmKind::Pm10), Grade::Unhealthy);
        assert_eq!(grade_of(151.0, PmKind::Pm10), Grade::VeryUnhealthy);
        assert_eq!(grade_of(999.0, PmKind::Pm10), Grade::VeryUnhealthy);
    }

    #[test]
    fn test_pm25_boundaries_tie_break_upward_at_each_tier() {
        assert_eq!(grade_of(15.0, PmKind::Pm25), Grade::Good);
        assert_eq!(grade_of(16.0, PmKind::Pm25), Grade::Moderate);
        assert_eq!(grade_of(35.0, PmKind::Pm25), Grade::Moderate);
        assert_eq!(grade_of(36.0, PmKind::Pm25), Grade::Unhealthy);
        assert_eq!(grade_of(75.0, PmKind::Pm25), Grade::Unhealthy);
        assert_eq!(grade_of(76.0, PmKind::Pm25), Grade::VeryUnhealthy);
    }

    #[test]
    fn test_fractional_values_between_bounds_grade_by_lower_bound() {
        // 30.5 is above Good's upper bound but below Moderate's lower bound;
        // top-down >= classification resolves it to Good, matching the
        // integer-breakpoint tables the standard publishes.
        assert_eq!(grade_of(30.5, PmKind::Pm10), Grade::Good);
        assert_eq!(grade_of(31.2, PmKind::Pm10), Grade::Moderate);
    }

    // --- Totality -----------------------------------------------------------

    #[test]
    fn test_every_nonnegative_value_gets_exactly_one_grade() {
        for kind in [PmKind::Pm10, PmKind::Pm25] {
            for i in 0..=2000 {
                let value = i as f64 * 0.5;
                let advisory = classify(Some(value), kind);
                assert!(
                    advisory.grade.is_some(),
                    "value {} must grade for {:?}",
                    value,
                    kind
                );
            }
        }
    }

    #[test]
    fn test_scales_are_contiguous_and_ascending() {
        for scale in [&PM10_SCALE, &PM25_SCALE] {
            assert_eq!(scale.bands[0].lower, 0.0, "scales must start at zero");
            assert!(
                scale.bands[3].upper.is_none(),
                "top band must be unbounded"
            );
            for pair in scale.bands.windows(2) {
                let upper = pair[0].upper.expect("only the top band is unbounded");
                assert!(
                    pair[0].lower <= upper,
                    "band bounds must be ordered"
                );
                assert_eq!(
                    upper + 1.0,
                    pair[1].lower,
                    "bands must be contiguous with no gaps"
                );
                assert!(pair[0].grade < pair[1].grade, "severity must ascend");
            }
        }
    }

    // --- No-data terminal state ---------------------------------------------

    #[test]
    fn test_absent_value_yields_no_data_advisory() {
        let advisory = classify(None, PmKind::Pm10);
        assert_eq!(advisory.grade, None);
        assert_eq!(advisory.message, NO_DATA_MESSAGE);
    }

    // --- Messages -----------------------------------------------------------

    #[test]
    fn test_each_grade_has_a_distinct_message() {
        let grades = [
            Grade::Good,
            Grade::Moderate,
            Grade::Unhealthy,
            Grade::VeryUnhealthy,
        ];
        let mut seen = std::collections::HashSet::new();
        for grade in grades {
            assert!(
                seen.insert(advisory_message(grade)),
                "messages must be distinct per grade"
            );
        }
    }

    #[test]
    fn test_advisory_carries_the_grade_message() {
        let advisory = classify(Some(200.0), PmKind::Pm10);
        assert_eq!(advisory.grade, Some(Grade::VeryUnhealthy));
        assert_eq!(advisory.message, advisory_message(Grade::VeryUnhealthy));
    }
}
