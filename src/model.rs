/// Core data types for the AirKorea particulate analysis service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no dependencies beyond chrono and serde
/// derives — only types.

use chrono::NaiveDateTime;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Pollutant kinds
// ---------------------------------------------------------------------------

/// AirKorea response field carrying the PM10 concentration.
pub const FIELD_PM10: &str = "pm10Value";

/// AirKorea response field carrying the PM2.5 concentration.
pub const FIELD_PM25: &str = "pm25Value";

/// Which particulate category an analysis targets.
///
/// The kind selects both the raw-record value field to read and the grade
/// scale used for the advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PmKind {
    /// Coarse particulate (PM10).
    Pm10,
    /// Fine particulate (PM2.5).
    Pm25,
}

impl PmKind {
    /// The raw-record field this kind reads its concentration from.
    pub fn value_field(&self) -> &'static str {
        match self {
            PmKind::Pm10 => FIELD_PM10,
            PmKind::Pm25 => FIELD_PM25,
        }
    }

    /// Display label, e.g. for report headers and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            PmKind::Pm10 => "PM10",
            PmKind::Pm25 => "PM2.5",
        }
    }
}

// ---------------------------------------------------------------------------
// Measurement types
// ---------------------------------------------------------------------------

/// A single cleaned measurement from a monitoring station.
///
/// Constructed only by the series builder: the raw `dataTime` string parsed
/// against the accepted timestamp formats, and the concentration field parsed
/// as a finite, non-negative number. Records failing either parse are never
/// materialized as a `Measurement`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Station-local observation time (the API reports KST without an offset).
    pub datetime: NaiveDateTime,
    /// Concentration in µg/m³.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Forecast types
// ---------------------------------------------------------------------------

/// One projected concentration, one hour past its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub datetime: NaiveDateTime,
    /// Projected concentration, floored at 1.0 µg/m³.
    pub value: f64,
}

/// Outcome of a forecast attempt.
///
/// A linear fit over fewer than three points is arithmetically defined but
/// meaningless for this system, so short series yield `InsufficientData`
/// rather than a degenerate projection. Callers render it as a non-fatal
/// notice, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForecastResult {
    /// Exactly `horizon` points at one-hour spacing past the series end.
    Forecast(Vec<ForecastPoint>),
    /// Fewer than three valid measurements were available.
    InsufficientData,
}

impl ForecastResult {
    /// The furthest-future projected point, if a forecast was produced.
    pub fn final_point(&self) -> Option<&ForecastPoint> {
        match self {
            ForecastResult::Forecast(points) => points.last(),
            ForecastResult::InsufficientData => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Grade types
// ---------------------------------------------------------------------------

/// Health-advisory grades, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
}

/// One band of a grade scale: the concentration range a grade covers.
///
/// `upper` is `None` for the top band, which is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct GradeBand {
    pub grade: Grade,
    pub lower: f64,
    pub upper: Option<f64>,
}

/// A pollutant-specific grade scale.
///
/// Bands are ordered ascending by severity and cover the whole non-negative
/// line with no gaps; classification walks them top-down. Reference values
/// are the Korean ambient-air standards for PM10 and PM2.5.
#[derive(Debug, Clone, Copy)]
pub struct GradeScale {
    pub bands: [GradeBand; 4],
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or decoding AirKorea data.
#[derive(Debug, PartialEq)]
pub enum AirKoreaError {
    /// Non-2xx HTTP response from the AirKorea API.
    HttpError(u16),
    /// The request itself failed (connect error, timeout).
    RequestError(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The envelope decoded but carried a non-success result code.
    ServiceError { code: String, message: String },
    /// The station was found but the response contained no items.
    NoData(String),
}

impl std::fmt::Display for AirKoreaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AirKoreaError::HttpError(code) => write!(f, "HTTP error: {}", code),
            AirKoreaError::RequestError(msg) => write!(f, "Request error: {}", msg),
            AirKoreaError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AirKoreaError::ServiceError { code, message } => {
                write!(f, "AirKorea service error {}: {}", code, message)
            }
            AirKoreaError::NoData(station) => {
                write!(f, "No data available for station: {}", station)
            }
        }
    }
}

impl std::error::Error for AirKoreaError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
