/// Series construction from raw measurement rows.
///
/// The portal delivers rows newest-first with no guarantee that any given
/// field is usable: concentrations may be missing, empty, or the `-`
/// placeholder, and `dataTime` occasionally arrives in a compact or
/// date-only form. This module turns that into a chronological series of
/// clean measurements, silently dropping whatever does not parse.
///
/// Dropping is deliberate tolerance, not error handling: a malformed row
/// contributes nothing and is not counted. Callers that want visibility
/// compare input and output lengths (see `logging::log_parse_summary`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::ingest::airkorea::DnstyItem;
use crate::model::{Measurement, PmKind};

/// Accepted `dataTime` formats, in priority order. The first that parses
/// wins. The date-only form is taken as midnight.
const FORMAT_FULL: &str = "%Y-%m-%d %H:%M";
const FORMAT_DATE_ONLY: &str = "%Y-%m-%d";
const FORMAT_COMPACT: &str = "%Y%m%d%H%M";

/// Builds a chronological measurement series from raw rows.
///
/// A row contributes a `Measurement` only if BOTH its concentration field
/// (selected by `kind`) and its `dataTime` parse; either failing means the
/// row is skipped. Input order is trusted to be newest-first as delivered
/// by the portal, so the accepted rows are reversed (not sorted) into
/// oldest-first order.
///
/// Zero surviving rows yield an empty series; that is "insufficient data"
/// to downstream consumers, not an error.
pub fn build_series(items: &[DnstyItem], kind: PmKind) -> Vec<Measurement> {
    let mut accepted: Vec<Measurement> = Vec::with_capacity(items.len());

    for item in items {
        let value = match item.value_for(kind).and_then(parse_value) {
            Some(v) => v,
            None => continue,
        };
        let datetime = match item.data_time.as_deref().and_then(parse_data_time) {
            Some(dt) => dt,
            None => continue,
        };
        accepted.push(Measurement { datetime, value });
    }

    // Newest-first input, oldest-first output.
    accepted.reverse();
    accepted
}

/// Parses a raw concentration string into a clean value.
///
/// Rejects the placeholder and empty strings (parse failures), and anything
/// that parses but violates the measurement invariant: concentrations are
/// finite and non-negative.
fn parse_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parses a `dataTime` string against the accepted formats in priority order.
pub fn parse_data_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, FORMAT_FULL) {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT_DATE_ONLY) {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, FORMAT_COMPACT) {
        return Some(dt);
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
