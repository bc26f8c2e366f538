/// The composed analysis pipeline.
///
/// One user-initiated request runs exactly one pass through
/// fetch → build series → forecast → classify, and everything the
/// presentation layer needs comes back in a single report: the historical
/// series for the chart line, the forecast outcome for the projection, and
/// the advisory for the banner. Nothing is retained between requests.

use serde::Serialize;

use crate::advisory::{self, Advisory};
use crate::analysis::series::build_series;
use crate::analysis::trend::forecast;
use crate::config::Config;
use crate::ingest::airkorea::{self, DnstyItem};
use crate::logging;
use crate::model::{AirKoreaError, ForecastResult, Measurement, PmKind};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// The pure analysis outcome for one batch of raw rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationAnalysis {
    /// Cleaned measurements, oldest first.
    pub series: Vec<Measurement>,
    /// Projection past the series end, or `InsufficientData`.
    pub forecast: ForecastResult,
    /// Advisory for the furthest-future forecast point; the no-data
    /// advisory when no forecast was possible.
    pub advisory: Advisory,
}

/// A full per-station report, including fetch context.
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    pub station: String,
    pub kind: PmKind,
    /// Rows actually requested upstream (after cap clamping).
    pub requested_rows: u32,
    /// Rows that survived cleaning into the series.
    pub valid_rows: usize,
    pub series: Vec<Measurement>,
    pub forecast: ForecastResult,
    pub advisory: Advisory,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Runs the pure pipeline over already-fetched rows.
///
/// The advisory is computed from the **final** forecast step (the
/// furthest-future value), not the first step and not the last actual
/// measurement. A forecast that could not be produced classifies as
/// "no data".
pub fn analyze_records(items: &[DnstyItem], kind: PmKind, horizon: usize) -> StationAnalysis {
    let series = build_series(items, kind);
    let forecast = forecast(&series, horizon);
    let advisory = advisory::classify(forecast.final_point().map(|p| p.value), kind);

    StationAnalysis {
        series,
        forecast,
        advisory,
    }
}

/// Fetches recent rows for a station and analyzes them.
///
/// Upstream failures surface as `AirKoreaError`; data-quality problems do
/// not. A batch where nothing parses still yields a report, with an empty
/// series and the no-data advisory.
pub fn analyze_station(
    client: &reqwest::blocking::Client,
    config: &Config,
    station: &str,
    kind: PmKind,
    rows: u32,
    horizon: usize,
) -> Result<StationReport, AirKoreaError> {
    let requested = airkorea::clamp_row_count(station, rows);
    let items = airkorea::fetch_station_measurements(client, config, station, requested)?;

    let analysis = analyze_records(&items, kind, horizon);
    logging::log_parse_summary(station, items.len(), analysis.series.len());

    Ok(StationReport {
        station: station.to_string(),
        kind,
        requested_rows: requested,
        valid_rows: analysis.series.len(),
        series: analysis.series,
        forecast: analysis.forecast,
        advisory: analysis.advisory,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::NO_DATA_MESSAGE;
    use crate::model::Grade;

    fn item(data_time: &str, pm10: &str) -> DnstyItem {
        DnstyItem {
            data_time: Some(data_time.to_string()),
            pm10_value: Some(pm10.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_advisory_uses_the_final_forecast_step() {
        // Rising by 3/hour from 27: projections are 30, 33, 36. The first
        // step still grades Good (<= 30); the final step is Moderate. The
        // advisory must reflect the final step.
        let items = vec![
            item("2024-01-01 03:00", "27"),
            item("2024-01-01 02:00", "24"),
            item("2024-01-01 01:00", "21"),
        ];
        let analysis = analyze_records(&items, PmKind::Pm10, 3);

        let ForecastResult::Forecast(points) = &analysis.forecast else {
            panic!("expected a forecast");
        };
        assert!((points[0].value - 30.0).abs() < 1e-9);
        assert!((points[2].value - 36.0).abs() < 1e-9);
        assert_eq!(analysis.advisory.grade, Some(Grade::Moderate));
    }

    #[test]
    fn test_insufficient_data_classifies_as_no_data() {
        let items = vec![
            item("2024-01-01 02:00", "40"),
            item("2024-01-01 01:00", "44"),
        ];
        let analysis = analyze_records(&items, PmKind::Pm10, 3);
        assert_eq!(analysis.series.len(), 2);
        assert_eq!(analysis.forecast, ForecastResult::InsufficientData);
        assert_eq!(analysis.advisory.grade, None);
        assert_eq!(analysis.advisory.message, NO_DATA_MESSAGE);
    }

    #[test]
    fn test_empty_batch_yields_empty_series_and_no_data_advisory() {
        let analysis = analyze_records(&[], PmKind::Pm25, 3);
        assert!(analysis.series.is_empty());
        assert_eq!(analysis.forecast, ForecastResult::InsufficientData);
        assert_eq!(analysis.advisory.message, NO_DATA_MESSAGE);
    }

    #[test]
    fn test_malformed_rows_reduce_valid_count_but_not_the_outcome_shape() {
        let items = vec![
            item("2024-01-01 04:00", "12"),
            item("2024-01-01 03:00", "-"),
            item("2024-01-01 02:00", "14"),
            item("2024-01-01 01:00", "16"),
        ];
        let analysis = analyze_records(&items, PmKind::Pm10, 1);
        assert_eq!(analysis.series.len(), 3);
        assert!(matches!(analysis.forecast, ForecastResult::Forecast(_)));
        assert!(analysis.advisory.grade.is_some());
    }
}
