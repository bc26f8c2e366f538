/// AirKorea Data API Client
///
/// Retrieves per-station real-time particulate measurements from the Korean
/// public-data portal (data.go.kr), service `ArpltnInforInqireSvc`, operation
/// `getMsrstnAcctoRltmMesureDnsty`.
///
/// API documentation: https://www.data.go.kr/data/15073861/openapi.do
///
/// The portal returns rows newest-first and caps a single request at 1000
/// rows; requests above the cap are clamped here and a warning is logged.

use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::logging;
use crate::model::{AirKoreaError, PmKind};

const AIRKOREA_BASE_URL: &str = "https://apis.data.go.kr/B552584/ArpltnInforInqireSvc";

/// Upstream hard limit on rows per request.
pub const MAX_ROWS_PER_REQUEST: u32 = 1000;

/// Header result code indicating a successful response.
const RESULT_CODE_OK: &str = "00";

// ============================================================================
// AirKorea API Response Structures
// ============================================================================

/// Top-level envelope: `response` → `header` + `body` → `items`.
#[derive(Debug, Deserialize)]
pub struct DnstyResponse {
    pub response: DnstyEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct DnstyEnvelope {
    pub header: Option<DnstyHeader>,
    pub body: Option<DnstyBody>,
}

#[derive(Debug, Deserialize)]
pub struct DnstyHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg")]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct DnstyBody {
    #[serde(rename = "totalCount")]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub items: Vec<DnstyItem>,
}

/// One measurement row as delivered by the portal.
///
/// Every field is an optional string: concentrations arrive as numeric
/// strings under normal operation, but a field may be missing entirely, be
/// empty, or hold the `-` placeholder while the instrument is down. Nothing
/// here is parsed; cleaning happens in the series builder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnstyItem {
    #[serde(rename = "dataTime")]
    pub data_time: Option<String>,
    #[serde(rename = "so2Value")]
    pub so2_value: Option<String>,
    #[serde(rename = "coValue")]
    pub co_value: Option<String>,
    #[serde(rename = "o3Value")]
    pub o3_value: Option<String>,
    #[serde(rename = "no2Value")]
    pub no2_value: Option<String>,
    #[serde(rename = "pm10Value")]
    pub pm10_value: Option<String>,
    #[serde(rename = "pm25Value")]
    pub pm25_value: Option<String>,
    #[serde(rename = "khaiValue")]
    pub khai_value: Option<String>,
}

impl DnstyItem {
    /// The raw concentration string for the given pollutant kind.
    pub fn value_for(&self, kind: PmKind) -> Option<&str> {
        match kind {
            PmKind::Pm10 => self.pm10_value.as_deref(),
            PmKind::Pm25 => self.pm25_value.as_deref(),
        }
    }
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds a blocking HTTP client with the configured request timeout.
pub fn make_client(config: &Config) -> Result<reqwest::blocking::Client, AirKoreaError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| AirKoreaError::RequestError(e.to_string()))
}

/// Query parameters for a `getMsrstnAcctoRltmMesureDnsty` request.
///
/// Returned as pairs rather than a formatted URL so reqwest handles the
/// percent-encoding of the Korean station name.
pub fn build_dnsty_params(
    service_key: &str,
    station_name: &str,
    num_rows: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("serviceKey", service_key.to_string()),
        ("returnType", "json".to_string()),
        ("numOfRows", num_rows.to_string()),
        ("pageNo", "1".to_string()),
        ("stationName", station_name.to_string()),
        ("dataTerm", "DAILY".to_string()),
        ("ver", "1.3".to_string()),
    ]
}

/// Clamps a requested row count to the upstream cap, logging when it bites.
pub fn clamp_row_count(station: &str, requested: u32) -> u32 {
    if requested > MAX_ROWS_PER_REQUEST {
        logging::warn(
            logging::DataSource::AirKorea,
            Some(station),
            &format!(
                "Requested {} rows; upstream caps at {} per request, clamping",
                requested, MAX_ROWS_PER_REQUEST
            ),
        );
        MAX_ROWS_PER_REQUEST
    } else {
        requested
    }
}

/// Fetch recent measurements for a station, newest first.
///
/// # Parameters
/// - `client`: HTTP client (see `make_client`)
/// - `config`: service configuration (for the service key)
/// - `station_name`: AirKorea station name, passed verbatim (e.g. "강남구")
/// - `num_rows`: rows to request; clamped to `MAX_ROWS_PER_REQUEST`
///
/// # Returns
/// The raw item rows exactly as the portal delivered them. Rows with
/// missing or placeholder values are returned as-is; the series builder
/// decides what survives.
pub fn fetch_station_measurements(
    client: &reqwest::blocking::Client,
    config: &Config,
    station_name: &str,
    num_rows: u32,
) -> Result<Vec<DnstyItem>, AirKoreaError> {
    let rows = clamp_row_count(station_name, num_rows);
    let url = format!("{}/getMsrstnAcctoRltmMesureDnsty", AIRKOREA_BASE_URL);
    let params = build_dnsty_params(&config.service_key, station_name, rows);

    let response = client
        .get(&url)
        .query(&params)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| AirKoreaError::RequestError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AirKoreaError::HttpError(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| AirKoreaError::RequestError(e.to_string()))?;

    parse_response(&body, station_name)
}

/// Parse a raw API response body into its item rows.
///
/// Checks the envelope's result code when a header is present (the portal
/// reports quota and key problems inside a 200 response) and treats an
/// empty item list as `NoData` for the station.
pub fn parse_response(json: &str, station_name: &str) -> Result<Vec<DnstyItem>, AirKoreaError> {
    let decoded: DnstyResponse =
        serde_json::from_str(json).map_err(|e| AirKoreaError::ParseError(e.to_string()))?;

    if let Some(header) = decoded.response.header {
        if header.result_code != RESULT_CODE_OK {
            return Err(AirKoreaError::ServiceError {
                code: header.result_code,
                message: header.result_msg,
            });
        }
    }

    let items = decoded
        .response
        .body
        .map(|b| b.items)
        .unwrap_or_default();

    if items.is_empty() {
        return Err(AirKoreaError::NoData(station_name.to_string()));
    }

    Ok(items)
}

// ============================================================================
// Tests
// ============================================================================
