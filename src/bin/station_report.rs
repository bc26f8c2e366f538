/// One-shot station report.
///
/// Fetches recent measurements for a station, runs the analysis pipeline,
/// and prints the report. This is a development surface for exercising the
/// crate end to end; the real UI layer renders the same report as a chart
/// and banner.
///
/// Usage:
///   station_report [STATION] [pm10|pm25]
///
/// The AirKorea service key comes from ./airmon.toml when present, else
/// from the AIRKOREA_SERVICE_KEY environment variable (a .env file works).

use std::process::ExitCode;

use airmon_service::analysis::report::analyze_station;
use airmon_service::config;
use airmon_service::ingest::airkorea;
use airmon_service::logging::{self, DataSource, LogLevel};
use airmon_service::model::{ForecastResult, PmKind};
use airmon_service::stations;

const CONFIG_PATH: &str = "airmon.toml";

fn main() -> ExitCode {
    logging::init_logger(LogLevel::Info, None, false);

    let mut args = std::env::args().skip(1);
    let station = args
        .next()
        .unwrap_or_else(|| stations::DEFAULT_STATION.to_string());
    let kind = match args.next().as_deref() {
        None | Some("pm10") => PmKind::Pm10,
        Some("pm25") => PmKind::Pm25,
        Some(other) => {
            eprintln!("Unknown pollutant '{}': expected pm10 or pm25", other);
            return ExitCode::FAILURE;
        }
    };

    let config = match config::load_config(CONFIG_PATH).or_else(|_| config::from_env()) {
        Ok(config) => config,
        Err(e) => {
            logging::error(DataSource::System, None, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if !stations::is_registered_station(&station) {
        logging::warn(
            DataSource::System,
            Some(&station),
            "Station is not in the bundled registry; querying it anyway",
        );
    }

    let client = match airkorea::make_client(&config) {
        Ok(client) => client,
        Err(e) => {
            logging::error(DataSource::System, None, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let report = match analyze_station(
        &client,
        &config,
        &station,
        kind,
        config.default_rows,
        config.default_horizon,
    ) {
        Ok(report) => report,
        Err(e) => {
            logging::log_airkorea_failure(&station, "Station analysis", &e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "\n{} ({}): {} of {} rows usable",
        report.station,
        report.kind.label(),
        report.valid_rows,
        report.requested_rows
    );

    if let Some(last) = report.series.last() {
        println!(
            "Latest measurement: {:.1} µg/m³ at {}",
            last.value,
            last.datetime.format("%Y-%m-%d %H:%M")
        );
    }

    match &report.forecast {
        ForecastResult::Forecast(points) => {
            println!("Forecast:");
            for point in points {
                println!(
                    "  {}  {:.1} µg/m³",
                    point.datetime.format("%H:%M"),
                    point.value
                );
            }
        }
        ForecastResult::InsufficientData => {
            println!("Forecast: insufficient data (fewer than 3 valid measurements)");
        }
    }

    println!("Advisory: {}", report.advisory.message);
    ExitCode::SUCCESS
}
