/// Analysis pipeline for the particulate service.
///
/// Submodules:
/// - `series` — cleans raw rows into a chronological measurement series.
/// - `trend` — OLS trend fit, hourly projection, moving-average smoother.
/// - `report` — the composed fetch → clean → forecast → classify pipeline.

pub mod report;
pub mod series;
pub mod trend;
