/// Upstream data ingestion.
///
/// Submodules:
/// - `airkorea` — client for the data.go.kr real-time measurement API.

pub mod airkorea;
