// Weather reporter: one lookup followed by one report file.

use crate::api::{ApiClient, WeatherObservation};
use crate::error::WeatherError;
use crate::report::write_report;
use std::path::{Path, PathBuf};

/// Outcome of a successful weather action.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub observation: WeatherObservation,
    pub path: PathBuf,
}

/// Fetch the current weather for `city` and write its HTML report into
/// `report_dir`. Nothing is written when the lookup fails.
pub fn report_weather(
    api: &ApiClient,
    city: &str,
    report_dir: &Path,
) -> Result<WeatherReport, WeatherError> {
    let observation = api.current_weather(city)?;
    let path = write_report(report_dir, &observation)?;
    Ok(WeatherReport { observation, path })
}
