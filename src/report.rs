// Report generator: renders one weather observation as a static HTML page
// and writes it next to the other reports as `{city}_meteo.html`.

use crate::api::WeatherObservation;
use crate::error::ReportError;
use html_escape::encode_text;
use std::path::{Path, PathBuf};

/// Ordered keyword → image table with the `alt` label of each image. The
/// first keyword contained in the lower-cased description wins.
pub const ICONS: &[(&str, &str, &str)] = &[
    ("soleil", "images/01.png", "Soleil"),
    ("ciel dégagé", "images/02.png", "Ciel dégagé"),
    ("couvert", "images/03.png", "Nuageux"),
    ("pluie", "images/04.png", "Pluie"),
    ("orage", "images/05.png", "Orage"),
    ("neige", "images/06.png", "Neige"),
    ("brouillard", "images/07.png", "Brouillard"),
    ("vent", "images/08.png", "Vent"),
];

pub const ICON_UNAVAILABLE: &str = "<p>Icône indisponible</p>";

fn matching_icon(description: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let description = description.to_lowercase();
    ICONS
        .iter()
        .find(|(keyword, _, _)| description.contains(keyword))
}

/// Image path for a description, if any keyword matches.
pub fn icon_for(description: &str) -> Option<&'static str> {
    matching_icon(description).map(|(_, path, _)| *path)
}

fn icon_markup(description: &str) -> String {
    match matching_icon(description) {
        Some((_, path, label)) => format!(
            "<img src='{}' alt='{}' width='80' height='80'>",
            path, label
        ),
        None => ICON_UNAVAILABLE.to_string(),
    }
}

/// `Paris` → `Paris_meteo.html`. Path separators are replaced so the file
/// always lands in the report directory.
pub fn report_file_name(city: &str) -> String {
    let safe: String = city
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_meteo.html", safe)
}

pub fn render_html(obs: &WeatherObservation) -> String {
    let city = encode_text(&obs.city);
    let description = encode_text(&obs.description);
    let temperature = encode_text(&obs.temperature);
    let icon = icon_markup(&obs.description);

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="UTF-8">
<title>Météo à {city}</title>
<style>
body {{
    font-family: Arial, sans-serif;
    text-align: center;
    background: linear-gradient(120deg, #6EC6FF, #2196F3);
    color: white;
    margin: 20px;
}}
h1 {{
    margin-top: 20px;
    font-size: 28px;
}}
.weather-container {{
    display: inline-block;
    background: rgba(255, 255, 255, 0.2);
    padding: 20px;
    border-radius: 15px;
    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
    width: 300px;
}}
.icon img {{
    width: 80px;
    height: 80px;
}}
.temperature {{
    font-size: 24px;
    font-weight: bold;
}}
.description {{
    font-size: 18px;
    margin-top: 10px;
}}
</style>
</head>
<body>
<h1>Météo à {city}</h1>
<div class="weather-container">
<div class="icon">{icon}</div>
<div class="temperature">{temperature}°C</div>
<div class="description">{description}</div>
</div>
</body>
</html>
"#
    )
}

/// Render `obs` and write it into `dir`, replacing any previous report for
/// the same city. Returns the path that was written.
pub fn write_report(dir: &Path, obs: &WeatherObservation) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(&obs.city));
    std::fs::write(&path, render_html(obs)).map_err(|source| ReportError {
        path: path.clone(),
        source,
    })?;
    log::debug!("Wrote weather report {}", path.display());
    Ok(path)
}
