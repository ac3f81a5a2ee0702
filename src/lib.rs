// Library root
// -----------
// This crate exposes the pieces of the Spellcaster menu so the binary stays
// a thin entrypoint and the actions can be driven from tests.
//
// Module responsibilities:
// - `config`: settings read once from the environment (and `.env`).
// - `api`: blocking HTTP calls to the completion and weather endpoints.
// - `prompts`: French instruction templates for correction and translation.
// - `weather`: one weather lookup followed by one report.
// - `report`: HTML rendering and the `{city}_meteo.html` file.
// - `ui`: the text menu and the `Console` abstraction it runs on.
// - `error`: error types shared by the modules above.
pub mod api;
pub mod config;
pub mod error;
pub mod prompts;
pub mod report;
pub mod ui;
pub mod weather;
