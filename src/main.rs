// Entrypoint for the CLI application.
// - Keeps `main` small: load configuration, build the API client and hand
//   both to the menu loop.
// - An interactive terminal gets dialoguer prompts; piped input is read
//   line by line.

use anyhow::Context;
use spellcaster_cli::{
    api::ApiClient,
    config::Config,
    ui::{main_menu, LineConsole, TerminalConsole},
};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    let api = ApiClient::new(&config).context("Failed to build HTTP client")?;

    if std::io::stdin().is_terminal() {
        main_menu(&mut TerminalConsole, &api, &config)?;
    } else {
        let stdin = std::io::stdin();
        let mut console = LineConsole::new(stdin.lock(), std::io::stdout());
        main_menu(&mut console, &api, &config)?;
    }
    Ok(())
}
