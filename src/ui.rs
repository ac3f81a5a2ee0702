// UI layer: the text menu and the three actions behind it. All console
// traffic goes through the `Console` trait so the same loop runs on an
// interactive terminal (dialoguer + indicatif) or on plain piped lines.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::WeatherError;
use crate::prompts::{correction_prompt, translation_prompt, TranslationVariant};
use crate::weather::report_weather;
use anyhow::Result;
use dialoguer::Input;
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

pub const MENU: &[&str] = &[
    "=== SPELLCASTER CLI ===",
    "Choisissez une option :",
    "1 : Vérificateur d'orthographe",
    "2 : Traduction US ou UK",
    "3 : Météo & Génération HTML",
    "4 : Quitter",
];
pub const UNRECOGNIZED: &str = "Option non reconnue.";
pub const CITY_NOT_FOUND: &str = "Ville introuvable ou erreur API.";
pub const FAREWELL: &str = "Merci d'avoir utilisé l'application. Au revoir !";

/// The four entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Correct,
    Translate,
    Weather,
    Quit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Correct),
            "2" => Some(MenuChoice::Translate),
            "3" => Some(MenuChoice::Weather),
            "4" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Where the menu reads from and writes to.
pub trait Console {
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Prompt for one line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Progress indicator shown while a request is running.
    fn spinner(&self, _message: &str) -> ProgressBar {
        ProgressBar::hidden()
    }
}

/// Interactive terminal: dialoguer prompts and an indicatif spinner.
#[derive(Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(dialoguer_prompt(prompt))
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(answer))
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}

/// dialoguer's default theme already appends `: ` to the prompt.
fn dialoguer_prompt(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':').trim_end()
}

/// Plain line-oriented console over any reader/writer pair. Used for piped
/// stdin and in tests.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LineConsole { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()?;
        // Bytes that are not UTF-8 (e.g. Latin-1 text) are replaced, not fatal.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Main menu loop. Runs until "4" is chosen or the input runs out; only a
/// console I/O failure ends it early.
pub fn main_menu<C: Console>(console: &mut C, api: &ApiClient, config: &Config) -> Result<()> {
    loop {
        for line in MENU {
            console.say(line)?;
        }
        let Some(choice) = console.ask("Votre choix :")? else {
            log::debug!("Input closed, leaving the menu");
            break;
        };

        match MenuChoice::from_input(&choice) {
            Some(MenuChoice::Correct) => handle_correction(console, api)?,
            Some(MenuChoice::Translate) => handle_translation(console, api)?,
            Some(MenuChoice::Weather) => handle_weather(console, api, &config.report_dir)?,
            Some(MenuChoice::Quit) => break,
            None => console.say(UNRECOGNIZED)?,
        }
        console.say("")?;
    }

    console.say(FAREWELL)?;
    Ok(())
}

fn ask_or_empty<C: Console>(console: &mut C, prompt: &str) -> io::Result<String> {
    Ok(console.ask(prompt)?.unwrap_or_default())
}

/// Run one completion behind a spinner.
fn complete_with_spinner<C: Console>(console: &C, api: &ApiClient, prompt: &str) -> String {
    let spinner = console.spinner("Requête en cours...");
    let result = api.complete(prompt);
    spinner.finish_and_clear();
    result
}

fn handle_correction<C: Console>(console: &mut C, api: &ApiClient) -> Result<()> {
    let text = ask_or_empty(console, "Entrez le texte en français :")?;
    let corrected = complete_with_spinner(console, api, &correction_prompt(&text));
    console.say(&format!("\nTexte corrigé : {}", corrected))?;
    Ok(())
}

fn handle_translation<C: Console>(console: &mut C, api: &ApiClient) -> Result<()> {
    let text = ask_or_empty(console, "Entrez le texte en français à traduire :")?;
    let option = ask_or_empty(
        console,
        "Choisissez la traduction : (1) Anglais US, (2) Anglais UK",
    )?;
    let variant = TranslationVariant::from_input(&option);
    let translated = complete_with_spinner(console, api, &translation_prompt(&text, variant));
    console.say(&format!("\nTexte traduit : {}", translated))?;
    Ok(())
}

fn handle_weather<C: Console>(console: &mut C, api: &ApiClient, report_dir: &Path) -> Result<()> {
    let city = ask_or_empty(console, "Entrez une Ville :")?;

    let spinner = console.spinner("Récupération de la météo...");
    let outcome = report_weather(api, &city, report_dir);
    spinner.finish_and_clear();

    match outcome {
        Ok(report) => {
            console.say(&format!("Météo : {}", report.observation.description))?;
            console.say(&format!("Température : {}°C", report.observation.temperature))?;
            console.say(&format!("Fichier HTML généré : {}", report.path.display()))?;
        }
        Err(WeatherError::CityNotFound) => console.say(CITY_NOT_FOUND)?,
        Err(e) => {
            log::warn!("Weather action for {:?} failed: {}", city, e);
            console.say(&format!("Erreur : {}", e))?;
        }
    }
    Ok(())
}
