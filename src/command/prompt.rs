//! Interactive prompts
//!
//! Reads the menu choice and, for custom scraping, the URL and selector.
//! Input and output are generic so the prompts can be driven from tests.

use crate::command::{Command, QuotesParams, SelectParams};
use crate::config::Config;
use crate::ScrapeError;
use std::io::{BufRead, Write};

/// Entries of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: crawl the quotes demo site and save CSV
    Quotes,

    /// `2`: custom URL and selector
    Select,
}

impl MenuChoice {
    /// Maps a raw input line to a menu entry
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Quotes),
            "2" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Shows the menu and reads a command
///
/// # Returns
///
/// * `Ok(Some(Command))` - A validated command
/// * `Ok(None)` - The choice was invalid; "Invalid choice" was printed
/// * `Err(ScrapeError)` - I/O failure, or an invalid URL or selector
pub fn prompt_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<Option<Command>, ScrapeError> {
    writeln!(output, "=== Simple Web Scraper ===")?;
    writeln!(output, "1. Scrape the quotes demo site")?;
    writeln!(output, "2. Custom scrape")?;

    let choice = ask(input, output, "Choose (1/2): ")?;
    let command = match MenuChoice::parse(&choice) {
        Some(MenuChoice::Quotes) => Command::Quotes(QuotesParams::from_config(&config.quotes)?),
        Some(MenuChoice::Select) => {
            let url = ask(input, output, "Enter URL: ")?;
            let selector = ask(
                input,
                output,
                "Enter CSS selector (e.g. h1, .title, #content): ",
            )?;
            Command::Select(SelectParams::new(&url, &selector)?)
        }
        None => {
            tracing::debug!("Rejected menu choice {:?}", choice);
            writeln!(output, "Invalid choice")?;
            return Ok(None);
        }
    };

    Ok(Some(command))
}

/// Prints a prompt and reads one trimmed line; end of input reads as empty
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> std::io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
