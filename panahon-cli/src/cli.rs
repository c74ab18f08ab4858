use anyhow::Context;
use clap::{Parser, Subcommand};
use panahon_core::{Config, FetchOutcome, QuerySession, WeatherProvider, provider_from_config, view};
use tracing::warn;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "panahon", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "Iligan City".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show_once(city).await,
            None => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show_once(city: String) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut session = QuerySession::new(city);
    run_query(&mut session, provider.as_ref()).await;

    Ok(())
}

/// The interactive session: fetch the default city right away, then keep
/// prompting for new queries until the user submits an empty one (or ESCs).
async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut session = QuerySession::new(config.default_city());
    run_query(&mut session, provider.as_ref()).await;

    loop {
        let submitted = inquire::Text::new("Enter city name:")
            .with_initial_value(session.query())
            .prompt_skippable()
            .context("Failed to read city name")?;

        let Some(city) = submitted else { break };
        if city.trim().is_empty() {
            break;
        }

        session.set_query(city);
        run_query(&mut session, provider.as_ref()).await;
    }

    Ok(())
}

/// One fetch of the session's current query, rendered to stdout.
///
/// A failure prints the fixed message and falls back to whatever the result
/// area showed before the attempt.
async fn run_query(session: &mut QuerySession, provider: &dyn WeatherProvider) {
    let ticket = session.begin_fetch();
    println!("{}", view::render(&session.view()));

    let result = provider.current_weather(session.query()).await;
    if let FetchOutcome::Failed(err) = session.complete_fetch(ticket, result) {
        warn!(%err, "weather fetch failed");
        println!("{}", view::FETCH_FAILED_MESSAGE);
    }

    println!("{}", view::render(&session.view()));
}
