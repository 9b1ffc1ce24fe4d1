use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use shorecast_core::{ApiClient, Config, Dashboard, DashboardState, HistoryEntry, display};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "shorecast", version, about = "Beach weather dashboard")]
pub struct Cli {
    /// Override the configured dashboard server base URL.
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the dashboard server address.
    Configure,

    /// One-shot lookup for a city name or ZIP code.
    Show {
        /// City name or ZIP code.
        location: String,
    },

    /// Interactive dashboard with lookup history.
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Command::Configure => configure(),
            Command::Show { location } => {
                let dashboard = self.dashboard()?;
                dashboard.submit(location).await;
                settle().await;
                dashboard.with_state(render);
                Ok(())
            }
            Command::Dashboard => {
                let dashboard = self.dashboard()?;
                dashboard.refresh_history().await;
                dashboard.with_state(render);
                run_dashboard(dashboard).await
            }
        }
    }

    fn dashboard(&self) -> Result<Dashboard> {
        let base_url = match &self.server {
            Some(url) => url.clone(),
            None => Config::load()?.base_url,
        };
        let api = ApiClient::new(base_url)?;
        Ok(Dashboard::new(api))
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let base_url = Text::new("Dashboard server URL:")
        .with_initial_value(&config.base_url)
        .prompt()?;
    config.base_url = base_url.trim().to_string();
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

const NEW_LOOKUP: &str = "New lookup";
const REPLAY: &str = "Replay from history";
const QUIT: &str = "Quit";

async fn run_dashboard(dashboard: Dashboard) -> Result<()> {
    loop {
        let choice = Select::new("Shorecast", vec![NEW_LOOKUP, REPLAY, QUIT]).prompt()?;
        match choice {
            NEW_LOOKUP => {
                let input = Text::new("City name or ZIP code:").prompt()?;
                dashboard.submit(&input).await;
            }
            REPLAY => {
                let entries = dashboard.with_state(|s| s.history().to_vec());
                if entries.is_empty() {
                    println!("No search history yet");
                    continue;
                }
                let lines: Vec<String> = entries.iter().map(history_line).collect();
                let picked = Select::new("Replay which lookup?", lines.clone()).prompt()?;
                if let Some(idx) = lines.iter().position(|l| *l == picked) {
                    dashboard.replay(&entries[idx]).await;
                }
            }
            _ => return Ok(()),
        }
        settle().await;
        dashboard.with_state(render);
    }
}

// The history reload and beach fetch run detached from submit; wait briefly
// so a one-shot render can include them.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(500)).await;
}

fn render(state: &DashboardState) {
    if let Some(message) = state.error() {
        println!("! {message}");
    }

    if state.weather_visible() {
        if let Some(w) = state.weather() {
            println!("{}", w.location);
            println!(
                "  {}  {}",
                display::fahrenheit(w.temperature_f),
                w.description.as_deref().unwrap_or("")
            );
            println!("  Humidity: {}", display::humidity(w.humidity_pct));
        }
    }

    if state.beach_visible() {
        if let Some(b) = state.beach() {
            println!("Beach conditions");
            println!("  Next high tide: {}", display::tide_time(b.next_high_tide));
            println!("  Next low tide:  {}", display::tide_time(b.next_low_tide));
            println!(
                "  Water: {}  Waves: {}  Swell: {}",
                display::water_temp(b.water_temp_c),
                display::wave_height(b.wave_height_ft),
                display::swell_period(b.swell_period_s)
            );
        }
    }

    if state.no_history() {
        println!("No search history yet");
    } else if !state.history().is_empty() {
        println!("Recent lookups");
        for entry in state.history() {
            println!("  {}", history_line(entry));
        }
    }
}

fn history_line(entry: &HistoryEntry) -> String {
    let location = entry.location.as_deref().unwrap_or("Unknown Location");
    let time = display::history_time(entry.timestamp);
    let temp = display::fahrenheit(entry.temperature);
    let description = entry.description.as_deref().unwrap_or("");
    match entry.icon.as_deref() {
        Some(icon) => format!("{location}  {time}  {temp}  {description}  [{icon}]"),
        None => format!("{location}  {time}  {temp}  {description}"),
    }
}
