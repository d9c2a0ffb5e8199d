use anyhow::Result;
use chrono::NaiveDate;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// Which kind of visible period the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    Month,
    Days,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub period: PeriodMode,
    /// Window length, required when `period` is `days`.
    pub days: Option<u32>,
    /// Reference date of the first view; defaults to today.
    pub start: Option<NaiveDate>,
    /// Caller-supplied last visible date; ignored when before the start.
    pub last: Option<NaiveDate>,
    /// JSON file of events served by the in-memory event source
    /// (`CALENDAR_EVENTS` in the environment).
    pub events: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("calendar.period", "month")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(environment())
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// Environment source; `_` separates sections, so keys hold no underscores.
fn environment() -> config::Environment {
    config::Environment::default()
        .convert_case(config::Case::Snake)
        .separator("_")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(period = ?settings.calendar.period, "Settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests;
