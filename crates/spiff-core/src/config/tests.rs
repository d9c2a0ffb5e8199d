//! Tests for configuration module.

use super::*;

fn from_toml(text: &str) -> Settings {
    Config::builder()
        .set_default("calendar.period", "month")
        .expect("default period")
        .set_default("logging.level", "info")
        .expect("default level")
        .add_source(config::File::from_str(text, config::FileFormat::Toml))
        .build()
        .expect("build config")
        .try_deserialize::<Settings>()
        .expect("deserialize settings")
}

#[test_log::test]
fn test_defaults_apply() {
    tracing::debug!("Testing configuration defaults");

    let settings = from_toml("");
    assert_eq!(settings.calendar.period, PeriodMode::Month);
    assert_eq!(settings.calendar.days, None);
    assert!(settings.calendar.start.is_none());
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_days_window() {
    let settings = from_toml(
        r#"
        [calendar]
        period = "days"
        days = 14
        start = "2024-03-06"
        "#,
    );

    assert_eq!(settings.calendar.period, PeriodMode::Days);
    assert_eq!(settings.calendar.days, Some(14));
    assert_eq!(
        settings.calendar.start,
        NaiveDate::from_ymd_opt(2024, 3, 6)
    );
}

#[test]
fn test_logging_override() {
    let settings = from_toml(
        r#"
        [logging]
        level = "spiff=trace"
        "#,
    );

    assert_eq!(settings.logging.level, "spiff=trace");
}

#[test]
fn test_unknown_period_rejected() {
    let result = Config::builder()
        .set_default("logging.level", "info")
        .expect("default level")
        .add_source(config::File::from_str(
            "[calendar]\nperiod = \"fortnight\"",
            config::FileFormat::Toml,
        ))
        .build()
        .expect("build config")
        .try_deserialize::<Settings>();

    assert!(result.is_err());
}

#[test]
fn test_environment_sets_calendar_keys() {
    let vars: config::Map<String, String> = [
        ("CALENDAR_PERIOD", "days"),
        ("CALENDAR_DAYS", "7"),
        ("CALENDAR_EVENTS", "events.json"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_owned()))
    .collect();

    let settings = Config::builder()
        .set_default("calendar.period", "month")
        .expect("default period")
        .set_default("logging.level", "info")
        .expect("default level")
        .add_source(environment().source(Some(vars)))
        .build()
        .expect("build config")
        .try_deserialize::<Settings>()
        .expect("deserialize settings");

    assert_eq!(settings.calendar.period, PeriodMode::Days);
    assert_eq!(settings.calendar.days, Some(7));
    assert_eq!(settings.calendar.events.as_deref(), Some("events.json"));
}

#[test]
fn test_settings_debug() {
    let settings = from_toml("");
    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("calendar"));
    assert!(debug_str.contains("logging"));
}
