use anyhow::Context;
use spiff_app::render::{render_footnotes, render_grid};
use spiff_calendar::grid::CalendarView;
use spiff_calendar::source::MemoryEventSource;
use spiff_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let today = chrono::Local::now().date_naive();
    let mut view = CalendarView::from_config(&config.calendar, today)?;

    let source = match &config.calendar.events {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read events file {path}"))?;
            MemoryEventSource::from_json(&text)?
        }
        None => MemoryEventSource::default(),
    };
    tracing::info!(events = source.events().len(), "Event source ready");

    let records = view.load(&source)?;
    let grid = view.grid(today);

    println!("{}", render_grid(&grid, &records));
    for note in render_footnotes(&records) {
        println!("{note}");
    }

    Ok(())
}
