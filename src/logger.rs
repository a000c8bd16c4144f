use std::fs::{self, File};
use std::path::Path;

use time::{format_description, OffsetDateTime};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, FmtSubscriber};

/// Install a file-writing tracing subscriber.
///
/// The log file is created as `analysis_<timestamp>.log` inside `log_dir`
/// (created if absent), next to the artifacts of the run it describes.
/// Will panic on error.
pub fn init_logger(log_dir: impl AsRef<Path>) {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir).unwrap();
    let file = File::create(log_dir.join(log_file_name())).unwrap();
    let writer = BoxMakeWriter::new(file);
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").unwrap(),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber).expect("Could not set global default tracing subscriber. Consider disabling logs if you are already setting a subscriber.");
}

fn log_file_name() -> String {
    let format =
        format_description::parse("analysis_[year][month][day]_[hour][minute][second].log")
            .unwrap();
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&format).unwrap()
}
