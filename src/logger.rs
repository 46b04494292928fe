use crossterm::style::{Color, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes `log` records to stderr, level tag coloured unless `plain`.
struct StderrLogger {
    plain: bool,
}

static PLAIN: StderrLogger = StderrLogger { plain: true };
static COLOR: StderrLogger = StderrLogger { plain: false };

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = format!("{:<5}", record.level());
        if self.plain {
            eprintln!("[{}] {}", level, record.args());
        } else {
            let color = match record.level() {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Green,
                Level::Debug => Color::Blue,
                Level::Trace => Color::DarkGrey,
            };
            eprintln!("[{}] {}", level.with(color), record.args());
        }
    }

    fn flush(&self) {}
}

/// Map `-v` occurrences to a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8, plain: bool) -> Result<(), SetLoggerError> {
    log::set_logger(if plain { &PLAIN } else { &COLOR })?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
