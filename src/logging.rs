//! Logger setup
//!
//! The TUI owns the terminal, so interactive sessions only log when a log
//! file is given. One-shot commands log warnings to stderr by default.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

fn format_line(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} {:<5} [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the global logger
///
/// `RUST_LOG` overrides the default level in every mode.
pub fn init(log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let mut builder = match (log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        (None, true) => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
        (None, false) => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
            builder.target(Target::Stderr);
            builder
        }
    };

    builder.format(format_line);
    // Only the first call installs a logger
    let _ = builder.try_init();
    Ok(())
}
