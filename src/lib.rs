//! # shien
//!
//! Shows the OFLS time shift for a day or a week. The schedule is published
//! as a Google Sheets tab; it is downloaded as CSV once per run, turned into
//! a day-keyed table and queried with short date expressions.
//!
//! ## Expressions
//!
//! - empty: today / this week
//! - `3`, `-1`: days (or weeks) from today
//! - `5/22`: an explicit month and day in the current year
//!
//! ## Example
//!
//! ```no_run
//! use shien::core::{DateResolver, ScheduleLoader, format::format_week};
//!
//! let loader = ScheduleLoader::new()?;
//! let table = loader.load_csv(std::fs::read("schedule.csv")?.as_slice())?;
//! let resolver = DateResolver::new(chrono::Local::now().date_naive())?;
//! println!("{}", format_week(&table, resolver.resolve_week("")?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug output and
/// the default only shows warnings.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
