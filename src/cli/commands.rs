//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{
        DateResolver, DayTarget, ScheduleLoader, ScheduleTable,
        format::{format_day, format_week, week_table},
    },
    error::ShienError,
};
use anyhow::Context;
use tracing::{debug, instrument};

/// Load the schedule and print the output of the requested command
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: Option<&Command>) -> anyhow::Result<()> {
    let loader = ScheduleLoader::new()?;
    let table = loader
        .load(config)
        .context("Failed to load the shift schedule")?;

    let resolver = DateResolver::new(config.today)?;
    debug!("Rendering {:?} relative to {}", command, resolver.today());
    let output = render_command(&table, &resolver, command)?;
    println!("{output}");
    Ok(())
}

/// Produce the text a command prints
///
/// An unreadable day or week expression yields the usage message rather
/// than an error.
pub fn render_command(
    table: &ScheduleTable,
    resolver: &DateResolver,
    command: Option<&Command>,
) -> anyhow::Result<String> {
    let rendered = match command {
        None => render_day(table, resolver, ""),
        Some(Command::Date { day }) => arg(day).and_then(|day| render_day(table, resolver, day)),
        Some(Command::Week { week }) => {
            arg(week).and_then(|week| render_week(table, resolver, week))
        }
        Some(Command::Table { week }) => {
            arg(week).and_then(|week| render_week_table(table, resolver, week))
        }
    };

    match rendered {
        Err(e) if e.is_invalid_argument() => {
            debug!("Rejected argument: {:?}", e);
            Ok(e.to_string())
        }
        other => Ok(other?),
    }
}

/// The single expression a command takes; more than one is unreadable
fn arg(values: &[String]) -> Result<&str, ShienError> {
    match values {
        [] => Ok(""),
        [value] => Ok(value.as_str()),
        _ => Err(ShienError::invalid_argument(values.join(" "))),
    }
}

fn render_day(
    table: &ScheduleTable,
    resolver: &DateResolver,
    day: &str,
) -> Result<String, ShienError> {
    let record = match resolver.resolve_day(day)? {
        DayTarget::Date(date) => table.get_date(date),
        DayTarget::Key(key) => table.get(&key),
    };
    Ok(format_day(record))
}

fn render_week(
    table: &ScheduleTable,
    resolver: &DateResolver,
    week: &str,
) -> Result<String, ShienError> {
    let range = resolver.resolve_week(week)?;
    Ok(format_week(table, range))
}

fn render_week_table(
    table: &ScheduleTable,
    resolver: &DateResolver,
    week: &str,
) -> Result<String, ShienError> {
    let range = resolver.resolve_week(week)?;
    Ok(week_table(table, range).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture() -> (ScheduleTable, DateResolver) {
        let csv = "\
Date,1st,,2nd
5/21(火),Mori
5/22(水),Sato,,Ito
5/23(木),Abe
";
        let table = ScheduleLoader::new()
            .unwrap()
            .load_csv(csv.as_bytes())
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();
        (table, DateResolver::new(today).unwrap())
    }

    fn run(command: Option<Command>) -> String {
        let (table, resolver) = fixture();
        render_command(&table, &resolver, command.as_ref()).unwrap()
    }

    #[test]
    fn test_default_shows_today() {
        let output = run(None);
        assert!(output.starts_with("5/22(水)\n1st : Sato\n2nd : Ito\n"));
        assert_eq!(output, run(Some(Command::Date { day: vec![] })));
    }

    #[test]
    fn test_date_offset_and_explicit() {
        let yesterday = run(Some(Command::Date {
            day: vec!["-1".to_string()],
        }));
        assert!(yesterday.starts_with("5/21(火)\n1st : Mori"));

        let explicit = run(Some(Command::Date {
            day: vec!["5/23".to_string()],
        }));
        assert!(explicit.starts_with("5/23(木)\n1st : Abe"));
    }

    #[test]
    fn test_unknown_day_is_blank() {
        let output = run(Some(Command::Date {
            day: vec!["12/31".to_string()],
        }));
        assert!(output.starts_with("\n1st : \n"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let expected = "invalid argument. format must be like 3/9 or integer.";
        for command in [
            Command::Date {
                day: vec!["abc".to_string()],
            },
            Command::Week {
                week: vec!["abc".to_string()],
            },
            Command::Table {
                week: vec!["abc".to_string()],
            },
            Command::Date {
                day: vec!["-x".to_string()],
            },
            Command::Week {
                week: vec!["5/22".to_string(), "x".to_string()],
            },
        ] {
            assert_eq!(run(Some(command)), expected);
        }
    }

    #[test]
    fn test_week_text() {
        let output = run(Some(Command::Week { week: vec![] }));
        assert_eq!(output.split("\n\n").count(), 5);
        assert!(output.contains("5/21(火)\n1st : Mori"));
    }

    #[test]
    fn test_week_table() {
        let output = run(Some(Command::Table {
            week: vec!["5/22".to_string()],
        }));
        let rows = output.lines().filter(|line| line.starts_with("| ")).count();
        assert_eq!(rows, 6);
        assert!(output.contains("lunch"));
        assert!(output.contains("Sato"));
    }
}
