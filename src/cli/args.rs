//! Command-line argument parsing

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shien - show time shift of OFLS
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "shien")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Spreadsheet document key
    #[arg(long, env = "OFLS_KEY", hide_env_values = true, global = true)]
    pub key: Option<String>,

    /// Sheet tab gid
    #[arg(long, env = "OFLS_GID", hide_env_values = true, global = true)]
    pub gid: Option<String>,

    /// Read the schedule from a local CSV export instead of the spreadsheet
    #[arg(long, value_name = "PATH", global = true)]
    pub csv: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = crate::config::DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Use this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", global = true)]
    pub today: Option<NaiveDate>,

    /// Subcommand to execute; shows today when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show date shift ex) shien d 5/22; shien d 3
    #[command(visible_alias = "d")]
    Date {
        /// M/D date or day offset from today
        #[arg(allow_hyphen_values = true)]
        day: Vec<String>,
    },

    /// Show week shift ex) shien w 5/22; shien w 1
    #[command(visible_alias = "w")]
    Week {
        /// M/D date inside the week or week offset from this week
        #[arg(allow_hyphen_values = true)]
        week: Vec<String>,
    },

    /// Show week shift as a table ex) shien t 5/22; shien t 1
    #[command(visible_alias = "t")]
    Table {
        /// M/D date inside the week or week offset from this week
        #[arg(allow_hyphen_values = true)]
        week: Vec<String>,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_subcommand() {
        let args = Args::try_parse_from(["shien"]).unwrap();
        assert!(!args.debug);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["shien", "--debug", "d"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.command, Some(Command::Date { day: vec![] }));
    }

    #[test]
    fn test_parse_aliases() {
        let args = Args::try_parse_from(["shien", "d", "5/22"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Date {
                day: vec!["5/22".to_string()]
            })
        );

        let args = Args::try_parse_from(["shien", "w", "1"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Week {
                week: vec!["1".to_string()]
            })
        );

        let args = Args::try_parse_from(["shien", "table"]).unwrap();
        assert_eq!(args.command, Some(Command::Table { week: vec![] }));
    }

    #[test]
    fn test_parse_negative_offset() {
        let args = Args::try_parse_from(["shien", "date", "-1"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Date {
                day: vec!["-1".to_string()]
            })
        );

        let args = Args::try_parse_from(["shien", "t", "-2"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Table {
                week: vec!["-2".to_string()]
            })
        );
    }

    #[test]
    fn test_parse_free_form_argument() {
        let args = Args::try_parse_from(["shien", "d", "abc"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Date {
                day: vec!["abc".to_string()]
            })
        );
    }

    #[test]
    fn test_parse_hyphen_and_extra_values() {
        let args = Args::try_parse_from(["shien", "d", "-x"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Date {
                day: vec!["-x".to_string()]
            })
        );

        let args = Args::try_parse_from(["shien", "w", "5/22", "x"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Week {
                week: vec!["5/22".to_string(), "x".to_string()]
            })
        );
    }

    #[test]
    fn test_parse_today_override() {
        let args = Args::try_parse_from(["shien", "--today", "2024-05-22", "w"]).unwrap();
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 5, 22));

        assert!(Args::try_parse_from(["shien", "--today", "5/22"]).is_err());
    }
}
