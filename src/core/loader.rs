//! Schedule loading
//!
//! Turns the spreadsheet's CSV export into a [`ScheduleTable`]. The column
//! layout of a day row is fixed by the sheet and lives in [`SLOT_LAYOUT`].

use crate::{
    config::{Config, SourceConfig},
    core::schedule::{DAY_KEY_PATTERN, DayKey, DayRecord, SLOT_COUNT, ScheduleTable},
    error::{Result, ShienError},
    utils::http::SheetClient,
};
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Number of cells after the date column that a full day row carries
pub const ROW_WIDTH: usize = 25;

/// Where a slot's text comes from, relative to the cells after the date column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSource {
    /// Join a run of cells and strip trailing punctuation
    Joined {
        cells: Range<usize>,
        separator: &'static str,
    },
    /// Take a single cell as-is
    Verbatim(usize),
}

/// One entry of the row layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRule {
    pub name: &'static str,
    pub source: SlotSource,
}

const fn joined(name: &'static str, start: usize, end: usize, separator: &'static str) -> SlotRule {
    SlotRule {
        name,
        source: SlotSource::Joined {
            cells: start..end,
            separator,
        },
    }
}

const fn verbatim(name: &'static str, cell: usize) -> SlotRule {
    SlotRule {
        name,
        source: SlotSource::Verbatim(cell),
    }
}

/// Column layout of a day row, in slot order
pub static SLOT_LAYOUT: [SlotRule; SLOT_COUNT] = [
    joined("1st", 0, 1, "，"),
    joined("2nd", 2, 3, ","),
    joined("lunch", 4, 6, ","),
    joined("3rd", 7, 9, ","),
    joined("4th", 10, 12, ","),
    joined("5th", 13, 15, ","),
    joined("night", 16, 21, ","),
    verbatim("mur", 22),
    verbatim("hig", 23),
    verbatim("etc", 24),
];

/// Strip stray `/ , * $` left at the end of a joined cell run
fn trim_trailing_marks(text: &str) -> &str {
    text.trim_end_matches(['/', ',', '*', '$'])
}

/// Apply [`SLOT_LAYOUT`] to the cells following the date column
///
/// Cells past the end of a short row read as empty.
pub fn extract_slots<S: AsRef<str>>(cells: &[S]) -> [String; SLOT_COUNT] {
    let cell = |i: usize| cells.get(i).map_or("", |c| c.as_ref());

    std::array::from_fn(|slot| match &SLOT_LAYOUT[slot].source {
        SlotSource::Joined {
            cells: range,
            separator,
        } => {
            let joined = range.clone().map(cell).collect::<Vec<_>>().join(*separator);
            trim_trailing_marks(&joined).to_string()
        }
        SlotSource::Verbatim(i) => cell(*i).to_string(),
    })
}

/// Builds schedule tables from CSV rows
pub struct ScheduleLoader {
    re_day_key: Regex,
}

impl ScheduleLoader {
    /// Create a new schedule loader
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_day_key: Regex::new(DAY_KEY_PATTERN)
                .map_err(|e| ShienError::config(format!("Failed to compile regex: {}", e)))?,
        })
    }

    /// Fetch the configured source and build the table
    #[instrument(skip(self, config))]
    pub fn load(&self, config: &Config) -> Result<ScheduleTable> {
        let data = match &config.source {
            SourceConfig::Remote { key, gid } => {
                SheetClient::new(config.timeout())?.fetch_csv(key, gid)?
            }
            SourceConfig::File(path) => read_csv_file(path)?,
        };

        let table = self.load_csv(&data)?;
        info!("Loaded schedule for {} days", table.len());
        if table.is_empty() {
            warn!("No row in the schedule starts with a M/D date");
        }
        Ok(table)
    }

    /// Parse raw CSV bytes into a table
    ///
    /// Any malformed record fails the whole load.
    pub fn load_csv(&self, data: &[u8]) -> Result<ScheduleTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                ShienError::csv(format!("Failed to read record {}", line + 1), e)
            })?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        debug!("CSV has {} rows", rows.len());
        Ok(self.load_rows(rows))
    }

    /// Build a table from rows of text cells
    ///
    /// Rows whose first cell holds no `M/D` date are skipped.
    pub fn load_rows<I>(&self, rows: I) -> ScheduleTable
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut table = ScheduleTable::new();

        for row in rows {
            let Some((first, rest)) = row.split_first() else {
                continue;
            };

            let Some(caps) = self.re_day_key.captures(first) else {
                debug!("Skipping row without date: '{}'", first);
                continue;
            };
            let key = DayKey::from_captures(&caps);

            if rest.len() < ROW_WIDTH {
                debug!(
                    "Row {} has {} cells after the date, expected {}",
                    key,
                    rest.len(),
                    ROW_WIDTH
                );
            }

            table.insert(key, DayRecord::new(first.as_str(), extract_slots(rest)));
        }

        table
    }
}

fn read_csv_file(path: &Path) -> Result<Vec<u8>> {
    debug!("Reading schedule from file: {}", path.display());
    std::fs::read(path).map_err(|e| ShienError::file_system("read", path, e))
}
