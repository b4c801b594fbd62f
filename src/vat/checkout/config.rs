use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::vat::checkout::calendar::CheckoutCalendar;
use crate::vat::checkout::error::{Result, ToolError};

/// Number of labels expected in the late-fee roster header.
pub const STUDENT_HEADER_LEN: usize = 7;
/// Number of labels expected in each item's checkout table header.
pub const ITEM_HEADER_LEN: usize = 6;
/// Format of the configured first checkout day, e.g. `08/25/14`.
pub const FIRST_DAY_FORMAT: &str = "%m/%d/%y";

/// Location of one delimited-text input and whether its first row is a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub has_header: bool,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            path: path.into(),
            has_header,
        }
    }
}

/// Return address printed on the back of every hang tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Institution {
    pub name: String,
    pub subtitle: String,
    pub address: String,
}

impl Default for Institution {
    fn default() -> Self {
        Self {
            name: "VA&T".to_string(),
            subtitle: "STEVENS INSTITUTE OF TECHNOLOGY".to_string(),
            address: "1 Castle Point on Hudson; Hoboken, New Jersey 07030".to_string(),
        }
    }
}

/// On-disk shape of the configuration. Every key is optional and falls back
/// to the built-in semester defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub semester: String,
    pub first_day: String,
    pub due_day_of_week: String,
    pub due_time: String,
    pub checkout_weeks: i64,
    pub extra_students: i64,
    pub extra_weeks: i64,
    pub contact_phone: String,
    pub contact_email: String,
    pub fees_message: String,
    pub output_dir: PathBuf,
    pub student_header: Vec<String>,
    pub item_header: Vec<String>,
    pub roster: SourceConfig,
    pub inventory: SourceConfig,
    pub institution: Institution,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            semester: "Fall 2014".to_string(),
            first_day: "08/25/14".to_string(),
            due_day_of_week: "Monday".to_string(),
            due_time: "11am".to_string(),
            checkout_weeks: 16,
            extra_students: 4,
            extra_weeks: 3,
            contact_phone: "xxx.xxx.xxxx".to_string(),
            contact_email: "xxxx@xxxxx.edu".to_string(),
            fees_message:
                "Fees can be paid in the CAL office (Peirce 308) or to any VA&T faculty"
                    .to_string(),
            output_dir: PathBuf::from("."),
            student_header: labels(&[
                "NAME",
                "ID #",
                "CHECKOUT FORM?",
                "FEE/PAID",
                "FEE/PAID",
                "FEE/PAID",
                "NO FURTHER CHECKOUT",
            ]),
            item_header: labels(&[
                "WEEK",
                "RESERVED FOR",
                "CHECKED OUT TO",
                "DATE DUE",
                "DATED CHECKED IN",
                "# DAYS OVERDUE",
            ]),
            roster: SourceConfig::new("students.csv", false),
            inventory: SourceConfig::new("inventory.csv", true),
            institution: Institution::default(),
        }
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl ConfigFile {
    /// Serialises the configuration as TOML, e.g. for `init-config`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| ToolError::InvalidConfiguration(err.to_string()))
    }

    /// Validates the raw values and produces the immutable run configuration.
    pub fn into_config(self) -> Result<Config> {
        let first_day = NaiveDate::parse_from_str(self.first_day.trim(), FIRST_DAY_FORMAT)
            .map_err(|err| {
                ToolError::InvalidConfiguration(format!(
                    "first_day '{}' is not a MM/DD/YY date: {err}",
                    self.first_day
                ))
            })?;

        let due_weekday: Weekday = self.due_day_of_week.parse().map_err(|_| {
            ToolError::InvalidConfiguration(format!(
                "due_day_of_week '{}' is not a weekday name",
                self.due_day_of_week
            ))
        })?;
        if first_day.weekday() != due_weekday {
            warn!(
                %first_day,
                due_day_of_week = %self.due_day_of_week,
                "first checkout day does not fall on the due weekday"
            );
        }

        let checkout_weeks = non_negative("checkout_weeks", self.checkout_weeks)?;
        if CheckoutCalendar::checked(first_day, checkout_weeks).is_none() {
            return Err(ToolError::InvalidConfiguration(format!(
                "checkout_weeks = {checkout_weeks} runs past the last supported date \
                 starting from {first_day}"
            )));
        }
        let extra_students = non_negative("extra_students", self.extra_students)?;
        let extra_weeks = non_negative("extra_weeks", self.extra_weeks)?;

        check_header_len("student_header", &self.student_header, STUDENT_HEADER_LEN)?;
        check_header_len("item_header", &self.item_header, ITEM_HEADER_LEN)?;

        Ok(Config {
            semester: self.semester,
            first_day,
            due_day_of_week: self.due_day_of_week,
            due_time: self.due_time,
            checkout_weeks,
            extra_students,
            extra_weeks,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            fees_message: self.fees_message,
            output_dir: self.output_dir,
            student_header: self.student_header,
            item_header: self.item_header,
            roster: self.roster,
            inventory: self.inventory,
            institution: self.institution,
        })
    }
}

fn non_negative(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        ToolError::InvalidConfiguration(format!(
            "{name} must be a non-negative integer, got {value}"
        ))
    })
}

fn check_header_len(name: &str, header: &[String], expected: usize) -> Result<()> {
    if header.len() != expected {
        return Err(ToolError::InvalidConfiguration(format!(
            "{name} must have {expected} labels, got {}",
            header.len()
        )));
    }
    Ok(())
}

/// Immutable semester configuration shared by every stage of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub semester: String,
    pub first_day: NaiveDate,
    pub due_day_of_week: String,
    pub due_time: String,
    pub checkout_weeks: u32,
    pub extra_students: u32,
    pub extra_weeks: u32,
    pub contact_phone: String,
    pub contact_email: String,
    pub fees_message: String,
    pub output_dir: PathBuf,
    pub student_header: Vec<String>,
    pub item_header: Vec<String>,
    pub roster: SourceConfig,
    pub inventory: SourceConfig,
    pub institution: Institution,
}

impl Config {
    /// Built-in semester defaults.
    pub fn builtin() -> Result<Self> {
        ConfigFile::default().into_config()
    }

    /// Parses a TOML document, filling absent keys from the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|err| ToolError::InvalidConfiguration(err.to_string()))?;
        file.into_config()
    }

    /// Loads the configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                let source = fs::read_to_string(path).map_err(|source| {
                    ToolError::SourceUnavailable {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                Self::from_toml_str(&source)
            }
            None => Self::builtin(),
        }
    }

    /// Semester label with spaces replaced for use in file names.
    pub fn semester_slug(&self) -> String {
        self.semester.replace(' ', "_")
    }
}
