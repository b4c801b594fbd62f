use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Number of positional columns in an inventory row.
pub const ITEM_FIELD_COUNT: usize = 9;
/// Minimum number of columns in a roster row.
pub const STUDENT_FIELD_COUNT: usize = 3;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static pattern compiles"));

/// Reason a single row could not be turned into an entity. The loader attaches
/// the source name and row number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },

    /// The last-name field has no delimiter or no usable segment.
    #[error("cannot extract a last name from '{0}'")]
    LastName(String),

    #[error("identifier is empty")]
    EmptyIdentifier,
}

/// A student on the late-fee roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub id_num: String,
}

impl Student {
    /// Builds a student from a roster row `(first name, last-name field, id, ...)`.
    pub fn from_record(fields: &[&str]) -> Result<Self, RecordError> {
        let [first, last_field, id_num, ..] = fields else {
            return Err(RecordError::TooFewColumns {
                expected: STUDENT_FIELD_COUNT,
                found: fields.len(),
            });
        };

        if id_num.is_empty() {
            return Err(RecordError::EmptyIdentifier);
        }

        Ok(Self {
            first_name: title_case(first),
            last_name: extract_last_name(last_field)?,
            id_num: id_num.to_string(),
        })
    }

    /// Name as printed in the roster table: `Last, First`.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Extracts the last name from a raw `Last, Suffix` style field.
///
/// The title-cased field is split on runs of non-word characters and the
/// second segment is taken. When that segment is empty (a trailing delimiter
/// such as `doe,`) the first non-empty segment is used. A field without any
/// delimiter is rejected.
pub fn extract_last_name(field: &str) -> Result<String, RecordError> {
    let titled = title_case(field);
    let segments: Vec<&str> = NON_WORD.split(&titled).collect();
    if segments.len() < 2 {
        return Err(RecordError::LastName(field.to_string()));
    }

    let name = if segments[1].is_empty() {
        segments.iter().find(|segment| !segment.is_empty()).copied()
    } else {
        Some(segments[1])
    };

    name.map(str::to_string)
        .ok_or_else(|| RecordError::LastName(field.to_string()))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            titled.push(ch);
            previous_is_letter = false;
        }
    }
    titled
}

/// A piece of equipment from the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_id: String,
    pub item_name: String,
    /// Not printed on either document.
    pub short_desc: String,
    pub should_include: String,
    pub manufacturer: String,
    /// Not printed on either document.
    pub model_num: String,
    pub serial_num: String,
    /// Not printed on either document.
    pub category: String,
    /// Not printed on either document.
    pub value: String,
}

impl Item {
    /// Builds an item from exactly nine positional inventory columns.
    pub fn from_record(fields: &[&str]) -> Result<Self, RecordError> {
        let [
            item_id,
            item_name,
            short_desc,
            should_include,
            manufacturer,
            model_num,
            serial_num,
            category,
            value,
        ] = fields
        else {
            return Err(RecordError::ColumnCount {
                expected: ITEM_FIELD_COUNT,
                found: fields.len(),
            });
        };

        if item_id.is_empty() {
            return Err(RecordError::EmptyIdentifier);
        }

        Ok(Self {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            short_desc: short_desc.to_string(),
            should_include: should_include.to_string(),
            manufacturer: manufacturer.to_string(),
            model_num: model_num.to_string(),
            serial_num: serial_num.to_string(),
            category: category.to_string(),
            value: value.to_string(),
        })
    }

    /// Relative path of the thumbnail shown on the checkout form.
    pub fn image_path(&self) -> String {
        format!("EquipmentImages/{}.jpg", self.item_id)
    }
}
