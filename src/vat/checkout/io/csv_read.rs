use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::vat::checkout::config::SourceConfig;
use crate::vat::checkout::error::{Result, ToolError};
use crate::vat::checkout::model::{Item, RecordError, Student};

/// Loads the roster described by `source`.
pub fn read_students(source: &SourceConfig) -> Result<Vec<Student>> {
    let file = open_source(source)?;
    students_from_reader(file, &source.path.display().to_string(), source.has_header)
}

/// Loads the inventory described by `source`.
pub fn read_items(source: &SourceConfig) -> Result<Vec<Item>> {
    let file = open_source(source)?;
    items_from_reader(file, &source.path.display().to_string(), source.has_header)
}

/// Parses roster rows from any reader. `name` labels errors and log lines.
pub fn students_from_reader<R: Read>(
    reader: R,
    name: &str,
    has_header: bool,
) -> Result<Vec<Student>> {
    let students = read_records(reader, name, has_header, Student::from_record, |student| {
        student.id_num.as_str()
    })?;
    info!(source = name, count = students.len(), "loaded roster");
    Ok(students)
}

/// Parses inventory rows from any reader. `name` labels errors and log lines.
pub fn items_from_reader<R: Read>(reader: R, name: &str, has_header: bool) -> Result<Vec<Item>> {
    let items = read_records(reader, name, has_header, Item::from_record, |item| {
        item.item_id.as_str()
    })?;
    info!(source = name, count = items.len(), "loaded inventory");
    Ok(items)
}

fn open_source(source: &SourceConfig) -> Result<File> {
    File::open(&source.path).map_err(|err| ToolError::SourceUnavailable {
        path: source.path.clone(),
        source: err,
    })
}

fn read_records<R, T, P, K>(
    reader: R,
    name: &str,
    has_header: bool,
    parse: P,
    key: K,
) -> Result<Vec<T>>
where
    R: Read,
    P: Fn(&[&str]) -> std::result::Result<T, RecordError>,
    K: Fn(&T) -> &str,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .quote(b'"')
        .from_reader(reader);

    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|err| {
            let row = err.position().map_or(index as u64 + 1, |pos| pos.line());
            ToolError::malformed(name, row, err.to_string())
        })?;
        let row = record
            .position()
            .map_or(index as u64 + 1, |pos| pos.line());

        let fields: Vec<&str> = record.iter().collect();
        let parsed = parse(fields.as_slice())
            .map_err(|err| ToolError::malformed(name, row, err.to_string()))?;

        let id = key(&parsed);
        if !seen.insert(id.to_string()) {
            return Err(ToolError::malformed(
                name,
                row,
                format!("duplicate identifier '{id}'"),
            ));
        }
        debug!(source = name, row, id, "parsed record");
        records.push(parsed);
    }

    Ok(records)
}
