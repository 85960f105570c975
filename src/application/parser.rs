//! Record parser: space-delimited CSV input to edges.
//!
//! Fields are separated by a single space. A field may be double-quoted to
//! contain spaces or line breaks; `""` inside quotes is a literal quote.
//! Empty lines are skipped. Only the first two fields are used.

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Edge;

const SEPARATOR: u8 = b' ';

/// Parses `input` into edges.
///
/// With `strict` set, every record must have as many fields as the first one.
/// Either way each record needs at least a parent and a child field.
pub fn parse_records(input: &str, strict: bool) -> ApplicationResult<Vec<Edge>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(SEPARATOR)
        .has_headers(false)
        .flexible(!strict)
        .from_reader(input.as_bytes());

    let mut edges = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(parse_error(&e)),
        }

        let line = record_line(&record);
        match (record.get(0), record.get(1)) {
            (Some(parent), Some(child)) => edges.push(Edge::new(parent, child)),
            _ => {
                return Err(ApplicationError::Parse {
                    line,
                    message: format!("expected parent and child, found {} field", record.len()),
                })
            }
        }
    }

    debug!("parsed {} edges", edges.len());
    Ok(edges)
}

fn record_line(record: &StringRecord) -> usize {
    record.position().map_or(0, |pos| pos.line() as usize)
}

fn parse_error(e: &csv::Error) -> ApplicationError {
    let line = e.position().map_or(0, |pos| pos.line() as usize);
    let message = match e.kind() {
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!(
            "wrong number of fields: expected {}, found {}",
            expected_len, len
        ),
        _ => e.to_string(),
    };
    ApplicationError::Parse { line, message }
}
