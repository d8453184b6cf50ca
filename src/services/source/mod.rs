// Event source ingestion
// Converts raw records from the booking API into validated events.
// Malformed records are excluded with a logged diagnostic so one bad row
// never aborts a layout pass.

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Deserialize;
use thiserror::Error;

use crate::models::event::{ColorTag, Event};

/// One event record as delivered by the external data source.
///
/// Timestamps are ISO-8601 strings with an offset (RFC 3339); the colour is
/// a free-form tag that falls back to the default palette entry when it does
/// not match a known value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub starts_at: String,
    pub ends_at: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("event {id}: unparseable {field} timestamp {value:?}: {source}")]
    Timestamp {
        id: i64,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("event {id}: end {end} precedes start {start}")]
    InvertedInterval {
        id: i64,
        start: DateTime<Local>,
        end: DateTime<Local>,
    },
    #[error("event {id}: blank name")]
    EmptyName { id: i64 },
}

/// Parse a single raw record into a validated event.
pub fn parse_event(raw: &RawEvent) -> Result<Event, SourceError> {
    if raw.name.trim().is_empty() {
        return Err(SourceError::EmptyName { id: raw.id });
    }

    let start = parse_instant(raw.id, "starts_at", &raw.starts_at)?;
    let end = parse_instant(raw.id, "ends_at", &raw.ends_at)?;

    if end < start {
        return Err(SourceError::InvertedInterval {
            id: raw.id,
            start,
            end,
        });
    }

    let color = raw
        .color
        .as_deref()
        .and_then(|tag| match tag.parse::<ColorTag>() {
            Ok(color) => Some(color),
            Err(err) => {
                log::debug!("event {}: {}; using default", raw.id, err);
                None
            }
        })
        .unwrap_or_default();

    Ok(Event {
        id: raw.id,
        name: raw.name.clone(),
        description: raw.description.clone(),
        color,
        start,
        end,
    })
}

/// Parse a batch of raw records, skipping malformed ones.
///
/// Each skipped record is logged at warn level; valid records are returned
/// in input order.
pub fn parse_events(raw: &[RawEvent]) -> Vec<Event> {
    let mut events = Vec::with_capacity(raw.len());
    for record in raw {
        match parse_event(record) {
            Ok(event) => events.push(event),
            Err(err) => log::warn!("skipping malformed event: {}", err),
        }
    }
    events
}

/// Parse a JSON array of raw records as returned by the schedule endpoint.
pub fn parse_events_json(json: &str) -> Result<Vec<Event>> {
    let raw: Vec<RawEvent> = serde_json::from_str(json)?;
    Ok(parse_events(&raw))
}

fn parse_instant(id: i64, field: &'static str, value: &str) -> Result<DateTime<Local>, SourceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|source| SourceError::Timestamp {
            id,
            field,
            value: value.to_string(),
            source,
        })
}
