// Event module
// Core calendar event model for the studio scheduling views

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::is_same_day;

/// Fixed palette of colour tags used to style event blocks.
///
/// The tag is purely presentational; layout decisions never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Rose,
    Amber,
    Emerald,
    Azure,
    Violet,
    #[default]
    Slate,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Rose => "rose",
            ColorTag::Amber => "amber",
            ColorTag::Emerald => "emerald",
            ColorTag::Azure => "azure",
            ColorTag::Violet => "violet",
            ColorTag::Slate => "slate",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = UnknownColorTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rose" => Ok(ColorTag::Rose),
            "amber" => Ok(ColorTag::Amber),
            "emerald" => Ok(ColorTag::Emerald),
            "azure" => Ok(ColorTag::Azure),
            "violet" => Ok(ColorTag::Violet),
            "slate" => Ok(ColorTag::Slate),
            other => Err(UnknownColorTag(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color tag: {0}")]
pub struct UnknownColorTag(pub String);

/// Validation failure for an event's name or temporal extent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event {id} ends before it starts ({start} > {end})")]
    InvertedInterval {
        id: i64,
        start: DateTime<Local>,
        end: DateTime<Local>,
    },
    #[error("event {id} has an empty name")]
    EmptyName { id: i64 },
}

/// A scheduled class, rehearsal or booking as consumed by the layout engine.
///
/// Zero-duration events (`start == end`) are valid and occupy a single
/// instant; `start > end` is rejected at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: ColorTag,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// # Examples
    /// ```
    /// use studio_calendar::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new(7, "Ballet Beginners", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(EventError::EmptyName { id });
        }

        if start > end {
            return Err(EventError::InvertedInterval { id, start, end });
        }

        Ok(Self {
            id,
            name,
            description: None,
            color: ColorTag::default(),
            start,
            end,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event's name and temporal extent.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.name.trim().is_empty() {
            return Err(EventError::EmptyName { id: self.id });
        }

        if self.start > self.end {
            return Err(EventError::InvertedInterval {
                id: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// True when start and end fall on different local calendar dates.
    pub fn is_multi_day(&self) -> bool {
        !is_same_day(self.start, self.end)
    }

    /// True when the given local calendar date falls within the event's span.
    pub fn occurs_on(&self, date: chrono::NaiveDate) -> bool {
        self.start.date_naive() <= date && date <= self.end.date_naive()
    }

    /// Minute-granularity interval overlap against another event.
    ///
    /// Half-open semantics: an event ending exactly when another starts does
    /// not overlap it, and zero-duration events never block an adjacent one.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Day-granularity overlap: the two date ranges share at least one
    /// local calendar date.
    pub fn overlaps_days(&self, other: &Event) -> bool {
        self.start.date_naive() <= other.end.date_naive()
            && other.start.date_naive() <= self.end.date_naive()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    color: ColorTag,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            color: ColorTag::default(),
            start: None,
            end: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: ColorTag) -> Self {
        self.color = color;
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let name = self.name.ok_or("Event name is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let mut event = Event::new(id, name, start, end).map_err(|e| e.to_string())?;
        event.description = self.description;
        event.color = self.color;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
