use std::fmt;

use serde::Deserialize;

/// Filter value that selects every event.
pub const ALL_EVENTS: &str = "all";

/// A single entry of `events.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
	pub id: u32,
	pub title: String,
	pub date: String,
	pub location: String,
	/// The category the filter buttons match against.
	#[serde(rename = "type")]
	pub category: String,
	pub image: String,
	pub desc: String,
	pub details: String,
	#[serde(default)]
	pub map: Option<String>,
	#[serde(default)]
	pub rsvp: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EventFilter {
	#[default]
	All,
	Category(String),
}

impl EventFilter {
	pub fn as_str(&self) -> &str {
		match self {
			Self::All => ALL_EVENTS,
			Self::Category(category) => category,
		}
	}

	pub fn matches(&self, record: &EventRecord) -> bool {
		match self {
			Self::All => true,
			Self::Category(category) => record.category == *category,
		}
	}
}

impl From<&str> for EventFilter {
	fn from(value: &str) -> Self {
		if value == ALL_EVENTS {
			Self::All
		} else {
			Self::Category(value.to_string())
		}
	}
}

impl fmt::Display for EventFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
	#[default]
	Pending,
	Ready,
	Failed,
}

/// The events loaded for one page view. A failed load keeps an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
	records: Vec<EventRecord>,
	status: LoadStatus,
}

impl EventCatalog {
	pub fn ready(records: Vec<EventRecord>) -> Self {
		Self {
			records,
			status: LoadStatus::Ready,
		}
	}

	pub fn failed() -> Self {
		Self {
			records: Vec::new(),
			status: LoadStatus::Failed,
		}
	}

	pub fn status(&self) -> LoadStatus {
		self.status
	}

	pub fn records(&self) -> &[EventRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Records matching `filter`, in the order they were loaded.
	pub fn filtered<'a>(&'a self, filter: &'a EventFilter) -> impl Iterator<Item = &'a EventRecord> + 'a {
		self.records.iter().filter(move |record| filter.matches(record))
	}

	pub fn find(&self, id: u32) -> Option<&EventRecord> {
		self.records.iter().find(|record| record.id == id)
	}

	/// The event shown on the landing page: the first one in the file.
	pub fn next_event(&self) -> Option<&EventRecord> {
		self.records.first()
	}
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse events ({path}): {source}")]
pub struct DecodeError {
	pub path: String,
	#[source]
	pub source: serde_json::Error,
}

/// Parses the body of `events.json`.
pub fn decode_events(body: &[u8]) -> Result<Vec<EventRecord>, DecodeError> {
	let deserializer = &mut serde_json::Deserializer::from_slice(body);
	serde_path_to_error::deserialize(deserializer).map_err(|err| DecodeError {
		path: err.path().to_string(),
		source: err.into_inner(),
	})
}
