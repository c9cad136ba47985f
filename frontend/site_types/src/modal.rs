use crate::catalog::{EventCatalog, EventRecord};

/// Visibility of the event details overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
	#[default]
	Hidden,
	Visible { event_id: u32 },
}

impl ModalState {
	/// Shows the record with `event_id`. An unknown id leaves the state untouched.
	pub fn open<'a>(&mut self, catalog: &'a EventCatalog, event_id: u32) -> Option<&'a EventRecord> {
		let record = catalog.find(event_id)?;
		*self = Self::Visible { event_id };
		Some(record)
	}

	/// Returns true if the overlay was visible.
	pub fn close(&mut self) -> bool {
		std::mem::take(self).is_visible()
	}

	pub fn is_visible(&self) -> bool {
		matches!(self, Self::Visible { .. })
	}

	/// CSS `display` value for the overlay.
	pub fn display(&self) -> &'static str {
		match self {
			Self::Visible { .. } => "block",
			Self::Hidden => "none",
		}
	}
}
