//! HTML for the event views. Every record field goes through askama's HTML escaping.

use askama::Template;

use crate::catalog::{EventCatalog, EventFilter, EventRecord, LoadStatus};

pub const LISTING_ERROR: &str = "<p class=\"events-error\">Impossibile caricare gli eventi.</p>";
pub const NEXT_EVENT_ERROR: &str = "<p>Errore nel caricamento dell'evento.</p>";
pub const NO_UPCOMING_EVENTS: &str = "<p>Nessun evento in programma.</p>";

#[derive(Debug, thiserror::Error)]
#[error("failed to render {template}: {source}")]
pub struct RenderError {
	pub template: &'static str,
	#[source]
	pub source: askama::Error,
}

#[derive(Template)]
#[template(path = "event_card.html")]
pub struct EventCard<'a> {
	pub event: &'a EventRecord,
}

#[derive(Template)]
#[template(path = "next_event.html")]
pub struct NextEventCard<'a> {
	pub event: &'a EventRecord,
}

#[derive(Template)]
#[template(path = "event_details.html")]
pub struct EventDetails<'a> {
	pub event: &'a EventRecord,
	pub map: Option<&'a str>,
}

impl<'a> EventDetails<'a> {
	pub fn new(event: &'a EventRecord) -> Self {
		Self {
			event,
			map: event.map.as_deref().filter(|map| !map.is_empty()),
		}
	}
}

fn render(template: &'static str, tmpl: &impl Template) -> Result<String, RenderError> {
	tmpl.render().map_err(|source| RenderError { template, source })
}

/// Contents of the events container for `filter`. Empty when nothing matches.
pub fn render_listing(catalog: &EventCatalog, filter: &EventFilter) -> Result<String, RenderError> {
	if catalog.status() == LoadStatus::Failed {
		return Ok(LISTING_ERROR.to_string());
	}

	catalog.filtered(filter).try_fold(String::new(), |mut html, event| {
		html.push_str(&render("event card", &EventCard { event })?);
		Ok(html)
	})
}

pub fn render_next_event(catalog: &EventCatalog) -> Result<String, RenderError> {
	match (catalog.status(), catalog.next_event()) {
		(LoadStatus::Failed, _) => Ok(NEXT_EVENT_ERROR.to_string()),
		(_, Some(event)) => render("next event", &NextEventCard { event }),
		(_, None) => Ok(NO_UPCOMING_EVENTS.to_string()),
	}
}

pub fn render_details(event: &EventRecord) -> Result<String, RenderError> {
	render("event details", &EventDetails::new(event))
}
