use site_types::catalog::{decode_events, EventCatalog, EventFilter, EventRecord};
use site_types::markup;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, EventTarget};

use super::errors::{ErrorCode, SiteError, SiteErrorExt, SiteErrorExtFetch};
use super::fetch::FetchRequest;
use super::inner::{SiteInner, SiteInnerHolder};
use super::modal;
use super::util::{data_attribute, query_all, register_events, set_class, Holder};
use crate::tracing_wasm;

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
	Listing,
	NextEvent,
}

/// The events page listing and the landing page "next event" card.
/// Each view keeps the catalog from its own fetch.
#[derive(Default)]
pub struct Listing {
	pub catalog: EventCatalog,
	pub filter: EventFilter,
	pub next_catalog: EventCatalog,
	container: Option<Element>,
	filter_buttons: Vec<Element>,
	next_card: Option<Element>,
}

impl Listing {
	fn project_filter(&self) {
		for button in &self.filter_buttons {
			let active = data_attribute(button, "filter").is_some_and(|filter| filter == self.filter.as_str());
			set_class(button, ACTIVE_CLASS, active);
		}
	}

	fn render(&self) {
		let Some(container) = &self.container else {
			return;
		};

		match markup::render_listing(&self.catalog, &self.filter) {
			Ok(html) => container.set_inner_html(&html),
			Err(err) => tracing::error!("{}", err),
		}
	}

	fn render_next(&self) {
		let Some(card) = &self.next_card else {
			return;
		};

		match markup::render_next_event(&self.next_catalog) {
			Ok(html) => card.set_inner_html(&html),
			Err(err) => tracing::error!("{}", err),
		}
	}

	pub fn apply_filter(&mut self, filter: EventFilter) {
		tracing::debug!(%filter, "filtering events");
		self.filter = filter;
		self.project_filter();
		self.render();
	}

	pub fn visible_records(&self) -> impl Iterator<Item = &EventRecord> {
		self.catalog.filtered(&self.filter)
	}
}

pub(crate) fn events_request(inner: &SiteInner) -> Result<FetchRequest, SiteError> {
	let base = inner
		.document
		.base_uri()
		.other_error("failed to read document base uri")?
		.ok_or_else(|| SiteError::new(ErrorCode::Other, "document has no base uri"))?;

	let url = Url::parse(&base)?.join(&inner.settings.events_url)?;

	Ok(FetchRequest::new("GET", url).set_timeout(inner.settings.fetch_timeout_ms))
}

pub(crate) async fn fetch_events(request: FetchRequest) -> Result<Vec<EventRecord>, SiteError> {
	tracing::debug!(url = %request.url(), "fetching events");

	let mut inflight = request.start().network_error("failed to start events request")?;
	let body = inflight.wait_result().await.into_site_error()?;

	Ok(decode_events(body.as_bytes())?)
}

fn spawn_load(holder: &SiteInnerHolder, target: LoadTarget) {
	let request = events_request(&holder.borrow());
	let site = holder.downgrade();

	spawn_local(async move {
		let result = match request {
			Ok(request) => fetch_events(request).await,
			Err(err) => Err(err),
		};

		if let Some(site) = site.upgrade() {
			tracing_wasm::scope!(site.logging_config());
			finish_load(&site, target, result);
		}
	});
}

/// Stores the outcome of a fetch and renders the view that asked for it.
pub(crate) fn finish_load(holder: &SiteInnerHolder, target: LoadTarget, result: Result<Vec<EventRecord>, SiteError>) {
	let catalog = match result {
		Ok(records) => {
			let catalog = EventCatalog::ready(records);
			tracing::info!(?target, count = catalog.len(), "loaded events");
			catalog
		}
		Err(err) => {
			tracing::error!(?target, "error loading events data: {}", err);
			EventCatalog::failed()
		}
	};

	let mut inner = holder.borrow_mut();
	match target {
		LoadTarget::Listing => {
			inner.listing.catalog = catalog;
			inner.listing.render();
		}
		LoadTarget::NextEvent => {
			inner.listing.next_catalog = catalog;
			inner.listing.render_next();
		}
	}
}

pub(crate) fn apply_filter(holder: &SiteInnerHolder, filter: EventFilter) {
	holder.borrow_mut().listing.apply_filter(filter);
}

fn details_id(evt: &web_sys::Event) -> Option<u32> {
	let target = evt.target()?.dyn_into::<Element>().ok()?;
	let button = target.closest(".btn-details").ok()??;
	data_attribute(&button, "id")?.trim().parse().ok()
}

pub fn install(holder: &SiteInnerHolder) {
	let document = holder.document();

	let container = document.get_element_by_id("events-container");
	let filter_buttons = query_all(&document, ".filter-btn");
	let next_card = document.get_element_by_id("next-event-card");

	let mut listeners: Vec<Holder<EventTarget>> = Vec::new();

	for button in &filter_buttons {
		let site = holder.downgrade();
		let filter = EventFilter::from(data_attribute(button, "filter").unwrap_or_default().as_str());
		let cleanup = register_events!(button, {
			"click" => move |_| {
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					apply_filter(&site, filter.clone());
				}
			},
		});
		listeners.push(Holder::new(button.clone().into(), cleanup));
	}

	if let Some(container) = container.clone() {
		let site = holder.downgrade();
		let cleanup = register_events!(container, {
			"click" => move |evt: web_sys::Event| {
				let Some(id) = details_id(&evt) else {
					return;
				};

				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					modal::show(&site, id);
				}
			},
		});
		listeners.push(Holder::new(container.into(), cleanup));
	}

	let load_listing = container.is_some();
	let load_next = next_card.is_some();

	{
		let mut inner = holder.borrow_mut();
		inner.listing.container = container;
		inner.listing.filter_buttons = filter_buttons;
		inner.listing.next_card = next_card;
		inner.listing.project_filter();
	}

	holder.add_listeners(listeners);

	if load_listing {
		spawn_load(holder, LoadTarget::Listing);
	}

	if load_next {
		spawn_load(holder, LoadTarget::NextEvent);
	}
}
