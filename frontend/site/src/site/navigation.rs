use site_types::navigation::{NavMenu, ScrollTracker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, ScrollBehavior, ScrollIntoViewOptions};

use super::inner::SiteInnerHolder;
use super::util::{query, query_all, register_events, set_class, set_style, Holder};
use crate::tracing_wasm;

const ACTIVE_CLASS: &str = "active";

pub struct Navigation {
	pub menu: NavMenu,
	pub scroll: ScrollTracker,
	toggle: Option<Element>,
	container: Option<Element>,
	navbar: Option<Element>,
}

impl Navigation {
	pub fn new(hide_threshold: f64) -> Self {
		Self {
			menu: NavMenu::default(),
			scroll: ScrollTracker::new(hide_threshold),
			toggle: None,
			container: None,
			navbar: None,
		}
	}

	fn project_menu(&self) {
		for element in [&self.toggle, &self.container].into_iter().flatten() {
			set_class(element, ACTIVE_CLASS, self.menu.is_open());
		}
	}

	pub fn toggle(&mut self) {
		let open = self.menu.toggle();
		tracing::trace!(open, "nav menu toggled");
		self.project_menu();
	}

	pub fn close(&mut self) {
		self.menu.close();
		self.project_menu();
	}

	pub fn on_scroll(&mut self, offset: f64) {
		let visibility = self.scroll.observe(offset);
		if let Some(navbar) = &self.navbar {
			set_style(navbar, "transform", visibility.transform());
		}
	}
}

/// Resolves the element an in-page link points at. `#` alone points nowhere.
fn anchor_target(document: &Document, href: &str) -> Option<Element> {
	if href.len() <= 1 {
		return None;
	}

	query(document, href)
}

fn scroll_to_anchor(holder: &SiteInnerHolder, anchor: &Element) {
	let document = holder.document();

	match anchor.get_attribute("href").and_then(|href| anchor_target(&document, &href)) {
		Some(target) => {
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		}
		None => tracing::debug!("anchor has no target"),
	}

	holder.borrow_mut().nav.close();
}

pub fn install(holder: &SiteInnerHolder) {
	let (window, document) = {
		let inner = holder.borrow();
		(inner.window.clone(), inner.document.clone())
	};

	let toggle = document.get_element_by_id("navToggle").or_else(|| query(&document, ".hamburger"));
	let container = document.get_element_by_id("navMenu").or_else(|| query(&document, ".nav-menu"));
	let navbar = query(&document, ".navbar");

	let mut listeners: Vec<Holder<EventTarget>> = Vec::new();

	if let Some(toggle) = toggle.clone() {
		let site = holder.downgrade();
		let cleanup = register_events!(toggle, {
			"click" => move |_| {
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					site.borrow_mut().nav.toggle();
				}
			},
		});
		listeners.push(Holder::new(toggle.into(), cleanup));
	}

	for anchor in query_all(&document, "a[href^=\"#\"]") {
		let site = holder.downgrade();
		let link = anchor.clone();
		let cleanup = register_events!(anchor, {
			"click" => move |evt: web_sys::Event| {
				evt.prevent_default();
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					scroll_to_anchor(&site, &link);
				}
			},
		});
		listeners.push(Holder::new(anchor.into(), cleanup));
	}

	if navbar.is_some() {
		let site = holder.downgrade();
		let win = window.clone();
		let cleanup = register_events!(window, {
			"scroll" => move |_| {
				let offset = win.page_y_offset().unwrap_or_default();
				if let Some(site) = site.upgrade() {
					site.borrow_mut().nav.on_scroll(offset);
				}
			},
		});
		listeners.push(Holder::new(window.into(), cleanup));
	}

	tracing::debug!(
		toggle = toggle.is_some(),
		navbar = navbar.is_some(),
		"navigation installed"
	);

	{
		let mut inner = holder.borrow_mut();
		inner.nav.toggle = toggle;
		inner.nav.container = container;
		inner.nav.navbar = navbar;
		inner.nav.project_menu();
	}

	holder.add_listeners(listeners);
}
