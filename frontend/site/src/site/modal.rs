use site_types::markup;
use site_types::modal::ModalState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

use super::inner::{SiteInner, SiteInnerHolder};
use super::util::{register_events, set_style, Holder};
use crate::tracing_wasm;

struct ModalElements {
	overlay: Element,
	body: Element,
}

/// The event details overlay.
#[derive(Default)]
pub struct Modal {
	pub state: ModalState,
	elements: Option<ModalElements>,
}

impl Modal {
	fn project(&self) {
		if let Some(elements) = &self.elements {
			set_style(&elements.overlay, "display", self.state.display());
		}
	}

	pub fn close(&mut self) {
		if self.state.close() {
			tracing::trace!("details closed");
		}
		self.project();
	}

	fn is_backdrop(&self, target: Option<EventTarget>) -> bool {
		let (Some(elements), Some(node)) = (&self.elements, target.and_then(|t| t.dyn_into::<Node>().ok())) else {
			return false;
		};

		elements.overlay.is_same_node(Some(&node))
	}
}

/// Opens the overlay for `event_id`. Unknown ids are ignored.
pub(crate) fn show(holder: &SiteInnerHolder, event_id: u32) -> bool {
	let mut inner = holder.borrow_mut();
	let SiteInner { listing, modal, .. } = &mut *inner;

	let Some(elements) = &modal.elements else {
		return false;
	};

	let Some(record) = modal.state.open(&listing.catalog, event_id) else {
		tracing::trace!(event_id, "no event with this id");
		return false;
	};

	match markup::render_details(record) {
		Ok(html) => elements.body.set_inner_html(&html),
		Err(err) => tracing::error!("{}", err),
	}

	modal.project();
	true
}

pub(crate) fn close(holder: &SiteInnerHolder) {
	holder.borrow_mut().modal.close();
}

pub fn install(holder: &SiteInnerHolder) {
	let (window, document) = {
		let inner = holder.borrow();
		(inner.window.clone(), inner.document.clone())
	};

	let (Some(overlay), Some(body)) = (document.get_element_by_id("eventModal"), document.get_element_by_id("modal-body")) else {
		tracing::trace!("no details modal on this page");
		return;
	};

	let mut listeners: Vec<Holder<EventTarget>> = Vec::new();

	if let Some(close_button) = overlay.query_selector(".close").ok().flatten() {
		let site = holder.downgrade();
		let cleanup = register_events!(close_button, {
			"click" => move |_| {
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					close(&site);
				}
			},
		});
		listeners.push(Holder::new(close_button.into(), cleanup));
	}

	{
		let site = holder.downgrade();
		let cleanup = register_events!(window, {
			"click" => move |evt: web_sys::Event| {
				let Some(site) = site.upgrade() else {
					return;
				};

				let backdrop = site.borrow().modal.is_backdrop(evt.target());
				if backdrop {
					tracing_wasm::scope!(site.logging_config());
					close(&site);
				}
			},
		});
		listeners.push(Holder::new(window.into(), cleanup));
	}

	{
		let mut inner = holder.borrow_mut();
		inner.modal.elements = Some(ModalElements { overlay, body });
		inner.modal.project();
	}

	holder.add_listeners(listeners);
}
