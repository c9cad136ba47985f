use std::rc::Rc;

use site_types::catalog::EventFilter;
use site_types::membership::Tier;
use wasm_bindgen::prelude::*;

use self::inner::{SiteInner, SiteInnerHolder};
use self::services::{AlertNotifier, DelayedSubmitter, Notifier, Submitter};
use self::settings::SiteSettings;
use crate::tracing_wasm;

pub(crate) mod errors;
pub(crate) mod fetch;
pub(crate) mod inner;
pub(crate) mod leveling;
pub(crate) mod listing;
pub(crate) mod membership;
pub(crate) mod modal;
pub(crate) mod navigation;
pub(crate) mod reveal;
pub(crate) mod services;
pub(crate) mod settings;
pub(crate) mod util;

#[wasm_bindgen(typescript_custom_section)]
const _: &'static str = r#"
class Site {
    toString(): string;

    constructor(settings?: SiteSettings);

    filter(category: string): void;
    showDetails(id: number): boolean;
    closeDetails(): void;
    selectTier(tier: string): void;

    readonly navOpen: boolean;
    readonly activeFilter: string;
    readonly selectedTier: string | undefined;
    readonly eventCount: number;
}
"#;

/// Wires the page's interactive behaviour to whatever markup is present.
///
/// Pages construct one after the document has parsed:
///
/// ```js
/// import init, { Site } from "./pkg/site.js";
///
/// await init();
///
/// const start = () => {
///     window.site = new Site({ eventsUrl: "events.json" });
/// };
///
/// if (document.readyState === "loading") {
///     document.addEventListener("DOMContentLoaded", start);
/// } else {
///     start();
/// }
/// ```
#[wasm_bindgen(skip_typescript)]
pub struct Site {
	inner: SiteInnerHolder,
}

#[wasm_bindgen]
impl Site {
	#[wasm_bindgen(constructor)]
	pub fn new(settings: JsValue) -> Result<Site, JsValue> {
		Self::with_services(SiteSettings::from_js(settings)?, Rc::new(AlertNotifier), None)
	}

	pub fn filter(&self, category: &str) {
		tracing_wasm::scope!(self.inner.logging_config());
		listing::apply_filter(&self.inner, EventFilter::from(category));
	}

	#[wasm_bindgen(js_name = showDetails)]
	pub fn show_details(&self, id: u32) -> bool {
		tracing_wasm::scope!(self.inner.logging_config());
		modal::show(&self.inner, id)
	}

	#[wasm_bindgen(js_name = closeDetails)]
	pub fn close_details(&self) {
		tracing_wasm::scope!(self.inner.logging_config());
		modal::close(&self.inner);
	}

	#[wasm_bindgen(js_name = selectTier)]
	pub fn select_tier(&self, tier: &str) {
		tracing_wasm::scope!(self.inner.logging_config());
		membership::select_tier(&self.inner, Tier::from(tier));
	}

	#[wasm_bindgen(getter = navOpen)]
	pub fn nav_open(&self) -> bool {
		self.inner.borrow().nav.menu.is_open()
	}

	#[wasm_bindgen(getter = activeFilter)]
	pub fn active_filter(&self) -> String {
		self.inner.borrow().listing.filter.to_string()
	}

	#[wasm_bindgen(getter = selectedTier)]
	pub fn selected_tier(&self) -> Option<String> {
		self.inner.borrow().membership.tiers.selected().map(|tier| tier.to_string())
	}

	#[wasm_bindgen(getter = eventCount)]
	pub fn event_count(&self) -> u32 {
		self.inner.borrow().listing.visible_records().count() as u32
	}
}

impl Site {
	/// Builds the site with explicit notification and submission backends.
	/// `None` selects the simulated submitter.
	pub(crate) fn with_services(
		settings: SiteSettings,
		notifier: Rc<dyn Notifier>,
		submitter: Option<Rc<dyn Submitter>>,
	) -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
		let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

		let submitter = submitter.unwrap_or_else(|| Rc::new(DelayedSubmitter::new(settings.submit_delay_ms)));

		let inner = SiteInnerHolder::new(SiteInner::new(settings, window, document, notifier, submitter));

		tracing_wasm::scope!(inner.logging_config());

		navigation::install(&inner);
		reveal::install(&inner);
		listing::install(&inner);
		modal::install(&inner);
		membership::install(&inner);
		leveling::install(&inner);

		tracing::info!("site ready");

		Ok(Self { inner })
	}

	#[cfg(test)]
	pub(crate) fn inner(&self) -> &SiteInnerHolder {
		&self.inner
	}
}
