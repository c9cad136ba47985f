use gloo_timers::future::TimeoutFuture;
use site_types::navigation::{reveal_delay, RevealStyle, REVEAL_HIDDEN, REVEAL_ROOT_MARGIN, REVEAL_SHOWN, REVEAL_THRESHOLD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::inner::SiteInnerHolder;
use super::util::{query_all, set_style};

const REVEAL_SELECTOR: &str = ".warm-glow, .section-title";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Fades elements in the first time they scroll into view.
pub struct RevealObserver {
	observer: IntersectionObserver,
	_callback: ObserverCallback,
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

fn apply(element: &Element, style: &RevealStyle) {
	set_style(element, "opacity", style.opacity);
	set_style(element, "transform", style.transform);
}

fn on_entries(entries: js_sys::Array, observer: IntersectionObserver) {
	for (index, entry) in entries.iter().enumerate() {
		let entry: IntersectionObserverEntry = entry.unchecked_into();
		if !entry.is_intersecting() {
			continue;
		}

		let target = entry.target();
		observer.unobserve(&target);

		let delay = reveal_delay(index);
		spawn_local(async move {
			TimeoutFuture::new(delay).await;
			apply(&target, &REVEAL_SHOWN);
		});
	}
}

pub fn install(holder: &SiteInnerHolder) {
	let targets = query_all(&holder.document(), REVEAL_SELECTOR);
	if targets.is_empty() {
		return;
	}

	let callback: ObserverCallback = Closure::new(on_entries);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	options.set_root_margin(REVEAL_ROOT_MARGIN);

	let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
		Ok(observer) => observer,
		Err(err) => {
			// targets have not been hidden yet, so they stay visible
			tracing::warn!("intersection observer unavailable: {:?}", err);
			return;
		}
	};

	for target in &targets {
		apply(target, &REVEAL_HIDDEN);
		observer.observe(target);
	}

	tracing::debug!(count = targets.len(), "reveal animations installed");

	holder.borrow_mut().reveal = Some(RevealObserver {
		observer,
		_callback: callback,
	});
}
