use std::ops::Deref;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

type Cleanup = Box<dyn FnOnce(&web_sys::EventTarget)>;

/// A DOM object together with the listeners registered on it.
/// The listeners are removed when the holder is dropped.
pub struct Holder<T: JsCast> {
	inner: T,
	cleanup: Option<Cleanup>,
}

impl<T: JsCast> Holder<T> {
	pub fn new(inner: T, cleanup: Cleanup) -> Self {
		Self {
			inner,
			cleanup: Some(cleanup),
		}
	}
}

impl<T: JsCast> Deref for Holder<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}

impl<T: JsCast> Drop for Holder<T> {
	fn drop(&mut self) {
		if let Some(cleanup) = self.cleanup.take() {
			cleanup(self.inner.unchecked_ref());
		}
	}
}

macro_rules! register_events {
    ($ob:ident, {
        $(
            $($evt:literal)|+ => $body:expr
        ),* $(,)?
    }) => {
        {
            let mut handlers = Vec::new();
            $(
                let cb = Closure::<dyn FnMut(web_sys::Event)>::new($body);
                $(
                    if let Err(err) = $ob.add_event_listener_with_callback($evt, cb.as_ref().unchecked_ref()) {
                        tracing::warn!("failed to register {} listener: {:?}", $evt, err);
                    }
                )+
                handlers.push((vec![$($evt),+], cb));
            )*

            Box::new(move |val: &web_sys::EventTarget| {
                handlers.drain(..).for_each(|(evts, cb)| {
                    for evt in evts {
                        val.remove_event_listener_with_callback(evt, cb.as_ref().unchecked_ref()).ok();
                    }
                });
            }) as Box<dyn FnOnce(&web_sys::EventTarget)>
        }
    };
}

pub(super) use register_events;

pub fn query(document: &Document, selector: &str) -> Option<Element> {
	document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let list = match document.query_selector_all(selector) {
		Ok(list) => list,
		Err(err) => {
			tracing::warn!("invalid selector {}: {:?}", selector, err);
			return Vec::new();
		}
	};

	(0..list.length())
		.filter_map(|idx| list.item(idx))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

pub fn set_class(element: &Element, class: &str, enabled: bool) {
	if let Err(err) = element.class_list().toggle_with_force(class, enabled) {
		tracing::warn!("failed to toggle class {}: {:?}", class, err);
	}
}

pub fn set_style(element: &Element, property: &str, value: &str) {
	let Some(element) = element.dyn_ref::<HtmlElement>() else {
		return;
	};

	if let Err(err) = element.style().set_property(property, value) {
		tracing::warn!("failed to set {}: {:?}", property, err);
	}
}

pub fn data_attribute(element: &Element, name: &str) -> Option<String> {
	element.get_attribute(&format!("data-{name}"))
}
