use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use site_types::catalog::EventRecord;
use site_types::membership::{SignupPayload, SubmitOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::{Document, Element, HtmlElement};

use crate::site::services::{Notifier, Submitter};
use crate::site::settings::SiteSettings;
use crate::site::Site;

mod fetch;
mod leveling;
mod membership;
mod navigation;
mod settings;

wasm_bindgen_test_configure!(run_in_browser);

/// Markup appended to the body for the duration of a test.
struct Fixture {
	root: Element,
}

impl Fixture {
	fn new(html: &str) -> Self {
		let document = document();
		let root = document.create_element("div").unwrap();
		root.set_inner_html(html);
		document.body().unwrap().append_child(&root).unwrap();

		Self { root }
	}

	fn get(&self, selector: &str) -> Element {
		self.root
			.query_selector(selector)
			.unwrap()
			.unwrap_or_else(|| panic!("missing {selector}"))
	}

	fn click(&self, selector: &str) {
		self.get(selector).unchecked_into::<HtmlElement>().click();
	}

	fn count(&self, selector: &str) -> u32 {
		self.root.query_selector_all(selector).unwrap().length()
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.root.remove();
	}
}

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

#[derive(Default, Clone)]
struct RecordingNotifier {
	messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
	fn messages(&self) -> Vec<String> {
		self.messages.borrow().clone()
	}
}

impl Notifier for RecordingNotifier {
	fn notify(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
	}
}

/// Resolves on the next tick with a fixed outcome.
struct ImmediateSubmitter {
	outcome: SubmitOutcome,
	calls: Rc<Cell<u32>>,
}

impl ImmediateSubmitter {
	fn new(outcome: SubmitOutcome) -> Self {
		Self {
			outcome,
			calls: Rc::new(Cell::new(0)),
		}
	}
}

impl Submitter for ImmediateSubmitter {
	fn submit(&self, _payload: SignupPayload) -> LocalBoxFuture<'static, SubmitOutcome> {
		self.calls.set(self.calls.get() + 1);
		let outcome = self.outcome.clone();

		async move {
			gloo_timers::future::TimeoutFuture::new(0).await;
			outcome
		}
		.boxed_local()
	}
}

/// Polls `done` every 50ms for up to three seconds.
async fn wait_for(mut done: impl FnMut() -> bool) -> bool {
	for _ in 0..60 {
		if done() {
			return true;
		}
		gloo_timers::future::TimeoutFuture::new(50).await;
	}

	done()
}

fn site(notifier: &RecordingNotifier) -> Site {
	Site::with_services(SiteSettings::default(), Rc::new(notifier.clone()), None).unwrap()
}

fn record(id: u32, category: &str, title: &str) -> EventRecord {
	EventRecord {
		id,
		title: title.to_string(),
		date: "12 ottobre 2024".to_string(),
		location: "Milano".to_string(),
		category: category.to_string(),
		image: format!("img/{id}.jpg"),
		desc: format!("{title} in breve"),
		details: format!("{title} in dettaglio"),
		map: None,
		rsvp: false,
	}
}

fn sample_events() -> Vec<EventRecord> {
	vec![
		record(1, "torneo", "Torneo di Catan"),
		record(2, "serata", "Serata Giochi"),
		record(3, "torneo", "Torneo di Carcassonne"),
	]
}
