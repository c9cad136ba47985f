use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use site_types::membership::{SubmitOutcome, PROCESSING_LABEL, SUCCESS_MESSAGE};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlButtonElement, HtmlInputElement};

use super::{Fixture, ImmediateSubmitter, RecordingNotifier};
use crate::site::services::Submitter;
use crate::site::settings::SiteSettings;
use crate::site::Site;

const SIGNUP_PAGE: &str = r#"
	<div class="tier-card" data-tier="bronze"><button class="tier-btn" data-tier="bronze">Bronze</button></div>
	<div class="tier-card" data-tier="gold"><button class="tier-btn" data-tier="gold">Gold</button></div>
	<form id="membershipForm">
		<input type="radio" name="membershipTier" value="bronze">
		<input type="radio" name="membershipTier" value="gold" checked>
		<input name="fullName" value="Ada Lovelace">
		<input name="email" type="email" value="">
		<input name="password" type="password" value="secret">
		<input name="privacy" type="checkbox" checked>
		<button type="submit" id="submitBtn">Join Now</button>
	</form>
"#;

fn input(fixture: &Fixture, selector: &str) -> HtmlInputElement {
	fixture.get(selector).unchecked_into()
}

fn submit(fixture: &Fixture) {
	let event = Event::new("submit").unwrap();
	fixture.get("#membershipForm").dispatch_event(&event).unwrap();
}

// Signup flows share one form, so they run in a single test.
#[wasm_bindgen_test]
async fn signup_flow() {
	let fixture = Fixture::new(SIGNUP_PAGE);
	let notifier = RecordingNotifier::default();
	let submitter = ImmediateSubmitter::new(SubmitOutcome::Accepted);
	let calls = submitter.calls.clone();
	let submitter: Rc<dyn Submitter> = Rc::new(submitter);

	let site = Site::with_services(SiteSettings::default(), Rc::new(notifier.clone()), Some(submitter)).unwrap();
	let button: HtmlButtonElement = fixture.get("#submitBtn").unchecked_into();

	// the checked radio seeds the selection
	assert_eq!(site.selected_tier().as_deref(), Some("gold"));

	let gold = input(&fixture, "input[value=\"gold\"]");
	gold.set_checked(false);
	submit(&fixture);
	assert_eq!(notifier.messages(), vec!["Please select a membership tier.".to_string()]);
	gold.set_checked(true);
	assert!(fixture.get(".tier-btn[data-tier=\"gold\"]").class_list().contains("selected"));
	assert!(fixture.get(".tier-card[data-tier=\"gold\"]").class_list().contains("selected"));

	fixture.click(".tier-btn[data-tier=\"bronze\"]");
	assert_eq!(site.selected_tier().as_deref(), Some("bronze"));
	assert!(input(&fixture, "input[value=\"bronze\"]").checked());
	assert!(!input(&fixture, "input[value=\"gold\"]").checked());
	assert!(!fixture.get(".tier-card[data-tier=\"gold\"]").class_list().contains("selected"));

	submit(&fixture);
	assert_eq!(notifier.messages().last().map(String::as_str), Some("Please fill in all required fields."));
	assert_eq!(calls.get(), 0);
	assert_eq!(button.text_content().as_deref(), Some("Join Now"));
	assert!(!button.disabled());

	input(&fixture, "input[name=\"email\"]").set_value("ada@example.com");
	submit(&fixture);
	assert_eq!(calls.get(), 1);
	assert_eq!(button.text_content().as_deref(), Some(PROCESSING_LABEL));
	assert!(button.disabled());

	// a second submit while pending is ignored
	submit(&fixture);
	assert_eq!(calls.get(), 1);

	TimeoutFuture::new(50).await;

	assert_eq!(notifier.messages().last().map(String::as_str), Some(SUCCESS_MESSAGE));
	assert_eq!(button.text_content().as_deref(), Some("Join Now"));
	assert!(!button.disabled());
	assert_eq!(input(&fixture, "input[name=\"email\"]").value(), "");
	assert_eq!(input(&fixture, "input[name=\"fullName\"]").value(), "Ada Lovelace");
	// the reset restores the default radio and the selection follows it
	assert_eq!(site.selected_tier().as_deref(), Some("gold"));

	drop(site);

	let submitter: Rc<dyn Submitter> = Rc::new(ImmediateSubmitter::new(SubmitOutcome::Rejected(
		"Server unavailable".to_string(),
	)));
	let notifier = RecordingNotifier::default();
	let _site = Site::with_services(SiteSettings::default(), Rc::new(notifier.clone()), Some(submitter)).unwrap();

	input(&fixture, "input[name=\"email\"]").set_value("ada@example.com");
	submit(&fixture);
	TimeoutFuture::new(50).await;

	assert_eq!(notifier.messages(), vec!["Server unavailable".to_string()]);
	assert_eq!(button.text_content().as_deref(), Some("Join Now"));
	assert!(!button.disabled());
	assert_eq!(input(&fixture, "input[name=\"email\"]").value(), "ada@example.com");
}
