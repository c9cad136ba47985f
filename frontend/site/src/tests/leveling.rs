use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use super::{Fixture, RecordingNotifier};
use crate::site::settings::SiteSettings;
use crate::site::Site;

const PROGRESS: &str = r#"
	<div class="progress-bar"><div class="progress-fill"></div></div>
	<div class="milestone" data-level="bronze" data-xp="0-999">Bronze</div>
	<div class="milestone" data-level="silver" data-xp="1,000-2,499">Silver</div>
	<div class="milestone" data-level="gold" data-xp="2,500-4,999">Gold</div>
	<div class="milestone" data-level="platinum" data-xp="5,000+">Platinum</div>
"#;

fn fill_width(fixture: &Fixture) -> String {
	fixture
		.get(".progress-fill")
		.unchecked_into::<HtmlElement>()
		.style()
		.get_property_value("width")
		.unwrap()
}

#[wasm_bindgen_test]
fn default_xp_highlights_silver() {
	let fixture = Fixture::new(PROGRESS);
	let notifier = RecordingNotifier::default();
	let _site = super::site(&notifier);

	assert!(fill_width(&fixture).starts_with("16.66"), "{}", fill_width(&fixture));
	assert_eq!(fixture.count(".milestone.current"), 1);
	assert!(fixture.get("[data-level=\"silver\"]").class_list().contains("current"));
}

#[wasm_bindgen_test]
fn open_ended_range_matches_high_xp() {
	let fixture = Fixture::new(PROGRESS);
	let notifier = RecordingNotifier::default();
	let settings = SiteSettings {
		current_xp: 9000,
		..SiteSettings::default()
	};
	let _site = Site::with_services(settings, Rc::new(notifier.clone()), None).unwrap();

	assert_eq!(fill_width(&fixture), "120%");
	assert_eq!(fixture.count(".milestone.current"), 1);
	assert!(fixture.get("[data-level=\"platinum\"]").class_list().contains("current"));
}

#[wasm_bindgen_test]
fn milestone_click_announces_label() {
	let fixture = Fixture::new(PROGRESS);
	let notifier = RecordingNotifier::default();
	let _site = super::site(&notifier);

	fixture.click("[data-level=\"gold\"]");
	fixture.click("[data-level=\"platinum\"]");

	assert_eq!(
		notifier.messages(),
		vec!["Gold Level: 2,500-4,999 XP".to_string(), "Platinum Level: 5,000+ XP".to_string()]
	);
}
