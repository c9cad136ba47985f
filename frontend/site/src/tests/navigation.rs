use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use super::{Fixture, RecordingNotifier};

const NAVBAR: &str = r##"
	<nav class="navbar">
		<div class="hamburger" id="navToggle"><span></span></div>
		<ul class="nav-menu" id="navMenu">
			<li><a href="#chi-siamo" class="nav-link">Chi siamo</a></li>
			<li><a href="#" class="nav-link">Home</a></li>
		</ul>
	</nav>
	<section id="chi-siamo"><h2>Chi siamo</h2></section>
"##;

#[wasm_bindgen_test]
fn toggle_opens_and_closes_menu() {
	let fixture = Fixture::new(NAVBAR);
	let notifier = RecordingNotifier::default();
	let site = super::site(&notifier);

	assert!(!site.nav_open());

	fixture.click("#navToggle");
	assert!(site.nav_open());
	assert!(fixture.get("#navToggle").class_list().contains("active"));
	assert!(fixture.get("#navMenu").class_list().contains("active"));

	fixture.click("#navToggle");
	assert!(!site.nav_open());
	assert!(!fixture.get("#navMenu").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn anchor_click_closes_menu() {
	let fixture = Fixture::new(NAVBAR);
	let notifier = RecordingNotifier::default();
	let site = super::site(&notifier);

	fixture.click("#navToggle");
	assert!(site.nav_open());

	fixture.click("a[href=\"#chi-siamo\"]");
	assert!(!site.nav_open());
	assert!(!fixture.get("#navToggle").class_list().contains("active"));

	// a bare "#" has no target but still closes the menu
	fixture.click("#navToggle");
	fixture.click("a[href=\"#\"]");
	assert!(!site.nav_open());
}

#[wasm_bindgen_test]
fn navbar_hides_when_scrolling_down() {
	let fixture = Fixture::new(NAVBAR);
	let notifier = RecordingNotifier::default();
	let site = super::site(&notifier);
	let navbar = fixture.get(".navbar").unchecked_into::<HtmlElement>();
	let transform = || navbar.style().get_property_value("transform").unwrap();

	site.inner().borrow_mut().nav.on_scroll(50.0);
	assert!(!transform().contains("-100%"));

	site.inner().borrow_mut().nav.on_scroll(250.0);
	assert_eq!(transform(), "translateY(-100%)");

	site.inner().borrow_mut().nav.on_scroll(180.0);
	assert!(!transform().contains("-100%"));
}
