use std::rc::Rc;

use site_types::leveling::DEFAULT_MAX_XP;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use super::RecordingNotifier;
use crate::site::settings::{LoggingLevel, SiteSettings};
use crate::site::Site;

const READY_MARK: &str = "INFO site::site site ready";

fn parse(json: &str) -> Result<SiteSettings, JsValue> {
	SiteSettings::from_js(js_sys::JSON::parse(json).unwrap())
}

#[wasm_bindgen_test]
fn settings_from_js() {
	let settings = parse(r#"{"eventsUrl":"data/events.json","currentXp":300,"loggingLevel":"debug","reportLogsInTimings":true}"#).unwrap();

	assert_eq!(settings.events_url, "data/events.json");
	assert_eq!(settings.current_xp, 300);
	assert_eq!(settings.max_xp, DEFAULT_MAX_XP);
	assert_eq!(settings.logging_level, LoggingLevel::Debug);
	assert_eq!(settings.fetch_timeout_ms, None);
	assert!(settings.report_logs_in_timings);

	assert_eq!(SiteSettings::from_js(JsValue::UNDEFINED).unwrap(), SiteSettings::default());
	assert_eq!(SiteSettings::from_js(JsValue::NULL).unwrap(), SiteSettings::default());

	let err = parse(r#"{"maxXp":"lots"}"#).unwrap_err().as_string().unwrap();
	assert!(err.contains("maxXp"), "{err}");
}

#[wasm_bindgen_test]
fn timings_mirror_logs_when_enabled() {
	let performance = web_sys::window().unwrap().performance().unwrap();
	let notifier = RecordingNotifier::default();

	performance.clear_marks();
	let site = super::site(&notifier);
	assert_eq!(performance.get_entries_by_name(READY_MARK).length(), 0);
	drop(site);

	let settings = SiteSettings {
		report_logs_in_timings: true,
		..SiteSettings::default()
	};
	let _site = Site::with_services(settings, Rc::new(notifier.clone()), None).unwrap();
	assert_eq!(performance.get_entries_by_name(READY_MARK).length(), 1);

	performance.clear_marks();
}
