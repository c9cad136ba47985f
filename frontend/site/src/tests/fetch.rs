use std::rc::Rc;

use site_types::markup::{LISTING_ERROR, NEXT_EVENT_ERROR};
use url::Url;
use wasm_bindgen_test::*;

use super::{document, wait_for, Fixture, RecordingNotifier};
use crate::site::errors::ErrorCode;
use crate::site::fetch::FetchRequest;
use crate::site::listing::fetch_events;
use crate::site::settings::SiteSettings;
use crate::site::Site;

const MALFORMED_EVENTS: &str = r#"data:application/json,[{"id":"one"}]"#;

fn request(path: &str) -> FetchRequest {
	let base = document().base_uri().unwrap().unwrap();
	FetchRequest::new("GET", Url::parse(&base).unwrap().join(path).unwrap())
}

#[wasm_bindgen_test]
async fn decodes_events_body() {
	let records = fetch_events(request(
		r#"data:application/json,[{"id":4,"title":"Risiko","date":"oggi","location":"Sala","type":"torneo","image":"r.jpg","desc":"d","details":"x"}]"#,
	))
	.await
	.unwrap();

	assert_eq!(records.len(), 1);
	assert_eq!(records[0].id, 4);
	assert_eq!(records[0].category, "torneo");
	assert_eq!(records[0].map, None);
}

#[wasm_bindgen_test]
async fn missing_file_is_a_status_error() {
	let err = fetch_events(request("does-not-exist.json")).await.unwrap_err();

	assert_eq!(err.code, ErrorCode::Network);
	assert!(err.message.contains("status code"), "{}", err);
}

#[wasm_bindgen_test]
async fn unreachable_host_is_a_network_error() {
	let err = fetch_events(request("http://127.0.0.1:1/events.json")).await.unwrap_err();

	assert_eq!(err.code, ErrorCode::Network);
	assert_eq!(err.message, "request failed before a response arrived");
}

#[wasm_bindgen_test]
async fn empty_body_is_rejected() {
	let err = fetch_events(request("data:application/json,")).await.unwrap_err();

	assert_eq!(err.code, ErrorCode::Network);
	assert_eq!(err.message, "response was empty");
}

#[wasm_bindgen_test]
async fn malformed_body_reports_json_path() {
	let err = fetch_events(request(MALFORMED_EVENTS)).await.unwrap_err();

	assert_eq!(err.code, ErrorCode::Decode);
	assert!(err.message.contains("[0].id"), "{}", err);
}

async fn assert_degraded(events_url: &str) {
	let fixture = Fixture::new(r#"<div id="events-container"></div><div id="next-event-card"></div>"#);
	let notifier = RecordingNotifier::default();
	let settings = SiteSettings {
		events_url: events_url.to_string(),
		..SiteSettings::default()
	};
	let site = Site::with_services(settings, Rc::new(notifier.clone()), None).unwrap();

	let listing = fixture.get("#events-container");
	let next = fixture.get("#next-event-card");
	assert!(
		wait_for(|| listing.inner_html() == LISTING_ERROR && next.inner_html() == NEXT_EVENT_ERROR).await,
		"{events_url} did not degrade: {:?} / {:?}",
		listing.inner_html(),
		next.inner_html()
	);

	assert_eq!(site.event_count(), 0);
	assert!(notifier.messages().is_empty());
}

#[wasm_bindgen_test]
async fn failed_loads_degrade_both_views() {
	assert_degraded("does-not-exist.json").await;
	assert_degraded(MALFORMED_EVENTS).await;
}
