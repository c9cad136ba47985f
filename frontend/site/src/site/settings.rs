use serde::Deserialize;
use site_types::leveling::{DEFAULT_CURRENT_XP, DEFAULT_MAX_XP};
use site_types::navigation::NAVBAR_HIDE_THRESHOLD;
use wasm_bindgen::JsValue;

#[derive(tsify::Tsify, Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
	#[default]
	Info,
	Trace,
	Debug,
	Warn,
	Error,
}

impl LoggingLevel {
	pub fn level(self) -> tracing::Level {
		match self {
			Self::Trace => tracing::Level::TRACE,
			Self::Debug => tracing::Level::DEBUG,
			Self::Info => tracing::Level::INFO,
			Self::Warn => tracing::Level::WARN,
			Self::Error => tracing::Level::ERROR,
		}
	}
}

#[derive(tsify::Tsify, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Settings passed to `new Site(...)`. Every field is optional.
pub struct SiteSettings {
	/// Where the event list is fetched from, relative to the document.
	/// Defaults to `events.json`.
	#[tsify(optional)]
	pub events_url: String,

	/// Experience shown on the leveling bar. Defaults to 1250.
	#[tsify(optional)]
	pub current_xp: u32,

	/// Experience that fills the leveling bar. Defaults to 7500.
	#[tsify(optional)]
	pub max_xp: u32,

	/// How long the simulated signup takes. Defaults to 2000ms.
	#[tsify(optional)]
	pub submit_delay_ms: u32,

	/// The navbar only hides once scrolled past this offset. Defaults to 100px.
	#[tsify(optional)]
	pub navbar_hide_threshold: f64,

	/// Abort the event request after this long. No timeout by default.
	#[tsify(optional)]
	pub fetch_timeout_ms: Option<u32>,

	#[tsify(optional)]
	pub logging_level: LoggingLevel,

	/// Mirror log lines as `performance.mark` entries. Off by default.
	#[tsify(optional)]
	pub report_logs_in_timings: bool,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			events_url: "events.json".to_string(),
			current_xp: DEFAULT_CURRENT_XP,
			max_xp: DEFAULT_MAX_XP,
			submit_delay_ms: 2000,
			navbar_hide_threshold: NAVBAR_HIDE_THRESHOLD,
			fetch_timeout_ms: None,
			logging_level: LoggingLevel::default(),
			report_logs_in_timings: false,
		}
	}
}

impl SiteSettings {
	/// `undefined` and `null` select the defaults.
	pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
		if value.is_undefined() || value.is_null() {
			return Ok(Self::default());
		}

		let deserializer = serde_wasm_bindgen::Deserializer::from(value);

		serde_path_to_error::deserialize(deserializer).map_err(|err| {
			JsValue::from_str(&format!("failed to deserialize settings ({}): {}", err.path(), err.inner()))
		})
	}
}
