// Console logging for tracing, adapted from https://github.com/old-storyai/tracing-wasm
// to support per-site logging levels.

use core::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::*;
use tracing_subscriber::registry::*;
use wasm_bindgen::JsValue;
use web_sys::{console, window};

fn mark(name: &str) {
	if let Some(performance) = window().and_then(|w| w.performance()) {
		performance.mark(name).ok();
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct ConsoleLayerConfig {
	use_console_color: bool,
	report_logs_in_timings: bool,
	max_level: tracing::Level,
}

impl ConsoleLayerConfig {
	pub fn new(max_level: tracing::Level) -> Self {
		Self {
			max_level,
			..Default::default()
		}
	}

	/// Also mirror every log line as a `performance.mark`.
	pub fn with_timings(mut self, report_logs_in_timings: bool) -> Self {
		self.report_logs_in_timings = report_logs_in_timings;
		self
	}
}

impl Default for ConsoleLayerConfig {
	fn default() -> Self {
		Self {
			use_console_color: true,
			report_logs_in_timings: false,
			max_level: tracing::Level::INFO,
		}
	}
}

/// A [Layer] that prints events to the browser console, prefixed with the span they were emitted in.
#[derive(Clone, Default)]
pub struct ConsoleLayer {
	config: ConsoleLayerConfig,
}

impl ConsoleLayer {
	pub fn new(config: ConsoleLayerConfig) -> Self {
		Self { config }
	}
}

fn level_style(level: &tracing::Level) -> &'static str {
	match *level {
		tracing::Level::TRACE => "color: dodgerblue; background: #444",
		tracing::Level::DEBUG => "color: lawngreen; background: #444",
		tracing::Level::INFO => "color: whitesmoke; background: #444",
		tracing::Level::WARN => "color: orange; background: #444",
		tracing::Level::ERROR => "color: red; background: #444",
	}
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for ConsoleLayer {
	fn enabled(&self, metadata: &tracing::Metadata<'_>, _: Context<'_, S>) -> bool {
		metadata.level() <= &self.config.max_level
	}

	fn on_new_span(&self, attrs: &tracing::span::Attributes<'_>, id: &tracing::Id, ctx: Context<'_, S>) {
		let mut recorder = StringRecorder::default();
		attrs.record(&mut recorder);

		if let Some(span_ref) = ctx.span(id) {
			span_ref.extensions_mut().insert(recorder);
		}
	}

	fn on_record(&self, id: &tracing::Id, values: &tracing::span::Record<'_>, ctx: Context<'_, S>) {
		if let Some(span_ref) = ctx.span(id) {
			if let Some(recorder) = span_ref.extensions_mut().get_mut::<StringRecorder>() {
				values.record(recorder);
			}
		}
	}

	fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
		let mut recorder = StringRecorder::default();
		event.record(&mut recorder);

		let meta = event.metadata();
		let level = meta.level();

		let scope = ctx
			.event_scope(event)
			.map(|scope| {
				scope
					.from_root()
					.map(|span| span.name())
					.collect::<Vec<_>>()
					.join(":")
			})
			.unwrap_or_default();

		let origin = meta.module_path().unwrap_or("...");

		if self.config.use_console_color {
			let console_fn = match *level {
				tracing::Level::TRACE | tracing::Level::DEBUG => console::debug_4,
				tracing::Level::INFO => console::info_4,
				tracing::Level::WARN => console::warn_4,
				tracing::Level::ERROR => console::error_4,
			};

			console_fn(
				&format!("%c{}%c {} {}%c{}", level, origin, scope, recorder).into(),
				&level_style(level).into(),
				&"color: gray; font-style: italic".into(),
				&"color: inherit".into(),
			);
		} else {
			let console_fn = match *level {
				tracing::Level::TRACE | tracing::Level::DEBUG => console::debug_1,
				tracing::Level::INFO => console::info_1,
				tracing::Level::WARN => console::warn_1,
				tracing::Level::ERROR => console::error_1,
			};

			console_fn(&JsValue::from_str(&format!("{} {} {}{}", level, origin, scope, recorder)));
		}

		if self.config.report_logs_in_timings {
			mark(&format!("{} {}{}", level, origin, recorder));
		}
	}
}

/// Install the console layer as the global default subscriber.
pub fn set_as_global_default() {
	if tracing::subscriber::set_global_default(registry(ConsoleLayerConfig::default())).is_err() {
		console::warn_1(&"a global tracing subscriber is already installed".into());
	}
}

pub type LoggingInstance = Layered<ConsoleLayer, Registry>;

pub fn registry(config: ConsoleLayerConfig) -> LoggingInstance {
	Registry::default().with(ConsoleLayer::new(config))
}

pub fn set_default(config: ConsoleLayerConfig) -> tracing_core::dispatcher::DefaultGuard {
	tracing::subscriber::set_default(registry(config))
}

#[derive(Default)]
struct StringRecorder {
	display: String,
	is_following_args: bool,
}

impl Visit for StringRecorder {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			if self.display.is_empty() {
				self.display = format!("{:?}", value);
			} else {
				self.display = format!("{:?}\n{}", value, self.display);
			}
		} else {
			let separator = if self.is_following_args { "\n" } else { " " };
			self.is_following_args = true;
			write!(self.display, "{}{} = {:?};", separator, field.name(), value).ok();
		}
	}
}

impl fmt::Display for StringRecorder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.display.is_empty() {
			Ok(())
		} else {
			write!(f, " {}", self.display)
		}
	}
}

/// Scope the rest of the block to the given console configuration.
macro_rules! scope {
	($config:expr) => {
		let __guard = crate::tracing_wasm::set_default($config);
	};
}

pub(crate) use scope;
