use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use site_types::membership::{SignupPayload, SubmitOutcome};

/// Shows short acknowledgements to the user.
pub trait Notifier {
	fn notify(&self, message: &str);
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
	fn notify(&self, message: &str) {
		let Some(window) = web_sys::window() else {
			return;
		};

		if let Err(err) = window.alert_with_message(message) {
			tracing::warn!("failed to show alert: {:?}", err);
		}
	}
}

/// Where a validated signup goes.
pub trait Submitter {
	fn submit(&self, payload: SignupPayload) -> LocalBoxFuture<'static, SubmitOutcome>;
}

/// Accepts every signup after a fixed delay; stands in for a real backend.
pub struct DelayedSubmitter {
	delay_ms: u32,
}

impl DelayedSubmitter {
	pub fn new(delay_ms: u32) -> Self {
		Self { delay_ms }
	}
}

impl Submitter for DelayedSubmitter {
	fn submit(&self, payload: SignupPayload) -> LocalBoxFuture<'static, SubmitOutcome> {
		let delay_ms = self.delay_ms;

		async move {
			tracing::debug!(
				tier = ?payload.tier().map(|tier| tier.to_string()),
				fields = payload.iter().count(),
				"simulating signup for {}ms",
				delay_ms
			);
			TimeoutFuture::new(delay_ms).await;
			SubmitOutcome::Accepted
		}
		.boxed_local()
	}
}
