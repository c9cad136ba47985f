use tokio::sync::mpsc;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{XmlHttpRequest, XmlHttpRequestResponseType};

use super::util::{register_events, Holder};

#[derive(Debug)]
pub enum FetchError {
	/// The request never produced a response (offline, CORS, aborted or timed out).
	Network,
	EmptyResponse,
	StatusCode(u16),
	JsValue(JsValue),
}

pub type FetchResult<T> = Result<T, FetchError>;

pub struct FetchRequest {
	url: Url,
	method: String,
	timeout: Option<u32>,
}

pub struct InflightRequest {
	xhr: Holder<XmlHttpRequest>,
	rx: mpsc::Receiver<()>,
}

impl FetchRequest {
	pub fn new(method: &str, url: Url) -> Self {
		Self {
			url,
			method: method.to_string(),
			timeout: None,
		}
	}

	pub fn set_timeout(mut self, timeout: Option<u32>) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn start(&self) -> Result<InflightRequest, JsValue> {
		let req = XmlHttpRequest::new()?;

		req.set_response_type(XmlHttpRequestResponseType::Text);

		if let Some(timeout) = self.timeout {
			req.set_timeout(timeout);
		}

		req.open(&self.method, self.url.as_str())?;

		// loadend fires exactly once, after load, error, abort or timeout.
		let (tx, rx) = mpsc::channel(1);

		let cleanup = register_events!(req, {
			"loadend" => move |_| {
				if tx.try_send(()).is_err() {
					tracing::warn!("fetch event queue full");
				}
			},
		});

		let xhr = Holder::new(req, cleanup);
		xhr.send()?;

		Ok(InflightRequest { xhr, rx })
	}

	pub fn url(&self) -> &Url {
		&self.url
	}
}

impl InflightRequest {
	pub async fn wait_result(&mut self) -> FetchResult<String> {
		self.rx.recv().await;

		let status = self.xhr.status().map_err(FetchError::JsValue)?;
		if status == 0 {
			return Err(FetchError::Network);
		}

		if status >= 400 {
			return Err(FetchError::StatusCode(status));
		}

		self.xhr
			.response_text()
			.map_err(FetchError::JsValue)?
			.filter(|body| !body.is_empty())
			.ok_or(FetchError::EmptyResponse)
	}

	pub fn is_done(&self) -> bool {
		self.xhr.ready_state() == XmlHttpRequest::DONE
	}

	pub fn abort(&self) {
		self.xhr.abort().ok();
	}
}

impl Drop for InflightRequest {
	fn drop(&mut self) {
		if !self.is_done() {
			self.abort();
		}
	}
}
