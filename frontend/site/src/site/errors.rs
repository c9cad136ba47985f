use std::fmt;

use site_types::catalog::DecodeError;
use wasm_bindgen::prelude::*;

use super::fetch::{FetchError, FetchResult};

pub type JsResult<T> = Result<T, JsValue>;

#[derive(Debug, Clone)]
pub struct SiteError {
	pub code: ErrorCode,
	pub source: JsValue,
	pub message: String,
}

impl SiteError {
	pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			code,
			source: JsValue::NULL,
			message: message.into(),
		}
	}

	pub fn with_source(mut self, source: JsValue) -> Self {
		self.source = source;
		self
	}
}

impl fmt::Display for SiteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}: {}", self.code, self.message)?;
		if !self.source.is_null() {
			write!(f, " ({:?})", self.source)?;
		}
		Ok(())
	}
}

impl From<DecodeError> for SiteError {
	fn from(err: DecodeError) -> Self {
		Self::new(ErrorCode::Decode, err.to_string())
	}
}

impl From<url::ParseError> for SiteError {
	fn from(err: url::ParseError) -> Self {
		Self::new(ErrorCode::Other, format!("invalid url: {}", err))
	}
}

pub trait SiteErrorExt<T>
where
	Self: Sized,
{
	fn network_error(self, message: &'static str) -> Result<T, SiteError> {
		self.convert_error(ErrorCode::Network, message)
	}
	fn other_error(self, message: &'static str) -> Result<T, SiteError> {
		self.convert_error(ErrorCode::Other, message)
	}
	fn convert_error(self, code: ErrorCode, message: &'static str) -> Result<T, SiteError>;
}

impl<T> SiteErrorExt<T> for JsResult<T> {
	fn convert_error(self, code: ErrorCode, message: &'static str) -> Result<T, SiteError> {
		self.map_err(|e| SiteError::new(code, message).with_source(e))
	}
}

pub trait SiteErrorExtFetch<T> {
	fn into_site_error(self) -> Result<T, SiteError>;
}

impl<T> SiteErrorExtFetch<T> for FetchResult<T> {
	fn into_site_error(self) -> Result<T, SiteError> {
		self.map_err(|err| match err {
			FetchError::Network => SiteError::new(ErrorCode::Network, "request failed before a response arrived"),
			FetchError::EmptyResponse => SiteError::new(ErrorCode::Network, "response was empty"),
			FetchError::StatusCode(status) => SiteError::new(ErrorCode::Network, format!("server returned status code {}", status)),
			FetchError::JsValue(e) => SiteError::new(ErrorCode::Network, "Javascript Error").with_source(e),
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
	Network,
	Decode,
	Other,
}
