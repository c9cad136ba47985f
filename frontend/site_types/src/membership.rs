use std::collections::BTreeMap;
use std::fmt;

pub const TIER_FIELD: &str = "membershipTier";
pub const REQUIRED_FIELDS: [&str; 3] = ["fullName", "email", "password"];
pub const PRIVACY_FIELD: &str = "privacy";

pub const PROCESSING_LABEL: &str = "Processing...";
pub const SUCCESS_MESSAGE: &str = "Thank you for joining TablHero! Your account has been created successfully.";

/// A membership level, identified by the `data-tier` / radio value shared by its views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tier(String);

impl Tier {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Tier {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<String> for Tier {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl fmt::Display for Tier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSelection {
	selected: Option<Tier>,
}

impl TierSelection {
	/// Returns true if the selection changed.
	pub fn select(&mut self, tier: impl Into<Tier>) -> bool {
		let tier = tier.into();
		if self.selected.as_ref() == Some(&tier) {
			return false;
		}

		self.selected = Some(tier);
		true
	}

	pub fn clear(&mut self) {
		self.selected = None;
	}

	pub fn selected(&self) -> Option<&Tier> {
		self.selected.as_ref()
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_ref().is_some_and(|tier| tier.as_str() == id)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
	#[error("Please select a membership tier.")]
	MissingTier,
	#[error("Please fill in all required fields.")]
	MissingRequiredFields,
	#[error("Please accept the Privacy Policy and Terms of Service.")]
	TermsNotAccepted,
}

/// Form fields captured at submit time. Later duplicates of a key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupPayload {
	fields: BTreeMap<String, String>,
}

impl SignupPayload {
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.fields.get(key).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn tier(&self) -> Option<Tier> {
		self.filled(TIER_FIELD).map(Tier::from)
	}

	fn filled(&self, key: &str) -> Option<&str> {
		self.get(key).filter(|value| !value.is_empty())
	}

	/// Checks run in order; the first failure is reported.
	pub fn validate(&self) -> Result<(), SignupError> {
		if self.filled(TIER_FIELD).is_none() {
			return Err(SignupError::MissingTier);
		}

		if REQUIRED_FIELDS.iter().any(|field| self.filled(field).is_none()) {
			return Err(SignupError::MissingRequiredFields);
		}

		if self.filled(PRIVACY_FIELD).is_none() {
			return Err(SignupError::TermsNotAccepted);
		}

		Ok(())
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SignupPayload {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut payload = Self::default();
		for (key, value) in iter {
			payload.insert(key, value);
		}
		payload
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Pending,
}

impl SubmissionState {
	/// Moves to `Pending`; false if a submission is already in flight.
	pub fn begin(&mut self) -> bool {
		match self {
			Self::Pending => false,
			Self::Idle => {
				*self = Self::Pending;
				true
			}
		}
	}

	pub fn finish(&mut self) {
		*self = Self::Idle;
	}

	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Accepted,
	Rejected(String),
}

impl SubmitOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted)
	}

	/// What the user is told once the submission settles.
	pub fn message(&self) -> &str {
		match self {
			Self::Accepted => SUCCESS_MESSAGE,
			Self::Rejected(reason) => reason,
		}
	}
}
