use std::str::FromStr;

pub const DEFAULT_CURRENT_XP: u32 = 1250;
pub const DEFAULT_MAX_XP: u32 = 7500;

/// Inclusive XP bounds of a milestone. `max` is `None` for open-ended ranges (`7,500+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpRange {
	pub min: u32,
	pub max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XpRangeError {
	#[error("missing '-' separator in {0:?}")]
	MissingSeparator(String),
	#[error("invalid xp value {0:?}")]
	InvalidNumber(String),
	#[error("range starts at {min} but ends at {max}")]
	Inverted { min: u32, max: u32 },
}

fn parse_xp(value: &str) -> Result<u32, XpRangeError> {
	let value = value.trim();
	value.parse().map_err(|_| XpRangeError::InvalidNumber(value.to_string()))
}

impl FromStr for XpRange {
	type Err = XpRangeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let cleaned = s.replace(',', "");
		let cleaned = cleaned.trim();

		if let Some(min) = cleaned.strip_suffix('+') {
			return Ok(Self {
				min: parse_xp(min)?,
				max: None,
			});
		}

		let (min, max) = cleaned
			.split_once('-')
			.ok_or_else(|| XpRangeError::MissingSeparator(s.to_string()))?;
		let (min, max) = (parse_xp(min)?, parse_xp(max)?);

		if min > max {
			return Err(XpRangeError::Inverted { min, max });
		}

		Ok(Self { min, max: Some(max) })
	}
}

impl XpRange {
	pub fn contains(&self, xp: u32) -> bool {
		xp >= self.min && self.max.map_or(true, |max| xp <= max)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
	pub level: String,
	/// The range as written in the markup, shown back to the user.
	pub xp_text: String,
	pub range: Result<XpRange, XpRangeError>,
}

impl Milestone {
	pub fn new(level: impl Into<String>, xp_text: impl Into<String>) -> Self {
		let xp_text = xp_text.into();
		let range = xp_text.parse();
		Self {
			level: level.into(),
			xp_text,
			range,
		}
	}

	pub fn contains(&self, xp: u32) -> bool {
		self.range.as_ref().is_ok_and(|range| range.contains(xp))
	}

	pub fn label(&self) -> String {
		format!("{} Level: {} XP", capitalize(&self.level), self.xp_text)
	}
}

pub fn capitalize(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leveling {
	pub current: u32,
	pub max: u32,
}

impl Default for Leveling {
	fn default() -> Self {
		Self::new(DEFAULT_CURRENT_XP, DEFAULT_MAX_XP)
	}
}

impl Leveling {
	pub fn new(current: u32, max: u32) -> Self {
		Self { current, max }
	}

	/// Not clamped: values above `max` give more than 100.
	pub fn progress_percent(&self) -> f64 {
		if self.max == 0 {
			return 0.0;
		}

		100.0 * f64::from(self.current) / f64::from(self.max)
	}

	pub fn progress_width(&self) -> String {
		format!("{}%", self.progress_percent())
	}

	/// Indices of every milestone whose range contains the current XP.
	pub fn matching_milestones(&self, milestones: &[Milestone]) -> Vec<usize> {
		milestones
			.iter()
			.enumerate()
			.filter(|(_, milestone)| milestone.contains(self.current))
			.map(|(idx, _)| idx)
			.collect()
	}

	/// First match in document order wins when ranges overlap.
	pub fn current_milestone(&self, milestones: &[Milestone]) -> Option<usize> {
		milestones.iter().position(|milestone| milestone.contains(self.current))
	}
}
