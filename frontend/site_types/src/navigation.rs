/// Scroll offset (px) below which the navbar always stays visible.
pub const NAVBAR_HIDE_THRESHOLD: f64 = 100.0;

/// Delay between consecutive reveals in one observer batch.
pub const REVEAL_STAGGER_MS: u32 = 200;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline style applied to an element that has not been revealed yet.
pub const REVEAL_HIDDEN: RevealStyle = RevealStyle {
	opacity: "0",
	transform: "translateY(50px)",
};

pub const REVEAL_SHOWN: RevealStyle = RevealStyle {
	opacity: "1",
	transform: "translateY(0) rotateX(0)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
	pub opacity: &'static str,
	pub transform: &'static str,
}

pub fn reveal_delay(index: usize) -> u32 {
	u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(REVEAL_STAGGER_MS)
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
	open: bool,
}

impl NavMenu {
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Returns true if the menu was open.
	pub fn close(&mut self) -> bool {
		std::mem::replace(&mut self.open, false)
	}

	pub fn is_open(&self) -> bool {
		self.open
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVisibility {
	Shown,
	Hidden,
}

impl NavbarVisibility {
	pub fn transform(self) -> &'static str {
		match self {
			Self::Shown => "translateY(0)",
			Self::Hidden => "translateY(-100%)",
		}
	}
}

/// Remembers the previous scroll offset to decide whether the navbar slides away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
	last_offset: f64,
	threshold: f64,
}

impl Default for ScrollTracker {
	fn default() -> Self {
		Self::new(NAVBAR_HIDE_THRESHOLD)
	}
}

impl ScrollTracker {
	pub fn new(threshold: f64) -> Self {
		Self {
			last_offset: 0.0,
			threshold,
		}
	}

	pub fn observe(&mut self, offset: f64) -> NavbarVisibility {
		let visibility = if offset > self.last_offset && offset > self.threshold {
			NavbarVisibility::Hidden
		} else {
			NavbarVisibility::Shown
		};

		self.last_offset = offset;
		visibility
	}
}
