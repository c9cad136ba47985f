use site_types::leveling::{Leveling, Milestone};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

use super::inner::SiteInnerHolder;
use super::util::{data_attribute, query, query_all, register_events, set_class, set_style, Holder};

const CURRENT_CLASS: &str = "current";

/// The XP progress bar and its milestones.
pub struct LevelingView {
	pub leveling: Leveling,
	pub current: Option<usize>,
	pub milestones: Vec<Milestone>,
	elements: Vec<Element>,
	fill: Option<Element>,
}

impl LevelingView {
	pub fn new(current_xp: u32, max_xp: u32) -> Self {
		Self {
			leveling: Leveling::new(current_xp, max_xp),
			current: None,
			milestones: Vec::new(),
			elements: Vec::new(),
			fill: None,
		}
	}

	fn locate(&mut self) {
		let milestones = &self.milestones;

		for milestone in milestones {
			if let Err(err) = &milestone.range {
				tracing::warn!(level = %milestone.level, "ignoring milestone: {}", err);
			}
		}

		let matches = self.leveling.matching_milestones(milestones);
		if matches.len() > 1 {
			let levels: Vec<&str> = matches.iter().map(|idx| milestones[*idx].level.as_str()).collect();
			tracing::warn!(?levels, "milestone ranges overlap, using the first");
		}

		self.current = self.leveling.current_milestone(milestones);
	}

	fn project(&self) {
		if let Some(fill) = &self.fill {
			set_style(fill, "width", &self.leveling.progress_width());
		}

		for (idx, element) in self.elements.iter().enumerate() {
			set_class(element, CURRENT_CLASS, self.current == Some(idx));
		}
	}
}

pub fn install(holder: &SiteInnerHolder) {
	let document = holder.document();

	let fill = query(&document, ".progress-fill");
	let elements = query_all(&document, ".milestone");
	let milestones: Vec<Milestone> = elements
		.iter()
		.map(|element| {
			Milestone::new(
				data_attribute(element, "level").unwrap_or_default(),
				data_attribute(element, "xp").unwrap_or_default(),
			)
		})
		.collect();

	if fill.is_none() && milestones.is_empty() {
		return;
	}

	let mut listeners: Vec<Holder<EventTarget>> = Vec::new();

	for (element, milestone) in elements.iter().zip(&milestones) {
		let site = holder.downgrade();
		let label = milestone.label();
		let cleanup = register_events!(element, {
			"click" => move |_| {
				if let Some(site) = site.upgrade() {
					site.notifier().notify(&label);
				}
			},
		});
		listeners.push(Holder::new(element.clone().into(), cleanup));
	}

	{
		let mut inner = holder.borrow_mut();
		let view = &mut inner.leveling;
		view.fill = fill;
		view.milestones = milestones;
		view.elements = elements;
		view.locate();
		view.project();

		tracing::debug!(
			percent = view.leveling.progress_percent(),
			current = ?view.current,
			"leveling installed"
		);
	}

	holder.add_listeners(listeners);
}
