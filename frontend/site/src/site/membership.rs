use site_types::membership::{SignupPayload, SubmissionState, SubmitOutcome, Tier, TierSelection, PROCESSING_LABEL, TIER_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, EventTarget, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::errors::JsResult;
use super::inner::SiteInnerHolder;
use super::util::{data_attribute, query_all, register_events, set_class, Holder};
use crate::tracing_wasm;

const SELECTED_CLASS: &str = "selected";

/// Tier pickers and the signup form.
#[derive(Default)]
pub struct Membership {
	pub tiers: TierSelection,
	pub submission: SubmissionState,
	buttons: Vec<Element>,
	cards: Vec<Element>,
	radios: Vec<HtmlInputElement>,
	form: Option<HtmlFormElement>,
	submit: Option<Element>,
}

impl Membership {
	fn project_tiers(&self) {
		for element in self.buttons.iter().chain(&self.cards) {
			let selected = data_attribute(element, "tier").is_some_and(|tier| self.tiers.is_selected(&tier));
			set_class(element, SELECTED_CLASS, selected);
		}

		for radio in &self.radios {
			radio.set_checked(self.tiers.is_selected(&radio.value()));
		}
	}

	pub fn select(&mut self, tier: Tier) {
		if self.tiers.select(tier) {
			tracing::debug!(tier = ?self.tiers.selected(), "tier selected");
		}
		self.project_tiers();
	}

	/// Adopts whichever radio the markup (or a form reset) leaves checked.
	fn sync_from_radios(&mut self) {
		match self.radios.iter().find(|radio| radio.checked()) {
			Some(radio) => {
				self.tiers.select(radio.value());
			}
			None => self.tiers.clear(),
		}
		self.project_tiers();
	}
}

pub(crate) fn select_tier(holder: &SiteInnerHolder, tier: Tier) {
	holder.borrow_mut().membership.select(tier);
}

fn read_payload(form: &HtmlFormElement) -> JsResult<SignupPayload> {
	let data = FormData::new_with_form(form)?;
	let mut payload = SignupPayload::default();

	let Some(entries) = js_sys::try_iter(&data)? else {
		return Ok(payload);
	};

	for entry in entries {
		let entry: js_sys::Array = entry?.dyn_into()?;
		// file inputs produce Blobs, which are not part of the payload
		if let (Some(key), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
			payload.insert(key, value);
		}
	}

	Ok(payload)
}

fn control_label(control: &Element) -> String {
	match control.dyn_ref::<HtmlInputElement>() {
		Some(input) => input.value(),
		None => control.text_content().unwrap_or_default(),
	}
}

fn set_control(control: &Element, label: &str, disabled: bool) {
	if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
		button.set_disabled(disabled);
		button.set_text_content(Some(label));
	} else if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
		input.set_disabled(disabled);
		input.set_value(label);
	}
}

pub(crate) fn handle_submit(holder: &SiteInnerHolder) {
	let (form, notifier, submitter) = {
		let inner = holder.borrow();
		let Some(form) = inner.membership.form.clone() else {
			return;
		};
		(form, inner.notifier.clone(), inner.submitter.clone())
	};

	let payload = match read_payload(&form) {
		Ok(payload) => payload,
		Err(err) => {
			tracing::error!("failed to read signup form: {:?}", err);
			return;
		}
	};

	if let Err(err) = payload.validate() {
		tracing::debug!("signup failed validation: {}", err);
		notifier.notify(&err.to_string());
		return;
	}

	let control = {
		let mut inner = holder.borrow_mut();
		if !inner.membership.submission.begin() {
			tracing::debug!("signup already in progress");
			return;
		}
		inner.membership.submit.clone()
	};

	let original_label = control.as_ref().map(control_label).unwrap_or_default();
	if let Some(control) = &control {
		set_control(control, PROCESSING_LABEL, true);
	}

	tracing::info!(tier = ?payload.tier().map(|tier| tier.to_string()), "submitting signup");

	let site = holder.downgrade();
	spawn_local(async move {
		let outcome = submitter.submit(payload).await;

		notifier.notify(outcome.message());

		if let Some(control) = &control {
			set_control(control, &original_label, false);
		}

		if outcome.is_accepted() {
			form.reset();
		}

		if let Some(site) = site.upgrade() {
			tracing_wasm::scope!(site.logging_config());
			finish_submission(&site, &outcome);
		}
	});
}

fn finish_submission(holder: &SiteInnerHolder, outcome: &SubmitOutcome) {
	let mut inner = holder.borrow_mut();
	inner.membership.submission.finish();

	match outcome {
		SubmitOutcome::Accepted => {
			tracing::info!("signup accepted");
			inner.membership.sync_from_radios();
		}
		SubmitOutcome::Rejected(reason) => tracing::warn!("signup rejected: {}", reason),
	}
}

pub fn install(holder: &SiteInnerHolder) {
	let document = holder.document();

	let buttons = query_all(&document, ".tier-btn");
	let cards = query_all(&document, ".tier-card");
	let radios: Vec<HtmlInputElement> = query_all(&document, &format!("input[name=\"{TIER_FIELD}\"]"))
		.into_iter()
		.filter_map(|element| element.dyn_into().ok())
		.collect();
	let form = document
		.get_element_by_id("membershipForm")
		.and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
	let submit = document
		.get_element_by_id("submitBtn")
		.or_else(|| form.as_ref().and_then(|form| form.query_selector("[type=\"submit\"]").ok().flatten()));

	let mut listeners: Vec<Holder<EventTarget>> = Vec::new();

	for button in &buttons {
		let site = holder.downgrade();
		let tier = data_attribute(button, "tier");
		let cleanup = register_events!(button, {
			"click" => move |evt: web_sys::Event| {
				evt.prevent_default();
				let (Some(site), Some(tier)) = (site.upgrade(), tier.as_deref()) else {
					return;
				};
				tracing_wasm::scope!(site.logging_config());
				select_tier(&site, Tier::from(tier));
			},
		});
		listeners.push(Holder::new(button.clone().into(), cleanup));
	}

	for radio in &radios {
		let site = holder.downgrade();
		let input = radio.clone();
		let cleanup = register_events!(radio, {
			"change" => move |_| {
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					select_tier(&site, Tier::from(input.value()));
				}
			},
		});
		listeners.push(Holder::new(radio.clone().into(), cleanup));
	}

	if let Some(form) = form.clone() {
		let site = holder.downgrade();
		let cleanup = register_events!(form, {
			"submit" => move |evt: web_sys::Event| {
				evt.prevent_default();
				if let Some(site) = site.upgrade() {
					tracing_wasm::scope!(site.logging_config());
					handle_submit(&site);
				}
			},
		});
		listeners.push(Holder::new(form.into(), cleanup));
	}

	tracing::debug!(
		tiers = buttons.len(),
		radios = radios.len(),
		form = form.is_some(),
		"membership installed"
	);

	{
		let mut inner = holder.borrow_mut();
		let membership = &mut inner.membership;
		membership.buttons = buttons;
		membership.cards = cards;
		membership.radios = radios;
		membership.form = form;
		membership.submit = submit;
		membership.sync_from_radios();
	}

	holder.add_listeners(listeners);
}
