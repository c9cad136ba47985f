use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use web_sys::{Document, EventTarget, Window};

use super::leveling::LevelingView;
use super::listing::Listing;
use super::membership::Membership;
use super::modal::Modal;
use super::navigation::Navigation;
use super::reveal::RevealObserver;
use super::services::{Notifier, Submitter};
use super::settings::SiteSettings;
use super::util::Holder;
use crate::tracing_wasm::ConsoleLayerConfig;

#[derive(Clone)]
pub struct SiteInnerHolder(Rc<RefCell<SiteInner>>, Rc<Cell<Option<&'static std::panic::Location<'static>>>>);

#[derive(Clone)]
pub struct SiteInnerWeakHolder(Weak<RefCell<SiteInner>>, Weak<Cell<Option<&'static std::panic::Location<'static>>>>);

impl SiteInnerHolder {
	pub fn new(inner: SiteInner) -> Self {
		Self(Rc::new(RefCell::new(inner)), Rc::new(Cell::new(None)))
	}

	#[track_caller]
	pub fn borrow(&self) -> std::cell::Ref<'_, SiteInner> {
		let borrow = self
			.0
			.try_borrow()
			.map_err(|err| {
				tracing::error!(
					"Failed to borrow site inner\nPrevious borrow location: {:?}\nNew Location: {:?}",
					self.1.get(),
					std::panic::Location::caller()
				);
				err
			})
			.expect("failed to borrow site inner");

		self.1.set(Some(std::panic::Location::caller()));

		borrow
	}

	#[track_caller]
	pub fn borrow_mut(&self) -> std::cell::RefMut<'_, SiteInner> {
		let borrow = self
			.0
			.try_borrow_mut()
			.map_err(|err| {
				tracing::error!(
					"Failed to borrow site inner\nPrevious borrow location: {:?}\nNew Location: {:?}",
					self.1.get(),
					std::panic::Location::caller()
				);
				err
			})
			.expect("failed to borrow site inner");

		self.1.set(Some(std::panic::Location::caller()));

		borrow
	}

	pub fn downgrade(&self) -> SiteInnerWeakHolder {
		SiteInnerWeakHolder(Rc::downgrade(&self.0), Rc::downgrade(&self.1))
	}

	pub fn logging_config(&self) -> ConsoleLayerConfig {
		let inner = self.borrow();
		let settings = &inner.settings;
		ConsoleLayerConfig::new(settings.logging_level.level()).with_timings(settings.report_logs_in_timings)
	}

	pub fn document(&self) -> Document {
		self.borrow().document.clone()
	}

	pub fn notifier(&self) -> Rc<dyn Notifier> {
		self.borrow().notifier.clone()
	}

	pub fn add_listeners(&self, listeners: impl IntoIterator<Item = Holder<EventTarget>>) {
		self.borrow_mut().listeners.extend(listeners);
	}
}

impl SiteInnerWeakHolder {
	pub fn upgrade(&self) -> Option<SiteInnerHolder> {
		let inner = self.0.upgrade()?;
		let location = self.1.upgrade()?;

		Some(SiteInnerHolder(inner, location))
	}
}

/// Everything a page view owns. DOM classes and styles are projections of these fields.
pub struct SiteInner {
	pub settings: SiteSettings,
	pub window: Window,
	pub document: Document,
	pub notifier: Rc<dyn Notifier>,
	pub submitter: Rc<dyn Submitter>,
	pub nav: Navigation,
	pub listing: Listing,
	pub modal: Modal,
	pub membership: Membership,
	pub leveling: LevelingView,
	pub reveal: Option<RevealObserver>,
	pub listeners: Vec<Holder<EventTarget>>,
}

impl SiteInner {
	pub fn new(
		settings: SiteSettings,
		window: Window,
		document: Document,
		notifier: Rc<dyn Notifier>,
		submitter: Rc<dyn Submitter>,
	) -> Self {
		Self {
			nav: Navigation::new(settings.navbar_hide_threshold),
			leveling: LevelingView::new(settings.current_xp, settings.max_xp),
			listing: Listing::default(),
			modal: Modal::default(),
			membership: Membership::default(),
			reveal: None,
			listeners: Vec::new(),
			settings,
			window,
			document,
			notifier,
			submitter,
		}
	}
}
