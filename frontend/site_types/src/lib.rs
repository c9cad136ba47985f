pub mod catalog;
pub mod leveling;
pub mod markup;
pub mod membership;
pub mod modal;
pub mod navigation;

pub use catalog::{EventCatalog, EventFilter, EventRecord, LoadStatus};
