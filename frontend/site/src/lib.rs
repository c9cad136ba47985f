use wasm_bindgen::prelude::*;

mod tracing_wasm;

mod site;

#[cfg(test)]
mod tests;

/// Installs panic and logging hooks only. Pages wire themselves up with `new Site()`.
#[wasm_bindgen(start)]
pub fn main() {
	console_error_panic_hook::set_once();
	tracing_wasm::set_as_global_default();

	tracing::trace!("site enhancements loaded");
}
