use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Reads form values out of input events.
pub trait InputExt {
	fn target_input(&self) -> Option<HtmlInputElement>;
	fn target_textarea(&self) -> Option<HtmlTextAreaElement>;
	fn target_select(&self) -> Option<HtmlSelectElement>;

	/// The value of an `<input>` or `<textarea>` target.
	fn input_value(&self) -> Option<String> {
		if let Some(input) = self.target_input() {
			return Some(input.value());
		}
		if let Some(text_area) = self.target_textarea() {
			return Some(text_area.value());
		}
		None
	}

	fn input_checked(&self) -> Option<bool> {
		let input = self.target_input()?;
		Some(input.checked())
	}

	fn select_value_t<T: FromStr>(&self) -> Option<T> {
		let value = self.target_select()?.value();
		value.parse::<T>().ok()
	}
}

impl InputExt for web_sys::Event {
	fn target_input(&self) -> Option<HtmlInputElement> {
		self.target()?.dyn_into::<HtmlInputElement>().ok()
	}

	fn target_textarea(&self) -> Option<HtmlTextAreaElement> {
		self.target()?.dyn_into::<HtmlTextAreaElement>().ok()
	}

	fn target_select(&self) -> Option<HtmlSelectElement> {
		self.target()?.dyn_into::<HtmlSelectElement>().ok()
	}
}

/// True for the Ctrl+Enter (or Cmd+Enter) shortcut that submits a dialog.
pub fn is_submit_shortcut(evt: &web_sys::KeyboardEvent) -> bool {
	evt.key() == "Enter" && (evt.ctrl_key() || evt.meta_key())
}
