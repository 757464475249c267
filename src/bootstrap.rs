use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use yew::NodeRef;

#[wasm_bindgen(module = "bootstrap")]
extern "C" {
	pub type Modal;
	#[wasm_bindgen(static_method_of = Modal, js_name = getOrCreateInstance)]
	fn get_or_create_instance(element: &web_sys::Element) -> Modal;
	#[wasm_bindgen(method)]
	pub fn show(this: &Modal, related_target: JsValue);
	#[wasm_bindgen(method)]
	pub fn hide(this: &Modal);
}

impl Modal {
	/// The bootstrap-js modal bound to the node, if the node has been rendered.
	pub fn from_node(node: &NodeRef) -> Option<Self> {
		let element = node.cast::<web_sys::Element>()?;
		Some(Self::get_or_create_instance(&element))
	}
}
