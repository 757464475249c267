use crate::FieldMessage;
use resource_form::Field;

lazy_static::lazy_static! {
	static ref ERROR_ELEMENT: regex::Regex =
		regex::Regex::new(r#"(?s)<error\s+id="([^"]*)"\s*>(.*?)</error>"#).unwrap();
}

/// Extracts `<error id="...">message</error>` entries from an ajax response body.
pub fn parse_errors(body: &str) -> Vec<FieldMessage> {
	let mut messages = Vec::new();
	for capture in ERROR_ELEMENT.captures_iter(body) {
		let id = capture.get(1).map(|m| m.as_str()).unwrap_or_default();
		let message = capture.get(2).map(|m| m.as_str()).unwrap_or_default();
		messages.push(FieldMessage {
			field: Field::from_server_id(id),
			message: unescape(message.trim()),
		});
	}
	messages
}

fn unescape(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&apos;", "'")
		.replace("&amp;", "&")
}
