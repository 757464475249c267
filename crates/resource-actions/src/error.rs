use resource_form::Field;

/// A message the server attached to its response, optionally naming the offending field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMessage {
	pub field: Option<Field>,
	pub message: String,
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	#[error(transparent)]
	Request(std::sync::Arc<reqwest::Error>),
	#[error("Server responded with status {0}")]
	Status(u16),
	#[error("Server rejected the resource: {0:?}")]
	Rejected(Vec<FieldMessage>),
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(std::sync::Arc::new(value))
	}
}

impl Error {
	/// Messages to show in the dialog, paired with the field they belong to (if any).
	pub fn field_messages(&self) -> Vec<(Option<Field>, String)> {
		match self {
			Self::Rejected(messages) => {
				let iter = messages.iter();
				iter.map(|msg| (msg.field, msg.message.clone())).collect()
			}
			other => vec![(None, other.to_string())],
		}
	}
}
