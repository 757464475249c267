use enumset::{EnumSet, EnumSetType};
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug)]
#[error("Invalid value {0:?}, expected one of: {1:?}")]
pub struct InvalidEnumStr<T: EnumSetType + std::fmt::Debug>(String, EnumSet<T>);
impl<S, T> From<S> for InvalidEnumStr<T>
where
	T: EnumSetType + std::fmt::Debug,
	S: Into<String>,
{
	fn from(value: S) -> Self {
		Self(value.into(), EnumSet::all())
	}
}

/// A resource record handed to the dialog could not be understood.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
	#[error("Resource record is missing its name")]
	MissingName,
	#[error("Resource {0:?} has an unknown type: {1}")]
	UnknownKind(String, InvalidEnumStr<crate::Kind>),
	#[error("Quoted resource {0:?} has no quota")]
	MissingQuota(String),
	#[error("Quoted resource {0:?} has a quota out of range: {1}")]
	QuotaOutOfRange(String, i64),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

/// The form inputs that can carry an inline error message.
#[derive(Debug, EnumSetType, PartialOrd, Ord)]
pub enum Field {
	Name,
	Quota,
	Values,
}

impl Field {
	/// Element id of the inline error container for this field.
	pub fn error_element_id(&self) -> &'static str {
		match self {
			Self::Name => "error_Name",
			Self::Quota => "error_Quota",
			Self::Values => "error_Values",
		}
	}

	/// Maps a field name used by the server in its error responses.
	pub fn from_server_id(id: &str) -> Option<Self> {
		match id {
			"name" | "resource_name" => Some(Self::Name),
			"quota" | "resource_quota" => Some(Self::Quota),
			"values" | "resource_values" => Some(Self::Values),
			_ => None,
		}
	}
}

/// A failed check on a single field. The display text is what the dialog shows inline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
	#[error("Name must not be empty")]
	NameRequired,
	#[error("Name should contain only latin letters, digits and underscores")]
	NameFormat,
	#[error("Name must not be longer than {0} characters")]
	NameTooLong(usize),
	#[error("Name is already used")]
	NameUsed,
	#[error("Quota must not be empty")]
	QuotaRequired,
	#[error("Quota must be a non-negative whole number")]
	QuotaFormat,
	#[error("Please define custom values for resource")]
	ValuesRequired,
	/// Reported by the server after submission.
	#[error("{0}")]
	Server(String),
}

/// Inline errors currently shown by the dialog. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
	fields: BTreeMap<Field, FieldError>,
	/// A submission failure that doesn't belong to any single field.
	general: Option<String>,
}

impl Errors {
	pub fn clear(&mut self) {
		self.fields.clear();
		self.general = None;
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty() && self.general.is_none()
	}

	/// Records `error` against `field` unless the field already has a message.
	pub fn insert(&mut self, field: Field, error: FieldError) {
		self.fields.entry(field).or_insert(error);
	}

	pub fn set_general(&mut self, message: impl Into<String>) {
		self.general = Some(message.into());
	}

	pub fn get(&self, field: Field) -> Option<&FieldError> {
		self.fields.get(&field)
	}

	pub fn general(&self) -> Option<&str> {
		self.general.as_deref()
	}

	/// The fields whose error containers should be revealed.
	pub fn fields(&self) -> EnumSet<Field> {
		self.fields.keys().copied().collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> + '_ {
		self.fields.iter().map(|(field, error)| (*field, error))
	}
}
