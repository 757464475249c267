use crate::{Kind, RecordError};
use serde::Deserialize;

/// A shared resource as defined by the enclosing project.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawResource")]
pub struct Resource {
	pub id: String,
	pub name: String,
	pub enabled: bool,
	pub value: ResourceValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceValue {
	Infinite,
	Quoted(u32),
	Custom(Vec<String>),
}

impl ResourceValue {
	pub fn kind(&self) -> Kind {
		match self {
			Self::Infinite => Kind::Infinite,
			Self::Quoted(_) => Kind::Quoted,
			Self::Custom(_) => Kind::Custom,
		}
	}
}

impl Resource {
	pub fn kind(&self) -> Kind {
		self.value.kind()
	}

	/// Parses a single record in the console's JSON format.
	pub fn from_json(json: &str) -> Result<Self, RecordError> {
		Ok(serde_json::from_str::<Self>(json)?)
	}
}

/// The record shape the console embeds in the page.
///
/// The server models infinite resources as quoted ones with either the
/// `infinite` flag set or a negative quota.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResource {
	#[serde(default)]
	id: Option<String>,
	#[serde(default)]
	name: String,
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	infinite: bool,
	#[serde(default)]
	quota: Option<i64>,
	#[serde(default)]
	custom_values: Vec<String>,
	#[serde(default)]
	enabled: Option<bool>,
}

impl TryFrom<RawResource> for Resource {
	type Error = RecordError;

	fn try_from(raw: RawResource) -> Result<Self, Self::Error> {
		if raw.name.is_empty() {
			return Err(RecordError::MissingName);
		}
		let kind = match raw.kind.parse::<Kind>() {
			Ok(kind) => kind,
			Err(err) => return Err(RecordError::UnknownKind(raw.name, err)),
		};
		let value = match kind {
			Kind::Infinite => ResourceValue::Infinite,
			Kind::Quoted if raw.infinite => ResourceValue::Infinite,
			Kind::Quoted => match raw.quota {
				None => return Err(RecordError::MissingQuota(raw.name)),
				Some(quota) if quota < 0 => ResourceValue::Infinite,
				Some(quota) => match u32::try_from(quota) {
					Ok(quota) => ResourceValue::Quoted(quota),
					Err(_) => return Err(RecordError::QuotaOutOfRange(raw.name, quota)),
				},
			},
			Kind::Custom => ResourceValue::Custom(raw.custom_values),
		};
		Ok(Self {
			id: raw.id.unwrap_or_else(|| raw.name.clone()),
			name: raw.name,
			enabled: raw.enabled.unwrap_or(true),
			value,
		})
	}
}
