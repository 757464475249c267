use crate::FieldError;
use serde::Deserialize;

lazy_static::lazy_static! {
	static ref NAME_PATTERN: regex::Regex = regex::Regex::new("^[A-Za-z0-9_]+$").unwrap();
	static ref QUOTA_PATTERN: regex::Regex = regex::Regex::new("^[0-9]+$").unwrap();
}

/// Which client-side checks the dialog runs before submitting.
/// The server validates again regardless.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
	/// Restrict names to latin letters, digits and underscores.
	pub strict_names: bool,
	/// Require quoted resources to carry a non-negative integer quota.
	pub check_quota: bool,
	/// Reject names already taken by another cached resource.
	pub check_duplicates: bool,
	/// Upper bound on name length, in characters.
	pub max_name_length: Option<usize>,
}

impl Default for ValidationRules {
	fn default() -> Self {
		Self {
			strict_names: true,
			check_quota: true,
			check_duplicates: true,
			max_name_length: None,
		}
	}
}

impl ValidationRules {
	/// Only the emptiness and duplicate checks.
	pub fn lenient() -> Self {
		Self {
			strict_names: false,
			check_quota: false,
			check_duplicates: true,
			max_name_length: None,
		}
	}

	/// Syntax checks on an already trimmed name. Uniqueness is checked against the cache separately.
	pub fn check_name(&self, name: &str) -> Result<(), FieldError> {
		if name.is_empty() {
			return Err(FieldError::NameRequired);
		}
		if self.strict_names && !NAME_PATTERN.is_match(name) {
			return Err(FieldError::NameFormat);
		}
		if let Some(max) = self.max_name_length {
			if name.chars().count() > max {
				return Err(FieldError::NameTooLong(max));
			}
		}
		Ok(())
	}

	pub fn check_quota(&self, quota: &str) -> Result<(), FieldError> {
		if !self.check_quota {
			return Ok(());
		}
		let quota = quota.trim();
		if quota.is_empty() {
			return Err(FieldError::QuotaRequired);
		}
		if !QUOTA_PATTERN.is_match(quota) {
			return Err(FieldError::QuotaFormat);
		}
		Ok(())
	}

	pub fn check_values(&self, values: &str) -> Result<(), FieldError> {
		match values.trim().is_empty() {
			true => Err(FieldError::ValuesRequired),
			false => Ok(()),
		}
	}
}
