use crate::InvalidEnumStr;
use enumset::{EnumSet, EnumSetType};
use std::str::FromStr;

/// The three value spaces a shared resource can have.
#[derive(Debug, EnumSetType, Default, PartialOrd, Ord, Hash)]
pub enum Kind {
	/// Any number of builds may hold the resource at once.
	#[default]
	Infinite,
	/// At most `quota` builds may hold the resource at once.
	Quoted,
	/// Each holder is handed one value out of an explicit list.
	Custom,
}

impl Kind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Infinite => "infinite",
			Self::Quoted => "quoted",
			Self::Custom => "custom",
		}
	}

	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Infinite => "Infinite resource",
			Self::Quoted => "Resource with quota",
			Self::Custom => "Resource with custom values",
		}
	}

	/// The secondary form rows shown while this kind is selected.
	pub fn visible_rows(&self) -> EnumSet<Row> {
		match self {
			Self::Infinite => EnumSet::empty(),
			Self::Quoted => Row::Quota.into(),
			Self::Custom => Row::CustomValues.into(),
		}
	}
}

impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Kind {
	type Err = InvalidEnumStr<Self>;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// server-side records carry the upper-case enum name
		match s.trim().to_lowercase().as_str() {
			"infinite" => Ok(Self::Infinite),
			"quoted" => Ok(Self::Quoted),
			"custom" => Ok(Self::Custom),
			_ => Err(s.into()),
		}
	}
}

/// Form rows whose visibility depends on the selected [`Kind`].
#[derive(Debug, EnumSetType)]
pub enum Row {
	Quota,
	CustomValues,
}

impl Row {
	/// Element id of the row in the rendered form.
	pub fn element_id(&self) -> &'static str {
		match self {
			Self::Quota => "quota_row",
			Self::CustomValues => "custom_row",
		}
	}
}
