use crate::Kind;

/// The resource as entered in the dialog, ready to hand to the actions endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDraft {
	pub name: String,
	pub kind: Kind,
	/// Quota text for [`Kind::Quoted`], empty for other kinds.
	pub quota: String,
	/// Non-empty custom values for [`Kind::Custom`], empty for other kinds.
	pub values: Vec<String>,
	pub enabled: bool,
}

impl ResourceDraft {
	/// Splits the multi-line custom values text into trimmed, non-blank entries.
	pub fn split_values(text: &str) -> Vec<String> {
		let lines = text.split(['\r', '\n']).map(str::trim);
		lines.filter(|line| !line.is_empty()).map(str::to_owned).collect()
	}
}

/// What the dialog asks the actions collaborator to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
	Add(ResourceDraft),
	Edit {
		id: String,
		/// The name the resource had when the dialog opened.
		old_name: String,
		draft: ResourceDraft,
	},
}

impl Submission {
	pub fn draft(&self) -> &ResourceDraft {
		match self {
			Self::Add(draft) => draft,
			Self::Edit { draft, .. } => draft,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use trim_margin::MarginTrimmable;

	#[test]
	fn split_values_drops_blank_lines() {
		let text = "
			|agent_a
			|
			|  agent_b  \r
			|agent_c
		"
		.trim_margin()
		.unwrap();
		assert_eq!(ResourceDraft::split_values(&text), vec!["agent_a", "agent_b", "agent_c"]);
	}

	#[test]
	fn split_values_empty() {
		assert!(ResourceDraft::split_values(" \n\r\n ").is_empty());
	}
}
