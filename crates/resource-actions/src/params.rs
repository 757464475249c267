use resource_form::{Kind, ResourceDraft};

pub const PARAM_ACTION: &str = "action";
pub const PARAM_PROJECT_ID: &str = "project_id";
pub const PARAM_OLD_RESOURCE_NAME: &str = "old_resource_name";
pub const PARAM_RESOURCE_ID: &str = "resource_id";
pub const PARAM_RESOURCE_NAME: &str = "resource_name";
pub const PARAM_RESOURCE_TYPE: &str = "resource_type";
pub const PARAM_RESOURCE_STATE: &str = "resource_state";
pub const PARAM_RESOURCE_QUOTA: &str = "resource_quota";
pub const PARAM_RESOURCE_VALUES: &str = "resource_values";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Add,
	Edit,
}

impl Action {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Add => "addResource",
			Self::Edit => "editResource",
		}
	}
}

/// Request parameters shared by the add and edit actions.
///
/// The endpoint has no infinite type: an infinite resource is a quoted one with an empty quota.
pub fn form_params(project_id: &str, action: Action, draft: &ResourceDraft) -> Vec<(&'static str, String)> {
	let (kind, quota, values) = match draft.kind {
		Kind::Infinite => (Kind::Quoted, String::new(), None),
		Kind::Quoted => (Kind::Quoted, draft.quota.clone(), None),
		Kind::Custom => (Kind::Custom, String::new(), Some(draft.values.join("\n"))),
	};
	let mut params = vec![
		(PARAM_ACTION, action.as_str().to_owned()),
		(PARAM_PROJECT_ID, project_id.to_owned()),
		(PARAM_RESOURCE_NAME, draft.name.clone()),
		(PARAM_RESOURCE_TYPE, kind.to_string()),
		(PARAM_RESOURCE_STATE, draft.enabled.to_string()),
		(PARAM_RESOURCE_QUOTA, quota),
	];
	if let Some(values) = values {
		params.push((PARAM_RESOURCE_VALUES, values));
	}
	params
}

#[cfg(test)]
mod test {
	use super::*;

	fn draft(kind: Kind) -> ResourceDraft {
		ResourceDraft {
			name: "pool1".into(),
			kind,
			quota: match kind {
				Kind::Quoted => "5".into(),
				_ => String::new(),
			},
			values: match kind {
				Kind::Custom => vec!["a".into(), "b".into()],
				_ => Vec::new(),
			},
			enabled: true,
		}
	}

	fn get<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
		params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
	}

	#[test]
	fn infinite_is_quoted_without_quota() {
		let params = form_params("Project1", Action::Add, &draft(Kind::Infinite));
		assert_eq!(get(&params, PARAM_ACTION), Some("addResource"));
		assert_eq!(get(&params, PARAM_PROJECT_ID), Some("Project1"));
		assert_eq!(get(&params, PARAM_RESOURCE_TYPE), Some("quoted"));
		assert_eq!(get(&params, PARAM_RESOURCE_QUOTA), Some(""));
		assert_eq!(get(&params, PARAM_RESOURCE_VALUES), None);
	}

	#[test]
	fn quoted() {
		let params = form_params("Project1", Action::Edit, &draft(Kind::Quoted));
		assert_eq!(get(&params, PARAM_ACTION), Some("editResource"));
		assert_eq!(get(&params, PARAM_RESOURCE_TYPE), Some("quoted"));
		assert_eq!(get(&params, PARAM_RESOURCE_QUOTA), Some("5"));
		assert_eq!(get(&params, PARAM_RESOURCE_STATE), Some("true"));
	}

	#[test]
	fn custom_values_are_newline_joined() {
		let params = form_params("Project1", Action::Add, &draft(Kind::Custom));
		assert_eq!(get(&params, PARAM_RESOURCE_TYPE), Some("custom"));
		assert_eq!(get(&params, PARAM_RESOURCE_VALUES), Some("a\nb"));
	}
}
