use crate::{
	Errors, Field, FieldError, Kind, Resource, ResourceCache, ResourceDraft, ResourceValue, Row,
	Submission, ValidationRules,
};
use enumset::EnumSet;

/// Whether the dialog creates a new resource or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
	Add,
	Edit {
		id: String,
		/// Name of the edited resource at the time the dialog opened.
		original_name: String,
	},
}

/// Mirrors of the visible form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
	pub name: String,
	pub kind: Kind,
	pub quota: String,
	pub custom_values: String,
	pub enabled: bool,
}

impl Default for Fields {
	fn default() -> Self {
		Self {
			name: String::new(),
			kind: Kind::Infinite,
			quota: "1".into(),
			custom_values: String::new(),
			enabled: true,
		}
	}
}

impl From<&Resource> for Fields {
	fn from(resource: &Resource) -> Self {
		let mut fields = Self {
			name: resource.name.clone(),
			kind: resource.kind(),
			enabled: resource.enabled,
			..Default::default()
		};
		match &resource.value {
			ResourceValue::Infinite => {}
			ResourceValue::Quoted(quota) => fields.quota = quota.to_string(),
			ResourceValue::Custom(values) => fields.custom_values = values.join("\n"),
		}
		fields
	}
}

/// State of one open add/edit dialog. Built fresh every time the dialog opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogState {
	mode: Mode,
	pub fields: Fields,
	errors: Errors,
	submitting: bool,
}

impl DialogState {
	pub fn open_for_add() -> Self {
		Self {
			mode: Mode::Add,
			fields: Fields::default(),
			errors: Errors::default(),
			submitting: false,
		}
	}

	/// Populates the dialog from the cached resource under `key`.
	/// Returns None if the console asked to edit a resource it never provided.
	pub fn open_for_edit(cache: &ResourceCache, key: &str) -> Option<Self> {
		let resource = cache.get(key)?;
		Some(Self {
			mode: Mode::Edit {
				id: resource.id.clone(),
				original_name: resource.name.clone(),
			},
			fields: Fields::from(resource),
			errors: Errors::default(),
			submitting: false,
		})
	}

	pub fn mode(&self) -> &Mode {
		&self.mode
	}

	pub fn is_edit(&self) -> bool {
		matches!(self.mode, Mode::Edit { .. })
	}

	pub fn title(&self) -> &'static str {
		match self.mode {
			Mode::Add => "Add Resource",
			Mode::Edit { .. } => "Edit Resource",
		}
	}

	pub fn errors(&self) -> &Errors {
		&self.errors
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	pub fn set_kind(&mut self, kind: Kind) {
		self.fields.kind = kind;
	}

	pub fn visible_rows(&self) -> EnumSet<Row> {
		self.fields.kind.visible_rows()
	}

	/// True while editing and the name field no longer matches the resource's name.
	pub fn is_renamed(&self) -> bool {
		match &self.mode {
			Mode::Add => false,
			Mode::Edit { original_name, .. } => *original_name != self.fields.name,
		}
	}

	/// Runs every check against the current fields, replacing all previous errors.
	/// The name field is trimmed in place.
	pub fn validate(&mut self, cache: &ResourceCache, rules: &ValidationRules) -> bool {
		self.errors.clear();

		match self.fields.kind {
			Kind::Infinite => {}
			Kind::Quoted => {
				if let Err(err) = rules.check_quota(&self.fields.quota) {
					self.errors.insert(Field::Quota, err);
				}
			}
			Kind::Custom => {
				if let Err(err) = rules.check_values(&self.fields.custom_values) {
					self.errors.insert(Field::Values, err);
				}
			}
		}

		let name = self.fields.name.trim().to_owned();
		if let Err(err) = rules.check_name(&name) {
			self.errors.insert(Field::Name, err);
		}
		if rules.check_duplicates {
			// only a new or changed name can collide
			let collides = match &self.mode {
				Mode::Add => cache.is_name_used(&name, None),
				Mode::Edit { id, original_name } => {
					*original_name != name && cache.is_name_used(&name, Some(id.as_str()))
				}
			};
			if collides {
				self.errors.insert(Field::Name, FieldError::NameUsed);
			}
		}
		self.fields.name = name;

		if !self.errors.is_empty() {
			log::debug!(target: "resource_dialog", "Validation failed: {:?}", self.errors);
		}
		self.errors.is_empty()
	}

	/// The payload for the current fields. Call after [`validate`](Self::validate) succeeded.
	pub fn submission(&self) -> Submission {
		let fields = &self.fields;
		let draft = ResourceDraft {
			name: fields.name.trim().to_owned(),
			kind: fields.kind,
			quota: match fields.kind {
				Kind::Quoted => fields.quota.trim().to_owned(),
				_ => String::new(),
			},
			values: match fields.kind {
				Kind::Custom => ResourceDraft::split_values(&fields.custom_values),
				_ => Vec::new(),
			},
			enabled: fields.enabled,
		};
		match &self.mode {
			Mode::Add => Submission::Add(draft),
			Mode::Edit { id, original_name } => Submission::Edit {
				id: id.clone(),
				old_name: original_name.clone(),
				draft,
			},
		}
	}

	/// Validates and, if everything passes, disables the form until
	/// [`finish_submit`](Self::finish_submit) is called.
	/// Returns None (leaving errors visible) if validation failed or a submission is already in flight.
	pub fn begin_submit(&mut self, cache: &ResourceCache, rules: &ValidationRules) -> Option<Submission> {
		if self.submitting {
			return None;
		}
		if !self.validate(cache, rules) {
			return None;
		}
		self.submitting = true;
		Some(self.submission())
	}

	/// Re-enables the form after the actions collaborator answered.
	/// On failure, messages the server attributed to a known field are shown on that field,
	/// anything else on the general error line.
	/// Returns true if the dialog should close.
	/// Answers arriving while nothing is in flight are ignored.
	pub fn finish_submit<I>(&mut self, result: Result<(), I>) -> bool
	where
		I: IntoIterator<Item = (Option<Field>, String)>,
	{
		if !self.submitting {
			return false;
		}
		self.submitting = false;
		let Err(messages) = result else {
			return true;
		};
		let mut general = Vec::new();
		for (field, message) in messages {
			match field {
				Some(field) => self.errors.insert(field, FieldError::Server(message)),
				None => general.push(message),
			}
		}
		if !general.is_empty() || self.errors.is_empty() {
			if general.is_empty() {
				general.push("Failed to save the resource".into());
			}
			self.errors.set_general(general.join("\n"));
		}
		false
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn cache() -> ResourceCache {
		ResourceCache::from_iter([
			Resource {
				id: "R1".into(),
				name: "pool1".into(),
				enabled: true,
				value: ResourceValue::Quoted(5),
			},
			Resource {
				id: "R2".into(),
				name: "agents".into(),
				enabled: false,
				value: ResourceValue::Custom(vec!["a".into(), "b".into()]),
			},
			Resource {
				id: "R3".into(),
				name: "db".into(),
				enabled: true,
				value: ResourceValue::Infinite,
			},
		])
	}

	#[test]
	fn open_for_add_defaults() {
		let state = DialogState::open_for_add();
		assert_eq!(state.mode(), &Mode::Add);
		assert_eq!(state.fields.name, "");
		assert_eq!(state.fields.kind, Kind::Infinite);
		assert_eq!(state.fields.quota, "1");
		assert_eq!(state.fields.custom_values, "");
		assert!(state.visible_rows().is_empty());
		assert_eq!(state.title(), "Add Resource");
		assert!(state.errors().is_empty());
	}

	#[test]
	fn open_for_edit_quoted() {
		let state = DialogState::open_for_edit(&cache(), "pool1").unwrap();
		assert_eq!(
			state.mode(),
			&Mode::Edit {
				id: "R1".into(),
				original_name: "pool1".into()
			}
		);
		assert_eq!(state.fields.kind, Kind::Quoted);
		assert_eq!(state.fields.quota, "5");
		assert_eq!(state.fields.custom_values, "");
		assert_eq!(state.visible_rows(), EnumSet::only(Row::Quota));
		assert_eq!(state.title(), "Edit Resource");
	}

	#[test]
	fn open_for_edit_custom() {
		let state = DialogState::open_for_edit(&cache(), "agents").unwrap();
		assert_eq!(state.fields.kind, Kind::Custom);
		assert_eq!(state.fields.quota, "1");
		assert_eq!(state.fields.custom_values, "a\nb");
		assert!(!state.fields.enabled);
	}

	#[test]
	fn open_for_edit_is_idempotent() {
		let cache = cache();
		let first = DialogState::open_for_edit(&cache, "agents");
		let second = DialogState::open_for_edit(&cache, "agents");
		assert_eq!(first, second);
	}

	#[test]
	fn open_for_edit_missing_key() {
		assert_eq!(DialogState::open_for_edit(&cache(), "nope"), None);
	}

	#[test]
	fn kind_switch_controls_rows() {
		let mut state = DialogState::open_for_add();
		state.set_kind(Kind::Quoted);
		assert_eq!(state.visible_rows(), EnumSet::only(Row::Quota));
		state.set_kind(Kind::Custom);
		assert_eq!(state.visible_rows(), EnumSet::only(Row::CustomValues));
		state.set_kind(Kind::Custom);
		assert_eq!(state.visible_rows(), EnumSet::only(Row::CustomValues));
		state.set_kind(Kind::Infinite);
		assert!(state.visible_rows().is_empty());
	}

	#[test]
	fn custom_values_required() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "build agent".into();
		state.set_kind(Kind::Custom);
		assert!(!state.validate(&cache(), &ValidationRules::lenient()));
		assert_eq!(state.errors().fields(), EnumSet::only(Field::Values));
		assert_eq!(state.errors().get(Field::Values), Some(&FieldError::ValuesRequired));
	}

	#[test]
	fn strict_name_pattern() {
		let rules = ValidationRules::default();
		let mut state = DialogState::open_for_add();
		state.fields.name = "agent-1".into();
		assert!(!state.validate(&cache(), &rules));
		assert_eq!(state.errors().get(Field::Name), Some(&FieldError::NameFormat));
		state.fields.name = "agent_1".into();
		assert!(state.validate(&cache(), &rules));
		assert!(state.errors().is_empty());
	}

	#[test]
	fn empty_name_after_trim() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "   ".into();
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.errors().get(Field::Name), Some(&FieldError::NameRequired));
		assert_eq!(state.fields.name, "");
	}

	#[test]
	fn name_is_trimmed_in_place() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "  pool2 ".into();
		assert!(state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.fields.name, "pool2");
	}

	#[test]
	fn quota_format_on_edit() {
		let mut state = DialogState::open_for_edit(&cache(), "pool1").unwrap();
		state.fields.quota = "5x".into();
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.errors().fields(), EnumSet::only(Field::Quota));
		assert_eq!(state.errors().get(Field::Quota), Some(&FieldError::QuotaFormat));
	}

	#[test]
	fn quota_ignored_unless_quoted() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "db2".into();
		state.fields.quota = "".into();
		assert!(state.validate(&cache(), &ValidationRules::default()));
	}

	#[test]
	fn duplicate_name_on_add() {
		let mut state = DialogState::open_for_add();
		state.fields.name = " db ".into();
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.errors().get(Field::Name), Some(&FieldError::NameUsed));
	}

	#[test]
	fn duplicate_check_can_be_disabled() {
		let rules = ValidationRules {
			check_duplicates: false,
			..Default::default()
		};
		let mut state = DialogState::open_for_add();
		state.fields.name = "db".into();
		assert!(state.validate(&cache(), &rules));
	}

	#[test]
	fn edit_keeping_name_is_not_duplicate() {
		let mut state = DialogState::open_for_edit(&cache(), "db").unwrap();
		assert!(state.validate(&cache(), &ValidationRules::default()));
	}

	#[test]
	fn edit_renaming_onto_other_resource() {
		let mut state = DialogState::open_for_edit(&cache(), "db").unwrap();
		state.fields.name = "pool1".into();
		assert!(state.is_renamed());
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.errors().get(Field::Name), Some(&FieldError::NameUsed));
	}

	#[test]
	fn rename_hint() {
		let mut state = DialogState::open_for_edit(&cache(), "db").unwrap();
		assert!(!state.is_renamed());
		state.fields.name = "db_main".into();
		assert!(state.is_renamed());
		state.fields.name = "db".into();
		assert!(!state.is_renamed());
		assert!(!DialogState::open_for_add().is_renamed());
	}

	#[test]
	fn errors_on_every_failing_field() {
		let mut state = DialogState::open_for_add();
		state.set_kind(Kind::Custom);
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		assert_eq!(state.errors().fields(), Field::Name | Field::Values);
	}

	#[test]
	fn successful_validation_clears_errors() {
		let mut state = DialogState::open_for_add();
		assert!(!state.validate(&cache(), &ValidationRules::default()));
		state.fields.name = "fresh".into();
		assert!(state.validate(&cache(), &ValidationRules::default()));
		assert!(state.errors().is_empty());
	}

	#[test]
	fn submission_for_edit() {
		let cache = cache();
		let mut state = DialogState::open_for_edit(&cache, "agents").unwrap();
		state.fields.name = "agents_v2".into();
		state.fields.custom_values = "a\n\n c \n".into();
		let submission = state.begin_submit(&cache, &ValidationRules::default()).unwrap();
		assert_eq!(
			submission,
			Submission::Edit {
				id: "R2".into(),
				old_name: "agents".into(),
				draft: ResourceDraft {
					name: "agents_v2".into(),
					kind: Kind::Custom,
					quota: String::new(),
					values: vec!["a".into(), "c".into()],
					enabled: false,
				},
			}
		);
		assert!(state.is_submitting());
	}

	#[test]
	fn submission_for_add_quoted() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "pool2".into();
		state.set_kind(Kind::Quoted);
		state.fields.quota = "3".into();
		let submission = state.begin_submit(&cache(), &ValidationRules::default()).unwrap();
		assert_eq!(submission.draft().quota, "3");
		assert!(matches!(submission, Submission::Add(_)));
	}

	#[test]
	fn begin_submit_blocks_on_invalid() {
		let mut state = DialogState::open_for_add();
		assert_eq!(state.begin_submit(&cache(), &ValidationRules::default()), None);
		assert!(!state.is_submitting());
		assert!(!state.errors().is_empty());
	}

	#[test]
	fn begin_submit_blocks_while_in_flight() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "pool2".into();
		assert!(state.begin_submit(&cache(), &ValidationRules::default()).is_some());
		assert_eq!(state.begin_submit(&cache(), &ValidationRules::default()), None);
	}

	#[test]
	fn finish_submit_success() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "pool2".into();
		state.begin_submit(&cache(), &ValidationRules::default());
		assert!(state.finish_submit(Ok::<(), Vec<(Option<Field>, String)>>(())));
		assert!(!state.is_submitting());
	}

	#[test]
	fn finish_submit_failure_reenables_form() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "pool2".into();
		state.begin_submit(&cache(), &ValidationRules::default());
		let messages = vec![
			(Some(Field::Name), "Name pool2 is already used by another resource".to_owned()),
			(None, "Project no longer exists".to_owned()),
		];
		assert!(!state.finish_submit(Err(messages)));
		assert!(!state.is_submitting());
		assert_eq!(
			state.errors().get(Field::Name),
			Some(&FieldError::Server("Name pool2 is already used by another resource".into()))
		);
		assert_eq!(state.errors().general(), Some("Project no longer exists"));
	}

	#[test]
	fn finish_submit_ignored_when_not_submitting() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "typing".into();
		assert!(!state.finish_submit(Ok::<(), Vec<(Option<Field>, String)>>(())));
		let messages = vec![(Some(Field::Name), "Name pool_a is already used".to_owned())];
		assert!(!state.finish_submit(Err(messages)));
		assert!(state.errors().is_empty());
		assert_eq!(state.fields.name, "typing");
	}

	#[test]
	fn finish_submit_failure_without_details() {
		let mut state = DialogState::open_for_add();
		state.fields.name = "pool2".into();
		state.begin_submit(&cache(), &ValidationRules::default());
		assert!(!state.finish_submit(Err(Vec::new())));
		assert_eq!(state.errors().general(), Some("Failed to save the resource"));
	}
}
