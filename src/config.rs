use anyhow::Context;
use resource_form::{ResourceCache, ValidationRules};
use serde::Deserialize;

/// Id of the `<script type="application/json">` element holding [`Config`].
pub static CONFIG_ELEMENT_ID: &'static str = "shared-resources-config";
/// Id of the `<script type="application/json">` element holding the project's resources.
pub static DATA_ELEMENT_ID: &'static str = "shared-resources-data";

/// Settings the console page embeds for the dialog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Project whose resources are being edited.
	pub project_id: String,
	/// Actions endpoint, absolute or relative to the page.
	pub actions_url: String,
	/// Reload the whole page once a resource was saved.
	pub reload_on_save: bool,
	pub log_level: log::LevelFilter,
	pub rules: ValidationRules,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			project_id: String::new(),
			actions_url: resource_actions::ACTIONS_PATH.into(),
			reload_on_save: true,
			log_level: log::LevelFilter::Info,
			rules: ValidationRules::default(),
		}
	}
}

impl Config {
	pub fn from_json(json: &str) -> anyhow::Result<Self> {
		serde_json::from_str(json).context("Invalid shared resources config")
	}

	/// Reads the config embedded in the page, falling back to defaults when the page has none.
	pub fn from_page() -> anyhow::Result<Self> {
		match element_text(CONFIG_ELEMENT_ID) {
			Some(json) => Self::from_json(&json),
			None => {
				log::warn!("No #{CONFIG_ELEMENT_ID} element, using default settings");
				Ok(Self::default())
			}
		}
	}

	/// Resolves [`actions_url`](Self::actions_url) against `base`.
	pub fn actions_endpoint(&self, base: &str) -> anyhow::Result<String> {
		let base = url::Url::parse(base).with_context(|| format!("Invalid page url {base:?}"))?;
		let endpoint = base
			.join(&self.actions_url)
			.with_context(|| format!("Invalid actions url {:?}", self.actions_url))?;
		Ok(endpoint.to_string())
	}
}

/// Reads the resources the console embedded in the page.
pub fn resources_from_page() -> anyhow::Result<ResourceCache> {
	let Some(json) = element_text(DATA_ELEMENT_ID) else {
		log::warn!("No #{DATA_ELEMENT_ID} element, starting without resources");
		return Ok(ResourceCache::default());
	};
	ResourceCache::from_json(&json).context("Invalid shared resources data")
}

fn element_text(id: &str) -> Option<String> {
	let element = gloo_utils::document().get_element_by_id(id)?;
	element.text_content()
}
