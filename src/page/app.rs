use crate::{
	components::resource_dialog::{self, ActionsHandle},
	config::{self, Config},
	page::ResourcesPage,
};
use anyhow::Context;
use resource_actions::HttpActions;
use resource_form::{ResourceCache, ValidationRules};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the page hands the console at startup.
#[derive(Clone, PartialEq)]
pub struct Session {
	pub config: Config,
	pub cache: Rc<ResourceCache>,
	pub rules: Rc<ValidationRules>,
	pub actions: ActionsHandle,
}

impl Session {
	pub fn from_page(config: Config) -> anyhow::Result<Self> {
		let cache = config::resources_from_page()?;
		let href = gloo_utils::window()
			.location()
			.href()
			.map_err(|err| anyhow::anyhow!("Failed to read page location: {err:?}"))?;
		let endpoint = config.actions_endpoint(&href)?;
		let actions = HttpActions::new(endpoint, config.project_id.clone())
			.context("Failed to create actions client")?;
		log::info!(
			"Loaded {} shared resources for project {:?}",
			cache.len(),
			config.project_id
		);
		Ok(Self {
			rules: Rc::new(config.rules.clone()),
			config,
			cache: Rc::new(cache),
			actions: ActionsHandle(Rc::new(actions)),
		})
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
	pub session: Rc<Session>,
}

#[function_component]
pub fn App(AppProps { session }: &AppProps) -> Html {
	let on_saved = Callback::from({
		let reload = session.config.reload_on_save;
		move |_| {
			if !reload {
				log::info!("Resource saved");
				return;
			}
			if let Err(err) = gloo_utils::window().location().reload() {
				log::error!("Failed to reload page: {err:?}");
			}
		}
	});

	html! {
		<resource_dialog::Provider
			cache={session.cache.clone()}
			rules={session.rules.clone()}
			actions={session.actions.clone()}
			{on_saved}
		>
			<ResourcesPage cache={session.cache.clone()} />
		</resource_dialog::Provider>
	}
}
