#[cfg(target_family = "wasm")]
fn main() {
	use shared_resources_console::{
		config::Config,
		logging,
		page::{App, AppProps, Session},
	};
	use std::rc::Rc;

	let config = Config::from_page();
	let level = config.as_ref().map_or(log::LevelFilter::Info, |config| config.log_level);
	logging::wasm::init(logging::wasm::Config::default().with_level(level).prefer_target());

	match config.and_then(Session::from_page) {
		Ok(session) => {
			let props = AppProps {
				session: Rc::new(session),
			};
			yew::Renderer::<App>::with_props(props).render();
		}
		Err(err) => {
			log::error!("Shared resources console failed to start: {err:?}");
		}
	}
}

/// Checks an exported resource list against the dialog's validation rules,
/// reporting resources the dialog would refuse to save unchanged.
///
/// Usage: `shared-resources-console <resources.json> [config.json]`
#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use anyhow::Context;
	use resource_form::{DialogState, ResourceCache};
	use shared_resources_console::{config::Config, logging};

	let mut args = std::env::args().skip(1);
	let Some(data_path) = args.next() else {
		anyhow::bail!("Usage: shared-resources-console <resources.json> [config.json]");
	};
	let config = match args.next() {
		None => Config::default(),
		Some(path) => {
			let json = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
			Config::from_json(&json)?
		}
	};
	logging::console::init(config.log_level, &[])?;

	let json = std::fs::read_to_string(&data_path).with_context(|| format!("Failed to read {data_path}"))?;
	let cache = ResourceCache::from_json(&json)?;
	log::info!("Checking {} resources from {data_path}", cache.len());

	let mut invalid = 0;
	for (key, _resource) in cache.iter() {
		let Some(mut dialog) = DialogState::open_for_edit(&cache, key) else {
			continue;
		};
		if dialog.validate(&cache, &config.rules) {
			continue;
		}
		invalid += 1;
		for (field, error) in dialog.errors().iter() {
			log::warn!(target: "resource_check", "{key}: {field:?}: {error}");
		}
	}

	match invalid {
		0 => log::info!("All resources pass validation"),
		count => log::warn!("{count} resources fail validation"),
	}
	Ok(())
}
