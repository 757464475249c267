//! Client for the console endpoint that creates and updates shared resources.

mod error;
pub use error::*;
mod params;
pub use params::*;
mod response;
pub use response::*;

use futures_util::future::LocalBoxFuture;
use resource_form::{ResourceDraft, Submission};

/// Default path of the actions endpoint, relative to the console root.
pub static ACTIONS_PATH: &'static str = "/sharedResourcesActions.html";

/// Persists resources on behalf of the dialog.
pub trait ResourceActions {
	fn add(&self, draft: &ResourceDraft) -> LocalBoxFuture<'static, Result<(), Error>>;

	fn edit(
		&self,
		id: &str,
		old_name: &str,
		draft: &ResourceDraft,
	) -> LocalBoxFuture<'static, Result<(), Error>>;

	fn submit(&self, submission: &Submission) -> LocalBoxFuture<'static, Result<(), Error>> {
		match submission {
			Submission::Add(draft) => self.add(draft),
			Submission::Edit { id, old_name, draft } => self.edit(id, old_name, draft),
		}
	}
}

/// Posts form-encoded requests to the console's actions endpoint.
#[derive(Clone)]
pub struct HttpActions {
	client: reqwest::Client,
	endpoint: String,
	project_id: String,
}

impl HttpActions {
	pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> Result<Self, Error> {
		let client = reqwest::Client::builder().build()?;
		Ok(Self {
			client,
			endpoint: endpoint.into(),
			project_id: project_id.into(),
		})
	}

	fn post(&self, action: Action, params: Vec<(&'static str, String)>) -> LocalBoxFuture<'static, Result<(), Error>> {
		log::debug!(target: "resource_actions", "{} -> {}", action.as_str(), self.endpoint);
		let builder = self.client.post(&self.endpoint).form(&params);
		Box::pin(async move {
			let response = builder.send().await?;
			let status = response.status();
			if !status.is_success() {
				return Err(Error::Status(status.as_u16()));
			}
			let body = response.text().await?;
			let messages = parse_errors(&body);
			if !messages.is_empty() {
				return Err(Error::Rejected(messages));
			}
			log::info!(target: "resource_actions", "{} succeeded", action.as_str());
			Ok(())
		})
	}
}

impl ResourceActions for HttpActions {
	fn add(&self, draft: &ResourceDraft) -> LocalBoxFuture<'static, Result<(), Error>> {
		let params = form_params(&self.project_id, Action::Add, draft);
		self.post(Action::Add, params)
	}

	fn edit(
		&self,
		id: &str,
		old_name: &str,
		draft: &ResourceDraft,
	) -> LocalBoxFuture<'static, Result<(), Error>> {
		let mut params = form_params(&self.project_id, Action::Edit, draft);
		params.push((PARAM_RESOURCE_ID, id.to_owned()));
		params.push((PARAM_OLD_RESOURCE_NAME, old_name.to_owned()));
		self.post(Action::Edit, params)
	}
}
