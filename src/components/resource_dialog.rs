use crate::{
	bootstrap,
	components::Spinner,
	utility::{is_submit_shortcut, InputExt},
};
use enumset::EnumSet;
use resource_actions::ResourceActions;
use resource_form::{DialogState, Field, Kind, ResourceCache, Row, Submission, ValidationRules};
use std::rc::Rc;
use wasm_bindgen::{prelude::Closure, JsCast};
use yew::prelude::*;

/// Whatever persists resources on behalf of the dialog.
#[derive(Clone)]
pub struct ActionsHandle(pub Rc<dyn ResourceActions>);
impl PartialEq for ActionsHandle {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	pub cache: Rc<ResourceCache>,
	pub rules: Rc<ValidationRules>,
	pub actions: ActionsHandle,
	/// Emitted after the actions endpoint accepted a submission.
	#[prop_or_default]
	pub on_saved: Callback<()>,
	#[prop_or_default]
	pub children: Children,
}

/// Owns the dialog state and renders the [`Dialog`] next to its children,
/// which can open it through [`Context`].
#[function_component]
pub fn Provider(
	ProviderProps {
		cache,
		rules,
		actions,
		on_saved,
		children,
	}: &ProviderProps,
) -> Html {
	let state = use_reducer_eq({
		let cache = cache.clone();
		let rules = rules.clone();
		move || State::new(cache, rules)
	});
	let context = Context::from(state.clone());

	// Keep the dialog looking at whatever the page currently knows about.
	use_effect_with((cache.clone(), rules.clone()), {
		let context = context.clone();
		move |(cache, rules): &(Rc<ResourceCache>, Rc<ValidationRules>)| {
			context.dispatch(Action::Sync(cache.clone(), rules.clone()));
		}
	});

	// Hand each accepted submission to the actions collaborator.
	use_effect_with(state.pending.clone(), {
		let context = context.clone();
		let actions = actions.clone();
		let on_saved = on_saved.clone();
		move |pending: &Option<(u32, Submission)>| {
			let Some((session, submission)) = pending else { return };
			let session = *session;
			log::info!(target: "resource_dialog", "Saving resource {:?}", submission.draft().name);
			let request = actions.0.submit(submission);
			wasm_bindgen_futures::spawn_local(async move {
				let result = request.await;
				if let Err(err) = &result {
					log::error!(target: "resource_dialog", "Failed to save resource: {err}");
				}
				let saved = result.is_ok();
				context.dispatch(Action::Finished(session, result.map_err(|err| err.field_messages())));
				if saved {
					on_saved.emit(());
				}
			});
		}
	});

	html! {
		<ContextProvider<Context> context={context}>
			{children.clone()}
			<Dialog />
		</ContextProvider<Context>>
	}
}

/// Dispatches reducer messages about the resource dialog.
#[derive(Clone, PartialEq)]
pub struct Context(UseReducerHandle<State>);
impl From<UseReducerHandle<State>> for Context {
	fn from(value: UseReducerHandle<State>) -> Self {
		Self(value)
	}
}
impl Context {
	pub fn callback<T, F>(&self, fn_action: F) -> Callback<T, ()>
	where
		F: Fn(T) -> Action + 'static,
	{
		let handle = self.0.clone();
		Callback::from(move |input: T| {
			handle.dispatch(fn_action(input));
		})
	}

	pub fn dispatch(&self, action: Action) {
		self.0.dispatch(action);
	}

	pub fn open_for_add(&self) -> Callback<MouseEvent> {
		self.callback(|_| Action::OpenForAdd)
	}

	pub fn open_for_edit(&self, key: impl Into<AttrValue>) -> Callback<MouseEvent> {
		let key = key.into();
		self.callback(move |_| Action::OpenForEdit(key.clone()))
	}
}
impl std::ops::Deref for Context {
	type Target = State;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Clone, PartialEq, Debug)]
pub struct State {
	cache: Rc<ResourceCache>,
	rules: Rc<ValidationRules>,
	/// If none, no action is taken. Otherwise the bootstrap modal is told to show or hide.
	should_show: Option<bool>,
	/// The open dialog session, cleared once the modal finished hiding.
	dialog: Option<DialogState>,
	/// Bumped on every open, so answers for an earlier session are dropped.
	session: u32,
	/// A validated submission waiting for the actions collaborator to answer, tagged with its session.
	pending: Option<(u32, Submission)>,
}

impl State {
	fn new(cache: Rc<ResourceCache>, rules: Rc<ValidationRules>) -> Self {
		Self {
			cache,
			rules,
			should_show: None,
			dialog: None,
			session: 0,
			pending: None,
		}
	}

	pub fn dialog(&self) -> Option<&DialogState> {
		self.dialog.as_ref()
	}

	fn open(&mut self, dialog: DialogState) {
		self.dialog = Some(dialog);
		self.session = self.session.wrapping_add(1);
		self.pending = None;
		self.should_show = Some(true);
	}
}

#[derive(Clone, PartialEq)]
pub enum Action {
	OpenForAdd,
	OpenForEdit(AttrValue),
	SetName(String),
	SetKind(Kind),
	SetQuota(String),
	SetValues(String),
	SetEnabled(bool),
	Submit,
	/// The actions collaborator answered the submission made in the given session.
	Finished(u32, Result<(), Vec<(Option<Field>, String)>>),
	/// Hide the modal. Ignored while a submission is in flight.
	Close,
	/// Should only be dispatched by [`Dialog`] when bootstrap finished hiding the modal.
	Closed,
	Sync(Rc<ResourceCache>, Rc<ValidationRules>),
}

impl Reducible for State {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut state = (*self).clone();
		match action {
			Action::OpenForAdd => state.open(DialogState::open_for_add()),
			Action::OpenForEdit(key) => match DialogState::open_for_edit(&state.cache, &key) {
				Some(dialog) => state.open(dialog),
				None => {
					log::warn!(target: "resource_dialog", "No cached resource for {key:?}");
					return self;
				}
			},
			Action::Sync(cache, rules) => {
				state.cache = cache;
				state.rules = rules;
			}
			Action::Closed => {
				state.should_show = None;
				state.dialog = None;
				state.pending = None;
			}
			Action::Close => {
				if state.dialog.as_ref().map_or(false, DialogState::is_submitting) {
					return self;
				}
				state.should_show = Some(false);
			}
			action => {
				let Some(dialog) = state.dialog.as_mut() else {
					return self;
				};
				match action {
					Action::SetName(name) => dialog.fields.name = name,
					Action::SetKind(kind) => dialog.set_kind(kind),
					Action::SetQuota(quota) => dialog.fields.quota = quota,
					Action::SetValues(values) => dialog.fields.custom_values = values,
					Action::SetEnabled(enabled) => dialog.fields.enabled = enabled,
					Action::Submit => {
						if dialog.is_submitting() {
							return self;
						}
						let session = state.session;
						state.pending = dialog
							.begin_submit(&state.cache, &state.rules)
							.map(|submission| (session, submission));
					}
					Action::Finished(session, result) => {
						if session != state.session || !dialog.is_submitting() {
							log::debug!(target: "resource_dialog", "Dropping answer for stale session {session}");
							return self;
						}
						state.pending = None;
						if dialog.finish_submit(result) {
							state.should_show = Some(false);
						}
					}
					_ => return self,
				}
			}
		}
		Rc::new(state)
	}
}

/// The add/edit resource modal. Controlled via [`State`]/[`Context`].
#[function_component]
pub fn Dialog() -> Html {
	let context = use_context::<Context>().unwrap();
	let node = use_node_ref();
	let name_input = use_node_ref();
	let modal = use_state(|| None::<bootstrap::Modal>);

	// Bootstrap emits these once its show/hide animations finish.
	let js_on_hidden: Rc<Closure<dyn Fn()>> = use_memo((), {
		let context = context.clone();
		move |_| Closure::<dyn Fn()>::new(move || context.dispatch(Action::Closed))
	});
	let js_on_shown: Rc<Closure<dyn Fn()>> = use_memo((), {
		let name_input = name_input.clone();
		move |_| {
			Closure::<dyn Fn()>::new(move || {
				if let Some(input) = name_input.cast::<web_sys::HtmlElement>() {
					let _ = input.focus();
				}
			})
		}
	});

	use_effect_with(node.clone(), {
		let modal = modal.clone();
		move |node: &NodeRef| {
			modal.set(bootstrap::Modal::from_node(node));
			if let Some(node) = node.get() {
				let _ = node.add_event_listener_with_callback(
					"hidden.bs.modal",
					(*js_on_hidden).as_ref().unchecked_ref(),
				);
				let _ = node.add_event_listener_with_callback(
					"shown.bs.modal",
					(*js_on_shown).as_ref().unchecked_ref(),
				);
			}
		}
	});

	use_effect_with((context.should_show, modal.is_some()), {
		let modal = modal.clone();
		move |(should_show, _has_modal): &(Option<bool>, bool)| {
			let Some(modal) = &*modal else { return };
			match should_show {
				Some(true) => modal.show(wasm_bindgen::JsValue::UNDEFINED),
				Some(false) => modal.hide(),
				None => {}
			}
		}
	});

	let on_keydown = Callback::from({
		let context = context.clone();
		move |evt: KeyboardEvent| {
			if is_submit_shortcut(&evt) {
				evt.prevent_default();
				context.dispatch(Action::Submit);
			} else if evt.key() == "Escape" {
				// The modal sets data-bs-keyboard="false", so Escape is routed here.
				evt.prevent_default();
				context.dispatch(Action::Close);
			}
		}
	});

	let content = match context.dialog() {
		None => html! {},
		Some(dialog) => html!(<DialogContent dialog={dialog.clone()} {name_input} />),
	};

	html! {
		<div
			class="modal fade" id="resourceDialog" tabindex="-1"
			data-bs-backdrop="static" data-bs-keyboard="false" aria-labelledby="resourceDialogTitle"
			ref={node} onkeydown={on_keydown}
		>
			<div class="modal-dialog modal-dialog-centered">
				<div class="modal-content">
					{content}
				</div>
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct DialogContentProps {
	dialog: DialogState,
	name_input: NodeRef,
}

#[function_component]
fn DialogContent(DialogContentProps { dialog, name_input }: &DialogContentProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let fields = &dialog.fields;
	let errors = dialog.errors();
	let submitting = dialog.is_submitting();
	let rows = dialog.visible_rows();

	let on_name = context.callback(|evt: InputEvent| Action::SetName(evt.input_value().unwrap_or_default()));
	let on_quota = context.callback(|evt: InputEvent| Action::SetQuota(evt.input_value().unwrap_or_default()));
	let on_values = context.callback(|evt: InputEvent| Action::SetValues(evt.input_value().unwrap_or_default()));
	let on_enabled = context.callback(|evt: Event| Action::SetEnabled(evt.input_checked().unwrap_or(true)));
	let on_kind = Callback::from({
		let context = context.clone();
		move |evt: Event| {
			if let Some(kind) = evt.select_value_t::<Kind>() {
				context.dispatch(Action::SetKind(kind));
			}
		}
	});
	let on_submit = Callback::from({
		let context = context.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			context.dispatch(Action::Submit);
		}
	});
	let on_close = context.callback(|_: MouseEvent| Action::Close);

	let field_error = |field: Field| match errors.get(field) {
		None => html! {},
		Some(error) => html! {
			<div class="invalid-feedback d-block" id={field.error_element_id()}>{error.to_string()}</div>
		},
	};
	let input_classes = |field: Field| classes!("form-control", errors.get(field).is_some().then_some("is-invalid"));
	let row_classes = |row: Row| classes!("mb-3", (!rows.contains(row)).then_some("d-none"));

	html! {
		<form onsubmit={on_submit}>
			<div class="modal-header">
				<h5 class="modal-title" id="resourceDialogTitle">{dialog.title()}</h5>
				<button type="button" class="btn-close" aria-label="Close" disabled={submitting} onclick={on_close.clone()} />
			</div>
			<fieldset class="modal-body" disabled={submitting}>
				<div class="mb-3">
					<label for="resource_name" class="form-label">{"Resource name"}</label>
					<input
						type="text" id="resource_name" class={input_classes(Field::Name)}
						ref={name_input.clone()}
						value={fields.name.clone()} oninput={on_name}
					/>
					{field_error(Field::Name)}
					{dialog.is_renamed().then(|| html! {
						<div class="form-text text-warning" id="nameAttention">
							{"Renaming the resource also updates the build configurations that use it."}
						</div>
					})}
				</div>
				<div class="mb-3">
					<label for="resource_type" class="form-label">{"Resource type"}</label>
					<select id="resource_type" class="form-select" onchange={on_kind}>
						{EnumSet::<Kind>::all().iter().map(|kind| html! {
							<option value={kind.as_str()} selected={kind == fields.kind}>{kind.display_name()}</option>
						}).collect::<Html>()}
					</select>
				</div>
				<div class={row_classes(Row::Quota)} id={Row::Quota.element_id()}>
					<label for="resource_quota" class="form-label">{"Resource quota"}</label>
					<input
						type="text" id="resource_quota" class={input_classes(Field::Quota)}
						value={fields.quota.clone()} oninput={on_quota}
					/>
					<div class="form-text">{"Maximum number of builds that can hold the resource at once."}</div>
					{field_error(Field::Quota)}
				</div>
				<div class={row_classes(Row::CustomValues)} id={Row::CustomValues.element_id()}>
					<label for="customValues" class="form-label">{"Values"}</label>
					<textarea
						id="customValues" rows="5" class={input_classes(Field::Values)}
						value={fields.custom_values.clone()} oninput={on_values}
					/>
					<div class="form-text">{"One value per line."}</div>
					{field_error(Field::Values)}
				</div>
				<div class="form-check">
					<input
						type="checkbox" id="resource_enabled" class="form-check-input"
						checked={fields.enabled} onchange={on_enabled}
					/>
					<label for="resource_enabled" class="form-check-label">{"Enabled"}</label>
				</div>
				{errors.general().map(|message| html! {
					<div class="alert alert-danger mt-3 mb-0" role="alert">{message.to_owned()}</div>
				})}
			</fieldset>
			<div class="modal-footer">
				{submitting.then(|| html! {
					<span id="saving" class="me-auto d-flex align-items-center">
						<Spinner small=true />
						<span class="ms-2">{"Saving..."}</span>
					</span>
				})}
				<button type="button" class="btn btn-secondary" disabled={submitting} onclick={on_close}>{"Cancel"}</button>
				<button type="submit" class="btn btn-primary" disabled={submitting}>{"Save"}</button>
			</div>
		</form>
	}
}
