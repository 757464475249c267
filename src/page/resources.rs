use crate::components::resource_dialog::Context;
use resource_form::{ResourceCache, ResourceValue};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ResourcesPageProps {
	pub cache: Rc<ResourceCache>,
}

/// The project's resource list, with the buttons that open the add/edit dialog.
#[function_component]
pub fn ResourcesPage(ResourcesPageProps { cache }: &ResourcesPageProps) -> Html {
	let context = use_context::<Context>().unwrap();

	let rows = cache.iter().map(|(key, resource)| {
		let description = match &resource.value {
			ResourceValue::Infinite => "Infinite".to_owned(),
			ResourceValue::Quoted(quota) => format!("Quota: {quota}"),
			ResourceValue::Custom(values) => format!("Custom values: {}", values.join(", ")),
		};
		html! {
			<tr key={key.clone()} class={classes!((!resource.enabled).then_some("text-muted"))}>
				<td>{resource.name.clone()}</td>
				<td>{description}</td>
				<td>{if resource.enabled { "Enabled" } else { "Disabled" }}</td>
				<td class="text-end">
					<button type="button" class="btn btn-sm btn-outline-secondary" onclick={context.open_for_edit(key.clone())}>
						{"Edit"}
					</button>
				</td>
			</tr>
		}
	});

	html! {
		<div class="container my-3">
			<div class="d-flex align-items-center mb-2">
				<h3 class="me-auto mb-0">{"Shared Resources"}</h3>
				<button type="button" class="btn btn-primary" onclick={context.open_for_add()}>
					{"Add new resource"}
				</button>
			</div>
			{match cache.is_empty() {
				true => html!(<p class="text-muted">{"There are no resources defined in this project."}</p>),
				false => html! {
					<table class="table align-middle">
						<thead>
							<tr><th>{"Name"}</th><th>{"Type"}</th><th>{"State"}</th><th /></tr>
						</thead>
						<tbody>{rows.collect::<Html>()}</tbody>
					</table>
				},
			}}
		</div>
	}
}
