use html::{component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<p class="greeting">{"Hello, "}{name}{children}</p>
	}
}

#[component]
fn Badge(label: Option<String>, data_kind: String) {
	html! {
		<span data-kind={data_kind}>{label}</span>
	}
}

#[test]
fn test_component() {
	let html = html!(<Greeting name={"World".to_owned()}>{"!"}</Greeting>).render_to_string();
	assert_eq!(html, "<p class=\"greeting\">Hello, World!</p>");
}

#[test]
fn test_hyphenated_component_props() {
	let html = html!(<Badge label={None} data-kind={"new".to_owned()} />).render_to_string();
	assert_eq!(html, "<span data-kind=\"new\"></span>");
}

#[test]
fn test_nested_components_render_depth_first() {
	let names = vec!["a", "b"];
	let html = html! {
		<div>
			{names.into_iter().map(|name| html! {
				<Greeting name={name.to_owned()} />
			}).collect::<Vec<_>>()}
		</div>
	}
	.render_to_string();
	assert_eq!(
		html,
		"<div><p class=\"greeting\">Hello, a</p><p class=\"greeting\">Hello, b</p></div>"
	);
}
