use crate::glyph::Glyph;
use html::{component, html};

#[component]
pub fn Icon(icon_type: Option<String>, title: Option<String>, fill: String) {
	let glyph = icon_type.as_deref().and_then(|name| {
		let glyph = Glyph::from_name(name);
		if glyph.is_none() {
			log::debug!("no glyph named {:?}, drawing an empty icon", name);
		}
		glyph
	});
	html! {
		<svg
			class="icon"
			data-icon={icon_type}
			fill={fill}
			height="16"
			role="img"
			viewBox="0 0 24 24"
			width="16"
		>
			{title.map(|title| html! { <title>{title}</title> })}
			{glyph.map(|glyph| html! { <path d={glyph.path()} /> })}
		</svg>
	}
}

#[test]
fn test_icon() {
	let html = html! {
		<Icon
			icon_type={Some("bell".to_owned())}
			title={Some("reminder".to_owned())}
			fill={"red".to_owned()}
		/>
	}
	.render_to_string();
	assert_eq!(
		html,
		format!(
			"<svg class=\"icon\" data-icon=\"bell\" fill=\"red\" height=\"16\" role=\"img\" viewBox=\"0 0 24 24\" width=\"16\"><title>reminder</title><path d=\"{}\" /></svg>",
			Glyph::Bell.path(),
		)
	);
}

#[test]
fn test_icon_unknown_glyph() {
	let html = html! {
		<Icon icon_type={Some("rocket".to_owned())} title={None} fill={"red".to_owned()} />
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<svg class="icon" data-icon="rocket" fill="red" height="16" role="img" viewBox="0 0 24 24" width="16"></svg>"###);
}
