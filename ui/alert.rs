use crate::glyph::Glyph;
use crate::icon::Icon;
use crate::props::{check_required_strings, read_string, warn_prop_errors, PropError};
use html::{component, html, Node};
use serde_json::Value;

/// Every alert icon is drawn in this neutral gray.
pub const ALERT_ICON_FILL: &str = "#666666";

const REQUIRED_PROPS: [&str; 3] = ["text", "icon", "alertType"];

#[component]
pub fn Alert(text: String, alert_type: String, icon: String) {
	html! {
		<AlertUnchecked
			text={Some(text)}
			alert_type={Some(alert_type)}
			icon={Some(icon)}
		/>
	}
}

/// The markup for [`Alert`] when props may be absent. Absent props are left out of the output rather than replaced with defaults.
#[component]
pub fn AlertUnchecked(text: Option<String>, alert_type: Option<String>, icon: Option<String>) {
	html! {
		<div class="alert">
			<Icon icon_type={icon} title={alert_type} fill={ALERT_ICON_FILL.to_owned()} />
			{text}
		</div>
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertProps {
	pub text: Option<String>,
	pub alert_type: Option<String>,
	pub icon: Option<String>,
}

impl AlertProps {
	pub fn new(
		text: impl Into<String>,
		alert_type: impl Into<String>,
		icon: impl Into<String>,
	) -> AlertProps {
		AlertProps {
			text: Some(text.into()),
			alert_type: Some(alert_type.into()),
			icon: Some(icon.into()),
		}
	}

	/// Problems are logged in debug builds and the affected props are left absent.
	pub fn from_json(value: &Value) -> AlertProps {
		warn_prop_errors(&AlertProps::check(value));
		AlertProps {
			text: read_string(value, "text"),
			alert_type: read_string(value, "alertType"),
			icon: read_string(value, "icon"),
		}
	}

	pub fn check(value: &Value) -> Vec<PropError> {
		check_required_strings("Alert", &REQUIRED_PROPS, value)
	}

	pub fn glyph(&self) -> Option<Glyph> {
		self.icon.as_deref().and_then(Glyph::from_name)
	}

	pub fn render(self) -> Node {
		html! {
			<AlertUnchecked text={self.text} alert_type={self.alert_type} icon={self.icon} />
		}
	}
}

#[cfg(test)]
fn alert_triangle_html(text: &str) -> String {
	format!(
		"<div class=\"alert\"><svg class=\"icon\" data-icon=\"alert-triangle\" fill=\"#666666\" height=\"16\" role=\"img\" viewBox=\"0 0 24 24\" width=\"16\"><title>warning</title><path d=\"{}\" /></svg>{}</div>",
		Glyph::AlertTriangle.path(),
		text,
	)
}

#[test]
fn test_alert() {
	let html = html! {
		<Alert
			text={"Disk space low".to_owned()}
			alert_type={"warning".to_owned()}
			icon={"alert-triangle".to_owned()}
		/>
	}
	.render_to_string();
	assert_eq!(html, alert_triangle_html("Disk space low"));
}

#[test]
fn test_alert_is_deterministic() {
	let props = AlertProps::new("Disk space low", "warning", "alert-triangle");
	let first = props.clone().render().render_to_string();
	let second = props.render().render_to_string();
	assert_eq!(first, second);
}

#[test]
fn test_alert_props_render_like_alert() {
	let props = AlertProps::new("Disk space low", "warning", "alert-triangle");
	assert_eq!(props.glyph(), Some(Glyph::AlertTriangle));
	assert_eq!(
		props.render().render_to_string(),
		alert_triangle_html("Disk space low")
	);
}

#[test]
fn test_alert_icon_precedes_text_once() {
	let html = AlertProps::new("<b>careful</b>", "warning", "alert-triangle")
		.render()
		.render_to_string();
	assert_eq!(html.matches("<svg").count(), 1);
	assert!(html.ends_with("</svg>&lt;b&gt;careful&lt;/b&gt;</div>"));
}

#[test]
fn test_alert_fill_is_fixed() {
	for (alert_type, icon) in [("info", "info-circle"), ("error", "x-circle"), ("", "")].iter() {
		let html = AlertProps::new("text", *alert_type, *icon)
			.render()
			.render_to_string();
		assert_eq!(html.matches("fill=\"#666666\"").count(), 1);
	}
}

#[test]
fn test_alert_empty_text() {
	let value = serde_json::json!({ "text": "", "alertType": "info", "icon": "info-circle" });
	assert!(AlertProps::check(&value).is_empty());
	let props = AlertProps::from_json(&value);
	assert_eq!(props.text.as_deref(), Some(""));
	let html = props.render().render_to_string();
	assert!(html.contains("<title>info</title>"));
	assert!(html.ends_with("</svg></div>"));
}

#[test]
fn test_alert_missing_icon() {
	let value = serde_json::json!({ "text": "Disk space low", "alertType": "warning" });
	assert_eq!(
		AlertProps::check(&value),
		vec![PropError::Missing {
			component: "Alert",
			prop: "icon",
			found: "undefined",
		}]
	);
	let html = AlertProps::from_json(&value).render().render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="alert"><svg class="icon" fill="#666666" height="16" role="img" viewBox="0 0 24 24" width="16"><title>warning</title></svg>Disk space low</div>"###);
}

#[test]
fn test_alert_missing_props_have_no_defaults() {
	let props = AlertProps::from_json(&serde_json::json!({}));
	assert_eq!(props, AlertProps::default());
	assert_eq!(AlertProps::check(&serde_json::json!({})).len(), 3);
	let html = props.render().render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="alert"><svg class="icon" fill="#666666" height="16" role="img" viewBox="0 0 24 24" width="16"></svg></div>"###);
}

#[test]
fn test_alert_wrong_types() {
	let value = serde_json::json!({ "text": 42, "alertType": true, "icon": "bell" });
	let errors = AlertProps::check(&value);
	assert_eq!(errors.len(), 2);
	assert!(errors
		.iter()
		.all(|error| matches!(error, PropError::InvalidType { .. })));
	let props = AlertProps::from_json(&value);
	assert_eq!(props.text.as_deref(), Some("42"));
	assert_eq!(props.alert_type, None);
	let html = props.render().render_to_string();
	assert!(!html.contains("<title>"));
	assert!(html.ends_with("</svg>42</div>"));
}

#[cfg(test)]
struct CapturedLogs(std::sync::Mutex<Vec<(log::Level, String)>>);

#[cfg(test)]
impl log::Log for CapturedLogs {
	fn enabled(&self, _metadata: &log::Metadata) -> bool {
		true
	}
	fn log(&self, record: &log::Record) {
		self.0
			.lock()
			.unwrap()
			.push((record.level(), record.args().to_string()));
	}
	fn flush(&self) {}
}

#[test]
fn test_alert_missing_prop_warns_in_debug_builds() {
	static LOGS: CapturedLogs = CapturedLogs(std::sync::Mutex::new(Vec::new()));
	log::set_logger(&LOGS).unwrap();
	log::set_max_level(log::LevelFilter::Warn);
	let props = AlertProps::from_json(&serde_json::json!({ "text": "hi", "alertType": "warning" }));
	assert_eq!(props.icon, None);
	let expected = "failed prop type: the prop `icon` is marked as required in `Alert`, but its value is `undefined`";
	let logs = LOGS.0.lock().unwrap();
	// Other tests in this binary may log the same problem concurrently.
	let warnings = logs
		.iter()
		.filter(|(level, message)| *level == log::Level::Warn && message == expected)
		.count();
	if cfg!(debug_assertions) {
		assert!(warnings >= 1);
	} else {
		assert_eq!(warnings, 0);
	}
	assert!(logs.iter().all(|(level, _)| *level == log::Level::Warn));
}
