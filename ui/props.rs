use serde_json::Value;
use thiserror::Error;

/// A problem with a component's props. These never stop a render, they are reported so the caller can fix them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PropError {
	#[error("the prop `{prop}` is marked as required in `{component}`, but its value is `{found}`")]
	Missing {
		component: &'static str,
		prop: &'static str,
		found: &'static str,
	},
	#[error("invalid prop `{prop}` of type `{found}` supplied to `{component}`, expected `string`")]
	InvalidType {
		component: &'static str,
		prop: &'static str,
		found: &'static str,
	},
}

/// Check that each of `props` is a string in `value`, in the order given.
pub(crate) fn check_required_strings(
	component: &'static str,
	props: &[&'static str],
	value: &Value,
) -> Vec<PropError> {
	props
		.iter()
		.filter_map(|&prop| {
			let found = match value.get(prop) {
				None => {
					return Some(PropError::Missing {
						component,
						prop,
						found: "undefined",
					})
				}
				Some(Value::Null) => {
					return Some(PropError::Missing {
						component,
						prop,
						found: "null",
					})
				}
				Some(Value::String(_)) => return None,
				Some(Value::Bool(_)) => "boolean",
				Some(Value::Number(_)) => "number",
				Some(Value::Array(_)) => "array",
				Some(Value::Object(_)) => "object",
			};
			Some(PropError::InvalidType {
				component,
				prop,
				found,
			})
		})
		.collect()
}

/// Numbers print as text, anything else that is not a string is absent.
pub(crate) fn read_string(value: &Value, prop: &str) -> Option<String> {
	match value.get(prop)? {
		Value::String(value) => Some(value.clone()),
		Value::Number(value) => Some(value.to_string()),
		_ => None,
	}
}

pub(crate) fn warn_prop_errors(errors: &[PropError]) {
	if cfg!(debug_assertions) {
		for error in errors {
			log::warn!("failed prop type: {}", error);
		}
	}
}

#[test]
fn test_check_required_strings() {
	let value = serde_json::json!({
		"a": "ok",
		"b": null,
		"c": 3,
		"d": [],
		"extra": true,
	});
	let errors = check_required_strings("Test", &["a", "b", "c", "d", "e"], &value);
	assert_eq!(
		errors,
		vec![
			PropError::Missing {
				component: "Test",
				prop: "b",
				found: "null"
			},
			PropError::InvalidType {
				component: "Test",
				prop: "c",
				found: "number"
			},
			PropError::InvalidType {
				component: "Test",
				prop: "d",
				found: "array"
			},
			PropError::Missing {
				component: "Test",
				prop: "e",
				found: "undefined"
			},
		]
	);
}

#[test]
fn test_check_non_object() {
	let errors = check_required_strings("Test", &["a"], &serde_json::json!("a"));
	assert_eq!(
		errors,
		vec![PropError::Missing {
			component: "Test",
			prop: "a",
			found: "undefined"
		}]
	);
}

#[test]
fn test_prop_error_messages() {
	let missing = PropError::Missing {
		component: "Alert",
		prop: "text",
		found: "undefined",
	};
	assert_eq!(
		missing.to_string(),
		"the prop `text` is marked as required in `Alert`, but its value is `undefined`"
	);
	let invalid = PropError::InvalidType {
		component: "Alert",
		prop: "icon",
		found: "number",
	};
	assert_eq!(
		invalid.to_string(),
		"invalid prop `icon` of type `number` supplied to `Alert`, expected `string`"
	);
}

#[test]
fn test_read_string() {
	let value = serde_json::json!({ "s": "x", "n": 4, "b": false });
	assert_eq!(read_string(&value, "s"), Some("x".to_owned()));
	assert_eq!(read_string(&value, "n"), Some("4".to_owned()));
	assert_eq!(read_string(&value, "b"), None);
	assert_eq!(read_string(&value, "missing"), None);
}
