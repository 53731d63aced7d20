//! Server side html rendering. Build a tree of [`Node`]s with the [`html!`] macro, define components with [`component`], and serialize the tree with [`Node::render_to_string`].

use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

extern crate self as html;

#[derive(Clone, From)]
pub enum Node {
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone)]
pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

/// A component renders itself, consuming its props and the children passed to it in markup.
pub trait Component: ComponentClone {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

pub trait ComponentClone {
	fn clone_box(&self) -> Box<dyn Component>;
}

impl<T> ComponentClone for T
where
	T: Component + Clone + 'static,
{
	fn clone_box(&self) -> Box<dyn Component> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn Component> {
	fn clone(&self) -> Box<dyn Component> {
		self.clone_box()
	}
}

impl Node {
	/// Render every component in the tree and serialize the result.
	pub fn render_to_string(mut self) -> String {
		self.render().to_string()
	}

	fn render(&mut self) -> &mut Node {
		match self {
			Node::Fragment(FragmentNode { children }) | Node::Host(HostNode { children, .. }) => {
				for child in children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => node.render(),
			Node::Vec(nodes) => {
				for node in nodes.iter_mut() {
					node.render();
				}
			}
			Node::Option(Some(node)) => {
				node.render();
			}
			Node::Option(None) | Node::EscapedText(_) => {}
		};
		self
	}
}

impl ComponentNode {
	fn render(&mut self) {
		if let ComponentNode::Unrendered {
			component,
			children,
		} = self
		{
			if let Some(component) = component.take() {
				let children = children.take().unwrap_or_default();
				let mut rendered = component.render(children);
				rendered.render();
				*self = ComponentNode::Rendered(Box::new(rendered));
			}
		}
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => f.write_str("&gt;")?,
			'<' => f.write_str("&lt;")?,
			'"' => f.write_str("&quot;")?,
			'&' => f.write_str("&amp;")?,
			'\'' => f.write_str("&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(Some(node)) => write!(f, "{}", node),
			Node::Option(None) => Ok(()),
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(Some(true)) => write!(f, " {}", key)?,
				AttributeValue::String(Some(value)) => {
					write!(f, " {}=\"", key)?;
					write_escaped(f, value)?;
					f.write_char('"')?;
				}
				AttributeValue::Bool(_) | AttributeValue::String(None) => {}
			}
		}
		if self.self_closing {
			return write!(f, " />");
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			// Displaying a tree that was never rendered renders a copy of it.
			ComponentNode::Unrendered { .. } => {
				let mut node = self.clone();
				node.render();
				write!(f, "{}", node)
			}
		}
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[test]
fn test_escape_text_and_attributes() {
	let title = "a \"quoted\" <title>".to_owned();
	let node = html! {
		<span title={title}>{"Tom & Jerry's"}</span>
	};
	assert_eq!(
		node.render_to_string(),
		"<span title=\"a &quot;quoted&quot; &lt;title&gt;\">Tom &amp; Jerry&apos;s</span>"
	);
}

#[test]
fn test_optional_attributes() {
	let missing: Option<String> = None;
	let node = html! {
		<input checked={Some(true)} disabled={Some(false)} name={missing} type="checkbox" />
	};
	insta::assert_snapshot!(node.render_to_string(), @r###"<input checked type="checkbox" />"###);
}

#[test]
fn test_hyphenated_attributes() {
	let node = html! {
		<path d="M0 0" stroke-width="2" />
	};
	assert_eq!(node.render_to_string(), "<path d=\"M0 0\" stroke-width=\"2\" />");
}

#[test]
fn test_fragment_and_lists() {
	let items = vec!["<b>", "&"];
	let node = html! {
		<>
			{"list: "}
			{items.into_iter().map(|item| html! { <i>{item}</i> }).collect::<Vec<_>>()}
		</>
	};
	assert_eq!(
		node.render_to_string(),
		"list: <i>&lt;b&gt;</i><i>&amp;</i>"
	);
}
