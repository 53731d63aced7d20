use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse_macro_input;

enum Node {
	String(syn::LitStr),
	Block(syn::Block),
	Fragment(Fragment),
	Element(Element),
}

struct Fragment {
	pub children: Vec<Node>,
}

struct Element {
	pub name: syn::Path,
	pub attributes: Vec<Attribute>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

struct Attribute {
	key: AttributeKey,
	value: Option<AttributeValue>,
}

type AttributeKey = syn::punctuated::Punctuated<syn::Ident, syn::Token![-]>;

enum AttributeValue {
	String(syn::LitStr),
	Block(syn::Block),
}

impl Attribute {
	/// The attribute name as written in markup, `data-icon` stays `data-icon`.
	fn markup_name(&self) -> String {
		self.key
			.iter()
			.map(|ident| ident.unraw().to_string())
			.collect::<Vec<_>>()
			.join("-")
	}

	/// The attribute name as a rust identifier, `alert-type` becomes `alert_type`.
	fn field_name(&self) -> syn::Ident {
		let mut idents = self.key.iter();
		let first = idents.next().unwrap();
		idents.fold(first.clone(), |name, ident| {
			format_ident!("{}_{}", name, ident.unraw(), span = first.span())
		})
	}

	fn value_tokens(&self) -> proc_macro2::TokenStream {
		match &self.value {
			None => {
				let name = self.field_name();
				quote! { #name }
			}
			Some(AttributeValue::String(string)) => quote! { #string },
			Some(AttributeValue::Block(block)) => quote! { #block },
		}
	}
}

fn at_closing_tag(input: syn::parse::ParseStream) -> bool {
	input.peek(syn::Token![<]) && input.peek2(syn::Token![/])
}

fn path_to_string(path: &syn::Path) -> String {
	quote!(#path).to_string()
}

impl syn::parse::Parse for Node {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse::<syn::LitStr>().map(Self::String)
		} else if input.peek(syn::token::Brace) {
			input.parse::<syn::Block>().map(Self::Block)
		} else if input.peek(syn::Token![<]) && input.peek2(syn::Token![>]) {
			input.parse::<Fragment>().map(Self::Fragment)
		} else if input.peek(syn::Token![<]) {
			input.parse::<Element>().map(Self::Element)
		} else {
			Err(syn::Error::new(input.span(), "failed to parse node"))
		}
	}
}

impl syn::parse::Parse for Fragment {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![>]>()?;
		let mut children = Vec::new();
		while !at_closing_tag(input) {
			children.push(input.parse::<Node>()?);
		}
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![/]>()?;
		input.parse::<syn::Token![>]>()?;
		Ok(Self { children })
	}
}

impl syn::parse::Parse for Element {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = input.parse::<syn::Path>()?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			let key = AttributeKey::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
			let value = if input.peek(syn::Token![=]) {
				input.parse::<syn::Token![=]>()?;
				let value = if input.peek(syn::LitStr) {
					input.parse::<syn::LitStr>().map(AttributeValue::String)?
				} else {
					input.parse::<syn::Block>().map(AttributeValue::Block)?
				};
				Some(value)
			} else {
				None
			};
			attributes.push(Attribute { key, value });
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
		}
		input.parse::<syn::Token![>]>()?;
		let mut children = Vec::new();
		if !self_closing {
			while !at_closing_tag(input) {
				children.push(input.parse::<Node>()?);
			}
			input.parse::<syn::Token![<]>()?;
			input.parse::<syn::Token![/]>()?;
			let close_name = input.parse::<syn::Path>()?;
			if path_to_string(&close_name) != path_to_string(&name) {
				return Err(syn::Error::new_spanned(
					close_name,
					format!("expected closing tag for `{}`", path_to_string(&name)),
				));
			}
			input.parse::<syn::Token![>]>()?;
		}
		Ok(Self {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl quote::ToTokens for Node {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		match self {
			Self::String(string) => string.to_tokens(tokens),
			Self::Block(block) => block.to_tokens(tokens),
			Self::Fragment(fragment) => fragment.to_tokens(tokens),
			Self::Element(element) => element.to_tokens(tokens),
		}
	}
}

impl quote::ToTokens for Fragment {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let children = self.children.iter();
		let code = quote! {
			::html::Node::Fragment(::html::FragmentNode {
				children: vec![#(::html::Node::from(#children)),*],
			})
		};
		code.to_tokens(tokens);
	}
}

impl Element {
	fn host_name(&self) -> Option<String> {
		self.name
			.get_ident()
			.map(|ident| ident.to_string())
			.filter(|name| name.starts_with(|c: char| c.is_ascii_lowercase()))
	}
}

impl quote::ToTokens for Element {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let children = self.children.iter();
		let children = quote! { vec![#(::html::Node::from(#children)),*] };
		let code = if let Some(name) = self.host_name() {
			let attributes = self.attributes.iter().map(|attribute| {
				let key = attribute.markup_name();
				let value = attribute.value_tokens();
				quote! { (#key, ::html::AttributeValue::from(#value)) }
			});
			let self_closing = self.self_closing;
			quote! {
				::html::Node::Host(::html::HostNode {
					name: #name,
					attributes: vec![#(#attributes),*],
					children: #children,
					self_closing: #self_closing,
				})
			}
		} else {
			let name = &self.name;
			let fields = self.attributes.iter().map(|attribute| {
				let field = attribute.field_name();
				let value = attribute.value_tokens();
				quote! { #field: #value }
			});
			quote! {
				::html::Node::Component(::html::ComponentNode::Unrendered {
					component: Some(Box::new(#name { #(#fields),* })),
					children: Some(#children),
				})
			}
		};
		code.to_tokens(tokens);
	}
}

fn component_transform(ast: syn::ItemFn) -> TokenStream {
	let attrs = ast.attrs;
	let visibility = ast.vis;
	let struct_name = ast.sig.ident;
	let generics = ast.sig.generics;
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
	let inputs = ast.sig.inputs.iter().collect::<Vec<_>>();
	let block = ast.block;
	let input_patterns = inputs
		.iter()
		.filter_map(|argument| match argument {
			syn::FnArg::Typed(typed) => {
				let pattern = &typed.pat;
				Some(quote!(#pattern))
			}
			_ => None,
		})
		.collect::<Vec<_>>();
	let ast = quote! {
		#(#attrs)*
		#[derive(Clone)]
		#visibility struct #struct_name #generics #where_clause { #(#visibility #inputs),* }
		impl #impl_generics ::html::Component for #struct_name #ty_generics #where_clause {
			#[allow(unused_variables)]
			fn render(self: Box<Self>, children: Vec<::html::Node>) -> ::html::Node {
				let #struct_name { #(#input_patterns),* } = *self;
				::html::Node::from(#block)
			}
		}
	};
	ast.into()
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let ast = parse_macro_input!(input as Node);
	let ast = quote! { #ast };
	ast.into()
}

#[proc_macro_attribute]
pub fn component(_attr: TokenStream, input: TokenStream) -> TokenStream {
	component_transform(parse_macro_input!(input as syn::ItemFn))
}
