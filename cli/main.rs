//! This module contains the main entrypoint to the alertkit cli.

use alertkit_ui::{Alert, AlertProps, Glyph};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use colored::Colorize;
use html::{html, Node};
use std::{
	io::{Read, Write},
	path::{Path, PathBuf},
};

#[derive(Parser)]
#[clap(about = "Render alerts to html.", disable_help_subcommand = true)]
enum Options {
	#[clap(name = "render")]
	Render(RenderOptions),
	#[clap(name = "check")]
	Check(CheckOptions),
	#[clap(name = "icons")]
	Icons,
}

#[derive(Args, Debug)]
#[clap(about = "render an alert")]
#[clap(long_about = "render an alert from flags or from a json props file")]
struct RenderOptions {
	/// the text to display
	#[clap(long, conflicts_with = "props", required_unless_present = "props")]
	text: Option<String>,
	/// the kind of alert, used as the icon's title
	#[clap(long, conflicts_with = "props", required_unless_present = "props")]
	alert_type: Option<String>,
	/// the name of the icon to draw
	#[clap(long, conflicts_with = "props", required_unless_present = "props")]
	icon: Option<String>,
	/// the path to a json file with `text`, `alertType` and `icon`, or - for stdin
	#[clap(short, long)]
	props: Option<PathBuf>,
	/// the path to write the html to, defaults to stdout
	#[clap(short, long)]
	output: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[clap(about = "check a json props file")]
struct CheckOptions {
	/// the path to a json file with `text`, `alertType` and `icon`, or - for stdin
	#[clap(short, long)]
	props: PathBuf,
}

fn main() {
	let env = env_logger::Env::default().default_filter_or("alertkit=warn");
	env_logger::Builder::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::Render(options) => cli_render(options),
		Options::Check(options) => cli_check(options),
		Options::Icons => cli_icons(),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_render(options: RenderOptions) -> Result<()> {
	let node = render_node(&options)?;
	let mut html = node.render_to_string();
	html.push('\n');
	match options.output {
		Some(output) => std::fs::write(&output, html)
			.with_context(|| format!("failed to write {}", output.display()))?,
		None => std::io::stdout().write_all(html.as_bytes())?,
	}
	Ok(())
}

fn render_node(options: &RenderOptions) -> Result<Node> {
	// Flags go through the typed component, a props file goes through the permissive reader.
	if let Some(path) = options.props.as_deref() {
		let value = read_props(path)?;
		return Ok(AlertProps::from_json(&value).render());
	}
	match (&options.text, &options.alert_type, &options.icon) {
		(Some(text), Some(alert_type), Some(icon)) => Ok(html! {
			<Alert text={text.clone()} alert_type={alert_type.clone()} icon={icon.clone()} />
		}),
		_ => bail!("either --props or all of --text, --alert-type and --icon are required"),
	}
}

fn cli_check(options: CheckOptions) -> Result<()> {
	let value = read_props(&options.props)?;
	let errors = AlertProps::check(&value);
	for error in errors.iter() {
		eprintln!("{}: {}", "warning".yellow().bold(), error);
	}
	if !errors.is_empty() {
		bail!("found {} problem(s) in {}", errors.len(), options.props.display());
	}
	let props = AlertProps::from_json(&value);
	if props.glyph().is_none() {
		eprintln!(
			"{}: no icon named {:?}, run `alertkit icons` to list them",
			"warning".yellow().bold(),
			props.icon.unwrap_or_default(),
		);
	}
	Ok(())
}

fn cli_icons() -> Result<()> {
	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();
	for glyph in Glyph::ALL.iter() {
		writeln!(stdout, "{}", glyph)?;
	}
	Ok(())
}

fn read_props(path: &Path) -> Result<serde_json::Value> {
	let mut json = String::new();
	if path == Path::new("-") {
		std::io::stdin().read_to_string(&mut json)?;
	} else {
		json = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display()))?;
	}
	let value = serde_json::from_str(&json)
		.with_context(|| format!("failed to parse {} as json", path.display()))?;
	Ok(value)
}

#[test]
fn test_render_from_flags() {
	let options = Options::try_parse_from(&[
		"alertkit",
		"render",
		"--text",
		"Disk space low",
		"--alert-type",
		"warning",
		"--icon",
		"alert-triangle",
	])
	.unwrap();
	let options = match options {
		Options::Render(options) => options,
		_ => panic!("expected the render command"),
	};
	let html = render_node(&options).unwrap().render_to_string();
	let expected = AlertProps::new("Disk space low", "warning", "alert-triangle")
		.render()
		.render_to_string();
	assert_eq!(html, expected);
}

#[test]
fn test_render_requires_all_flags() {
	assert!(Options::try_parse_from(&["alertkit", "render", "--text", "hi"]).is_err());
	assert!(Options::try_parse_from(&[
		"alertkit",
		"render",
		"--text",
		"hi",
		"--props",
		"props.json"
	])
	.is_err());
}

#[test]
fn test_render_props_file_missing_icon() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("props.json");
	std::fs::write(&path, r#"{ "text": "Disk space low", "alertType": "warning" }"#).unwrap();
	let path = path.to_str().unwrap();
	let options = match Options::try_parse_from(&["alertkit", "render", "--props", path]).unwrap() {
		Options::Render(options) => options,
		_ => panic!("expected the render command"),
	};
	let html = render_node(&options).unwrap().render_to_string();
	assert!(html.contains("<title>warning</title>"));
	assert!(html.ends_with("</svg>Disk space low</div>"));
	assert!(!html.contains("data-icon"));
}

#[test]
fn test_check_rejects_null_text() {
	let dir = tempfile::tempdir().unwrap();
	let props = dir.path().join("props.json");
	std::fs::write(
		&props,
		r#"{ "text": null, "alertType": "warning", "icon": "alert-triangle" }"#,
	)
	.unwrap();
	let error = cli_check(CheckOptions { props }).unwrap_err();
	assert!(error.to_string().starts_with("found 1 problem(s)"));
}

#[test]
fn test_check_accepts_unknown_icon() {
	let dir = tempfile::tempdir().unwrap();
	let props = dir.path().join("props.json");
	std::fs::write(
		&props,
		r#"{ "text": "Launch", "alertType": "info", "icon": "rocket" }"#,
	)
	.unwrap();
	assert!(cli_check(CheckOptions { props }).is_ok());
}

#[test]
fn test_check_reports_invalid_json() {
	let dir = tempfile::tempdir().unwrap();
	let props = dir.path().join("props.json");
	std::fs::write(&props, "{ not json").unwrap();
	let error = cli_check(CheckOptions { props }).unwrap_err();
	assert!(error.to_string().starts_with("failed to parse"));
}
