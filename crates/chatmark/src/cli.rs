//! The `chatmark` command-line tool.
//!
//! ```text
//! chatmark render [TEMPLATE] [--file PATH] [--var KEY=VALUE]... [--vars PATH]
//!                 [--output text|plain|term|legacy|json|tokens]
//!                 [--color auto|always|never]
//! ```
//!
//! The template comes from the positional argument, `--file`, or stdin.
//! Variables are read from a YAML or JSON file first (nested keys become
//! dotted names such as `player.name`), then `--var` pairs override them.
//! The built-in functions are always bound.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use chatmark_parser::Tokenizer;
use chatmark_render::{
    compile, compile_styled, flatten_json, to_ansi, to_json_string_pretty, to_legacy, to_plain,
    ColorChoice, StyledFunctions, StyledSegment, StyledVariables, Variables,
};

/// Render styled chat markup from the command line.
#[derive(Debug, Parser)]
#[command(name = "chatmark", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a template and render it
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template markup. Read from stdin when neither this nor --file is given
    #[arg(conflicts_with = "file")]
    pub template: Option<String>,

    /// Read the template from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Bind a variable; may be repeated
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,

    /// Load variables from a YAML or JSON file
    #[arg(long = "vars", value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// When to emit terminal colors for `term` output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,
}

/// How `render` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Flat text with `§` codes
    Text,
    /// Text only, styling dropped
    Plain,
    /// ANSI terminal colors
    Term,
    /// Styled segments written back as `§` codes
    Legacy,
    /// Chat-component JSON
    Json,
    /// The token stream, one token per line
    Tokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got {:?}", s)),
    }
}

/// Runs a parsed command line, reading stdin only if the template is not
/// given otherwise.
pub fn run(cli: Cli, stdin: impl Read, stdout: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Render(args) => {
            let source = load_template(&args, stdin)?;
            let values = load_values(&args)?;
            let output = render(&source, &values, args.output, args.color.into())?;
            writeln!(stdout, "{}", output).context("failed to write output")?;
        }
    }
    Ok(())
}

/// Renders `source` in the requested format.
pub fn render(
    source: &str,
    values: &BTreeMap<String, String>,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut vars = Variables::with_standard_functions();
            for (name, value) in values {
                vars.insert(name.as_str(), value.as_str());
            }
            compile(source).render(&vars)
        }
        OutputFormat::Tokens => Tokenizer::new(source)
            .map(|token| format!("{:?}", token))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Plain => to_plain(&render_segments(source, values)),
        OutputFormat::Term => to_ansi(&render_segments(source, values), color),
        OutputFormat::Legacy => to_legacy(&render_segments(source, values)),
        OutputFormat::Json => to_json_string_pretty(&render_segments(source, values))
            .context("failed to serialize components")?,
    };
    Ok(rendered)
}

fn render_segments(source: &str, values: &BTreeMap<String, String>) -> Vec<StyledSegment> {
    let mut vars = StyledVariables::new();
    for (name, value) in values {
        vars.insert(name.as_str(), value.as_str());
    }
    compile_styled(source).render(&vars, &StyledFunctions::standard())
}

/// Picks the template source: positional argument, then `--file`, then stdin.
pub fn load_template(args: &RenderArgs, mut stdin: impl Read) -> Result<String> {
    if let Some(template) = &args.template {
        return Ok(template.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()));
    }
    let mut source = String::new();
    stdin
        .read_to_string(&mut source)
        .context("failed to read template from stdin")?;
    // A trailing newline from `echo` or a heredoc is not part of the markup.
    if source.ends_with('\n') {
        source.pop();
        if source.ends_with('\r') {
            source.pop();
        }
    }
    Ok(source)
}

/// Collects variables from `--vars` and `--var`, later entries winning.
pub fn load_values(args: &RenderArgs) -> Result<BTreeMap<String, String>> {
    let mut values = match &args.vars_file {
        Some(path) => read_vars_file(path)?,
        None => BTreeMap::new(),
    };
    for (key, value) in &args.vars {
        values.insert(key.clone(), value.clone());
    }
    Ok(values)
}

fn read_vars_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read variables file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let document: serde_json::Value = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    };

    if !document.is_object() {
        bail!(
            "variables file {} must contain a mapping at the top level",
            path.display()
        );
    }
    Ok(flatten_json(&document))
}
