//! `rln render` - format a template and print the composed line

use crate::catalog::Catalog;
use crate::compositor::Compositor;
use crate::terminal::{compose_line, TermFactory};
use crate::value::Value;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Template text followed by positional arguments. With --catalog and
    /// --name, every positional is an argument. Arguments are JSON5
    /// values; bare words are taken as strings, image references look
    /// like '{image: "rocket", width: 32, height: 32}'
    pub inputs: Vec<String>,

    /// Catalog file with named templates (.jsonl or .json5)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Template name to look up in the catalog
    #[arg(short, long)]
    pub name: Option<String>,

    /// Read the argument list from a JSON5 array file, before any
    /// positional arguments
    #[arg(long)]
    pub arg_file: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Emit the element list as JSON instead of a composed line
    #[arg(long)]
    pub json: bool,

    /// Decorate image chips with ANSI reverse video
    #[arg(long)]
    pub ansi: bool,
}

pub fn run(args: RenderArgs) -> u8 {
    let mut warned = false;

    let (template, positionals) = match resolve_template(&args, &mut warned) {
        Ok(resolved) => resolved,
        Err(code) => return code,
    };

    let values = match collect_values(&args, positionals) {
        Ok(values) => values,
        Err(code) => return code,
    };

    let mut compositor = Compositor::new(TermFactory::new().with_ansi(args.ansi));
    let warnings = match compositor.format(&template, &values) {
        Ok(warnings) => warnings,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };
    for warning in &warnings {
        eprintln!("Warning: {}", warning.message);
        warned = true;
    }

    if args.json {
        print_json(&compositor);
    } else {
        println!("{}", compose_line(&compositor));
    }

    if args.strict && warned {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    }
}

/// Pick the template from the catalog or the first positional, returning
/// the template text and the positionals that remain as arguments.
fn resolve_template<'a>(
    args: &'a RenderArgs,
    warned: &mut bool,
) -> Result<(String, &'a [String]), u8> {
    if let Some(path) = &args.catalog {
        let Some(name) = &args.name else {
            eprintln!("Error: --catalog requires --name");
            return Err(EXIT_INVALID_ARGS);
        };
        let (catalog, warnings) = match Catalog::load(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", path.display());
                return Err(EXIT_ERROR);
            }
        };
        for warning in &warnings {
            eprintln!("Warning: {}", warning.message);
            *warned = true;
        }
        match catalog.get(name) {
            Some(template) => Ok((template.text.clone(), &args.inputs[..])),
            None => {
                eprintln!("Error: no template '{name}' in {}", path.display());
                Err(EXIT_ERROR)
            }
        }
    } else {
        match args.inputs.split_first() {
            Some((template, positionals)) => Ok((template.clone(), positionals)),
            None => {
                eprintln!("Error: provide a template or --catalog with --name");
                Err(EXIT_INVALID_ARGS)
            }
        }
    }
}

/// Build the argument list from --arg-file plus positional values.
fn collect_values(args: &RenderArgs, positionals: &[String]) -> Result<Vec<Value>, u8> {
    let mut values = Vec::new();

    if let Some(path) = &args.arg_file {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", path.display());
                return Err(EXIT_ERROR);
            }
        };
        match json5::from_str::<Vec<Value>>(&content) {
            Ok(parsed) => values.extend(parsed),
            Err(e) => {
                eprintln!("Error: {} is not a JSON5 value array: {e}", path.display());
                return Err(EXIT_ERROR);
            }
        }
    }

    values.extend(positionals.iter().map(|raw| parse_value(raw)));
    Ok(values)
}

/// Parse one CLI argument as a JSON5 value, falling back to a bare string.
fn parse_value(raw: &str) -> Value {
    json5::from_str(raw).unwrap_or_else(|_| Value::Str(raw.to_string()))
}

/// Machine-readable element dump, one entry per active element in
/// placement order.
fn print_json(compositor: &Compositor<TermFactory>) {
    let mut elements: Vec<serde_json::Value> = Vec::new();
    for text in compositor.text_pool().iter().filter(|t| t.is_active()) {
        elements.push(serde_json::json!({
            "kind": "text",
            "order": text.order(),
            "content": text.text(),
        }));
    }
    for image in compositor.image_pool().iter().filter(|i| i.is_active()) {
        let (width, height) = image.size();
        elements.push(serde_json::json!({
            "kind": "image",
            "order": image.order(),
            "content": image.chip(),
            "width": width,
            "height": height,
        }));
    }
    elements.sort_by_key(|e| e["order"].as_u64());
    println!("{}", serde_json::json!({ "elements": elements }));
}
