//! `rln validate` - check a catalog file

use crate::catalog::Catalog;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use std::path::Path;

pub fn run(input: &Path) -> u8 {
    let (catalog, warnings) = match Catalog::load(input) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", input.display());
            return EXIT_ERROR;
        }
    };

    for warning in &warnings {
        if warning.line > 0 {
            eprintln!("Warning: line {}: {}", warning.line, warning.message);
        } else {
            eprintln!("Warning: {}", warning.message);
        }
    }

    if warnings.is_empty() {
        println!("{}: {} template(s) OK", input.display(), catalog.len());
        EXIT_SUCCESS
    } else {
        println!(
            "{}: {} template(s), {} warning(s)",
            input.display(),
            catalog.len(),
            warnings.len()
        );
        EXIT_ERROR
    }
}
