//! `rln plan` - show how a template splits into segments

use crate::planner::{plan, Segment};
use crate::scanner::Scanner;

use super::EXIT_SUCCESS;

pub fn run(template: &str) -> u8 {
    let scanner = Scanner::new();
    let segments = plan(&scanner, template);

    let mut texts = 0;
    let mut images = 0;
    for (position, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                println!("{position:>3}  literal  {text:?}");
                texts += 1;
            }
            Segment::Image { index_raw } => {
                match index_raw.parse::<usize>() {
                    Ok(index) => println!("{position:>3}  image    arg {index}"),
                    Err(_) => println!("{position:>3}  image    arg {index_raw} (unparseable, skipped at render)"),
                }
                images += 1;
            }
        }
    }
    println!("{texts} literal segment(s), {images} image segment(s)");

    EXIT_SUCCESS
}
