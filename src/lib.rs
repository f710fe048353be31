//! Richline - compiling composite line templates into pooled display elements
//!
//! This library provides functionality to:
//! - Scan `{n[:spec]}` placeholders in a template string
//! - Plan a template into ordered literal and image segments
//! - Substitute positional arguments with format specs into literal text
//! - Drive reusable text/image display-object pools in reading order

pub mod catalog;
pub mod cli;
pub mod compositor;
pub mod display;
pub mod fmt;
pub mod planner;
pub mod pool;
pub mod scanner;
pub mod terminal;
pub mod value;
