//! Option-group declarations for command-line programs.
//!
//! This crate loads a program's command-line surface from a YAML or JSON
//! file and builds it into a sealed [`Container`](optgroup_core::Container)
//! tree.
//!
//! - [`Declaration`] — the file model: root items plus named groups that
//!   can be included, and thereby shared, from several places.
//! - [`validate_declaration`] — structural checks (names, includes, cycles).
//! - [`Declaration::build`] — validation, construction and sealing.
//!
//! # Quick start
//!
//! ```
//! use optgroup_decl::{DeclFormat, Declaration};
//!
//! let yaml = r#"
//! title: mytool
//! items:
//!   - text: "Usage: mytool [OPTIONS]"
//!   - option: { short: h, long: help }
//!   - option: { short: o, long: output, takes_argument: true }
//! "#;
//!
//! let root = Declaration::parse(yaml, DeclFormat::Yaml).unwrap().build().unwrap();
//! assert_eq!(root.search_option_by_abbreviation("out").unwrap().name, "output");
//! assert_eq!(root.search_sticky_option("oresult.txt").unwrap().name, "result.txt");
//! ```

mod build;
mod declaration;
mod error;
mod validate;

pub use declaration::{DeclFormat, Declaration, GroupDecl, ItemDecl};
pub use error::{DeclError, Result};
pub use validate::{DeclValidationError, validate_declaration};
