//! Item containers for command-line option definitions.
//!
//! This crate is the structural core of an option-definition library: it
//! manages hierarchical groups of command-line items that together declare
//! a program's command-line surface.
//!
//! - [`Item`] — text, an option-like leaf, or a nested [`Container`].
//! - [`Container`] — ordered items with a one-way sealing transition.
//! - [`check_name_clash`] — pairwise short/long name validation run by
//!   [`Container::seal`].
//! - [`Container::do_options`] — cycle-safe, depth-first option enumeration.
//! - [`Container::search_option`] — lookup by exact name, abbreviation, or
//!   sticky short-name-plus-argument token.
//!
//! Concrete option kinds plug in through the [`OptionItem`] trait;
//! [`OptionSpec`] is the bundled plain implementation.
//!
//! # Example
//!
//! ```
//! use optgroup_core::*;
//!
//! let mut output = Container::titled("Output");
//! output.add(OptionSpec::with_argument(Some("o"), Some("output"))).unwrap();
//! output.seal().unwrap();
//!
//! let mut root = Container::new();
//! root.add("Usage: mytool [OPTIONS]").unwrap();
//! root.add(OptionSpec::flag(Some("h"), Some("help"))).unwrap();
//! root.add(output).unwrap();
//! root.seal().unwrap();
//!
//! assert_eq!(root.search_option_by_name(Some("h"), None).unwrap().name, "h");
//! assert_eq!(root.search_option_by_abbreviation("out").unwrap().name, "output");
//! assert_eq!(root.search_sticky_option("ofile.txt").unwrap().name, "file.txt");
//! ```

mod clash;
mod container;
mod error;
mod item;
mod option;
mod search;

pub use clash::check_name_clash;
pub use container::Container;
pub use error::{ContainerError, Result};
pub use item::{Item, OptionItem, Sealable, Traversable};
pub use option::OptionSpec;
pub use search::{OptionQuery, SearchHit};
