//! Declaration file model and (de)serialization.
//!
//! A declaration describes a program's command-line surface as nested
//! groups of text, options and included named groups.
//!
//! # Example YAML
//!
//! ```yaml
//! title: mytool
//! groups:
//!   common:
//!     title: Common options
//!     items:
//!       - option: { short: h, long: help, description: Print help }
//! items:
//!   - text: "Usage: mytool [OPTIONS] FILE"
//!   - include: common
//!   - option: { short: o, long: output, takes_argument: true, argument_name: FILE }
//!   - group:
//!       title: Output
//!       items:
//!         - option: { long: color }
//! ```

use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use optgroup_core::OptionSpec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeclError, Result};

/// On-disk format of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl DeclFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](DeclError::UnsupportedFormat) for any
    /// other extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_decl::DeclFormat;
    ///
    /// assert_eq!(DeclFormat::from_path("opts.yml").unwrap(), DeclFormat::Yaml);
    /// assert_eq!(DeclFormat::from_path("opts.JSON").unwrap(), DeclFormat::Json);
    /// assert!(DeclFormat::from_path("opts.toml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(DeclError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One entry of a group.
///
/// Written as a single-key map (`option: {...}`, `text: ...`) in both YAML
/// and JSON. Fields holding items go through
/// `serde_yaml::with::singleton_map_recursive`, since YAML otherwise expects
/// `!option` tags for enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDecl {
    /// Decorative text.
    Text(String),
    /// An option.
    Option(OptionSpec),
    /// An inline nested group.
    Group(GroupDecl),
    /// A named group from [`Declaration::groups`], shared by reference.
    Include(String),
}

/// A titled list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDecl {
    /// Optional title for help output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Items in display and enumeration order.
    #[serde(default)]
    pub items: Vec<ItemDecl>,
}

/// Top-level declaration of a program's command-line items.
///
/// # Examples
///
/// ```
/// use optgroup_decl::{DeclFormat, Declaration};
///
/// let decl = Declaration::parse(
///     r#"{"items": [{"option": {"short": "v", "long": "verbose"}}]}"#,
///     DeclFormat::Json,
/// )
/// .unwrap();
/// let root = decl.build().unwrap();
/// assert!(root.search_option_by_name(Some("v"), None).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    /// Program or root group title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Named groups that items may include.
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        with = "serde_yaml::with::singleton_map_recursive"
    )]
    pub groups: BTreeMap<String, GroupDecl>,
    /// Root items.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub items: Vec<ItemDecl>,
}

impl Declaration {
    /// Parses a declaration from a string.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`](DeclError::JsonError) or
    /// [`YamlError`](DeclError::YamlError) if parsing fails.
    pub fn parse(raw: &str, format: DeclFormat) -> Result<Self> {
        let decl = match format {
            DeclFormat::Yaml => serde_yaml::from_str(raw)?,
            DeclFormat::Json => serde_json::from_str(raw)?,
        };
        Ok(decl)
    }

    /// Loads a declaration, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](DeclError::UnsupportedFormat) for an
    /// unknown extension, [`IoError`](DeclError::IoError) if the file cannot
    /// be read, or a parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DeclFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "Loading declaration");

        let reader = BufReader::new(std::fs::File::open(path)?);
        let decl = match format {
            DeclFormat::Yaml => serde_yaml::from_reader(reader)?,
            DeclFormat::Json => serde_json::from_reader(reader)?,
        };
        Ok(decl)
    }

    /// Saves the declaration, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](DeclError::UnsupportedFormat) for an
    /// unknown extension, [`IoError`](DeclError::IoError) if the file cannot
    /// be written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DeclFormat::from_path(path)?;
        let writer = BufWriter::new(std::fs::File::create(path)?);
        match format {
            DeclFormat::Yaml => serde_yaml::to_writer(writer, self)?,
            DeclFormat::Json => serde_json::to_writer_pretty(writer, self)?,
        }
        Ok(())
    }
}
