//! Reference option leaf.
//!
//! [`OptionSpec`] is the plain option type used by declarations and tests.
//! Richer option kinds (switches, enumerations, typed values) live with the
//! parsing context; they only need to implement [`OptionItem`].

use serde::{Deserialize, Serialize};

use crate::{OptionItem, Sealable};

/// A command-line option with optional short and long names.
///
/// Use [`flag`](OptionSpec::flag) or
/// [`with_argument`](OptionSpec::with_argument) to create options, then
/// chain builder methods like [`with_description`](OptionSpec::with_description).
///
/// # Examples
///
/// ```
/// use optgroup_core::{OptionItem, OptionSpec};
///
/// let verbose = OptionSpec::flag(Some("v"), Some("verbose"))
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.canonical_name(), "verbose");
/// assert!(!verbose.takes_argument());
///
/// let output = OptionSpec::with_argument(Some("o"), Some("output"))
///     .with_argument_name("FILE");
/// assert!(output.takes_argument());
/// assert_eq!(output.sticky_distance("ofile.txt"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionSpec {
    /// Short name without the dash (e.g. "o")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Long name without the dashes (e.g. "output")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Whether an argument follows the option
    pub takes_argument: bool,
    /// Placeholder shown for the argument (e.g. "FILE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_name: Option<String>,
    /// Description for help output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionSpec {
    /// Creates an option that takes no argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::{OptionItem, OptionSpec};
    ///
    /// let flag = OptionSpec::flag(Some("h"), Some("help"));
    /// assert!(!flag.takes_argument());
    /// assert_eq!(flag.match_name(Some("h"), None).as_deref(), Some("h"));
    /// ```
    pub fn flag(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            short: short.map(String::from),
            long: long.map(String::from),
            takes_argument: false,
            argument_name: None,
            description: None,
        }
    }

    /// Creates an option that takes an argument.
    pub fn with_argument(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            takes_argument: true,
            ..Self::flag(short, long)
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Sets the argument placeholder and marks the option as taking one.
    pub fn with_argument_name(mut self, name: &str) -> Self {
        self.argument_name = Some(name.to_string());
        self.takes_argument = true;
        self
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::OptionSpec;
    ///
    /// assert_eq!(OptionSpec::flag(Some("v"), Some("verbose")).canonical_name(), "verbose");
    /// assert_eq!(OptionSpec::flag(Some("v"), None).canonical_name(), "v");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }
}

impl Sealable for OptionSpec {}

impl OptionItem for OptionSpec {
    fn short_name(&self) -> Option<&str> {
        self.short.as_deref()
    }

    fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    fn takes_argument(&self) -> bool {
        self.takes_argument
    }
}
