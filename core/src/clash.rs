//! Name-clash checking between items.
//!
//! Sealing a container compares every unordered pair of its items with
//! [`check_name_clash`]. Groups are expanded recursively so that options
//! nested at any depth are compared against each other.
//!
//! Short names are only compared with short names and long names with long
//! names: an option whose short name is `h` does not clash with another
//! whose long name is `h`.
//!
//! # Examples
//!
//! ```
//! use optgroup_core::*;
//!
//! let a = Item::from(OptionSpec::flag(Some("v"), Some("verbose")));
//! let b = Item::from(OptionSpec::flag(Some("v"), Some("version")));
//! assert!(matches!(
//!     check_name_clash(&a, &b),
//!     Err(ContainerError::NameClash { .. })
//! ));
//!
//! let c = Item::from(OptionSpec::flag(Some("w"), Some("version")));
//! assert!(check_name_clash(&a, &c).is_ok());
//! ```

use tracing::trace;

use crate::error::{ContainerError, Result};
use crate::{Item, OptionItem};

/// Checks two items for colliding short or long names.
///
/// Option against option compares names directly; a group against an option
/// checks every item of the group against the option; group against group
/// checks the full cross product. Text never clashes.
///
/// # Errors
///
/// Returns [`ContainerError::NameClash`] for the first equal, non-empty
/// short or long name found.
pub fn check_name_clash(x: &Item, y: &Item) -> Result<()> {
    match (x, y) {
        (Item::Option(a), Item::Option(b)) => check_option_pair(a.as_ref(), b.as_ref()),
        (Item::Group(group), Item::Option(_)) => group
            .items()
            .iter()
            .try_for_each(|inner| check_name_clash(inner, y)),
        (Item::Option(_), Item::Group(group)) => group
            .items()
            .iter()
            .try_for_each(|inner| check_name_clash(x, inner)),
        (Item::Group(left), Item::Group(right)) => {
            for a in left.items() {
                for b in right.items() {
                    check_name_clash(a, b)?;
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn check_option_pair(a: &dyn OptionItem, b: &dyn OptionItem) -> Result<()> {
    let same = |left: Option<&str>, right: Option<&str>| match (left, right) {
        (Some(l), Some(r)) if !l.is_empty() && l == r => Some(l.to_string()),
        _ => None,
    };

    let clash = same(a.short_name(), b.short_name()).or_else(|| same(a.long_name(), b.long_name()));

    match clash {
        Some(name) => {
            trace!(name = %name, first = %a.label(), second = %b.label(), "Name clash");
            Err(ContainerError::NameClash {
                name,
                first: a.label(),
                second: b.label(),
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, OptionSpec};

    fn flag(short: Option<&str>, long: Option<&str>) -> Item {
        Item::from(OptionSpec::flag(short, long))
    }

    #[test]
    fn test_short_names_clash() {
        let err = check_name_clash(&flag(Some("v"), None), &flag(Some("v"), Some("version")))
            .unwrap_err();
        assert_eq!(
            err,
            ContainerError::NameClash {
                name: "v".into(),
                first: "-v".into(),
                second: "--version".into(),
            }
        );
    }

    #[test]
    fn test_long_names_clash() {
        let result = check_name_clash(&flag(Some("a"), Some("all")), &flag(Some("b"), Some("all")));
        assert!(matches!(result, Err(ContainerError::NameClash { name, .. }) if name == "all"));
    }

    #[test]
    fn test_short_may_equal_other_long() {
        assert!(check_name_clash(&flag(Some("x"), None), &flag(None, Some("x"))).is_ok());
    }

    #[test]
    fn test_empty_names_never_clash() {
        assert!(check_name_clash(&flag(Some(""), None), &flag(Some(""), None)).is_ok());
    }

    #[test]
    fn test_text_never_clashes() {
        let text = Item::from("-v");
        assert!(check_name_clash(&text, &text).is_ok());
        assert!(check_name_clash(&text, &flag(Some("v"), None)).is_ok());
    }

    #[test]
    fn test_group_against_option_recurses() {
        let group = Container::new()
            .with_item("Header")
            .and_then(|c| c.with_item(OptionSpec::flag(Some("q"), Some("quiet"))))
            .and_then(Container::sealed)
            .unwrap();
        let group = Item::from(group);

        assert!(check_name_clash(&group, &flag(None, Some("quiet"))).is_err());
        assert!(check_name_clash(&flag(Some("q"), None), &group).is_err());
        assert!(check_name_clash(&group, &flag(Some("v"), None)).is_ok());
    }

    #[test]
    fn test_group_against_group_checks_cross_product() {
        let left = Container::new()
            .with_item(OptionSpec::flag(Some("a"), None))
            .and_then(|c| c.with_item(OptionSpec::flag(Some("b"), None)))
            .and_then(Container::sealed)
            .unwrap();
        let right = Container::new()
            .with_item(OptionSpec::flag(Some("c"), None))
            .and_then(|c| c.with_item(OptionSpec::flag(Some("b"), None)))
            .and_then(Container::sealed)
            .unwrap();

        let result = check_name_clash(&Item::from(left), &Item::from(right));
        assert!(matches!(result, Err(ContainerError::NameClash { name, .. }) if name == "b"));
    }
}
