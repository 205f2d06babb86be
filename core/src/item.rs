//! Items and the capabilities the container core needs from them.
//!
//! Anything placed inside a [`Container`] is an [`Item`]: decorative text, an
//! option-like leaf, or another container. The core only talks to leaves
//! through three small traits:
//!
//! - [`Sealable`] — "is this node closed for composition?"
//! - [`Traversable`] — reset of the per-enumeration traversal marker.
//! - [`OptionItem`] — name accessors and the matching hooks used by search.

use std::fmt;
use std::rc::Rc;

use crate::Container;

/// Sealing status of any node that can be composed into a container.
///
/// Leaves are always considered sealed: a bare option or a piece of text is
/// never explicitly sealed but is still fit to be added. [`Container`]
/// overrides this with its own flag.
///
/// # Examples
///
/// ```
/// use optgroup_core::{Container, Sealable};
///
/// assert!("Usage: mytool [OPTIONS]".is_sealed());
/// assert!(!Container::new().is_sealed());
/// ```
pub trait Sealable {
    /// Returns `true` when the node may be added to a container.
    fn is_sealed(&self) -> bool {
        true
    }
}

impl Sealable for str {}

impl Sealable for String {}

impl<T: Sealable + ?Sized> Sealable for Rc<T> {
    fn is_sealed(&self) -> bool {
        (**self).is_sealed()
    }
}

/// Reset of the traversal marker used by option enumeration.
///
/// The default implementation is a no-op returning the receiver, which is
/// what every entity without a marker needs. Resetting an already reset
/// tree is a no-op.
pub trait Traversable {
    /// Clears the traversal marker of this node and everything reachable
    /// from it, then returns the node unchanged.
    fn untraverse(&self) -> &Self {
        self
    }
}

impl Traversable for str {}

impl Traversable for String {}

/// Hooks the core calls into concrete option implementations.
///
/// Names are stored without leading dashes (`v`, `verbose`). Only
/// [`short_name`](OptionItem::short_name) and
/// [`long_name`](OptionItem::long_name) are required; the matching hooks
/// have defaults implementing the usual prefix rules.
pub trait OptionItem: Sealable + fmt::Debug {
    /// Short name (e.g. `v`), if any.
    fn short_name(&self) -> Option<&str>;

    /// Long name (e.g. `verbose`), if any.
    fn long_name(&self) -> Option<&str>;

    /// Whether the option accepts an argument.
    fn takes_argument(&self) -> bool {
        false
    }

    /// Exact match against a short and/or long name.
    ///
    /// The short name is tested first. Returns the name that matched.
    fn match_name(&self, short: Option<&str>, long: Option<&str>) -> Option<String> {
        if let (Some(wanted), Some(own)) = (short, self.short_name()) {
            if wanted == own {
                return Some(own.to_string());
            }
        }
        if let (Some(wanted), Some(own)) = (long, self.long_name()) {
            if wanted == own {
                return Some(own.to_string());
            }
        }
        None
    }

    /// Distance between the long name and a user-supplied abbreviation.
    ///
    /// `None` stands for an infinite distance: the long name does not begin
    /// with `partial`. `Some(0)` means it does. Smaller is closer; equal
    /// distances are broken by enumeration order.
    fn abbreviation_distance(&self, partial: &str) -> Option<usize> {
        self.long_name()
            .filter(|long| long.starts_with(partial))
            .map(|_| 0)
    }

    /// Length of the short name when `namearg` starts with it, `0` otherwise.
    ///
    /// Options without an argument never match sticky syntax.
    fn sticky_distance(&self, namearg: &str) -> usize {
        if !self.takes_argument() {
            return 0;
        }
        match self.short_name() {
            Some(short) if !short.is_empty() && namearg.starts_with(short) => short.len(),
            _ => 0,
        }
    }

    /// Human-readable label used in diagnostics (long name preferred).
    fn label(&self) -> String {
        match (self.short_name(), self.long_name()) {
            (_, Some(long)) => format!("--{long}"),
            (Some(short), None) => format!("-{short}"),
            (None, None) => "<unnamed option>".to_string(),
        }
    }
}

/// A node placed inside a [`Container`].
///
/// Groups and options are reference counted so that a sealed sub-tree can be
/// shared between several parents without copying.
///
/// # Examples
///
/// ```
/// use optgroup_core::{Container, Item, OptionSpec, Sealable};
///
/// let text = Item::from("Options:");
/// let flag = Item::from(OptionSpec::flag(Some("v"), Some("verbose")));
/// assert!(text.is_sealed() && flag.is_sealed());
///
/// let group = Item::from(Container::new());
/// assert!(!group.is_sealed());
/// ```
#[derive(Debug, Clone)]
pub enum Item {
    /// Decorative free text (headers, usage lines).
    Text(String),
    /// An option-like leaf.
    Option(Rc<dyn OptionItem>),
    /// A nested container.
    Group(Rc<Container>),
}

impl Item {
    /// Returns the container behind this item, if it is one.
    pub fn as_group(&self) -> Option<&Rc<Container>> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl Sealable for Item {
    fn is_sealed(&self) -> bool {
        match self {
            Self::Text(text) => text.is_sealed(),
            Self::Option(option) => option.is_sealed(),
            Self::Group(group) => group.is_sealed(),
        }
    }
}

impl Traversable for Item {
    fn untraverse(&self) -> &Self {
        if let Self::Group(group) = self {
            group.untraverse();
        }
        self
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Container> for Item {
    fn from(container: Container) -> Self {
        Self::Group(Rc::new(container))
    }
}

impl From<Rc<Container>> for Item {
    fn from(container: Rc<Container>) -> Self {
        Self::Group(container)
    }
}

impl From<Rc<dyn OptionItem>> for Item {
    fn from(option: Rc<dyn OptionItem>) -> Self {
        Self::Option(option)
    }
}

impl<T: OptionItem + 'static> From<T> for Item {
    fn from(option: T) -> Self {
        Self::Option(Rc::new(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionSpec;

    #[derive(Debug)]
    struct Bare;

    impl Sealable for Bare {}

    impl OptionItem for Bare {
        fn short_name(&self) -> Option<&str> {
            None
        }

        fn long_name(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_leaves_are_sealed_by_default() {
        assert!("text".is_sealed());
        assert!(String::from("text").is_sealed());
        assert!(Bare.is_sealed());
        assert!(Item::from(Bare).is_sealed());
    }

    #[test]
    fn test_match_name_prefers_short() {
        let option = OptionSpec::flag(Some("h"), Some("help"));
        assert_eq!(option.match_name(Some("h"), Some("help")), Some("h".into()));
        assert_eq!(option.match_name(Some("x"), Some("help")), Some("help".into()));
        assert_eq!(option.match_name(None, Some("hel")), None);
        assert_eq!(option.match_name(None, None), None);
    }

    #[test]
    fn test_abbreviation_distance_requires_prefix() {
        let option = OptionSpec::flag(None, Some("verbose"));
        assert_eq!(option.abbreviation_distance("verb"), Some(0));
        assert_eq!(option.abbreviation_distance("verbose"), Some(0));
        assert_eq!(option.abbreviation_distance("bose"), None);
        assert_eq!(Bare.abbreviation_distance(""), None);
    }

    #[test]
    fn test_label_prefers_long_name() {
        assert_eq!(OptionSpec::flag(Some("v"), Some("verbose")).label(), "--verbose");
        assert_eq!(OptionSpec::flag(Some("v"), None).label(), "-v");
        assert_eq!(Bare.label(), "<unnamed option>");
    }

    #[test]
    fn test_untraverse_returns_receiver() {
        let text = String::from("plain");
        assert!(std::ptr::eq(text.untraverse(), &text));
    }
}
