//! Declaration validation.
//!
//! Catches mistakes a container cannot see: malformed names, options
//! without any name, includes of undefined groups and include cycles.
//! Name clashes are left to [`Container::seal`](optgroup_core::Container::seal).
//!
//! # Examples
//!
//! ```
//! use optgroup_core::OptionSpec;
//! use optgroup_decl::*;
//!
//! let mut decl = Declaration::default();
//! decl.items.push(ItemDecl::Option(OptionSpec::flag(Some("v"), Some("verbose"))));
//! assert!(validate_declaration(&decl).is_empty());
//!
//! // Invalid: names are stored without dashes
//! decl.items.push(ItemDecl::Option(OptionSpec::flag(None, Some("--quiet"))));
//! assert_eq!(
//!     validate_declaration(&decl),
//!     vec![DeclValidationError::InvalidName("--quiet".into())]
//! );
//! ```

use optgroup_core::OptionSpec;
use thiserror::Error;

use crate::{Declaration, ItemDecl};

/// Declaration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclValidationError {
    /// An option has neither short nor long name.
    #[error("option must define a short or long name")]
    MissingOptionName,
    /// A short or long name is empty.
    #[error("option names cannot be empty")]
    EmptyName,
    /// A name starts with a dash or contains whitespace.
    #[error("invalid option name: {0}")]
    InvalidName(String),
    /// A group name is empty or whitespace-only.
    #[error("group name cannot be empty")]
    EmptyGroupName,
    /// An include names a group that is not defined.
    #[error("unknown group: {0}")]
    UnknownGroup(String),
    /// Named groups include each other in a loop.
    #[error("group include cycle detected at path: {0}")]
    IncludeCycle(String),
}

/// Validates a declaration, stopping at the first error.
///
/// Named groups are checked in name order, then the root items.
pub fn validate_declaration(decl: &Declaration) -> Vec<DeclValidationError> {
    let mut errors = Vec::new();

    for (name, group) in &decl.groups {
        if name.trim().is_empty() {
            errors.push(DeclValidationError::EmptyGroupName);
            return errors;
        }
        let mut path = vec![name.clone()];
        errors.extend(validate_items(decl, &group.items, &mut path));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors.extend(validate_items(decl, &decl.items, &mut Vec::new()));
    errors
}

fn validate_items(
    decl: &Declaration,
    items: &[ItemDecl],
    path: &mut Vec<String>,
) -> Vec<DeclValidationError> {
    let mut errors = Vec::new();

    for item in items {
        match item {
            ItemDecl::Text(_) => {}
            ItemDecl::Option(option) => errors.extend(validate_option(option)),
            ItemDecl::Group(group) => errors.extend(validate_items(decl, &group.items, path)),
            ItemDecl::Include(name) => {
                let Some(group) = decl.groups.get(name) else {
                    errors.push(DeclValidationError::UnknownGroup(name.clone()));
                    return errors;
                };
                if path.iter().any(|segment| segment == name) {
                    let cycle_path = path
                        .iter()
                        .cloned()
                        .chain(std::iter::once(name.clone()))
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    errors.push(DeclValidationError::IncludeCycle(cycle_path));
                    return errors;
                }
                path.push(name.clone());
                errors.extend(validate_items(decl, &group.items, path));
                path.pop();
            }
        }
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_option(option: &OptionSpec) -> Vec<DeclValidationError> {
    let mut errors = Vec::new();

    if option.short.is_none() && option.long.is_none() {
        errors.push(DeclValidationError::MissingOptionName);
        return errors;
    }

    for name in [&option.short, &option.long].into_iter().flatten() {
        if name.is_empty() {
            errors.push(DeclValidationError::EmptyName);
            return errors;
        }
        if name.starts_with('-') || name.chars().any(char::is_whitespace) {
            errors.push(DeclValidationError::InvalidName(name.clone()));
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GroupDecl;

    fn option(short: Option<&str>, long: Option<&str>) -> ItemDecl {
        ItemDecl::Option(OptionSpec::flag(short, long))
    }

    fn group(items: Vec<ItemDecl>) -> GroupDecl {
        GroupDecl { title: None, items }
    }

    #[test]
    fn test_rejects_nameless_option() {
        let mut decl = Declaration::default();
        decl.items.push(option(None, None));
        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::MissingOptionName]
        );
    }

    #[test]
    fn test_rejects_empty_and_spaced_names() {
        let mut decl = Declaration::default();
        decl.items.push(option(Some(""), None));
        assert_eq!(validate_declaration(&decl), vec![DeclValidationError::EmptyName]);

        let mut decl = Declaration::default();
        decl.items.push(option(None, Some("dry run")));
        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::InvalidName("dry run".into())]
        );
    }

    #[test]
    fn test_checks_nested_inline_groups() {
        let mut decl = Declaration::default();
        decl.items
            .push(ItemDecl::Group(group(vec![option(Some("-x"), None)])));
        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::InvalidName("-x".into())]
        );
    }

    #[test]
    fn test_rejects_blank_group_name() {
        let mut decl = Declaration::default();
        decl.groups
            .insert("  ".into(), group(vec![option(Some("h"), Some("help"))]));
        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::EmptyGroupName]
        );
    }

    #[test]
    fn test_rejects_unknown_include() {
        let mut decl = Declaration::default();
        decl.items.push(ItemDecl::Include("missing".into()));
        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::UnknownGroup("missing".into())]
        );
    }

    #[test]
    fn test_rejects_include_cycle() {
        let mut decl = Declaration::default();
        decl.groups
            .insert("a".into(), group(vec![ItemDecl::Include("b".into())]));
        decl.groups
            .insert("b".into(), group(vec![ItemDecl::Include("a".into())]));

        assert_eq!(
            validate_declaration(&decl),
            vec![DeclValidationError::IncludeCycle("a -> b -> a".into())]
        );
    }

    #[test]
    fn test_accepts_diamond_includes() {
        let mut decl = Declaration::default();
        decl.groups
            .insert("base".into(), group(vec![option(Some("h"), Some("help"))]));
        decl.groups
            .insert("left".into(), group(vec![ItemDecl::Include("base".into())]));
        decl.groups
            .insert("right".into(), group(vec![ItemDecl::Include("base".into())]));
        decl.items.push(ItemDecl::Include("left".into()));
        decl.items.push(ItemDecl::Include("right".into()));

        assert!(validate_declaration(&decl).is_empty());
    }
}
