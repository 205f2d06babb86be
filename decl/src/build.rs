//! Turning a declaration into sealed containers.

use std::collections::HashMap;
use std::rc::Rc;

use optgroup_core::{Container, OptionItem};
use tracing::debug;

use crate::error::Result;
use crate::{DeclValidationError, Declaration, GroupDecl, ItemDecl, validate_declaration};

impl Declaration {
    /// Validates the declaration and builds its sealed root container.
    ///
    /// Every named group is built and sealed exactly once, in name order,
    /// and shared by reference wherever it is included. Inline groups are
    /// sealed bottom-up; the root is sealed last.
    ///
    /// # Errors
    ///
    /// Returns [`Invalid`](DeclError::Invalid) for the first validation
    /// error, or [`Container`](DeclError::Container) if sealing any group
    /// fails, typically on a name clash.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::{ContainerError, OptionSpec};
    /// use optgroup_decl::*;
    ///
    /// let mut decl = Declaration::default();
    /// decl.items.push(ItemDecl::Option(OptionSpec::flag(Some("v"), Some("verbose"))));
    /// decl.items.push(ItemDecl::Option(OptionSpec::flag(Some("v"), Some("version"))));
    ///
    /// assert!(matches!(
    ///     decl.build(),
    ///     Err(DeclError::Container(ContainerError::NameClash { .. }))
    /// ));
    /// ```
    pub fn build(&self) -> Result<Container> {
        if let Some(err) = validate_declaration(self).into_iter().next() {
            return Err(err.into());
        }

        let mut builder = Builder {
            decl: self,
            built: HashMap::new(),
        };
        for name in self.groups.keys() {
            builder.named(name)?;
        }

        let root = builder.group(self.title.as_deref(), &self.items)?;
        debug!(
            title = ?self.title,
            named_groups = builder.built.len(),
            options = root.options().len(),
            "Built declaration"
        );
        Ok(root)
    }
}

struct Builder<'a> {
    decl: &'a Declaration,
    built: HashMap<&'a str, Rc<Container>>,
}

impl<'a> Builder<'a> {
    fn named(&mut self, name: &'a str) -> Result<Rc<Container>> {
        if let Some(group) = self.built.get(name) {
            return Ok(Rc::clone(group));
        }
        let GroupDecl { title, items } = self
            .decl
            .groups
            .get(name)
            .ok_or_else(|| DeclValidationError::UnknownGroup(name.to_string()))?;

        let group = Rc::new(self.group(title.as_deref(), items)?);
        self.built.insert(name, Rc::clone(&group));
        Ok(group)
    }

    fn group(&mut self, title: Option<&str>, items: &'a [ItemDecl]) -> Result<Container> {
        let mut container = title.map_or_else(Container::new, Container::titled);
        for item in items {
            match item {
                ItemDecl::Text(text) => container.add(text.as_str())?,
                ItemDecl::Option(option) => {
                    let option: Rc<dyn OptionItem> = Rc::new(option.clone());
                    container.add(option)?;
                }
                ItemDecl::Group(group) => {
                    let inner = self.group(group.title.as_deref(), &group.items)?;
                    container.add(inner)?;
                }
                ItemDecl::Include(name) => {
                    let shared = self.named(name)?;
                    container.add(shared)?;
                }
            }
        }
        container.seal()?;
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use optgroup_core::{ContainerError, OptionSpec, Sealable};

    use super::*;

    fn option(short: Option<&str>, long: Option<&str>) -> ItemDecl {
        ItemDecl::Option(OptionSpec::flag(short, long))
    }

    #[test]
    fn test_build_seals_every_group() {
        let mut decl = Declaration::default();
        decl.items.push(ItemDecl::Text("Options:".into()));
        decl.items.push(ItemDecl::Group(GroupDecl {
            title: Some("Inner".into()),
            items: vec![option(Some("i"), Some("inner"))],
        }));

        let root = decl.build().unwrap();
        assert!(root.is_sealed());
        let inner = root.items()[1].as_group().unwrap();
        assert!(inner.is_sealed());
        assert_eq!(inner.title(), Some("Inner"));
    }

    #[test]
    fn test_includes_share_one_container() {
        let mut decl = Declaration::default();
        decl.groups.insert(
            "footer".into(),
            GroupDecl {
                title: None,
                items: vec![ItemDecl::Text("See the manual for details.".into())],
            },
        );
        decl.items.push(ItemDecl::Include("footer".into()));
        decl.items.push(option(Some("h"), Some("help")));
        decl.items.push(ItemDecl::Include("footer".into()));

        let root = decl.build().unwrap();
        let first = root.items()[0].as_group().unwrap();
        let second = root.items()[2].as_group().unwrap();
        assert!(Rc::ptr_eq(first, second));
        assert_eq!(Rc::strong_count(first), 2);
        assert_eq!(root.options().len(), 1);
    }

    #[test]
    fn test_named_group_included_twice_with_options_clashes() {
        let mut decl = Declaration::default();
        decl.groups.insert(
            "common".into(),
            GroupDecl {
                title: None,
                items: vec![option(Some("h"), Some("help"))],
            },
        );
        decl.items.push(ItemDecl::Include("common".into()));
        decl.items.push(ItemDecl::Include("common".into()));

        assert!(matches!(
            decl.build(),
            Err(DeclError::Container(ContainerError::NameClash { name, .. })) if name == "h"
        ));
    }

    #[test]
    fn test_unused_named_group_is_still_checked() {
        let mut decl = Declaration::default();
        decl.groups.insert(
            "unused".into(),
            GroupDecl {
                title: None,
                items: vec![option(Some("a"), None), option(Some("a"), None)],
            },
        );

        assert!(matches!(
            decl.build(),
            Err(DeclError::Container(ContainerError::NameClash { .. }))
        ));
    }

    #[test]
    fn test_validation_runs_before_building() {
        let mut decl = Declaration::default();
        decl.items.push(ItemDecl::Include("ghost".into()));

        assert!(matches!(
            decl.build(),
            Err(DeclError::Invalid(DeclValidationError::UnknownGroup(name))) if name == "ghost"
        ));
    }
}
