//! Containers of command-line items.
//!
//! A [`Container`] is an ordered list of [`Item`]s with a one-way
//! mutable-to-sealed lifecycle:
//!
//! 1. it starts empty and unsealed,
//! 2. items are appended one at a time with [`Container::add`], each of them
//!    already sealed,
//! 3. [`Container::seal`] validates that no two reachable options share a
//!    name and freezes the item list for good.
//!
//! Sealed containers are shared by reference (`Rc<Container>`), so the same
//! group can be reachable from several parents. Option enumeration copes
//! with that through a per-container traversal marker: a container is
//! visited once per pass, and [`Container::do_options`] resets every marker
//! before it starts.

use std::cell::Cell;
use std::convert::Infallible;
use std::ops::ControlFlow;
use std::rc::Rc;

use tracing::debug;

use crate::error::{ContainerError, Result};
use crate::{Item, OptionItem, Sealable, Traversable, check_name_clash};

/// An ordered, append-only-until-sealed list of items.
///
/// # Examples
///
/// ```
/// use optgroup_core::*;
///
/// let mut group = Container::titled("Output");
/// group.add("Control where results go:").unwrap();
/// group.add(OptionSpec::with_argument(Some("o"), Some("output"))).unwrap();
/// group.seal().unwrap();
///
/// let mut root = Container::new();
/// root.add(OptionSpec::flag(Some("h"), Some("help"))).unwrap();
/// root.add(group).unwrap();
/// root.seal().unwrap();
///
/// let names: Vec<String> = root.options().iter().map(|o| o.label()).collect();
/// assert_eq!(names, vec!["--help", "--output"]);
/// ```
#[derive(Debug, Default)]
pub struct Container {
    title: Option<String>,
    items: Vec<Item>,
    sealed: bool,
    traversed: Cell<bool>,
}

impl Container {
    /// Creates an empty, unsealed container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty, unsealed container with a title for help output.
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    /// Returns the title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of direct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the container holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if an enumeration pass already went through this
    /// container and it has not been reset since.
    pub fn is_traversed(&self) -> bool {
        self.traversed.get()
    }

    /// Appends an item at the end of the container.
    ///
    /// Duplicates are not rejected here; two copies of the same option are
    /// caught by the name-clash check when the container is sealed.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerSealed`] if this container is
    /// sealed, or [`ContainerError::ItemNotSealed`] if `item` is an unsealed
    /// container. The item list is left untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let mut root = Container::new();
    /// assert_eq!(root.add(Container::new()), Err(ContainerError::ItemNotSealed));
    ///
    /// root.seal().unwrap();
    /// assert_eq!(root.add("text"), Err(ContainerError::ContainerSealed));
    /// assert!(root.is_empty());
    /// ```
    pub fn add(&mut self, item: impl Into<Item>) -> Result<()> {
        if self.sealed {
            return Err(ContainerError::ContainerSealed);
        }
        let item = item.into();
        if !item.is_sealed() {
            return Err(ContainerError::ItemNotSealed);
        }
        self.items.push(item);
        Ok(())
    }

    /// Builder form of [`add`](Container::add).
    ///
    /// # Errors
    ///
    /// Same as [`add`](Container::add).
    pub fn with_item(mut self, item: impl Into<Item>) -> Result<Self> {
        self.add(item)?;
        Ok(self)
    }

    /// Seals the container after checking every pair of items for name
    /// clashes.
    ///
    /// Pairs are compared in stored order. On a clash the container stays
    /// unsealed.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AlreadySealed`] on a second call, or
    /// [`ContainerError::NameClash`] if two reachable options share a short
    /// or long name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let mut root = Container::new();
    /// root.add(OptionSpec::flag(Some("v"), Some("verbose"))).unwrap();
    /// root.add(OptionSpec::flag(Some("v"), Some("version"))).unwrap();
    /// assert!(matches!(root.seal(), Err(ContainerError::NameClash { .. })));
    /// assert!(!root.is_sealed());
    /// ```
    pub fn seal(&mut self) -> Result<()> {
        if self.sealed {
            return Err(ContainerError::AlreadySealed);
        }
        for (i, first) in self.items.iter().enumerate() {
            for second in &self.items[i + 1..] {
                check_name_clash(first, second)?;
            }
        }
        self.sealed = true;
        debug!(title = ?self.title, items = self.items.len(), "Sealed container");
        Ok(())
    }

    /// Builder form of [`seal`](Container::seal).
    ///
    /// # Errors
    ///
    /// Same as [`seal`](Container::seal).
    pub fn sealed(mut self) -> Result<Self> {
        self.seal()?;
        Ok(self)
    }

    /// Visits every option reachable from this container, depth-first and
    /// in insertion order, skipping containers already marked traversed.
    ///
    /// Each container is marked traversed once processed, even when empty,
    /// so a second call without an intervening
    /// [`untraverse`](Traversable::untraverse) visits nothing. Use
    /// [`do_options`](Container::do_options) for an independent full scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let root = Container::new()
    ///     .with_item(OptionSpec::flag(Some("a"), None))
    ///     .unwrap();
    ///
    /// let mut count = 0;
    /// root.map_options(|_| count += 1);
    /// root.map_options(|_| count += 1);
    /// assert_eq!(count, 1);
    ///
    /// root.untraverse().map_options(|_| count += 1);
    /// assert_eq!(count, 2);
    /// ```
    pub fn map_options<F>(&self, mut visit: F)
    where
        F: FnMut(&Rc<dyn OptionItem>),
    {
        let flow = self.try_map_options(&mut |option| {
            visit(option);
            ControlFlow::<Infallible>::Continue(())
        });
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }

    /// Resets every traversal marker, then enumerates all options.
    pub fn do_options<F>(&self, visit: F)
    where
        F: FnMut(&Rc<dyn OptionItem>),
    {
        self.untraverse().map_options(visit);
    }

    /// Collects every reachable option in enumeration order.
    pub fn options(&self) -> Vec<Rc<dyn OptionItem>> {
        let mut options = Vec::new();
        self.do_options(|option| options.push(Rc::clone(option)));
        options
    }

    /// Enumeration that lets the visitor stop early.
    ///
    /// Containers left mid-way by a `Break` are not marked traversed.
    pub(crate) fn try_map_options<B>(
        &self,
        visit: &mut dyn FnMut(&Rc<dyn OptionItem>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        if !self.traversed.get() {
            for item in &self.items {
                match item {
                    Item::Option(option) => visit(option)?,
                    Item::Group(group) => group.try_map_options(visit)?,
                    Item::Text(_) => {}
                }
            }
        }
        self.traversed.set(true);
        ControlFlow::Continue(())
    }
}

impl Sealable for Container {
    fn is_sealed(&self) -> bool {
        self.sealed
    }
}

impl Traversable for Container {
    fn untraverse(&self) -> &Self {
        for item in &self.items {
            item.untraverse();
        }
        self.traversed.set(false);
        self
    }
}
