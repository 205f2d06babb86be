//! Option lookup over a container tree.
//!
//! Three strategies share one enumeration pass each:
//!
//! - by exact name: first option whose short or long name matches,
//! - by abbreviation: the option whose long name is the closest completion
//!   of a partial name,
//! - sticky: the option whose short name is the longest prefix of a token
//!   like `xVALUE`, together with the remaining `VALUE`.
//!
//! Ties are broken by enumeration order: the first candidate seen wins.

use std::ops::ControlFlow;
use std::rc::Rc;

use tracing::trace;

use crate::error::{ContainerError, Result};
use crate::{Container, OptionItem, Traversable};

/// Result of a successful search.
///
/// `name` depends on the strategy: the matched name for exact searches, the
/// completed long name for abbreviation searches, and the argument left
/// after the short name for sticky searches.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The option found.
    pub option: Rc<dyn OptionItem>,
    /// Matched name, completed long name, or sticky remainder.
    pub name: String,
}

/// What to look for in [`Container::search_option`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionQuery {
    /// Exact short and/or long name; at least one must be given.
    Name {
        /// Short name without the dash.
        short: Option<String>,
        /// Long name without the dashes.
        long: Option<String>,
    },
    /// Abbreviation of a long name.
    Partial(String),
}

impl OptionQuery {
    /// Exact search on a short name.
    pub fn short(name: &str) -> Self {
        Self::Name {
            short: Some(name.to_string()),
            long: None,
        }
    }

    /// Exact search on a long name.
    pub fn long(name: &str) -> Self {
        Self::Name {
            short: None,
            long: Some(name.to_string()),
        }
    }

    /// Abbreviation search.
    pub fn partial(name: &str) -> Self {
        Self::Partial(name.to_string())
    }
}

impl Container {
    /// Dispatches a query to the matching search strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyQuery`] for a name query that carries
    /// neither a short nor a long name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let root = Container::new()
    ///     .with_item(OptionSpec::flag(Some("h"), Some("help")))
    ///     .and_then(Container::sealed)
    ///     .unwrap();
    ///
    /// let hit = root.search_option(&OptionQuery::partial("he")).unwrap().unwrap();
    /// assert_eq!(hit.name, "help");
    ///
    /// let empty = OptionQuery::Name { short: None, long: None };
    /// assert_eq!(root.search_option(&empty).unwrap_err(), ContainerError::EmptyQuery);
    /// ```
    pub fn search_option(&self, query: &OptionQuery) -> Result<Option<SearchHit>> {
        match query {
            OptionQuery::Name {
                short: None,
                long: None,
            } => Err(ContainerError::EmptyQuery),
            OptionQuery::Name { short, long } => {
                Ok(self.search_option_by_name(short.as_deref(), long.as_deref()))
            }
            OptionQuery::Partial(partial) => Ok(self.search_option_by_abbreviation(partial)),
        }
    }

    /// Finds the first option whose short or long name equals the given one.
    ///
    /// Stops at the first match. Returns `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let root = Container::new()
    ///     .with_item(OptionSpec::flag(Some("h"), Some("help")))
    ///     .unwrap();
    ///
    /// let hit = root.search_option_by_name(None, Some("help")).unwrap();
    /// assert_eq!(hit.name, "help");
    /// assert!(root.search_option_by_name(None, Some("version")).is_none());
    /// ```
    pub fn search_option_by_name(
        &self,
        short: Option<&str>,
        long: Option<&str>,
    ) -> Option<SearchHit> {
        let found = self.untraverse().try_map_options(&mut |option| {
            match option.match_name(short, long) {
                Some(name) => ControlFlow::Break(SearchHit {
                    option: Rc::clone(option),
                    name,
                }),
                None => ControlFlow::Continue(()),
            }
        });
        let hit = match found {
            ControlFlow::Break(hit) => Some(hit),
            ControlFlow::Continue(()) => None,
        };
        trace!(?short, ?long, found = hit.is_some(), "Searched option by name");
        hit
    }

    /// Resolves a partial long name to the closest completion.
    ///
    /// Every option is scored with
    /// [`abbreviation_distance`](OptionItem::abbreviation_distance); a
    /// strictly smaller distance replaces the current best, so the first
    /// option seen wins ties. The hit carries the full long name.
    ///
    /// The default distance is `0` for every prefix, so an exact long name
    /// does not beat a longer completion seen earlier: with `helper` added
    /// before `help`, `"help"` resolves to `helper`. Use
    /// [`search_option_by_name`](Container::search_option_by_name) to match
    /// a complete name exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let root = Container::new()
    ///     .with_item(OptionSpec::flag(None, Some("help")))
    ///     .and_then(|c| c.with_item(OptionSpec::flag(None, Some("hello"))))
    ///     .unwrap();
    ///
    /// let hit = root.search_option_by_abbreviation("hel").unwrap();
    /// assert_eq!(hit.name, "help");
    /// assert!(root.search_option_by_abbreviation("x").is_none());
    /// ```
    pub fn search_option_by_abbreviation(&self, partial: &str) -> Option<SearchHit> {
        let mut best: Option<(usize, Rc<dyn OptionItem>)> = None;
        self.do_options(|option| {
            let Some(distance) = option.abbreviation_distance(partial) else {
                return;
            };
            if best.as_ref().is_none_or(|(current, _)| distance < *current) {
                best = Some((distance, Rc::clone(option)));
            }
        });

        let hit = best.and_then(|(_, option)| {
            let name = option.long_name()?.to_string();
            Some(SearchHit { option, name })
        });
        trace!(partial, found = hit.is_some(), "Searched option by abbreviation");
        hit
    }

    /// Resolves a sticky token such as `xVALUE` to an option and its
    /// argument.
    ///
    /// Every option is scored with
    /// [`sticky_distance`](OptionItem::sticky_distance); a strictly greater
    /// distance replaces the current best, so the longest short name wins
    /// and the first option seen wins ties. The hit carries the remainder of
    /// `namearg` after the matched short name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgroup_core::*;
    ///
    /// let root = Container::new()
    ///     .with_item(OptionSpec::with_argument(Some("x"), None))
    ///     .unwrap();
    ///
    /// let hit = root.search_sticky_option("xVALUE").unwrap();
    /// assert_eq!(hit.name, "VALUE");
    /// ```
    pub fn search_sticky_option(&self, namearg: &str) -> Option<SearchHit> {
        let mut best: Option<(usize, Rc<dyn OptionItem>)> = None;
        self.do_options(|option| {
            let distance = option.sticky_distance(namearg);
            let current = best.as_ref().map_or(0, |(current, _)| *current);
            if distance > current {
                best = Some((distance, Rc::clone(option)));
            }
        });

        let hit = best.and_then(|(distance, option)| {
            let rest = namearg.get(distance..)?.to_string();
            Some(SearchHit { option, name: rest })
        });
        trace!(namearg, found = hit.is_some(), "Searched sticky option");
        hit
    }
}
