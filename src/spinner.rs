// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Spinner definitions as published by the cli-spinners catalogue.
//!
//! The collection keeps the insertion order of the source document. Sorted
//! order is derived on demand for declarations, while the aggregate table
//! follows document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::config::Denylist;

/// A single terminal animation.
///
/// Both fields are optional so that incomplete upstream entries still load.
/// Missing values are not corrected and surface in the generated module.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct SpinnerDefinition
{
    /// Milliseconds between frames, kept as the JSON number that was read.
    #[serde(default)]
    pub interval: Option<Number,>,

    /// Frames to rotate through, in display order.
    #[serde(default)]
    pub frames:   Option<Vec<String,>,>,
}

impl SpinnerDefinition
{
    /// Creates a complete definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use spinner_variants::SpinnerDefinition;
    ///
    /// let dots = SpinnerDefinition::new(80, ["⠋", "⠙", "⠹"],);
    /// assert_eq!(dots.frames.as_deref().map(<[String]>::len), Some(3));
    /// ```
    pub fn new<I, S,>(interval: u64, frames: I,) -> Self
    where
        I: IntoIterator<Item = S,>,
        S: Into<String,>,
    {
        Self {
            interval: Some(Number::from(interval,),),
            frames:   Some(frames.into_iter().map(Into::into,).collect(),),
        }
    }
}

/// Mapping from spinner name to definition in source document order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(transparent)]
pub struct SpinnerCollection
{
    entries: IndexMap<String, SpinnerDefinition,>,
}

impl SpinnerCollection
{
    /// Creates an empty collection.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Inserts or replaces a definition.
    ///
    /// Replacing an existing name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String,>, definition: SpinnerDefinition,)
    {
        self.entries.insert(name.into(), definition,);
    }

    pub fn get(&self, name: &str,) -> Option<&SpinnerDefinition,>
    {
        self.entries.get(name,)
    }

    pub fn contains(&self, name: &str,) -> bool
    {
        self.entries.contains_key(name,)
    }

    pub fn len(&self,) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterates over entries in source document order.
    pub fn iter(&self,) -> impl Iterator<Item = (&str, &SpinnerDefinition,),>
    {
        self.entries.iter().map(|(name, definition,)| (name.as_str(), definition,),)
    }

    /// Returns the names in source document order.
    pub fn names(&self,) -> impl Iterator<Item = &str,>
    {
        self.entries.keys().map(String::as_str,)
    }

    /// Returns the names sorted by byte-wise lexicographic order.
    pub fn sorted_names(&self,) -> Vec<&str,>
    {
        let mut names: Vec<&str,> = self.names().collect();
        names.sort_unstable();
        names
    }

    /// Removes every denylisted name in place and returns how many entries
    /// were dropped.
    ///
    /// Absent names are ignored, so the operation is idempotent. The
    /// remaining entries keep their relative order.
    pub fn remove_denylisted(&mut self, denylist: &Denylist,) -> usize
    {
        let before = self.entries.len();
        self.entries.retain(|name, _| !denylist.contains(name,),);
        let removed = before - self.entries.len();
        debug!("Removed {} denylisted spinners, {} remain", removed, self.entries.len());
        removed
    }

    /// Returns a copy of the collection without denylisted names.
    pub fn filtered(&self, denylist: &Denylist,) -> Self
    {
        let mut retained = self.clone();
        retained.remove_denylisted(denylist,);
        retained
    }
}

impl<N,> FromIterator<(N, SpinnerDefinition,),> for SpinnerCollection
where
    N: Into<String,>,
{
    fn from_iter<T: IntoIterator<Item = (N, SpinnerDefinition,),>,>(iter: T,) -> Self
    {
        Self {
            entries: iter.into_iter().map(|(name, definition,)| (name.into(), definition,),).collect(),
        }
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{SpinnerCollection, SpinnerDefinition};
    use crate::config::{DEFAULT_DENYLIST, Denylist};

    fn sample() -> SpinnerCollection
    {
        [
            ("dots", SpinnerDefinition::new(80, ["a", "b"],),),
            ("weather", SpinnerDefinition::new(100, ["☀️ "],),),
            ("bounce", SpinnerDefinition::new(120, ["⠁", "⠂"],),),
            ("arrow2", SpinnerDefinition::new(80, ["⬆️ "],),),
        ]
        .into_iter()
        .collect()
    }

    proptest! {
        #[test]
        fn filtering_drops_every_denylisted_name(
            names in prop::collection::vec("[a-z]{1,8}", 0..16),
            denied in prop::collection::vec(0usize..4, 0..4),
        ) {
            let mut collection: SpinnerCollection = names
                .iter()
                .map(|name| (name.clone(), SpinnerDefinition::new(80, ["x"])))
                .collect();
            for index in denied {
                collection.insert(DEFAULT_DENYLIST[index], SpinnerDefinition::default());
            }

            let denylist = Denylist::default();
            collection.remove_denylisted(&denylist);
            prop_assert!(collection.names().all(|name| !denylist.contains(name)));

            let mut again = collection.clone();
            prop_assert_eq!(again.remove_denylisted(&denylist), 0);
            prop_assert_eq!(again.len(), collection.len());
        }
    }

    #[test]
    fn remove_denylisted_reports_removed_count()
    {
        let mut collection = sample();
        let removed = collection.remove_denylisted(&Denylist::default(),);
        assert_eq!(removed, 2);
        assert_eq!(collection.len(), 2);
        assert!(!collection.contains("weather"));
        assert!(!collection.contains("arrow2"));
    }

    #[test]
    fn remove_denylisted_preserves_source_order()
    {
        let mut collection = sample();
        collection.remove_denylisted(&Denylist::default(),);
        let names: Vec<&str,> = collection.names().collect();
        assert_eq!(names, vec!["dots", "bounce"]);
    }

    #[test]
    fn remove_denylisted_ignores_absent_names()
    {
        let mut collection: SpinnerCollection =
            [("dots", SpinnerDefinition::new(80, ["a"],),)].into_iter().collect();
        assert_eq!(collection.remove_denylisted(&Denylist::default()), 0);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn filtered_leaves_original_untouched()
    {
        let collection = sample();
        let retained = collection.filtered(&Denylist::default(),);
        assert_eq!(collection.len(), 4);
        assert_eq!(retained.len(), 2);
    }

    #[test]
    fn sorted_names_differs_from_source_order()
    {
        let collection = sample();
        assert_eq!(collection.sorted_names(), vec!["arrow2", "bounce", "dots", "weather"]);
        assert_eq!(collection.names().next(), Some("dots"));
    }

    #[test]
    fn sorted_names_places_uppercase_before_lowercase()
    {
        let collection: SpinnerCollection = [
            ("dwarfFortress", SpinnerDefinition::default(),),
            ("dots", SpinnerDefinition::default(),),
            ("Dots", SpinnerDefinition::default(),),
        ]
        .into_iter()
        .collect();
        assert_eq!(collection.sorted_names(), vec!["Dots", "dots", "dwarfFortress"]);
    }

    #[test]
    fn insert_replacing_name_keeps_position()
    {
        let mut collection = sample();
        collection.insert("dots", SpinnerDefinition::new(1, ["z"],),);
        assert_eq!(collection.names().next(), Some("dots"));
        assert_eq!(collection.get("dots"), Some(&SpinnerDefinition::new(1, ["z"],)));
    }

    #[test]
    fn deserializes_with_source_order_and_missing_fields()
    {
        let json = r#"{"zeta":{"interval":80,"frames":["a"]},"alpha":{"frames":["b"]}}"#;
        let collection: SpinnerCollection = serde_json::from_str(json,).expect("valid spinners",);

        let names: Vec<&str,> = collection.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let alpha = collection.get("alpha",).expect("alpha present",);
        assert!(alpha.interval.is_none());
        assert_eq!(alpha.frames.as_deref(), Some(&["b".to_owned()][..]));
    }
}
