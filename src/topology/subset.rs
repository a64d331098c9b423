//! `Subset`: the set of labels forming one cell's neighborhood.
//!
//! Labels are kept in a `BTreeSet`, so iteration and rendering are sorted and
//! deterministic. Duplicates produced by wraparound collapse on insertion.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::topology::label::Label;

/// A set of unique labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Subset {
    labels: BTreeSet<Label>,
}

impl Subset {
    /// Creates an empty subset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `label`, returning `false` if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        self.labels.insert(label)
    }

    /// True if `label` belongs to this subset.
    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    /// Labels present in both `self` and `other`.
    pub fn intersection(&self, other: &Subset) -> Subset {
        self.labels.intersection(&other.labels).copied().collect()
    }

    /// Labels present in either `self` or `other`.
    pub fn union(&self, other: &Subset) -> Subset {
        self.labels.union(&other.labels).copied().collect()
    }

    /// Borrow the underlying ordered set.
    pub fn as_set(&self) -> &BTreeSet<Label> {
        &self.labels
    }
}

impl FromIterator<Label> for Subset {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Label> for Subset {
    fn extend<I: IntoIterator<Item = Label>>(&mut self, iter: I) {
        self.labels.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Subset {
    type Item = Label;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Label>>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter().copied()
    }
}

/// Comma-joined labels, e.g. `aa,ab,ba`.
impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subset(labels: &[&str]) -> Subset {
        labels.iter().map(|s| s.parse::<Label>().unwrap()).collect()
    }

    #[test]
    fn duplicates_collapse() {
        let mut s = Subset::new();
        assert!(s.insert(Label::from_coords(0, 0)));
        assert!(!s.insert(Label::from_coords(26, -26)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn set_operations() {
        let a = subset(&["aa", "ab", "bb"]);
        let b = subset(&["ab", "bb", "cc"]);
        assert_eq!(a.intersection(&b), subset(&["ab", "bb"]));
        assert_eq!(a.union(&b), subset(&["aa", "ab", "bb", "cc"]));
    }

    #[test]
    fn renders_sorted_and_comma_joined() {
        let s = subset(&["ba", "aa", "ab"]);
        assert_eq!(s.to_string(), "aa,ab,ba");
        assert_eq!(Subset::new().to_string(), "");
    }

    #[test]
    fn serializes_as_label_list() {
        let s = subset(&["ab", "aa"]);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["aa","ab"]"#);
    }
}
