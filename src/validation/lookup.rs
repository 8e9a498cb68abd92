//! Uniqueness lookup collaborator
//!
//! The engine does not know where products live. Whatever holds them answers
//! one question: is this title already taken?

use std::collections::{BTreeSet, HashSet};

/// Membership check for already persisted titles
pub trait TitleLookup {
    fn exists(&self, title: &str) -> bool;
}

impl TitleLookup for HashSet<String> {
    fn exists(&self, title: &str) -> bool {
        self.contains(title)
    }
}

impl TitleLookup for BTreeSet<String> {
    fn exists(&self, title: &str) -> bool {
        self.contains(title)
    }
}

/// A store with nothing in it
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTitles;

impl TitleLookup for NoTitles {
    fn exists(&self, _title: &str) -> bool {
        false
    }
}

/// Wraps a lookup so that one title, the record's own, never counts as taken
pub struct Excluding<'a> {
    inner: &'a dyn TitleLookup,
    own_title: Option<&'a str>,
}

impl<'a> Excluding<'a> {
    pub fn new(inner: &'a dyn TitleLookup, own_title: Option<&'a str>) -> Self {
        Self { inner, own_title }
    }
}

impl TitleLookup for Excluding<'_> {
    fn exists(&self, title: &str) -> bool {
        self.own_title != Some(title) && self.inner.exists(title)
    }
}
