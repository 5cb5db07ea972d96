//! The set of components a hot update may re-render.

use hmr_ir::ClassId;
use rustc_hash::FxHashSet;

/// Insertion-ordered set of component classes.
///
/// Equality ignores order: two sets are equal when they hold the same
/// classes.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    order: Vec<ClassId>,
    members: FxHashSet<ClassId>,
}

impl CandidateSet {
    pub fn new() -> Self {
        CandidateSet::default()
    }

    /// Add a class. Returns `false` if it was already present.
    pub fn insert(&mut self, class: ClassId) -> bool {
        if !self.members.insert(class) {
            return false;
        }
        self.order.push(class);
        true
    }

    #[inline]
    pub fn contains(&self, class: ClassId) -> bool {
        self.members.contains(&class)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Classes in the order they were first inserted.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassId> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn as_slice(&self) -> &[ClassId] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<ClassId> {
        self.order
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for CandidateSet {}

impl Extend<ClassId> for CandidateSet {
    fn extend<I: IntoIterator<Item = ClassId>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl FromIterator<ClassId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = ClassId>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a ClassId;
    type IntoIter = std::slice::Iter<'a, ClassId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = ClassId;
    type IntoIter = std::vec::IntoIter<ClassId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

#[cfg(test)]
mod tests;
