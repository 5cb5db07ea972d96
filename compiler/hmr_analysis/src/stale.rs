//! Sources from the previous build.

use hmr_ir::SourceVersion;
use rustc_hash::FxHashMap;

/// Previous build's source versions, keyed by path.
///
/// Owned by the caller across rebuilds; the analyzer only reads it. A path
/// missing from the map cannot be diffed, so any change to it forces a full
/// rebuild.
#[derive(Clone, Debug, Default)]
pub struct StaleSourceMap {
    files: FxHashMap<String, SourceVersion>,
}

impl StaleSourceMap {
    pub fn new() -> Self {
        StaleSourceMap::default()
    }

    /// Add or replace the version at `source.path()`.
    pub fn insert(&mut self, source: SourceVersion) -> Option<SourceVersion> {
        self.files.insert(source.path().to_owned(), source)
    }

    pub fn remove(&mut self, path: &str) -> Option<SourceVersion> {
        self.files.remove(path)
    }

    pub fn get(&self, path: &str) -> Option<&SourceVersion> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Extend<SourceVersion> for StaleSourceMap {
    fn extend<I: IntoIterator<Item = SourceVersion>>(&mut self, iter: I) {
        for source in iter {
            self.insert(source);
        }
    }
}

impl FromIterator<SourceVersion> for StaleSourceMap {
    fn from_iter<I: IntoIterator<Item = SourceVersion>>(iter: I) -> Self {
        let mut map = StaleSourceMap::new();
        map.extend(iter);
        map
    }
}
