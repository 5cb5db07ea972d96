//! Batch decision: hot update or full rebuild.
//!
//! Walks the modified files of one rebuild in order. Template and stylesheet
//! files contribute their bound components directly; source files go through
//! the structural diff in [`crate::statements`]. The first file that cannot be
//! hot-applied poisons the whole batch and processing stops.
//!
//! ```text
//! Accumulating ──(resource or supported file)──> Accumulating
//!      │
//!      └──(unknown, missing or unsupported file)──> Poisoned (absorbing)
//! ```

use std::fmt;

use hmr_ir::ClassId;

use crate::candidates::CandidateSet;
use crate::resources::components_for_resource;
use crate::stale::StaleSourceMap;
use crate::statements::{analyze_file, Unsupported};
use crate::ProgramInspector;

/// Why a batch cannot be hot-applied.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PoisonReason {
    /// The file has no stale version to diff against.
    UnknownStaleFile,
    /// The file is not part of the updated program.
    MissingUpdatedFile,
    /// The file changed in a way the analyzer cannot hot-apply.
    Unsupported(Unsupported),
}

impl fmt::Display for PoisonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoisonReason::UnknownStaleFile => f.write_str("no stale version of the file"),
            PoisonReason::MissingUpdatedFile => {
                f.write_str("file missing from the updated program")
            }
            PoisonReason::Unsupported(unsupported) => fmt::Display::fmt(unsupported, f),
        }
    }
}

/// The file that poisoned a batch.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Poison {
    pub path: String,
    pub reason: PoisonReason,
}

impl fmt::Display for Poison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Result of analyzing one batch of modified files.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchOutcome {
    /// Every file was hot-applicable. Empty when nothing needs re-rendering.
    Candidates(CandidateSet),
    /// A full rebuild is required.
    Poisoned(Poison),
}

impl BatchOutcome {
    pub fn is_poisoned(&self) -> bool {
        matches!(self, BatchOutcome::Poisoned(_))
    }

    /// Candidates of a clean batch.
    pub fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            BatchOutcome::Candidates(candidates) => Some(candidates),
            BatchOutcome::Poisoned(_) => None,
        }
    }

    pub fn poison(&self) -> Option<&Poison> {
        match self {
            BatchOutcome::Candidates(_) => None,
            BatchOutcome::Poisoned(poison) => Some(poison),
        }
    }

    /// Collapse to the candidate set; a poisoned batch gives the empty set.
    pub fn into_candidates(self) -> CandidateSet {
        match self {
            BatchOutcome::Candidates(candidates) => candidates,
            BatchOutcome::Poisoned(_) => CandidateSet::new(),
        }
    }
}

/// Decides whether a batch of modified files can be hot-applied.
///
/// Borrows the updated program and the previous build's sources; neither is
/// mutated.
#[derive(Debug)]
pub struct HotUpdateAnalyzer<'a, P: ?Sized> {
    inspector: &'a P,
    stale: &'a StaleSourceMap,
}

impl<P: ?Sized> Clone for HotUpdateAnalyzer<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for HotUpdateAnalyzer<'_, P> {}

impl<'a, P> HotUpdateAnalyzer<'a, P>
where
    P: ProgramInspector + ?Sized,
{
    pub fn new(inspector: &'a P, stale: &'a StaleSourceMap) -> Self {
        HotUpdateAnalyzer { inspector, stale }
    }

    /// Components to re-render, or the empty set if a full rebuild is
    /// required.
    pub fn analyze<I>(&self, modified_files: I) -> CandidateSet
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.analyze_batch(modified_files).into_candidates()
    }

    /// Like [`analyze`](Self::analyze), but reports the file that poisoned
    /// the batch.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn analyze_batch<I>(&self, modified_files: I) -> BatchOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut candidates = CandidateSet::new();
        for path in modified_files {
            let path = path.as_ref();
            match self.analyze_path(path) {
                Ok(classes) => candidates.extend(classes),
                Err(reason) => {
                    tracing::debug!(path, %reason, "batch poisoned");
                    return BatchOutcome::Poisoned(Poison {
                        path: path.to_owned(),
                        reason,
                    });
                }
            }
        }
        tracing::debug!(candidates = candidates.len(), "batch is hot-swappable");
        BatchOutcome::Candidates(candidates)
    }

    fn analyze_path(&self, path: &str) -> Result<Vec<ClassId>, PoisonReason> {
        let resource_classes = components_for_resource(self.inspector, path);
        if !resource_classes.is_empty() {
            tracing::debug!(path, classes = resource_classes.len(), "resource file");
            return Ok(resource_classes);
        }

        let Some(stale) = self.stale.get(path) else {
            return Err(PoisonReason::UnknownStaleFile);
        };
        let Some(updated) = self.inspector.source_file(path) else {
            return Err(PoisonReason::MissingUpdatedFile);
        };
        analyze_file(stale, updated, self.inspector).map_err(PoisonReason::Unsupported)
    }
}

/// One-call form of [`HotUpdateAnalyzer::analyze`].
///
/// # Example
///
/// ```
/// use hmr_analysis::{analyze_hot_update, InMemoryProgram, StaleSourceMap};
/// use hmr_ir::{ClassSpec, ObjectSpec, SourceBuilder};
///
/// let component = |template: &str| {
///     let mut builder = SourceBuilder::new("src/foo.ts");
///     let metadata = ObjectSpec::new().field("template", template);
///     builder.class(&ClassSpec::component("Foo", metadata));
///     builder.finish().unwrap()
/// };
///
/// let stale: StaleSourceMap = [component("'<p>A</p>'")].into_iter().collect();
/// let mut program = InMemoryProgram::new();
/// program.insert_source(component("'<p>B</p>'"));
/// program.mark_components("Component");
///
/// let candidates = analyze_hot_update(&program, &stale, ["src/foo.ts"]);
/// assert_eq!(candidates.len(), 1);
/// ```
pub fn analyze_hot_update<P, I>(
    inspector: &P,
    stale: &StaleSourceMap,
    modified_files: I,
) -> CandidateSet
where
    P: ProgramInspector + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    HotUpdateAnalyzer::new(inspector, stale).analyze(modified_files)
}
