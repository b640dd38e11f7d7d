//! Search filesystem use case
//!
//! Drives the recursive walk: every entry is stat'ed, hashed when it is a
//! regular file, evaluated, and either recorded as a match or dropped
//! before the next entry is pulled.

use crate::application::dto::{SearchOptions, SearchReport};
use crate::application::AUDIT_TARGET;
use crate::core::{paths, ScanError, SearchError, TraversalFatal};
use crate::domain::entities::MatchResult;
use crate::domain::repositories::{ContentHasher, DirectoryTraversal, MetadataExtractor};
use crate::domain::services::{MatchEvaluator, ResultAggregator, RunReport};
use crate::infrastructure::filesystem::{StatMetadataExtractor, WalkdirTraversal};
use crate::infrastructure::hashing::Sha256Hasher;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Something worth telling the caller while the walk is still running
#[derive(Debug)]
pub enum SearchEvent<'a> {
    /// An entry was pulled from the traversal; `processed` includes it
    Visited { path: &'a Path, processed: u64 },
    Matched(&'a MatchResult),
    EntryFailed(&'a ScanError),
}

/// Live notification hook
pub type SearchCallback = Box<dyn Fn(&SearchEvent<'_>) + Send + Sync>;

/// Search filesystem use case
///
/// Single-threaded and synchronous: each entry is fully processed before
/// the next one is visited, and no file handle outlives its entry.
pub struct SearchFilesystemUseCase<T, M, H> {
    traversal: T,
    extractor: M,
    hasher: H,
}

impl SearchFilesystemUseCase<WalkdirTraversal, StatMetadataExtractor, Sha256Hasher> {
    /// Wires the use case to the local filesystem
    pub fn local(options: &SearchOptions) -> Self {
        Self::new(
            WalkdirTraversal::new(options.follow_links),
            StatMetadataExtractor::new(),
            Sha256Hasher::with_buffer_size(options.hash_buffer_size),
        )
    }
}

impl<T, M, H> SearchFilesystemUseCase<T, M, H>
where
    T: DirectoryTraversal,
    M: MetadataExtractor,
    H: ContentHasher,
{
    pub fn new(traversal: T, extractor: M, hasher: H) -> Self {
        Self {
            traversal,
            extractor,
            hasher,
        }
    }

    /// Executes the search.
    ///
    /// Per-entry failures end up in [`SearchReport::errors`]. A failure of
    /// the traversal itself stops the walk and is reported in
    /// [`SearchReport::fatal`] next to whatever was gathered so far.
    pub fn execute(
        &self,
        options: &SearchOptions,
        callback: Option<SearchCallback>,
    ) -> Result<SearchReport, SearchError> {
        let root = paths::absolute_normalized(&options.root).map_err(|e| SearchError::InvalidRoot {
            path: options.root.clone(),
            reason: e.to_string(),
        })?;

        let start_time = Instant::now();
        let evaluator = MatchEvaluator::new(&options.criteria);
        let mut aggregator = ResultAggregator::new();
        let mut errors: Vec<ScanError> = Vec::new();
        let mut last_path: Option<PathBuf> = None;
        let mut fatal: Option<TraversalFatal> = None;

        tracing::info!(
            target: AUDIT_TARGET,
            root = %root.display(),
            extension_mode = %options.criteria.extension_mode(),
            algorithm = self.hasher.algorithm(),
            "Search started"
        );

        for item in self.traversal.entries(&root) {
            let path = match item {
                Ok(path) => path,
                Err(fault) if fault.is_fatal() => {
                    let snapshot = TraversalFatal {
                        last_path: last_path.clone().or(fault.path),
                        message: fault.message,
                    };
                    tracing::error!(
                        target: AUDIT_TARGET,
                        error = %snapshot.message,
                        last_path = ?snapshot.last_path,
                        "Search aborted"
                    );
                    fatal = Some(snapshot);
                    break;
                }
                Err(fault) => {
                    let err = ScanError::Traversal {
                        path: fault.path.unwrap_or_else(|| root.clone()),
                        message: fault.message,
                    };
                    report_error(err, &mut errors, callback.as_ref());
                    continue;
                }
            };

            aggregator.record_processed();
            last_path = Some(path.clone());
            if let Some(cb) = callback.as_ref() {
                cb(&SearchEvent::Visited {
                    path: &path,
                    processed: aggregator.counters().files_processed,
                });
            }

            if let Some(result) = self.process_entry(&path, &evaluator, &mut errors, callback.as_ref()) {
                log_match(&result);
                if let Some(cb) = callback.as_ref() {
                    cb(&SearchEvent::Matched(&result));
                }
                aggregator.add(result);
            }
        }

        let elapsed = start_time.elapsed();
        let counters = aggregator.counters();
        let summary = RunReport::summarize(counters, elapsed);
        let matches = aggregator.finalize();

        tracing::info!(
            target: AUDIT_TARGET,
            elapsed_seconds = summary.elapsed_seconds,
            files_processed = counters.files_processed,
            files_matched = counters.files_matched,
            errors = errors.len(),
            "Search finished"
        );

        Ok(SearchReport {
            root,
            criteria: options.criteria.clone(),
            matches,
            errors,
            counters,
            summary,
            fatal,
        })
    }

    /// stat -> hash (regular files only) -> evaluate
    fn process_entry(
        &self,
        path: &Path,
        evaluator: &MatchEvaluator,
        errors: &mut Vec<ScanError>,
        callback: Option<&SearchCallback>,
    ) -> Option<MatchResult> {
        tracing::trace!(path = %path.display(), "Visiting entry");

        let metadata = match self.extractor.extract(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                report_error(err, errors, callback);
                return None;
            }
        };

        let digest = if metadata.entry_type().is_hashable() {
            match self.hasher.hash(path) {
                Ok(digest) => Some(digest),
                Err(err) => {
                    report_error(err, errors, callback);
                    None
                }
            }
        } else {
            None
        };

        let verdict = evaluator.evaluate(digest.as_deref(), &path.to_string_lossy());
        if !verdict.any() {
            return None;
        }

        Some(MatchResult::new(metadata.with_digest(digest), verdict))
    }
}

fn report_error(err: ScanError, errors: &mut Vec<ScanError>, callback: Option<&SearchCallback>) {
    tracing::warn!(
        target: AUDIT_TARGET,
        path = %err.path().display(),
        stage = err.stage(),
        error = %err.message(),
        "Entry skipped"
    );
    if let Some(cb) = callback {
        cb(&SearchEvent::EntryFailed(&err));
    }
    errors.push(err);
}

fn log_match(result: &MatchResult) {
    let meta = result.metadata();
    let verdict = result.verdict();

    tracing::info!(
        target: AUDIT_TARGET,
        file_name = meta.file_name(),
        path = %meta.absolute_path().display(),
        file_type = %meta.entry_type(),
        size_bytes = meta.size_bytes(),
        hash = meta.digest_hex().unwrap_or("N/A"),
        last_modified = %meta.modified_at(),
        last_accessed = %meta.accessed_at(),
        created = %meta.created_at(),
        ext_match = verdict.ext_match,
        path_match = verdict.path_match,
        hash_match = verdict.hash_match,
        "Match found"
    );
}
