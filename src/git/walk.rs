use crate::error::{HoursError, Result};
use crate::model::{CommitAuthor, CommitRecord};
use chrono::DateTime;
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};

/// Lazy walk over the commit graph backward from one branch head.
///
/// Follows all parent links, visits each commit at most once, and yields
/// records one at a time. Single pass; walking the branch again means
/// constructing a new walk. Any read or decode failure is yielded as a
/// fatal error and the run is expected to abort.
pub struct CommitWalk<'repo> {
    repo: &'repo Repository,
    queue: VecDeque<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl<'repo> CommitWalk<'repo> {
    pub fn new(repo: &'repo Repository, head: ObjectId) -> Self {
        Self {
            repo,
            queue: VecDeque::from([head]),
            seen: HashSet::new(),
        }
    }

    fn read_commit(&mut self, id: ObjectId) -> Result<CommitRecord> {
        let commit = self
            .repo
            .find_commit(id)
            .map_err(|e| HoursError::Traversal(format!("Failed to read commit {id}: {e}")))?;

        let secs = commit
            .time()
            .map_err(|e| HoursError::Traversal(format!("Failed to decode commit {id}: {e}")))?
            .seconds;
        let timestamp = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            HoursError::Traversal(format!("Commit {id} has invalid timestamp {secs}"))
        })?;

        let summary = commit
            .message()
            .map_err(|e| HoursError::Traversal(format!("Failed to decode commit {id}: {e}")))?
            .title
            .to_string();

        let signature = commit
            .author()
            .map_err(|e| HoursError::Traversal(format!("Failed to decode commit {id}: {e}")))?;
        let author = if signature.email.is_empty() && signature.name.is_empty() {
            None
        } else {
            Some(CommitAuthor {
                name: signature.name.to_string(),
                email: signature.email.to_string(),
            })
        };

        for parent in commit.parent_ids() {
            self.queue.push_back(parent.detach());
        }

        Ok(CommitRecord {
            id,
            timestamp,
            summary,
            author,
        })
    }
}

impl Iterator for CommitWalk<'_> {
    type Item = Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if !self.seen.insert(id) {
                continue;
            }
            return Some(self.read_commit(id));
        }
        None
    }
}
