use chrono::{DateTime, Utc};
use gix::ObjectId;

/// Email used for commits that carry no attributable author identity.
pub const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, Clone)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

/// One commit as seen during history traversal. The same id may be yielded
/// by several branch walks; deduplication collapses those to one record.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub id: ObjectId,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub author: Option<CommitAuthor>,
}

/// A local branch head, one traversal starting point.
#[derive(Debug, Clone)]
pub struct BranchRef {
    pub name: String,
    pub head: ObjectId,
}

/// One end of the commit time window. `Always` leaves that end open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Always,
    At(DateTime<Utc>),
}

#[derive(Debug, Clone, Copy)]
pub struct CommitWindow {
    pub since: Bound,
    pub until: Bound,
}

impl CommitWindow {
    pub fn everything() -> Self {
        Self {
            since: Bound::Always,
            until: Bound::Always,
        }
    }

    /// Both bounds are strictly exclusive: a commit timestamped exactly at
    /// `since` or `until` falls outside the window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        if let Bound::At(since) = self.since {
            if timestamp <= since {
                return false;
            }
        }
        if let Bound::At(until) = self.until {
            if timestamp >= until {
                return false;
            }
        }
        true
    }
}

impl Default for CommitWindow {
    fn default() -> Self {
        Self::everything()
    }
}
