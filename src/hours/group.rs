use crate::config::RunConfig;
use crate::model::{CommitRecord, UNKNOWN_AUTHOR};
use chrono::{DateTime, Utc};
use gix::ObjectId;
use std::collections::{HashMap, HashSet};

/// Merge per-branch commit lists into one set: first occurrence of each id
/// wins, then the time window and merge-commit filters are applied.
///
/// Branch lists arrive in enumeration order and each list in traversal
/// order, so the surviving order is deterministic per run even though
/// callers must not rely on it.
pub fn dedup_and_filter(
    branch_commits: Vec<Vec<CommitRecord>>,
    config: &RunConfig,
) -> Vec<CommitRecord> {
    let mut seen: HashSet<ObjectId> = HashSet::new();
    let mut merged: Vec<CommitRecord> = Vec::new();

    for record in branch_commits.into_iter().flatten() {
        if seen.insert(record.id) {
            merged.push(record);
        }
    }

    merged.retain(|commit| {
        config.window.contains(commit.timestamp)
            && (config.include_merges || !commit.summary.starts_with("Merge "))
    });

    merged
}

/// One author's share of the filtered commit set, keyed by canonical email.
#[derive(Debug, Clone)]
pub struct AuthorGroup {
    pub email: String,
    /// Name attached to the first commit seen for this email.
    pub name: String,
    pub timestamps: Vec<DateTime<Utc>>,
}

/// Partition commits by canonical author email. The alias map folds raw
/// emails into canonical ones; commits without a usable email land under
/// the "unknown" sentinel. Groups come out in first-seen order.
pub fn group_by_author(
    commits: &[CommitRecord],
    aliases: &HashMap<String, String>,
) -> Vec<AuthorGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<AuthorGroup> = Vec::new();

    for commit in commits {
        let (raw_email, raw_name) = match &commit.author {
            Some(author) if !author.email.is_empty() => {
                (author.email.as_str(), author.name.as_str())
            }
            Some(author) => (UNKNOWN_AUTHOR, author.name.as_str()),
            None => (UNKNOWN_AUTHOR, UNKNOWN_AUTHOR),
        };

        let canonical = aliases
            .get(raw_email)
            .map(String::as_str)
            .unwrap_or(raw_email);

        let slot = match index.get(canonical) {
            Some(&slot) => slot,
            None => {
                let name = if raw_name.is_empty() {
                    UNKNOWN_AUTHOR
                } else {
                    raw_name
                };
                groups.push(AuthorGroup {
                    email: canonical.to_string(),
                    name: name.to_string(),
                    timestamps: Vec::new(),
                });
                index.insert(canonical.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].timestamps.push(commit.timestamp);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bound, CommitAuthor, CommitWindow};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn oid(n: u32) -> ObjectId {
        ObjectId::from_hex(format!("{n:040x}").as_bytes()).unwrap()
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn commit(n: u32, minutes: i64, email: &str, summary: &str) -> CommitRecord {
        CommitRecord {
            id: oid(n),
            timestamp: at(minutes),
            summary: summary.to_string(),
            author: Some(CommitAuthor {
                name: format!("author {email}"),
                email: email.to_string(),
            }),
        }
    }

    #[test]
    fn shared_history_collapses_to_one_commit_per_id() {
        let main = vec![
            commit(1, 0, "a@x", "one"),
            commit(2, 10, "a@x", "two"),
        ];
        let feature = vec![
            commit(3, 20, "b@x", "three"),
            commit(1, 0, "a@x", "one"),
            commit(2, 10, "a@x", "two"),
        ];

        let merged = dedup_and_filter(vec![main, feature], &RunConfig::default());
        let ids: Vec<ObjectId> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![oid(1), oid(2), oid(3)]);
    }

    #[test]
    fn since_and_until_bounds_are_exclusive() {
        let config = RunConfig {
            window: CommitWindow {
                since: Bound::At(at(0)),
                until: Bound::At(at(60)),
            },
            ..RunConfig::default()
        };

        let commits = vec![vec![
            commit(1, 0, "a@x", "exactly at since"),
            commit(2, 1, "a@x", "just inside"),
            commit(3, 59, "a@x", "still inside"),
            commit(4, 60, "a@x", "exactly at until"),
            commit(5, 61, "a@x", "past until"),
        ]];

        let merged = dedup_and_filter(commits, &config);
        let ids: Vec<ObjectId> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![oid(2), oid(3)]);
    }

    #[test]
    fn merge_prefix_filter_is_case_sensitive() {
        let commits = || {
            vec![vec![
                commit(1, 0, "a@x", "Merge branch 'x'"),
                commit(2, 10, "a@x", "merge fix"),
                commit(3, 20, "a@x", "Mergers gonna merge"),
            ]]
        };

        let without = dedup_and_filter(commits(), &RunConfig::default());
        let ids: Vec<ObjectId> = without.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![oid(2), oid(3)]);

        let with = dedup_and_filter(
            commits(),
            &RunConfig {
                include_merges: true,
                ..RunConfig::default()
            },
        );
        assert_eq!(with.len(), 3);
    }

    #[test]
    fn aliases_fold_into_one_group() {
        let mut aliases = HashMap::new();
        aliases.insert("old@x".to_string(), "me@x".to_string());

        let commits = vec![
            commit(1, 0, "me@x", "one"),
            commit(2, 10, "old@x", "two"),
            commit(3, 20, "other@x", "three"),
        ];

        let groups = group_by_author(&commits, &aliases);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].email, "me@x");
        assert_eq!(groups[0].timestamps.len(), 2);
        assert_eq!(groups[1].email, "other@x");
    }

    #[test]
    fn missing_author_groups_under_unknown() {
        let mut anonymous = commit(1, 0, "x", "one");
        anonymous.author = None;
        let mut nameless = commit(2, 10, "x", "two");
        nameless.author = Some(CommitAuthor {
            name: "Ghost".to_string(),
            email: String::new(),
        });

        let groups = group_by_author(&[anonymous, nameless], &HashMap::new());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].email, UNKNOWN_AUTHOR);
        assert_eq!(groups[0].name, UNKNOWN_AUTHOR);
        assert_eq!(groups[0].timestamps.len(), 2);
    }

    #[test]
    fn display_name_is_first_seen() {
        let mut first = commit(1, 0, "a@x", "one");
        first.author = Some(CommitAuthor {
            name: "Alice".to_string(),
            email: "a@x".to_string(),
        });
        let mut second = commit(2, 10, "a@x", "two");
        second.author = Some(CommitAuthor {
            name: "Alice B.".to_string(),
            email: "a@x".to_string(),
        });

        let groups = group_by_author(&[first, second], &HashMap::new());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Alice");
    }

    #[test]
    fn group_sizes_sum_to_the_filtered_set() {
        let commits = vec![
            commit(1, 0, "a@x", "one"),
            commit(2, 10, "b@x", "two"),
            commit(3, 20, "a@x", "three"),
        ];
        let groups = group_by_author(&commits, &HashMap::new());
        let counted: usize = groups.iter().map(|g| g.timestamps.len()).sum();
        assert_eq!(counted, commits.len());
    }
}
