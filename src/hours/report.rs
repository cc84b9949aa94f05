use crate::config::RunConfig;
use crate::hours::estimate::estimate_hours;
use crate::hours::group::AuthorGroup;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone)]
pub struct AuthorWork {
    pub email: String,
    pub name: String,
    pub hours: f64,
    pub commits: usize,
}

/// The aggregated estimate: one entry per author, ascending by hours, plus
/// the grand total. An ordered list rather than a map, so "total" stays
/// last and the author order survives serialization.
#[derive(Debug, Clone)]
pub struct Report {
    pub authors: Vec<AuthorWork>,
    pub total_hours: f64,
    pub total_commits: usize,
}

pub fn build_report(groups: &[AuthorGroup], config: &RunConfig, total_commits: usize) -> Report {
    let mut authors: Vec<AuthorWork> = groups
        .iter()
        .map(|group| AuthorWork {
            email: group.email.clone(),
            name: group.name.clone(),
            hours: estimate_hours(&group.timestamps, config),
            commits: group.timestamps.len(),
        })
        .collect();

    // stable sort: equal hours keep grouping order
    authors.sort_by(|a, b| {
        a.hours
            .partial_cmp(&b.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_hours = authors.iter().map(|a| a.hours).sum();

    Report {
        authors,
        total_hours,
        total_commits,
    }
}

#[derive(serde::Serialize)]
struct AuthorEntry<'a> {
    name: &'a str,
    hours: f64,
    commits: usize,
}

#[derive(serde::Serialize)]
struct TotalEntry {
    hours: f64,
    commits: usize,
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.authors.len() + 1))?;
        for author in &self.authors {
            map.serialize_entry(
                &author.email,
                &AuthorEntry {
                    name: &author.name,
                    hours: author.hours,
                    commits: author.commits,
                },
            )?;
        }
        map.serialize_entry(
            "total",
            &TotalEntry {
                hours: self.total_hours,
                commits: self.total_commits,
            },
        )?;
        map.end()
    }
}
