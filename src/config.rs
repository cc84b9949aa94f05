use crate::cli::Cli;
use crate::error::{HoursError, Result};
use crate::model::{Bound, CommitWindow};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;

pub const DEFAULT_MAX_COMMIT_DIFF_MINUTES: u32 = 60;
pub const DEFAULT_FIRST_COMMIT_ADD_MINUTES: u32 = 30;

/// Immutable per-run configuration. Built once from the parsed CLI and
/// passed down; no component reads ambient defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Largest gap in minutes still counted as the same session.
    pub max_commit_diff_minutes: u32,
    /// Minutes credited for the first commit of each session.
    pub first_commit_add_minutes: u32,
    pub window: CommitWindow,
    pub include_merges: bool,
    /// Raw author email -> canonical email.
    pub aliases: HashMap<String, String>,
    pub branch: Option<String>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut aliases = HashMap::new();
        for raw in &cli.aliases {
            let (email, canonical) = parse_alias(raw)?;
            aliases.insert(email, canonical);
        }

        Ok(Self {
            max_commit_diff_minutes: cli.max_commit_diff,
            first_commit_add_minutes: cli.first_commit_add,
            window: CommitWindow {
                since: resolve_bound(&cli.since)?,
                until: resolve_bound(&cli.until)?,
            },
            include_merges: cli.include_merges,
            aliases,
            branch: cli.branch.clone(),
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_commit_diff_minutes: DEFAULT_MAX_COMMIT_DIFF_MINUTES,
            first_commit_add_minutes: DEFAULT_FIRST_COMMIT_ADD_MINUTES,
            window: CommitWindow::everything(),
            include_merges: false,
            aliases: HashMap::new(),
            branch: None,
        }
    }
}

/// Resolve a `--since`/`--until` argument to an instant or the open bound.
/// Accepts `always`, the shorthands `today`, `yesterday`, `lastweek`,
/// `lastmonth`, RFC3339, and `YYYY-MM-DD` (midnight UTC).
pub fn resolve_bound(input: &str) -> Result<Bound> {
    let trimmed = input.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "always" => return Ok(Bound::Always),
        "today" => return Ok(Bound::At(midnight(Utc::now().date_naive())?)),
        "yesterday" => {
            return Ok(Bound::At(midnight(
                Utc::now().date_naive() - Duration::days(1),
            )?))
        }
        "lastweek" => return Ok(Bound::At(Utc::now() - Duration::days(7))),
        "lastmonth" => return Ok(Bound::At(Utc::now() - Duration::days(30))),
        _ => {}
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Bound::At(dt.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Bound::At(midnight(date)?));
    }

    Err(HoursError::InvalidDate(format!(
        "'{trimmed}' is not a recognized date (expected RFC3339, YYYY-MM-DD, always, today, yesterday, lastweek, or lastmonth)"
    )))
}

fn midnight(date: NaiveDate) -> Result<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt))
        .ok_or_else(|| HoursError::InvalidDate(format!("No midnight for {date}")))
}

/// Parse one `--alias EMAIL=CANONICAL` argument.
pub fn parse_alias(input: &str) -> Result<(String, String)> {
    let (email, canonical) = input
        .split_once('=')
        .ok_or_else(|| HoursError::InvalidAlias(format!("'{input}' (expected EMAIL=CANONICAL)")))?;

    let email = email.trim();
    let canonical = canonical.trim();
    if email.is_empty() || canonical.is_empty() {
        return Err(HoursError::InvalidAlias(format!(
            "'{input}' has an empty side (expected EMAIL=CANONICAL)"
        )));
    }

    Ok((email.to_string(), canonical.to_string()))
}
