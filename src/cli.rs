use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "githours")]
#[command(about = "Estimate developer working hours from a git repository's commit history")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Restrict the estimate to a single branch")]
    pub branch: Option<String>,

    #[arg(
        long,
        default_value = "always",
        help = "Count commits strictly after this instant (RFC3339, YYYY-MM-DD, always, today, yesterday, lastweek, lastmonth)"
    )]
    pub since: String,

    #[arg(
        long,
        default_value = "always",
        help = "Count commits strictly before this instant (same formats as --since)"
    )]
    pub until: String,

    #[arg(
        long,
        default_value_t = crate::config::DEFAULT_MAX_COMMIT_DIFF_MINUTES,
        help = "Largest gap in minutes between commits of one session"
    )]
    pub max_commit_diff: u32,

    #[arg(
        long,
        default_value_t = crate::config::DEFAULT_FIRST_COMMIT_ADD_MINUTES,
        help = "Minutes credited for the first commit of a session"
    )]
    pub first_commit_add: u32,

    #[arg(long, help = "Include merge commits", default_value_t = false)]
    pub include_merges: bool,

    #[arg(
        long = "alias",
        value_name = "EMAIL=CANONICAL",
        help = "Fold a raw author email into a canonical one (repeatable)"
    )]
    pub aliases: Vec<String>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::hours::exec(self)
    }
}
