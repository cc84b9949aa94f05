use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;
use crate::git::{CommitWalk, GitRepo};
use crate::model::CommitRecord;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use super::{build_report, dedup_and_filter, group_by_author, output_json, output_table};

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(&cli).context("Failed to resolve run configuration")?;

    let repo = GitRepo::open(cli.repo.as_ref()).context("Failed to open git repository")?;
    let branches = repo
        .local_branches(config.branch.as_deref())
        .context("Failed to enumerate branch references")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    // Branch walks are read-only and independent, so they run in parallel
    // against a shared handle. Collecting into a single Result is the join
    // barrier: one failed walk fails the run, no partial report.
    let shared = repo.into_sync();
    let per_branch: Vec<Vec<CommitRecord>> = branches
        .par_iter()
        .map(|branch| -> Result<Vec<CommitRecord>> {
            pb.set_message(format!("Walking history of '{}'...", branch.name));
            let local = shared.to_thread_local();
            CommitWalk::new(&local, branch.head).collect()
        })
        .collect::<Result<Vec<_>>>()
        .context("Failed to walk branch history")?;
    pb.finish_and_clear();

    let commits = dedup_and_filter(per_branch, &config);
    let groups = group_by_author(&commits, &config.aliases);
    let report = build_report(&groups, &config, commits.len());

    if cli.json {
        output_json(&report)?;
    } else {
        output_table(&report)?;
    }

    Ok(())
}
