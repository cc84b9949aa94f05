use crate::error::{HoursError, Result};
use crate::model::BranchRef;
use gix::{discover, Repository, ThreadSafeRepository};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`.
    ///
    /// Shallow clones are rejected here, before any traversal: their
    /// truncated history would undercount every author.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        if repo.is_shallow() {
            return Err(HoursError::ShallowClone(path));
        }

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All local branch heads, or just the named one when `filter` is given.
    /// A requested branch that does not exist is an error rather than an
    /// empty result, so a typo cannot masquerade as a zero-hour report.
    pub fn local_branches(&self, filter: Option<&str>) -> Result<Vec<BranchRef>> {
        if let Some(name) = filter {
            let mut reference = self.repo.find_reference(name).map_err(|err| match err {
                gix::reference::find::existing::Error::NotFound { .. } => {
                    HoursError::BranchNotFound(name.to_string())
                }
                other => HoursError::Reference(other.to_string()),
            })?;
            let head = peel(&mut reference, name)?;
            return Ok(vec![BranchRef {
                name: name.to_string(),
                head,
            }]);
        }

        let platform = self
            .repo
            .references()
            .map_err(|e| HoursError::Reference(e.to_string()))?;

        let mut branches = Vec::new();
        for reference in platform
            .local_branches()
            .map_err(|e| HoursError::Reference(e.to_string()))?
        {
            let mut reference = reference.map_err(|e| HoursError::Reference(e.to_string()))?;
            let name = reference.name().shorten().to_string();
            let head = peel(&mut reference, &name)?;
            branches.push(BranchRef { name, head });
        }

        Ok(branches)
    }

    /// Hand the repository over for sharing across branch-walk tasks.
    pub fn into_sync(self) -> ThreadSafeRepository {
        self.repo.into_sync()
    }
}

fn peel(reference: &mut gix::Reference<'_>, name: &str) -> Result<gix::ObjectId> {
    Ok(reference
        .peel_to_id_in_place()
        .map_err(|e| HoursError::Reference(format!("Failed to peel '{name}' to a commit: {e}")))?
        .detach())
}
