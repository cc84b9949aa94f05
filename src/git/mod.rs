pub mod repo;
pub mod walk;

pub use repo::GitRepo;
pub use walk::CommitWalk;
