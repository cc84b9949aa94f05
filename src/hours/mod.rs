pub mod estimate;
pub mod exec;
pub mod group;
pub mod output;
pub mod report;

pub use estimate::estimate_hours;
pub use exec::exec;
pub use group::{dedup_and_filter, group_by_author, AuthorGroup};
pub use output::{output_json, output_table};
pub use report::{build_report, AuthorWork, Report};
