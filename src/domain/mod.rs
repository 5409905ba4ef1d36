//! Domain logic - pure release rules independent of where commits come from

pub mod commit;
pub mod context;
pub mod version;

pub use commit::{classify, CategoryCounts, ClassifiedCommit, CommitCategory};
pub use context::{resolve_scenario, BuildContext, Scenario};
pub use version::{Version, VersionBump};
