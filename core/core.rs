pub mod aggregate;
pub mod classify;
pub mod error;
pub mod ignore_rules;
pub mod report;
pub mod traverse;

pub use aggregate::{STATIC_DIR_NAME, run};
pub use classify::{FileClassification, classify, flatten_static_name};
pub use error::{AppError, Result};
pub use ignore_rules::IgnoreRuleSet;
pub use report::{FailedFile, ProcessResult, StaticFileCopy};
