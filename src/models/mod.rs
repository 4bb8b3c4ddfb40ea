pub mod app_state;
pub mod params;
pub mod report;
pub mod result;

pub use app_state::AppState;
pub use params::AuditParams;
pub use report::{ApiError, Audit, AuditRef, AuditReport, Category, PagespeedEnvelope};
pub use result::{CategoryScore, IssueGroup, Metric, NormalizedResult};
