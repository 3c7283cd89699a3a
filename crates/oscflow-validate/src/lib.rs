//! Cross-validation for the oscflow pipeline.
//!
//! Two independent comparison modes:
//! - self-consistency: the recursive EMA chain against a library-form
//!   exponentially weighted mean in non-adjusted mode
//! - external reference: computed rows against caller-supplied expected
//!   values within absolute tolerances
//!
//! Both modes always run to completion and return a serializable report;
//! acting on a mismatch is the caller's decision.

pub mod consistency;
pub mod ewm;
pub mod reference;

pub use consistency::{check, ConsistencyReport, MetricDrift, SELF_CONSISTENCY_TOLERANCE};
pub use ewm::ewm_mean;
pub use reference::{
    compare, DateComparison, ExpectedRow, ExpectedValueTable, MetricComparison, ReferenceReport,
    ReferenceSummary, Tolerances,
};
