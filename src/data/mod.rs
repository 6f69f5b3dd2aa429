//! Measurement inputs and the statistics derived from them.
//!
//! ## Submodules
//!
//! - [`duration`]: Request timeouts written as "15s" or "500ms"
//! - [`samples`]: Sample records, measurement windows and WIMA/Baseline pairing
//! - [`stats`]: Mean, standard deviation, normal CDF and boxplot geometry
//! - [`summary`]: The run summary and the connection-count sweep it drives
//!
//! ## Data Flow
//!
//! ```text
//! summary.csv ──▶ RunSummary::sweep() ──────────────┐
//!                                                   ├──▶ (connections, Paired<_>)
//! latency.raw ──▶ load_sample_sets() ──▶ pairs() ───┘
//! ```

pub mod duration;
pub mod samples;
pub mod stats;
pub mod summary;

pub use samples::{pairs, Condition, Paired};
pub use stats::{BoxStats, SeriesSummary};
pub use summary::{ConnectionSweep, RunSummary};
