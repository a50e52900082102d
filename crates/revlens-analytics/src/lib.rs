//! Aggregation and reporting over annotated review rows.
//!
//! Pure functions only: week-bucketed and brand-bucketed label counts,
//! the KPI summary, and the fixed managerial recommendations. Absent
//! optional columns degrade to explicit "no data" variants rather than
//! errors.

pub mod aggregate;
pub mod insights;

pub use aggregate::{
    brand_comparison, sentiment_over_time, BrandBucketCount, BrandComparison, TimeSeries,
    WeekBucketCount,
};
pub use insights::{compute_kpis, recommendations, Kpis};
