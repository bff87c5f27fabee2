pub mod alloc;
pub mod series;

pub use alloc::{analyze_alloc_log, sort_by_alloc, sort_by_free, summarize, AllocTotals};
pub use series::{build_mode_charts, distinct_modes, group_series, mode_display_name, MixedLabel};
