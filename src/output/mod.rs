mod dump;
pub mod labels;
pub mod plotters_charts;

pub use dump::{format_record, write_records};
pub use plotters_charts::{chart_file_name, generate_bench_charts, render_mode_chart, PlottersConfig};
