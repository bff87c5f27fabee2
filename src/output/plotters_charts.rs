use crate::log_info;
use crate::models::{BenchmarkRow, ModeChart};
use crate::output::labels::declutter;
use crate::processors::{build_mode_charts, MixedLabel};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Plotters 차트 생성을 위한 공통 구조체
#[derive(Debug, Clone)]
pub struct PlottersConfig {
    pub width: u32,
    pub height: u32,
    pub font_family: &'static str,
    pub title_font_size: u32,
    pub axis_label_font_size: u32,
    pub tick_label_font_size: u32,
    pub legend_font_size: u32,
    pub annotation_font_size: u32,
    pub point_size: u32,
    pub line_width: u32,
    /// 각 포인트에 ops 값을 표시
    pub annotate: bool,
}

impl Default for PlottersConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            font_family: "sans-serif",
            title_font_size: 26,
            axis_label_font_size: 18,
            tick_label_font_size: 14,
            legend_font_size: 14,
            annotation_font_size: 12,
            point_size: 4,
            line_width: 2,
            annotate: false,
        }
    }
}

/// 데이터 범위에 패딩을 추가하는 함수
pub fn add_padding_to_range(min: f64, max: f64, padding_percent: f64) -> (f64, f64) {
    let range = max - min;
    if range <= 0.0 {
        // 값이 하나뿐이면 그 주변으로 범위를 만듦
        let pad = if min == 0.0 { 1.0 } else { min.abs() * padding_percent.max(0.1) };
        return (min - pad, max + pad);
    }
    let padding = range * padding_percent;
    (min - padding, max + padding)
}

/// `<mode>.png`, or `<prefix>_<mode>.png` when a prefix is given.
pub fn chart_file_name(prefix: Option<&str>, mode: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}_{mode}.png"),
        None => format!("{mode}.png"),
    }
}

/// Base name of the input file without its extension.
pub fn chart_prefix(input: &Path) -> Option<String> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn format_ops(ops: f64) -> String {
    if ops.fract() == 0.0 {
        format!("{ops:.0}")
    } else {
        format!("{ops:.2}")
    }
}

/// Draw one mode chart (OPS vs. threads, one line per key/value size) to a PNG.
pub fn render_mode_chart(
    mode_chart: &ModeChart,
    png_path: &Path,
    config: &PlottersConfig,
) -> Result<(), Box<dyn Error>> {
    if mode_chart.point_count() == 0 {
        return Err(format!("No data points for mode '{}'", mode_chart.mode).into());
    }

    // X축과 Y축의 범위를 계산
    let mut min_threads = f64::MAX;
    let mut max_threads = f64::MIN;
    let mut min_ops = f64::MAX;
    let mut max_ops = f64::MIN;

    for series in &mode_chart.series {
        for &(threads, ops) in &series.points {
            min_threads = min_threads.min(threads as f64);
            max_threads = max_threads.max(threads as f64);
            min_ops = min_ops.min(ops);
            max_ops = max_ops.max(ops);
        }
    }

    let (min_threads, max_threads) = add_padding_to_range(min_threads, max_threads, 0.05);
    let (min_ops, max_ops) = add_padding_to_range(min_ops, max_ops, 0.05);
    let min_ops = min_ops.max(0.0);

    let root = BitMapBackend::new(png_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &mode_chart.title,
            (config.font_family, config.title_font_size).into_font(),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(min_threads..max_threads, min_ops..max_ops)?;

    chart
        .configure_mesh()
        .x_desc("Threads")
        .y_desc("OPS")
        .axis_desc_style((config.font_family, config.axis_label_font_size))
        .label_style((config.font_family, config.tick_label_font_size))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    for (idx, series) in mode_chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        let style = color.stroke_width(config.line_width);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|&(threads, ops)| (threads as f64, ops))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), style))?
            .label(series.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        // 마커
        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, config.point_size, color.filled())),
        )?;
    }

    if config.annotate {
        draw_ops_annotations(&root, &mut chart, mode_chart, config)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((config.font_family, config.legend_font_size))
        .draw()?;

    root.present()?;
    Ok(())
}

/// 각 포인트 옆에 ops 값을 겹치지 않게 표시
fn draw_ops_annotations<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    mode_chart: &ModeChart,
    config: &PlottersConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = TextStyle::from((config.font_family, config.annotation_font_size).into_font());

    let mut anchors = Vec::with_capacity(mode_chart.point_count());
    let mut texts = Vec::with_capacity(mode_chart.point_count());
    for series in &mode_chart.series {
        for &(threads, ops) in &series.points {
            anchors.push((threads as f64, ops));
            texts.push(format_ops(ops));
        }
    }

    let pixel_anchors: Vec<(i32, i32)> = anchors.iter().map(|p| chart.backend_coord(p)).collect();
    let mut sizes = Vec::with_capacity(texts.len());
    for text in &texts {
        sizes.push(root.estimate_text_size(text, &style)?);
    }

    let offsets = declutter(&pixel_anchors, &sizes, config.point_size as i32, 4);

    chart.draw_series(
        anchors
            .into_iter()
            .zip(texts)
            .zip(offsets)
            .map(|((anchor, text), offset)| {
                EmptyElement::at(anchor) + Text::new(text, offset, style.clone())
            }),
    )?;

    Ok(())
}

/// Render one PNG per mode into `out_dir` and return the written paths.
pub fn generate_bench_charts(
    rows: &[BenchmarkRow],
    out_dir: &Path,
    prefix: Option<&str>,
    mixed_label: MixedLabel,
    config: &PlottersConfig,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let charts = build_mode_charts(rows, mixed_label);
    log_info!("Found {} modes in {} rows", charts.len(), rows.len());

    let mut written = Vec::with_capacity(charts.len());
    for mode_chart in &charts {
        let png_path = out_dir.join(chart_file_name(prefix, &mode_chart.mode));
        render_mode_chart(mode_chart, &png_path, config)
            .map_err(|e| format!("Error generating chart for mode '{}': {e}", mode_chart.mode))?;
        log_info!(
            "{} chart ({} series) saved to: {}",
            mode_chart.mode,
            mode_chart.series.len(),
            png_path.display()
        );
        written.push(png_path);
    }

    Ok(written)
}
