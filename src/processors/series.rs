use crate::models::{BenchmarkRow, ModeChart, Series};
use crate::utils::constants::DEFAULT_MIXED_WRITE_RATIO;
use std::collections::BTreeMap;
use std::str::FromStr;

/// How the `mixed` mode is named in chart titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MixedLabel {
    /// 모든 mode를 대문자로 표시
    #[default]
    Plain,
    /// "70% read / 30% write"
    ReadWrite,
    /// "70% Get / 30% Put"
    GetPut,
}

impl FromStr for MixedLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(MixedLabel::Plain),
            "rw" => Ok(MixedLabel::ReadWrite),
            "getput" => Ok(MixedLabel::GetPut),
            _ => Err(format!(
                "Invalid mixed label style '{}'. Expected one of: plain, rw, getput",
                s
            )),
        }
    }
}

/// Title text for a mode. `ratio` is the write percentage of a mixed run.
pub fn mode_display_name(mode: &str, style: MixedLabel, ratio: Option<u8>) -> String {
    if mode == "mixed" {
        let write = ratio.unwrap_or(DEFAULT_MIXED_WRITE_RATIO).min(100);
        let read = 100 - write;
        match style {
            MixedLabel::ReadWrite => return format!("{read}% read / {write}% write"),
            MixedLabel::GetPut => return format!("{read}% Get / {write}% Put"),
            MixedLabel::Plain => {}
        }
    }
    mode.to_uppercase()
}

/// Distinct modes in first-occurrence order.
pub fn distinct_modes(rows: &[BenchmarkRow]) -> Vec<String> {
    let mut modes: Vec<String> = Vec::new();
    for row in rows {
        if !modes.iter().any(|m| m == &row.mode) {
            modes.push(row.mode.clone());
        }
    }
    modes
}

/// mode에 속한 행들을 (key_size, value_size) 별로 묶음
///
/// Groups come out in ascending `(key_size, value_size)` order; points keep
/// the order of the table.
pub fn group_series(rows: &[BenchmarkRow], mode: &str) -> Vec<Series> {
    let mut groups: BTreeMap<(u64, u64), Vec<(u64, f64)>> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.mode == mode) {
        groups
            .entry((row.key_size, row.value_size))
            .or_default()
            .push((row.threads, row.ops));
    }

    groups
        .into_iter()
        .map(|((key_size, value_size), points)| Series {
            key_size,
            value_size,
            points,
        })
        .collect()
}

/// One chart description per mode.
pub fn build_mode_charts(rows: &[BenchmarkRow], style: MixedLabel) -> Vec<ModeChart> {
    distinct_modes(rows)
        .into_iter()
        .map(|mode| {
            let ratio = rows
                .iter()
                .filter(|r| r.mode == mode)
                .find_map(|r| r.ratio);
            let title = format!("Performance: {}", mode_display_name(&mode, style, ratio));
            let series = group_series(rows, &mode);
            ModeChart {
                mode,
                title,
                series,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(mode: &str, key_size: u64, value_size: u64, threads: u64, ops: f64) -> BenchmarkRow {
        BenchmarkRow {
            mode: mode.to_string(),
            key_size,
            value_size,
            threads,
            ops,
            ratio: None,
        }
    }

    #[test]
    fn test_single_series_keeps_points_in_order() {
        let rows = vec![
            row("get", 16, 64, 1, 100.0),
            row("get", 16, 64, 2, 190.0),
            row("get", 16, 64, 4, 350.0),
        ];
        let series = group_series(&rows, "get");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![(1, 100.0), (2, 190.0), (4, 350.0)]);
        assert_eq!(series[0].label(), "key=16B, val=64B");
    }

    #[test]
    fn test_groups_sorted_by_key_then_value() {
        let rows = vec![
            row("put", 32, 64, 1, 1.0),
            row("put", 16, 1024, 1, 2.0),
            row("put", 16, 64, 1, 3.0),
            row("put", 32, 64, 2, 4.0),
        ];
        let series = group_series(&rows, "put");
        let keys: Vec<(u64, u64)> = series.iter().map(|s| (s.key_size, s.value_size)).collect();
        assert_eq!(keys, vec![(16, 64), (16, 1024), (32, 64)]);
        assert_eq!(series[2].points, vec![(1, 1.0), (2, 4.0)]);
    }

    #[test]
    fn test_modes_do_not_mix() {
        let rows = vec![
            row("put", 16, 64, 1, 10.0),
            row("get", 16, 64, 1, 20.0),
            row("put", 16, 64, 2, 30.0),
        ];
        assert_eq!(distinct_modes(&rows), vec!["put", "get"]);

        let charts = build_mode_charts(&rows, MixedLabel::Plain);
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].mode, "put");
        assert_eq!(charts[0].point_count(), 2);
        assert_eq!(charts[1].series[0].points, vec![(1, 20.0)]);
        assert_eq!(charts[1].title, "Performance: GET");
    }

    #[test]
    fn test_mode_display_names() {
        assert_eq!(mode_display_name("mixed", MixedLabel::Plain, None), "MIXED");
        assert_eq!(
            mode_display_name("mixed", MixedLabel::ReadWrite, None),
            "70% read / 30% write"
        );
        assert_eq!(
            mode_display_name("mixed", MixedLabel::GetPut, None),
            "70% Get / 30% Put"
        );
        assert_eq!(
            mode_display_name("mixed", MixedLabel::GetPut, Some(20)),
            "80% Get / 20% Put"
        );
        assert_eq!(mode_display_name("scan", MixedLabel::GetPut, None), "SCAN");
    }

    #[test]
    fn test_mixed_title_uses_ratio_column() {
        let mut rows = vec![row("mixed", 16, 64, 1, 5.0)];
        rows[0].ratio = Some(10);
        let charts = build_mode_charts(&rows, MixedLabel::ReadWrite);
        assert_eq!(charts[0].title, "Performance: 90% read / 10% write");
    }

    #[test]
    fn test_parse_mixed_label() {
        assert_eq!("rw".parse::<MixedLabel>().unwrap(), MixedLabel::ReadWrite);
        assert_eq!("getput".parse::<MixedLabel>().unwrap(), MixedLabel::GetPut);
        assert_eq!("plain".parse::<MixedLabel>().unwrap(), MixedLabel::Plain);
        assert!("fancy".parse::<MixedLabel>().is_err());
    }
}
