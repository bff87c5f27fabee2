/// 한 mode 안에서 (key_size, value_size) 조합 하나에 해당하는 라인
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key_size: u64,
    pub value_size: u64,
    /// (threads, ops), in table order
    pub points: Vec<(u64, f64)>,
}

impl Series {
    pub fn label(&self) -> String {
        format!("key={}B, val={}B", self.key_size, self.value_size)
    }
}

/// Everything needed to draw the chart of one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeChart {
    pub mode: String,
    pub title: String,
    pub series: Vec<Series>,
}

impl ModeChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
