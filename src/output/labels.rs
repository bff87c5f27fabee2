//! Point annotation placement.
//!
//! Works in backend pixel coordinates: every label is tried above, below,
//! right of and left of its point, and the first position that overlaps
//! neither an already placed label nor a data marker wins. When all four
//! collide the label goes above the point anyway.

/// 픽셀 좌표의 사각형 (좌상단 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelBox {
    pub fn overlaps(&self, other: &PixelBox) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Offsets tried for a label of size `(w, h)`, relative to its anchor.
fn candidate_offsets(w: i32, h: i32, gap: i32) -> [(i32, i32); 4] {
    [
        (-w / 2, -h - gap), // above
        (-w / 2, gap),      // below
        (gap, -h / 2),      // right
        (-w - gap, -h / 2), // left
    ]
}

/// Pick a text offset for every anchor.
///
/// `anchors` are pixel positions of the data points, `sizes` the rendered
/// text sizes in the same order, `marker_radius` the half size of the point
/// markers. Returned offsets are relative to the anchor, pointing at the
/// top-left corner of the text.
pub fn declutter(
    anchors: &[(i32, i32)],
    sizes: &[(u32, u32)],
    marker_radius: i32,
    gap: i32,
) -> Vec<(i32, i32)> {
    let markers: Vec<PixelBox> = anchors
        .iter()
        .map(|&(x, y)| PixelBox {
            x: x - marker_radius,
            y: y - marker_radius,
            w: marker_radius * 2,
            h: marker_radius * 2,
        })
        .collect();

    let mut placed: Vec<PixelBox> = Vec::with_capacity(anchors.len());
    let mut offsets = Vec::with_capacity(anchors.len());

    for (&(ax, ay), &(w, h)) in anchors.iter().zip(sizes) {
        let (w, h) = (w as i32, h as i32);
        let candidates = candidate_offsets(w, h, gap);

        let chosen = candidates
            .iter()
            .copied()
            .find(|&(dx, dy)| {
                let label = PixelBox {
                    x: ax + dx,
                    y: ay + dy,
                    w,
                    h,
                };
                !placed.iter().any(|b| b.overlaps(&label))
                    && !markers.iter().any(|m| m.overlaps(&label))
            })
            .unwrap_or(candidates[0]);

        placed.push(PixelBox {
            x: ax + chosen.0,
            y: ay + chosen.1,
            w,
            h,
        });
        offsets.push(chosen);
    }

    offsets
}
