// File: crates/bench-render-skia/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and legend placement.

use bench_core::LegendLocation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self {
        skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
    }
}

/// Order in which corners are tried for `Best`; ties go to the earlier one.
pub const BEST_ORDER: [LegendLocation; 4] = [
    LegendLocation::UpperRight,
    LegendLocation::UpperLeft,
    LegendLocation::LowerLeft,
    LegendLocation::LowerRight,
];

/// Box of `w` x `h` placed in `corner` of `area`, `pad` pixels from the edges.
pub fn corner_rect(area: RectF, corner: LegendLocation, w: f32, h: f32, pad: f32) -> RectF {
    let left = area.left + pad;
    let right = area.right - pad - w;
    let top = area.top + pad;
    let bottom = area.bottom - pad - h;
    match corner {
        LegendLocation::UpperLeft => RectF::from_ltwh(left, top, w, h),
        LegendLocation::UpperRight | LegendLocation::Best => RectF::from_ltwh(right, top, w, h),
        LegendLocation::LowerLeft => RectF::from_ltwh(left, bottom, w, h),
        LegendLocation::LowerRight => RectF::from_ltwh(right, bottom, w, h),
    }
}

/// Resolve `Best` to the corner whose box covers the fewest `points`.
pub fn place_legend(area: RectF, location: LegendLocation, w: f32, h: f32, pad: f32, points: &[(f32, f32)]) -> RectF {
    if location != LegendLocation::Best {
        return corner_rect(area, location, w, h, pad);
    }
    let mut best = corner_rect(area, BEST_ORDER[0], w, h, pad);
    let mut best_hits = usize::MAX;
    for corner in BEST_ORDER {
        let r = corner_rect(area, corner, w, h, pad);
        let hits = points.iter().filter(|p| r.contains(**p)).count();
        if hits < best_hits {
            best = r;
            best_hits = hits;
        }
    }
    best
}

/// `n` evenly spaced samples along each segment of a polyline, endpoints included.
pub fn sample_polyline(points: &[(f32, f32)], n: usize) -> Vec<(f32, f32)> {
    let mut out = Vec::with_capacity(points.len() * (n + 1));
    if let Some(&first) = points.first() {
        out.push(first);
    }
    for w in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        for i in 1..=n.max(1) {
            let t = i as f32 / n.max(1) as f32;
            out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    out
}
