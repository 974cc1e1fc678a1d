//! Report density grid.
//!
//! Reports are binned into 0.01 degree cells (about 1 km) by truncating
//! `coordinate * 100` toward zero. Cells holding at least `min_count`
//! reports are returned as density hotspots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::GeoPoint;

pub const CELLS_PER_DEGREE: f64 = 100.0;
pub const DEFAULT_MIN_REPORTS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub lat_bin: i64,
    pub lon_bin: i64,
}

impl GridCell {
    /// Cell holding `point`, or `None` for non-finite coordinates.
    pub fn containing(point: &GeoPoint) -> Option<Self> {
        if !point.latitude.is_finite() || !point.longitude.is_finite() {
            return None;
        }
        Some(Self {
            lat_bin: (point.latitude * CELLS_PER_DEGREE) as i64,
            lon_bin: (point.longitude * CELLS_PER_DEGREE) as i64,
        })
    }

    /// Cell corner nearest the origin, where the hotspot is plotted.
    pub fn anchor(&self) -> GeoPoint {
        GeoPoint::new(
            self.lat_bin as f64 / CELLS_PER_DEGREE,
            self.lon_bin as f64 / CELLS_PER_DEGREE,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityHotspot {
    pub cell: GridCell,
    pub anchor: GeoPoint,
    pub count: usize,
}

/// Count reports per grid cell and keep cells with `count >= min_count`.
///
/// Ordered by count descending, then by cell.
pub fn density_hotspots<'a, I>(points: I, min_count: usize) -> Vec<DensityHotspot>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    let mut counts: HashMap<GridCell, usize> = HashMap::new();
    for cell in points.into_iter().filter_map(GridCell::containing) {
        *counts.entry(cell).or_default() += 1;
    }

    let mut hotspots: Vec<DensityHotspot> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .map(|(cell, count)| DensityHotspot {
            cell,
            anchor: cell.anchor(),
            count,
        })
        .collect();
    hotspots.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cell.cmp(&b.cell)));
    hotspots
}
