//! Footprint-averaged marker values.

use continuum_field::{lattice_mean, NormalizedPoint};

use crate::grid::MetricGrid;
use crate::marker::{Footprint, Marker};

/// Mean of the interpolated field over the marker footprint (5 x 5 samples),
/// `None` while the marker is unplaced.
pub fn value_for(marker: &Marker, grid: &MetricGrid) -> Option<f64> {
    let rect = marker.rect()?;
    Some(lattice_mean(rect, |p| grid.sample(p)))
}

/// Everything an overlay needs to draw one placed marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerReadout {
    /// Marker id
    pub id: String,
    /// Marker name
    pub name: String,
    /// Center in normalized space
    pub center: NormalizedPoint,
    /// Footprint
    pub footprint: Footprint,
    /// Footprint-averaged metric value
    pub value: f64,
}

/// Readouts for every placed marker, in list order.
pub fn readouts<'a, I>(markers: I, grid: &MetricGrid) -> Vec<MarkerReadout>
where
    I: IntoIterator<Item = &'a Marker>,
{
    markers
        .into_iter()
        .filter_map(|m| {
            let center = m.center?;
            let value = value_for(m, grid)?;
            Some(MarkerReadout {
                id: m.id.clone(),
                name: m.name.clone(),
                center,
                footprint: m.footprint,
                value,
            })
        })
        .collect()
}
