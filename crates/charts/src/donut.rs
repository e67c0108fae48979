use crate::error::ChartError;
use crate::palette::color_key_for;
use core_types::{AllocationSlice, ArcDescriptor};
use std::f64::consts::PI;

/// Rotation applied once to the whole arc set so the first arc starts at 12 o'clock.
pub const ANCHOR_ROTATION_DEG: f64 = -90.0;

/// Tolerance used when deciding whether slice percents add up to a full circle.
const FULL_CIRCLE_TOLERANCE: f64 = 1e-9;

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Lays out consecutive donut arcs for an ordered set of slices.
///
/// Each arc starts where the previous one ended: its `rotation_offset` is the
/// negated length of everything before it. The slices are not normalised, so a
/// set that does not add up to 100 leaves a gap (or overlaps itself) on
/// purpose. An empty slice set yields no arcs.
pub fn layout_donut(slices: &[AllocationSlice], radius: f64) -> Vec<ArcDescriptor> {
    let circumference = circumference(radius);
    let mut cumulative = 0.0;

    let total: f64 = slices.iter().map(|slice| slice.percent).sum();
    if !slices.is_empty() && (total - 100.0).abs() > FULL_CIRCLE_TOLERANCE * 100.0 {
        tracing::debug!(total, "Slice percents do not sum to 100; the donut will not close.");
    }

    slices
        .iter()
        .map(|slice| {
            let arc_length = slice.percent / 100.0 * circumference;
            let arc = ArcDescriptor {
                label: slice.label.clone(),
                percent: slice.percent,
                arc_length,
                // `0.0 - x` keeps the first offset at +0.0 rather than -0.0.
                rotation_offset: 0.0 - cumulative,
                color: color_key_for(&slice.label),
            };
            cumulative += arc_length;
            arc
        })
        .collect()
}

/// A donut of a fixed, validated radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutLayout {
    radius: f64,
}

impl DonutLayout {
    pub fn new(radius: f64) -> Result<Self, ChartError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn circumference(&self) -> f64 {
        circumference(self.radius)
    }

    pub fn anchor_rotation(&self) -> f64 {
        ANCHOR_ROTATION_DEG
    }

    /// Checks every slice is a finite percent in `0..=100`.
    ///
    /// Only individual slices are checked; the total is allowed to differ from 100.
    pub fn validate(&self, slices: &[AllocationSlice]) -> Result<(), ChartError> {
        match slices
            .iter()
            .find(|slice| !slice.percent.is_finite() || !(0.0..=100.0).contains(&slice.percent))
        {
            Some(slice) => Err(ChartError::InvalidPercent {
                label: slice.label.clone(),
                percent: slice.percent,
            }),
            None => Ok(()),
        }
    }

    pub fn layout(&self, slices: &[AllocationSlice]) -> Result<Vec<ArcDescriptor>, ChartError> {
        self.validate(slices)?;
        Ok(layout_donut(slices, self.radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ColorKey;

    #[test]
    fn radius_must_be_positive_and_finite() {
        assert!(DonutLayout::new(80.0).is_ok());
        assert_eq!(DonutLayout::new(0.0).unwrap_err(), ChartError::InvalidRadius(0.0));
        assert!(DonutLayout::new(-3.0).is_err());
        assert!(DonutLayout::new(f64::NAN).is_err());
    }

    #[test]
    fn out_of_range_percent_is_rejected_by_name() {
        let layout = DonutLayout::new(70.0).unwrap();
        let slices = [AllocationSlice::new("Equity", 60.0), AllocationSlice::new("Debt", 140.0)];
        let err = layout.layout(&slices).unwrap_err();
        assert_eq!(
            err,
            ChartError::InvalidPercent { label: "Debt".to_string(), percent: 140.0 }
        );
    }

    #[test]
    fn first_arc_has_no_offset() {
        let arcs = layout_donut(&[AllocationSlice::new("Equity", 25.0)], 10.0);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].rotation_offset, 0.0);
        assert_eq!(arcs[0].color, ColorKey::Equity);
    }

    #[test]
    fn zero_percent_slice_keeps_its_place() {
        let slices = [
            AllocationSlice::new("Equity", 70.0),
            AllocationSlice::new("Hybrid", 0.0),
            AllocationSlice::new("Debt", 30.0),
        ];
        let arcs = layout_donut(&slices, 70.0);
        assert_eq!(arcs[1].arc_length, 0.0);
        assert_eq!(arcs[1].rotation_offset, arcs[2].rotation_offset);
    }
}
