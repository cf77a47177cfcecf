use super::model::CityCostTable;

// ---------------------------------------------------------------------------
// CostRange – closed interval on the derived total cost
// ---------------------------------------------------------------------------

/// Inclusive range `[lo, hi]` selected with the cost slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRange {
    pub lo: f64,
    pub hi: f64,
}

impl CostRange {
    /// Build a range, swapping the endpoints if they arrive out of order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Move one end to `value`, clamped to `bounds`. Dragging an end past
    /// the other pushes the other one along.
    pub fn drag(&self, handle: Handle, value: f64, bounds: &CostRange) -> Self {
        let value = value.clamp(bounds.lo, bounds.hi);
        match handle {
            Handle::Min => Self {
                lo: value,
                hi: self.hi.max(value),
            },
            Handle::Max => Self {
                lo: self.lo.min(value),
                hi: value,
            },
        }
    }
}

/// The end of a [`CostRange`] moved by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Indices of records whose total student cost lies in `range`, in source
/// order. An empty result is a valid view, not an error.
pub fn filtered_indices(table: &CityCostTable, range: &CostRange) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| range.contains(r.total_student_cost))
        .map(|(i, _)| i)
        .collect()
}
