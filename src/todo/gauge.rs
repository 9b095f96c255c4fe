//! Gauge Arithmetic
//!
//! Segmented gauges (rest bonus) and the cube ticket counter. Components stay
//! stateless; they render from these numbers and forward clicks.

/// Layout of a segmented gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeSpec {
    pub cells: usize,
    pub cell_size: i32,
}

impl GaugeSpec {
    pub fn max(&self) -> i32 {
        self.cells as i32 * self.cell_size
    }
}

/// Rest bonus gauge: 10 cells of 10 points
pub const REST_GAUGE: GaugeSpec = GaugeSpec { cells: 10, cell_size: 10 };

pub const MAX_CUBE_TICKETS: i32 = 99;

/// Cells with `(index + 1) * cell_size <= value`
pub fn filled_cells(value: i32, spec: GaugeSpec) -> usize {
    (0..spec.cells)
        .filter(|&index| (index as i32 + 1) * spec.cell_size <= value)
        .count()
}

/// Value after clicking cell `index`.
/// Clicking the last filled cell empties it, any other cell fills up to it.
pub fn value_for_click(current: i32, index: usize, spec: GaugeSpec) -> i32 {
    let index = index.min(spec.cells.saturating_sub(1));
    if filled_cells(current, spec) == index + 1 {
        index as i32 * spec.cell_size
    } else {
        (index as i32 + 1) * spec.cell_size
    }
}

/// Bounded counter for cube tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeCounter(pub i32);

impl CubeCounter {
    pub fn increment(self) -> Self {
        CubeCounter((self.0 + 1).min(MAX_CUBE_TICKETS))
    }

    pub fn decrement(self) -> Self {
        CubeCounter((self.0 - 1).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_cell_is_not_filled() {
        assert_eq!(filled_cells(35, REST_GAUGE), 3);
        assert_eq!(filled_cells(9, REST_GAUGE), 0);
        assert_eq!(filled_cells(100, REST_GAUGE), 10);
        assert_eq!(filled_cells(250, REST_GAUGE), 10);
    }

    #[test]
    fn test_click_fills_up_to_cell() {
        assert_eq!(value_for_click(0, 4, REST_GAUGE), 50);
        assert_eq!(value_for_click(80, 1, REST_GAUGE), 20);
    }

    #[test]
    fn test_click_on_last_filled_cell_empties_it() {
        assert_eq!(value_for_click(30, 2, REST_GAUGE), 20);
        assert_eq!(value_for_click(10, 0, REST_GAUGE), 0);
    }

    #[test]
    fn test_cube_counter_bounds() {
        assert_eq!(CubeCounter(0).decrement(), CubeCounter(0));
        assert_eq!(CubeCounter(MAX_CUBE_TICKETS).increment(), CubeCounter(MAX_CUBE_TICKETS));
        assert_eq!(CubeCounter(3).increment(), CubeCounter(4));
        assert_eq!(REST_GAUGE.max(), 100);
    }
}
