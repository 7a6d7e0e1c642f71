const CELLS_ACROSS: f64 = 20.0;
const MIN_CELL_SIZE: f64 = 30.0;
const MAX_CELL_SIZE: f64 = 50.0;

pub const REST_RADIUS: f64 = 1.0;
pub const REST_ALPHA: f64 = 0.1;
const PULSE_PEAK_RADIUS: f64 = 3.0;
const PULSE_STEP: f64 = 0.1;
const PULSE_ALPHA_GAIN: f64 = 0.2;

const LINE_CUTOFF: f64 = 0.7;
const NEIGHBOR_CUTOFF: f64 = 0.5;
const PULSE_CUTOFF: f64 = 0.95;

pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pulse {
    Idle,
    Growing,
    Shrinking,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    pulse: Pulse,
}

impl Dot {
    fn at_rest(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: REST_RADIUS,
            alpha: REST_ALPHA,
            pulse: Pulse::Idle,
        }
    }

    fn step_pulse(&mut self) {
        match self.pulse {
            Pulse::Idle => {}
            Pulse::Growing => {
                self.size += PULSE_STEP;
                if self.size >= PULSE_PEAK_RADIUS {
                    self.size = PULSE_PEAK_RADIUS;
                    self.pulse = Pulse::Shrinking;
                }
                self.alpha = alpha_for_radius(self.size);
            }
            Pulse::Shrinking => {
                self.size -= PULSE_STEP;
                if self.size <= REST_RADIUS {
                    self.size = REST_RADIUS;
                    self.alpha = REST_ALPHA;
                    self.pulse = Pulse::Idle;
                } else {
                    self.alpha = alpha_for_radius(self.size);
                }
            }
        }
    }
}

fn alpha_for_radius(size: f64) -> f64 {
    REST_ALPHA + (size - REST_RADIUS) / (PULSE_PEAK_RADIUS - REST_RADIUS) * PULSE_ALPHA_GAIN
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

pub fn cell_size(viewport_width: f64) -> f64 {
    (viewport_width / CELLS_ACROSS).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn cells_along(length: f64, cell: f64) -> usize {
    if length.is_finite() && length > 0.0 {
        (length / cell).ceil() as usize
    } else {
        0
    }
}

/// Dots stored column by column; `(col, row)` sits at `col * cell, row * cell`.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    dots: Vec<Dot>,
}

impl Grid {
    pub fn new(width: f64, height: f64) -> Self {
        let cell = cell_size(width);
        let cols = cells_along(width, cell);
        let rows = cells_along(height, cell);

        let dots = (0..cols)
            .flat_map(|col| (0..rows).map(move |row| Dot::at_rest(col as f64 * cell, row as f64 * cell)))
            .collect();

        Self { cols, rows, dots }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then_some(col * self.rows + row)
    }

    /// Starts a pulse on an idle dot. Returns false for busy or unknown dots.
    pub fn start_pulse(&mut self, col: usize, row: usize) -> bool {
        let Some(index) = self.index(col, row) else {
            return false;
        };
        let dot = &mut self.dots[index];
        if dot.pulse != Pulse::Idle {
            return false;
        }
        dot.pulse = Pulse::Growing;
        dot.step_pulse();
        true
    }

    pub fn advance(&mut self, random: &mut impl RandomSource) -> Vec<Segment> {
        for dot in self.dots.iter_mut() {
            dot.step_pulse();
        }

        let mut segments = Vec::new();
        for col in 0..self.cols.saturating_sub(1) {
            for row in 0..self.rows.saturating_sub(1) {
                if random.next_f64() <= LINE_CUTOFF {
                    continue;
                }
                let dot = &self.dots[col * self.rows + row];
                let right = &self.dots[(col + 1) * self.rows + row];
                let below = &self.dots[col * self.rows + row + 1];

                let x = if random.next_f64() > NEIGHBOR_CUTOFF { right.x } else { below.x };
                let y = if random.next_f64() > NEIGHBOR_CUTOFF { right.y } else { below.y };
                segments.push(Segment {
                    from: (dot.x, dot.y),
                    to: (x, y),
                });
            }
        }

        if !self.dots.is_empty() && random.next_f64() > PULSE_CUTOFF {
            let col = pick_index(random.next_f64(), self.cols);
            let row = pick_index(random.next_f64(), self.rows);
            self.start_pulse(col, row);
        }

        segments
    }
}

fn pick_index(sample: f64, len: usize) -> usize {
    ((sample * len as f64).floor() as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
impl Dot {
    fn pulse(&self) -> Pulse {
        self.pulse
    }
}

#[cfg(test)]
impl Grid {
    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn dot(&self, col: usize, row: usize) -> Option<&Dot> {
        self.index(col, row).map(|index| &self.dots[index])
    }

    fn active_pulses(&self) -> usize {
        self.dots.iter().filter(|dot| dot.pulse != Pulse::Idle).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        values: VecDeque<f64>,
        fallback: f64,
    }

    impl Scripted {
        fn constant(value: f64) -> Self {
            Self {
                values: VecDeque::new(),
                fallback: value,
            }
        }

        fn then(values: &[f64], fallback: f64) -> Self {
            Self {
                values: values.iter().copied().collect(),
                fallback,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.values.pop_front().unwrap_or(self.fallback)
        }
    }

    fn run_until_idle(grid: &mut Grid, col: usize, row: usize) -> (usize, f64) {
        let mut quiet = Scripted::constant(0.0);
        let mut frames = 0;
        let mut peak: f64 = 0.0;
        while grid.dot(col, row).map(Dot::pulse) != Some(Pulse::Idle) && frames < 500 {
            grid.advance(&mut quiet);
            frames += 1;
            peak = peak.max(grid.dot(col, row).map(|dot| dot.size).unwrap_or(0.0));
        }
        (frames, peak)
    }

    #[test]
    fn cell_size_stays_within_bounds() {
        let mut width = 0.0;
        while width < 5_000.0 {
            let cell = cell_size(width);
            assert!((MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell), "width {width} gave {cell}");
            width += 37.0;
        }
        assert_eq!(cell_size(800.0), 40.0);
    }

    #[test]
    fn grid_dimensions_round_up() {
        for (width, height) in [(1280.0, 720.0), (375.0, 812.0), (1921.0, 1081.0), (30.0, 1.0)] {
            let grid = Grid::new(width, height);
            let cell = cell_size(width);
            assert_eq!(grid.cols(), (width / cell).ceil() as usize);
            assert_eq!(grid.rows(), (height / cell).ceil() as usize);
            assert_eq!(grid.dots().len(), grid.cols() * grid.rows());
        }
    }

    #[test]
    fn new_grid_places_dots_at_rest_on_cell_multiples() {
        let grid = Grid::new(1000.0, 120.0);
        let cell = cell_size(1000.0);
        let dot = grid.dot(3, 2).expect("dot inside grid");

        assert_eq!((dot.x, dot.y), (3.0 * cell, 2.0 * cell));
        assert!(grid
            .dots()
            .iter()
            .all(|dot| dot.size == REST_RADIUS && dot.alpha == REST_ALPHA && dot.pulse() == Pulse::Idle));
        assert!(grid.dot(grid.cols(), 0).is_none());
    }

    #[test]
    fn quiet_frame_draws_no_lines_and_starts_no_pulse() {
        let mut grid = Grid::new(800.0, 600.0);
        let segments = grid.advance(&mut Scripted::constant(0.0));

        assert!(segments.is_empty());
        assert_eq!(grid.active_pulses(), 0);
    }

    #[test]
    fn busy_frame_connects_every_interior_dot_to_a_neighbor() {
        let mut grid = Grid::new(400.0, 90.0);
        let segments = grid.advance(&mut Scripted::constant(0.99));
        let cell = cell_size(400.0);

        assert_eq!(segments.len(), (grid.cols() - 1) * (grid.rows() - 1));
        for segment in &segments {
            assert_eq!(segment.to, (segment.from.0 + cell, segment.from.1));
        }
        assert_eq!(grid.active_pulses(), 1);
    }

    #[test]
    fn endpoint_axes_are_chosen_independently() {
        let mut grid = Grid::new(60.0, 60.0);
        let cell = cell_size(60.0);
        // line drawn, x from the right neighbor, y from the lower neighbor, no pulse
        let segments = grid.advance(&mut Scripted::then(&[0.9, 0.9, 0.1], 0.0));

        assert_eq!(segments, vec![Segment { from: (0.0, 0.0), to: (cell, cell) }]);
    }

    #[test]
    fn pulse_grows_to_peak_then_returns_to_rest() {
        let mut grid = Grid::new(800.0, 600.0);
        assert!(grid.start_pulse(2, 3));
        assert_eq!(grid.dot(2, 3).map(Dot::pulse), Some(Pulse::Growing));
        assert!(!grid.start_pulse(2, 3), "busy dot ignores a second pulse");

        let (frames, peak) = run_until_idle(&mut grid, 2, 3);
        let dot = grid.dot(2, 3).expect("dot inside grid");

        assert!((peak - PULSE_PEAK_RADIUS).abs() < 1e-9);
        assert!((30..=50).contains(&frames), "pulse took {frames} frames");
        assert_eq!((dot.size, dot.alpha), (REST_RADIUS, REST_ALPHA));
        assert_eq!(grid.active_pulses(), 0);
    }

    #[test]
    fn pulse_opacity_follows_radius() {
        let mut grid = Grid::new(800.0, 600.0);
        grid.start_pulse(0, 0);
        let mut quiet = Scripted::constant(0.0);
        let mut previous_alpha = REST_ALPHA;

        while grid.dot(0, 0).map(Dot::pulse) == Some(Pulse::Growing) {
            let alpha = grid.dot(0, 0).map(|dot| dot.alpha).unwrap_or_default();
            assert!(alpha > previous_alpha);
            previous_alpha = alpha;
            grid.advance(&mut quiet);
        }

        assert!((previous_alpha - (REST_ALPHA + PULSE_ALPHA_GAIN)).abs() < 0.02);
    }

    #[test]
    fn random_pulse_targets_a_dot_inside_the_grid() {
        let mut grid = Grid::new(200.0, 200.0);
        // no lines, pulse fires, samples at the very top of the range
        let quiet_lines = vec![0.0; (grid.cols() - 1) * (grid.rows() - 1)];
        let mut script = quiet_lines;
        script.extend([0.99, 0.999_999, 0.999_999]);
        grid.advance(&mut Scripted::then(&script, 0.0));

        let last = grid.dot(grid.cols() - 1, grid.rows() - 1).expect("corner dot");
        assert_eq!(last.pulse(), Pulse::Growing);
    }

    #[test]
    fn rebuild_drops_running_pulses() {
        let mut grid = Grid::new(800.0, 600.0);
        grid.start_pulse(1, 1);
        grid.advance(&mut Scripted::constant(0.0));
        assert_eq!(grid.active_pulses(), 1);

        grid = Grid::new(1024.0, 768.0);
        assert_eq!(grid.active_pulses(), 0);
        assert!(grid.advance(&mut Scripted::constant(0.0)).is_empty());
    }

    #[test]
    fn empty_viewport_never_panics() {
        let mut grid = Grid::new(0.0, 0.0);
        assert_eq!((grid.cols(), grid.rows()), (0, 0));
        assert!(grid.advance(&mut Scripted::constant(0.99)).is_empty());
        assert!(!grid.start_pulse(0, 0));
    }
}
