use marginlife::Grid;
use std::time::Instant;

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, grid: &Grid);

    /// `always` asks for a report regardless of how long ago the last one was
    fn has_report(&self, always: bool) -> bool;
    fn report(&mut self) -> Self::Str;
}

/// Population of the field as last recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Census {
    generation: usize,
    visible: usize,
    // cells that drifted into the margin, off screen but still simulated
    margin: usize,
}
impl Census {
    fn of(grid: &Grid) -> Self {
        let visible = grid.visible_alive_count();
        Self {
            generation: grid.generation(),
            visible,
            margin: grid.alive_count() - visible,
        }
    }
}

pub struct SimpleRecord {
    census: Census,
    peak_visible: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(grid: &Grid) -> Self {
        let census = Census::of(grid);
        Self {
            census,
            peak_visible: census.visible,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, grid: &Grid) {
        let census = Census::of(grid);
        self.gens_in_report += census.generation - self.census.generation;
        self.peak_visible = self.peak_visible.max(census.visible);
        self.census = census;
    }

    fn has_report(&self, always: bool) -> bool {
        always || self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> Self::Str {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        let Census {
            generation,
            visible,
            margin,
        } = self.census;
        format!(
            "gen:{generation} visible:{visible} (peak {}) margin:{margin} {gens_per_sec:.02}gen/s",
            self.peak_visible
        )
    }
}
