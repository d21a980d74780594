use std::{ops::RangeInclusive, time::Duration};

use anyhow::{Context, Result, bail, ensure};
use marginlife::{Coord, MARGIN, PatternId};
use rand::{Rng, SeedableRng, rngs::StdRng};

const GENERATIONS: RangeInclusive<usize> = 10..=1000;
const SLEEP_MILLIS: RangeInclusive<u64> = 10..=1000;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses and validates the arguments, `None` when only help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("q", "quiet", "print reports instead of drawing the grid");
        opts.optflag("r", "random", "fill the field with a random soup");
        opts.optopt("", "seed", "seed for the random soup", "SEED");
        opts.optopt("p", "pattern", "starting pattern: o, g or u", "ID");
        opts.optopt("x", "", "column of the pattern's top left corner", "X");
        opts.optopt("y", "", "row of the pattern's top left corner", "Y");
        opts.optopt("w", "width", "set visible grid width", "WIDTH");
        opts.optopt("h", "height", "set visible grid height", "HEIGHT");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "number of generations", "COUNT");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: marginlife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        args.validate()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn validate(&self) -> Result<()> {
        let gens = self.generations()?;
        ensure!(
            GENERATIONS.contains(&gens),
            "generations must be between {} and {}, got {gens}",
            GENERATIONS.start(),
            GENERATIONS.end()
        );
        let millis = self.sleep()?.as_millis();
        ensure!(
            (*SLEEP_MILLIS.start() as u128..=*SLEEP_MILLIS.end() as u128).contains(&millis),
            "sleep must be between {} and {} ms, got {millis}",
            SLEEP_MILLIS.start(),
            SLEEP_MILLIS.end()
        );

        if let FillMode::Pattern(id) = self.fill_mode()? {
            let (grid_w, grid_h) = self.grid_size()?;
            let (pat_w, pat_h) = id.size();
            let (x, y) = self.offset()?;
            let (max_x, max_y) = (grid_w.saturating_sub(pat_w), grid_h.saturating_sub(pat_h));
            if x > max_x || y > max_y {
                bail!("the {id} needs 0 <= x <= {max_x} and 0 <= y <= {max_y}, got ({x}, {y})");
            }
        }
        Ok(())
    }

    fn opt<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        !self.matches.opt_present("quiet")
    }

    pub fn generations(&self) -> Result<usize> {
        Ok(self.opt("gens")?.unwrap_or(100))
    }
    pub fn sleep(&self) -> Result<Duration> {
        Ok(Duration::from_millis(self.opt("sleep")?.unwrap_or(100)))
    }

    /// Visible width and height; the grid itself rejects undersized fields
    pub fn grid_size(&self) -> Result<(usize, usize)> {
        Ok((
            self.opt("width")?.unwrap_or(40),
            self.opt("height")?.unwrap_or(20),
        ))
    }
    pub fn offset(&self) -> Result<(usize, usize)> {
        Ok((self.opt("x")?.unwrap_or(0), self.opt("y")?.unwrap_or(0)))
    }

    pub fn fill_mode(&self) -> Result<FillMode> {
        if self.matches.opt_present("random") {
            return Ok(FillMode::Random(self.opt("seed")?));
        }
        let id = match self.matches.opt_str("pattern") {
            Some(s) => s.parse()?,
            None => PatternId::Glider,
        };
        Ok(FillMode::Pattern(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Pattern(PatternId),
    /// Random soup, reproducible when seeded
    Random(Option<u64>),
}
impl FillMode {
    /// Absolute coordinates of the starting live cells for a visible field of `w` x `h`
    pub fn create_alive(self, w: usize, h: usize, (x, y): (usize, usize)) -> Vec<Coord> {
        match self {
            Self::Pattern(id) => id.place(x, y),
            Self::Random(seed) => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                let mut alive = Vec::with_capacity((w * h).div_ceil(2));
                for y in 0..h {
                    for x in 0..w {
                        if rng.random_bool(0.5) {
                            alive.push(Coord::new(MARGIN + x, MARGIN + y));
                        }
                    }
                }
                alive
            }
        }
    }
}
