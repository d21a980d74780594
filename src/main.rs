use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use marginlife::Grid;

mod console;
mod options;
mod stats;

use stats::Recorder;

/// Shows `generations` generations of `grid`, stepping between them
///
/// Without a console the reports are written to `out`, the last one always
/// describing the final generation.
fn run<W: io::Write>(
    grid: &mut Grid,
    generations: usize,
    sleep: Duration,
    mut console: Option<console::ConsoleRender>,
    mut out: W,
) -> Result<()> {
    let mut stats = stats::SimpleRecord::new(grid);
    for shown in 1..=generations {
        // report every 500ms or always if in console mode
        if stats.has_report(console.is_some()) {
            let report = stats.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => writeln!(out, "{}", report)?,
            }
        }

        // render the console if in console mode
        if let Some(ref mut console) = console {
            console.render(grid)?;
        }

        // the last rendered generation stays on screen
        if shown == generations {
            break;
        }
        grid.step();
        stats.record(grid);
        thread::sleep(sleep);
    }

    match console {
        Some(console) => std::mem::drop(console),
        // the periodic reports may have skipped the final generation
        None => writeln!(out, "{}", stats.report())?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let (width, height) = args.grid_size()?;
    let mut grid = Grid::new(width, height).context("cannot build the grid")?;
    let alive = args.fill_mode()?.create_alive(width, height, args.offset()?);
    grid.seed(alive);

    let console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        println!("alive: {}", grid.alive_count());
        None
    };

    run(&mut grid, args.generations()?, args.sleep()?, console, io::stdout())
}
