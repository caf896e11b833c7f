//! Micro-benchmarks of the board primitives the search relies on

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::time::{Duration, Instant};

use crate::bitboard::BitBoard;
use crate::error::BoardError;

/// Result of a timed run
#[derive(Copy, Clone, Debug)]
pub struct Timing {
    pub iterations: usize,
    pub elapsed: Duration,
}

impl Timing {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs `action` `iterations` times and measures the total time taken.
///
/// With `progress` set a progress bar is drawn, it is updated in batches so
/// that drawing does not dominate the measurement
pub fn time_action<F>(
    description: &str,
    iterations: usize,
    progress: bool,
    mut action: F,
) -> Result<Timing, BoardError>
where
    F: FnMut() -> Result<(), BoardError>,
{
    let bar = if progress {
        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] {bar:40} {pos}/{len}"),
        );
        bar.set_message(description);
        bar
    } else {
        ProgressBar::hidden()
    };
    let batch = (iterations / 100).max(1);

    let start = Instant::now();
    for i in 0..iterations {
        action()?;
        if (i + 1) % batch == 0 {
            bar.inc(batch as u64);
        }
    }
    let elapsed = start.elapsed();
    bar.finish_and_clear();

    info!("{} in {:.2} ms", description, elapsed.as_secs_f64() * 1000.0);
    Ok(Timing {
        iterations,
        elapsed,
    })
}

/// Times one million win checks and one million move/undo operations on
/// `board`, undoing and replaying `last_column` so the board ends unchanged.
///
/// Returns the description and timing of each run
pub fn run_standard(
    board: &mut BitBoard,
    last_column: usize,
    progress: bool,
) -> Result<Vec<(&'static str, Timing)>, BoardError> {
    let mut timings = Vec::new();

    let (bitmask_a, bitmask_b) = (board.bitmask_a(), board.bitmask_b());
    let description = "Processed 1 million Player 1 and Player 2 win checks";
    timings.push((
        description,
        time_action(description, 1_000_000 / 2, progress, || {
            std::hint::black_box(BitBoard::check_win(std::hint::black_box(bitmask_a)));
            std::hint::black_box(BitBoard::check_win(std::hint::black_box(bitmask_b)));
            Ok(())
        })?,
    ));

    let description = "Processed 1 million move and unmove operations";
    timings.push((
        description,
        time_action(description, 1_000_000 / 2, progress, || {
            board.undo_move(last_column)?;
            board.apply_move(last_column)
        })?,
    ));

    Ok(timings)
}
