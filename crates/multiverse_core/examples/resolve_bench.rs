//! Move legality benchmark for profiling with cargo-flamegraph.
//!
//! For every builtin preset this checks each piece of the side to move
//! against every square of every present board, many times over.
//!
//! Usage:
//!   cargo flamegraph --example resolve_bench -p multiverse_core -- [iterations]

use multiverse_core::{Coord, Multiverse, PresetCatalog, SetupError, can_move};
use std::env;
use std::time::{Duration, Instant};

const DEFAULT_ITERATIONS: usize = 200;

/// Number of legal `(origin, destination)` pairs on the present boards.
fn count_legal(mv: &Multiverse) -> usize {
    let mut legal = 0;
    for tl in mv.timelines() {
        let color = tl.active_color();
        let turn = tl.last_turn_played();
        for (x, y, piece) in tl.present().pieces() {
            if piece.color != color {
                continue;
            }
            let from = Coord::new(tl.index(), turn, x, y);
            for dest in mv.timelines() {
                let dest_turn = dest.last_turn_played();
                for ty in 0..mv.height() as i32 {
                    for tx in 0..mv.width() as i32 {
                        let to = Coord::new(dest.index(), dest_turn, tx, ty);
                        if can_move(mv, piece, from, to, color) {
                            legal += 1;
                        }
                    }
                }
            }
        }
    }
    legal
}

fn main() -> Result<(), SetupError> {
    let iterations = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    println!("=== Move Legality Benchmark ===");
    println!("Iterations per preset: {iterations}");
    println!();

    let catalog = PresetCatalog::builtin()?;
    let mut total_time = Duration::ZERO;
    let mut total_legal = 0usize;

    for preset in catalog.iter() {
        let mv = preset.build()?;
        print!("{:.<40}", preset.name);

        let start = Instant::now();
        let mut legal = 0usize;
        for _ in 0..iterations {
            legal = count_legal(&mv);
        }
        let elapsed = start.elapsed();
        total_time += elapsed;
        total_legal += legal;

        let per_sec = if elapsed.as_secs_f64() > 0.0 {
            iterations as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(" {legal:>4} moves, {per_sec:>9.0} scans/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_legal} legal moves across {} presets in {total_time:.3?}",
        catalog.len()
    );
    Ok(())
}
