//! fracsack walkthrough: solve the textbook case and replay it as text.
//!
//! Demonstrates:
//!   1. Building items and solving for a capacity
//!   2. Inspecting steps, outcomes and the summary
//!   3. Replaying the solution through a Playback cursor
//!   4. Rendering the narrated log
//!
//! Run with:
//!   cargo run --example walkthrough -- [speed-index 0..=4]

use fracsack::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let speed_index = std::env::args()
        .nth(1)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(2);
    let speed = Speed::from_index(speed_index)?;

    let items = [
        Item::new(1, 10.0, 60.0),
        Item::new(2, 20.0, 100.0),
        Item::new(3, 30.0, 120.0),
        Item::new(4, 15.0, 20.0),
    ];
    let capacity = 50.0;

    // ─── Solve ──────────────────────────────────────────────────

    let solution = solve(&items, capacity)?;
    let summary = solution.summary();
    println!(
        "solved: {} full, {} partial, {} left out, {:.1}% used",
        summary.full,
        summary.partial,
        summary.not_taken,
        summary.utilization * 100.0
    );

    // ─── Replay ─────────────────────────────────────────────────

    let narrator = Narrator;
    let playback = Playback::new(&solution, &PlaybackConfig::with_speed(speed))?;
    println!("playback at {speed}, {:?} total", playback.total_duration());

    for entry in narrator.intro(capacity, items.len()) {
        println!("[{:>7}] {entry}", entry.kind.as_str());
    }
    for cue in playback {
        let checking = narrator.checking(&cue.step);
        println!("[{:>7}] {checking}", checking.kind.as_str());
        println!(
            "          travel {:?}, settle {:?}, pause {:?}, slice {:.1}%",
            cue.travel_duration, cue.settle_duration, cue.pause_duration, cue.segment_percent
        );
        let took = narrator.took(&cue.step);
        println!("[{:>7}] {took}", took.kind.as_str());
        println!(
            "          sack: {:.2} value, {:.2} / {} weight ({:.1}%)",
            cue.gauge.value,
            cue.gauge.weight,
            cue.gauge.capacity,
            cue.gauge.percent()
        );
    }
    for id in solution.not_taken() {
        println!("          item {id}: not taken");
    }
    let outro = narrator.outro(solution.total_value());
    println!("[{:>7}] {outro}", outro.kind.as_str());

    Ok(())
}
