//! Console playback demo.
//!
//! Plays the solution in the terminal, printing status changes and a coarse
//! view of the disk in flight. Pass a TOML file to override the board.
//!
//! ```text
//! cargo run --example console -- demos/hanoi.toml
//! ```

use hanoi_motion::{
    load_config, solve, HanoiConfig, PegId, Pixels, PlaybackController, Renderer, Status, Timestamp,
};

/// Delay provider backed by the OS scheduler.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Prints what a graphical renderer would draw.
struct ConsoleRenderer {
    next_id: usize,
    last_printed: Option<(usize, i32, i32)>,
}

impl Renderer for ConsoleRenderer {
    type Handle = usize;

    fn create_disk(&mut self, width: Pixels, x: i32, y: i32) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        println!("  + disk #{} width {} at ({}, {})", id, width.0, x, y);
        id
    }

    fn set_disk_position(&mut self, disk: usize, x: i32, y: i32) {
        // Only print every 40 px of travel to keep the output readable
        let moved_far = match self.last_printed {
            Some((id, px, py)) => id != disk || (px - x).abs() + (py - y).abs() >= 40,
            None => true,
        };
        if moved_far {
            println!("    disk #{} -> ({:>3}, {:>3})", disk, x, y);
            self.last_printed = Some((disk, x, y));
        }
    }

    fn remove_disk(&mut self, disk: usize) {
        println!("  - disk #{}", disk);
    }

    fn status_changed(&mut self, status: &Status) {
        if !status.is_empty() {
            println!("[status] {}", status);
        }
    }
}

fn main() {
    println!("=== Tower of Hanoi Console Demo ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path).expect("Failed to load config"),
        None => HanoiConfig::default(),
    };

    println!(
        "Board: pegs at {:?}, {} disk(s) requested, speed x{}",
        config.geometry.peg_centers.map(|c| c.0),
        config.disks.count,
        config.playback.speed.0
    );

    let moves = solve(config.effective_disk_count() as u32, PegId::Left, PegId::Right);
    println!("Solution has {} moves:", moves.len());
    for mv in &moves {
        let (from, to) = mv.indices();
        print!(" {}->{}", from, to);
    }
    println!("\n\nLaying out tower:");

    let renderer = ConsoleRenderer {
        next_id: 0,
        last_printed: None,
    };
    let mut hanoi = PlaybackController::new(config, renderer);

    println!("\nPlaying:");
    let end = hanoi
        .run_blocking(Timestamp::ZERO, &mut SleepDelay)
        .expect("Playback failed");

    println!("\n=== Demo Complete after {:.2} s ===", end.0);
}
