//! Step and paint timings at common viewport sizes

use std::time::Instant;
use life_backdrop::{Automaton, PixelBuffer, StepMode, Viewport, rendering};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(viewport: Viewport, mode: StepMode) -> Automaton {
    let (cols, rows) = viewport.grid_dimensions();
    Automaton::seeded(cols, rows, &mut StdRng::seed_from_u64(0)).with_mode(mode)
}

fn benchmark_step(viewport: Viewport, mode: StepMode, iterations: u32) -> f64 {
    let mut automaton = seeded(viewport, mode);

    let start = Instant::now();
    for _ in 0..iterations {
        automaton.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_paint(viewport: Viewport, iterations: u32) -> Option<f64> {
    let automaton = seeded(viewport, StepMode::Serial);
    let mut surface = PixelBuffer::try_new(viewport.width, viewport.height).ok()?;

    let start = Instant::now();
    for _ in 0..iterations {
        rendering::paint(&mut surface, automaton.trail());
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    println!("=== Backdrop Benchmark ===\n");

    let viewports = [
        ("720p", Viewport::new(1280, 720)),
        ("1080p", Viewport::new(1920, 1080)),
        ("1440p", Viewport::new(2560, 1440)),
        ("4K", Viewport::new(3840, 2160)),
        ("8K", Viewport::new(7680, 4320)),
    ];
    let iterations = 20;

    println!(
        "{:>8} {:>10} {:>12} {:>12} {:>12} {:>10}",
        "Viewport", "Grid", "Serial", "Parallel", "Paint", "Speedup"
    );
    println!("{:-<70}", "");

    for (name, viewport) in viewports {
        let (cols, rows) = viewport.grid_dimensions();
        let serial_ms = benchmark_step(viewport, StepMode::Serial, iterations);
        let parallel_ms = benchmark_step(viewport, StepMode::Parallel, iterations);
        let paint_str = match benchmark_paint(viewport, iterations) {
            Some(ms) => format!("{:>12.2}", ms),
            None => format!("{:>12}", "-"),
        };

        println!(
            "{:>8} {:>10} {:>12.3} {:>12.3} {} {:>9.1}x",
            name,
            format!("{}x{}", cols, rows),
            serial_ms,
            parallel_ms,
            paint_str,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    println!("\nAll times in ms per call; one step per {:.1}s tick.", life_backdrop::config::TICK_INTERVAL);
}
