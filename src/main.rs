//! Terminal front end: load a seed pattern (or scatter a random one), then
//! animate it on a fixed tick cadence with incremental redraws.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::info;
use rand::RngCore;
use rand::SeedableRng;

use finite_life::pattern::{SeedPattern, render_board};
use finite_life::universe::Universe;

const DEFAULT_INTERVAL_MS: u64 = 200;
const DEFAULT_DENSITY: f64 = 0.30;
const DEFAULT_SEED: u64 = 0xF1B0_5EED;
const DEFAULT_LIVE_MARKER: char = '#';
const DEFAULT_DEAD_MARKER: char = '.';

const USAGE: &str = "usage: finite-life [PATTERN_FILE] [--once] [--ticks N] \
[--interval-ms N] [--random SIDE] [--density F] [--seed N]";

struct MainArgs {
    pattern_path: Option<PathBuf>,
    random_side: Option<usize>,
    density: f64,
    seed: u64,
    ticks: Option<u64>,
    interval: Duration,
    once: bool,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = MainArgs {
        pattern_path: None,
        random_side: None,
        density: DEFAULT_DENSITY,
        seed: DEFAULT_SEED,
        ticks: None,
        interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        once: false,
    };
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--once" => {
                parsed.once = true;
            }
            "--ticks" => {
                i += 1;
                let n: u64 = next_arg(i, "--ticks")
                    .parse()
                    .expect("--ticks requires a non-negative integer");
                parsed.ticks = Some(n);
            }
            "--interval-ms" => {
                i += 1;
                let ms: u64 = next_arg(i, "--interval-ms")
                    .parse()
                    .expect("--interval-ms requires a non-negative integer");
                parsed.interval = Duration::from_millis(ms);
            }
            "--random" => {
                i += 1;
                let side: usize = next_arg(i, "--random")
                    .parse()
                    .expect("--random requires a positive board side");
                parsed.random_side = Some(side);
            }
            "--density" => {
                i += 1;
                let density: f64 = next_arg(i, "--density")
                    .parse()
                    .expect("--density requires a number in [0, 1]");
                parsed.density = density;
            }
            "--seed" => {
                i += 1;
                let seed: u64 = next_arg(i, "--seed")
                    .parse()
                    .expect("--seed requires an integer");
                parsed.seed = seed;
            }
            other if !other.starts_with('-') => {
                parsed.pattern_path = Some(PathBuf::from(other));
            }
            other => panic!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }

    if parsed.pattern_path.is_some() == parsed.random_side.is_some() {
        panic!("expected either a pattern file or --random SIDE\n{USAGE}");
    }
    if parsed.once && parsed.pattern_path.is_none() {
        panic!("--once needs a pattern file\n{USAGE}");
    }
    parsed
}

fn seed_random(universe: &mut Universe, density: f64, seed: u64) -> anyhow::Result<()> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    for y in 0..universe.height() {
        for x in 0..universe.width() {
            if rng.next_u64() <= threshold {
                universe.set_cell(x, y, true)?;
            }
        }
    }
    Ok(())
}

fn write_status(stdout: &mut io::Stdout, row: usize, universe: &Universe) -> io::Result<()> {
    write!(
        stdout,
        "\x1b[{row};1H\x1b[Kgeneration {}  population {}",
        universe.generation(),
        universe.population()
    )
}

fn animate(
    universe: &mut Universe,
    live: char,
    dead: char,
    ticks: Option<u64>,
    interval: Duration,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let status_row = universe.height() + 2;

    // Full frame once; afterwards only changed cells are rewritten.
    write!(
        stdout,
        "\x1b[?25l\x1b[2J\x1b[H{}",
        render_board(&universe.snapshot(), live, dead)
    )?;
    write_status(&mut stdout, status_row, universe)?;
    stdout.flush()?;

    let mut ticks_run = 0u64;
    loop {
        if let Some(limit) = ticks {
            if ticks_run >= limit {
                break;
            }
        }
        thread::sleep(interval);
        let changes = universe.tick()?;
        ticks_run += 1;
        if changes.is_empty() {
            info!("board settled at generation {}", universe.generation());
            break;
        }
        let mut frame = String::new();
        for change in &changes {
            // Cursor addressing is 1-based.
            let marker = if change.alive { live } else { dead };
            frame.push_str(&format!("\x1b[{};{}H{marker}", change.y + 1, change.x + 1));
        }
        write!(stdout, "{frame}")?;
        write_status(&mut stdout, status_row, universe)?;
        stdout.flush()?;
    }

    writeln!(stdout, "\x1b[{status_row};1H\x1b[?25h")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = parse_args();

    if let Some(path) = &args.pattern_path {
        let pattern = SeedPattern::load(path)
            .with_context(|| format!("failed to load pattern {}", path.display()))?;
        if args.once {
            print!("{}", pattern.next_generation()?.board_string());
            return Ok(());
        }
        let mut universe = pattern.to_universe()?;
        info!(
            "loaded {}x{} pattern from {}",
            universe.width(),
            universe.height(),
            path.display()
        );
        animate(
            &mut universe,
            pattern.live_marker(),
            pattern.dead_marker(),
            args.ticks,
            args.interval,
        )?;
    } else {
        let side = args.random_side.unwrap_or(0);
        let mut universe = Universe::new(side, side)?;
        seed_random(&mut universe, args.density, args.seed)?;
        info!(
            "seeded {side}x{side} random board (density {}, seed {:#x})",
            args.density, args.seed
        );
        animate(
            &mut universe,
            DEFAULT_LIVE_MARKER,
            DEFAULT_DEAD_MARKER,
            args.ticks,
            args.interval,
        )?;
    }

    Ok(())
}
