//! Artillery headless runner
//!
//! Drives the simulation with the autopilot into a recording renderer and
//! prints the final frame's draw calls as JSON. A graphical frontend would
//! replace the renderer, feed real input and hold the frame rate.
//!
//! Usage: `artillery [seed] [ticks] [config.json]`

use std::error::Error;

use artillery::sim::{Autopilot, Manager};
use artillery::{GameConfig, RecordingRenderer};

const DEFAULT_SEED: u64 = 12345;
const DEFAULT_TICKS: u64 = 3000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_SEED,
    };
    let ticks = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_TICKS,
    };
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    log::info!("Artillery (headless) starting: seed {seed}, {ticks} ticks");
    let report_every = u64::from(config.fps) * 10;

    let mut manager = Manager::with_seed(config, seed)?;
    let mut pilot = Autopilot::new();
    let mut renderer = RecordingRenderer::new();

    for _ in 0..ticks {
        let input = pilot.next_input(&manager);
        let outcome = manager.process(&input, &mut renderer)?;
        if outcome.quit {
            break;
        }
        if manager.tick_count() % report_every == 0 {
            log::info!(
                "tick {}: wave {}, {} balls, {} targets, score {}",
                manager.tick_count(),
                manager.wave_index(),
                manager.balls().len(),
                manager.targets().len(),
                manager.score().score()
            );
        }
    }

    let score = manager.score();
    log::info!(
        "Done after {} ticks: {} waves, {} hits, {} balls, score {}",
        manager.tick_count(),
        manager.wave_index(),
        score.targets_hit(),
        score.balls_used(),
        score.score()
    );

    println!("{}", serde_json::to_string_pretty(renderer.commands())?);
    Ok(())
}
