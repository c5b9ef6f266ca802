//! Astro Raid headless driver
//!
//! Runs a scripted session against a synthetic 60 Hz clock and prints the
//! final frame snapshot as JSON. The real game embeds the library behind a
//! renderer; this binary exists to exercise and inspect the simulation.

use astro_raid::assets::AssetCatalog;
use astro_raid::sim::{GameState, TickInput, tick};
use astro_raid::snapshot::RenderSnapshot;
use astro_raid::Playfield;

const FRAME_MS: u64 = 16;
const FRAMES: u64 = 3600;

/// Read a playfield config from a JSON file
fn load_playfield(path: &str) -> Result<Playfield, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA57A0);
    let playfield = match std::env::args().nth(2) {
        Some(path) => load_playfield(&path).unwrap_or_else(|err| {
            log::warn!("failed to load playfield config {}: {}", path, err);
            Playfield::default()
        }),
        None => Playfield::default(),
    };
    log::info!(
        "starting scripted run, seed {}, field {}x{}",
        seed,
        playfield.width,
        playfield.height
    );

    let mut state = GameState::new(playfield, seed, 0);
    let assets = AssetCatalog::new();

    // Hold fire and sweep left-right across the field for a minute of
    // simulated time.
    for frame in 0..FRAMES {
        let input = TickInput {
            left: frame % 240 < 120,
            right: frame % 240 >= 120,
            fire: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, frame * FRAME_MS);
    }

    log::info!(
        "run finished: score {}, lives {}, stage {}, phase {:?}",
        state.score,
        state.lives,
        state.stage,
        state.phase
    );

    let snapshot = RenderSnapshot::capture(&state, &assets);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("snapshot serialization failed: {}", err),
    }
}
