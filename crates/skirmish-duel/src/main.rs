//! Demo binary: run one duel and print the report as JSON.

use log::warn;

use skirmish_duel::duel::{run_duel, DuelConfig};

fn main() {
    env_logger::init();

    let config = config_from_args();
    let report = run_duel(&config);

    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("serializing duel report")
    );
}

/// `skirmish-duel [seed] [ticks]`; malformed arguments fall back to the
/// defaults with a warning.
fn config_from_args() -> DuelConfig {
    let mut config = DuelConfig::default();
    let mut args = std::env::args().skip(1);

    if let Some(seed) = args.next() {
        match seed.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => warn!("ignoring malformed seed {seed:?}"),
        }
    }
    if let Some(ticks) = args.next() {
        match ticks.parse() {
            Ok(ticks) => config.ticks = ticks,
            Err(_) => warn!("ignoring malformed tick count {ticks:?}"),
        }
    }

    config
}
