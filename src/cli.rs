use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};
use crate::game::{GameOptions, GameOverRule};

/// Classic falling-block puzzle in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Milliseconds between gravity steps.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS),
    )]
    pub tick_ms: u64,

    /// When the game ends after a piece locks.
    #[arg(long, value_enum, default_value_t = GameOverRule::SpawnCollision)]
    pub game_over: GameOverRule,

    /// Make the down arrow drop the piece all the way and lock it.
    #[arg(long)]
    pub hard_drop: bool,

    /// Seed for piece selection, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn options(&self) -> GameOptions {
        GameOptions {
            tick_interval: Duration::from_millis(self.tick_ms),
            game_over_rule: self.game_over,
            hard_drop_enabled: self.hard_drop,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_options() {
        let args = Args::try_parse_from(["tstris-classic"]).unwrap();
        assert_eq!(args.options(), GameOptions::default());
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "tstris-classic", "--tick-ms", "500", "--game-over", "top-row", "--hard-drop", "--seed", "42",
        ]).unwrap();
        let options = args.options();
        assert_eq!(options.tick_interval, Duration::from_millis(500));
        assert_eq!(options.game_over_rule, GameOverRule::TopRow);
        assert!(options.hard_drop_enabled);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn rejects_tick_out_of_range() {
        assert!(Args::try_parse_from(["tstris-classic", "-t", "10"]).is_err());
        assert!(Args::try_parse_from(["tstris-classic", "-t", "5000"]).is_err());
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(Args::try_parse_from(["tstris-classic", "--game-over", "never"]).is_err());
    }
}
