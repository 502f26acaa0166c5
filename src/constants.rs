pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Gravity tick settings (in milliseconds)
pub const DEFAULT_TICK_MS: u64 = 250;
pub const MIN_TICK_MS: u64 = 50;
pub const MAX_TICK_MS: u64 = 2000;

// How long the main loop waits for a key before checking the timer
pub const INPUT_POLL_MS: u64 = 16;
