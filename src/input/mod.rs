pub mod handler;

pub use handler::{action_for, apply, handle_input, Action};
