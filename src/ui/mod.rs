pub mod renderer;

pub use renderer::{render, ui};
