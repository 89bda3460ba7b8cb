pub mod calculator;
pub mod constants;
pub mod error;
pub mod firework;
pub mod sensor;
pub mod views;

pub use calculator::*;
pub use constants::*;
pub use error::*;
pub use firework::*;
pub use sensor::*;
