// Opponents: synthetic journeymen, the callout roster, rankings and the schedule card

pub mod generator;
pub mod rankings;
pub mod roster;
pub mod schedule;

pub use generator::*;
pub use rankings::*;
pub use roster::*;
pub use schedule::*;
