// Fight engine: action catalog, outcome resolution, commentary, round state machine

pub mod action;
pub mod commentary;
pub mod resolver;
pub mod session;

pub use action::*;
pub use commentary::*;
pub use resolver::*;
pub use session::*;
