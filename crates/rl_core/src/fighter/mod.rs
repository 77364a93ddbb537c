// Fighter model: attributes, registration, rankings, manager advice

pub mod advice;
pub mod creation;
pub mod ranking;
pub mod types;

pub use advice::*;
pub use creation::*;
pub use ranking::*;
pub use types::*;
