// Matchmaking: purses, betting odds, acceptance and renegotiation

pub mod odds;
pub mod offer;

pub use odds::*;
pub use offer::*;
