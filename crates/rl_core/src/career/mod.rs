// Career loop: progression rules, social media, notifications and the session context

pub mod notifications;
pub mod progression;
pub mod session;
pub mod social;

pub use notifications::*;
pub use progression::*;
pub use session::*;
pub use social::*;
