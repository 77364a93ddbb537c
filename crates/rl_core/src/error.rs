use thiserror::Error;

/// A player request the rules refuse.
///
/// Declines are not failures of the engine: the caller shows the reason and the
/// fighter, session and offers stay exactly as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Declined {
    #[error("Too exhausted to train: energy {energy}, need at least {required}")]
    TooExhausted { energy: u8, required: u8 },

    #[error("Unknown training stat: {0}")]
    UnknownStat(String),

    #[error("Not enough energy to fight: energy {energy}, need at least {required}")]
    InsufficientEnergy { energy: u8, required: u8 },

    #[error("Still recovering: {weeks} week(s) since last fight, need {required}")]
    NeedsRecovery { weeks: u32, required: u32 },

    #[error("{name} is out of your league right now: {reason}")]
    OutOfLeague { name: String, reason: String },

    #[error("{name} isn't interested in fighting you yet")]
    CalloutIgnored { name: String },

    #[error("Unknown opponent: {0}")]
    UnknownOpponent(String),

    #[error("Unranked fighters cannot challenge the division rankings")]
    NotRanked,

    #[error("Rank #{target} is out of reach from rank #{player} (max {max_gap} apart)")]
    ChallengeOutOfRange { player: u32, target: u32, max_gap: u32 },

    #[error("Unknown fight action: {0}")]
    UnknownAction(String),

    #[error("Not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u8, available: u8 },

    #[error("A fight is already in progress")]
    FightInProgress,

    #[error("No fight in progress")]
    NoActiveFight,

    #[error("Too many negotiation attempts, the offer has been withdrawn")]
    OfferWithdrawn,

    #[error("Offer is not awaiting a decision")]
    OfferNotPending,

    #[error("Send the offer before renegotiating it")]
    OfferNotSent,

    #[error("The opponent has not accepted this offer")]
    OfferNotAccepted,

    #[error("Unknown offer: {0}")]
    UnknownOffer(u32),

    #[error("Please write something before posting")]
    EmptyPost,
}

/// Integration-level failures: bad input documents, bad configuration.
#[derive(Error, Debug)]
pub enum CareerError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error(transparent)]
    Declined(#[from] Declined),
}

impl CareerError {
    /// Declines are expected gameplay outcomes; everything else is a caller bug.
    pub fn is_declined(&self) -> bool {
        matches!(self, CareerError::Declined(_))
    }
}

pub type Result<T> = std::result::Result<T, CareerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declines_are_told_apart() {
        let declined: CareerError = Declined::OfferNotSent.into();
        assert!(declined.is_declined());
        assert_eq!(declined.to_string(), "Send the offer before renegotiating it");
        assert!(!CareerError::InvalidParameter("age".into()).is_declined());
    }
}
