// Manager advice
use crate::fighter::types::Fighter;

pub const MANAGER_NAME: &str = "Tony Martinez";

/// The manager's current piece of advice for the fighter.
pub fn manager_advice(fighter: &Fighter) -> &'static str {
    if fighter.wins < 3 {
        return "You need to focus on building your fundamentals. Fight more unranked opponents \
                to gain experience before calling out ranked fighters.";
    }
    if fighter.energy < 50 {
        return "You're looking tired, champ. Take some time to rest before your next fight. \
                Energy management is crucial for peak performance.";
    }
    if fighter.popularity < 30.0 {
        return "We need to work on your public image. Consider doing more media appearances \
                and winning fights impressively to boost your popularity.";
    }
    "You're on the right track! Keep training hard and taking smart fights. Your next opponent \
     should be someone who can help build your reputation."
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{create_fighter, Division, FightingStyle};

    #[test]
    fn test_advice_priorities() {
        let mut fighter =
            create_fighter("Kid", 19, Division::Lightweight, FightingStyle::Boxer).unwrap();
        assert!(manager_advice(&fighter).contains("fundamentals"));

        fighter.wins = 5;
        fighter.energy = 40;
        assert!(manager_advice(&fighter).contains("tired"));

        fighter.energy = 90;
        assert!(manager_advice(&fighter).contains("public image"));

        fighter.popularity = 60.0;
        assert!(manager_advice(&fighter).contains("right track"));
    }
}
