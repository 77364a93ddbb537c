// Opponents available for scheduled fights
use crate::fighter::{Division, Fighter, SocialMedia};

/// (name, age, wins, losses, ko, popularity, power, speed, defense, experience, money)
type ScheduleRow = (&'static str, u8, u32, u32, u32, f32, f32, f32, f32, u32, u64);

const SCHEDULE_CARD: [ScheduleRow; 4] = [
    ("Miguel Rodriguez", 28, 15, 2, 8, 65.0, 78.0, 72.0, 85.0, 70, 80_000),
    ("Tommy Iron Fist Sullivan", 32, 22, 4, 18, 82.0, 90.0, 68.0, 75.0, 85, 150_000),
    ("Aleksandr The Siberian Volkov", 26, 18, 1, 12, 75.0, 85.0, 80.0, 82.0, 78, 120_000),
    ("Carlos El Toro Mendez", 30, 20, 3, 14, 70.0, 82.0, 75.0, 78.0, 80, 100_000),
];

/// Fighters open to a negotiated bout in `division`.
pub fn scheduled_opponents(division: Division) -> Vec<Fighter> {
    SCHEDULE_CARD
        .iter()
        .map(|&(name, age, wins, losses, ko, popularity, power, speed, defense, experience, money)| Fighter {
            name: name.to_string(),
            age,
            division,
            wins,
            losses,
            ko,
            unranked_wins: 0,
            power,
            speed,
            defense,
            stamina: 100.0,
            technique: 70.0,
            mental: 70.0,
            experience,
            popularity,
            energy: 100,
            money,
            weeks_since_last_fight: 0,
            injuries: Vec::new(),
            facial_damage: 0.0,
            social_media: SocialMedia::default(),
        })
        .collect()
}

pub fn find_scheduled(division: Division, name: &str) -> Option<Fighter> {
    let name = name.trim();
    scheduled_opponents(division).into_iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_card() {
        let card = scheduled_opponents(Division::Welterweight);
        assert_eq!(card.len(), 4);
        assert!(card.iter().all(|f| f.division == Division::Welterweight));
        let sullivan = find_scheduled(Division::Welterweight, "tommy iron fist sullivan").unwrap();
        assert_eq!(sullivan.power, 90.0);
        assert_eq!(sullivan.record_line(), "22-4 (18 KO)");
        assert!(find_scheduled(Division::Welterweight, "Nobody").is_none());
    }
}
