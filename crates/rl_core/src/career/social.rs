// Social media posts and the replies they provoke
use crate::error::Declined;
use crate::fight::resolve;
use crate::fighter::Fighter;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    TikTok,
    Instagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Reply,
    Shun,
    FollowerDefend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxerReply {
    pub author: String,
    pub message: String,
    pub kind: ReplyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: Platform,
    pub content: String,
    pub hashtags: Vec<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub replies: Vec<BoxerReply>,
}

/// Chance a tagged boxer answers at full popularity
const MAX_REPLY_CHANCE: f32 = 0.4;

/// `{f}` fighter name, `{b}` tagged boxer
const REPLIES: [&str; 4] = [
    "You need to prove yourself first, {f}. Talk is cheap!",
    "Respect the game, young fighter. You're not ready for this level yet!",
    "I like the confidence, but let's see you in the ring first!",
    "Keep training and maybe one day you'll earn a shot!",
];
const SHUNS: [&str; 4] = [
    "Who is this {f}? Never heard of you!",
    "You're not even on my radar. Come back when you're relevant!",
    "My team doesn't even know who you are!",
    "Blocked. Don't @ me until you're somebody!",
];
const FOLLOWER_DEFENDS: [&str; 4] = [
    "@{f} needs to stay in their lane! {b} is the real champion!",
    "This {f} is just looking for clout! {b} would destroy them!",
    "{b} fans don't play! @{f} better watch their mouth!",
    "{f} couldn't last one round with the champ {b}!",
];

const TRASH_TALK: [&str; 5] = [
    "{b} wouldn't last 3 rounds with me!",
    "I'm coming for all the champions in my division! Nobody can stop this momentum!",
    "Training harder than ever. The hunger is real! Who wants the smoke?",
    "{b} talks too much for someone I'd knock out cold!",
    "Champions are made in the gym, not on social media. I'm ready to prove it!",
];

/// Boxers the social feeds know about. Separate from the callout roster.
pub const MEDIA_BOXERS: [&str; 25] = [
    "Canelo Alvarez", "Tyson Fury", "Anthony Joshua", "Gervonta Davis", "Ryan Garcia",
    "Devin Haney", "Errol Spence Jr", "Terence Crawford", "Naoya Inoue", "Dmitry Bivol",
    "Shakur Stevenson", "Tank Davis", "Jermell Charlo", "Keith Thurman", "Danny Garcia",
    "Mikey Garcia", "Leo Santa Cruz", "Gary Russell Jr", "Vasiliy Lomachenko", "Teofimo Lopez",
    "Josh Taylor", "Jose Ramirez", "Regis Prograis", "Julius Indongo", "Ivan Baranchyk",
];

/// `@handle` form of a name: lowercase, first space removed.
///
/// "Errol Spence Jr" is tagged as `@errolspence jr`.
pub fn handle(name: &str) -> String {
    name.replacen(' ', "", 1).to_lowercase()
}

/// Media boxers tagged in `content`.
pub fn tagged_boxers(content: &str) -> Vec<&'static str> {
    let lowered = content.to_lowercase();
    MEDIA_BOXERS
        .into_iter()
        .filter(|name| lowered.contains(&format!("@{}", handle(name))))
        .collect()
}

fn boxer_reply(fighter: &Fighter, boxer: &str, rng: &mut impl Rng) -> Option<BoxerReply> {
    let chance = (fighter.popularity / 100.0) * MAX_REPLY_CHANCE;
    if !resolve(chance, rng) {
        return None;
    }
    let (kind, pool) = match rng.gen_range(0..3) {
        0 => (ReplyKind::Reply, &REPLIES),
        1 => (ReplyKind::Shun, &SHUNS),
        _ => (ReplyKind::FollowerDefend, &FOLLOWER_DEFENDS),
    };
    let message = pool[rng.gen_range(0..pool.len())]
        .replace("{f}", &fighter.name)
        .replace("{b}", boxer);
    let author = match kind {
        ReplyKind::FollowerDefend => format!("{boxer} Fan"),
        _ => boxer.to_string(),
    };
    Some(BoxerReply { author, message, kind })
}

/// Publishes a post and folds its engagement into the fighter's counters.
pub fn publish_post(
    fighter: &Fighter,
    platform: Platform,
    content: &str,
    hashtags: &[String],
    rng: &mut impl Rng,
) -> Result<(Fighter, SocialPost), Declined> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Declined::EmptyPost);
    }

    let base = (fighter.popularity.max(0.0) * 10.0).floor() as u64;
    let likes = base + if base > 0 { rng.gen_range(0..base) } else { 0 };
    let comments = likes / 10 + rng.gen_range(0..50u64);
    let shares = likes / 20 + rng.gen_range(0..20u64);

    let replies = tagged_boxers(content)
        .into_iter()
        .filter_map(|boxer| boxer_reply(fighter, boxer, rng))
        .collect::<Vec<_>>();

    let mut next = fighter.clone();
    let social = &mut next.social_media;
    social.followers += likes / 100;
    social.total_posts += 1;
    social.total_likes += likes;
    social.total_comments += comments;
    social.total_shares += shares;

    tracing::info!(fighter = %next.name, %platform, likes, replies = replies.len(), "posted");

    let post = SocialPost {
        platform,
        content: content.to_string(),
        hashtags: hashtags.iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect(),
        likes,
        comments,
        shares,
        replies,
    };
    Ok((next, post))
}

/// A ready-made provocation, naming a random media boxer where the template wants one.
pub fn trash_talk(rng: &mut impl Rng) -> String {
    let template = TRASH_TALK[rng.gen_range(0..TRASH_TALK.len())];
    let target = MEDIA_BOXERS[rng.gen_range(0..MEDIA_BOXERS.len())];
    template.replace("{b}", target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{create_fighter, Division, FightingStyle};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn influencer(popularity: f32) -> Fighter {
        let mut fighter =
            create_fighter("Jake Brawl", 27, Division::Heavyweight, FightingStyle::Brawler).unwrap();
        fighter.popularity = popularity;
        fighter
    }

    #[test]
    fn test_handles_and_tags() {
        assert_eq!(handle("Canelo Alvarez"), "caneloalvarez");
        let tags = tagged_boxers("Coming for you @CaneloAlvarez and @tysonfury!");
        assert_eq!(tags, vec!["Canelo Alvarez", "Tyson Fury"]);
        assert!(tagged_boxers("no tags here").is_empty());
    }

    #[test]
    fn test_handle_drops_only_first_space() {
        assert_eq!(handle("Errol Spence Jr"), "errolspence jr");
        assert_eq!(handle("Leo Santa Cruz"), "leosanta cruz");
        assert_eq!(tagged_boxers("@errolspence jr is next"), vec!["Errol Spence Jr"]);
        assert!(tagged_boxers("@errolspencejr is next").is_empty());
        // callout roster names outside the media list are never tagged
        assert!(tagged_boxers("@yordenisugas").is_empty());
    }

    #[test]
    fn test_engagement_formula() {
        let fighter = influencer(50.0);
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let (next, post) = publish_post(&fighter, Platform::TikTok, "Fight night!", &[], &mut rng).unwrap();
        assert!((500..1000).contains(&post.likes));
        assert!(post.comments >= post.likes / 10 && post.comments < post.likes / 10 + 50);
        assert!(post.shares >= post.likes / 20 && post.shares < post.likes / 20 + 20);
        assert_eq!(next.social_media.followers, 100 + post.likes / 100);
        assert_eq!(next.social_media.total_posts, 1);
        assert_eq!(next.social_media.total_likes, post.likes);
    }

    #[test]
    fn test_empty_post_declined() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let err = publish_post(&influencer(50.0), Platform::Instagram, "   ", &[], &mut rng).unwrap_err();
        assert_eq!(err, Declined::EmptyPost);
    }

    #[test]
    fn test_tagged_boxer_replies_when_forced() {
        let fighter = influencer(100.0);
        let (_, post) = publish_post(
            &fighter,
            Platform::TikTok,
            "@terencecrawford you're next",
            &["#boxing".to_string(), " ".to_string()],
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        assert_eq!(post.hashtags, vec!["#boxing".to_string()]);
        assert_eq!(post.replies.len(), 1);
        let reply = &post.replies[0];
        assert_eq!(reply.kind, ReplyKind::Reply);
        assert_eq!(reply.author, "Terence Crawford");
        assert!(reply.message.contains("Jake Brawl"));
    }

    #[test]
    fn test_unknown_fighter_is_ignored() {
        // popularity zero never draws a reply
        let fighter = influencer(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let (_, post) =
            publish_post(&fighter, Platform::TikTok, "@tysonfury fight me", &[], &mut rng).unwrap();
        assert!(post.replies.is_empty());
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_trash_talk_fills_template() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..20 {
            let line = trash_talk(&mut rng);
            assert!(!line.contains("{b}"));
            assert!(!line.is_empty());
        }
    }
}
