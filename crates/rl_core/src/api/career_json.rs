// Career JSON API: request in, response out, for an external UI
use serde::{Deserialize, Serialize};

use crate::career::{
    ActionOutcome, Career, Notification, Platform, SocialPost, TrainingReport, WeekReport,
};
use crate::config::CareerConfig;
use crate::error::{CareerError, Declined};
use crate::fight::{FightSnapshot, TaleOfTheTape};
use crate::fighter::{Division, Fighter, FightingStyle, RankStatus, MANAGER_NAME};
use crate::negotiation::{FightOffer, OfferStatus};
use crate::opponent::RankedFighter;

/// Version of the request/response documents
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    pub schema_version: u8,
    pub request_type: CareerRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum CareerRequestType {
    /// Registers a fighter and opens a new career, replacing any current one
    CreateCareer {
        name: String,
        age: u8,
        division: String, // "Lightweight", "light_heavyweight", ...
        style: String,    // "balanced", "brawler", ...
        seed: u64,
    },

    GetFighter,
    GetRank,
    GetAdvice,
    GetRankings,

    Train { stat: String },
    AdvanceWeek,

    FightUnranked,
    AcceptChallenge { name: String },
    Callout { name: String },
    ChallengeRanked { rank: u32 },

    ProposeOffer { opponent: String },
    SendOffer { id: u32 },
    RenegotiateOffer { id: u32 },
    FightOffer { id: u32 },

    GetFight,
    ChooseAction { action_id: String },

    Post {
        #[serde(default)]
        platform: Option<String>, // tiktok when omitted
        content: String,
        #[serde(default)]
        hashtags: Vec<String>,
    },
    TrashTalk {
        #[serde(default)]
        platform: Option<String>,
    },

    DrainNotifications,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub schema_version: u8,
    pub success: bool,
    pub response_type: Option<CareerResponseType>,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum CareerResponseType {
    FighterState { week: u32, fighter: Fighter, rank: RankStatus },
    Rank { status: RankStatus, label: String },
    Advice { manager: String, text: String },
    Rankings { table: Vec<RankedFighter> },
    TrainingResult { report: TrainingReport },
    WeekResult { report: WeekReport },
    FightStarted { snapshot: FightSnapshot, tale: Option<TaleOfTheTape> },
    FightState { snapshot: Option<FightSnapshot> },
    RoundResult { outcome: ActionOutcome },
    OfferProposed { offer: FightOffer },
    OfferAnswered { id: u32, status: OfferStatus },
    Posted { post: SocialPost },
    Notifications { items: Vec<Notification> },

    /// The rules refused the request; nothing changed
    Declined { reason: String },
}

impl CareerResponse {
    fn ok(response_type: CareerResponseType) -> Self {
        Self { schema_version: SCHEMA_VERSION, success: true, response_type: Some(response_type), error_message: None }
    }

    fn declined(reason: Declined) -> Self {
        let message = reason.to_string();
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            response_type: Some(CareerResponseType::Declined { reason: message.clone() }),
            error_message: Some(message),
        }
    }

    fn error(err: CareerError) -> Self {
        match err {
            CareerError::Declined(reason) => Self::declined(reason),
            other => Self {
                schema_version: SCHEMA_VERSION,
                success: false,
                response_type: None,
                error_message: Some(other.to_string()),
            },
        }
    }
}

/// Holds the career between requests. Requests other than `CreateCareer`
/// fail until a career exists.
#[derive(Debug, Default)]
pub struct CareerApi {
    config: CareerConfig,
    career: Option<Career>,
}

impl CareerApi {
    pub fn new(config: CareerConfig) -> Self {
        Self { config, career: None }
    }

    pub fn career(&self) -> Option<&Career> {
        self.career.as_ref()
    }

    /// Main entry point. Always answers with a JSON document, never panics.
    pub fn handle_json(&mut self, request_json: &str) -> String {
        let response = match self.dispatch(request_json) {
            Ok(response_type) => CareerResponse::ok(response_type),
            Err(err) => {
                if err.is_declined() {
                    tracing::debug!(error = %err, "career request declined");
                } else {
                    tracing::warn!(error = %err, "career request failed");
                }
                CareerResponse::error(err)
            }
        };
        serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(
                r#"{{"schema_version":{SCHEMA_VERSION},"success":false,"response_type":null,"error_message":{}}}"#,
                serde_json::Value::String(e.to_string())
            )
        })
    }

    fn dispatch(&mut self, request_json: &str) -> Result<CareerResponseType, CareerError> {
        let request: CareerRequest = serde_json::from_str(request_json)?;
        if request.schema_version != SCHEMA_VERSION {
            return Err(CareerError::SchemaVersion { found: request.schema_version, expected: SCHEMA_VERSION });
        }

        match request.request_type {
            CareerRequestType::CreateCareer { name, age, division, style, seed } => {
                let division = parse_division(&division)?;
                let style = parse_style(&style)?;
                let career = Career::create(&name, age, division, style, self.config.clone(), seed)?;
                let response = fighter_state(&career);
                self.career = Some(career);
                Ok(response)
            }
            other => {
                let career = self
                    .career
                    .as_mut()
                    .ok_or_else(|| CareerError::InvalidParameter("no career has been created".into()))?;
                execute(career, other)
            }
        }
    }
}

fn fighter_state(career: &Career) -> CareerResponseType {
    CareerResponseType::FighterState { week: career.week(), fighter: career.fighter().clone(), rank: career.rank() }
}

fn fight_started(career: &Career, snapshot: FightSnapshot) -> CareerResponseType {
    let tale = career.active_fight().map(|fight| fight.tale.clone());
    CareerResponseType::FightStarted { snapshot, tale }
}

fn execute(career: &mut Career, request: CareerRequestType) -> Result<CareerResponseType, CareerError> {
    let response = match request {
        CareerRequestType::CreateCareer { .. } => {
            return Err(CareerError::InvalidParameter("CreateCareer is not a career action".into()))
        }
        CareerRequestType::GetFighter => fighter_state(career),
        CareerRequestType::GetRank => {
            let status = career.rank();
            CareerResponseType::Rank { status, label: status.label() }
        }
        CareerRequestType::GetAdvice => {
            CareerResponseType::Advice { manager: MANAGER_NAME.to_string(), text: career.advice().to_string() }
        },
        CareerRequestType::GetRankings => CareerResponseType::Rankings { table: career.rankings() },

        CareerRequestType::Train { stat } => CareerResponseType::TrainingResult { report: career.train_stat(&stat)? },
        CareerRequestType::AdvanceWeek => CareerResponseType::WeekResult { report: career.advance_week()? },

        CareerRequestType::FightUnranked => {
            let snapshot = career.fight_unranked()?;
            fight_started(career, snapshot)
        }
        CareerRequestType::AcceptChallenge { name } => {
            let snapshot = career.accept_challenge(&name)?;
            fight_started(career, snapshot)
        }
        CareerRequestType::Callout { name } => {
            let snapshot = career.callout(&name)?;
            fight_started(career, snapshot)
        }
        CareerRequestType::ChallengeRanked { rank } => {
            let snapshot = career.challenge_ranked(rank)?;
            fight_started(career, snapshot)
        }

        CareerRequestType::ProposeOffer { opponent } => {
            CareerResponseType::OfferProposed { offer: career.propose_offer(&opponent)? }
        }
        CareerRequestType::SendOffer { id } => CareerResponseType::OfferAnswered { id, status: career.send_offer(id)? },
        CareerRequestType::RenegotiateOffer { id } => {
            CareerResponseType::OfferAnswered { id, status: career.renegotiate_offer(id)? }
        }
        CareerRequestType::FightOffer { id } => {
            let snapshot = career.fight_offer(id)?;
            fight_started(career, snapshot)
        }

        CareerRequestType::GetFight => CareerResponseType::FightState { snapshot: career.fight_snapshot() },
        CareerRequestType::ChooseAction { action_id } => {
            CareerResponseType::RoundResult { outcome: career.choose_fight_action(&action_id)? }
        }

        CareerRequestType::Post { platform, content, hashtags } => {
            let platform = platform_or_default(platform.as_deref())?;
            CareerResponseType::Posted { post: career.post(platform, &content, &hashtags)? }
        }
        CareerRequestType::TrashTalk { platform } => {
            let platform = platform_or_default(platform.as_deref())?;
            CareerResponseType::Posted { post: career.trash_talk(platform)? }
        }

        CareerRequestType::DrainNotifications => {
            CareerResponseType::Notifications { items: career.drain_notifications() }
        }
    };
    Ok(response)
}

fn parse_division(division: &str) -> Result<Division, CareerError> {
    division
        .trim()
        .parse()
        .map_err(|_| CareerError::InvalidParameter(format!("unknown division: {division}")))
}

fn parse_style(style: &str) -> Result<FightingStyle, CareerError> {
    style
        .trim()
        .parse()
        .map_err(|_| CareerError::InvalidParameter(format!("unknown fighting style: {style}")))
}

fn platform_or_default(platform: Option<&str>) -> Result<Platform, CareerError> {
    platform.map_or(Ok(Platform::default()), parse_platform)
}

fn parse_platform(platform: &str) -> Result<Platform, CareerError> {
    platform
        .trim()
        .parse()
        .map_err(|_| CareerError::InvalidParameter(format!("unknown platform: {platform}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn request(api: &mut CareerApi, request_type: Value) -> Value {
        let body = json!({ "schema_version": 1, "request_type": request_type });
        serde_json::from_str(&api.handle_json(&body.to_string())).unwrap()
    }

    fn created() -> CareerApi {
        let mut api = CareerApi::default();
        let response = request(
            &mut api,
            json!({ "type": "CreateCareer", "name": "Jay Ortiz", "age": 22,
                    "division": "light_heavyweight", "style": "Slugger", "seed": 9 }),
        );
        assert_eq!(response["success"], true);
        api
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_division("Light Heavyweight").unwrap(), Division::LightHeavyweight);
        assert_eq!(parse_division("heavyweight").unwrap(), Division::Heavyweight);
        assert!(parse_division("cruiserweight").is_err());
        assert_eq!(parse_style("counterpuncher").unwrap(), FightingStyle::Counterpuncher);
        assert!(parse_style("southpaw").is_err());
        assert_eq!(parse_platform("Instagram").unwrap(), Platform::Instagram);
    }

    #[test]
    fn test_create_and_read_fighter() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "GetFighter" }));
        assert_eq!(response["schema_version"], 1);
        let state = &response["response_type"];
        assert_eq!(state["type"], "FighterState");
        assert_eq!(state["fighter"]["name"], "Jay Ortiz");
        assert_eq!(state["fighter"]["division"], "Light Heavyweight");
        assert_eq!(state["fighter"]["power"], 80.0);
        assert_eq!(state["rank"]["status"], "unranked");
    }

    #[test]
    fn test_requests_before_create_fail() {
        let mut api = CareerApi::default();
        let response = request(&mut api, json!({ "type": "AdvanceWeek" }));
        assert_eq!(response["success"], false);
        assert!(response["response_type"].is_null());
        assert!(response["error_message"].as_str().unwrap().contains("no career"));
    }

    #[test]
    fn test_bad_documents_never_panic() {
        let mut api = created();
        let garbage: Value = serde_json::from_str(&api.handle_json("{ not json")).unwrap();
        assert_eq!(garbage["success"], false);

        let response: Value = serde_json::from_str(
            &api.handle_json(r#"{ "schema_version": 2, "request_type": { "type": "GetRank" } }"#),
        )
        .unwrap();
        assert_eq!(response["success"], false);
        assert!(response["error_message"].as_str().unwrap().contains("schema version"));
    }

    #[test]
    fn test_declined_request() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "FightUnranked" }));
        assert_eq!(response["success"], false);
        assert_eq!(response["response_type"]["type"], "Declined");
        assert!(response["error_message"].as_str().unwrap().contains("recovering"));
    }

    #[test]
    fn test_training_and_week() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "Train", "stat": "Defense" }));
        assert_eq!(response["response_type"]["report"]["stat"], "defense");

        let response = request(&mut api, json!({ "type": "AdvanceWeek" }));
        assert_eq!(response["response_type"]["type"], "WeekResult");
        assert_eq!(response["response_type"]["report"]["week"], 2);
    }

    #[test]
    fn test_fight_round_trip_through_api() {
        let mut api = created();
        request(&mut api, json!({ "type": "AdvanceWeek" }));
        request(&mut api, json!({ "type": "AdvanceWeek" }));
        let response = request(&mut api, json!({ "type": "FightUnranked" }));
        assert_eq!(response["response_type"]["type"], "FightStarted");
        assert_eq!(response["response_type"]["tale"]["player"]["name"], "Jay Ortiz");

        let response = request(&mut api, json!({ "type": "ChooseAction", "action_id": "Z" }));
        assert_eq!(response["success"], false);

        let response = request(&mut api, json!({ "type": "ChooseAction", "action_id": "c" }));
        assert_eq!(response["success"], true);
        assert_eq!(response["response_type"]["outcome"]["round"]["round"], 1);
    }

    #[test]
    fn test_advice_names_the_manager() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "GetAdvice" }));
        assert_eq!(response["response_type"]["manager"], MANAGER_NAME);
        assert!(response["response_type"]["text"].as_str().unwrap().contains("fundamentals"));
    }

    #[test]
    fn test_trash_talk_request_posts() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "TrashTalk", "platform": "instagram" }));
        assert_eq!(response["success"], true);
        let post = &response["response_type"]["post"];
        assert_eq!(post["platform"], "instagram");
        assert!(!post["content"].as_str().unwrap().is_empty());

        let response = request(&mut api, json!({ "type": "GetFighter" }));
        assert_eq!(response["response_type"]["fighter"]["social_media"]["total_posts"], 1);

        let response = request(&mut api, json!({ "type": "TrashTalk", "platform": "myspace" }));
        assert_eq!(response["success"], false);
    }

    #[test]
    fn test_renegotiating_unsent_offer_declined() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "ProposeOffer", "opponent": "Miguel Rodriguez" }));
        let id = response["response_type"]["offer"]["id"].clone();
        let response = request(&mut api, json!({ "type": "RenegotiateOffer", "id": id }));
        assert_eq!(response["response_type"]["type"], "Declined");
        assert!(response["error_message"].as_str().unwrap().contains("Send the offer"));
    }

    #[test]
    fn test_post_defaults_to_tiktok() {
        let mut api = created();
        let response = request(&mut api, json!({ "type": "Post", "content": "Day one." }));
        assert_eq!(response["response_type"]["post"]["platform"], "tiktok");

        let response = request(&mut api, json!({ "type": "DrainNotifications" }));
        let items = response["response_type"]["items"].as_array().unwrap();
        assert_eq!(items.last().unwrap()["title"], "Posted Successfully!");
    }
}
