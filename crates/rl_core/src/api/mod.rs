// JSON boundary for an external UI

pub mod career_json;

pub use career_json::{CareerApi, CareerRequest, CareerRequestType, CareerResponse, CareerResponseType};
