use crate::api::TripRequest;

pub const NARRATOR_PERSONA: &str = "You are a helpful travel guide narrator.";
pub const ASSISTANT_PERSONA: &str = "You are a helpful travel assistant. Output only valid JSON.";

/// How the traveler is moving. Anything unrecognised adds no guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Car,
}

impl TravelMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Walking" => Some(TravelMode::Walking),
            "Car" => Some(TravelMode::Car),
            _ => None,
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            TravelMode::Walking => {
                " The traveler is walking, so point out details easily seen on foot."
            }
            TravelMode::Car => {
                " The traveler is driving, so focus on major landmarks and scenic views visible from the road."
            }
        }
    }
}

/// Build the narration instruction for a trip.
///
/// Clauses are appended in a fixed order: base request, destination,
/// travel mode, interests, tone. Input strings are used verbatim.
pub fn script_prompt(trip: &TripRequest, words: u32) -> String {
    let mut prompt = format!(
        "Write a 30 second engaging travel script (approx {} words) about {}.",
        words, trip.location
    );

    if let Some(destination) = trip.headed_towards.as_deref().filter(|d| !d.is_empty()) {
        prompt.push_str(&format!(" The traveler is headed towards {}.", destination));
    }

    if let Some(mode) = trip.travel_mode.as_deref().and_then(TravelMode::parse) {
        prompt.push_str(mode.guidance());
    }

    if !trip.interests.is_empty() {
        prompt.push_str(&format!(
            " Focus on these interests: {}.",
            trip.interests.join(", ")
        ));
    }

    prompt.push_str(
        " The tone should be excited and informative. Do not include any scene directions, just the spoken text.",
    );
    prompt
}

/// Build the instruction asking for three landmarks near `location` as a JSON array.
pub fn suggestion_prompt(location: &str) -> String {
    format!(
        "List 3 popular landmarks or interesting destinations near {}. Return only a JSON array of strings, e.g. [\"Place 1\", \"Place 2\"]",
        location
    )
}
