//! Prompt construction and provider output parsing.
//!
//! Headlines are requested once per call as a JSON object; images are
//! requested one at a time against a shared prompt. Both builders are pure
//! so the exact text sent to the provider can be unit tested.

use serde_json::Value;

use crate::dto::{CreateCampaign, ImageContext};

// ---------------------------------------------------------------------------
// Headlines
// ---------------------------------------------------------------------------

/// Placeholder written into the user instruction when no description is given.
pub const MISSING_DESCRIPTION: &str = "-";

/// System instruction for headline generation.
///
/// Pins the output language, the 8-15 word band, and the JSON envelope the
/// parser expects. The copy is German, so the instructions are too.
pub fn headline_system_prompt(count: usize) -> String {
    format!(
        "Du bist ein erstklassiger Werbetexter für den deutschen Markt.\n\
         Generiere {count} unterschiedliche, handlungsorientierte und nutzenorientierte Headlines auf Deutsch (8-15 Wörter).\n\
         Berücksichtige Branche, Zielgruppe und Tonalität. Antworte ausschließlich im JSON-Format:\n\
         {{\"headlines\": [{{\"text\": \"...\"}}, ...]}}"
    )
}

/// User instruction describing the campaign the headlines are for.
pub fn headline_user_prompt(context: &CreateCampaign) -> String {
    format!(
        "Kampagne:\n\
         Name: {}\n\
         Branche: {}\n\
         Zielgruppe: {}\n\
         Ton: {}\n\
         Beschreibung: {}",
        context.name,
        context.industry,
        context.audience,
        context.tone,
        context.description.as_deref().unwrap_or(MISSING_DESCRIPTION),
    )
}

/// Extract at most `count` headline texts from a provider response.
///
/// Malformed JSON, a missing `headlines` key, or a non-array value all yield
/// an empty list. A candidate is kept only when it is an object with a string
/// `text`; kept texts are trimmed and empty ones dropped. Duplicates are kept.
pub fn parse_headlines(content: &str, count: usize) -> Vec<String> {
    let parsed: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    let Some(candidates) = parsed.get("headlines").and_then(Value::as_array) else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter_map(|candidate| candidate.get("text").and_then(Value::as_str))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Opening clause of every image prompt.
pub const IMAGE_PROMPT_PREAMBLE: &str =
    "Professional, brand-safe campaign imagery, cinematic lighting, photo-realistic, 16:9.";

/// Suffix appended to the shared prompt on each individual provider call.
pub const IMAGE_ASPECT_SUFFIX: &str = "Aspect ratio: 16:9 landscape.";

/// Build the prompt shared by every image in one generation request.
///
/// Absent and empty context fields add no clause. This is the value
/// persisted on each image row.
pub fn image_prompt(context: Option<&ImageContext>) -> String {
    let mut parts = vec![IMAGE_PROMPT_PREAMBLE.to_string()];
    if let Some(context) = context {
        if let Some(industry) = non_empty(context.industry.as_deref()) {
            parts.push(format!("Industry: {industry}."));
        }
        if let Some(audience) = non_empty(context.audience.as_deref()) {
            parts.push(format!("Target audience: {audience}."));
        }
        if let Some(tone) = context.tone {
            parts.push(format!("Tone: {tone}."));
        }
        if let Some(description) = non_empty(context.description.as_deref()) {
            parts.push(format!("Details: {description}."));
        }
    }
    parts.join(" ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Prompt actually sent to the provider for a single image.
pub fn image_call_prompt(shared: &str) -> String {
    format!("{shared} {IMAGE_ASPECT_SUFFIX}")
}
