//! Profile Extractor — turns free applicant text into a `CandidateProfile`.
//!
//! Delegates language understanding to the injected oracle and owns prompt
//! construction, the lenient two-stage parse of the reply, and fallback
//! synthesis. `extract` never fails outward: any oracle failure or
//! unparseable reply yields a well-formed degraded profile, so a broken
//! extraction never blocks a candidate from being recorded and ranked.

pub mod prompts;

use tracing::warn;

use crate::models::candidate::{CandidateProfile, EducationLevel, ExtractionHints};
use crate::oracle::TextUnderstanding;

/// How much of the source text survives into `raw_text_excerpt` when the
/// oracle gives us nothing usable.
const EXCERPT_CHARS: usize = 200;

/// Extracts a normalized profile from raw applicant text.
///
/// `known_phone` and `hints` carry caller-supplied ground truth: the phone
/// fills in when the oracle omits one, and an explicit assessment score
/// always overwrites whatever the oracle read out of the text.
pub async fn extract(
    text: &str,
    known_phone: &str,
    hints: &ExtractionHints,
    oracle: &dyn TextUnderstanding,
) -> CandidateProfile {
    let prompt = prompts::EXTRACT_PROMPT_TEMPLATE.replace("{text}", text);

    let reply = match oracle.extract(prompts::EXTRACT_SYSTEM, &prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("oracle call failed, recording degraded profile: {e}");
            return degraded_profile(text, known_phone, hints);
        }
    };

    parse_reply(&reply, text, known_phone, hints)
}

/// Stage 2 of extraction: lenient parse of the oracle's raw reply, then
/// overlay of caller-known values. Pure and deterministic given the reply, so
/// repeated parsing of the same reply yields an identical profile.
pub fn parse_reply(
    reply: &str,
    text: &str,
    known_phone: &str,
    hints: &ExtractionHints,
) -> CandidateProfile {
    let Some(span) = find_object_span(reply) else {
        warn!("oracle reply contained no JSON object, recording degraded profile");
        return degraded_profile(text, known_phone, hints);
    };

    let mut profile: CandidateProfile = match serde_json::from_str(span) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("oracle reply failed to decode, recording degraded profile: {e}");
            return degraded_profile(text, known_phone, hints);
        }
    };

    if profile.phone.is_empty() {
        profile.phone = known_phone.to_string();
    }
    // Caller-supplied ground truth (e.g. a proctored test score) always wins
    // over the oracle's guess.
    if let Some(score) = hints.assessment_score {
        profile.assessment_score = Some(score);
    }

    profile
}

/// Stage 1: locate the candidate JSON span inside free text. Greedy longest
/// match between the first `{` and the last `}`, tolerating commentary the
/// oracle wraps around the object.
pub fn find_object_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

/// The low-confidence profile recorded when extraction degrades. Every field
/// carries its documented default; caller-known values still flow through.
fn degraded_profile(text: &str, known_phone: &str, hints: &ExtractionHints) -> CandidateProfile {
    CandidateProfile {
        name: hints.name.clone().unwrap_or_default(),
        email: String::new(),
        phone: known_phone.to_string(),
        skills: vec![],
        experience_years: 0.0,
        education_level: EducationLevel::Other,
        certifications: vec![],
        assessment_score: hints.assessment_score,
        summary: String::new(),
        raw_text_excerpt: truncate_chars(text, EXCERPT_CHARS),
    }
}

/// Char-boundary-safe prefix truncation (byte slicing would panic mid-glyph).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
