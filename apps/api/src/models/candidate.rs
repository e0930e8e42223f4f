use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest education level detected in the source text.
/// Anything the oracle emits outside the known set deserializes to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    None,
    Secondary,
    Diploma,
    Bachelors,
    Masters,
    Phd,
    #[default]
    #[serde(other)]
    Other,
}

/// Normalized structured representation of one applicant's resume / cover
/// letter content.
///
/// Every field carries `#[serde(default)]` so a decode of the oracle's JSON
/// never yields a partially-typed object: a field the oracle omits gets its
/// documented default (empty string/array, 0, null, `other`). A field with the
/// wrong type fails the whole decode, which the extractor maps to the
/// degraded-profile path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Compared case-insensitively during scoring; order irrelevant.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Non-negative; 0 when unknown.
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Proctored test score in [0, 100]; `None` means unknown.
    #[serde(default)]
    pub assessment_score: Option<f64>,
    /// Short suitability narrative written by the oracle.
    #[serde(default)]
    pub summary: String,
    /// Bounded excerpt of the source text, truncated rather than re-derived.
    #[serde(default)]
    pub raw_text_excerpt: String,
}

/// Caller-known values that seed or override the oracle's extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionHints {
    pub name: Option<String>,
    /// Ground truth from a proctored assessment. When present it always wins
    /// over whatever the oracle claims to have read out of the text.
    pub assessment_score: Option<f64>,
}

/// One persisted submission: the profile plus its score and identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// First 2000 chars of the submitted text, kept for recruiter review.
    pub raw_text: String,
    pub extracted: CandidateProfile,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_level_known_values_deserialize() {
        let level: EducationLevel = serde_json::from_str(r#""masters""#).unwrap();
        assert_eq!(level, EducationLevel::Masters);
        let level: EducationLevel = serde_json::from_str(r#""phd""#).unwrap();
        assert_eq!(level, EducationLevel::Phd);
    }

    #[test]
    fn test_education_level_unrecognized_maps_to_other() {
        let level: EducationLevel = serde_json::from_str(r#""unknown_value""#).unwrap();
        assert_eq!(level, EducationLevel::Other);
    }

    #[test]
    fn test_profile_missing_fields_get_documented_defaults() {
        let profile: CandidateProfile = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.education_level, EducationLevel::Other);
        assert!(profile.certifications.is_empty());
        assert_eq!(profile.assessment_score, None);
        assert_eq!(profile.summary, "");
    }

    #[test]
    fn test_profile_empty_object_is_fully_typed() {
        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, CandidateProfile {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            skills: vec![],
            experience_years: 0.0,
            education_level: EducationLevel::Other,
            certifications: vec![],
            assessment_score: None,
            summary: String::new(),
            raw_text_excerpt: String::new(),
        });
    }

    #[test]
    fn test_profile_type_corrupt_field_fails_decode() {
        // Strict typing: a wrong-typed field rejects the whole object so the
        // extractor can fall back to the degraded profile.
        let result = serde_json::from_str::<CandidateProfile>(r#"{"skills": "not-an-array"}"#);
        assert!(result.is_err());
    }
}
