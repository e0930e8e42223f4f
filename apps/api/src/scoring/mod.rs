//! Scoring Engine — pure, deterministic multi-factor suitability scoring.
//!
//! Five sub-scores, each normalized to [0, 1], combined by a raw weighted
//! sum and scaled to an integer. The sum is intentionally NOT normalized by
//! the weight total: weights need not sum to 1, and existing weight
//! configurations depend on the raw formula. No I/O, no shared state.

use crate::models::candidate::{CandidateProfile, EducationLevel};
use crate::models::requirements::JobRequirements;

/// Marginal value of experience stops accruing past this many years.
const EXPERIENCE_CAP_YEARS: f64 = 15.0;
/// Neutral sub-score used when a signal carries no information.
const NEUTRAL: f64 = 0.5;
/// A summary longer than this many chars counts as a substantive narrative.
const SUBSTANTIVE_SUMMARY_CHARS: usize = 20;

/// Computes the final suitability score for a profile against a job's
/// requirements: `round(100 × Σ(sub-score × weight))`.
pub fn score(profile: &CandidateProfile, requirements: &JobRequirements) -> u32 {
    let w = &requirements.weights;

    let total = skill_score(&profile.skills, &requirements.skills) * w.skills
        + experience_score(profile.experience_years) * w.experience
        + assessment_score(profile.assessment_score) * w.assessment
        + education_score(profile.education_level) * w.education
        + soft_score(&profile.summary) * w.soft;

    (total * 100.0).round() as u32
}

/// Fraction of required skills matched. Neutral 0.5 when the job lists no
/// skills, because fit cannot be judged without requirements.
///
/// A required skill matches when, case-insensitively, it is a substring of a
/// candidate skill or vice versa, which tolerates abbreviated phrasing like
/// "js" against "javascript".
fn skill_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return NEUTRAL;
    }

    let candidate: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|req| candidate.iter().any(|c| c.contains(req.as_str()) || req.contains(c.as_str())))
        .count();

    matched as f64 / required_skills.len() as f64
}

/// `min(years, 15) / 15` — thirty years scores the same as fifteen.
fn experience_score(experience_years: f64) -> f64 {
    experience_years.clamp(0.0, EXPERIENCE_CAP_YEARS) / EXPERIENCE_CAP_YEARS
}

/// Clamped to [0, 100] then scaled; an unknown score is neutral.
fn assessment_score(assessment: Option<f64>) -> f64 {
    match assessment {
        Some(value) => value.clamp(0.0, 100.0) / 100.0,
        None => NEUTRAL,
    }
}

/// Fixed rank table. `Other` (which also absorbs unrecognized input) sits at
/// the diploma tier rather than zero, because an unreadable education line is
/// not evidence of no education.
fn education_score(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::None => 0.0,
        EducationLevel::Secondary => 0.2,
        EducationLevel::Diploma => 0.4,
        EducationLevel::Bachelors => 0.6,
        EducationLevel::Masters => 0.8,
        EducationLevel::Phd => 1.0,
        EducationLevel::Other => 0.4,
    }
}

/// Narrative signal: a summary beyond 20 chars reads as substantive.
fn soft_score(summary: &str) -> f64 {
    if summary.chars().count() > SUBSTANTIVE_SUMMARY_CHARS {
        0.7
    } else {
        0.4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requirements::ScoringWeights;

    fn profile(skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            email: String::new(),
            phone: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: 0.0,
            education_level: EducationLevel::Other,
            certifications: vec![],
            assessment_score: None,
            summary: String::new(),
            raw_text_excerpt: String::new(),
        }
    }

    fn only(weight: &str) -> ScoringWeights {
        let mut w = ScoringWeights {
            skills: 0.0,
            experience: 0.0,
            assessment: 0.0,
            education: 0.0,
            soft: 0.0,
        };
        match weight {
            "skills" => w.skills = 1.0,
            "experience" => w.experience = 1.0,
            "assessment" => w.assessment = 1.0,
            "education" => w.education = 1.0,
            "soft" => w.soft = 1.0,
            _ => unreachable!(),
        }
        w
    }

    #[test]
    fn test_skill_score_neutral_when_no_requirements() {
        assert_eq!(skill_score(&["rust".to_string()], &[]), 0.5);
        assert_eq!(skill_score(&[], &[]), 0.5);
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let req = JobRequirements {
            skills: vec!["python".to_string()],
            weights: only("skills"),
        };
        assert_eq!(score(&profile(&["Python", "SQL"]), &req), 100);
    }

    #[test]
    fn test_skill_match_tolerates_abbreviations_both_ways() {
        // "js" ⊂ "javascript" and "javascript" ⊃ "js"
        let cand = ["javascript".to_string()];
        assert_eq!(skill_score(&cand, &["js".to_string()]), 1.0);
        let cand = ["js".to_string()];
        assert_eq!(skill_score(&cand, &["javascript".to_string()]), 1.0);
    }

    #[test]
    fn test_skill_score_is_matched_fraction() {
        let cand = ["rust".to_string()];
        let req = ["rust".to_string(), "kafka".to_string()];
        assert_eq!(skill_score(&cand, &req), 0.5);
    }

    #[test]
    fn test_experience_caps_at_fifteen_years() {
        assert_eq!(experience_score(30.0), experience_score(15.0));
        assert_eq!(experience_score(15.0), 1.0);
        assert_eq!(experience_score(7.5), 0.5);
        assert_eq!(experience_score(0.0), 0.0);
    }

    #[test]
    fn test_unknown_assessment_is_neutral() {
        assert_eq!(assessment_score(None), 0.5);
        let mut p = profile(&[]);
        p.assessment_score = None;
        let req = JobRequirements {
            skills: vec![],
            weights: only("assessment"),
        };
        assert_eq!(score(&p, &req), 50);
    }

    #[test]
    fn test_assessment_clamps_out_of_range_values() {
        assert_eq!(assessment_score(Some(150.0)), 1.0);
        assert_eq!(assessment_score(Some(-10.0)), 0.0);
        assert_eq!(assessment_score(Some(80.0)), 0.8);
    }

    #[test]
    fn test_education_rank_table() {
        assert_eq!(education_score(EducationLevel::None), 0.0);
        assert_eq!(education_score(EducationLevel::Secondary), 0.2);
        assert_eq!(education_score(EducationLevel::Diploma), 0.4);
        assert_eq!(education_score(EducationLevel::Bachelors), 0.6);
        assert_eq!(education_score(EducationLevel::Masters), 0.8);
        assert_eq!(education_score(EducationLevel::Phd), 1.0);
    }

    #[test]
    fn test_unrecognized_education_scores_like_other() {
        let level: EducationLevel = serde_json::from_str(r#""unknown_value""#).unwrap();
        assert_eq!(education_score(level), education_score(EducationLevel::Other));
        assert_eq!(education_score(level), 0.4);
    }

    #[test]
    fn test_soft_score_thresholds_on_summary_length() {
        assert_eq!(soft_score(""), 0.4);
        assert_eq!(soft_score("short summary"), 0.4);
        assert_eq!(soft_score("a substantive narrative about suitability"), 0.7);
    }

    #[test]
    fn test_weighted_sum_is_not_normalized() {
        // Weights summing past 1.0 can push the score past 100; that formula
        // is load-bearing for existing configurations.
        let mut p = profile(&["rust"]);
        p.experience_years = 15.0;
        let req = JobRequirements {
            skills: vec!["rust".to_string()],
            weights: ScoringWeights {
                skills: 1.0,
                experience: 1.0,
                assessment: 0.0,
                education: 0.0,
                soft: 0.0,
            },
        };
        assert_eq!(score(&p, &req), 200);
    }

    #[test]
    fn test_default_weights_full_profile() {
        let p = CandidateProfile {
            name: "Grace".to_string(),
            email: String::new(),
            phone: String::new(),
            skills: vec!["rust".to_string()],
            experience_years: 15.0,
            education_level: EducationLevel::Phd,
            certifications: vec![],
            assessment_score: Some(100.0),
            summary: "a substantive narrative about suitability".to_string(),
            raw_text_excerpt: String::new(),
        };
        let req = JobRequirements {
            skills: vec!["rust".to_string()],
            weights: ScoringWeights::default(),
        };
        // 0.4·1 + 0.25·1 + 0.2·1 + 0.1·1 + 0.05·0.7 = 0.985
        assert_eq!(score(&p, &req), 99);
    }

    #[test]
    fn test_score_is_deterministic() {
        let p = profile(&["rust", "sql"]);
        let req = JobRequirements {
            skills: vec!["rust".to_string()],
            weights: ScoringWeights::default(),
        };
        assert_eq!(score(&p, &req), score(&p, &req));
    }
}
