use serde::{Deserialize, Serialize};

/// Per-signal weights for the suitability score. Each key defaults
/// independently when absent, so a caller can override just one weight.
///
/// Weights need not sum to 1: the final score is a raw weighted sum, not a
/// normalized average, and existing weight configurations depend on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_skills")]
    pub skills: f64,
    #[serde(default = "default_experience")]
    pub experience: f64,
    #[serde(default = "default_assessment")]
    pub assessment: f64,
    #[serde(default = "default_education")]
    pub education: f64,
    #[serde(default = "default_soft")]
    pub soft: f64,
}

fn default_skills() -> f64 {
    0.4
}
fn default_experience() -> f64 {
    0.25
}
fn default_assessment() -> f64 {
    0.2
}
fn default_education() -> f64 {
    0.1
}
fn default_soft() -> f64 {
    0.05
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            experience: default_experience(),
            assessment: default_assessment(),
            education: default_education(),
            soft: default_soft(),
        }
    }
}

/// Job-side scoring configuration, supplied per submission by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub weights: ScoringWeights,
}
