// All oracle prompt constants for the extraction module.

/// System prompt for profile extraction — enforces JSON-only output.
pub const EXTRACT_SYSTEM: &str = "You extract structured data from resumes and cover letters into JSON. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{text}` before sending.
///
/// The schema and per-field fallback rules below are the single normalization
/// contract the oracle must honor; the extractor never infers field values
/// from the text itself.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"You are a JSON extractor for applicant resumes and cover letters.
Read the provided INPUT and return ONLY the JSON object with these fields:
{
  "name": string,
  "email": string or "",
  "phone": string or "",
  "skills": [strings],
  "experience_years": number or 0,
  "education_level": one of ["none", "secondary", "diploma", "bachelors", "masters", "phd", "other"],
  "certifications": [strings] or [],
  "assessment_score": number or null,
  "summary": short string summarizing suitability,
  "raw_text_excerpt": short excerpt
}
INPUT:
"""
{text}
"""
If you cannot detect a field, return empty string, empty array, or 0/null as appropriate.
Return only valid JSON."#;
