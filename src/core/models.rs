use serde::{
    Deserialize,
    Serialize,
};

use super::AnalyseError;

/// Body of `POST {api}/analyse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    name: String,
}

impl AnalysisRequest {
    /// Trims the raw input; whitespace-only input never becomes a request.
    pub fn new(raw: &str) -> Result<Self, AnalyseError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AnalyseError::EmptyName);
        }
        Ok(Self { name: name.to_string() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    #[serde(default)]
    pub family_name_first: Option<bool>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ambiguity {
    #[serde(default)]
    pub note: String,
}

/// Successful analysis as returned by the service. Unknown fields are ignored
/// and every optional field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub language: String,
    pub ipa: String,
    #[serde(default)]
    pub macquarie: Option<String>,
    #[serde(default)]
    pub pronunciation_guidance: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub language_info: Option<LanguageInfo>,
    #[serde(default)]
    pub romanization_system: Option<String>,
    #[serde(default)]
    pub tone_marks_added: Option<bool>,
    #[serde(default)]
    pub ambiguity: Option<Ambiguity>,
    #[serde(default)]
    pub cultural_notes: Option<String>,
}

impl AnalysisResult {
    pub fn minimal(
        name: impl Into<String>,
        language: impl Into<String>,
        ipa: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            ipa: ipa.into(),
            macquarie: None,
            pronunciation_guidance: None,
            confidence: None,
            language_info: None,
            romanization_system: None,
            tone_marks_added: None,
            ambiguity: None,
            cultural_notes: None,
        }
    }
}

/// Error shape sent with non-2xx responses. `detail` is kept loose because
/// validation failures send a list here instead of a message.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.as_str()).map(str::trim).filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_trimmed() {
        let request = AnalysisRequest::new("  张伟 \n").unwrap();
        assert_eq!(request.name(), "张伟");
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"name":"张伟"}"#);

        assert_eq!(AnalysisRequest::new("   \t"), Err(AnalyseError::EmptyName));
        assert_eq!(AnalysisRequest::new(""), Err(AnalyseError::EmptyName));
    }

    #[test]
    fn test_result_tolerates_missing_and_extra_fields() {
        let body = r#"{
            "name": "Smith",
            "language": "English",
            "ipa": "/smɪθ/",
            "something_new": [1, 2, 3],
            "language_info": { "note": "Given name first." }
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.name, "Smith");
        assert!(result.macquarie.is_none());
        assert!(result.confidence.is_none());
        assert_eq!(
            result.language_info,
            Some(LanguageInfo { family_name_first: None, note: Some("Given name first.".into()) })
        );
    }

    #[test]
    fn test_result_requires_core_fields() {
        let body = r#"{ "name": "Smith", "language": "English" }"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"bad name"}"#).unwrap();
        assert_eq!(body.message(), Some("bad name"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"error":"API key not configured"}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
