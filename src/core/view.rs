use super::{
    AnalysisResult,
    Catalogue,
    UiState,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_confidence: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOrder {
    FamilyNameFirst,
    GivenNameFirst,
}

impl NameOrder {
    pub fn label(&self) -> &'static str {
        match self {
            NameOrder::FamilyNameFirst => "Family name first",
            NameOrder::GivenNameFirst => "Given name first",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notes {
    /// The name is one of the curated examples.
    Catalogue { culture: String, note: String, wikipedia: String },
    /// Notes supplied by the service.
    Reported(String),
}

/// Everything the results panel draws, already filtered down to the
/// sections that have something to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub name: String,
    pub language: String,
    pub ipa: String,
    pub respelling: Option<String>,
    pub guidance: Option<String>,
    pub confidence_percent: Option<u8>,
    pub name_order: Option<NameOrder>,
    pub cultural_context: Option<String>,
    pub romanization_system: Option<String>,
    pub tone_marks_added: bool,
    pub ambiguity: Option<String>,
    pub notes: Option<Notes>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

fn confidence_percent(confidence: f64) -> Option<u8> {
    if !confidence.is_finite() {
        return None;
    }
    Some((confidence * 100.0).round().clamp(0.0, 100.0) as u8)
}

impl ResultView {
    pub fn project(
        result: &AnalysisResult,
        catalogue: &Catalogue,
        options: DisplayOptions,
    ) -> Self {
        let language_info = result.language_info.as_ref();

        let notes = match catalogue.find(&result.name) {
            Some(entry) => Some(Notes::Catalogue {
                culture: entry.culture.clone(),
                note: entry.note.clone(),
                wikipedia: entry.wikipedia.clone(),
            }),
            None => non_empty(result.cultural_notes.as_ref()).map(Notes::Reported),
        };

        Self {
            name: result.name.clone(),
            language: result.language.clone(),
            ipa: result.ipa.clone(),
            respelling: non_empty(result.macquarie.as_ref()),
            guidance: non_empty(result.pronunciation_guidance.as_ref()),
            confidence_percent: if options.show_confidence {
                result.confidence.and_then(confidence_percent)
            } else {
                None
            },
            name_order: language_info.and_then(|info| info.family_name_first).map(|first| {
                if first {
                    NameOrder::FamilyNameFirst
                } else {
                    NameOrder::GivenNameFirst
                }
            }),
            cultural_context: non_empty(language_info.and_then(|info| info.note.as_ref())),
            romanization_system: non_empty(result.romanization_system.as_ref()),
            tone_marks_added: result.tone_marks_added.unwrap_or(false),
            ambiguity: non_empty(result.ambiguity.as_ref().map(|a| &a.note)),
            notes,
        }
    }

    /// `None` until a successful result exists.
    pub fn for_state(
        state: &UiState,
        catalogue: &Catalogue,
        options: DisplayOptions,
    ) -> Option<Self> {
        state.result().map(|result| Self::project(result, catalogue, options))
    }
}
