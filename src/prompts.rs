// Instruction templates sent to the completion endpoint. The user's raw
// text is appended as-is; no length limit is enforced locally.

pub const SYSTEM_PROMPT: &str = "Tu es un assistant de correction et de traduction.";

/// Target English variant for the translation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TranslationVariant {
    #[default]
    American,
    British,
}

impl TranslationVariant {
    /// "2" selects British English; anything else, empty input included,
    /// keeps the American default.
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "2" => TranslationVariant::British,
            _ => TranslationVariant::American,
        }
    }

    /// Language name as it appears inside the French instruction.
    pub fn language_name(self) -> &'static str {
        match self {
            TranslationVariant::American => "anglais américain",
            TranslationVariant::British => "anglais britannique",
        }
    }
}

pub fn correction_prompt(text: &str) -> String {
    format!(
        "Corrige l'orthographe et la grammaire du texte suivant en français, \
         en retournant uniquement le texte corrigé : {}",
        text
    )
}

pub fn translation_prompt(text: &str, variant: TranslationVariant) -> String {
    format!(
        "Traduis ce texte du français vers l'{}, en retournant uniquement la traduction : {}",
        variant.language_name(),
        text
    )
}
