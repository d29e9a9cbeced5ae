// src/infrastructure/detector.rs
use crate::application::LanguageDetector;
use crate::domain::DomainError;

/// Code returned when no known script dominates the input.
pub const UNDETERMINED: &str = "und";

/// Script-range language detector.
///
/// The tool only ever needs to tell Korean prompts apart from everything
/// else, so a Unicode-block vote is sufficient: Hangul counts toward "ko",
/// kana and unified ideographs toward "ja", ASCII letters toward "en".
/// The detector is the injectable default behind the `LanguageDetector`
/// port; tests stub the port instead.
#[derive(Debug, Default)]
pub struct ScriptDetector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Hangul,
    Japanese,
    Latin,
}

fn script_of(c: char) -> Option<Script> {
    match c {
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
            Some(Script::Hangul)
        }
        '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}' => Some(Script::Japanese),
        'a'..='z' | 'A'..='Z' => Some(Script::Latin),
        _ => None,
    }
}

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<String, DomainError> {
        let mut hangul = 0usize;
        let mut japanese = 0usize;
        let mut latin = 0usize;

        for c in text.chars() {
            match script_of(c) {
                Some(Script::Hangul) => hangul += 1,
                Some(Script::Japanese) => japanese += 1,
                Some(Script::Latin) => latin += 1,
                None => {}
            }
        }

        let code = if hangul > japanese && hangul > latin {
            "ko"
        } else if japanese > hangul && japanese > latin {
            "ja"
        } else if latin > hangul && latin > japanese {
            "en"
        } else {
            UNDETERMINED
        };

        Ok(code.to_string())
    }
}
