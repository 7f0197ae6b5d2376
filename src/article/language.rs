use whatlang::{Lang, Script, detect, detect_script};

use crate::reader::TextDirection;

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return None;
    }

    detect(text)
        .filter(|info| info.confidence() >= MIN_CONFIDENCE)
        .map(|info| lang_to_code(info.lang()))
}

/// Right-to-left when the dominant script is Arabic or Hebrew.
pub fn script_direction(text: &str) -> TextDirection {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return TextDirection::Unset;
    }

    match detect_script(text) {
        Some(Script::Arabic | Script::Hebrew) => TextDirection::Rtl,
        Some(_) => TextDirection::Ltr,
        None => TextDirection::Unset,
    }
}

fn lang_to_code(lang: Lang) -> String {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Swe => "sv",
        Lang::Heb => "he",
        Lang::Ara => "ar",
        Lang::Pes => "fa",
        Lang::Urd => "ur",
        Lang::Hin => "hi",
        Lang::Vie => "vi",
        _ => return lang.code().to_string(),
    };
    code.to_string()
}
