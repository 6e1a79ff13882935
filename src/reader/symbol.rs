//! 기호 읽기

use crate::core::unicode::is_hangul_only;
use crate::lexicon::symbols::{
    is_count_symbol, read_count_symbol, read_symbol_eng, read_symbol_kor,
};
use crate::tagger::{Morpheme, PosTag};

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// 기호 토큰 읽기
///
/// - 통화/퍼센트 등 단위 기호는 항상 단위로 읽음
/// - 문장 끝 부호 바로 뒤의 기호는 버림
/// - 이웃이 한글이나 숫자면 한글 문맥 읽기 ("-" → 다시)
/// - 이웃이 영문이면 영문 문맥 읽기 ("-" → 대쉬)
/// - 그 밖에는 버림
pub fn read_symbol(
    symbol: &str,
    prev: Option<&Morpheme>,
    next: Option<&Morpheme>,
    follows_sentence_final: bool,
) -> String {
    if is_count_symbol(symbol) {
        return read_count_symbol(symbol).unwrap_or_default().to_string();
    }
    if follows_sentence_final {
        return String::new();
    }

    let neighbors = [prev, next];
    let near_korean = neighbors
        .iter()
        .flatten()
        .any(|m| is_hangul_only(&m.surface) || is_digit_string(&m.surface));
    if near_korean {
        return read_symbol_kor(symbol).unwrap_or_default().to_string();
    }

    let near_latin = neighbors.iter().flatten().any(|m| m.pos == PosTag::Foreign);
    if near_latin {
        return read_symbol_eng(symbol).unwrap_or_default().to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(surface: &str, pos: PosTag) -> Morpheme {
        Morpheme::new(surface, pos)
    }

    #[test]
    fn test_count_symbol_always_read() {
        assert_eq!(read_symbol("%", None, None, false), "퍼센트");
        assert_eq!(read_symbol("$", None, None, true), "달러");
    }

    #[test]
    fn test_after_sentence_final_dropped() {
        let prev = m("안녕", PosTag::GeneralNoun);
        assert_eq!(read_symbol("@", Some(&prev), None, true), "");
    }

    #[test]
    fn test_korean_context() {
        let digits = m("010", PosTag::Number);
        assert_eq!(read_symbol("-", Some(&digits), None, false), "다시");
        let word = m("메일", PosTag::GeneralNoun);
        assert_eq!(read_symbol("@", None, Some(&word), false), "골뱅이");
    }

    #[test]
    fn test_latin_context() {
        let user = m("user", PosTag::Foreign);
        let host = m("example", PosTag::Foreign);
        assert_eq!(read_symbol("@", Some(&user), Some(&host), false), "앳");
        assert_eq!(read_symbol("/", Some(&user), None, false), "슬래쉬");
    }

    #[test]
    fn test_no_context_dropped() {
        assert_eq!(read_symbol("@", None, None, false), "");
        let hanja = m("漢", PosTag::Hanja);
        assert_eq!(read_symbol("*", Some(&hanja), None, false), "");
    }

    #[test]
    fn test_unknown_symbol_dropped() {
        let word = m("안녕", PosTag::GeneralNoun);
        assert_eq!(read_symbol("~", Some(&word), None, false), "");
    }
}
