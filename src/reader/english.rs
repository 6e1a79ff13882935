//! 영단어 읽기
//!
//! 사전 → 약어 → 음차 변환기 순서로 시도한다.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::dictionary::Dictionary;
use crate::lexicon::alphabet::read_letter;
use crate::lexicon::contractions::{restore_apostrophes, APOSTROPHE_PLACEHOLDER};
use crate::transliterate::Transliterator;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// 한 글자씩 읽어야 하는 약어인지 판단
///
/// - 대문자 한 글자
/// - 알파벳이 모두 대문자 (NASA, CIA)
/// - 모음(a e i o u)이 하나도 없음 (mp3, pdf)
pub fn is_acronym(term: &str) -> bool {
    let mut letters = term.chars().filter(|c| c.is_alphabetic()).peekable();
    if letters.peek().is_none() {
        return false;
    }
    if letters.clone().all(|c| c.is_uppercase()) {
        return true;
    }
    letters.all(|c| !VOWELS.contains(&c.to_ascii_lowercase()))
}

/// 알파벳을 한 글자씩 읽음, 알파벳이 아닌 문자는 그대로
pub fn read_acronym(term: &str) -> String {
    term.chars()
        .filter(|c| *c != '\'' && *c != APOSTROPHE_PLACEHOLDER)
        .map(|c| match read_letter(c) {
            Some(reading) => reading.to_string(),
            None => c.to_string(),
        })
        .collect()
}

/// 영단어 토큰 읽기
///
/// 사전에 있으면 사전 발음, 약어면 한 글자씩, 아니면 음차 변환기에 맡긴다.
/// 변환기가 실패하거나 패닉하거나 빈 결과를 내면 원래 토큰을 돌려준다.
pub fn read_english_word(
    token: &str,
    dictionary: &Dictionary,
    transliterator: &dyn Transliterator,
) -> String {
    let word = restore_apostrophes(token);

    if let Some(reading) = dictionary.lookup(&word) {
        return reading.to_string();
    }

    if is_acronym(&word) {
        return read_acronym(&word);
    }

    match catch_unwind(AssertUnwindSafe(|| transliterator.transliterate(&word))) {
        Ok(Ok(reading)) if !reading.trim().is_empty() => reading,
        Ok(Ok(_)) => {
            log::warn!("음차 결과가 비어 있음, 원문 유지: {}", word);
            word
        }
        Ok(Err(e)) => {
            log::warn!("음차 변환 실패, 원문 유지 ({}): {}", word, e);
            word
        }
        Err(_) => {
            log::warn!("음차 변환기 패닉, 원문 유지: {}", word);
            word
        }
    }
}
