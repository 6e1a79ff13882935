//! 문자 종류 기반 경량 형태소 분석기
//!
//! 외부 사전 없이 동작합니다. 어절을 숫자/영문/한글/한자/기호 구간으로 나눈 뒤
//! 숫자 뒤의 한글은 단위명사와 조사로, 영문·기호 뒤의 한글은 조사로 쪼갭니다.
//! 한글로만 된 구간은 통째로 일반명사로 둡니다.

use crate::core::unicode::{is_compat_jamo, is_complete_hangul, is_hanja};
use crate::error::TaggerError;
use crate::lexicon::contractions::APOSTROPHE_PLACEHOLDER;
use crate::lexicon::counters::{longest_counter_prefix, COUNTER_EXCEPTIONS};
use crate::lexicon::particles::longest_particle_prefix;

use super::{Morpheme, MorphologicalTagger, PosTag};

/// 문자 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Latin,
    Hangul,
    Hanja,
    Symbol,
}

fn classify(c: char) -> CharClass {
    if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_ascii_alphabetic() || c == APOSTROPHE_PLACEHOLDER {
        CharClass::Latin
    } else if is_complete_hangul(c) || is_compat_jamo(c) {
        CharClass::Hangul
    } else if is_hanja(c) {
        CharClass::Hanja
    } else {
        CharClass::Symbol
    }
}

/// 같은 종류 문자 구간. 기호는 한 글자씩 끊는다
fn split_runs(word: &str) -> Vec<(CharClass, &str)> {
    let mut runs: Vec<(CharClass, &str)> = Vec::new();
    let mut start = 0;
    let mut current: Option<CharClass> = None;

    for (idx, c) in word.char_indices() {
        let class = classify(c);
        if let Some(prev) = current {
            if prev != class || class == CharClass::Symbol {
                runs.push((prev, &word[start..idx]));
                start = idx;
            }
        }
        current = Some(class);
    }
    if let Some(class) = current {
        runs.push((class, &word[start..]));
    }
    runs
}

fn symbol_tag(symbol: &str, before: Option<CharClass>, after: Option<CharClass>) -> PosTag {
    match symbol {
        "." if before == Some(CharClass::Digit) && after == Some(CharClass::Digit) => {
            PosTag::OtherSymbol
        }
        // 어절 끝이나 부호 연속에서만 문장 끝 부호
        "." | "?" | "!" | "。" | "？" | "！"
            if after.is_none() || after == Some(CharClass::Symbol) =>
        {
            PosTag::SentenceFinal
        }
        "." | "?" | "!" | "。" | "？" | "！" => PosTag::OtherSymbol,
        "(" | "[" | "{" | "<" | "「" | "『" => PosTag::OpenBracket,
        ")" | "]" | "}" | ">" | "」" | "』" => PosTag::CloseBracket,
        "," | "、" => PosTag::Separator,
        "…" => PosTag::Ellipsis,
        _ => PosTag::OtherSymbol,
    }
}

/// 한글 구간 전체가 조사로만 이루어지면 조사 목록으로 쪼갬
fn split_particles(text: &str) -> Option<Vec<Morpheme>> {
    let mut rest = text;
    let mut out = Vec::new();
    while !rest.is_empty() {
        let (particle, tag) = longest_particle_prefix(rest)?;
        out.push(Morpheme::new(particle, PosTag::parse(tag)));
        rest = &rest[particle.len()..];
    }
    Some(out)
}

fn push_particles_or_noun(out: &mut Vec<Morpheme>, text: &str) {
    if text.is_empty() {
        return;
    }
    match split_particles(text) {
        Some(particles) => out.extend(particles),
        None => out.push(Morpheme::new(text, PosTag::GeneralNoun)),
    }
}

/// 숫자 바로 뒤의 한글: 단위명사 + 나머지
fn push_counter_and_rest(out: &mut Vec<Morpheme>, text: &str) {
    match longest_counter_prefix(text) {
        Some(counter) => {
            let pos = if COUNTER_EXCEPTIONS.contains(counter) {
                PosTag::GeneralNoun
            } else {
                PosTag::CounterNoun
            };
            out.push(Morpheme::new(counter, pos));
            push_particles_or_noun(out, &text[counter.len()..]);
        }
        None => push_particles_or_noun(out, text),
    }
}

/// 내장 경량 분석기
#[derive(Debug, Default, Clone)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str, out: &mut Vec<Morpheme>) {
        let runs = split_runs(word);
        for (i, (class, text)) in runs.iter().enumerate() {
            let before = i.checked_sub(1).map(|j| runs[j].0);
            let after = runs.get(i + 1).map(|r| r.0);
            match class {
                CharClass::Digit => out.push(Morpheme::new(*text, PosTag::Number)),
                CharClass::Latin => out.push(Morpheme::new(*text, PosTag::Foreign)),
                CharClass::Hanja => out.push(Morpheme::new(*text, PosTag::Hanja)),
                CharClass::Symbol => {
                    out.push(Morpheme::new(*text, symbol_tag(text, before, after)))
                }
                CharClass::Hangul => match before {
                    Some(CharClass::Digit) => push_counter_and_rest(out, text),
                    Some(_) => push_particles_or_noun(out, text),
                    None => out.push(Morpheme::new(*text, PosTag::GeneralNoun)),
                },
            }
        }
    }
}

impl MorphologicalTagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>, TaggerError> {
        let mut out = Vec::new();
        for word in text.split_whitespace() {
            self.tag_word(word, &mut out);
        }
        Ok(out)
    }
}
