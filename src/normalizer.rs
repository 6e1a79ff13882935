//! 정규화 파이프라인
//!
//! 한 문장을 받아 다음 순서로 처리합니다:
//!
//! 1. 낱자모 오타 제거, 3칸 이상 연속 공백 정리
//! 2. 예외 전처리 ([`crate::preprocess`])
//! 3. 문장 끝 부호 하나 떼어 두기
//! 4. 완성형 한글뿐이면 그대로 반환
//! 5. 형태소 분석 → 어절 복원 → 형태소별 읽기 → 어절 단위로 합치기
//!
//! 어떤 입력이나 협력 컴포넌트 실패도 호출자에게 에러나 패닉으로 전달되지 않습니다.

use std::panic::{catch_unwind, AssertUnwindSafe};

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{NormalizerConfig, TaggerBackend};
use crate::core::unicode::{is_compat_jamo, is_hangul_only};
use crate::dictionary::Dictionary;
use crate::error::InitError;
use crate::lexicon::contractions::APOSTROPHE_PLACEHOLDER;
use crate::lexicon::symbols::{is_count_symbol, is_symbol};
use crate::preprocess::preprocess;
use crate::reader::english::read_english_word;
use crate::reader::number::read_number;
use crate::reader::particle::correct_particle;
use crate::reader::symbol::read_symbol;
use crate::sentence::aligner::align;
use crate::sentence::context::{follows_sentence_final, get_context, neighbor_positions};
use crate::sentence::Sentence;
use crate::tagger::{MecabTagger, Morpheme, MorphologicalTagger, PosTag, RuleTagger};
use crate::transliterate::{Passthrough, Transliterator};

pub use crate::config::UnknownTokenPolicy;

/// 떼어 낼 문장 끝 부호
const TERMINALS: [char; 6] = ['.', '?', '!', '。', '？', '！'];

lazy_static! {
    /// 3칸 이상 연속 공백
    static ref WIDE_SPACES: Regex = Regex::new(r" {3,}").expect("valid regex");
}

/// 정규화 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    pub unknown_tokens: UnknownTokenPolicy,
    pub english_digits_near_latin: bool,
}

impl From<&NormalizerConfig> for NormalizerOptions {
    fn from(config: &NormalizerConfig) -> Self {
        Self {
            unknown_tokens: config.unknown_tokens,
            english_digits_near_latin: config.english_digits_near_latin,
        }
    }
}

/// 정규화에 필요한 공유 자원
///
/// 시작 시 한 번 만들고 모든 호출에 참조로 넘긴다. 사전과 옵션은 읽기 전용이다.
pub struct NormalizerContext {
    tagger: Box<dyn MorphologicalTagger>,
    dictionary: Dictionary,
    transliterator: Box<dyn Transliterator>,
    options: NormalizerOptions,
}

impl Default for NormalizerContext {
    /// 내장 분석기 + 내장 사전 + 원문 유지 변환기
    fn default() -> Self {
        Self::builder().build()
    }
}

impl NormalizerContext {
    pub fn builder() -> NormalizerContextBuilder {
        NormalizerContextBuilder::default()
    }

    /// 설정으로 컨텍스트 생성
    ///
    /// 기본 사전을 읽지 못하거나 mecab을 실행할 수 없으면 에러.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, InitError> {
        let dictionary = Dictionary::with_overrides(
            config.base_dictionary.as_deref(),
            &config.user_dictionaries,
        )?;

        let tagger: Box<dyn MorphologicalTagger> = match &config.tagger {
            TaggerBackend::Rule => Box::new(RuleTagger::new()),
            TaggerBackend::Mecab { command, dicdir } => {
                let mut mecab = MecabTagger::new(command.clone());
                if let Some(dicdir) = dicdir {
                    mecab = mecab.with_dicdir(dicdir.clone());
                }
                mecab.check()?;
                Box::new(mecab)
            }
        };

        log::debug!(
            "정규화 컨텍스트 생성: 사전 {}개 항목, 분석기 {:?}",
            dictionary.len(),
            config.tagger
        );

        Ok(Self {
            tagger,
            dictionary,
            transliterator: Box::new(Passthrough),
            options: NormalizerOptions::from(config),
        })
    }

    /// 음차 변환기 교체
    pub fn with_transliterator<T: Transliterator + 'static>(mut self, transliterator: T) -> Self {
        self.transliterator = Box::new(transliterator);
        self
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// [`normalize`]의 메서드 형태
    pub fn normalize(&self, text: &str, normalize_symbols: bool) -> String {
        normalize(self, text, normalize_symbols)
    }
}

/// [`NormalizerContext`] 빌더
#[derive(Default)]
pub struct NormalizerContextBuilder {
    tagger: Option<Box<dyn MorphologicalTagger>>,
    dictionary: Option<Dictionary>,
    transliterator: Option<Box<dyn Transliterator>>,
    options: NormalizerOptions,
}

impl NormalizerContextBuilder {
    pub fn tagger<T: MorphologicalTagger + 'static>(mut self, tagger: T) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn transliterator<T: Transliterator + 'static>(mut self, transliterator: T) -> Self {
        self.transliterator = Some(Box::new(transliterator));
        self
    }

    pub fn options(mut self, options: NormalizerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn unknown_tokens(mut self, policy: UnknownTokenPolicy) -> Self {
        self.options.unknown_tokens = policy;
        self
    }

    pub fn english_digits_near_latin(mut self, enabled: bool) -> Self {
        self.options.english_digits_near_latin = enabled;
        self
    }

    pub fn build(self) -> NormalizerContext {
        NormalizerContext {
            tagger: self.tagger.unwrap_or_else(|| Box::new(RuleTagger::new())),
            dictionary: self.dictionary.unwrap_or_else(Dictionary::builtin),
            transliterator: self.transliterator.unwrap_or_else(|| Box::new(Passthrough)),
            options: self.options,
        }
    }
}

/// 낱자모 제거 + 3칸 이상 공백을 한 칸으로
///
/// 낱자모만으로 된 단어는 앞 공백과 함께 없앤다 ("안녕 ㅋㅋ 하세요" → "안녕 하세요").
fn cleanup_typos(text: &str) -> String {
    let kept: Vec<String> = text
        .split(' ')
        .filter_map(|part| {
            let stripped: String = part.chars().filter(|c| !is_compat_jamo(*c)).collect();
            if stripped.is_empty() && !part.is_empty() {
                None
            } else {
                Some(stripped)
            }
        })
        .collect();
    WIDE_SPACES.replace_all(&kept.join(" "), " ").into_owned()
}

/// 끝의 문장 부호 하나를 떼어 냄
fn split_terminal(text: &str) -> (&str, Option<char>) {
    let trimmed = text.trim_end();
    match trimmed.chars().next_back() {
        Some(c) if TERMINALS.contains(&c) => {
            let body = &trimmed[..trimmed.len() - c.len_utf8()];
            (body.trim_end(), Some(c))
        }
        _ => (trimmed, None),
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_latin_word(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
        && s.chars()
            .all(|c| c.is_ascii_alphabetic() || c == '\'' || c == APOSTROPHE_PLACEHOLDER)
}

/// 분석기 호출 (에러나 패닉이면 빈 목록)
fn tag_safely(tagger: &dyn MorphologicalTagger, text: &str) -> Vec<Morpheme> {
    match catch_unwind(AssertUnwindSafe(|| tagger.tag(text))) {
        Ok(Ok(morphemes)) => morphemes,
        Ok(Err(e)) => {
            log::warn!("형태소 분석 실패, 어절 단위로 처리: {}", e);
            Vec::new()
        }
        Err(_) => {
            log::warn!("형태소 분석기 패닉, 어절 단위로 처리");
            Vec::new()
        }
    }
}

/// (i, j) 형태소 하나를 읽기 형태로 바꿈
///
/// `done`에는 앞선 형태소들의 변환 결과가 들어 있다.
fn transform_morpheme(
    ctx: &NormalizerContext,
    sentence: &Sentence,
    position: (usize, usize),
    done: &[Vec<String>],
    normalize_symbols: bool,
) -> String {
    let (i, j) = position;
    let Some(morpheme) = sentence.get(i, j) else {
        return String::new();
    };
    let surface = morpheme.surface.as_str();

    if morpheme.pos == PosTag::SentenceFinal {
        return surface.to_string();
    }

    if is_digit_string(surface) {
        let (prev, next) = get_context(sentence, i, j);
        return read_number(surface, prev, next, ctx.options.english_digits_near_latin);
    }

    if morpheme.pos.is_symbol() || is_symbol(surface) || is_count_symbol(surface) {
        if !normalize_symbols {
            return surface.to_string();
        }
        let (prev, next) = get_context(sentence, i, j);
        return read_symbol(surface, prev, next, follows_sentence_final(sentence, i, j));
    }

    if morpheme.pos == PosTag::Foreign || is_latin_word(surface) {
        return read_english_word(surface, &ctx.dictionary, ctx.transliterator.as_ref());
    }

    if morpheme.pos == PosTag::AuxParticle {
        let (prev, _) = neighbor_positions(sentence, i, j);
        let prev_output = prev
            .and_then(|(a, b)| done.get(a).and_then(|row| row.get(b)))
            .map(String::as_str);
        return correct_particle(surface, prev_output);
    }

    if is_hangul_only(surface) {
        return surface.to_string();
    }

    match ctx.options.unknown_tokens {
        UnknownTokenPolicy::Drop => {
            log::debug!("읽을 수 없는 토큰 제거: {:?} ({})", surface, morpheme.pos);
            String::new()
        }
        UnknownTokenPolicy::Preserve => surface.to_string(),
    }
}

/// 한 문장을 읽기 형태로 정규화
///
/// `normalize_symbols`가 false면 기호 토큰을 읽지 않고 그대로 둔다.
/// 떼어 낸 문장 끝 부호는 결과 끝에 그대로 붙는다.
pub fn normalize(ctx: &NormalizerContext, text: &str, normalize_symbols: bool) -> String {
    let cleaned = cleanup_typos(text);
    let preprocessed = preprocess(&cleaned);
    let (body, terminal) = split_terminal(&preprocessed);
    let terminal_str = terminal.map(String::from).unwrap_or_default();

    if body.trim().is_empty() {
        return terminal_str;
    }
    if is_hangul_only(body) {
        return format!("{}{}", body, terminal_str);
    }

    let morphemes = tag_safely(ctx.tagger.as_ref(), body);
    let words: Vec<&str> = body.split_whitespace().collect();
    let sentence = Sentence::new(align(&words, &morphemes), terminal);

    // 현재 어절의 행도 미리 넣어 두어 같은 어절 안의 앞 형태소 결과를 볼 수 있게 함
    let mut done: Vec<Vec<String>> = Vec::with_capacity(sentence.eojeols.len());
    for (i, eojeol) in sentence.eojeols.iter().enumerate() {
        done.push(Vec::with_capacity(eojeol.len()));
        for j in 0..eojeol.len() {
            let output = transform_morpheme(ctx, &sentence, (i, j), &done, normalize_symbols);
            done[i].push(output);
        }
    }

    let spoken: Vec<String> = done
        .iter()
        .map(|row| row.concat().chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect();

    let mut result = spoken.join(" ");
    if let Some(mark) = sentence.terminal {
        result.push(mark);
    }
    result
}

/// 여러 문장을 차례로 정규화
pub fn normalize_batch(
    ctx: &NormalizerContext,
    texts: &[&str],
    normalize_symbols: bool,
) -> Vec<String> {
    texts
        .iter()
        .map(|text| normalize(ctx, text, normalize_symbols))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaggerError;

    /// 미리 정한 형태소 목록을 돌려주는 분석기
    struct Scripted(Vec<(&'static str, &'static str)>);

    impl MorphologicalTagger for Scripted {
        fn tag(&self, _text: &str) -> Result<Vec<Morpheme>, TaggerError> {
            Ok(self
                .0
                .iter()
                .map(|(s, t)| Morpheme::new(*s, PosTag::parse(t)))
                .collect())
        }
    }

    struct Broken;

    impl MorphologicalTagger for Broken {
        fn tag(&self, _text: &str) -> Result<Vec<Morpheme>, TaggerError> {
            Err(TaggerError::Failed("mecab exited".into()))
        }
    }

    struct Exploding;

    impl MorphologicalTagger for Exploding {
        fn tag(&self, _text: &str) -> Result<Vec<Morpheme>, TaggerError> {
            panic!("tagger crashed")
        }
    }

    fn ctx() -> NormalizerContext {
        NormalizerContext::default()
    }

    #[test]
    fn test_cleanup_typos() {
        assert_eq!(cleanup_typos("안녕ㅋㅋ 하세요"), "안녕 하세요");
        assert_eq!(cleanup_typos("안녕 ㅋㅋ 하세요"), "안녕 하세요");
        assert_eq!(cleanup_typos("ㅎㅎ 3개"), "3개");
        assert_eq!(cleanup_typos("ㅠㅠ"), "");
        assert_eq!(cleanup_typos("a    b"), "a b");
        assert_eq!(cleanup_typos("a  b"), "a  b");
    }

    #[test]
    fn test_split_terminal() {
        assert_eq!(split_terminal("안녕하세요 ."), ("안녕하세요", Some('.')));
        assert_eq!(split_terminal("정말?!"), ("정말?", Some('!')));
        assert_eq!(split_terminal("끝  "), ("끝", None));
        assert_eq!(split_terminal("그래요！"), ("그래요", Some('！')));
    }

    #[test]
    fn test_hangul_fast_path() {
        let ctx = NormalizerContext::builder().tagger(Exploding).build();
        assert_eq!(ctx.normalize("안녕하세요 반갑습니다.", true), "안녕하세요 반갑습니다.");
    }

    #[test]
    fn test_counter_reading() {
        assert_eq!(ctx().normalize("사과 3개", true), "사과 세개");
        assert_eq!(ctx().normalize("20명이 왔다", true), "스무명이 왔다");
        assert_eq!(ctx().normalize("3년", true), "삼년");
    }

    #[test]
    fn test_phone_number() {
        assert_eq!(
            ctx().normalize("010-2629-3115 입니다?", true),
            "영일영다시이육이구다시삼일일오 입니다?"
        );
    }

    #[test]
    fn test_symbols_disabled() {
        assert_eq!(ctx().normalize("010-1234", false), "영일영-일이삼사");
        assert_eq!(ctx().normalize("50%", false), "오십%");
    }

    #[test]
    fn test_count_symbol() {
        assert_eq!(ctx().normalize("50%", true), "오십퍼센트");
    }

    #[test]
    fn test_particle_follows_transformed_word() {
        assert_eq!(ctx().normalize("NASA은 멀다", true), "엔에이에스에이는 멀다");
        assert_eq!(ctx().normalize("3는", true), "삼은");
        assert_eq!(ctx().normalize("2은", true), "이는");
    }

    #[test]
    fn test_particle_across_eojeols() {
        let tagger = Scripted(vec![("CIA", "SL"), ("은", "JX"), ("멀다", "NNG")]);
        let ctx = NormalizerContext::builder().tagger(tagger).build();
        // 조사가 띄어 쓰여 있어도 앞 어절의 변환 결과를 본다
        assert_eq!(ctx.normalize("CIA 은 멀다", true), "씨아이에이 는 멀다");
    }

    #[test]
    fn test_jamo_removed_without_extra_spaces() {
        assert_eq!(ctx().normalize("안녕 ㅋㅋ 하세요", true), "안녕 하세요");
    }

    #[test]
    fn test_dots_inside_address_are_read() {
        assert_eq!(
            ctx().normalize("메일 user@example.com 로", true),
            "메일 user앳example닷com 로"
        );
    }

    #[test]
    fn test_scripted_tagger_mid_sentence_final() {
        let tagger = Scripted(vec![
            ("끝", "NNG"),
            (".", "SF"),
            ("@", "SY"),
            ("메일", "NNG"),
        ]);
        let ctx = NormalizerContext::builder().tagger(tagger).build();
        // SF 뒤의 기호는 버림
        assert_eq!(ctx.normalize("끝. @메일", true), "끝. 메일");
    }

    #[test]
    fn test_tagger_failure_degrades() {
        for ctx in [
            NormalizerContext::builder().tagger(Broken).build(),
            NormalizerContext::builder().tagger(Exploding).build(),
        ] {
            assert_eq!(ctx.normalize("NASA 3개.", true), "엔에이에스에이.");
        }
        let preserving = NormalizerContext::builder()
            .tagger(Broken)
            .unknown_tokens(UnknownTokenPolicy::Preserve)
            .build();
        assert_eq!(preserving.normalize("NASA 3개.", true), "엔에이에스에이 3개.");
    }

    #[test]
    fn test_unknown_policy() {
        let lenient = ctx();
        let strict = NormalizerContext::builder()
            .unknown_tokens(UnknownTokenPolicy::Preserve)
            .build();
        assert_eq!(lenient.normalize("漢字 3개", true), "세개");
        assert_eq!(strict.normalize("漢字 3개", true), "漢字 세개");
    }

    #[test]
    fn test_english_digits_option() {
        let on = NormalizerContext::builder().english_digits_near_latin(true).build();
        assert_eq!(on.normalize("season 2", true), "시즌 투");
        assert_eq!(ctx().normalize("season 2", true), "시즌 이");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(ctx().normalize("", true), "");
        assert_eq!(ctx().normalize("   ", true), "");
        assert_eq!(ctx().normalize("?", true), "?");
    }

    #[test]
    fn test_normalize_batch() {
        let out = normalize_batch(&ctx(), &["3개", "안녕"], true);
        assert_eq!(out, vec!["세개", "안녕"]);
    }
}
