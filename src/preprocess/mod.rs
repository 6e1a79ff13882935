//! 태깅 전 예외 전처리
//!
//! 원문에 정해진 순서대로 규칙을 적용합니다:
//!
//! 1. 숫자 사이 쉼표 제거
//! 2. 시각(HH:MM) 풀어쓰기
//! 3. 날짜(YYYY.M.D.) 풀어쓰기
//! 4. 영어 축약형 보호
//!
//! 순서가 바뀌면 앞 규칙의 입력이 망가집니다 (예: 날짜 규칙이 쉼표 규칙보다
//! 먼저 돌면 "2,024.1.1."이 날짜로 인식되지 않음).

pub mod rules;

/// 이름이 붙은 전처리 규칙
#[derive(Debug, Clone, Copy)]
pub struct ExceptionRule {
    pub name: &'static str,
    rewrite: fn(&str) -> String,
}

impl ExceptionRule {
    pub const fn new(name: &'static str, rewrite: fn(&str) -> String) -> Self {
        Self { name, rewrite }
    }

    pub fn apply(&self, text: &str) -> String {
        (self.rewrite)(text)
    }
}

/// 적용 순서대로 나열된 규칙
pub static RULES: [ExceptionRule; 4] = [
    ExceptionRule::new("digit_commas", rules::strip_digit_commas),
    ExceptionRule::new("clock_times", rules::expand_clock_times),
    ExceptionRule::new("dotted_dates", rules::expand_dotted_dates),
    ExceptionRule::new("contractions", rules::protect_contractions),
];

/// 모든 규칙을 순서대로 적용
pub fn preprocess(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |acc, rule| {
        let next = rule.apply(&acc);
        if next != acc {
            log::debug!("전처리 규칙 {}: {:?} -> {:?}", rule.name, acc, next);
        }
        next
    })
}
