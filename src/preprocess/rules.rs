//! 태깅 전에 적용하는 개별 예외 규칙
//!
//! 각 규칙의 출력에는 같은 규칙이 다시 매칭될 패턴이 남지 않는다.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::lexicon::contractions::{APOSTROPHE_PLACEHOLDER, CONTRACTIONS};
use crate::reader::number::read_sino;

lazy_static! {
    /// 숫자 사이 쉼표 (1,234,567)
    static ref DIGIT_COMMA: Regex = Regex::new(r"\d(?:,\d)+").expect("valid regex");
    /// HH:MM
    static ref CLOCK_TIME: Regex = Regex::new(r"(\d{1,2}):(\d{2})").expect("valid regex");
    /// YYYY.M.D.
    static ref DOTTED_DATE: Regex =
        Regex::new(r"(\d{4})\.(\d{1,2})\.(\d{1,2})\.").expect("valid regex");
    /// 축약형 (대소문자 무관, 단어 단위)
    static ref CONTRACTION: Regex = Regex::new(&contraction_pattern()).expect("valid regex");
}

fn contraction_pattern() -> String {
    let alternatives: Vec<String> = CONTRACTIONS
        .iter()
        .map(|c| regex::escape(c).replace('\'', "['’]"))
        .collect();
    format!(r"(?i)\b(?:{})\b", alternatives.join("|"))
}

/// 매치마다 앞 글자와 뒷부분을 보고 치환 여부를 정함
/// `rewrite`가 None을 돌려주면 원문을 그대로 둔다
fn replace_checked<F>(re: &Regex, text: &str, rewrite: F) -> String
where
    F: Fn(&Captures, Option<char>, &str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let before = text[..m.start()].chars().next_back();
        let after = &text[m.end()..];
        out.push_str(&text[last..m.start()]);
        match rewrite(&caps, before, after) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(m.as_str()),
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn capture_number(caps: &Captures, idx: usize) -> Option<i64> {
    caps.get(idx)?.as_str().parse().ok()
}

/// 숫자와 숫자 사이의 쉼표 제거: "3,200" → "3200"
/// 뒤에 공백이 오는 쉼표 등은 그대로 둔다
pub fn strip_digit_commas(text: &str) -> String {
    DIGIT_COMMA
        .replace_all(text, |caps: &Captures| caps[0].replace(',', ""))
        .into_owned()
}

/// "HH:MM" → "<시 한자어>시 <분 한자어>분"
/// 시 0~24, 분 00~59, 뒤에 ":SS"가 붙으면 건드리지 않음
pub fn expand_clock_times(text: &str) -> String {
    replace_checked(&CLOCK_TIME, text, |caps, before, after| {
        if before.is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        let mut rest = after.chars();
        match (rest.next(), rest.next()) {
            (Some(c), _) if c.is_ascii_digit() => return None,
            (Some(':'), Some(d)) if d.is_ascii_digit() => return None,
            _ => {}
        }
        let hour = capture_number(caps, 1)?;
        let minute = capture_number(caps, 2)?;
        if !(0..=24).contains(&hour) || !(0..=59).contains(&minute) {
            return None;
        }
        Some(format!("{}시 {}분", read_sino(hour), read_sino(minute)))
    })
}

/// "YYYY.M.D." → "YYYY년 M월 D일"
/// 월 1~12, 일 1~31, 끝의 마침표 뒤에 공백이 아닌 글자가 오면 건드리지 않음
pub fn expand_dotted_dates(text: &str) -> String {
    replace_checked(&DOTTED_DATE, text, |caps, before, after| {
        if before.is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        if after.chars().next().is_some_and(|c| !c.is_whitespace()) {
            return None;
        }
        let year = capture_number(caps, 1)?;
        let month = capture_number(caps, 2)?;
        let day = capture_number(caps, 3)?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(format!("{}년 {}월 {}일", year, month, day))
    })
}

/// 축약형 안의 아포스트로피를 보호 문자로 바꿔 태거가 쪼개지 않게 함
pub fn protect_contractions(text: &str) -> String {
    CONTRACTION
        .replace_all(text, |caps: &Captures| {
            caps[0]
                .chars()
                .map(|c| if c == '\'' || c == '’' { APOSTROPHE_PLACEHOLDER } else { c })
                .collect::<String>()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_digit_commas() {
        assert_eq!(strip_digit_commas("3,200원"), "3200원");
        assert_eq!(strip_digit_commas("1,234,567"), "1234567");
        assert_eq!(strip_digit_commas("1,2,3"), "123");
        // 공백이 뒤따르는 쉼표는 유지
        assert_eq!(strip_digit_commas("사과 3, 배 2"), "사과 3, 배 2");
        assert_eq!(strip_digit_commas("안녕, 세상"), "안녕, 세상");
    }

    #[test]
    fn test_expand_clock_times() {
        assert_eq!(expand_clock_times("09:10"), "구시 십분");
        assert_eq!(expand_clock_times("09:00"), "구시 영분");
        assert_eq!(expand_clock_times("회의는 14:30에"), "회의는 십사시 삼십분에");
        assert_eq!(expand_clock_times("0:05"), "영시 오분");
    }

    #[test]
    fn test_expand_clock_times_rejects() {
        // 초가 붙은 시각
        assert_eq!(expand_clock_times("12:30:45"), "12:30:45");
        // 범위 밖
        assert_eq!(expand_clock_times("25:00"), "25:00");
        assert_eq!(expand_clock_times("10:60"), "10:60");
        // 세 자리 숫자
        assert_eq!(expand_clock_times("123:45"), "123:45");
        assert_eq!(expand_clock_times("12:345"), "12:345");
    }

    #[test]
    fn test_expand_dotted_dates() {
        assert_eq!(expand_dotted_dates("1996.6.15."), "1996년 6월 15일");
        assert_eq!(expand_dotted_dates("2024.01.05. 발표"), "2024년 1월 5일 발표");
    }

    #[test]
    fn test_expand_dotted_dates_rejects() {
        assert_eq!(expand_dotted_dates("1996.13.15."), "1996.13.15.");
        assert_eq!(expand_dotted_dates("1996.6.32."), "1996.6.32.");
        // 마침표 뒤에 글자가 붙음
        assert_eq!(expand_dotted_dates("1996.6.15.x"), "1996.6.15.x");
        // 끝 마침표 없음
        assert_eq!(expand_dotted_dates("1996.6.15"), "1996.6.15");
    }

    #[test]
    fn test_protect_contractions() {
        assert_eq!(protect_contractions("I don't know"), "I don\u{02BC}t know");
        assert_eq!(protect_contractions("IT'S fine"), "IT\u{02BC}S fine");
        assert_eq!(protect_contractions("it’s"), "it\u{02BC}s");
        // 목록에 없는 소유격은 그대로
        assert_eq!(protect_contractions("John's"), "John's");
    }

    #[test]
    fn test_rules_do_not_retrigger() {
        for input in ["3,200", "09:10", "1996.6.15.", "don't"] {
            let once = protect_contractions(&expand_dotted_dates(&expand_clock_times(
                &strip_digit_commas(input),
            )));
            let twice = protect_contractions(&expand_dotted_dates(&expand_clock_times(
                &strip_digit_commas(&once),
            )));
            assert_eq!(once, twice, "'{}' 재적용 시 결과가 달라짐", input);
        }
    }
}
