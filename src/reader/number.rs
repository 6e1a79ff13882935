//! 숫자 읽기: 한자어, 고유어, 한 자리씩, 영어식
//!
//! 숫자 토큰 하나와 앞뒤 형태소를 보고 읽기 방식을 고릅니다:
//!
//! 1. 뒤가 단위명사면 단위명사가 정한 방식 (고유어는 99 이하에서만)
//! 2. 앞이나 뒤가 기호면 한 자리씩 (전화번호, 소수, 식별번호)
//! 3. (옵션) 앞이나 뒤가 영문이면 영어식
//! 4. 나머지는 한자어

use crate::lexicon::counters::{reading_scheme_for, ReadingScheme, COUNTER_EXCEPTIONS};
use crate::lexicon::numerals::{
    ENG_NUM_ONES, ENG_NUM_PER_DIGIT, ENG_NUM_TEENS, ENG_NUM_TENS, MAX_READABLE, NATIVE_ONES,
    NATIVE_TENS, SINO_BIG_UNITS, SINO_DIGITS, SINO_DIGIT_NAMES, SINO_SMALL_UNITS,
};
use crate::lexicon::symbols::is_symbol;
use crate::tagger::{Morpheme, PosTag};

/// 한자어 읽기
///
/// 네 자리씩 끊어 읽고 묶음마다 만/억/조 단위를 붙인다.
/// 십/백/천 자리의 1은 "일"을 생략한다 (10 → 십, 1592 → 천오백구십이).
///
/// ```
/// use kospeak::reader::number::read_sino;
/// assert_eq!(read_sino(1592), "천오백구십이");
/// assert_eq!(read_sino(0), "영");
/// assert_eq!(read_sino(-3), "마이너스 삼");
/// ```
pub fn read_sino(n: i64) -> String {
    if n == 0 {
        return "영".to_string();
    }
    if n < 0 {
        return match n.checked_neg() {
            Some(pos) => format!("마이너스 {}", read_sino(pos)),
            None => n.to_string(),
        };
    }
    if n > MAX_READABLE {
        return n.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;
    let mut group_index = 0;

    while rest > 0 {
        let mut group = rest % 10000;
        rest /= 10000;

        if group != 0 {
            let mut small_parts: Vec<String> = Vec::new();
            let mut pos = 0;
            while group > 0 {
                let digit = (group % 10) as usize;
                group /= 10;
                if digit != 0 {
                    if pos > 0 && digit == 1 {
                        small_parts.push(SINO_SMALL_UNITS[pos].to_string());
                    } else {
                        small_parts.push(format!("{}{}", SINO_DIGITS[digit], SINO_SMALL_UNITS[pos]));
                    }
                }
                pos += 1;
            }
            small_parts.reverse();
            parts.push(small_parts.concat() + SINO_BIG_UNITS[group_index]);
        }
        group_index += 1;
    }

    parts.reverse();
    parts.concat()
}

/// 고유어 읽기 (0~99), 범위 밖이거나 대응 단어가 없으면 한자어
pub fn read_native(n: i64) -> String {
    if !(0..100).contains(&n) {
        return read_sino(n);
    }
    if n == 20 {
        return "스무".to_string();
    }

    let tens = (n / 10) as usize;
    let ones = (n % 10) as usize;

    let word = match (tens, ones) {
        (0, _) => NATIVE_ONES[ones].map(str::to_string),
        (_, 0) => NATIVE_TENS[tens].map(str::to_string),
        _ => NATIVE_TENS[tens]
            .zip(NATIVE_ONES[ones])
            .map(|(t, o)| format!("{}{}", t, o)),
    };
    word.unwrap_or_else(|| read_sino(n))
}

/// 한 자리씩 읽기: "010" → "영일영"
/// 숫자가 아닌 글자는 그대로 둔다
pub fn read_digits(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => SINO_DIGIT_NAMES[d as usize].to_string(),
            None => c.to_string(),
        })
        .collect()
}

/// 영어식 읽기: 1~99는 "원", "트웬티원" 식으로, 100 이상은 한 자리씩
pub fn read_english_number(n: i64) -> String {
    if n == 0 {
        return "제로".to_string();
    }
    if n < 0 {
        return match n.checked_neg() {
            Some(pos) => format!("마이너스 {}", read_english_number(pos)),
            None => n.to_string(),
        };
    }
    if n < 10 {
        return ENG_NUM_ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = (n / 10) as usize;
        let ones = (n % 10) as usize;
        return match (tens, ones) {
            (1, 0) => ENG_NUM_TENS[0].to_string(),
            (1, _) => ENG_NUM_TEENS[ones].to_string(),
            _ => format!("{}{}", ENG_NUM_TENS[tens - 1], ENG_NUM_ONES[ones]),
        };
    }
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ENG_NUM_PER_DIGIT[d as usize])
        .collect()
}

/// 단위명사에 맞춰 읽기 (모르는 단위는 한자어)
pub fn read_with_counter(n: i64, counter: &str) -> String {
    match reading_scheme_for(counter) {
        ReadingScheme::Native if n < 100 => read_native(n),
        _ => read_sino(n),
    }
}

/// 단위명사 역할을 하는 형태소인지 확인
pub fn is_counter(m: &Morpheme) -> bool {
    match m.pos {
        PosTag::CounterNoun => true,
        PosTag::GeneralNoun => COUNTER_EXCEPTIONS.contains(m.surface.as_str()),
        _ => false,
    }
}

/// 숫자 토큰 읽기
///
/// `english_near_latin`이 켜져 있으면 영문 토큰 옆의 숫자를 영어식으로 읽는다.
/// 한자어로 읽을 수 없을 만큼 큰 수는 숫자 문자열 그대로 돌려준다.
pub fn read_number(
    digits: &str,
    prev: Option<&Morpheme>,
    next: Option<&Morpheme>,
    english_near_latin: bool,
) -> String {
    let parsed = digits.parse::<i64>().ok();

    if let (Some(n), Some(counter)) = (parsed, next.filter(|m| is_counter(m))) {
        return read_with_counter(n, &counter.surface);
    }

    let near_symbol = [prev, next]
        .iter()
        .flatten()
        .any(|m| is_symbol(&m.surface));
    if near_symbol {
        return read_digits(digits);
    }

    let Some(n) = parsed else {
        return digits.to_string();
    };

    if english_near_latin && [prev, next].iter().flatten().any(|m| m.pos == PosTag::Foreign) {
        return read_english_number(n);
    }

    read_sino(n)
}
