//! 기호 읽기 테이블

/// 문맥에 따라 읽는 기호: (기호, 한글 문맥 읽기, 영문 문맥 읽기)
pub const SYMBOLS: &[(&str, &str, &str)] = &[
    ("@", "골뱅이", "앳"),
    ("#", "샵", "넘버"),
    ("*", "별표", "스타"),
    ("(", "괄호열고", "괄호열고"),
    (")", "괄호닫고", "괄호닫고"),
    ("+", "더하기", "플러스"),
    ("-", "다시", "대쉬"),
    (";", "세미콜론", "세미콜론"),
    (":", "땡땡", "콜론"),
    ("/", "짝대기", "슬래쉬"),
    ("=", "는", "이퀄스"),
    ("&", "그리고", "앤드"),
    ("_", "밑줄", "언더바"),
    ("'", "따옴표", "어퍼스트로피"),
    ("\"", "쌍따옴표", "쌍따옴표"),
    (".", "점", "닷"),
];

/// 항상 단위로 읽는 기호 (통화, 온도, 퍼센트)
pub const COUNT_SYMBOLS: &[(&str, &str)] = &[
    ("$", "달러"),
    ("￦", "원"),
    ("₩", "원"),
    ("￡", "파운드"),
    ("£", "파운드"),
    ("￥", "엔"),
    ("¥", "엔"),
    ("€", "유로"),
    ("℃", "도씨"),
    ("%", "퍼센트"),
];

/// 문맥 기호 여부
pub fn is_symbol(s: &str) -> bool {
    SYMBOLS.iter().any(|(sym, _, _)| *sym == s)
}

/// 단위 기호 여부
pub fn is_count_symbol(s: &str) -> bool {
    COUNT_SYMBOLS.iter().any(|(sym, _)| *sym == s)
}

/// 한글/숫자 문맥에서의 읽기
pub fn read_symbol_kor(s: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(sym, _, _)| *sym == s)
        .map(|(_, kor, _)| *kor)
}

/// 영문 문맥에서의 읽기
pub fn read_symbol_eng(s: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(sym, _, _)| *sym == s)
        .map(|(_, _, eng)| *eng)
}

/// 단위 기호 읽기
pub fn read_count_symbol(s: &str) -> Option<&'static str> {
    COUNT_SYMBOLS
        .iter()
        .find(|(sym, _)| *sym == s)
        .map(|(_, kor)| *kor)
}
