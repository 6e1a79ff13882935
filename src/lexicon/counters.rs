//! 단위명사(수 분류사) → 숫자 읽기 방식

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 숫자 읽기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingScheme {
    /// 한자어 (일, 이, 삼 ...)
    Sino,
    /// 고유어 (한, 두, 세 ...), 99 이하에서만 적용
    Native,
}

/// 단위명사별 읽기 방식
pub static COUNTER_SCHEMES: LazyLock<HashMap<&'static str, ReadingScheme>> = LazyLock::new(|| {
    use ReadingScheme::{Native, Sino};

    HashMap::from([
        ("개", Native),
        ("개월", Sino),
        ("권", Native),
        ("그램", Sino),
        ("그루", Native),
        ("근", Native),
        ("냥", Native),
        ("년", Sino),
        ("다발", Native),
        ("단", Sino),
        ("달러", Sino),
        ("대", Native),
        ("덩이", Native),
        ("도", Sino),
        ("되", Native),
        ("등", Sino),
        ("리", Sino),
        ("리터", Sino),
        ("말", Native),
        ("명", Native),
        ("묶음", Native),
        ("뭉치", Native),
        ("미터", Sino),
        ("번", Sino),
        ("벌", Native),
        ("봉지", Native),
        ("분", Sino),
        ("센티미터", Sino),
        ("송이", Native),
        ("승", Sino),
        ("알", Native),
        ("야드", Sino),
        ("에이커", Sino),
        ("엔", Sino),
        ("원", Sino),
        ("월", Sino),
        ("위", Sino),
        ("위안", Sino),
        ("유로", Sino),
        ("인치", Sino),
        ("일", Sino),
        ("입방미터", Sino),
        ("자루", Native),
        ("작", Native),
        ("제곱미터", Sino),
        ("주", Sino),
        ("줌", Native),
        ("차", Sino),
        ("채", Native),
        ("초", Sino),
        ("킬로그램", Sino),
        ("톤", Sino),
        ("톳", Native),
        ("통", Native),
        ("파운드", Sino),
        ("퍼센트", Sino),
        ("평", Sino),
        ("포기", Native),
        ("푼", Native),
        ("피트", Sino),
        ("헥타르", Sino),
        ("호", Sino),
        ("홉", Native),
        ("회", Sino),
        // 태거가 일반명사(NNG)로 분석하는 단위
        ("시", Native),
        ("시간", Native),
        ("살", Native),
        ("마리", Native),
        ("장", Native),
        ("잔", Native),
        ("병", Native),
        ("사람", Native),
        ("달", Native),
        ("학년", Sino),
        ("분기", Sino),
        ("기", Sino),
        ("일차", Sino),
    ])
});

/// 일반명사(NNG)로 태깅되지만 단위명사처럼 숫자 읽기를 결정하는 단어
pub static COUNTER_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "시", "시간", "살", "마리", "장", "잔", "병", "사람", "달", "학년", "분기", "기", "일차",
    ])
});

/// 단위명사의 읽기 방식 조회 (모르는 단위는 한자어)
pub fn reading_scheme_for(counter: &str) -> ReadingScheme {
    COUNTER_SCHEMES
        .get(counter)
        .copied()
        .unwrap_or(ReadingScheme::Sino)
}

/// 문자열 앞부분에서 가장 긴 단위명사를 찾음
/// 반환: 단위명사 (바이트 길이는 `len()`으로)
pub fn longest_counter_prefix(text: &str) -> Option<&'static str> {
    COUNTER_SCHEMES
        .keys()
        .filter(|counter| text.starts_with(**counter))
        .max_by_key(|counter| counter.len())
        .copied()
}
