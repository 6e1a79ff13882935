//! 유니코드 한글 분해/판별 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모 영역 (ㄱ ~ ㆎ)
const COMPAT_JAMO_FIRST: u32 = 0x3131;
const COMPAT_JAMO_LAST: u32 = 0x318E;

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스), 종성 0 = 받침 없음
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자가 호환용 낱자모(ㄱ-ㅎ, ㅏ-ㅣ 등)인지 확인
pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&(c as u32))
}

/// 음절에 받침(종성)이 있는지 확인
/// 완성형 한글이 아니면 None
pub fn has_final_consonant(c: char) -> Option<bool> {
    decompose_syllable(c).map(|(_, _, jong)| jong != 0)
}

/// 문자열의 마지막 글자 받침 여부
/// 빈 문자열이거나 마지막 글자가 완성형 한글이 아니면 None
pub fn last_syllable_has_final(text: &str) -> Option<bool> {
    text.chars().last().and_then(has_final_consonant)
}

/// 공백을 제외한 모든 문자가 완성형 한글인지 확인 (빈 문자열은 false)
pub fn is_hangul_only(text: &str) -> bool {
    let mut seen = false;
    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        if !is_complete_hangul(c) {
            return false;
        }
        seen = true;
    }
    seen
}

/// 한자(CJK 통합 한자) 여부
pub fn is_hanja(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF)
}
