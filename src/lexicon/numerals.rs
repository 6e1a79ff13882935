//! 숫자 이름 테이블

/// 한자어 숫자 (0은 자리 읽기에서 생략되므로 빈 문자열)
pub const SINO_DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// 한 자리씩 읽을 때의 한자어 숫자 (0 = 영)
pub const SINO_DIGIT_NAMES: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// 네 자리 묶음 안의 작은 단위 (1, 10, 100, 1000)
pub const SINO_SMALL_UNITS: [&str; 4] = ["", "십", "백", "천"];

/// 네 자리 묶음 단위 (10^0, 10^4, 10^8, 10^12, 10^16)
pub const SINO_BIG_UNITS: [&str; 5] = ["", "만", "억", "조", "경"];

/// 고유어 1~9 (관형형)
pub const NATIVE_ONES: [Option<&str>; 10] = [
    None,
    Some("한"),
    Some("두"),
    Some("세"),
    Some("네"),
    Some("다섯"),
    Some("여섯"),
    Some("일곱"),
    Some("여덟"),
    Some("아홉"),
];

/// 고유어 10, 20, ..., 90
/// 20의 단독형은 "스무"로 읽기 함수에서 따로 처리
pub const NATIVE_TENS: [Option<&str>; 10] = [
    None,
    Some("열"),
    Some("스물"),
    Some("서른"),
    Some("마흔"),
    Some("쉰"),
    Some("예순"),
    Some("일흔"),
    Some("여든"),
    Some("아흔"),
];

/// 영어식 1~9 (인덱스 0은 사용 안 함)
pub const ENG_NUM_ONES: [&str; 10] = [
    "", "원", "투", "쓰리", "포", "파이브", "식스", "세븐", "에잇", "나인",
];

/// 영어식 10, 20, ..., 90 (인덱스 0 → 10)
pub const ENG_NUM_TENS: [&str; 9] = [
    "텐", "트웬티", "써티", "포티", "피프티", "식스티", "세븐티", "에잇티", "나인티",
];

/// 영어식 11~19 (인덱스 1 → 11)
pub const ENG_NUM_TEENS: [&str; 10] = [
    "", "일레븐", "투웰브", "써틴", "포틴", "피프틴", "식스틴", "세븐틴", "에잇틴", "나인틴",
];

/// 영어식으로 한 자리씩 읽기 (0은 알파벳 O처럼 "오")
pub const ENG_NUM_PER_DIGIT: [&str; 10] = [
    "오", "원", "투", "쓰리", "포", "파이브", "식스", "세븐", "에잇", "나인",
];

/// 한자어로 읽을 수 있는 최댓값. 넘으면 숫자 문자열 그대로 둔다
pub const MAX_READABLE: i64 = 9_999_999_999_999_999;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shapes() {
        assert_eq!(SINO_DIGIT_NAMES[0], "영");
        assert_eq!(SINO_DIGITS[0], "");
        assert_eq!(NATIVE_ONES[0], None);
        assert_eq!(NATIVE_TENS[2], Some("스물"));
        assert_eq!(ENG_NUM_TENS[1], "트웬티");
        assert_eq!(ENG_NUM_TEENS[2], "투웰브");
    }

    #[test]
    fn test_max_fits_big_units() {
        // 16자리 = 네 자리 묶음 4개 → "조" 단위까지
        assert_eq!(MAX_READABLE.to_string().len(), 16);
        assert!(SINO_BIG_UNITS.len() > 3);
    }
}
