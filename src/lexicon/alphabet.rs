//! 알파벳 낱글자 읽기

/// a ~ z 읽기
pub const ALPHA_READ: [&str; 26] = [
    "에이", "비", "씨", "디", "이", "에프", "지", "에이치", "아이", "제이", "케이", "엘", "엠",
    "엔", "오", "피", "큐", "알", "에스", "티", "유", "브이", "더블유", "엑스", "와이", "제트",
];

/// ASCII 알파벳 한 글자 읽기 (대소문자 무관)
pub fn read_letter(c: char) -> Option<&'static str> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
    Some(ALPHA_READ[idx])
}
