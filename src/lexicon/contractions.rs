//! 태거가 쪼개지 않도록 보호할 영어 축약형

/// 축약형 안의 아포스트로피를 대신하는 문자 (MODIFIER LETTER APOSTROPHE)
/// 문자 범주가 글자(Lm)라서 태거가 단어를 끊지 않는다
pub const APOSTROPHE_PLACEHOLDER: char = '\u{02BC}';

/// 소문자, ASCII 아포스트로피 기준
pub const CONTRACTIONS: &[&str] = &[
    "ain't", "aren't", "can't", "couldn't", "didn't", "doesn't", "don't", "hadn't", "hasn't",
    "haven't", "isn't", "mightn't", "mustn't", "needn't", "shan't", "shouldn't", "wasn't",
    "weren't", "won't", "wouldn't", "i'm", "i've", "i'll", "i'd", "you're", "you've",
    "you'll", "you'd", "we're", "we've", "we'll", "we'd", "they're", "they've", "they'll",
    "they'd", "he's", "he'll", "he'd", "she's", "she'll", "she'd", "it's", "it'll", "that's",
    "there's", "here's", "what's", "who's", "where's", "how's", "let's", "y'all",
];

/// 보호 문자를 원래 아포스트로피로 되돌림
pub fn restore_apostrophes(text: &str) -> String {
    text.replace(APOSTROPHE_PLACEHOLDER, "'")
}
