//! 형태소 목록 → 어절 복원

use crate::tagger::{Morpheme, PosTag};

use super::Eojeol;

/// 공백으로 나눈 원문 단어와 형태소 목록을 맞춰 어절 목록을 만든다
///
/// 형태소를 차례로 현재 어절에 담으면서, 지금까지 담은 표층형에 다음 형태소를
/// 이어 붙인 문자열이 여전히 현재 단어 안에 들어 있는지 본다. 들어 있지 않으면
/// 현재 어절을 닫고 다음 단어로 넘어간다.
///
/// 형태소 목록이 비어 있으면 단어마다 분석 불가 형태소 하나짜리 어절을 만든다.
pub fn align(words: &[&str], morphemes: &[Morpheme]) -> Vec<Eojeol> {
    if morphemes.is_empty() {
        return words
            .iter()
            .filter_map(|w| Eojeol::new(vec![Morpheme::new(*w, PosTag::Unknown)]))
            .collect();
    }

    let mut eojeols = Vec::with_capacity(words.len());
    let mut bucket: Vec<Morpheme> = Vec::new();
    let mut joined = String::new();
    let mut count = 0;

    for (k, morpheme) in morphemes.iter().enumerate() {
        bucket.push(morpheme.clone());
        joined.push_str(&morpheme.surface);

        let close = match morphemes.get(k + 1) {
            None => true,
            // 마지막 단어에서는 남은 형태소를 모두 담는다
            Some(_) if count + 1 >= words.len() => false,
            Some(next) => {
                let candidate = format!("{}{}", joined, next.surface);
                !words[count].contains(candidate.as_str())
            }
        };

        if close {
            if let Some(eojeol) = Eojeol::new(std::mem::take(&mut bucket)) {
                eojeols.push(eojeol);
            }
            joined.clear();
            count += 1;
        }
    }

    eojeols
}
