//! 형태소별 앞뒤 문맥

use crate::tagger::{Morpheme, PosTag};

use super::Sentence;

/// (어절 인덱스, 형태소 인덱스)
pub type Position = (usize, usize);

/// 앞뒤 이웃의 위치
///
/// 앞: 같은 어절의 이전 형태소, 없으면 이전 어절의 마지막 형태소.
/// 뒤: 같은 어절의 다음 형태소, 없으면 다음 어절의 첫 형태소.
/// 이웃이 문장 끝 부호(SF)면 문장 경계로 보고 없는 것으로 친다.
pub fn neighbor_positions(
    sentence: &Sentence,
    i: usize,
    j: usize,
) -> (Option<Position>, Option<Position>) {
    let prev = if j > 0 {
        Some((i, j - 1))
    } else if i > 0 {
        sentence
            .eojeols
            .get(i - 1)
            .map(|e| (i - 1, e.len().saturating_sub(1)))
    } else {
        None
    };

    let next = match sentence.eojeols.get(i) {
        Some(e) if j + 1 < e.len() => Some((i, j + 1)),
        _ if i + 1 < sentence.eojeols.len() => Some((i + 1, 0)),
        _ => None,
    };

    let not_boundary = |pos: &Position| {
        sentence
            .get(pos.0, pos.1)
            .is_some_and(|m| m.pos != PosTag::SentenceFinal)
    };

    (prev.filter(not_boundary), next.filter(not_boundary))
}

/// 앞뒤 이웃 형태소
pub fn get_context(
    sentence: &Sentence,
    i: usize,
    j: usize,
) -> (Option<&Morpheme>, Option<&Morpheme>) {
    let (prev, next) = neighbor_positions(sentence, i, j);
    (
        prev.and_then(|(a, b)| sentence.get(a, b)),
        next.and_then(|(a, b)| sentence.get(a, b)),
    )
}

/// 바로 앞 형태소가 문장 끝 부호(SF)인지 (경계 생략 전의 원래 이웃 기준)
pub fn follows_sentence_final(sentence: &Sentence, i: usize, j: usize) -> bool {
    let raw_prev = if j > 0 {
        sentence.get(i, j - 1)
    } else if i > 0 {
        sentence.eojeols.get(i - 1).and_then(|e| e.morphemes().last())
    } else {
        None
    };
    raw_prev.is_some_and(|m| m.pos == PosTag::SentenceFinal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Eojeol;

    fn sentence(words: &[&[(&str, &str)]]) -> Sentence {
        let eojeols = words
            .iter()
            .filter_map(|w| {
                Eojeol::new(
                    w.iter()
                        .map(|(s, t)| Morpheme::new(*s, PosTag::parse(t)))
                        .collect(),
                )
            })
            .collect();
        Sentence::new(eojeols, None)
    }

    fn surfaces<'a>(ctx: (Option<&'a Morpheme>, Option<&'a Morpheme>)) -> (Option<&'a str>, Option<&'a str>) {
        (
            ctx.0.map(|m| m.surface.as_str()),
            ctx.1.map(|m| m.surface.as_str()),
        )
    }

    #[test]
    fn test_within_eojeol() {
        let s = sentence(&[&[("3", "SN"), ("개", "NNBC"), ("를", "JKO")]]);
        assert_eq!(surfaces(get_context(&s, 0, 1)), (Some("3"), Some("를")));
        assert_eq!(surfaces(get_context(&s, 0, 0)), (None, Some("개")));
        assert_eq!(surfaces(get_context(&s, 0, 2)), (Some("개"), None));
    }

    #[test]
    fn test_across_eojeols() {
        let s = sentence(&[
            &[("사과", "NNG")],
            &[("3", "SN")],
            &[("개", "NNBC"), ("요", "JX")],
        ]);
        assert_eq!(surfaces(get_context(&s, 1, 0)), (Some("사과"), Some("개")));
        assert_eq!(surfaces(get_context(&s, 2, 0)), (Some("3"), Some("요")));
    }

    #[test]
    fn test_sentence_final_is_boundary() {
        let s = sentence(&[&[("끝", "NNG"), (".", "SF")], &[("3", "SN")]]);
        // 앞 이웃이 SF면 없음
        assert_eq!(surfaces(get_context(&s, 1, 0)), (None, None));
        // 뒤 이웃이 SF면 없음
        assert_eq!(surfaces(get_context(&s, 0, 0)), (None, None));
    }

    #[test]
    fn test_follows_sentence_final() {
        let s = sentence(&[&[("끝", "NNG"), ("!", "SF")], &[("@", "SY")]]);
        assert!(follows_sentence_final(&s, 1, 0));
        assert!(!follows_sentence_final(&s, 0, 1));
        assert!(!follows_sentence_final(&s, 0, 0));
    }

    #[test]
    fn test_positions() {
        let s = sentence(&[&[("a", "SL")], &[("b", "SL"), ("c", "SL")]]);
        assert_eq!(neighbor_positions(&s, 1, 0), (Some((0, 0)), Some((1, 1))));
        assert_eq!(neighbor_positions(&s, 1, 1), (Some((1, 0)), None));
    }
}
