//! 어절 단위 문장 구조
//!
//! 형태소 분석기는 어절 경계를 알려주지 않으므로 [`aligner`]가 원문 공백 단위와
//! 형태소 목록을 맞춰 어절을 복원하고, [`context`]가 형태소마다 앞뒤 문맥을 찾습니다.

pub mod aligner;
pub mod context;

use crate::tagger::Morpheme;

/// 어절: 원문 공백 단위 하나를 이루는 형태소 묶음 (비어 있지 않음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eojeol {
    morphemes: Vec<Morpheme>,
}

impl Eojeol {
    /// 형태소가 없으면 None
    pub fn new(morphemes: Vec<Morpheme>) -> Option<Self> {
        if morphemes.is_empty() {
            None
        } else {
            Some(Self { morphemes })
        }
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// 형태소 표층형을 이어 붙인 원래 어절
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }
}

/// 문장: 어절 목록 + 떼어 둔 문장 끝 부호
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub eojeols: Vec<Eojeol>,
    pub terminal: Option<char>,
}

impl Sentence {
    pub fn new(eojeols: Vec<Eojeol>, terminal: Option<char>) -> Self {
        Self { eojeols, terminal }
    }

    /// (어절, 형태소) 위치의 형태소
    pub fn get(&self, i: usize, j: usize) -> Option<&Morpheme> {
        self.eojeols.get(i).and_then(|e| e.morphemes().get(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::PosTag;

    #[test]
    fn test_eojeol_rejects_empty() {
        assert!(Eojeol::new(Vec::new()).is_none());
    }

    #[test]
    fn test_eojeol_surface() {
        let e = Eojeol::new(vec![
            Morpheme::new("3", PosTag::Number),
            Morpheme::new("개", PosTag::CounterNoun),
        ])
        .unwrap();
        assert_eq!(e.surface(), "3개");
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn test_sentence_get() {
        let e = Eojeol::new(vec![Morpheme::new("안녕", PosTag::GeneralNoun)]).unwrap();
        let s = Sentence::new(vec![e], Some('.'));
        assert_eq!(s.get(0, 0).map(|m| m.surface.as_str()), Some("안녕"));
        assert!(s.get(0, 1).is_none());
        assert!(s.get(1, 0).is_none());
    }
}
