//! 형태소 분석기 인터페이스
//!
//! 정규화기는 분석기를 `MorphologicalTagger` 하나로만 봅니다. 구체 백엔드는
//! 컨텍스트를 만들 때 고르며, 실행 중에 다른 백엔드로 바꿔 보지 않습니다.
//!
//! - [`RuleTagger`]: 문자 종류와 내장 어휘만으로 나누는 경량 분석기
//! - [`MecabTagger`]: 외부 `mecab` (mecab-ko-dic) 프로세스 호출

mod mecab;
mod rule;

pub use mecab::{parse_mecab_output, MecabTagger};
pub use rule::RuleTagger;

use std::fmt;

use crate::error::TaggerError;

/// 품사 태그 (세종/mecab-ko-dic 체계)
///
/// 정규화에 쓰이는 태그만 따로 두고 나머지는 `Other`로 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// NNG 일반명사
    GeneralNoun,
    /// NNP 고유명사
    ProperNoun,
    /// NNB 의존명사
    BoundNoun,
    /// NNBC 단위명사
    CounterNoun,
    /// JX 보조사
    AuxParticle,
    /// JKS 주격조사
    SubjectParticle,
    /// JKO 목적격조사
    ObjectParticle,
    /// JKB 부사격조사
    AdverbialParticle,
    /// JKG 관형격조사
    GenitiveParticle,
    /// JC 접속조사
    ConjunctiveParticle,
    /// SF 마침표, 물음표, 느낌표
    SentenceFinal,
    /// SE 줄임표
    Ellipsis,
    /// SSO 여는 괄호
    OpenBracket,
    /// SSC 닫는 괄호
    CloseBracket,
    /// SC 구분자 (쉼표 등)
    Separator,
    /// SY 기타 기호
    OtherSymbol,
    /// SL 외국어
    Foreign,
    /// SH 한자
    Hanja,
    /// SN 숫자
    Number,
    /// 분석 불가
    Unknown,
    /// 그 밖의 태그 (원문 그대로)
    Other(String),
}

impl PosTag {
    /// 태그 문자열 파싱
    /// 복합 태그("NNG+JX")는 첫 태그만 본다
    pub fn parse(raw: &str) -> Self {
        let head = raw.split('+').next().unwrap_or("").trim();
        match head {
            "NNG" => PosTag::GeneralNoun,
            "NNP" => PosTag::ProperNoun,
            "NNB" => PosTag::BoundNoun,
            "NNBC" => PosTag::CounterNoun,
            "JX" => PosTag::AuxParticle,
            "JKS" => PosTag::SubjectParticle,
            "JKO" => PosTag::ObjectParticle,
            "JKB" => PosTag::AdverbialParticle,
            "JKG" => PosTag::GenitiveParticle,
            "JC" => PosTag::ConjunctiveParticle,
            "SF" => PosTag::SentenceFinal,
            "SE" => PosTag::Ellipsis,
            "SSO" => PosTag::OpenBracket,
            "SSC" => PosTag::CloseBracket,
            "SC" => PosTag::Separator,
            "SY" => PosTag::OtherSymbol,
            "SL" => PosTag::Foreign,
            "SH" => PosTag::Hanja,
            "SN" => PosTag::Number,
            "" | "UNKNOWN" | "UNK" => PosTag::Unknown,
            other => PosTag::Other(other.to_string()),
        }
    }

    /// 태그 문자열
    pub fn as_str(&self) -> &str {
        match self {
            PosTag::GeneralNoun => "NNG",
            PosTag::ProperNoun => "NNP",
            PosTag::BoundNoun => "NNB",
            PosTag::CounterNoun => "NNBC",
            PosTag::AuxParticle => "JX",
            PosTag::SubjectParticle => "JKS",
            PosTag::ObjectParticle => "JKO",
            PosTag::AdverbialParticle => "JKB",
            PosTag::GenitiveParticle => "JKG",
            PosTag::ConjunctiveParticle => "JC",
            PosTag::SentenceFinal => "SF",
            PosTag::Ellipsis => "SE",
            PosTag::OpenBracket => "SSO",
            PosTag::CloseBracket => "SSC",
            PosTag::Separator => "SC",
            PosTag::OtherSymbol => "SY",
            PosTag::Foreign => "SL",
            PosTag::Hanja => "SH",
            PosTag::Number => "SN",
            PosTag::Unknown => "UNKNOWN",
            PosTag::Other(s) => s,
        }
    }

    /// 문장 부호/기호 계열 (SF 제외)
    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            PosTag::Ellipsis
                | PosTag::OpenBracket
                | PosTag::CloseBracket
                | PosTag::Separator
                | PosTag::OtherSymbol
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 형태소 (표층형 + 품사)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    pub pos: PosTag,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, pos: PosTag) -> Self {
        Self {
            surface: surface.into(),
            pos,
        }
    }
}

/// 형태소 분석기
///
/// 분석기 인스턴스가 재진입 가능하다는 보장은 없다. 여러 스레드에서 쓰려면
/// 스레드마다 인스턴스를 두거나 구현체 안에서 접근을 직렬화해야 한다.
pub trait MorphologicalTagger: Send + Sync {
    /// 문장을 순서대로 형태소 목록으로 분석
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>, TaggerError>;
}

impl<T: MorphologicalTagger + ?Sized> MorphologicalTagger for Box<T> {
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>, TaggerError> {
        (**self).tag(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(PosTag::parse("NNBC"), PosTag::CounterNoun);
        assert_eq!(PosTag::parse("NNG"), PosTag::GeneralNoun);
        assert_eq!(PosTag::parse("SF"), PosTag::SentenceFinal);
        assert_eq!(PosTag::parse("SL"), PosTag::Foreign);
        assert_eq!(PosTag::parse("JX"), PosTag::AuxParticle);
        assert_eq!(PosTag::parse("UNKNOWN"), PosTag::Unknown);
        assert_eq!(PosTag::parse("VV"), PosTag::Other("VV".into()));
    }

    #[test]
    fn test_parse_composite_tag() {
        assert_eq!(PosTag::parse("NNG+JX"), PosTag::GeneralNoun);
        assert_eq!(PosTag::parse("VV+EP+EF"), PosTag::Other("VV".into()));
    }

    #[test]
    fn test_round_trip_display() {
        for raw in ["NNBC", "JX", "SF", "SY", "SN", "VCP"] {
            assert_eq!(PosTag::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_is_symbol() {
        assert!(PosTag::OtherSymbol.is_symbol());
        assert!(PosTag::OpenBracket.is_symbol());
        assert!(!PosTag::SentenceFinal.is_symbol());
        assert!(!PosTag::Foreign.is_symbol());
    }
}
