//! 정적 읽기 테이블
//!
//! 프로세스 시작 후 한 번 만들어지고 이후에는 읽기 전용으로만 사용됩니다.
//!
//! - [`numerals`]: 한자어/고유어/영어 숫자 이름
//! - [`counters`]: 단위명사 → 숫자 읽기 방식
//! - [`symbols`]: 기호 읽기 테이블
//! - [`alphabet`]: 알파벳 낱글자 읽기
//! - [`contractions`]: 보호할 영어 축약형 목록
//! - [`particles`]: 받침에 따라 형태가 바뀌는 보조사 쌍

pub mod alphabet;
pub mod contractions;
pub mod counters;
pub mod numerals;
pub mod particles;
pub mod symbols;
