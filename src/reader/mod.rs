//! 토큰 종류별 읽기 규칙
//!
//! 각 함수는 형태소 하나와 앞뒤 문맥만 보고 읽는 방법을 정하며, 실패하지 않습니다.
//! 읽을 수 없는 입력은 원문이나 빈 문자열로 돌려줍니다.

pub mod english;
pub mod number;
pub mod particle;
pub mod symbol;
