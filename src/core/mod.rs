//! 한글 유니코드 처리 핵심 모듈

pub mod unicode;
