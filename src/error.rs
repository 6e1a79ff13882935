//! 에러 타입
//!
//! 정규화 호출 자체는 실패하지 않습니다. 여기의 에러는 시작 시점의 초기화
//! (사전 로드, 태거 구성)와 협력 컴포넌트 호출 경계에서만 쓰입니다.

use std::path::PathBuf;

/// 영한 사전 로드/파싱 에러
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    #[error("사전 파일 읽기 오류 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 파싱 실패
    #[error("사전 JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),

    /// 사전 형식 오류
    #[error("사전 형식 오류: {0}")]
    Format(String),
}

/// 형태소 분석기 에러
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    /// 외부 분석기 프로세스 실행/입출력 실패
    #[error("형태소 분석기 실행 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 분석기가 실패 상태로 종료
    #[error("형태소 분석 실패: {0}")]
    Failed(String),

    /// 분석 결과 형식 오류
    #[error("형태소 분석 결과 형식 오류: {0}")]
    Parse(String),
}

/// 음차 변환 에러
#[derive(Debug, thiserror::Error)]
pub enum TransliterationError {
    /// 모델을 쓸 수 없음 (로드 실패 등)
    #[error("음차 모델 사용 불가: {0}")]
    Unavailable(String),

    /// 변환 실패
    #[error("음차 변환 실패: {0}")]
    Failed(String),
}

/// 정규화 컨텍스트 초기화 에러 (프로세스 시작 시에만 치명적)
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Tagger(#[from] TaggerError),
}
