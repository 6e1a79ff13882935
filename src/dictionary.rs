//! 영어 → 한글 발음 사전
//!
//! 기본 사전에 사용자 사전을 차례로 덮어써서 만듭니다 (키가 겹치면 사용자 사전 우선).
//! 키는 소문자로 저장하고 조회도 소문자로 하므로 대소문자를 가리지 않습니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::error::DictionaryError;

/// 바이너리에 포함된 기본 사전
const BUILTIN_JSON: &str = include_str!("../data/base_eng2kor_dict.json");

/// 영한 발음 사전
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// 빈 사전
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 기본 사전
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_JSON) {
            Ok(dict) => dict,
            Err(e) => {
                log::error!("내장 사전 파싱 실패: {}", e);
                Self::new()
            }
        }
    }

    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "apple": "애플", "meeting": "미팅" }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 사전 생성
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;
        Self::from_json_value(&value)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, DictionaryError> {
        let obj = value
            .as_object()
            .ok_or_else(|| DictionaryError::Format("최상위 값이 객체가 아닙니다".into()))?;

        let mut dict = Self::new();
        for (key, val) in obj {
            let reading = val.as_str().ok_or_else(|| {
                DictionaryError::Format(format!("문자열이 아닌 값: {}", key))
            })?;
            dict.insert(key, reading);
        }
        Ok(dict)
    }

    /// 기본 사전 + 사용자 사전들
    ///
    /// 기본 사전 경로가 없으면 내장 사전을 쓴다. 기본 사전을 읽지 못하면 에러,
    /// 사용자 사전 파일이 없으면 경고만 남기고 건너뛴다.
    pub fn with_overrides<P: AsRef<Path>>(
        base: Option<&Path>,
        user_paths: &[P],
    ) -> Result<Self, DictionaryError> {
        let mut dict = match base {
            Some(path) => Self::load(path)?,
            None => Self::builtin(),
        };
        for path in user_paths {
            let path = path.as_ref();
            match Self::load(path) {
                Ok(overrides) => dict.merge(overrides),
                Err(DictionaryError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                    log::warn!("사용자 사전 파일을 찾을 수 없습니다: {}", path.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(dict)
    }

    /// 다른 사전을 덮어씀 (겹치는 키는 `overrides` 우선)
    pub fn merge(&mut self, overrides: Dictionary) {
        self.entries.extend(overrides.entries);
    }

    pub fn insert(&mut self, surface: &str, reading: &str) {
        self.entries
            .insert(surface.to_lowercase(), reading.to_string());
    }

    /// 대소문자 무관 조회
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        self.entries
            .get(&surface.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
