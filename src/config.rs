//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 분석할 수 없는 토큰 처리 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTokenPolicy {
    /// 빈 문자열로 버림
    #[default]
    Drop,
    /// 원문 그대로 유지
    Preserve,
}

/// 형태소 분석기 백엔드
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum TaggerBackend {
    /// 내장 규칙 기반 분석기
    #[default]
    Rule,
    /// 외부 mecab (mecab-ko-dic)
    Mecab {
        #[serde(default = "default_mecab_command")]
        command: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dicdir: Option<PathBuf>,
    },
}

/// kospeak 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NormalizerConfig {
    /// 기호를 읽을지 여부 (CLI 기본값)
    #[serde(default = "default_normalize_symbols")]
    pub normalize_symbols: bool,
    /// 분석 불가 토큰 처리
    #[serde(default)]
    pub unknown_tokens: UnknownTokenPolicy,
    /// 영문 옆 숫자를 영어식으로 읽을지 여부
    #[serde(default)]
    pub english_digits_near_latin: bool,
    /// 기본 영한 사전 경로 (없으면 내장 사전)
    #[serde(default)]
    pub base_dictionary: Option<PathBuf>,
    /// 사용자 사전 경로 (뒤에 올수록 우선)
    #[serde(default)]
    pub user_dictionaries: Vec<PathBuf>,
    #[serde(default)]
    pub tagger: TaggerBackend,
}

fn default_normalize_symbols() -> bool {
    true
}

fn default_mecab_command() -> PathBuf {
    PathBuf::from("mecab")
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            normalize_symbols: default_normalize_symbols(),
            unknown_tokens: UnknownTokenPolicy::default(),
            english_digits_near_latin: false,
            base_dictionary: None,
            user_dictionaries: Vec::new(),
            tagger: TaggerBackend::default(),
        }
    }
}

/// 설정 파일 경로: $KOSPEAK_CONFIG, 없으면 ~/.config/kospeak/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("KOSPEAK_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("kospeak").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> NormalizerConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            NormalizerConfig::default()
        }),
        Err(_) => NormalizerConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &NormalizerConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
