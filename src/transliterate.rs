//! 영어 음차 변환기 인터페이스
//!
//! 사전에도 없고 약어도 아닌 영단어를 한글 발음으로 옮기는 마지막 수단입니다.
//! 신경망 모델처럼 무거운 구현은 [`LazyTransliterator`]로 감싸 첫 호출 때 한 번만
//! 로드합니다.

use std::fmt;
use std::sync::OnceLock;

use crate::error::TransliterationError;

/// 영어 → 한글 음차 변환기
///
/// 구현체는 재진입 가능하다는 보장이 없다. 호출자가 실패를 흡수하므로 에러를
/// 그대로 돌려주면 된다.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, token: &str) -> Result<String, TransliterationError>;
}

impl<T: Transliterator + ?Sized> Transliterator for Box<T> {
    fn transliterate(&self, token: &str) -> Result<String, TransliterationError> {
        (**self).transliterate(token)
    }
}

/// 입력을 그대로 돌려주는 변환기 (모델이 없을 때 기본값)
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transliterator for Passthrough {
    fn transliterate(&self, token: &str) -> Result<String, TransliterationError> {
        Ok(token.to_string())
    }
}

type Loader =
    Box<dyn Fn() -> Result<Box<dyn Transliterator>, TransliterationError> + Send + Sync>;

/// 첫 호출 때 로더를 한 번 실행하는 변환기
///
/// 로드에 실패하면 실패 상태를 기억하고, 이후 호출은 모두
/// `TransliterationError::Unavailable`을 돌려준다.
pub struct LazyTransliterator {
    loader: Loader,
    model: OnceLock<Option<Box<dyn Transliterator>>>,
}

impl LazyTransliterator {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Transliterator>, TransliterationError> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            model: OnceLock::new(),
        }
    }

    /// 로드를 시도했고 성공했는지
    pub fn is_loaded(&self) -> bool {
        matches!(self.model.get(), Some(Some(_)))
    }

    fn model(&self) -> Option<&dyn Transliterator> {
        self.model
            .get_or_init(|| match (self.loader)() {
                Ok(model) => {
                    log::debug!("음차 모델 로드 완료");
                    Some(model)
                }
                Err(e) => {
                    log::warn!("음차 모델 로드 실패, 원문 유지로 대체: {}", e);
                    None
                }
            })
            .as_deref()
    }
}

impl Transliterator for LazyTransliterator {
    fn transliterate(&self, token: &str) -> Result<String, TransliterationError> {
        match self.model() {
            Some(model) => model.transliterate(token),
            None => Err(TransliterationError::Unavailable(
                "모델 로드에 실패했습니다".into(),
            )),
        }
    }
}

impl fmt::Debug for LazyTransliterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.model.get() {
            None => "pending",
            Some(Some(_)) => "loaded",
            Some(None) => "failed",
        };
        f.debug_struct("LazyTransliterator")
            .field("state", &state)
            .finish()
    }
}
