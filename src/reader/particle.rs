//! 보조사 받침 교정
//!
//! 숫자나 영단어를 한글로 바꾸면 앞말의 받침이 달라져 조사가 어긋날 수 있다
//! ("NASA는" → "엔에이에스에이는"은 그대로지만 "3은" → "삼은", "2는" → "이는").

use crate::core::unicode::last_syllable_has_final;
use crate::lexicon::particles::jx_pair;

/// 앞말의 마지막 음절 받침에 맞춰 보조사 형태를 고름
///
/// 짝이 있는 보조사가 아니거나, 앞말이 없거나, 앞말이 완성형 한글 음절로
/// 끝나지 않으면 그대로 돌려준다.
pub fn correct_particle(particle: &str, prev_surface: Option<&str>) -> String {
    let Some((with_final, without_final)) = jx_pair(particle) else {
        return particle.to_string();
    };
    match prev_surface.and_then(last_syllable_has_final) {
        Some(true) => with_final.to_string(),
        Some(false) => without_final.to_string(),
        None => particle.to_string(),
    }
}
