//! 조사 목록

/// 받침 유무로 형태가 갈리는 보조사(JX) 쌍: (받침 있을 때, 받침 없을 때)
pub const JX_ALLOMORPHS: &[(&str, &str)] = &[
    ("은", "는"),
    ("이나", "나"),
    ("이라도", "라도"),
    ("이란", "란"),
    ("이야말로", "야말로"),
];

/// 내장 태거가 숫자/영문/기호 뒤에서 분리하는 조사와 품사
pub const PARTICLE_TAGS: &[(&str, &str)] = &[
    ("은", "JX"),
    ("는", "JX"),
    ("이나", "JX"),
    ("나", "JX"),
    ("이라도", "JX"),
    ("라도", "JX"),
    ("이란", "JX"),
    ("란", "JX"),
    ("이야말로", "JX"),
    ("야말로", "JX"),
    ("도", "JX"),
    ("만", "JX"),
    ("까지", "JX"),
    ("부터", "JX"),
    ("이", "JKS"),
    ("가", "JKS"),
    ("을", "JKO"),
    ("를", "JKO"),
    ("의", "JKG"),
    ("에", "JKB"),
    ("에서", "JKB"),
    ("에게", "JKB"),
    ("으로", "JKB"),
    ("로", "JKB"),
    ("와", "JC"),
    ("과", "JC"),
    ("이랑", "JC"),
    ("랑", "JC"),
];

/// 보조사 쌍 조회
/// 반환: (받침 있을 때 형태, 받침 없을 때 형태)
pub fn jx_pair(surface: &str) -> Option<(&'static str, &'static str)> {
    JX_ALLOMORPHS
        .iter()
        .find(|(with_final, without_final)| *with_final == surface || *without_final == surface)
        .copied()
}

/// 문자열 앞부분에서 가장 긴 조사를 찾음
/// 반환: (조사, 품사)
pub fn longest_particle_prefix(text: &str) -> Option<(&'static str, &'static str)> {
    PARTICLE_TAGS
        .iter()
        .filter(|(particle, _)| text.starts_with(*particle))
        .max_by_key(|(particle, _)| particle.len())
        .copied()
}
