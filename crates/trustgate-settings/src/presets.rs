use trustgate_domain::config::{EngineConfig, UnknownRules};

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into
/// `trustgate.toml`.
pub fn preset(profile: &str) -> EngineConfig {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => EngineConfig::standard(),
    }
}

fn strict_profile() -> EngineConfig {
    // Hardened mode: a typo'd rule name rejects instead of silently passing.
    EngineConfig {
        profile: "strict".to_string(),
        unknown_rules: UnknownRules::Strict,
        ..EngineConfig::standard()
    }
}

fn lenient_profile() -> EngineConfig {
    EngineConfig {
        profile: "lenient".to_string(),
        accept_threshold: 0.5,
        ..EngineConfig::standard()
    }
}
