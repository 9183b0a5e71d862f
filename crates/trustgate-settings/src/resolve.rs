use crate::model::{PolicyConfig, TrustgateConfigV1};
use crate::presets;
use trustgate_domain::config::{EngineConfig, UnknownRules};
use trustgate_domain::model::Policy;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub accept_threshold: Option<f64>,
    pub unknown_rules: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EngineConfig,
}

pub fn resolve_config(
    cfg: TrustgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    // Threshold
    if let Some(threshold) = overrides.accept_threshold.or(cfg.accept_threshold) {
        validate_threshold(threshold)?;
        effective.accept_threshold = threshold;
    }

    // Unknown-rule handling
    if let Some(mode) = overrides
        .unknown_rules
        .as_deref()
        .or(cfg.unknown_rules.as_deref())
    {
        effective.unknown_rules = parse_unknown_rules(mode)?;
    }

    // Config-defined default policy set replaces the builtin pair.
    if !cfg.policies.is_empty() {
        effective.default_policies = cfg.policies.iter().map(policy_from_config).collect();
    }

    Ok(ResolvedConfig { effective })
}

fn policy_from_config(config: &PolicyConfig) -> Policy {
    Policy {
        id: config.id.clone().unwrap_or_else(|| config.name.clone()),
        name: config.name.clone(),
        description: config.description.clone().unwrap_or_default(),
        rules: config.rules.clone(),
    }
}

fn validate_threshold(value: f64) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("accept_threshold must be within [0.0, 1.0], got {value}");
    }
    Ok(())
}

fn parse_unknown_rules(v: &str) -> anyhow::Result<UnknownRules> {
    match v {
        "permissive" => Ok(UnknownRules::Permissive),
        "strict" => Ok(UnknownRules::Strict),
        other => anyhow::bail!("unknown unknown_rules mode: {other} (expected permissive|strict)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use serde_json::json;

    #[test]
    fn empty_config_resolves_to_standard() {
        let resolved =
            resolve_config(TrustgateConfigV1::default(), Overrides::default()).expect("resolve");
        let effective = resolved.effective;

        assert_eq!(effective.profile, "standard");
        assert_eq!(effective.accept_threshold, 0.7);
        assert_eq!(effective.unknown_rules, UnknownRules::Permissive);
        assert_eq!(effective.default_policies.len(), 2);
    }

    #[test]
    fn strict_profile_rejects_unknown_rules() {
        let cfg = TrustgateConfigV1 {
            profile: Some("strict".to_string()),
            ..TrustgateConfigV1::default()
        };
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.unknown_rules, UnknownRules::Strict);
    }

    #[test]
    fn overrides_beat_config() {
        let cfg = TrustgateConfigV1 {
            profile: Some("lenient".to_string()),
            accept_threshold: Some(0.6),
            ..TrustgateConfigV1::default()
        };
        let overrides = Overrides {
            profile: Some("standard".to_string()),
            accept_threshold: Some(0.9),
            unknown_rules: Some("strict".to_string()),
        };

        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(resolved.effective.profile, "standard");
        assert_eq!(resolved.effective.accept_threshold, 0.9);
        assert_eq!(resolved.effective.unknown_rules, UnknownRules::Strict);
    }

    #[test]
    fn out_of_range_threshold_errors() {
        let cfg = TrustgateConfigV1 {
            accept_threshold: Some(1.5),
            ..TrustgateConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("accept_threshold"));
    }

    #[test]
    fn bad_unknown_rules_token_errors() {
        let cfg = TrustgateConfigV1 {
            unknown_rules: Some("maybe".to_string()),
            ..TrustgateConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown_rules"));
    }

    #[test]
    fn config_policies_replace_builtin_pair() {
        let cfg = parse_config_toml(
            r#"
profile = "standard"

[[policies]]
name = "Board Approved"
description = "Large verified counterparties only"

[policies.rules.esg_score]
min = 80

[policies.rules.organization_size]
allowed = ["large", "enterprise"]
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let policies = &resolved.effective.default_policies;

        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].id, "Board Approved");
        assert_eq!(policies[0].name, "Board Approved");
        assert_eq!(policies[0].rules["esg_score"], json!({ "min": 80 }));
        assert_eq!(
            policies[0].rules["organization_size"],
            json!({ "allowed": ["large", "enterprise"] })
        );
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(parse_config_toml("profile = [not toml").is_err());
    }
}
