use wordcheck_domain::config::{CheckConfig, LogConfig, PalindromeConfig};
use wordcheck_domain::normalization::Normalization;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let log = LogConfig::default();
    assert_eq!(log.level, "warn");
    assert!(!log.json);

    let palindrome = PalindromeConfig::default();
    assert!(!palindrome.strict);
    assert_eq!(palindrome.normalization(), Normalization::STANDARD);
}

#[test]
fn check_config_deserializes() {
    let raw = json!({
        "log": { "level": "debug", "json": true },
        "palindrome": { "strict": true }
    });

    let cfg: CheckConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
    assert_eq!(cfg.palindrome.normalization(), Normalization::LITERAL);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: CheckConfig =
        serde_json::from_value(json!({ "palindrome": {} })).expect("config deserialize");
    assert_eq!(cfg, CheckConfig::default());
}
