//! Integration tests for `-v` and `--debug` mapping onto filter directives.

use logging::{DebugFlag, DebugLevels, VerbosityConfig};

#[test]
fn verbosity_only_raises_levels() {
    let mut previous = DebugLevels::default();
    for level in 0..=5 {
        let config = VerbosityConfig::from_verbose_level(level);
        for flag in DebugFlag::ALL {
            assert!(
                config.debug.get(flag) >= previous.get(flag),
                "{flag:?} dropped at -v level {level}"
            );
        }
        previous = config.debug;
    }
}

#[test]
fn quiet_configuration_only_warns() {
    let config = VerbosityConfig::from_verbose_level(0);
    assert_eq!(config.filter_directives(), "warn");
}

#[test]
fn debug_flag_overrides_verbosity_mapping() {
    let mut config = VerbosityConfig::from_verbose_level(4);
    config.apply_debug_flag("field0").unwrap();
    assert_eq!(config.debug.field, 0);
    assert!(!config.filter_directives().contains("facl::field"));
}

#[test]
fn unknown_flag_in_list_is_reported() {
    let mut config = VerbosityConfig::default();
    let error = config.apply_debug_flags("parse,bogus").unwrap_err();
    assert_eq!(error, "unknown debug flag: bogus");
    assert_eq!(config.debug.parse, 1);
}

#[cfg(feature = "serde")]
#[test]
fn configuration_serializes() {
    let config = VerbosityConfig::from_verbose_level(2);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["verbose"], 2);
    assert_eq!(json["debug"]["parse"], 1);
    let back: VerbosityConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}
