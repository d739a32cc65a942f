use super::*;
use proptest::prelude::*;

const LEGAL_PERMISSIONS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

fn is_legal_permission(text: &str) -> bool {
    LEGAL_PERMISSIONS.contains(&text)
}

#[test]
fn parse_accepts_every_legal_permission_pattern() {
    for text in LEGAL_PERMISSIONS {
        let triad = PermissionTriad::parse(text).expect("legal pattern");
        assert_eq!(triad.to_string(), text);
    }
}

#[test]
fn parse_rejects_known_bad_permission_patterns() {
    for text in ["eee", "xwx", "rrwx", "wx", "", "r-X", "RWX", "rw ", "s--"] {
        let error = PermissionTriad::parse(text).expect_err("illegal pattern");
        assert!(
            matches!(error, AclError::InvalidBitPattern { .. }),
            "input: {text:?}"
        );
    }
}

#[test]
fn invalid_bit_pattern_reports_value_and_reference_patterns() {
    let error = PermissionTriad::parse("xwx").unwrap_err();
    assert_eq!(
        error,
        AclError::InvalidBitPattern {
            value: "xwx".to_owned(),
            all_set: "rwx",
            none_set: "---",
        }
    );
    let rendered = error.to_string();
    assert!(rendered.contains("xwx"));
    assert!(rendered.contains("rwx"));
}

#[test]
fn every_flavour_renders_full_width_patterns() {
    for all_set in [PermissionBits::ALL_SET, FlagBits::ALL_SET] {
        assert_eq!(all_set.len(), PATTERN_WIDTH);
        assert!(all_set.is_ascii());
    }
    assert_eq!(FlagTriad::NONE_SET.to_string(), NONE_SET_PATTERN);
    assert_eq!(
        FlagTriad::parse("rwx").unwrap_err(),
        AclError::InvalidBitPattern {
            value: "rwx".to_owned(),
            all_set: "sst",
            none_set: "---",
        }
    );
}

#[test]
fn parse_rejects_multibyte_characters() {
    assert!(PermissionTriad::parse("r\u{e9}x").is_err());
    assert!(PermissionTriad::parse("\u{2013}\u{2013}\u{2013}").is_err());
}

#[test]
fn flag_patterns_use_sst_markers() {
    let flags = FlagTriad::parse("-s-").expect("legal flags");
    assert!(!flags.setuid());
    assert!(flags.setgid());
    assert!(!flags.sticky());
    assert_eq!(flags.to_string(), "-s-");

    assert!(FlagTriad::parse("sst").is_ok());
    assert!(FlagTriad::parse("rwx").is_err());
    assert!(FlagTriad::parse("tss").is_err());
    assert!(FlagTriad::parse("--s").is_err());
}

#[test]
fn flag_error_names_flag_reference_pattern() {
    let error = FlagTriad::parse("s-s").unwrap_err();
    assert!(matches!(
        error,
        AclError::InvalidBitPattern { all_set: "sst", .. }
    ));
}

#[test]
fn permission_accessors_follow_slots() {
    let triad = PermissionTriad::parse("r-x").unwrap();
    assert!(triad.read());
    assert!(!triad.write());
    assert!(triad.execute());
    assert_eq!(triad.bits(), 0b101);
    assert!(triad.is_set(0));
    assert!(!triad.is_set(1));
    assert!(!triad.is_set(7));
}

#[test]
fn reference_constants_render_canonically() {
    assert_eq!(PermissionTriad::ALL_SET.to_string(), "rwx");
    assert_eq!(PermissionTriad::NONE_SET.to_string(), "---");
    assert_eq!(FlagTriad::ALL_SET.to_string(), "sst");
    assert!(PermissionTriad::NONE_SET.is_empty());
    assert_eq!(PermissionTriad::default(), PermissionTriad::NONE_SET);
}

#[test]
fn from_bits_ignores_high_bits() {
    assert_eq!(PermissionTriad::from_bits(0o7).to_string(), "rwx");
    assert_eq!(PermissionTriad::from_bits(0o4).to_string(), "r--");
    assert_eq!(PermissionTriad::from_bits(0b1111_1010).to_string(), "-w-");
}

#[test]
fn from_str_matches_parse() {
    let parsed: PermissionTriad = "rw-".parse().expect("parse succeeds");
    assert_eq!(parsed, PermissionTriad::parse("rw-").unwrap());
}

#[test]
fn effective_intersects_each_bit() {
    let base = PermissionTriad::parse("rw-").unwrap();
    let mask = PermissionTriad::parse("r-x").unwrap();
    assert_eq!(effective(base, mask).to_string(), "r--");
    assert_eq!(base & mask, effective(base, mask));
}

fn legal_permission() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['r', '-']),
        prop::sample::select(vec!['w', '-']),
        prop::sample::select(vec!['x', '-']),
    )
        .prop_map(|(r, w, x)| [r, w, x].iter().collect())
}

fn any_triad() -> impl Strategy<Value = PermissionTriad> {
    (0u8..8).prop_map(PermissionTriad::from_bits)
}

proptest! {
    #[test]
    fn legal_patterns_round_trip(text in legal_permission()) {
        let triad = PermissionTriad::parse(&text).expect("legal pattern");
        prop_assert_eq!(triad.to_string(), text);
    }

    #[test]
    fn parse_succeeds_only_for_legal_patterns(text in "[ -~]{3}") {
        let result = PermissionTriad::parse(&text);
        prop_assert_eq!(result.is_ok(), is_legal_permission(&text));
        if let Err(error) = result {
            let is_invalid_pattern = matches!(error, AclError::InvalidBitPattern { .. });
            prop_assert!(is_invalid_pattern);
        }
    }

    #[test]
    fn effective_is_bitwise_and(base in any_triad(), mask in any_triad()) {
        let result = effective(base, mask);
        for slot in 0..PATTERN_WIDTH {
            prop_assert_eq!(result.is_set(slot), base.is_set(slot) && mask.is_set(slot));
        }
        prop_assert_eq!(result, effective(mask, base));
    }

    #[test]
    fn effective_with_reference_masks(base in any_triad()) {
        prop_assert_eq!(effective(base, PermissionTriad::ALL_SET), base);
        prop_assert_eq!(effective(base, PermissionTriad::NONE_SET), PermissionTriad::NONE_SET);
    }
}
