use acl::{AclError, AclRecord, AclScope, Attribute, PermissionTriad};
use test_support::{ANNOTATED_REPORT, DIRECTORY_REPORT, EXTENDED_REPORT, MINIMAL_REPORT};

fn triad(text: &str) -> PermissionTriad {
    text.parse().expect("valid triad")
}

#[test]
fn extended_report_builds_full_record() {
    let record = AclRecord::from_report_text(EXTENDED_REPORT).expect("parse report");

    assert_eq!(record.owning_user(), "alice");
    assert_eq!(record.owning_group(), "devs");
    assert_eq!(record.user(), triad("rwx"));
    assert_eq!(record.group(), triad("r-x"));
    assert_eq!(record.other(), triad("r-x"));
    assert_eq!(record.mask(), Some(triad("r-x")));

    let users = record.named_users().expect("named users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name(), "bob");
    assert_eq!(users[0].permissions(), triad("rwx"));

    let groups = record.named_groups().expect("named groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name(), "qa");
    assert_eq!(groups[0].permissions(), triad("rw-"));
}

#[test]
fn extended_report_effective_permissions() {
    let record = AclRecord::from_report_text(EXTENDED_REPORT).expect("parse report");
    let effective = record.effective_permissions();
    let access = effective.access();

    assert_eq!(access.named_user("bob"), Some(triad("r-x")));
    assert_eq!(access.named_group("qa"), Some(triad("r--")));
    assert_eq!(access.group(), Some(triad("r-x")));
    assert_eq!(access.user(), Some(triad("rwx")));
    assert_eq!(access.other(), Some(triad("r-x")));
    assert_eq!(effective.default_acl().named_users(), None);
}

#[test]
fn minimal_report_needs_no_mask() {
    let record = AclRecord::from_report_text(MINIMAL_REPORT).expect("parse report");
    assert!(record.named_users().is_none());
    assert!(record.named_groups().is_none());
    assert!(record.mask().is_none());

    let effective = record.effective_permissions();
    assert_eq!(effective.access().group(), None);
    assert_eq!(effective.access().user(), Some(triad("rw-")));
}

#[test]
fn named_users_keep_report_order() {
    let report = format!("{MINIMAL_REPORT}user:alice:rwx\nuser:bob:r--\nmask::rwx\n");
    let record = AclRecord::from_report_text(&report).expect("parse report");
    let names: Vec<&str> = record
        .named_users()
        .expect("named users")
        .iter()
        .map(|entry| entry.name())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
}

#[test]
fn directory_report_carries_flags_and_default_acl() {
    let record = AclRecord::from_report_text(DIRECTORY_REPORT).expect("parse report");

    let flags = record.flags().expect("flags");
    assert!(flags.setgid());
    assert!(!flags.setuid());
    assert!(!flags.sticky());

    let default = record.default_acl();
    assert!(!default.is_empty());
    assert_eq!(default.user(), Some(triad("rwx")));
    assert_eq!(default.mask(), Some(triad("r-x")));
    assert_eq!(default.other(), Some(triad("---")));

    let effective = record.effective_permissions();
    let inherited = effective.default_acl();
    assert_eq!(inherited.named_user("bob"), Some(triad("r-x")));
    assert_eq!(inherited.named_group("qa"), Some(triad("r--")));
    assert_eq!(inherited.group(), Some(triad("r-x")));
    assert_eq!(effective.access().named_user("bob"), Some(triad("r--")));
    assert_eq!(effective.access().named_group("ops"), Some(triad("rwx")));
}

#[test]
fn effective_annotations_are_ignored() {
    let annotated = AclRecord::from_report_text(ANNOTATED_REPORT).expect("parse annotated");
    let plain = AclRecord::from_report_text(EXTENDED_REPORT).expect("parse plain");
    assert_eq!(annotated, plain);
}

#[test]
fn missing_user_line_is_insufficient() {
    let report = EXTENDED_REPORT.replace("user::rwx\n", "");
    assert_eq!(
        AclRecord::from_report_text(&report),
        Err(AclError::InsufficientMatches {
            attribute: Attribute::UserPermissions,
            found: 0,
        })
    );
}

#[test]
fn duplicate_user_line_is_excessive() {
    let report = format!("{EXTENDED_REPORT}user::r--\n");
    assert_eq!(
        AclRecord::from_report_text(&report),
        Err(AclError::ExcessMatches {
            attribute: Attribute::UserPermissions,
            found: 2,
            max: 1,
        })
    );
}

#[test]
fn named_entry_without_permissions_is_malformed() {
    let report = EXTENDED_REPORT.replace("user:bob:rwx", "user:bogus");
    assert_eq!(
        AclRecord::from_report_text(&report),
        Err(AclError::MalformedNamedEntry {
            attribute: Attribute::SpecialUsersPermissions,
            line: "bogus".to_owned(),
        })
    );
}

#[test]
fn invalid_triad_is_rejected() {
    let report = EXTENDED_REPORT.replace("other::r-x", "other::rxw");
    let error = AclRecord::from_report_text(&report).expect_err("invalid triad");
    assert!(matches!(error, AclError::InvalidBitPattern { ref value, .. } if value == "rxw"));
}

#[test]
fn named_entries_require_mask() {
    let report = EXTENDED_REPORT.replace("mask::r-x\n", "");
    assert_eq!(
        AclRecord::from_report_text(&report),
        Err(AclError::MissingMask {
            scope: AclScope::Access,
        })
    );
}

#[test]
fn rendered_record_parses_back_to_itself() {
    for report in [EXTENDED_REPORT, MINIMAL_REPORT, DIRECTORY_REPORT] {
        let record = AclRecord::from_report_text(report).expect("parse report");
        let rendered = record.to_string();
        let reparsed = AclRecord::from_report_text(&rendered).expect("parse rendered");
        assert_eq!(reparsed, record);
    }
}

#[test]
fn rendering_follows_getfacl_entry_order() {
    let record = AclRecord::from_report_text(DIRECTORY_REPORT).expect("parse report");
    let expected = DIRECTORY_REPORT
        .lines()
        .filter(|line| !line.starts_with("# file:"))
        .map(|line| format!("{line}\n"))
        .collect::<String>();
    assert_eq!(record.to_string(), expected);
}

#[cfg(feature = "serde")]
#[test]
fn record_serializes_patterns_as_text() {
    let record = AclRecord::from_report_text(EXTENDED_REPORT).expect("parse report");
    let value = serde_json::to_value(&record).expect("serialize");

    assert_eq!(value["owning_user"], "alice");
    assert_eq!(value["mask"], "r-x");
    assert_eq!(value["named_users"][0]["name"], "bob");
    assert_eq!(value["named_users"][0]["permissions"], "rwx");

    let back: AclRecord = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, record);
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_record_without_mask_is_rejected() {
    let mut value =
        serde_json::to_value(AclRecord::from_report_text(EXTENDED_REPORT).expect("parse report"))
            .expect("serialize");
    value["mask"] = serde_json::Value::Null;

    let error = serde_json::from_value::<AclRecord>(value).expect_err("mask is required");
    assert!(error.to_string().contains("access ACL"), "{error}");
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_default_acl_without_mask_is_rejected() {
    let mut value =
        serde_json::to_value(AclRecord::from_report_text(DIRECTORY_REPORT).expect("parse report"))
            .expect("serialize");
    value["default"]["mask"] = serde_json::Value::Null;

    let error = serde_json::from_value::<AclRecord>(value).expect_err("default mask is required");
    assert!(error.to_string().contains("default ACL"), "{error}");
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_entry_with_empty_name_is_rejected() {
    let mut value =
        serde_json::to_value(AclRecord::from_report_text(EXTENDED_REPORT).expect("parse report"))
            .expect("serialize");
    value["named_users"][0]["name"] = serde_json::Value::from("");

    let error = serde_json::from_value::<AclRecord>(value).expect_err("name must be non-empty");
    assert!(error.to_string().contains("invalid entry name"), "{error}");
}
