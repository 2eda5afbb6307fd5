use email_body_extract::*;

fn window(text: &str) -> LineSequence<'_> {
    LineSequence::new(text)
}

// --- Directions ---

#[test]
fn test_parse_directions() {
    assert_eq!(
        "forward".parse::<ScanDirection>().unwrap(),
        ScanDirection::Forward
    );
    assert_eq!(
        "Backward".parse::<ScanDirection>().unwrap(),
        ScanDirection::Backward
    );
    assert_eq!(
        "prefix".parse::<CutDirection>().unwrap(),
        CutDirection::DropPrefix
    );
    assert_eq!(
        "drop_suffix".parse::<CutDirection>().unwrap(),
        CutDirection::DropSuffix
    );
}

#[test]
fn test_unknown_directions_fail() {
    assert!(matches!(
        "sideways".parse::<ScanDirection>(),
        Err(ExtractError::UnknownScanDirection(d)) if d == "sideways"
    ));
    assert!(matches!(
        "middle".parse::<CutDirection>(),
        Err(ExtractError::UnknownCutDirection(d)) if d == "middle"
    ));
}

#[test]
fn test_invalid_pattern_fails() {
    let err = Rule::new(ScanDirection::Forward, "(unclosed", CutDirection::DropSuffix).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

// --- Matching ---

#[test]
fn test_primary_pattern_sees_trimmed_line() {
    let rule = Rule::new(ScanDirection::Backward, r"^-- ?$", CutDirection::DropSuffix).unwrap();
    let lines = window("body\n   -- \t");

    assert!(!rule.matches(&lines, 0));
    assert!(rule.matches(&lines, 1));
}

#[test]
fn test_auxiliary_condition_skips_blanks() {
    let rule = Rule::new(ScanDirection::Forward, r"^From: .+@.+\..+$", CutDirection::DropSuffix)
        .unwrap()
        .when(1, r"^Sent: .+$")
        .unwrap();
    let lines = window("From: a@example.com\n\nSent: today");

    assert!(rule.matches(&lines, 0));
}

#[test]
fn test_auxiliary_condition_sees_raw_line() {
    let rule = Rule::new(ScanDirection::Forward, r"^From: .+@.+\..+$", CutDirection::DropSuffix)
        .unwrap()
        .when(1, r"^Sent: .+$")
        .unwrap();
    let lines = window("From: a@example.com\n   Sent: today");

    assert!(!rule.matches(&lines, 0));
}

#[test]
fn test_auxiliary_condition_out_of_range() {
    let rule = Rule::new(ScanDirection::Forward, r"^From: .+$", CutDirection::DropSuffix)
        .unwrap()
        .when(1, r"^Sent: .+$")
        .unwrap();
    let lines = window("From: someone\n\n");

    assert!(!rule.matches(&lines, 0));
}

#[test]
fn test_all_conditions_required() {
    let rule = Rule::new(ScanDirection::Forward, r"^a$", CutDirection::DropPrefix)
        .unwrap()
        .when(1, r"^b$")
        .unwrap()
        .when(-1, r"^z$")
        .unwrap();

    assert!(rule.matches(&window("z\na\nb"), 1));
    assert!(!rule.matches(&window("y\na\nb"), 1));
    assert!(!rule.matches(&window("a\nb"), 0));
}

// --- Rule sets ---

#[test]
fn test_forward_suffix_cut() {
    let rules = [Rule::new(ScanDirection::Forward, r"^cut$", CutDirection::DropSuffix).unwrap()];
    let mut lines = window("keep\n\ncut\ngone\ncut");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["keep", ""]);
    assert_eq!(lines.dropped_front(), 0);
}

#[test]
fn test_prefix_cut_with_offset() {
    let rules = [Rule::new(ScanDirection::Forward, r"^head$", CutDirection::DropPrefix)
        .unwrap()
        .cut_at(2)];
    let mut lines = window("head\n\nmore\nlast\nbody");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["body"]);
    assert_eq!(lines.dropped_front(), 4);
}

#[test]
fn test_unresolvable_cut_leaves_lines() {
    let rules = [Rule::new(ScanDirection::Forward, r"^head$", CutDirection::DropPrefix)
        .unwrap()
        .cut_at(3)];
    let mut lines = window("head\nbody");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["head", "body"]);
}

#[test]
fn test_line_limit_counts_non_blank_lines() {
    let rules = [
        Rule::new(ScanDirection::Backward, r"^以上$", CutDirection::DropSuffix)
            .unwrap()
            .limit(2),
    ];

    let mut far = window("本文\n以上\na\nb");
    apply_rule_set(&mut far, &rules, "test");
    assert_eq!(far.len(), 4);

    let mut near = window("本文\n以上\n\n\nb");
    apply_rule_set(&mut near, &rules, "test");
    assert_eq!(near.as_slice(), &["本文"]);
}

#[test]
fn test_repeatable_rule_reapplies() {
    let rules = [Rule::new(ScanDirection::Forward, r"様$", CutDirection::DropPrefix)
        .unwrap()
        .limit(3)
        .repeating()];
    let mut lines = window("山田様\n鈴木様\n\n本文");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["", "本文"]);
    assert_eq!(lines.dropped_front(), 2);
}

#[test]
fn test_non_repeatable_rule_fires_once() {
    let rules = [Rule::new(ScanDirection::Forward, r"様$", CutDirection::DropPrefix).unwrap()];
    let mut lines = window("山田様\n鈴木様\n本文");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["鈴木様", "本文"]);
}

#[test]
fn test_rules_apply_in_order() {
    let rules = [
        Rule::new(ScanDirection::Backward, r"^sig$", CutDirection::DropSuffix).unwrap(),
        Rule::new(ScanDirection::Backward, r"^bye$", CutDirection::DropSuffix).unwrap(),
    ];
    let mut lines = window("body\nbye\nsig\nname");
    apply_rule_set(&mut lines, &rules, "test");

    assert_eq!(lines.as_slice(), &["body"]);
}

// --- Definitions ---

#[test]
fn test_rule_from_definition() {
    let def: RuleDef = serde_json::from_str(
        r#"{
            "scan": "forward",
            "pattern": "^To:",
            "conditions": [{ "offset": 1, "pattern": "^Cc:" }],
            "cut_offset": 1,
            "cut": "prefix",
            "line_limit": 4,
            "repeatable": true
        }"#,
    )
    .unwrap();
    let rule = Rule::try_from(def).unwrap();

    assert_eq!(rule.scan, ScanDirection::Forward);
    assert_eq!(rule.cut, CutDirection::DropPrefix);
    assert_eq!(rule.cut_offset, 1);
    assert_eq!(rule.line_limit, Some(4));
    assert!(rule.repeatable);
    assert_eq!(rule.conditions.len(), 1);
    assert!(rule.matches(&window("To: a\nCc: b"), 0));
}

#[test]
fn test_rule_definition_with_bad_direction() {
    let def: RuleDef =
        serde_json::from_str(r#"{ "scan": "upward", "pattern": "^x$", "cut": "suffix" }"#).unwrap();

    assert!(matches!(
        Rule::try_from(def),
        Err(ExtractError::UnknownScanDirection(_))
    ));
}
