use argus::core::config::{load_config, save_config, GuardConfig};
use argus::core::validator::{enforce, Verdict, VersionGuard};
use pretty_assertions::assert_eq;

fn dashboards_guard() -> VersionGuard {
    VersionGuard::new("Atlas Dashboards", "v14.1.2", "ATLAS_NODE_HOME").unwrap()
}

#[test]
fn test_identical_versions_pass_with_no_output() {
    let guard = dashboards_guard();
    let verdict = guard.evaluate("v14.1.2", false).unwrap();
    assert_eq!(verdict, Verdict::Pass);

    let mut stderr = Vec::new();
    let code = enforce(&verdict, &mut stderr).unwrap();
    assert_eq!(code, 0);
    assert_eq!(stderr, b"");
}

#[test]
fn test_patch_above_requirement_passes_regardless_of_override() {
    let guard = dashboards_guard();
    assert_eq!(guard.evaluate("v14.1.3", false).unwrap(), Verdict::Pass);
    assert_eq!(guard.evaluate("v14.1.3", true).unwrap(), Verdict::Pass);
}

#[test]
fn test_lower_patch_fails_without_override() {
    let guard = dashboards_guard();
    let verdict = guard.evaluate("v14.1.1", false).unwrap();

    let mut stderr = Vec::new();
    let code = enforce(&verdict, &mut stderr).unwrap();
    assert_eq!(code, 1);
    assert_eq!(
        String::from_utf8(stderr).unwrap(),
        "Atlas Dashboards was built with v14.1.2 and does not support the current \
         Node.js version v14.1.1. Please use Node.js v14.1.2 or a higher patch version.\n"
    );
}

#[test]
fn test_lower_patch_warns_with_override() {
    let guard = dashboards_guard();
    let verdict = guard.evaluate("v14.1.1", true).unwrap();

    let mut stderr = Vec::new();
    let code = enforce(&verdict, &mut stderr).unwrap();
    assert_eq!(code, 0);
    assert_eq!(
        String::from_utf8(stderr).unwrap(),
        "Atlas Dashboards was built with v14.1.2 and does not support the current \
         Node.js version v14.1.1. \nBecause the ATLAS_NODE_HOME environment variable \
         is set, any node version incompatibilities will be ignored.\n"
    );
}

#[test]
fn test_major_and_minor_deltas_disqualify_in_both_directions() {
    let guard = dashboards_guard();

    for current in ["v15.1.2", "v13.1.2", "v14.2.2", "v14.0.2"] {
        let fatal = guard.evaluate(current, false).unwrap();
        assert!(fatal.is_fatal(), "expected fatal for {}", current);
        assert!(fatal
            .message()
            .unwrap()
            .ends_with("or a higher patch version.\n"));

        let warn = guard.evaluate(current, true).unwrap();
        assert!(
            matches!(warn, Verdict::Warn { .. }),
            "expected warn for {} with override",
            current
        );
        assert!(warn
            .message()
            .unwrap()
            .ends_with("any node version incompatibilities will be ignored.\n"));
    }
}

#[test]
fn test_higher_major_with_override_warns() {
    let guard = dashboards_guard();
    let verdict = guard.evaluate("v15.1.2", true).unwrap();

    let mut stderr = Vec::new();
    let code = enforce(&verdict, &mut stderr).unwrap();
    assert_eq!(code, 0);
    assert!(String::from_utf8(stderr)
        .unwrap()
        .ends_with("\nBecause the ATLAS_NODE_HOME environment variable is set, any node version incompatibilities will be ignored.\n"));
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let guard = dashboards_guard();
    for _ in 0..3 {
        assert_eq!(
            guard.evaluate("v15.1.2", true).unwrap(),
            guard.evaluate("v15.1.2", true).unwrap()
        );
    }
}

#[test]
fn test_config_round_trip_drives_guard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guard.toml");

    let config = GuardConfig {
        host_name: "Atlas Dashboards".to_string(),
        required_version: "v14.1.2".to_string(),
        override_env: "ATLAS_NODE_HOME".to_string(),
        node_binary: None,
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    let guard = VersionGuard::new(
        &loaded.host_name,
        &loaded.required_version,
        &loaded.override_env,
    )
    .unwrap();

    assert_eq!(guard.evaluate("v14.1.2", false).unwrap(), Verdict::Pass);
    assert!(guard.evaluate("v14.1.1", false).unwrap().is_fatal());
}

#[test]
fn test_guard_rejects_garbage_input() {
    let guard = dashboards_guard();
    assert!(guard.evaluate("", false).is_err());
    assert!(guard.evaluate("14.1.2", false).is_err());
    assert!(guard.evaluate("not-a-version", true).is_err());
}
