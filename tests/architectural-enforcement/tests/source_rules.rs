//! Source rules for the registry crates

use architectural_enforcement::{find_violations, rust_sources, workspace_root};

fn assert_clean(dir: &str, patterns: &[&str]) {
    let root = workspace_root().join(dir);
    assert!(
        !rust_sources(&root).is_empty(),
        "no sources found under {}",
        root.display()
    );

    let violations = find_violations(&root, patterns);
    assert!(
        violations.is_empty(),
        "forbidden patterns {patterns:?} found:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_no_blocking_sleep() {
    assert_clean("registry", &["thread::sleep"]);
}

#[test]
fn test_library_does_not_print() {
    assert_clean("registry/core/src", &["println!", "eprintln!", "dbg!"]);
}

#[test]
fn test_no_unwrap_in_production_code() {
    assert_clean("registry/core/src", &[".unwrap()", ".expect("]);
    assert_clean("registry/cli/src", &[".unwrap()", ".expect("]);
}
