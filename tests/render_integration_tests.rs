//! End-to-end tests for card rendering.

mod common;

use common::{SAMPLE_COUNTS, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Happy Path
// =============================================================================

#[test]
fn renders_card_with_default_paths() {
    let fixture = TestFixture::new();
    fixture.write_counts(SAMPLE_COUNTS);

    loc_badge!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("loc-stats.svg"));

    let card = fixture.read_card();
    assert!(card.contains("TOP LANGUAGES"));
    assert!(card.contains(">1,250</text>"));
    assert!(card.contains(">24</text>"));
}

#[test]
fn rendered_rows_are_sorted_descending() {
    let fixture = TestFixture::new();
    fixture.write_counts(SAMPLE_COUNTS);

    loc_badge!().current_dir(fixture.path()).assert().success();

    let card = fixture.read_card();
    let python = card.find(">Python<").expect("Python row");
    let typescript = card.find(">TypeScript<").expect("TypeScript row");
    let shell = card.find(">Shell<").expect("Shell row");
    assert!(python < typescript);
    assert!(typescript < shell);
}

#[test]
fn merged_alias_never_rendered() {
    let fixture = TestFixture::new();
    fixture.write_counts(SAMPLE_COUNTS);

    loc_badge!().current_dir(fixture.path()).assert().success();

    // TSX folds into TypeScript: 300 + 150.
    let card = fixture.read_card();
    assert!(!card.contains("TSX"));
    assert!(card.contains(">450</text>"));
}

#[test]
fn zero_code_language_not_rendered() {
    let fixture = TestFixture::new();
    fixture.write_counts(r#"{"Foo": {"code": 0}, "Bar": {"code": 10}}"#);

    loc_badge!().current_dir(fixture.path()).assert().success();

    let card = fixture.read_card();
    assert!(!card.contains("Foo"));
    assert!(card.contains("Bar"));
}

#[test]
fn empty_document_renders_empty_chart() {
    let fixture = TestFixture::new();
    fixture.write_counts(r#"{"Total": {"code": 0, "lines": 0, "files": 0}}"#);

    loc_badge!().current_dir(fixture.path()).assert().success();

    let card = fixture.read_card();
    assert!(card.contains("TOP LANGUAGES"));
    assert!(!card.contains(r##"fill="#21262d""##));
}

#[test]
fn reruns_are_byte_identical() {
    let fixture = TestFixture::new();
    fixture.write_counts(SAMPLE_COUNTS);

    loc_badge!().current_dir(fixture.path()).assert().success();
    let first = fixture.read_card();

    loc_badge!().current_dir(fixture.path()).assert().success();
    assert_eq!(first, fixture.read_card());
}

#[test]
fn top_flag_limits_rows() {
    let fixture = TestFixture::new();
    fixture.write_counts(SAMPLE_COUNTS);

    loc_badge!()
        .current_dir(fixture.path())
        .args(["--top", "2"])
        .assert()
        .success();

    let card = fixture.read_card();
    assert_eq!(card.matches(r##"fill="#21262d""##).count(), 2);
    assert!(!card.contains("Makefile"));
}

// =============================================================================
// Failure Paths
// =============================================================================

#[test]
fn missing_input_exits_one_without_output() {
    let fixture = TestFixture::new();

    loc_badge!()
        .current_dir(fixture.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    assert!(!fixture.card_exists());
}

#[test]
fn malformed_input_exits_nonzero_without_output() {
    let fixture = TestFixture::new();
    fixture.write_counts("{oops");

    loc_badge!()
        .current_dir(fixture.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));

    assert!(!fixture.card_exists());
}

#[test]
fn non_object_input_exits_nonzero() {
    let fixture = TestFixture::new();
    fixture.write_counts("[1, 2, 3]");

    loc_badge!()
        .current_dir(fixture.path())
        .assert()
        .failure()
        .code(2);

    assert!(!fixture.card_exists());
}
