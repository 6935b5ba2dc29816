//! Fixture-based snapshot tests.
//!
//! Each `tests/fixtures/<name>.md` is converted and compared against the
//! co-located `<name>.snap`.

use markdown_to_html_engine::convert;

#[test]
fn fixture_basic_document() {
    assert_fixture("basic_document");
}

#[test]
fn fixture_lists_and_quotes() {
    assert_fixture("lists_and_quotes");
}

#[test]
fn fixture_overlapping_markers() {
    assert_fixture("overlapping_markers");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let html = convert(&md).unwrap();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}
