//! Integration tests for filterbar
//!
//! These tests drive the public API end to end: a catalog loaded from TOML,
//! a filter bar bound to an in-memory location, and the query strings it
//! writes.

use filterbar::{
    FilterBar,
    catalog::Catalog,
    config::FilterbarConfig,
    filters::{AppliedFilter, FilterValue, StoreMode},
    url::{Location, MemoryLocation, Pagination, QueryParams, UrlCodec, UrlSyncOptions},
};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::sync::Arc;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[filter]]
id = "name"
label = "Name"
kind = "text"

[[filter]]
id = "status"
label = "Status"
kind = "single_choice"
choices = [
    { value = "running", label = "Running" },
    { value = "stopped", label = "Stopped" },
]

[[filter]]
id = "tags"
label = "Tags"
kind = "multi_choice"
choices = [
    { value = "a", label = "Alpha" },
    { value = "b", label = "Beta" },
]
"#;

/// Helper function to write the catalog to a temporary file and load it
fn load_catalog() -> (Arc<Catalog>, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();
    (Arc::new(Catalog::load(&path).unwrap()), dir)
}

/// Helper function to commit a text filter through the bar
fn commit_text<L: Location>(bar: &mut FilterBar<L>, id: &str, text: &str) {
    bar.select_option(id);
    bar.set_draft(FilterValue::Text(text.into()));
    assert!(bar.commit(), "commit of {id}={text} should succeed");
}

fn ids(filters: &[AppliedFilter]) -> Vec<&str> {
    filters.iter().map(|f| f.option_id.as_str()).collect()
}

#[test]
fn test_commit_order_follows_most_recent_commit() {
    let (catalog, _dir) = load_catalog();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut bar = FilterBar::builder(catalog)
        .on_change(move |_| *counter.borrow_mut() += 1)
        .build();

    commit_text(&mut bar, "name", "foo");
    bar.select_option("status");
    assert!(bar.choose("running"));
    assert_eq!(ids(bar.filters()), vec!["name", "status"]);

    commit_text(&mut bar, "name", "bar");
    assert_eq!(ids(bar.filters()), vec!["status", "name"]);
    assert_eq!(bar.filters()[1].value, FilterValue::Text("bar".into()));
    assert_eq!(*calls.borrow(), 3);
}

#[test]
fn test_multi_select_uses_catalog_labels() {
    let (catalog, _dir) = load_catalog();
    let mut bar = FilterBar::builder(catalog).build();

    bar.select_option("tags");
    bar.stage("a");
    bar.stage("b");
    assert!(bar.confirm_multi_select());

    let filter = &bar.filters()[0];
    assert_eq!(
        filter.value,
        FilterValue::MultiChoice(vec!["a".into(), "b".into()])
    );
    assert_eq!(filter.display_value, "Alpha, Beta");
}

#[test]
fn test_url_with_canonical_filters_and_page() {
    let (catalog, _dir) = load_catalog();
    let query = r#"?filters={"status":{"value":"running","label":"Status","displayValue":"Running"}}&pageNum=2"#;
    let bar = FilterBar::builder(catalog)
        .with_url_sync(MemoryLocation::new(query), UrlSyncOptions::default())
        .build();

    assert_eq!(ids(bar.filters()), vec!["status"]);
    assert_eq!(bar.filters()[0].value, FilterValue::Choice("running".into()));
    assert_eq!(bar.filters()[0].display_value, "Running");
    assert_eq!(bar.pagination(), Pagination::new(2, 20));
}

#[test]
fn test_malformed_url_falls_back_to_initial_filters() {
    let (catalog, _dir) = load_catalog();
    let initial = vec![AppliedFilter::new(
        "name",
        "Name",
        FilterValue::Text("seed".into()),
        "seed",
    )];
    let bar = FilterBar::builder(catalog)
        .initial_filters(initial.clone())
        .with_url_sync(MemoryLocation::new("?filters=not-json"), UrlSyncOptions::default())
        .build();

    assert_eq!(bar.filters(), initial.as_slice());
    assert_eq!(bar.pagination(), Pagination::default());
}

#[test]
fn test_commit_returns_to_first_page() {
    let (catalog, _dir) = load_catalog();
    let mut bar = FilterBar::builder(catalog)
        .with_url_sync(
            MemoryLocation::new("?pageNum=5&pageSize=50&view=grid"),
            UrlSyncOptions::default(),
        )
        .build();

    commit_text(&mut bar, "name", "foo");

    let location = bar.location().unwrap();
    assert_eq!(location.history_len(), 1, "filter writes must replace, not push");
    let params = QueryParams::parse(&location.search()).unwrap();
    assert_eq!(params.get("pageNum"), Some("1"));
    assert_eq!(params.get("pageSize"), Some("50"));
    assert_eq!(params.get("view"), Some("grid"));
}

#[test]
fn test_written_url_round_trips() {
    let (catalog, _dir) = load_catalog();
    let mut bar = FilterBar::builder(Arc::clone(&catalog))
        .with_url_sync(MemoryLocation::default(), UrlSyncOptions::default())
        .build();
    commit_text(&mut bar, "name", "foo");
    bar.select_option("tags");
    bar.toggle_staged("b");
    bar.confirm_multi_select();
    bar.select_option("status");
    bar.choose("stopped");

    let query = bar.dispose().unwrap().search();
    let reopened = FilterBar::builder(catalog)
        .with_url_sync(MemoryLocation::new(&query), UrlSyncOptions::default())
        .build();
    assert_eq!(ids(reopened.filters()), vec!["name", "tags", "status"]);
    assert_eq!(reopened.filters()[1].display_value, "Beta");
}

#[test]
fn test_legacy_urls_decode() {
    let (catalog, _dir) = load_catalog();
    let codec = UrlCodec::new(catalog);

    let flat = codec.decode(r#"{"status":"stopped","tags":["a"]}"#).unwrap();
    assert_eq!(ids(&flat), vec!["status", "tags"]);
    assert_eq!(flat[0].label, "status");

    let array = codec
        .decode(r#"[{"optionId":"name","label":"Name","value":"x","displayValue":"x"}]"#)
        .unwrap();
    assert_eq!(array[0].value, FilterValue::Text("x".into()));
}

#[test]
fn test_back_navigation_restores_previous_filters() {
    let (catalog, _dir) = load_catalog();
    let mut bar = FilterBar::builder(catalog)
        .with_url_sync(MemoryLocation::default(), UrlSyncOptions::default())
        .build();
    commit_text(&mut bar, "name", "first");

    let link = bar.location().unwrap().search().replace("first", "second");
    bar.location_mut().unwrap().navigate(&link);
    assert!(bar.handle_navigation());
    assert_eq!(bar.filters()[0].display_value, "second");

    bar.location_mut().unwrap().back();
    assert!(bar.handle_navigation());
    assert_eq!(bar.filters()[0].display_value, "first");
    assert!(!bar.handle_navigation());
}

#[test]
fn test_controlled_bar_reports_and_mirrors() {
    let (catalog, _dir) = load_catalog();
    let owner: Rc<RefCell<Vec<AppliedFilter>>> = Rc::default();
    let sink = Rc::clone(&owner);
    let mut bar = FilterBar::builder(catalog)
        .value(Vec::new())
        .on_change(move |filters| *sink.borrow_mut() = filters.to_vec())
        .build();
    assert_eq!(bar.mode(), StoreMode::Controlled);

    commit_text(&mut bar, "name", "foo");
    let value = owner.borrow().clone();
    bar.set_value(value).unwrap();
    assert_eq!(ids(bar.filters()), vec!["name"]);
}

#[test]
fn test_config_drives_bar_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[url]\nkey = \"f\"\ndefault_page_size = 30\n[display]\nrange_separator = \" to \"\n",
    )
    .unwrap();
    let config = FilterbarConfig::load(Some(&path)).unwrap();
    let (catalog, _catalog_dir) = load_catalog();

    let mut bar = FilterBar::builder(catalog)
        .options(config.bar_options())
        .with_url_sync(MemoryLocation::default(), config.url_options().unwrap())
        .build();
    assert_eq!(bar.pagination(), Pagination::new(1, 30));

    commit_text(&mut bar, "name", "foo");
    let params = QueryParams::parse(&bar.location().unwrap().search()).unwrap();
    assert!(params.get("f").is_some());
    assert!(params.get("filters").is_none());
}
