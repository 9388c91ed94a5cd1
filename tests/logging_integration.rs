#[path = "../src/config.rs"]
mod config;
#[path = "../src/logging.rs"]
mod logging;

#[test]
fn logging_init_appends_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let first = logging::init(tmp.path()).expect("logging init should succeed");
    let second = logging::init(tmp.path()).expect("logging init should succeed");
    assert_eq!(first, second);

    let out = std::fs::read_to_string(&first).unwrap();
    assert_eq!(out.lines().count(), 2);
}
