use std::fs;

use stowage::{SetupMode, SetupOptions, ServiceTarget};

#[test]
fn inspect_reports_declaration_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stowage.toml");
    fs::write(
        &path,
        "[setup.secret_stores.zeta.items.b]\n[setup.secret_stores.zeta.items.a]\n\
         [setup.secret_stores.alpha.items.c]\n",
    )
    .unwrap();

    let report = stowage::inspect(&path).unwrap();
    let stores = &report.stores;
    let names: Vec<&str> = stores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    let entries: Vec<&str> = stores[0].entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(entries, vec!["b", "a"]);
}

#[test]
fn setup_rejects_blank_service_id() {
    let dir = tempfile::tempdir().unwrap();
    let options = SetupOptions {
        manifest: dir.path().join("stowage.toml"),
        target: ServiceTarget::new("  ", 1),
        mode: SetupMode::non_interactive(),
    };

    let err = stowage::setup(options).unwrap_err();
    assert!(matches!(err, stowage::AppError::InvalidConfig(_)));
}
