//! End-to-end tests for exporting the built-in catalog to disk.
//!
//! Each test writes into its own temporary directory and inspects the
//! resulting file the way a spreadsheet import would.

use meds_catalog::catalog::{Catalog, MedicationEntry, RouteType};
use meds_catalog::config::ExportConfig;
use meds_catalog::error::CatalogError;
use meds_catalog::export::{CatalogExporter, export_catalog};
use meds_catalog::import::read_catalog;
use meds_catalog::integrity::verify_export;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_has_header_plus_one_line_per_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let catalog = Catalog::builtin();

    export_catalog(&catalog, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), catalog.len() + 1);
    assert_eq!(lines.first(), Some(&"name,title,description,type"));
}

#[test]
fn test_every_row_has_four_fields_and_a_known_route() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    export_catalog(&Catalog::builtin(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let tags: Vec<&str> = RouteType::ALL.iter().map(|r| r.tag()).collect();
    let mut rows = 0;
    for record in reader.records() {
        let record = record.unwrap();
        assert_eq!(record.len(), 4, "{record:?}");
        assert!(tags.contains(&record.get(3).unwrap()), "{record:?}");
        rows += 1;
    }
    assert_eq!(rows, 32);
}

#[test]
fn test_round_trip_preserves_entries_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let catalog = Catalog::builtin();

    export_catalog(&catalog, &path).unwrap();
    let entries = read_catalog(&path).unwrap();

    assert_eq!(entries.as_slice(), catalog.entries());
}

#[test]
fn test_comma_in_description_is_quoted_and_restored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let catalog = Catalog::builtin();

    export_catalog(&catalog, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    let penicillin = "Diluir em 2 mL de ABD, aspirar 2 mL, diluir com 0,5 mL de Lidocaína e aplicar IM.";
    assert!(content.contains(&format!("\"{penicillin}\"")));

    let entries = read_catalog(&path).unwrap();
    let restored = entries
        .iter()
        .find(|e| e.name == "Penicilina Benzatina 1.200.000 UI")
        .unwrap();
    assert_eq!(restored.description, penicillin);
}

#[test]
fn test_empty_description_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    export_catalog(&Catalog::builtin(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.lines().last(),
        Some("Espaçador,Espaçador - 1 unidade,,inhalational")
    );
}

#[test]
fn test_duplicate_title_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    export_catalog(&Catalog::builtin(), &path).unwrap();

    let entries = read_catalog(&path).unwrap();
    let shared: Vec<(&str, RouteType)> = entries
        .iter()
        .filter(|e| e.title == "SF 0,9% - 1 frasco")
        .map(|e| (e.name.as_str(), e.route))
        .collect();

    assert_eq!(
        shared,
        [
            ("SF 0,9%", RouteType::TopicOftamologic),
            ("SF 0,9% (nasal)", RouteType::Nasal),
        ]
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let catalog = Catalog::builtin();

    let first_report = export_catalog(&catalog, &path).unwrap();
    let first = fs::read(&path).unwrap();
    let second_report = export_catalog(&catalog, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn test_export_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    fs::write(&path, "stale content that is much longer than a header\n".repeat(500)).unwrap();

    let catalog = Catalog::new(vec![MedicationEntry::new(
        "Ceftriaxona 500mg",
        "Ceftriaxona 500mg - 1 ampola",
        "Aplicar IM.",
        RouteType::Injectable,
    )]);
    export_catalog(&catalog, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "name,title,description,type\n\
         Ceftriaxona 500mg,Ceftriaxona 500mg - 1 ampola,Aplicar IM.,injectable\n"
    );
}

#[test]
fn test_missing_directory_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("meds.csv");

    let exporter = CatalogExporter::new(ExportConfig::with_output(&path));
    let err = exporter.export(&Catalog::builtin()).unwrap_err();

    match &err {
        CatalogError::Write { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("expected write error, got {other}"),
    }
    assert!(err.to_string().contains("no-such-dir"));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_keeps_previous_file() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let previous = b"name,title,description,type\nkeep,me,,oral\n";
    fs::write(&path, previous).unwrap();
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory modes, so there is nothing to check.
    let writable = dir.path().join("write-check");
    if fs::write(&writable, b"").is_ok() {
        fs::remove_file(&writable).unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = export_catalog(&Catalog::builtin(), &path);
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(CatalogError::Write { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected write error, got {other:?}"),
    }
    assert_eq!(fs::read(&path).unwrap(), previous);
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["meds.csv"]);
}

#[test]
fn test_export_then_verify_passes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meds.csv");
    let catalog = Catalog::builtin();

    let report = export_catalog(&catalog, &path).unwrap();
    let result = verify_export(&path, &catalog).unwrap();

    assert!(result.passed, "{}", result.format_cli());
    assert_eq!(result.actual_hash, report.sha256);
}
