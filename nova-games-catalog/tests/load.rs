use nova_games_catalog::{
    CatalogError, CatalogIssue, RecordField, builtin_catalog, derive_categories, load_catalog,
    load_records,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const TWO_GAMES_JSON: &str = r#"
[
  {
    "id": "slope",
    "title": "Slope",
    "thumbnail": "https://img.example/slope.png",
    "category": "Arcade",
    "iframeUrl": "https://play.example/slope/"
  },
  {
    "id": "2048",
    "title": "2048",
    "thumbnail": "https://img.example/2048.png",
    "category": "Puzzle",
    "iframeUrl": "https://play.example/2048/"
  }
]
"#;

#[test]
fn load_json_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(tmp.path(), "games.json", TWO_GAMES_JSON);

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let slope = &catalog.games()[0];
    assert_eq!(slope.id, "slope");
    assert_eq!(slope.title, "Slope");
    assert_eq!(slope.category, "Arcade");
    assert_eq!(slope.iframe_url, "https://play.example/slope/");
    assert_eq!(catalog.get("2048").map(|g| g.title.as_str()), Some("2048"));
    assert!(catalog.get("missing").is_none());
}

#[test]
fn load_yaml_catalog_accepts_both_url_spellings() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(
        tmp.path(),
        "games.yml",
        r#"
- id: slope
  title: Slope
  thumbnail: https://img.example/slope.png
  category: Arcade
  iframeUrl: https://play.example/slope/
- id: hextris
  title: Hextris
  thumbnail: https://img.example/hextris.png
  category: Puzzle
  iframe_url: https://play.example/hextris/
"#,
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.games()[1].iframe_url, "https://play.example/hextris/");
}

#[test]
fn json_and_yaml_yield_same_records() {
    let tmp = TempDir::new().unwrap();
    let json = write_file(tmp.path(), "games.json", TWO_GAMES_JSON);
    let yaml = write_file(
        tmp.path(),
        "games.yaml",
        r#"
- id: slope
  title: Slope
  thumbnail: https://img.example/slope.png
  category: Arcade
  iframeUrl: https://play.example/slope/
- id: "2048"
  title: "2048"
  thumbnail: https://img.example/2048.png
  category: Puzzle
  iframeUrl: https://play.example/2048/
"#,
    );

    assert_eq!(load_records(&json).unwrap(), load_records(&yaml).unwrap());
}

#[test]
fn empty_list_is_a_valid_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(tmp.path(), "games.json", "[]");
    let catalog = load_catalog(&path).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.first().is_none());
}

#[test]
fn missing_field_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(
        tmp.path(),
        "games.json",
        r#"[{ "id": "a", "title": "A", "thumbnail": "t", "category": "Arcade" }]"#,
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains("iframeUrl"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(
        tmp.path(),
        "games.json",
        r#"[
          { "id": "a", "title": "A", "thumbnail": "t", "category": "Arcade", "iframeUrl": "u" },
          { "id": "a", "title": "B", "thumbnail": "t", "category": "Arcade", "iframeUrl": "u" }
        ]"#,
    );
    match load_catalog(&path) {
        Err(CatalogError::Invalid(issues)) => {
            assert_eq!(
                issues,
                vec![CatalogIssue::DuplicateId {
                    id: "a".into(),
                    first: 0,
                    second: 1,
                }]
            );
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn load_records_does_not_validate() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(
        tmp.path(),
        "games.json",
        r#"[{ "id": "a", "title": "", "thumbnail": "t", "category": "Arcade", "iframeUrl": "u" }]"#,
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);

    let err = load_catalog(&path).unwrap_err();
    let CatalogError::Invalid(issues) = err else {
        panic!("expected Invalid");
    };
    assert!(matches!(
        issues[0],
        CatalogIssue::EmptyField {
            field: RecordField::Title,
            ..
        }
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_file(tmp.path(), "games.txt", TWO_GAMES_JSON);
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalog(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = builtin_catalog().unwrap();
    assert!(!catalog.is_empty());
    let categories = derive_categories(catalog.games());
    assert_eq!(categories[0].label(), "All");
    assert!(categories.len() > 2);
}
