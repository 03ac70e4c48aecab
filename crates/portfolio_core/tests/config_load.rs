use portfolio_core::{ConfigError, PortfolioApi, PortfolioConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_reads_seed_projects_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "projects": [
                {{ "title": "EduSync", "description": "ERP", "technologies": "Python, Django" }},
                {{ "title": "Auth", "description": "Login", "image": "auth.png" }}
            ],
            "filter_tags": ["Rust"],
            "viewport_width": 500
        }}"#
    )
    .unwrap();

    let config = PortfolioConfig::load(file.path()).unwrap();
    assert_eq!(config.projects.len(), 2);
    assert_eq!(config.filter_tokens(), vec!["all", "rust"]);

    let api = PortfolioApi::from_config(&config);
    let projects = api.get_projects();
    assert_eq!(projects[0].id, 1);
    assert_eq!(projects[1].id, 2);
    assert_eq!(projects[1].image, "auth.png");
    assert!(projects[1].technologies.is_empty());
    assert!(api.viewport().is_mobile());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortfolioConfig::load(dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PortfolioConfig::from_json_str(r#"{"projects": [{"title": 1}]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
