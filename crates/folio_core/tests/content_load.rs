use folio_core::{
    builtin_content, load_content, ContentLoadError, ContentValidationError, PortfolioContent,
    ProjectStatus,
};

fn write_json(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn builtin_content_matches_original_page() {
    let content = builtin_content();
    content.validate().unwrap();

    assert_eq!(content.profile.brand, "YourName.dev");
    assert_eq!(content.projects.len(), 3);
    assert_eq!(
        content.project("Personal Blog").unwrap().status,
        ProjectStatus::InProgress
    );
    let html5 = content.skills.iter().find(|skill| skill.name == "HTML5").unwrap();
    assert_eq!(html5.level, 90);
    assert_eq!(content.contacts.len(), 3);
}

#[test]
fn load_content_reads_serialized_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let value = serde_json::to_value(builtin_content()).unwrap();
    assert_eq!(value["projects"][2]["status"], "in_progress");
    assert_eq!(value["contacts"][1]["kind"], "github");

    let path = write_json(&dir, "content.json", &value);
    let loaded: PortfolioContent = load_content(&path).unwrap();
    assert_eq!(&loaded, builtin_content());
}

#[test]
fn optional_sections_default_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = serde_json::to_value(builtin_content()).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("technical_expertise");
    object.remove("api_samples");

    let loaded = load_content(write_json(&dir, "minimal.json", &value)).unwrap();
    assert!(loaded.technical_expertise.is_empty());
    assert!(loaded.api_samples.is_empty());
}

#[test]
fn load_content_rejects_out_of_range_skill() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = serde_json::to_value(builtin_content()).unwrap();
    value["skills"][0]["level"] = serde_json::json!(120);

    let err = load_content(write_json(&dir, "bad.json", &value)).unwrap_err();
    match err {
        ContentLoadError::Invalid(ContentValidationError::SkillLevelOutOfRange { name, level }) => {
            assert_eq!(name, "JavaScript");
            assert_eq!(level, 120);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_content_rejects_duplicate_project_titles() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = serde_json::to_value(builtin_content()).unwrap();
    let first = value["projects"][0].clone();
    value["projects"].as_array_mut().unwrap().push(first);

    let err = load_content(write_json(&dir, "dup.json", &value)).unwrap_err();
    assert!(
        err.to_string().contains("duplicated: Task Management App"),
        "unexpected error: {err}"
    );
}

#[test]
fn load_content_reports_parse_and_io_failures() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        load_content(&broken).unwrap_err(),
        ContentLoadError::Parse { .. }
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_content(&missing).unwrap_err(),
        ContentLoadError::Io { .. }
    ));
}

#[test]
fn validate_rejects_project_without_tech() {
    let mut content = builtin_content().clone();
    content.projects[1].tech = vec!["  ".to_string()];

    assert_eq!(
        content.validate().unwrap_err(),
        ContentValidationError::MissingProjectTech("Weather Dashboard".to_string())
    );
}
