//! 配置驱动的引擎启动测试

use std::fs;

use progression_engine::{CompatibilityTable, EventCategory, InterestSet, ProgressionEngine};
use tempfile::TempDir;
use veteran_shared::config::AppConfig;

#[test]
fn test_bootstrap_with_deployment_specific_ladder() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        r#"
        [observability]
        log_level = "warn"

        [[progression.ladder]]
        name = "Recruit"
        threshold = 0

        [[progression.ladder]]
        name = "Mentor"
        threshold = 1000

        [progression.compatibility]
        preset = "organizer"
        version = 2

        [[progression.compatibility.categories]]
        category = "Book Reading"
        interests = ["Poetry"]
        "#,
    )
    .unwrap();

    let config = AppConfig::load_from_dir("progression-engine", "test", dir.path()).unwrap();
    let engine = ProgressionEngine::bootstrap_with(&config).unwrap();

    assert_eq!(engine.ranks().current_tier(999).unwrap().name, "Recruit");
    assert_eq!(engine.ranks().current_tier(1000).unwrap().name, "Mentor");

    let table = engine.matcher().table();
    assert_eq!(table.version(), 2);
    assert!(engine.matcher().is_match(&InterestSet::from_raw(["Poetry"]), "Book Reading"));
    assert!(!engine.matcher().is_match(&InterestSet::from_raw(["Writing"]), "Book Reading"));
    assert_eq!(
        table.interests_for(EventCategory::HospitalVisit),
        CompatibilityTable::organizer().interests_for(EventCategory::HospitalVisit)
    );
}

#[test]
fn test_bootstrap_rejects_invalid_ladder() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        r#"
        [[progression.ladder]]
        name = "Recruit"
        threshold = 100
        "#,
    )
    .unwrap();

    let config = AppConfig::load_from_dir("progression-engine", "test", dir.path()).unwrap();
    assert!(ProgressionEngine::bootstrap_with(&config).is_err());
}
