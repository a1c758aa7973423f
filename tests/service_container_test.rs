//! Wiring of settings, filesystem and services

use std::path::PathBuf;
use std::sync::Arc;

use cinepath::config::Settings;
use cinepath::domain::SessionRecord;
use cinepath::infrastructure::traits::{FileSystem, MemoryFileSystem};
use cinepath::infrastructure::ServiceContainer;

fn settings(max_sessions: usize) -> Settings {
    Settings {
        base_dir: PathBuf::from("/virtual/cinepath"),
        history_file: None,
        max_sessions,
        record_history: true,
    }
}

#[test]
fn given_container_when_recording_then_history_lands_under_base_dir() {
    // Arrange
    let fs = Arc::new(MemoryFileSystem::new());
    let container = ServiceContainer::with_deps(settings(10), fs.clone()).unwrap();
    let result = container.engine.traverse(&[true; 10]);

    // Act
    container
        .history()
        .unwrap()
        .record(SessionRecord::new(&result, &container.engine.stats()))
        .unwrap();

    // Assert
    let path = PathBuf::from("/virtual/cinepath/history.toml");
    assert!(fs.exists(&path));
    assert_eq!(container.history().unwrap().len(), 1);
}

#[test]
fn given_cap_in_settings_when_opening_history_then_service_uses_it() {
    let container =
        ServiceContainer::with_deps(settings(2), Arc::new(MemoryFileSystem::new())).unwrap();

    let history = container.history().unwrap();

    assert_eq!(history.max_sessions(), 2);
    assert_eq!(history.path(), PathBuf::from("/virtual/cinepath/history.toml"));
}

#[test]
fn given_memory_fs_when_removing_missing_file_then_not_found() {
    let fs = MemoryFileSystem::new();

    let err = fs.remove_file(&PathBuf::from("/nope")).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
