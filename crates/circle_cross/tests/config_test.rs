//! Tests for loading session configuration from disk.

use circle_cross::{Difficulty, GameSession, Mode, SessionConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file_reads_all_sections() {
    let file = write_config(
        r#"
        mode = "human-vs-computer"
        difficulty = "easy"
        seed = 7
        computer_delay_ms = 250

        [policy]
        strategic_probability = 0.9
        "#,
    );

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(*config.policy().strategic_probability(), 0.9);
    assert_eq!(*config.policy().center_probability(), 0.5);
}

#[test]
fn test_from_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_from_file_rejects_bad_probability() {
    let file = write_config("[policy]\ncenter_probability = -0.1\n");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("center_probability"));
}

#[test]
fn test_from_file_rejects_malformed_toml() {
    let file = write_config("mode = ");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_path_wins() {
    let file = write_config("mode = \"human-vs-human\"\n");
    let config = SessionConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.mode(), Mode::HumanVsHuman);
}

#[test]
fn test_session_from_loaded_config() {
    let file = write_config("mode = \"human-vs-computer\"\ndifficulty = \"hard\"\n");
    let config = SessionConfig::from_file(file.path()).unwrap();
    let mut session = GameSession::from_config(&config);
    assert_eq!(session.policy_name(), "minimax");
    let snapshot = session.apply_move(0).unwrap();
    assert_eq!(snapshot.board().get(4), Some(circle_cross::Mark::Cross));
}
