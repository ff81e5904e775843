//! Tests for loading configuration files.

use grandpas_dots::RankPolicy;
use grandpas_dots_cli::{GameConfig, Overrides};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_file_loads() {
    let file = write_config(
        r#"
board_size = 7
players = 4
rank_policy = "shared"
offered_sizes = [3, 7]
log_filter = "debug"
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 7);
    assert_eq!(*config.players(), 4);
    assert_eq!(*config.rank_policy(), RankPolicy::Shared);
    assert_eq!(config.offered_sizes(), &vec![3, 7]);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = write_config("players = 3\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.players(), 3);
    assert_eq!(*config.board_size(), 3);
    assert_eq!(config.offered_sizes(), &vec![3, 5, 7, 9]);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_flags_override_file() {
    let file = write_config("board_size = 5\nplayers = 3\n");
    let config = GameConfig::resolve(
        Some(file.path()),
        Overrides {
            players: Some(6),
            ..Overrides::default()
        },
    )
    .unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(*config.players(), 6);
}

#[test]
fn test_invalid_file_values_rejected() {
    let file = write_config("board_size = 4\n");
    assert!(GameConfig::resolve(Some(file.path()), Overrides::default()).is_err());

    let file = write_config("players = 9\n");
    assert!(GameConfig::resolve(Some(file.path()), Overrides::default()).is_err());
}

#[test]
fn test_malformed_files_rejected() {
    let file = write_config("board_size = \"big\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));

    let file = write_config("colour = \"red\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());

    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_explicit_path_wins() {
    let file = write_config("players = 3\n");
    let located = GameConfig::locate(Some(file.path().to_path_buf()));
    assert_eq!(located.as_deref(), Some(file.path()));
}

#[test]
fn test_toml_output_loads_back() {
    let config = GameConfig::default().with_overrides(Overrides {
        board_size: Some(9),
        players: Some(5),
        rank_policy: Some(RankPolicy::Shared),
    });
    let text = config.to_toml().unwrap();
    assert!(text.contains("rank_policy = \"shared\""));

    let file = write_config(&text);
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), config);
}
