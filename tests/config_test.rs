use std::fs;

use tui_snake::core::Grid;
use tui_snake::{ConfigError, GameConfig};

#[test]
fn config_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!("tui-snake-config-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{ "tick_rate_hz": 10, "cell_px": 25, "canvas_width_px": 500, "canvas_height_px": 250 }"#,
    )
    .unwrap();

    let config = GameConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(config.validate().is_ok());
    assert_eq!(config.grid(), Grid::new(20, 10));
    assert_eq!(config.scheduler().tick_interval_ms(), 100);
    assert_eq!(config.seed, None);

    let game = config.new_game(1);
    assert_eq!(game.head(), Grid::new(20, 10).center());
}

#[test]
fn serialized_defaults_parse_back() {
    let json = serde_json::to_string(&GameConfig::default()).unwrap();
    assert_eq!(GameConfig::from_json_str(&json).unwrap(), GameConfig::default());
}

#[test]
fn broken_json_is_a_parse_error() {
    let err = GameConfig::from_json_str("{ tick_rate_hz: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}
