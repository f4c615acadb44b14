//! Config tests - loading from disk and the environment override

use tui_builder::engine::config::{CONFIG_ENV, CONFIG_FILE_NAME};
use tui_builder::engine::{ConfigError, GameConfig};
use tui_builder::types::Rgb;

#[test]
fn test_full_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r##"
[game]
caption = "Island"
tile_num = 30
tile_size = 15
interface_width = 150
fps = 30
seed = 9
debug = true
log_file = "island.log"
assets_dir = "art"

[palette]
black = "#101010"
white = "#fefefe"
grey = "#808080"
light_grey = "#c0c0c0"

[interface]
border = 3
img_x_ratio = 0.25
img_y_ratio = 0.5
img_border = 2
"##,
    )
    .unwrap();

    let cfg = GameConfig::from_path(&path).unwrap();
    assert_eq!(cfg.caption, "Island");
    assert_eq!((cfg.width(), cfg.height()), (600, 450));
    assert_eq!(cfg.seed, Some(9));
    assert!(cfg.debug);
    assert_eq!(cfg.log_file, std::path::PathBuf::from("island.log"));
    assert_eq!(cfg.assets_dir, Some("art".into()));
    assert_eq!(cfg.palette.black, Rgb::new(16, 16, 16));

    let layout = cfg.icon_layout();
    assert_eq!(layout.x_ratio, 0.25);
    assert_eq!(layout.border, 2);
    assert_eq!(cfg.interface.border, 3);
    assert_eq!(cfg.tile_style().color_key, Rgb::new(254, 254, 254));
    assert_eq!(cfg.interface_colors().background, Rgb::new(192, 192, 192));
}

#[test]
fn test_env_override_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[game]\ntile_num = 3\n").unwrap();

    std::env::set_var(CONFIG_ENV, &path);
    let loaded = GameConfig::load();
    std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
    let missing = GameConfig::load();
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(loaded.unwrap().tile_num, 3);
    assert!(matches!(missing, Err(ConfigError::Io { .. })));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let cfg = GameConfig::from_toml_str("[game]\nsound = true\n").unwrap();
    assert_eq!(cfg, GameConfig::default());
}
