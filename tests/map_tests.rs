//! Map tests - grid layout, hit-testing and tile factories

use tui_builder::core::{Bitmap, BuilderError, BuiltinAssets, Drawable, Map, Tile, TileStyle};
use tui_builder::types::{color, Point, Rect, TileVariant};

#[test]
fn test_blank_map_30_by_15() {
    let map = Map::blank(Point::new(0, 0), 30, 15, &BuiltinAssets).unwrap();
    assert_eq!(map.len(), 900);
    assert_eq!(map.rect(), Rect::new(0, 0, 450, 450));
    assert!(map
        .tiles()
        .iter()
        .all(|t| t.tile_variant() == TileVariant::Blank));
}

#[test]
fn test_tile_origins_follow_grid() {
    let map = Map::blank(Point::new(0, 0), 5, 6, &BuiltinAssets).unwrap();
    for row in 0..5u16 {
        for col in 0..5u16 {
            let tile = map.tile_at(row, col).unwrap();
            assert_eq!(
                tile.rect,
                Rect::new(col as i32 * 6, row as i32 * 6, 6, 6),
                "tile ({}, {})",
                row,
                col
            );
        }
    }
}

#[test]
fn test_click_right_of_map_misses() {
    let map = Map::blank(Point::new(0, 0), 30, 15, &BuiltinAssets).unwrap();
    assert_eq!(map.pos_to_tile(460, 10), None);
    assert_eq!(map.pos_to_tile(450, 0), None);
    assert_eq!(map.pos_to_tile(0, 450), None);
    assert_eq!(map.pos_to_tile(-1, 0), None);
}

#[test]
fn test_click_inside_tile_resolves_row_and_col() {
    let map = Map::blank(Point::new(0, 0), 30, 15, &BuiltinAssets).unwrap();
    let id = map.pos_to_tile(46, 31).unwrap();
    assert_eq!(Some(id), map.id_at(2, 3));
    assert_eq!(id.row(map.size()), 2);
    assert_eq!(id.col(map.size()), 3);

    // Idempotent.
    assert_eq!(map.pos_to_tile(46, 31), Some(id));
}

#[test]
fn test_offset_map_subtracts_origin() {
    let map = Map::blank(Point::new(100, 50), 4, 10, &BuiltinAssets).unwrap();
    assert_eq!(map.pos_to_tile(5, 5), None);
    assert_eq!(map.pos_to_tile(100, 50), map.id_at(0, 0));
    assert_eq!(map.pos_to_tile(139, 89), map.id_at(3, 3));
    assert_eq!(map.pos_to_tile(140, 89), None);
}

#[test]
fn test_variant_factory_by_name_and_index() {
    let water = Tile::variant("water", 4, &BuiltinAssets).unwrap();
    assert_eq!(water.kind(), "water");

    let expected = ["field", "water", "mountain", "forest"];
    for (index, name) in expected.iter().enumerate() {
        let tile = Tile::variant(index as u32, 4, &BuiltinAssets).unwrap();
        assert_eq!(tile.kind(), *name);
    }

    assert_eq!(
        Tile::variant("FOREST", 4, &BuiltinAssets).unwrap().tile_variant(),
        TileVariant::Forest
    );
}

#[test]
fn test_unknown_variant_is_rejected() {
    assert!(matches!(
        Tile::variant(4u32, 4, &BuiltinAssets),
        Err(BuilderError::UnknownVariant(_))
    ));
    assert!(matches!(
        Tile::variant("lava", 4, &BuiltinAssets),
        Err(BuilderError::UnknownVariant(_))
    ));
    // Blank is not reachable through the tag factory.
    assert!(matches!(
        Tile::variant("blank", 4, &BuiltinAssets),
        Err(BuilderError::UnknownVariant(_))
    ));
}

#[test]
fn test_tile_art_is_scaled_to_size() {
    let tile = Tile::new(TileVariant::Field, 15, &BuiltinAssets).unwrap();
    assert_eq!(tile.image().width(), 15);
    assert_eq!(tile.image().height(), 15);
    assert_eq!(tile.rect, Rect::new(0, 0, 15, 15));
}

#[test]
fn test_draw_composites_tiles_at_map_origin() {
    let mut map = Map::build(Point::new(8, 0), 2, 4, TileStyle::default(), &BuiltinAssets, || {
        TileVariant::Water
    })
    .unwrap();
    let mut window = Bitmap::new(16, 8, color::RED);
    map.draw(&mut window, (), true);

    let art = map.tile_at(0, 0).unwrap().image().clone();
    assert_eq!(window.get(7, 0), Some(color::RED));
    assert_eq!(window.get(8, 0), art.get(0, 0));
    assert_eq!(window.get(15, 7), map.tile_at(1, 1).unwrap().image().get(3, 3));
}

#[test]
fn test_mountain_sky_shows_map_background() {
    let mut map = Map::build(Point::new(0, 0), 1, 8, TileStyle::default(), &BuiltinAssets, || {
        TileVariant::Mountain
    })
    .unwrap();
    let mut window = Bitmap::new(8, 8, color::RED);
    map.draw(&mut window, (), true);
    // Sky pixels are keyed out; the map panel is black underneath.
    assert_eq!(window.get(0, 0), Some(color::BLACK));
}
