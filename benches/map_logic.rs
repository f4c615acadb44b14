use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_builder::core::{Bitmap, BuiltinAssets, Drawable, Map, TileStyle};
use tui_builder::engine::{Game, GameConfig};
use tui_builder::types::{color, GameAction, Point};

fn bench_pos_to_tile(c: &mut Criterion) {
    let map = Map::blank(Point::new(0, 0), 30, 15, &BuiltinAssets).unwrap();

    c.bench_function("pos_to_tile_last_tile", |b| {
        b.iter(|| map.pos_to_tile(black_box(449), black_box(449)))
    });
    c.bench_function("pos_to_tile_miss", |b| {
        b.iter(|| map.pos_to_tile(black_box(460), black_box(10)))
    });
}

fn bench_map_update(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let style = TileStyle::default();
    let mut map = Map::generate(Point::new(0, 0), 30, 15, style, &BuiltinAssets, &mut rng).unwrap();
    let mut window = Bitmap::new(600, 450, color::BLACK);

    c.bench_function("map_draw_30x30", |b| {
        b.iter(|| {
            map.draw(&mut window, (), true);
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    c.bench_function("map_generate_30x30", |b| {
        b.iter(|| {
            Map::generate(Point::new(0, 0), 30, 15, TileStyle::default(), &BuiltinAssets, &mut rng)
                .unwrap()
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let config = GameConfig {
        seed: Some(12345),
        ..GameConfig::default()
    };
    let mut game = Game::new(config, Box::new(BuiltinAssets)).unwrap();
    game.apply_action(GameAction::Select { x: 5, y: 5 }).unwrap();

    c.bench_function("game_render_frame", |b| {
        b.iter(|| {
            black_box(game.render());
        })
    });
}

criterion_group!(
    benches,
    bench_pos_to_tile,
    bench_map_update,
    bench_generate,
    bench_frame
);
criterion_main!(benches);
