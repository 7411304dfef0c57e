use alien_maze::config::AlienConfig;
use alien_maze::scene::register_scene_images;
use alien_maze::surface::{DrawCall, RecordingSurface};
use alien_maze::{AssetError, AssetStore, Cell, Scene, SceneError, Tilemap};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TILEMAP: &str = r#"{
    "tileSize": 8,
    "tilemap": ["layers/ground.png", "layers/roads.png"],
    "objectmap": [
        [{"name": "road"}, {"name": "road"}, {"name": "road"}],
        [{"name": "road"}, {"name": "tree"}, {"name": "road"}],
        [{"name": "road"}, {"name": "road"}, {"name": "road"}]
    ],
    "animationmap": [
        {"tilemap": [[null, null, null], [null, 0, null], [null, null, null]]}
    ],
    "animations": [
        {"name": "fountain", "frames": [
            {"duration": 200, "tile": {"tilesetIdx": 0, "tileIdx": 0}},
            {"duration": 50, "tile": {"tilesetIdx": 0, "tileIdx": 1}}
        ]}
    ],
    "tileSets": [{"tiles": ["tiles/water0.png", "tiles/water1.png"]}]
}"#;

/// Images are their own asset names
fn named_images(tilemap: &Tilemap, alien: &AlienConfig) -> AssetStore<String> {
    let mut images = AssetStore::new();
    register_scene_images(tilemap, alien, &mut images).unwrap();
    images.load_with(|name, _src| Ok(name.to_string())).unwrap();
    images
}

fn build_scene(seed: u64) -> Scene<String, StdRng> {
    let tilemap = Tilemap::from_json(TILEMAP).unwrap();
    let alien = AlienConfig::default();
    let images = named_images(&tilemap, &alien);
    Scene::build(&tilemap, &images, &alien, StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_build_places_alien_on_road() {
    let scene = build_scene(4);

    assert_eq!(scene.width(), 24.0);
    assert_eq!(scene.height(), 24.0);
    assert_eq!(scene.animated_tiles().len(), 1);
    assert_eq!(scene.animated_tiles()[0].position(), (8.0, 8.0));

    let cell = scene.agent().cell().unwrap();
    assert_ne!(cell, Cell::new(1, 1));
    assert_eq!(scene.agent().position(), cell.to_pixels(8.0));
}

#[test]
fn test_draw_order() {
    let scene = build_scene(4);
    let mut surface = RecordingSurface::new();
    scene.draw(&mut surface);

    let images = surface.images();
    assert_eq!(&images[..3], &["0", "1", "fountain0"]);
    assert_eq!(images.len(), 4);
    assert!(images[3].starts_with("alien-"));
    assert_eq!(
        surface.calls[0],
        DrawCall::Image { image: "0".to_string(), x: 0.0, y: 0.0, w: 24.0, h: 24.0 }
    );
}

#[test]
fn test_pause_gates_step() {
    let mut scene = build_scene(8);
    let mut surface = RecordingSurface::new();

    assert!(scene.step(0.0, &mut surface));
    assert!(!surface.calls.is_empty());

    assert!(!scene.toggle_playing());
    surface.clear();
    let position = scene.agent().position();
    let pixels = scene.agent().pixels_moved();
    for tick in 1..20 {
        assert!(!scene.step(tick as f64 * 16.0, &mut surface));
    }
    assert!(surface.calls.is_empty());
    assert_eq!(scene.agent().position(), position);
    assert_eq!(scene.agent().pixels_moved(), pixels);

    assert!(scene.toggle_playing());
    assert!(scene.step(10_000.0, &mut surface));
}

#[test]
fn test_pause_does_not_bank_time() {
    let mut scene = build_scene(8);
    let mut surface = RecordingSurface::new();

    scene.step(0.0, &mut surface);
    scene.set_playing(false);
    scene.set_playing(true);

    // Ten seconds paused must not flip the fountain on resume
    scene.step(10_000.0, &mut surface);
    assert_eq!(scene.animated_tiles()[0].frame_index(), 0);
    scene.step(10_200.0, &mut surface);
    assert_eq!(scene.animated_tiles()[0].frame_index(), 1);
}

#[test]
fn test_missing_image_is_fatal() {
    let tilemap = Tilemap::from_json(TILEMAP).unwrap();
    let alien = AlienConfig::default();
    let mut images = named_images(&tilemap, &alien);

    // Rebuild the store without the fountain's second frame
    let mut partial = AssetStore::new();
    for (name, src) in [("0", "a"), ("1", "b"), ("fountain0", "c")] {
        partial.register(name, src);
    }
    partial.load_with(|name, _| Ok(name.to_string())).unwrap();
    let result = Scene::<String, StdRng>::build(&tilemap, &partial, &alien, StdRng::seed_from_u64(0));
    assert!(matches!(
        result,
        Err(SceneError::Asset(AssetError::NotFound(ref name))) if name == "fountain1"
    ));

    // Complete store still builds
    images.insert("extra", "unused".to_string());
    assert!(Scene::<String, StdRng>::build(&tilemap, &images, &alien, StdRng::seed_from_u64(0)).is_ok());
}

#[test]
fn test_empty_alien_animation_is_fatal() {
    let tilemap = Tilemap::from_json(TILEMAP).unwrap();
    let mut alien = AlienConfig::default();
    alien.west.clear();
    let images = named_images(&tilemap, &alien);

    let result = Scene::<String, StdRng>::build(&tilemap, &images, &alien, StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(SceneError::MissingRequiredElement(_))));
}

#[test]
fn test_ascii_snapshot_marks_alien() {
    let scene = build_scene(21);
    let snapshot = scene.ascii_snapshot();
    let lines: Vec<&str> = snapshot.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(snapshot.matches('A').count(), 1);
    assert_eq!(lines[1].chars().nth(1), Some('.'));

    let cell = scene.agent().cell().unwrap();
    assert_eq!(
        lines[cell.row as usize].chars().nth(cell.col as usize),
        Some('A')
    );
}

#[test]
fn test_pause_image_covers_canvas() {
    let scene = build_scene(4);
    let mut surface = RecordingSurface::new();

    let pause = "thumbnail".to_string();
    assert!(scene.draw_paused(&mut surface, Some(&pause)));
    assert_eq!(
        surface.calls.last(),
        Some(&DrawCall::Image { image: pause, x: 0.0, y: 0.0, w: 24.0, h: 24.0 })
    );

    // Without an image only the frozen scene is drawn
    surface.clear();
    assert!(!scene.draw_paused(&mut surface, None));
    assert_eq!(surface.images().len(), 4);
}

#[test]
fn test_zero_tile_size_fails_to_load() {
    let json = TILEMAP.replace("\"tileSize\": 8", "\"tileSize\": 0");
    assert!(matches!(
        Tilemap::from_json(&json),
        Err(SceneError::MissingRequiredElement(_))
    ));
}
