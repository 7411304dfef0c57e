use alien_maze::config::{Config, CONFIG_PATH};
use alien_maze::scene::register_scene_images;
use alien_maze::{AssetError, AssetStore, Scene, SceneError, Surface, Tilemap};
use arboard::Clipboard;
use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};
use macroquad::prelude::*;
// macroquad's prelude brings its own `rand` module into scope
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const BACKGROUND_MUSIC: &str = "background";
const PAUSE_IMAGE: &str = "pause";

/// Draws straight to the macroquad screen
struct ScreenSurface;

impl Surface for ScreenSurface {
    type Image = Texture2D;

    fn draw_image(&mut self, image: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
        draw_texture_ex(
            image,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }

    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        // Every frame starts from clear_background, nothing to erase
    }
}

/// Background music, present only when audio is enabled
struct Music {
    sounds: AssetStore<Sound>,
    volume: f32,
}

impl Music {
    fn start(&self) {
        if let Ok(sound) = self.sounds.get(BACKGROUND_MUSIC) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: self.volume,
                },
            );
        }
    }

    fn stop(&self) {
        if let Ok(sound) = self.sounds.get(BACKGROUND_MUSIC) {
            stop_sound(sound);
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                warn!(error = %e, "failed to copy to clipboard");
            } else {
                info!("maze snapshot copied to clipboard");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            warn!(error = %e, "failed to access clipboard");
        }
    }
}

async fn load_images(tilemap: &Tilemap, config: &Config) -> Result<AssetStore<Texture2D>, SceneError> {
    let mut images = AssetStore::new();
    register_scene_images(tilemap, &config.alien, &mut images)?;
    if let Some(src) = &config.visual.pause_image {
        images.register(PAUSE_IMAGE, src.clone());
    }

    for (name, src) in images.pending() {
        let texture = load_texture(&src).await.map_err(|e| AssetError::Load {
            name: name.clone(),
            src: src.clone(),
            reason: format!("{:?}", e),
        })?;
        texture.set_filter(FilterMode::Nearest);
        images.insert(name, texture);
    }

    info!(images = images.len(), "images loaded");
    Ok(images)
}

async fn load_music(config: &Config) -> Result<Music, SceneError> {
    let mut sounds = AssetStore::new();

    if config.audio.enabled {
        let src = config.audio.background_path.clone();
        sounds.register(BACKGROUND_MUSIC, src.clone());
        let sound = load_sound(&src).await.map_err(|e| AssetError::Load {
            name: BACKGROUND_MUSIC.to_string(),
            src,
            reason: format!("{:?}", e),
        })?;
        sounds.insert(BACKGROUND_MUSIC, sound);
    }

    Ok(Music {
        sounds,
        volume: config.audio.volume,
    })
}

async fn run(config: Config) -> Result<(), SceneError> {
    let tilemap = Tilemap::load(&config.scene.tilemap_path)?;
    request_new_screen_size(tilemap.width() as f32, tilemap.height() as f32);

    let images = load_images(&tilemap, &config).await?;
    let music = load_music(&config).await?;

    let rng = match config.scene.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut scene: Scene<Texture2D> = Scene::build(&tilemap, &images, &config.alien, rng)?;
    let mut surface = ScreenSurface;

    let background = Color::from_rgba(
        config.visual.background_r,
        config.visual.background_g,
        config.visual.background_b,
        255,
    );

    info!("scene started");
    music.start();

    loop {
        if is_key_pressed(KeyCode::Space) {
            if scene.toggle_playing() {
                music.start();
            } else {
                music.stop();
            }
        }

        // Copy maze snapshot to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&scene.ascii_snapshot());
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(background);

        let elapsed_ms = get_time() * 1000.0;
        if !scene.step(elapsed_ms, &mut surface)
            && !scene.draw_paused(&mut surface, images.get(PAUSE_IMAGE).ok())
        {
            let text = &config.visual.pause_text;
            let dims = measure_text(text, None, 32, 1.0);
            draw_text(
                text,
                (scene.width() - dims.width) / 2.0,
                scene.height() / 2.0,
                32.0,
                WHITE,
            );
        }

        next_frame().await
    }

    music.stop();
    Ok(())
}

fn window_conf() -> Conf {
    let config = Config::load().unwrap_or_default();
    Conf {
        window_title: config.visual.window_title,
        window_width: 640,
        window_height: 360,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, parse_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(&config.logging.filter);
    match parse_error {
        Some(e) => warn!(error = %e, "failed to parse {}, using defaults", CONFIG_PATH),
        None => info!("configuration ready"),
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "scene stopped");
    }
}
