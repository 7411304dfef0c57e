use crate::direction::Direction;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub alien: AlienConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_tilemap_path")]
    pub tilemap_path: String,
    /// Fixed RNG seed, random destinations differ per run when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AlienConfig {
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f64,
    #[serde(default = "default_sprite_dir")]
    pub sprite_dir: String,
    #[serde(default = "default_north_frames")]
    pub north: Vec<String>,
    #[serde(default = "default_east_frames")]
    pub east: Vec<String>,
    #[serde(default = "default_south_frames")]
    pub south: Vec<String>,
    #[serde(default = "default_west_frames")]
    pub west: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_pause_text")]
    pub pause_text: String,
    /// Image stretched over the frozen scene while paused, text is drawn
    /// when unset
    #[serde(default)]
    pub pause_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_audio_enabled")]
    pub enabled: bool,
    #[serde(default = "default_background_path")]
    pub background_path: String,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` wins when set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default values
fn default_tilemap_path() -> String { "assets/tilemap.json".to_string() }
fn default_frame_ms() -> f64 { 100.0 }
fn default_sprite_dir() -> String { "assets/images".to_string() }
fn walk_cycle(prefix: &str) -> Vec<String> {
    [0, 1, 0, 2].iter().map(|i| format!("{}{}", prefix, i)).collect()
}
fn default_north_frames() -> Vec<String> { walk_cycle("alien-back") }
fn default_east_frames() -> Vec<String> { walk_cycle("alien-right") }
fn default_south_frames() -> Vec<String> { walk_cycle("alien-front") }
fn default_west_frames() -> Vec<String> { walk_cycle("alien-left") }
fn default_window_title() -> String { "Alien Maze".to_string() }
fn default_bg_r() -> u8 { 0 }
fn default_bg_g() -> u8 { 0 }
fn default_bg_b() -> u8 { 0 }
fn default_pause_text() -> String { "Paused - press Space".to_string() }
fn default_audio_enabled() -> bool { true }
fn default_background_path() -> String { "assets/audio/background.wav".to_string() }
fn default_volume() -> f32 { 0.5 }
fn default_log_filter() -> String { "info".to_string() }

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tilemap_path: default_tilemap_path(),
            seed: None,
        }
    }
}

impl Default for AlienConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            sprite_dir: default_sprite_dir(),
            north: default_north_frames(),
            east: default_east_frames(),
            south: default_south_frames(),
            west: default_west_frames(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            pause_text: default_pause_text(),
            pause_image: None,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_audio_enabled(),
            background_path: default_background_path(),
            volume: default_volume(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            alien: AlienConfig::default(),
            visual: VisualConfig::default(),
            audio: AudioConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AlienConfig {
    /// Sprite frame names for one walking direction
    pub fn frames(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    /// File a sprite frame is loaded from
    pub fn sprite_source(&self, name: &str) -> String {
        format!("{}/{}.png", self.sprite_dir, name)
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load `config.toml`, see [`Config::load_from`]
    pub fn load() -> Result<Self, toml::de::Error> {
        Self::load_from(CONFIG_PATH)
    }

    /// Load configuration from file, or use defaults if file doesn't exist
    ///
    /// A file that exists but does not parse is returned as an error, the
    /// caller reports it once logging is up.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, toml::de::Error> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(_) => Ok(Config::default()),
        }
    }
}
