use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::anim::{AnimError, Easing};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomConfig>,

    #[serde(default = "default_dungeon")]
    pub dungeon: DungeonConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Seconds to glide between rooms.
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f32,
    /// Seconds to swing to a new yaw.
    #[serde(default = "default_rotation_duration")]
    pub rotation_duration: f32,
    #[serde(default = "default_camera_height")]
    pub height: f32,
    #[serde(default = "default_camera_distance")]
    pub distance: f32,
    /// Downward pitch in degrees.
    #[serde(default = "default_camera_angle")]
    pub angle: f32,
    #[serde(default = "default_easing")]
    pub easing: Easing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Rooms are referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub entry: String,
    #[serde(default)]
    pub encounters: Vec<String>,
    pub boss: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated seconds to run for.
    #[serde(default = "default_demo_duration")]
    pub duration: f32,
    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,
    /// Fraction of the frame time randomly added or removed per tick.
    #[serde(default = "default_frame_jitter")]
    pub frame_jitter: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            rooms: default_rooms(),
            dungeon: default_dungeon(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            transition_duration: default_transition_duration(),
            rotation_duration: default_rotation_duration(),
            height: default_camera_height(),
            distance: default_camera_distance(),
            angle: default_camera_angle(),
            easing: default_easing(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration: default_demo_duration(),
            fps_cap: default_fps_cap(),
            frame_jitter: default_frame_jitter(),
        }
    }
}

impl CameraConfig {
    /// Both durations must be usable as tween durations.
    pub fn validate(&self) -> Result<(), AnimError> {
        for duration in [self.transition_duration, self.rotation_duration] {
            if !(duration.is_finite() && duration > 0.0) {
                return Err(AnimError::InvalidDuration(duration));
            }
        }
        Ok(())
    }
}

impl DemoConfig {
    /// Usable jitter fraction; anything non-finite means no jitter.
    pub fn jitter(&self) -> f32 {
        if self.frame_jitter.is_finite() {
            self.frame_jitter.clamp(0.0, 0.9)
        } else {
            0.0
        }
    }
}

impl RoomConfig {
    pub fn min(&self) -> Vec3 {
        Vec3::from_array(self.min)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::from_array(self.max)
    }
}

fn default_transition_duration() -> f32 {
    1.0
}

fn default_rotation_duration() -> f32 {
    1.0
}

fn default_camera_height() -> f32 {
    9.0
}

fn default_camera_distance() -> f32 {
    4.0
}

fn default_camera_angle() -> f32 {
    70.0
}

fn default_easing() -> Easing {
    Easing::EaseInOut
}

fn room(name: &str, min: [f32; 3], max: [f32; 3]) -> RoomConfig {
    RoomConfig {
        name: name.to_string(),
        min,
        max,
    }
}

fn default_rooms() -> Vec<RoomConfig> {
    vec![
        room("entry", [-6.0, 0.0, -6.0], [6.0, 4.0, 6.0]),
        room("armory", [6.0, 0.0, -6.0], [18.0, 4.0, 6.0]),
        room("crypt", [-6.0, 0.0, 6.0], [6.0, 4.0, 18.0]),
        room("throne", [6.0, 0.0, 6.0], [22.0, 6.0, 22.0]),
    ]
}

fn default_dungeon() -> DungeonConfig {
    DungeonConfig {
        entry: "entry".to_string(),
        encounters: vec!["armory".to_string(), "crypt".to_string()],
        boss: "throne".to_string(),
    }
}

fn default_demo_duration() -> f32 {
    12.0
}

fn default_fps_cap() -> u32 {
    60
}

fn default_frame_jitter() -> f32 {
    0.5
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("delve").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.camera.height, 9.0);
        assert_eq!(config.rooms.len(), 4);
        assert_eq!(config.dungeon.boss, "throne");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[camera]\nrotation_duration = 0.25\neasing = \"smooth\"\n\n[demo]\nfps_cap = 30\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.camera.rotation_duration, 0.25);
        assert_eq!(config.camera.transition_duration, 1.0);
        assert!(matches!(config.camera.easing, Easing::Smooth));
        assert_eq!(config.demo.fps_cap, 30);
        assert_eq!(config.demo.duration, 12.0);
        assert_eq!(config.dungeon.entry, "entry");
    }

    #[test]
    fn save_then_load_keeps_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.rooms.push(room("vault", [30.0, 0.0, 0.0], [40.0, 4.0, 10.0]));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.rooms.len(), 5);
        assert_eq!(loaded.rooms[4].max(), Vec3::new(40.0, 4.0, 10.0));
    }

    #[test]
    fn jitter_is_clamped_and_nan_safe() {
        let mut demo = DemoConfig::default();
        assert_eq!(demo.jitter(), 0.5);
        demo.frame_jitter = 3.0;
        assert_eq!(demo.jitter(), 0.9);
        demo.frame_jitter = -1.0;
        assert_eq!(demo.jitter(), 0.0);
        demo.frame_jitter = f32::NAN;
        assert_eq!(demo.jitter(), 0.0);
        demo.frame_jitter = f32::INFINITY;
        assert_eq!(demo.jitter(), 0.0);
    }

    #[test]
    fn nan_jitter_parses_from_toml() {
        let config: Config = toml::from_str("[demo]\nframe_jitter = nan\n").unwrap();
        assert!(config.demo.frame_jitter.is_nan());
        assert_eq!(config.demo.jitter(), 0.0);
    }

    #[test]
    fn camera_durations_are_validated() {
        assert!(CameraConfig::default().validate().is_ok());
        let camera = CameraConfig {
            transition_duration: 0.0,
            ..CameraConfig::default()
        };
        assert_eq!(camera.validate(), Err(AnimError::InvalidDuration(0.0)));
    }

    #[test]
    fn bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "camera = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
