//! Camera transitions for a top-down dungeon crawler.
//!
//! The core is [`anim::Tween`], a restartable, time-driven interpolation
//! between two values with a pluggable [`anim::Easing`] curve. The rest of
//! the crate drives it: [`camera::CameraRig`] glides between rooms and swings
//! around them, [`app::App`] owns the per-tick update loop.

pub mod anim;
pub mod app;
pub mod camera;
pub mod config;
pub mod dungeon;
pub mod rooms;

pub use anim::{AnimError, Degrees, Easing, Interpolate, Tween};
pub use app::{App, GameEvent};
pub use camera::CameraRig;
pub use config::{CameraConfig, Config};
pub use dungeon::{Dungeon, DungeonEvent, Encounter};
pub use rooms::{Bounds, Room, RoomList};
