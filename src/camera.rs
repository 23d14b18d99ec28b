use glam::{EulerRot, Quat, Vec3};
use log::{debug, info};

use crate::anim::{AnimError, Degrees, Tween};
use crate::config::CameraConfig;
use crate::rooms::Room;

/// Keeps the camera framed on the current room.
///
/// Room changes glide the camera to the new room; yaw changes swing it
/// around the room it is looking at. A rotation in flight takes priority:
/// a pending room move starts only once the camera has stopped turning.
#[derive(Debug)]
pub struct CameraRig {
    config: CameraConfig,
    position: Vec3,
    rotation: Quat,
    yaw: Degrees,
    room_changed: bool,
    move_tween: Option<Tween<Vec3>>,
    rotate_tween: Option<Tween<Quat>>,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Result<Self, AnimError> {
        config.validate()?;
        let yaw = Degrees(0.0);
        let rotation = orientation(config.angle, yaw);
        Ok(Self {
            position: Vec3::new(0.0, config.height, -config.distance),
            rotation,
            yaw,
            room_changed: false,
            move_tween: None,
            rotate_tween: None,
            config,
        })
    }

    pub fn on_room_changed(&mut self) {
        self.room_changed = true;
    }

    /// Swing the camera to look along `yaw` degrees.
    ///
    /// Replaces any rotation already in progress, starting from wherever the
    /// camera is currently pointing.
    pub fn set_yaw(&mut self, yaw: f32) -> Result<(), AnimError> {
        let yaw = Degrees(yaw).wrapped();
        let target = orientation(self.config.angle, yaw);
        let tween = Tween::new(
            self.rotation,
            target,
            self.config.rotation_duration,
            self.config.easing,
        )?;

        if self.rotate_tween.is_some() {
            debug!("Overriding camera rotation in progress");
        }
        info!("Rotating camera to yaw {:.1}", yaw.0);
        self.yaw = yaw;
        self.rotate_tween = Some(tween);
        Ok(())
    }

    /// Advance the camera by one tick, framing `room`.
    pub fn update(&mut self, dt: f32, room: &Room) -> Result<(), AnimError> {
        if let Some(tween) = self.rotate_tween.as_mut() {
            let rotation = tween.advance(dt)?;
            let done = tween.is_complete();
            self.rotation = rotation;
            self.position = self.framing_position(room);
            if done {
                debug!("Camera rotation finished");
                self.rotate_tween = None;
            }
            return Ok(());
        }

        if self.room_changed {
            let destination = self.framing_position(room);
            let tween = Tween::new(
                self.position,
                destination,
                self.config.transition_duration,
                self.config.easing,
            )?;
            info!("Moving camera to room '{}' at {:?}", room.name, destination);
            self.move_tween = Some(tween);
            self.room_changed = false;
        }

        if let Some(tween) = self.move_tween.as_mut() {
            let position = tween.advance(dt)?;
            let done = tween.is_complete();
            self.position = position;
            if done {
                debug!("Camera move finished");
                self.move_tween = None;
            }
        }

        Ok(())
    }

    /// Where the camera sits to look at `room` with its current rotation.
    pub fn framing_position(&self, room: &Room) -> Vec3 {
        let forward = self.forward();
        let flat = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        room.centre() + Vec3::Y * self.config.height - flat * self.config.distance
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn yaw(&self) -> Degrees {
        self.yaw
    }

    pub fn is_moving(&self) -> bool {
        self.move_tween.is_some() || self.room_changed
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate_tween.is_some()
    }

    pub fn rotation_tween(&self) -> Option<&Tween<Quat>> {
        self.rotate_tween.as_ref()
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

/// Camera orientation pitched down by `angle` degrees and turned by `yaw`.
fn orientation(angle: f32, yaw: Degrees) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), angle.to_radians(), 0.0)
}
