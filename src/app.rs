use anyhow::{Context, Result};
use log::{info, warn};

use crate::anim::AnimError;
use crate::camera::CameraRig;
use crate::config::Config;
use crate::dungeon::{Dungeon, DungeonEvent};
use crate::rooms::{Bounds, Room, RoomList};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnterRoom(usize),
    RotateCamera { yaw: f32 },
    EncounterCleared(usize),
}

pub struct App {
    pub config: Config,
    pub rooms: RoomList,
    pub dungeon: Dungeon,
    pub camera: CameraRig,
    pub current_room: usize,
    pub time: f32,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let rooms: RoomList = config
            .rooms
            .iter()
            .map(|r| Room::new(r.name.clone(), Bounds::from_corners(r.min(), r.max())))
            .collect();

        let lookup = |name: &str| {
            rooms
                .index_of(name)
                .with_context(|| format!("Dungeon refers to unknown room '{}'", name))
        };
        let entry = lookup(&config.dungeon.entry)?;
        let encounters = config
            .dungeon
            .encounters
            .iter()
            .map(|name| lookup(name))
            .collect::<Result<Vec<_>>>()?;
        let boss = lookup(&config.dungeon.boss)?;
        if boss == entry {
            anyhow::bail!("Boss room '{}' cannot be the entry room", config.dungeon.boss);
        }
        if encounters.contains(&boss) {
            anyhow::bail!(
                "Boss room '{}' is also listed as an encounter",
                config.dungeon.boss
            );
        }

        info!(
            "Loaded dungeon with {} rooms, {} encounters",
            rooms.len(),
            encounters.len()
        );

        let dungeon = Dungeon::new(entry, &encounters, boss);
        let camera =
            CameraRig::new(config.camera.clone()).context("Invalid camera configuration")?;

        Ok(Self {
            config,
            rooms,
            dungeon,
            camera,
            current_room: entry,
            time: 0.0,
        })
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::EnterRoom(index) => {
                if index == self.current_room {
                    return;
                }
                if index == self.dungeon.boss().room && !self.dungeon.is_boss_door_open() {
                    info!("Boss door is still shut");
                    return;
                }
                match self.rooms.get(index) {
                    Some(room) => {
                        info!("Entered room '{}'", room.name);
                        self.current_room = index;
                        self.camera.on_room_changed();
                    }
                    None => warn!("Ignoring move to unknown room {}", index),
                }
            }
            GameEvent::RotateCamera { yaw } => {
                if let Err(e) = self.camera.set_yaw(yaw) {
                    warn!("Ignoring camera rotation: {}", e);
                }
            }
            GameEvent::EncounterCleared(room) => {
                if self.dungeon.clear_encounter(room) {
                    info!("Encounter in room {} cleared", room);
                } else {
                    warn!("No fightable encounter in room {}", room);
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) -> Result<Vec<DungeonEvent>> {
        if !(dt >= 0.0) {
            return Err(AnimError::InvalidDelta(dt).into());
        }
        self.time += dt;

        let room = self
            .rooms
            .get(self.current_room)
            .context("Current room is missing")?;
        self.camera.update(dt, room)?;

        let events = self.dungeon.update();
        for event in &events {
            match event {
                DungeonEvent::BossDoorOpened => info!("The boss door grinds open"),
                DungeonEvent::ExitDoorOpened => info!("The dungeon exit is open"),
            }
        }
        Ok(events)
    }

    pub fn room(&self) -> Option<&Room> {
        self.rooms.get(self.current_room)
    }
}
