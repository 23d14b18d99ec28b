use log::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encounter {
    pub room: usize,
    pub complete: bool,
}

impl Encounter {
    pub fn new(room: usize) -> Self {
        Self {
            room,
            complete: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DungeonEvent {
    BossDoorOpened,
    ExitDoorOpened,
}

/// Door state for one dungeon: the boss door opens once every encounter is
/// cleared, the exit door once the boss is.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub entry_room: usize,
    encounters: Vec<Encounter>,
    boss: Encounter,
    boss_door_open: bool,
    exit_door_open: bool,
}

impl Dungeon {
    pub fn new(entry_room: usize, encounter_rooms: &[usize], boss_room: usize) -> Self {
        Self {
            entry_room,
            encounters: encounter_rooms.iter().copied().map(Encounter::new).collect(),
            boss: Encounter::new(boss_room),
            boss_door_open: false,
            exit_door_open: false,
        }
    }

    /// Mark the encounter in `room` as cleared. Returns false when no
    /// encounter lives there, or when `room` holds the boss and the boss
    /// door is still shut.
    pub fn clear_encounter(&mut self, room: usize) -> bool {
        if self.boss.room == room {
            if !self.boss_door_open {
                info!("Boss in room {} cannot be fought yet", room);
                return false;
            }
            self.boss.complete = true;
            return true;
        }

        match self.encounters.iter_mut().find(|e| e.room == room) {
            Some(encounter) => {
                encounter.complete = true;
                true
            }
            None => false,
        }
    }

    pub fn is_ready_for_boss(&self) -> bool {
        self.encounters.iter().all(|e| e.complete)
    }

    pub fn is_boss_door_open(&self) -> bool {
        self.boss_door_open
    }

    pub fn is_exit_door_open(&self) -> bool {
        self.exit_door_open
    }

    pub fn boss(&self) -> &Encounter {
        &self.boss
    }

    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// Open whatever doors have become openable since the last call.
    pub fn update(&mut self) -> Vec<DungeonEvent> {
        let mut events = Vec::new();

        if !self.boss_door_open && self.is_ready_for_boss() {
            self.boss_door_open = true;
            events.push(DungeonEvent::BossDoorOpened);
        }

        if !self.exit_door_open && self.boss.complete {
            self.exit_door_open = true;
            events.push(DungeonEvent::ExitDoorOpened);
        }

        events
    }
}
