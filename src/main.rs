use anyhow::Result;
use delve::{App, Config, GameEvent};
use log::{info, warn};
use rand::Rng;

/// Events fired once simulated time passes `at`.
struct Cue {
    at: f32,
    event: GameEvent,
}

fn walkthrough(app: &App) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut at = 1.0;

    for (i, encounter) in app.dungeon.encounters().iter().enumerate() {
        cues.push(Cue {
            at,
            event: GameEvent::EnterRoom(encounter.room),
        });
        if i == 1 {
            cues.push(Cue {
                at: at + 0.4,
                event: GameEvent::RotateCamera { yaw: 90.0 },
            });
            // Changes its mind halfway through the swing.
            cues.push(Cue {
                at: at + 0.9,
                event: GameEvent::RotateCamera { yaw: 350.0 },
            });
        }
        cues.push(Cue {
            at: at + 1.5,
            event: GameEvent::EncounterCleared(encounter.room),
        });
        at += 2.5;
    }

    let boss = app.dungeon.boss().room;
    cues.push(Cue {
        at,
        event: GameEvent::EnterRoom(boss),
    });
    cues.push(Cue {
        at: at + 1.5,
        event: GameEvent::EncounterCleared(boss),
    });
    cues.push(Cue {
        at: at + 2.0,
        event: GameEvent::EnterRoom(app.dungeon.entry_room),
    });
    cues
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Falling back to default config: {:#}", e);
        Config::default()
    });
    let frame_time = 1.0 / config.demo.fps_cap.max(1) as f32;
    let jitter = config.demo.jitter();
    let run_for = config.demo.duration;

    let mut app = App::new(config)?;
    let mut cues = walkthrough(&app).into_iter().peekable();
    let mut rng = rand::thread_rng();
    let mut was_moving = false;

    info!(
        "Running walkthrough for {:.1}s at ~{:.0} fps",
        run_for,
        1.0 / frame_time
    );

    while app.time < run_for {
        while let Some(cue) = cues.next_if(|cue| cue.at <= app.time) {
            app.handle_event(cue.event);
        }

        let dt = frame_time * (1.0 + rng.gen_range(-jitter..=jitter));
        app.update(dt)?;

        let moving = app.camera.is_moving() || app.camera.is_rotating();
        if was_moving && !moving {
            info!(
                "Camera settled at {:.2?} facing yaw {:.1}",
                app.camera.position(),
                app.camera.yaw().0
            );
        }
        was_moving = moving;
    }

    info!(
        "Walkthrough done after {:.2}s, exit door open: {}",
        app.time,
        app.dungeon.is_exit_door_open()
    );
    Ok(())
}
