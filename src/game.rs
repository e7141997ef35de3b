//! Game state machine
//!
//! Owns the world, the rewind ledger and the tick clock. The platform layer
//! feeds it elapsed time and input intents; it never touches the snake or
//! food directly.
//!
//! ```text
//! Idle --start/direction--> Running <--pause--> Paused
//! Running --collision--> Rewind --resume--> Running
//! Rewind --restart--> Idle
//! ```

use crate::config::GameConfig;
use crate::consts::{MAX_FRAME_MS, REWIND_SCRUB_STEP};
use crate::sim::{
    Direction, GameEvent, GamePhase, GridPos, History, StepOutcome, World, step, tick_interval_ms,
};

/// Timeline position shown while rewinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    /// Number of recorded ticks
    pub len: usize,
    /// Tick currently displayed
    pub index: usize,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub phase: GamePhase,
    pub body: &'a [GridPos],
    pub food: GridPos,
    pub score: u32,
    pub best_score: u32,
    /// Only set in `GamePhase::Rewind`
    pub timeline: Option<Timeline>,
}

pub struct Game {
    config: GameConfig,
    world: World,
    history: History,
    phase: GamePhase,
    rewind_index: usize,
    /// Level-triggered scrub direction, applied on every `advance` in rewind
    scrub_hold: i32,
    accumulator: f64,
    ticks: u64,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig, best_score: u32, seed: u64) -> Self {
        log::info!(
            "New game {}x{} (base {} ms, best {}, seed {})",
            config.columns,
            config.rows,
            config.base_speed_ms,
            best_score,
            seed
        );
        Self {
            world: World::new(&config, best_score, seed),
            config,
            history: History::new(),
            phase: GamePhase::Idle,
            rewind_index: 0,
            scrub_hold: 0,
            accumulator: 0.0,
            ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn best_score(&self) -> u32 {
        self.world.best_score
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rewind_index(&self) -> usize {
        self.rewind_index
    }

    /// Simulation steps taken since the last restart, including steps later
    /// discarded by a resume
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current tick interval (speeds up with score)
    pub fn tick_interval_ms(&self) -> f64 {
        tick_interval_ms(self.config.base_speed_ms, self.world.score)
    }

    /// Take all events emitted since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a fresh run. Only valid from `Idle`.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            log::debug!("Ignoring start in {:?}", self.phase);
            return;
        }
        self.world.reset(&self.config);
        self.history.clear();
        self.history.push(self.world.capture());
        self.rewind_index = 0;
        self.scrub_hold = 0;
        self.accumulator = 0.0;
        self.ticks = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started");
    }

    /// Steer the snake. The first direction in `Idle` also starts the run.
    pub fn set_direction(&mut self, dir: Direction) {
        match self.phase {
            GamePhase::Idle => {
                self.start();
                self.world.snake.set_direction(dir);
            }
            GamePhase::Running | GamePhase::Paused => self.world.snake.set_direction(dir),
            GamePhase::Rewind => log::debug!("Ignoring direction {:?} while rewinding", dir),
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("Unpaused");
            }
            _ => log::debug!("Ignoring pause toggle in {:?}", self.phase),
        }
    }

    /// Space / tap: start, pause toggle, or resume from the rewound frame
    pub fn handle_primary_action(&mut self) {
        match self.phase {
            GamePhase::Idle => self.start(),
            GamePhase::Running | GamePhase::Paused => self.toggle_pause(),
            GamePhase::Rewind => self.resume(),
        }
    }

    /// Move the rewind cursor by `delta` steps, clamped to the ledger
    pub fn scrub_rewind(&mut self, delta: i32) {
        if self.phase != GamePhase::Rewind {
            log::debug!("Ignoring scrub in {:?}", self.phase);
            return;
        }
        let Some(last) = self.history.last_index() else {
            return;
        };
        let target = self.rewind_index as i64 + delta as i64 * REWIND_SCRUB_STEP as i64;
        self.rewind_index = target.clamp(0, last as i64) as usize;
    }

    /// Hold a scrub direction (-1 back, 1 forward, 0 release). Applied once per
    /// `advance` while rewinding.
    pub fn set_scrub_hold(&mut self, delta: i32) {
        self.scrub_hold = delta.signum();
    }

    pub fn scrub_hold(&self) -> i32 {
        self.scrub_hold
    }

    /// Commit to the rewound frame: drop every later tick and play on from it
    pub fn resume(&mut self) {
        if self.phase != GamePhase::Rewind {
            log::debug!("Ignoring resume in {:?}", self.phase);
            return;
        }
        let Some(snapshot) = self.history.get(self.rewind_index).cloned() else {
            log::warn!("Resume with no recorded frame at {}", self.rewind_index);
            return;
        };
        self.history.truncate_at(self.rewind_index);
        self.world.restore(&snapshot);
        self.accumulator = 0.0;
        self.scrub_hold = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Resumed {
            index: self.rewind_index,
            score: snapshot.score,
        });
        log::info!(
            "Resumed from tick {} with score {}",
            self.rewind_index,
            snapshot.score
        );
    }

    /// Throw the run away and go back to the title state
    pub fn request_full_restart(&mut self) {
        if self.phase != GamePhase::Rewind {
            log::debug!("Ignoring restart in {:?}", self.phase);
            return;
        }
        self.history.clear();
        self.rewind_index = 0;
        self.scrub_hold = 0;
        self.accumulator = 0.0;
        self.ticks = 0;
        self.world.reset(&self.config);
        self.phase = GamePhase::Idle;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted");
    }

    /// Force the food onto a cell (scripted scenarios and debugging)
    pub fn place_food(&mut self, pos: GridPos) {
        self.world.food.set_position(pos);
    }

    /// Feed elapsed wall time and get the frame to draw.
    ///
    /// At most one tick runs per call even after a long stall, so the snake
    /// never jumps several cells in one frame.
    pub fn advance(&mut self, elapsed_ms: f64) -> RenderView<'_> {
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        };

        match self.phase {
            GamePhase::Running => {
                self.accumulator += elapsed;
                let interval = self.tick_interval_ms();
                if self.accumulator >= interval {
                    self.accumulator -= interval;
                    self.run_tick();
                }
            }
            GamePhase::Rewind if self.scrub_hold != 0 => self.scrub_rewind(self.scrub_hold),
            _ => {}
        }

        self.view()
    }

    fn run_tick(&mut self) {
        self.ticks += 1;
        match step(&mut self.world, &mut self.history, &self.config, &mut self.events) {
            StepOutcome::Alive { .. } => {}
            StepOutcome::Collided => {
                self.rewind_index = self.history.last_index().unwrap_or(0);
                self.accumulator = 0.0;
                self.scrub_hold = 0;
                self.phase = GamePhase::Rewind;
                self.events.push(GameEvent::Died {
                    score: self.world.score,
                    rewind_index: self.rewind_index,
                });
                log::info!(
                    "Died at tick {} with score {}, {} frames to rewind",
                    self.ticks,
                    self.world.score,
                    self.history.len()
                );
            }
        }
    }

    /// Current frame. While rewinding this is the recorded frame under the
    /// cursor, never the fatal one.
    pub fn view(&self) -> RenderView<'_> {
        if self.phase == GamePhase::Rewind {
            if let Some(snapshot) = self.history.get(self.rewind_index) {
                return RenderView {
                    phase: self.phase,
                    body: &snapshot.body,
                    food: snapshot.food,
                    score: snapshot.score,
                    best_score: self.world.best_score,
                    timeline: Some(Timeline {
                        len: self.history.len(),
                        index: self.rewind_index,
                    }),
                };
            }
        }
        RenderView {
            phase: self.phase,
            body: self.world.snake.body(),
            food: self.world.food.position(),
            score: self.world.score,
            best_score: self.world.best_score,
            timeline: None,
        }
    }
}
