//! Tick orchestration.
//!
//! [`Simulation`] owns every piece of mutable state (grid, wind
//! accumulator, particle set, rain flag) and sequences one tick:
//! drain queued commands, advance the wind, run the grid transition,
//! spawn and advance embers, prune, then emit the immutable snapshot.
//! Single-threaded and synchronous throughout; commands submitted
//! mid-tick take effect atomically at the start of the next tick.

pub mod command_queue;
pub mod snapshot;

pub use command_queue::{Command, CommandQueue};
pub use snapshot::{ParticleView, Snapshot};

use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::grid::{FireParams, Grid};
use crate::humidity::HumidityField;
use crate::particles::ParticleSystem;
use crate::random::RandomSource;
use crate::wind::WindField;

/// The simulation engine: all state, one `step` per tick.
///
/// The random source is injected so a deterministic stub can stand in
/// during tests without touching engine logic.
pub struct Simulation<R: RandomSource> {
    grid: Grid,
    humidity: HumidityField,
    wind: WindField,
    particles: ParticleSystem,
    queue: CommandQueue,
    raining: bool,
    tick: u64,
    rng: R,
}

impl<R: RandomSource> Simulation<R> {
    /// Build the engine from a validated configuration.
    ///
    /// Generates the humidity field from its noise seed and the initial
    /// vegetation cover from the injected random source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is malformed; this is
    /// the engine's only fallible operation.
    pub fn new(config: &SimulationConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let (rows, cols) = (config.rows(), config.cols());
        let humidity =
            HumidityField::generate(rows, cols, config.humidity_scale, config.humidity_seed);
        let params = FireParams {
            spread_chance: config.spread_chance,
            burnout_chance: config.burnout_chance,
        };
        let grid = Grid::generate(rows, cols, params, config.tree_density, &mut rng);
        let particles = ParticleSystem::new(
            config.max_particles,
            config.particles_per_cell,
            config.particle_life_min,
            config.particle_life_max,
            config.cell_size,
        );

        info!(rows, cols, wind_mode = ?config.wind_mode, "simulation created");

        Ok(Self {
            grid,
            humidity,
            wind: WindField::new(config.wind_mode),
            particles,
            queue: CommandQueue::new(),
            raining: false,
            tick: 0,
            rng,
        })
    }

    /// Queue a command; it applies at the start of the next tick.
    pub fn submit(&mut self, command: Command) {
        self.queue.submit(command);
    }

    /// Advance the whole simulation by one tick and return the snapshot
    /// for the Display boundary.
    pub fn step(&mut self) -> Snapshot {
        let commands = self.queue.take_pending();
        let applied = commands.len();
        for command in commands {
            match command {
                Command::Ignite { row, col } => self.grid.ignite(row, col),
                Command::ToggleRain => self.raining = !self.raining,
                Command::AdjustWind { dx, dy } => self.wind.adjust(dx, dy),
            }
        }

        self.tick += 1;
        let wind = self.wind.current(self.tick);

        self.grid.step(&self.humidity, self.raining, &mut self.rng);
        self.particles
            .spawn_for(self.grid.burning_cells(), &mut self.rng);
        self.particles.advance(wind);
        self.particles.prune();

        debug!(
            tick = self.tick,
            applied,
            burning = self.grid.count(crate::CellState::Burning),
            particles = self.particles.len(),
            "tick complete"
        );

        self.snapshot()
    }

    /// Immutable copy of the current state, as of the last completed tick.
    pub fn snapshot(&self) -> Snapshot {
        let wind = self.wind.current(self.tick);
        let max_life = self.particles.max_life() as f32;
        let particles = self
            .particles
            .particles()
            .iter()
            .map(|p| ParticleView {
                x: p.position.x,
                y: p.position.y,
                color: p.color,
                alpha: (p.life as f32 / max_life).clamp(0.0, 1.0),
            })
            .collect();

        Snapshot {
            tick: self.tick,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells: self.grid.cells().to_vec(),
            particles,
            wind,
            raining: self.raining,
        }
    }

    /// Current tick counter.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether it is currently raining.
    pub fn is_raining(&self) -> bool {
        self.raining
    }

    /// The combustion grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The humidity field generated at startup.
    pub fn humidity(&self) -> &HumidityField {
        &self.humidity
    }

    /// The live particle set.
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }
}
