use anyhow::Result;
use ecosim_core::config::AppConfig;
use ecosim_core::engine::{Engine, SimStatus};
use ecosim_io::JsonStatsSink;
use std::path::Path;

/// Drives an [`Engine`] the way a UI would: initialize, play, pause, reset
/// and save statistics.
///
/// A freshly built or reset world stays paused until [`App::play`].
pub struct App {
    pub running: bool,
    pub engine: Engine,
    pub config: AppConfig,
}

impl App {
    /// Reads `path`, falling back to defaults when it is missing or invalid.
    ///
    /// A missing file is created with the defaults so users have something to
    /// edit.
    pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
        let path = path.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to load config, using defaults"
                    );
                }
            }
        }
        let default = AppConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                if let Err(e) = std::fs::write(path, toml_str) {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "Could not write default config"
                    );
                }
            }
        }
        default
    }

    /// Builds the engine and attaches a JSON sink under `config.stats.output_dir`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut engine = Engine::new(config.clone())?;
        engine.set_sink(Box::new(JsonStatsSink::new(&config.stats.output_dir)));
        engine.pause();
        Ok(Self {
            running: true,
            engine,
            config,
        })
    }

    pub fn play(&mut self) {
        self.engine.resume();
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn toggle_pause(&mut self) {
        if self.engine.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Restarts the world with the configured population, paused.
    pub fn reset(&mut self) -> Result<()> {
        self.running = true;
        self.engine.initialize(self.config.world.initial_population)?;
        self.engine.pause();
        Ok(())
    }

    pub fn save_statistics(&mut self) -> Result<Option<String>> {
        self.engine.flush_statistics()
    }

    /// Advances one tick and stops the app once the run is over.
    pub fn step(&mut self) -> Result<SimStatus> {
        let status = self.engine.tick()?;
        if status.is_terminal() {
            self.running = false;
        }
        Ok(status)
    }

    /// Ticks until the run ends or `max_ticks` more ticks have elapsed.
    pub fn run_headless(&mut self, max_ticks: Option<u64>) -> Result<SimStatus> {
        let mut status = self.engine.status();
        let mut ticks = 0u64;
        while self.running && max_ticks.map_or(true, |max| ticks < max) {
            status = self.step()?;
            ticks += 1;
            if status == SimStatus::Paused {
                break;
            }
        }
        Ok(status)
    }
}
