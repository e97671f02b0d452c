//! Engine-wide execution settings.
//!
//! Row-parallel operators consult the process-wide [`EngineConfig`] to decide
//! whether to fan work out over rayon or run the same loop sequentially. A
//! thread-local override set through [`with_execution`] takes precedence so a
//! single computation can be pinned to one path without touching the global.
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::env;
use std::str::FromStr;
use std::sync::RwLock;

/// Environment variable selecting the execution mode.
pub const EXECUTION_ENV: &str = "MLMATRIX_EXECUTION";
/// Environment variable setting the minimum row count for parallel dispatch.
pub const MIN_PARALLEL_ROWS_ENV: &str = "MLMATRIX_MIN_PARALLEL_ROWS";

/// How row-parallel operators schedule their work.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    Parallel,
    Sequential,
}

impl FromStr for Execution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" => Ok(Execution::Parallel),
            "sequential" => Ok(Execution::Sequential),
            _ => Err(format!(
                "Unknown execution mode: {}. Expected `parallel` or `sequential`",
                s
            )),
        }
    }
}

/// Central configuration for the matrix engine.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub execution: Execution,

    /// Operations over fewer rows (or columns) than this run sequentially.
    pub min_parallel_rows: usize,
}

impl EngineConfig {
    const DEFAULT: EngineConfig = EngineConfig {
        execution: Execution::Parallel,
        min_parallel_rows: 64,
    };

    pub fn new(execution: Execution, min_parallel_rows: usize) -> Self {
        Self {
            execution,
            min_parallel_rows,
        }
    }

    /// Build a config from `MLMATRIX_EXECUTION` and `MLMATRIX_MIN_PARALLEL_ROWS`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(value) = env::var(EXECUTION_ENV) {
            config.execution = value.parse()?;
        }
        if let Ok(value) = env::var(MIN_PARALLEL_ROWS_ENV) {
            config.min_parallel_rows = value.trim().parse().map_err(|e| {
                format!("Invalid {} value {:?}: {}", MIN_PARALLEL_ROWS_ENV, value, e)
            })?;
        }
        log::debug!("engine config from environment: {:?}", config);
        Ok(config)
    }

    /// Parse a JSON document such as `{"execution": "sequential"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static ENGINE_CONFIG: RwLock<EngineConfig> = RwLock::new(EngineConfig::DEFAULT);

thread_local! {
    static EXECUTION_OVERRIDE: Cell<Option<Execution>> = const { Cell::new(None) };
}

/// Current process-wide configuration.
pub fn engine_config() -> EngineConfig {
    match ENGINE_CONFIG.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the process-wide configuration.
pub fn set_engine_config(config: EngineConfig) {
    log::debug!("engine config set to {:?}", config);
    match ENGINE_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Run `f` with every engine operation issued from this thread pinned to
/// `execution`. Overrides nest; the previous value is restored on return.
pub fn with_execution<R>(execution: Execution, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Execution>);

    impl Drop for Restore {
        fn drop(&mut self) {
            EXECUTION_OVERRIDE.with(|cell| cell.set(self.0));
        }
    }

    let _restore = Restore(EXECUTION_OVERRIDE.with(|cell| cell.replace(Some(execution))));
    f()
}

/// Execution mode in effect for the calling thread.
pub fn effective_execution() -> Execution {
    EXECUTION_OVERRIDE
        .with(|cell| cell.get())
        .unwrap_or_else(|| engine_config().execution)
}
