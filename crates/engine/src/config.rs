//! Runtime configuration: environment defaults, then command-line overrides.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for piece selection.
    pub seed: u32,
    /// Gravity interval in milliseconds.
    pub tick_ms: u32,
    /// Log file; stderr when unset.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `TETRIS_SEED`, `TETRIS_TICK_MS` and `TETRIS_LOG_PATH`.
    ///
    /// Missing or unparsable values fall back to defaults; the seed defaults
    /// to the current time so each run deals a different sequence.
    pub fn from_env() -> Self {
        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let tick_ms = env::var("TETRIS_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let log_path = env::var("TETRIS_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }

    /// Apply `--seed N`, `--tick-ms N` and `--log PATH` on top of the current values.
    ///
    /// `args` excludes the program name.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("config: missing value for --seed"))?;
                    self.seed = v
                        .parse()
                        .map_err(|_| anyhow!("config: invalid --seed value: {}", v))?;
                }
                "--tick-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("config: missing value for --tick-ms"))?;
                    let ms: u32 = v
                        .parse()
                        .map_err(|_| anyhow!("config: invalid --tick-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("config: --tick-ms must be at least 1"));
                    }
                    self.tick_ms = ms;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("config: missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                other => {
                    return Err(anyhow!("config: unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
