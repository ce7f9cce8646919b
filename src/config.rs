//! Command-line and environment configuration for the terminal host.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::RepeatConfig;

/// Environment variable consulted when `--seed` is not given.
pub const SEED_ENV: &str = "STACKFALL_SEED";

pub const USAGE: &str = "\
usage: stackfall [--seed <u32>] [--das <ms>] [--arr <ms>]

  --seed <u32>   randomizer seed (default: $STACKFALL_SEED, else clock-derived)
  --das <ms>     delay before a held left/right key repeats (default 170)
  --arr <ms>     interval between repeats once started (default 40)
  -h, --help     print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// `None` means derive one from the clock.
    pub seed: Option<u32>,
    pub repeat: RepeatConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            repeat: RepeatConfig::default(),
        }
    }
}

impl RunConfig {
    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

/// Parse arguments (without the program name) plus the value of [`SEED_ENV`].
///
/// An explicit `--seed` wins over the environment.
pub fn parse_args(args: &[String], env_seed: Option<&str>) -> Result<Command> {
    let mut config = RunConfig::default();

    if let Some(v) = env_seed.map(str::trim).filter(|v| !v.is_empty()) {
        config.seed = Some(
            v.parse::<u32>()
                .map_err(|_| anyhow!("invalid {} value: {}", SEED_ENV, v))?,
        );
    }

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            flag @ ("--seed" | "--das" | "--arr") => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                let n = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
                match flag {
                    "--seed" => config.seed = Some(n),
                    "--das" => config.repeat.das_ms = n,
                    _ => {
                        if n == 0 {
                            return Err(anyhow!("--arr must be at least 1"));
                        }
                        config.repeat.arr_ms = n;
                    }
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Command::Run(config))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
