//! Run seed selection: `--seed N` / `--seed=N`, otherwise fresh entropy.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedArgError {
    #[error("missing value for --seed")]
    MissingValue,
    #[error("seed provided more than once")]
    Duplicate,
    #[error("seed value '{0}' must be a non-negative integer")]
    NotANumber(String),
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |elapsed| elapsed.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);
    splitmix(entropy)
}

/// Scans `args` (program name first) for a seed flag. Other arguments are
/// left alone.
pub fn resolve_seed_from_args(
    args: &[String],
    generated_seed: u64,
) -> Result<SeedChoice, SeedArgError> {
    let mut selected = None;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let raw = if argument == "--seed" {
            rest.next().map(String::as_str).ok_or(SeedArgError::MissingValue)?
        } else if let Some(inline) = argument.strip_prefix("--seed=") {
            inline
        } else {
            continue;
        };
        if selected.is_some() {
            return Err(SeedArgError::Duplicate);
        }
        selected = Some(raw.parse::<u64>().map_err(|_| SeedArgError::NotANumber(raw.to_owned()))?);
    }

    Ok(selected.map_or(SeedChoice::Generated(generated_seed), SeedChoice::Cli))
}

fn splitmix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
