use std::{
    env, fmt,
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use config::{Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`CONFIG`].
pub const ENV_PREFIX: &str = "CONTRACTS";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CONTRACTS_CONFIG";

const CONFIG_FILE_NAMES: [&str; 2] = ["contracts.toml", ".contracts.toml"];

pub fn log_dir() -> &'static PathBuf {
    &CONFIG.log_dir
}

pub fn trace_contracts() -> bool {
    CONFIG.trace_contracts
}

pub fn check_ensures() -> bool {
    CONFIG.check_ensures.is_check()
}

pub fn check_invariants() -> bool {
    CONFIG.check_invariants.is_check()
}

/// What to do with a contract clause that is not a precondition. Preconditions are always
/// checked.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    Ignore,
    Check,
}

impl CheckMode {
    const ERROR: &'static str = "expected one of `check` or `ignore`";

    /// `check` in debug builds, `ignore` in release builds.
    pub fn profile_default() -> Self {
        if cfg!(debug_assertions) { CheckMode::Check } else { CheckMode::Ignore }
    }

    pub fn is_check(self) -> bool {
        matches!(self, CheckMode::Check)
    }
}

impl FromStr for CheckMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "check" => Ok(CheckMode::Check),
            "ignore" => Ok(CheckMode::Ignore),
            _ => Err(Self::ERROR),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Check => write!(f, "check"),
            CheckMode::Ignore => write!(f, "ignore"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Directory where the contract trace is written. Defaults to `./log/`.
    pub log_dir: PathBuf,
    /// Log every checked clause, not only violations.
    pub trace_contracts: bool,
    pub check_ensures: CheckMode,
    /// Covers both loop invariants and decreasing measures.
    pub check_invariants: CheckMode,
}

impl Config {
    /// Builds the configuration from the defaults, then the config file at `path` (if any), then
    /// the `CONTRACTS_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Config, config::ConfigError> {
        let profile_default = CheckMode::profile_default().to_string();
        let mut builder = config::Config::builder()
            .set_default("log_dir", "./log/")?
            .set_default("trace_contracts", false)?
            .set_default("check_ensures", profile_default.as_str())?
            .set_default("check_invariants", profile_default.as_str())?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).ignore_empty(true))
            .build()?
            .try_deserialize()
    }

    /// Renders the effective configuration in the same format accepted by `contracts.toml`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load(CONFIG_PATH.as_deref()).unwrap_or_else(|err| {
        eprintln!("error: invalid contracts configuration: {err}");
        std::process::exit(EXIT_FAILURE);
    })
});

/// Exit status code used for an invalid configuration.
pub const EXIT_FAILURE: i32 = 1;

pub static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if let Ok(file) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(file));
    }
    find_config_file(&env::current_dir().ok()?)
});

/// Finds a config file in `dir` or one of its parents.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut path = dir.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let file = path.join(name);
            if file.exists() {
                return Some(file);
            }
        }
        if !path.pop() {
            return None;
        }
    }
}
