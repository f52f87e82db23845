//! Environment variables are process wide, so this file holds a single test that sets them before
//! `CONFIG` is first read.

use std::{env, fs, path::PathBuf};

use contracts_config::{self as config, CONFIG, CONFIG_ENV, CONFIG_PATH, CheckMode};

#[test]
fn env_overrides_explicit_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "log_dir = \"from-file\"\ncheck_ensures = \"check\"\ncheck_invariants = \"check\"\n",
    )
    .unwrap();

    // SAFETY: this is the only test in the binary, nothing reads the environment concurrently.
    unsafe {
        env::set_var(CONFIG_ENV, &path);
        env::set_var("CONTRACTS_CHECK_ENSURES", "ignore");
        env::set_var("CONTRACTS_TRACE_CONTRACTS", "true");
    }

    assert_eq!(CONFIG_PATH.as_deref(), Some(path.as_path()));
    assert_eq!(CONFIG.check_ensures, CheckMode::Ignore);
    assert_eq!(CONFIG.check_invariants, CheckMode::Check);
    assert_eq!(config::log_dir(), &PathBuf::from("from-file"));
    assert!(config::trace_contracts());
    assert!(!config::check_ensures());
    assert!(config::check_invariants());
}
