//! Integration tests for Settings config loading.
//!
//! Every test that loads settings holds `EnvGuard`, which serializes access
//! to the process environment, points `XDG_CONFIG_HOME` at an empty temp
//! directory and clears all `AVLTREE_*` variables, restoring both on drop.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use avltree::application::ApplicationError;
use avltree::config::{global_config_path, Settings};

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvGuard {
    saved: Vec<(OsString, Option<OsString>)>,
    _config_home: TempDir,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config_home = TempDir::new().unwrap();

        let mut keys: Vec<OsString> = env::vars_os()
            .map(|(k, _)| k)
            .filter(|k| k.to_string_lossy().starts_with("AVLTREE_"))
            .collect();
        keys.push("XDG_CONFIG_HOME".into());
        let saved = keys
            .into_iter()
            .map(|k| {
                let old = env::var_os(&k);
                env::remove_var(&k);
                (k, old)
            })
            .collect();
        env::set_var("XDG_CONFIG_HOME", config_home.path());

        Self {
            saved,
            _config_home: config_home,
            _lock: lock,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.into(), env::var_os(key)));
        }
        env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in &self.saved {
            match old {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

// ============================================================
// Settings::load() explicit config tests
// ============================================================

#[test]
fn given_no_config_file_when_load_then_returns_defaults() {
    let _env = EnvGuard::new();

    let settings = Settings::load(None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_with_values_when_load_then_replaces_only_those() {
    let _env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(
        &path,
        r#"
values = [30, 20, 10]
render = false
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.values, vec![30, 20, 10]);
    assert!(!settings.render);
    // Not specified: inherited from defaults
    assert_eq!(settings.delete, vec![10]);
    assert_eq!(settings.probe, vec![4]);
}

#[test]
fn given_empty_array_when_load_then_replaces_with_empty() {
    let _env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(&path, "delete = []\n").unwrap();

    let settings = Settings::load(Some(&path)).unwrap();

    assert!(settings.delete.is_empty());
}

#[test]
fn given_malformed_config_when_load_then_config_error() {
    let _env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(&path, "values = [\"not a number\"]\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let _env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("missing.toml"));
}

// ============================================================
// Global config and environment overrides
// ============================================================

// XDG_CONFIG_HOME only redirects the config dir on Linux
#[cfg(target_os = "linux")]
#[test]
fn given_global_config_when_load_then_explicit_file_wins() {
    let _env = EnvGuard::new();
    let global = global_config_path().expect("config dir under XDG_CONFIG_HOME");
    fs::create_dir_all(global.parent().unwrap()).unwrap();
    fs::write(&global, "values = [1, 2]\nprobe = [2]\n").unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local.toml");
    fs::write(&path, "probe = [9]\n").unwrap();

    let settings = Settings::load(Some(&path)).unwrap();

    assert!(global.ends_with("avltree.toml"));
    assert_eq!(settings.values, vec![1, 2]);
    assert_eq!(settings.probe, vec![9]);
}

#[test]
fn given_env_lists_when_load_then_override_files() {
    let mut env = EnvGuard::new();
    env.set("AVLTREE_VALUES", "3,1,2");
    env.set("AVLTREE_PROBE", "7");
    env.set("AVLTREE_DELETE", "");
    env.set("AVLTREE_RENDER", "false");

    let settings = Settings::load(None).unwrap();

    assert_eq!(settings.values, vec![3, 1, 2]);
    assert_eq!(settings.probe, vec![7]);
    assert!(settings.delete.is_empty());
    assert!(!settings.render);
}

#[test]
fn given_single_negative_env_value_when_load_then_one_element_list() {
    let mut env = EnvGuard::new();
    env.set("AVLTREE_DELETE", "-5");

    let settings = Settings::load(None).unwrap();

    assert_eq!(settings.delete, vec![-5]);
}

#[test]
fn given_malformed_env_list_when_load_then_config_error_names_variable() {
    let mut env = EnvGuard::new();
    env.set("AVLTREE_VALUES", "3,x,2");

    let err = Settings::load(None).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("AVLTREE_VALUES"));
    assert!(err.to_string().contains("\"x\""));
}

#[test]
fn given_malformed_env_flag_when_load_then_config_error() {
    let mut env = EnvGuard::new();
    env.set("AVLTREE_RENDER", "sometimes");

    let err = Settings::load(None).unwrap_err();

    assert!(err.to_string().contains("AVLTREE_RENDER"));
}
