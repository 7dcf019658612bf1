//! Settings and config-dir resolution. Each test points XDG_CONFIG_HOME at its
//! own temp dir, so they serialize on a lock.
use processwatcher::config::{
    config_dir, ensure_config_dir, load_settings, log_path, settings_path, Settings,
    LOG_FILE_NAME,
};
use std::sync::Mutex;
use std::time::Duration;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_xdg<F: FnOnce(&std::path::Path)>(f: F) {
    let _g = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());
    f(td.path());
    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
fn paths_follow_xdg_config_home() {
    with_xdg(|root| {
        assert_eq!(config_dir(), root.join("processwatcher"));
        assert_eq!(log_path(), root.join("processwatcher").join(LOG_FILE_NAME));
        assert!(settings_path().ends_with("settings.json"));
    });
}

#[test]
fn ensure_config_dir_is_idempotent() {
    with_xdg(|root| {
        let a = ensure_config_dir().unwrap();
        let b = ensure_config_dir().unwrap();
        assert_eq!(a, b);
        assert!(root.join("processwatcher").is_dir());
    });
}

#[test]
fn missing_settings_give_defaults() {
    with_xdg(|_| {
        let s = load_settings();
        assert_eq!(s, Settings::default());
        assert_eq!(s.list_limit, 20);
        assert_eq!(s.history_lines, 20);
        assert_eq!(s.monitor_interval(), Duration::from_secs(2));
        assert_eq!(s.log_path(), log_path());
    });
}

#[test]
fn partial_settings_keep_other_defaults() {
    with_xdg(|_| {
        let dir = ensure_config_dir().unwrap();
        std::fs::write(
            dir.join("settings.json"),
            r#"{"list_limit": 5, "log_file": "/tmp/pw-custom.log"}"#,
        )
        .unwrap();
        let s = load_settings();
        assert_eq!(s.list_limit, 5);
        assert_eq!(s.history_lines, 20);
        assert_eq!(s.log_path(), std::path::PathBuf::from("/tmp/pw-custom.log"));
    });
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    with_xdg(|_| {
        let dir = ensure_config_dir().unwrap();
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(load_settings(), Settings::default());
    });
}

#[test]
fn zero_interval_is_clamped() {
    let s = Settings {
        monitor_interval_secs: 0,
        ..Settings::default()
    };
    assert_eq!(s.monitor_interval(), Duration::from_secs(1));
}
