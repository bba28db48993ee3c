use agartha::config::{Config, DEFAULT_PORT, IndexPage, resolve_port};
use std::path::PathBuf;

#[test]
fn test_port_defaults_to_80() {
    assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    assert_eq!(DEFAULT_PORT, 80);
}

#[test]
fn test_cli_argument_wins_over_env() {
    assert_eq!(resolve_port(Some("8080"), Some("9090")), 8080);
}

#[test]
fn test_env_used_without_cli_argument() {
    assert_eq!(resolve_port(None, Some("9090")), 9090);
}

#[test]
fn test_invalid_env_falls_back_to_80() {
    assert_eq!(resolve_port(None, Some("abc")), 80);
}

#[test]
fn test_trailing_garbage_after_port_is_ignored() {
    assert_eq!(resolve_port(None, Some("8080abc")), 8080);
    assert_eq!(resolve_port(Some(" 9000 extra"), None), 9000);
    assert_eq!(resolve_port(Some("70000abc"), None), 80);
}

#[test]
fn test_invalid_cli_argument_does_not_consult_env() {
    assert_eq!(resolve_port(Some("abc"), Some("9090")), 80);
}

#[test]
fn test_out_of_range_ports_fall_back() {
    assert_eq!(resolve_port(Some("0"), None), 80);
    assert_eq!(resolve_port(Some("65536"), None), 80);
    assert_eq!(resolve_port(Some("-1"), None), 80);
    assert_eq!(resolve_port(Some("65535"), None), 65535);
    assert_eq!(resolve_port(Some("1"), None), 1);
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.port, 80);
    assert_eq!(cfg.screenshot_dir, PathBuf::from("screenshots"));
    assert_eq!(cfg.favicon_file, PathBuf::from("favicon.png"));
    assert_eq!(cfg.pinned_file, PathBuf::from("18-12-2025 19-23-43.png"));
    assert_eq!(cfg.index, IndexPage::Template(PathBuf::from("index.html")));
}

#[test]
fn test_config_builder() {
    let cfg = Config::default()
        .with_port(3000)
        .with_screenshot_dir("/tmp/shots")
        .with_favicon_file("/tmp/icon.png")
        .with_pinned_file("/tmp/pinned.jpg")
        .with_pinned_paths(["/pinned.jpg"])
        .with_index(IndexPage::Synthesized);

    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.screenshot_dir, PathBuf::from("/tmp/shots"));
    assert_eq!(cfg.favicon_file, PathBuf::from("/tmp/icon.png"));
    assert_eq!(cfg.pinned_file, PathBuf::from("/tmp/pinned.jpg"));
    assert_eq!(cfg.pinned_paths, vec!["/pinned.jpg".to_string()]);
    assert_eq!(cfg.index, IndexPage::Synthesized);
}
