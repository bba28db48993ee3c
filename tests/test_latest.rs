use agartha::files::{AssetError, latest_file, read_asset, resolve_latest};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn write_with_mtime(dir: &Path, name: &str, contents: &[u8], secs_ago: u64) {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    let file = File::options().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(secs_ago))
        .unwrap();
}

#[test]
fn test_newest_file_wins() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"old", 300);
    write_with_mtime(dir.path(), "b.png", b"new", 10);
    write_with_mtime(dir.path(), "c.png", b"middle", 100);

    assert_eq!(latest_file(dir.path()), Some(dir.path().join("b.png")));
}

#[test]
fn test_empty_directory_has_no_latest() {
    let dir = TempDir::new().unwrap();

    assert_eq!(latest_file(dir.path()), None);
}

#[test]
fn test_missing_directory_has_no_latest() {
    let dir = TempDir::new().unwrap();

    assert_eq!(latest_file(&dir.path().join("does-not-exist")), None);
}

#[test]
fn test_file_path_is_not_a_directory() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"x", 0);

    assert_eq!(latest_file(&dir.path().join("a.png")), None);
}

#[test]
fn test_subdirectories_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"x", 600);
    fs::create_dir(dir.path().join("newer-dir")).unwrap();
    write_with_mtime(&dir.path().join("newer-dir"), "nested.png", b"y", 0);

    assert_eq!(latest_file(dir.path()), Some(dir.path().join("a.png")));
}

#[test]
fn test_directory_with_only_subdirectories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("only")).unwrap();

    assert_eq!(latest_file(dir.path()), None);
}

#[test]
fn test_timestamp_tie_picks_greatest_name() {
    let dir = TempDir::new().unwrap();
    let when = SystemTime::now() - Duration::from_secs(60);
    for name in ["b.png", "c.png", "a.png"] {
        let path = dir.path().join(name);
        fs::write(&path, name).unwrap();
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }

    assert_eq!(latest_file(dir.path()), Some(dir.path().join("c.png")));
}

#[test]
fn test_rescans_on_every_call() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"x", 100);
    assert_eq!(latest_file(dir.path()), Some(dir.path().join("a.png")));

    write_with_mtime(dir.path(), "b.png", b"y", 0);
    assert_eq!(latest_file(dir.path()), Some(dir.path().join("b.png")));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"x", 100);
    std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("link.png")).unwrap();

    assert_eq!(latest_file(dir.path()), Some(dir.path().join("a.png")));
}

#[cfg(unix)]
#[test]
fn test_scan_error_degrades_to_none() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "a.png", b"x", 100);
    // Resolving a self-referencing link fails with ELOOP even for root.
    std::os::unix::fs::symlink(dir.path().join("loop"), dir.path().join("loop")).unwrap();

    assert_eq!(latest_file(dir.path()), None);
}

#[tokio::test]
async fn test_resolve_latest_off_the_runtime() {
    let dir = TempDir::new().unwrap();
    write_with_mtime(dir.path(), "only.jpg", b"x", 0);

    let latest = resolve_latest(dir.path().to_path_buf()).await;
    assert_eq!(latest, Some(dir.path().join("only.jpg")));
}

#[tokio::test]
async fn test_read_asset_missing_and_present() {
    let dir = TempDir::new().unwrap();

    let missing = read_asset(&dir.path().join("favicon.png")).await;
    assert!(matches!(missing, Err(AssetError::Missing)));

    fs::write(dir.path().join("favicon.png"), b"icon").unwrap();
    let present = read_asset(&dir.path().join("favicon.png")).await.unwrap();
    assert_eq!(present, b"icon".to_vec());
}

#[tokio::test]
async fn test_read_asset_directory_is_an_open_failure() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("favicon.png")).unwrap();

    let result = read_asset(&dir.path().join("favicon.png")).await;
    assert!(matches!(result, Err(AssetError::Open(_))));
}
