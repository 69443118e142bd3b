#![cfg(not(loom))]

//! Log levels emitted while resolving the Linux pid space.

use procid::HostConfig;
use procid::platform::Platform;
use procid::process::PidSpace;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use tempfile::TempDir;
use tracing::Event;
use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct LevelCounter {
  errors: Arc<AtomicUsize>,
  debugs: Arc<AtomicUsize>,
}

impl<S> Layer<S> for LevelCounter
where
  S: Subscriber,
{
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();

    if metadata.target() != "procid" {
      return;
    }

    match *metadata.level() {
      Level::ERROR => self.errors.fetch_add(1, Ordering::SeqCst),
      Level::DEBUG => self.debugs.fetch_add(1, Ordering::SeqCst),
      _ => 0,
    };
  }
}

/// Resolves the Linux pid space from `path`, returning the space and the
/// number of error and debug events logged.
fn resolve_linux(path: &Path) -> (PidSpace, usize, usize) {
  let counter: LevelCounter = LevelCounter::default();
  let subscriber = tracing_subscriber::registry().with(counter.clone());

  let config: HostConfig = HostConfig {
    pid_max_path: path.to_path_buf(),
    ..HostConfig::new()
  };

  let space: PidSpace = tracing::subscriber::with_default(subscriber, || {
    PidSpace::resolve(&Platform::new("Linux", true), &config)
  });

  (
    space,
    counter.errors.load(Ordering::SeqCst),
    counter.debugs.load(Ordering::SeqCst),
  )
}

#[test]
fn malformed_pid_max_logs_error() {
  let dir: TempDir = TempDir::new().unwrap();
  let path = dir.path().join("pid_max");

  for contents in ["garbage", "0", "   "] {
    fs::write(&path, contents).unwrap();

    let (space, errors, _) = resolve_linux(&path);

    assert_eq!(space, HostConfig::new().default_pid_space, "{contents:?}");
    assert_eq!(errors, 1, "{contents:?}");
  }
}

#[test]
fn missing_pid_max_logs_debug() {
  let dir: TempDir = TempDir::new().unwrap();
  let (space, errors, debugs) = resolve_linux(&dir.path().join("pid_max"));

  assert_eq!(space, HostConfig::new().default_pid_space);
  assert_eq!(errors, 0);
  assert_eq!(debugs, 1);
}

#[test]
fn valid_pid_max_logs_nothing() {
  let dir: TempDir = TempDir::new().unwrap();
  let path = dir.path().join("pid_max");

  fs::write(&path, "32768\n").unwrap();

  let (space, errors, debugs) = resolve_linux(&path);

  assert_eq!(space.size(), 1 << 15);
  assert_eq!(errors, 0);
  assert_eq!(debugs, 0);
}
