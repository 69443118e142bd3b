#![cfg(not(loom))]

//! Process id resolution with every source unavailable.

use procid::HostConfig;
use procid::env::Properties;
use procid::host::Host;
use procid::process::ProcessId;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;
use tempfile::TempDir;
use tracing::Event;
use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;

/// Counts warning events emitted under the `procid` target.
struct WarnCounter {
  count: Arc<AtomicUsize>,
}

impl<S> Layer<S> for WarnCounter
where
  S: Subscriber,
{
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();

    if *metadata.level() == Level::WARN && metadata.target() == "procid" {
      self.count.fetch_add(1, Ordering::SeqCst);
    }
  }
}

#[test]
fn random_fallback_warns_once() {
  let count: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
  let layer: WarnCounter = WarnCounter {
    count: Arc::clone(&count),
  };

  tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer)).unwrap();

  let dir: TempDir = TempDir::new().unwrap();
  let config: HostConfig = HostConfig {
    proc_self_path: dir.path().join("missing"),
    pid_max_path: dir.path().join("pid_max"),
    properties: Properties::new(),
    ..HostConfig::new()
  };

  Host::configure(config).unwrap();

  let pids: Vec<ProcessId> = (0..8)
    .map(|_| thread::spawn(Host::process_id))
    .collect::<Vec<_>>()
    .into_iter()
    .map(|handle| handle.join().unwrap())
    .collect();

  assert!(pids.iter().all(|pid| *pid == pids[0]));
  assert!((0..1 << 16).contains(&pids[0].into_bits()));
  assert_eq!(Host::process_id(), pids[0]);
  assert_eq!(count.load(Ordering::SeqCst), 1);

  // Without an OS name the platform is unknown and the default space applies.
  assert_eq!(Host::pid_bits(), 16);
  assert!(!Host::is_64bit());
}
