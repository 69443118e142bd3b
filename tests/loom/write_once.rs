#![cfg(loom)]

use loom::sync::Arc;
use loom::sync::atomic::AtomicUsize;
use loom::sync::atomic::Ordering;
use loom::thread;
use procid::tyre::sync::WriteOnce;

#[test]
fn single_initializer() {
  loom::model(|| {
    let cell: Arc<WriteOnce<usize>> = Arc::new(WriteOnce::new());
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

    let threads: Vec<_> = (0..2)
      .map(|index| {
        let cell: Arc<WriteOnce<usize>> = Arc::clone(&cell);
        let calls: Arc<AtomicUsize> = Arc::clone(&calls);

        thread::spawn(move || {
          *cell.get_or_init(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            index
          })
        })
      })
      .collect();

    let seen: Vec<usize> = threads
      .into_iter()
      .map(|handle| handle.join().unwrap())
      .collect();

    assert_eq!(calls.load(Ordering::Relaxed), 1, "initializer ran twice!");
    assert_eq!(seen[0], seen[1], "threads observed different values!");
    assert_eq!(cell.get(), Some(&seen[0]));
  });
}

#[test]
fn set_races_get_or_init() {
  loom::model(|| {
    let cell: Arc<WriteOnce<usize>> = Arc::new(WriteOnce::new());

    let t1 = {
      let cell: Arc<WriteOnce<usize>> = Arc::clone(&cell);

      thread::spawn(move || cell.set(1).is_ok())
    };

    let t2 = {
      let cell: Arc<WriteOnce<usize>> = Arc::clone(&cell);

      thread::spawn(move || *cell.get_or_init(|| 2))
    };

    let stored: bool = t1.join().unwrap();
    let value: usize = t2.join().unwrap();

    if stored {
      assert_eq!(value, 1, "set succeeded but initializer value won!");
    } else {
      assert_eq!(value, 2, "set failed but its value is visible!");
    }

    assert_eq!(cell.get(), Some(&value));
  });
}

#[test]
fn get_never_observes_partial_write() {
  loom::model(|| {
    let cell: Arc<WriteOnce<(usize, usize)>> = Arc::new(WriteOnce::new());

    let writer = {
      let cell: Arc<WriteOnce<(usize, usize)>> = Arc::clone(&cell);

      thread::spawn(move || {
        cell.get_or_init(|| (7, 7));
      })
    };

    let reader = {
      let cell: Arc<WriteOnce<(usize, usize)>> = Arc::clone(&cell);

      thread::spawn(move || {
        if let Some(value) = cell.get() {
          assert_eq!(*value, (7, 7), "Observed a torn value!");
        }
      })
    };

    writer.join().unwrap();
    reader.join().unwrap();
  });
}
