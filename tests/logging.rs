use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing::Level;
use unweighted_shortest_path::find_shortest_path;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_at(level: Level, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    captured.contents()
}

#[test]
fn queries_are_quiet_at_info() {
    let edges = [(0, 1), (1, 2), (2, 3), (4, 5)];

    let logs = capture_at(Level::INFO, || {
        assert_eq!(find_shortest_path(6, &edges, 0, 3), 3);
        assert_eq!(find_shortest_path(6, &edges, 0, 5), -1);
    });

    assert_eq!(logs, "");
}

#[test]
fn search_progress_is_logged_at_debug() {
    let edges = [(0, 1), (1, 2), (2, 3)];

    let logs = capture_at(Level::DEBUG, || {
        assert_eq!(find_shortest_path(4, &edges, 0, 3), 3);
    });

    assert!(logs.contains("starting search from node 0"));
    assert!(logs.contains("depth 1 new 1"));
    assert!(logs.contains("reached node 3 at depth 3"));
}
