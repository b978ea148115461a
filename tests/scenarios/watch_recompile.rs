//! Scenario: watch mode recompiles after edits and keeps the document path.

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use conkie::application::WatchOptions;
use conkie::domain::ports::RecordingEventSink;
use conkie::domain::value_objects::CompilePhase;
use conkie::{WatchEvent, WatchUseCase};

use crate::common::*;

const PASS: [CompilePhase; 9] = [
    CompilePhase::LocatingTheme,
    CompilePhase::ReadingEntry,
    CompilePhase::Discovering,
    CompilePhase::ScanningLocal,
    CompilePhase::ResolvingModules,
    CompilePhase::Splicing,
    CompilePhase::Finalizing,
    CompilePhase::Ready,
    CompilePhase::LocatingTheme,
];

fn next_compiled(rx: &Receiver<WatchEvent>, deadline: Instant) -> Option<String> {
    while Instant::now() < deadline {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(WatchEvent::Compiled { path }) => return Some(path),
            Ok(_) | Err(_) => {}
        }
    }
    None
}

#[test]
fn recompile_reruns_every_phase_and_reuses_path() {
    let env = TestEnv::new();
    env.write_entry(LOCAL_ONLY_THEME);
    env.write_theme_file("main.js", "var a = 1;");

    let recorder = RecordingEventSink::new();
    let compiler = env.compiler().with_events(Arc::new(recorder.clone()));
    let use_case = WatchUseCase::new(compiler, env.session(arg(&env.entry())));
    let noop = |_: WatchEvent| {};

    let first = use_case.recompile(&noop).unwrap();
    env.write_theme_file("main.js", "var a = 2;");
    let second = use_case.recompile(&noop).unwrap();

    assert_eq!(first.path(), second.path());
    assert!(fs::read_to_string(second.path())
        .unwrap()
        .contains("<script>var a = 2;</script>"));

    let phases = recorder.phases();
    assert_eq!(phases.len(), 16);
    assert_eq!(&phases[..9], &PASS);
    assert_eq!(phases.last(), Some(&CompilePhase::Ready));
}

#[test]
fn file_change_triggers_reload_event() {
    let env = TestEnv::new();
    env.write_entry(LOCAL_ONLY_THEME);
    env.write_theme_file("main.js", "var a = 1;");

    let use_case = WatchUseCase::new(env.compiler(), env.session(arg(&env.entry())))
        .with_options(WatchOptions::default().with_startup_cooldown(Duration::ZERO));
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = channel();

    thread::scope(|scope| {
        let watcher = scope.spawn(|| {
            use_case.start(running.clone(), move |event| {
                let _ = tx.send(event);
            })
        });

        let deadline = Instant::now() + Duration::from_secs(10);
        let first = next_compiled(&rx, deadline);

        // Keep editing until the watcher notices; registration races the
        // first write
        let mut second = None;
        let mut edit = 2;
        while second.is_none() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(300));
            env.write_theme_file("main.js", &format!("var a = {edit};"));
            edit += 1;
            second = next_compiled(&rx, Instant::now() + Duration::from_millis(700));
        }

        running.store(false, Ordering::SeqCst);
        watcher.join().unwrap().unwrap();

        let first = first.expect("initial compile");
        let second = second.expect("recompile after edit");
        assert_eq!(first, second);
        let written = fs::read_to_string(&second).unwrap();
        assert!(!written.contains("var a = 1;"));
    });

    let rest: Vec<WatchEvent> = rx.try_iter().collect();
    assert_eq!(rest.last(), Some(&WatchEvent::Shutdown));
}
