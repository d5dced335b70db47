// Process-wide logger; kept to a single test because the instance can only
// be installed once per test binary.

use huelog::global;
use huelog::{generate_hex_color, ColorLogger, ConsoleSink, LogError, Markup};
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone, Default)]
struct SharedLines(Arc<Mutex<Vec<String>>>);

impl ConsoleSink for SharedLines {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.0.lock().unwrap().push(args.to_string());
        Ok(())
    }
}

#[test]
fn test_global_logger_lifecycle() {
    let lines = SharedLines::default();
    let logger = ColorLogger::new(Box::new(lines.clone()) as global::SharedSink)
        .with_markup(Markup::RichText);
    global::init(logger).unwrap();

    let second = ColorLogger::new(Box::new(SharedLines::default()) as global::SharedSink);
    assert!(matches!(global::init(second), Err(LogError::AlreadyInitialized)));

    global::log("Foo", "hello").unwrap();
    global::log_format("Foo", "{0}+{1}", &[&1, &2]).unwrap();
    global::set_color("Bar", "112233");
    global::log("Bar", "overridden").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| thread::spawn(move || global::log("Racer", &format!("thread {}", i)).unwrap()))
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let foo = generate_hex_color("Foo");
    let racer = generate_hex_color("Racer");
    let recorded = lines.0.lock().unwrap();

    assert_eq!(recorded[0], format!("<color=#{}>[Foo]</color> hello", foo));
    assert_eq!(recorded[1], format!("<color=#{}>[Foo]</color> 1+2", foo));
    assert_eq!(recorded[2], "<color=#112233>[Bar]</color> overridden");

    let racer_lines: Vec<&String> = recorded.iter().filter(|line| line.contains("[Racer]")).collect();
    assert_eq!(racer_lines.len(), 8);
    let racer_prefix = format!("<color=#{}>[Racer]</color>", racer);
    assert!(racer_lines.iter().all(|line| line.starts_with(&racer_prefix)));

    assert_eq!(global::color_for("Racer"), racer);
}
