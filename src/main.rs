use std::env;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};
use slice_lib::collections::contiguous::{DynamicArray, concat};
use slice_lib::collections::report::CapacityReport;
use slice_lib::stats::median;

/// Environment variable selecting the maximum log level, e.g. `SLICE_LIB_LOG=trace`.
const LOG_ENV: &str = "SLICE_LIB_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger() {
    let level = match env::var(LOG_ENV) {
        Ok(value) => LevelFilter::from_str(value.trim()).unwrap_or_else(|_| {
            eprintln!("Unrecognized {LOG_ENV} value {value:?}, using info.");
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    init_logger();

    println!("\n[Unallocated]\n");

    let arr = DynamicArray::<i32>::new();
    println!("length {}", arr.len());
    if arr.is_unallocated() {
        println!("no storage");
    }

    println!("\n[Windows]\n");

    let literal = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
    println!("literal: {literal:?}");

    let window = literal.window(3..5);
    println!("window: {window:?}\n");

    let report = CapacityReport::new()
        .row("literal", &literal)
        .row("window", &window);
    print!("{report}");

    println!("last 5 entries of literal (via window) {}", window.window(..5));

    println!("\n[Appending]\n");

    let mut numbers = DynamicArray::new();
    for i in 0..=100 {
        numbers = numbers.append(i);
    }
    println!("numbers: {numbers}");

    let mut words = DynamicArray::new();
    for i in 0..5 {
        words = words.append(format!("Hello{i}"));
    }
    println!("words: {words}");

    let mut flags = DynamicArray::new();
    for i in 0..5 {
        flags = flags.append(i % 2 == 0);
        println!("cap of flags after append {i}: {}", flags.cap());
    }
    println!("flags: {flags}");

    println!("\n[Concat & Median]\n");

    println!("{}", concat(&["A", "B", "C"], &["D", "E", "F"]));

    let mut values = [2.0, 1.0, 3.0, 4.0, 5.0];
    match median(&mut values) {
        Ok(mid) => println!("median of {values:?}: {mid}"),
        Err(error) => println!("no median: {error}"),
    }
    match median(&mut []) {
        Ok(mid) => println!("median of nothing: {mid}"),
        Err(error) => println!("no median: {error}"),
    }
}
