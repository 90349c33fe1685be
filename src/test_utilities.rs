//! Helpers shared by the unit tests.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::Cell;
use std::sync::Once;

thread_local! {
    static WARNINGS: Cell<usize> = const { Cell::new(0) };
}

// Counts per thread so tests running side by side do not see each other's records.
struct WarningCounter;

impl Log for WarningCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() == Level::Warn {
            WARNINGS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: WarningCounter = WarningCounter;
static INSTALL: Once = Once::new();

/// Runs `f` and returns its result together with the number of warnings it logged.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });

    let before = WARNINGS.with(Cell::get);
    let result = f();
    let after = WARNINGS.with(Cell::get);
    (result, after - before)
}
