//! Process-wide logger for code that cannot thread a [`ColorLogger`] through.
//!
//! The instance is created on first use (stderr, ANSI when stderr is a color
//! terminal) unless [`init`] installed one earlier. Every call takes the lock
//! for the whole lookup-or-generate-then-write, so two threads logging the
//! same new type still agree on one color.

use crate::error::LogError;
use crate::logger::ColorLogger;
use crate::output_format::Markup;
use crate::sink::{ConsoleSink, WriterSink};
use crate::type_key::TypeIdentity;
use once_cell::sync::OnceCell;
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type SharedSink = Box<dyn ConsoleSink + Send>;

static LOGGER: OnceCell<Mutex<ColorLogger<SharedSink>>> = OnceCell::new();

/// Install the process-wide logger. Fails if one is already in place,
/// including the default one created by an earlier log call.
pub fn init(logger: ColorLogger<SharedSink>) -> Result<(), LogError> {
    LOGGER
        .set(Mutex::new(logger))
        .map_err(|_| LogError::AlreadyInitialized)
}

fn lock() -> MutexGuard<'static, ColorLogger<SharedSink>> {
    LOGGER
        .get_or_init(|| {
            let sink: SharedSink = Box::new(WriterSink::stderr());
            Mutex::new(ColorLogger::new(sink).with_markup(Markup::detect_stderr()))
        })
        .lock()
        // a panic mid-write leaves the color map intact
        .unwrap_or_else(PoisonError::into_inner)
}

pub fn set_color<T: TypeIdentity + ?Sized>(source: &T, hex: impl Into<String>) {
    lock().set_color(source, hex);
}

pub fn color_for<T: TypeIdentity + ?Sized>(source: &T) -> String {
    lock().color_for(source).to_string()
}

pub fn log<T: TypeIdentity + ?Sized>(source: &T, message: &str) -> Result<(), LogError> {
    lock().log(source, message)
}

pub fn log_format<T: TypeIdentity + ?Sized>(
    source: &T,
    template: &str,
    args: &[&dyn Display],
) -> Result<(), LogError> {
    lock().log_format(source, template, args)
}
