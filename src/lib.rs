// src/lib.rs
pub mod colors;
pub mod config;
pub mod error;
pub mod global;
pub mod logger;
pub mod output_format;
pub mod palette;
pub mod registry;
pub mod rng;
pub mod sink;
pub mod template;
pub mod tty;
pub mod type_key;

pub use error::*;

pub use colors::{hsv_to_rgb, Rgb};
pub use config::LoggerConfig;
pub use logger::ColorLogger;
pub use output_format::Markup;
pub use palette::{generate_hex_color, name_seed, ColorGenerator, HashedHue};
pub use registry::ColorRegistry;
pub use sink::{ConsoleSink, MemorySink, TracingSink, WriterSink};
pub use template::format_template;
pub use type_key::{TypeIdentity, TypeKey};
