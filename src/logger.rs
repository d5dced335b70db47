// src/logger.rs
use crate::error::LogError;
use crate::output_format::Markup;
use crate::palette::{ColorGenerator, HashedHue};
use crate::registry::ColorRegistry;
use crate::sink::ConsoleSink;
use crate::template::format_template;
use crate::type_key::{TypeIdentity, TypeKey};
use std::fmt::Display;

/// Logger that prefixes each line with the caller's type name, drawn in the
/// color assigned to that type.
///
/// Colors are generated on a type's first line and remembered in the owned
/// [`ColorRegistry`]; `set_color` overrides them.
pub struct ColorLogger<S, G = HashedHue> {
    registry: ColorRegistry,
    sink: S,
    generator: G,
    markup: Markup,
}

impl<S: ConsoleSink> ColorLogger<S> {
    pub fn new(sink: S) -> Self {
        ColorLogger {
            registry: ColorRegistry::new(),
            sink,
            generator: HashedHue,
            markup: Markup::default(),
        }
    }
}

impl<S: ConsoleSink, G: ColorGenerator> ColorLogger<S, G> {
    /// Swap the color generator, keeping every assignment made so far
    pub fn with_generator<H: ColorGenerator>(self, generator: H) -> ColorLogger<S, H> {
        ColorLogger {
            registry: self.registry,
            sink: self.sink,
            generator,
            markup: self.markup,
        }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_registry(mut self, registry: ColorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    pub fn set_markup(&mut self, markup: Markup) {
        self.markup = markup;
    }

    pub fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ColorRegistry {
        &mut self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Pre-assign or replace the color for a type. `hex` is not validated.
    pub fn set_color<T: TypeIdentity + ?Sized>(&mut self, source: &T, hex: impl Into<String>) {
        self.registry.set_color(source.type_key(), hex);
    }

    /// The color `source` logs with, generating and remembering it if needed
    pub fn color_for<T: TypeIdentity + ?Sized>(&mut self, source: &T) -> &str {
        self.registry.get_or_generate(source.type_key(), &self.generator)
    }

    pub fn log<T: TypeIdentity + ?Sized>(&mut self, source: &T, message: &str) -> Result<(), LogError> {
        let key = source.type_key();
        self.emit(key, message)
    }

    /// Substitute `args` into `template` (`{0}`, `{1,8}`, ...) and log the result.
    /// Nothing is written if the template is malformed.
    pub fn log_format<T: TypeIdentity + ?Sized>(
        &mut self,
        source: &T,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        let message = format_template(template, args)?;
        self.log(source, &message)
    }

    /// Log as the Rust type `T` without needing a value of it
    pub fn log_as<T: ?Sized>(&mut self, message: &str) -> Result<(), LogError> {
        self.emit(TypeKey::of::<T>(), message)
    }

    fn emit(&mut self, key: TypeKey, message: &str) -> Result<(), LogError> {
        let type_name = key.name().to_string();
        let markup = self.markup;
        let color = self.registry.get_or_generate(key, &self.generator);
        self.sink
            .write_line(format_args!("{}", markup.render(color, &type_name, message)))?;
        Ok(())
    }
}
