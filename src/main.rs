use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use huelog::tty::{should_use_colors, stderr_supports_colors};
use huelog::{ColorLogger, ConsoleSink, LoggerConfig, Markup, WriterSink};

#[derive(Parser)]
#[command(name = "huelog")]
#[command(about = "Prefix log lines with a stable, per-type color")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Line markup (default: ansi on a color terminal, plain otherwise)
    #[arg(long, global = true, value_enum)]
    markup: Option<Markup>,

    /// Force colored output
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// YAML file with markup and pre-assigned type colors
    #[arg(long = "colors", global = true, value_name = "FILE")]
    colors_file: Option<PathBuf>,

    /// Debug mode - log color assignments to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the color assigned to each type name
    Color {
        #[arg(value_name = "TYPE", required = true)]
        names: Vec<String>,

        /// Print a JSON object instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Write a single log line
    Log {
        /// Type name the line is logged as
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        type_name: String,

        /// Message template with {0}, {1}, ... placeholders
        template: String,

        /// Values for the template placeholders
        args: Vec<String>,
    },
    /// Color "Type: message" lines read from stdin or a file
    Tag {
        /// Separator between the type name and the message
        #[arg(short = 'd', long, default_value = ": ")]
        delimiter: String,

        /// Type for lines without a separator (default: pass them through)
        #[arg(long, value_name = "TYPE")]
        default_type: Option<String>,

        /// Input file (default: stdin)
        #[arg(short = 'i', long = "input")]
        input_file: Option<PathBuf>,
    },
}

impl Args {
    fn color_preference(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter_directives = if debug { "warn,huelog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(stderr_supports_colors())
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

fn run(args: Args) -> Result<()> {
    init_tracing(args.debug)?;

    let default_markup = Markup::for_terminal(should_use_colors(args.color_preference()));
    let mut logger = ColorLogger::new(WriterSink::stdout()).with_markup(default_markup);

    if let Some(path) = &args.colors_file {
        let config = LoggerConfig::from_file(path)
            .with_context(|| format!("Failed to load colors file '{}'", path.display()))?;
        config.apply(&mut logger);
    }
    if let Some(markup) = args.markup {
        logger.set_markup(markup);
    }

    match args.command {
        Command::Color { names, json } => print_colors(&mut logger, &names, json),
        Command::Log {
            type_name,
            template,
            args,
        } => {
            let values: Vec<&dyn std::fmt::Display> =
                args.iter().map(|arg| arg as &dyn std::fmt::Display).collect();
            logger.log_format(type_name.as_str(), &template, &values)?;
            Ok(())
        }
        Command::Tag {
            delimiter,
            default_type,
            input_file,
        } => {
            let input: Box<dyn BufRead> = match &input_file {
                Some(path) => {
                    let file = File::open(path).with_context(|| {
                        format!("Failed to open input file '{}'", path.display())
                    })?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(BufReader::new(io::stdin())),
            };
            tag_lines(&mut logger, input, &delimiter, default_type.as_deref())
        }
    }
}

fn print_colors(
    logger: &mut ColorLogger<WriterSink<io::Stdout>>,
    names: &[String],
    json: bool,
) -> Result<()> {
    if json {
        let mut object = serde_json::Map::new();
        for name in names {
            let color = logger.color_for(name.as_str()).to_string();
            object.insert(name.clone(), serde_json::Value::String(color));
        }
        let rendered = serde_json::to_string(&serde_json::Value::Object(object))?;
        logger.sink_mut().write_line(format_args!("{}", rendered))?;
        return Ok(());
    }

    for name in names {
        let color = logger.color_for(name.as_str()).to_string();
        logger
            .sink_mut()
            .write_line(format_args!("{}\t{}", name, color))?;
    }
    Ok(())
}

fn tag_lines(
    logger: &mut ColorLogger<WriterSink<io::Stdout>>,
    input: Box<dyn BufRead>,
    delimiter: &str,
    default_type: Option<&str>,
) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;

        match line.split_once(delimiter) {
            Some((type_name, message)) if !type_name.is_empty() => {
                logger.log(type_name, message)?;
            }
            _ => match default_type {
                Some(type_name) => logger.log(type_name, &line)?,
                None => logger.sink_mut().write_line(format_args!("{}", line))?,
            },
        }
    }
    Ok(())
}
