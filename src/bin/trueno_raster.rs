//! trueno-raster - batch rasterizer.
//!
//! Reads session events and draw commands line by line from a script (or
//! stdin) and writes the final framebuffer as a PNG.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{error, info};
use trueno_raster::command::run_line;
use trueno_raster::config::Config;
use trueno_raster::output::PngEncoder;

fn get_matches() -> ArgMatches {
    Command::new("trueno-raster")
        .version(crate_version!())
        .about("rasterizes lines, polygons and curves from a command script")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("the configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("script")
                .short('s')
                .long("script")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("command script (defaults to stdin)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("PNG file to write")
                .action(ArgAction::Set)
                .default_value("out.png"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dpi")
                .long("dpi")
                .value_name("FACTOR")
                .value_parser(value_parser!(f32))
                .help("scale applied to command coordinates")
                .action(ArgAction::Set),
        )
        .get_matches()
}

fn load_config(matches: &mut ArgMatches) -> trueno_raster::Result<Config> {
    let mut config = match matches.remove_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
    };
    if let Some(width) = matches.remove_one("width") {
        config.canvas.width = width;
    }
    if let Some(height) = matches.remove_one("height") {
        config.canvas.height = height;
    }
    if let Some(dpi) = matches.remove_one("dpi") {
        config.canvas.dpi = dpi;
    }
    Ok(config)
}

fn run(mut matches: ArgMatches) -> trueno_raster::Result<()> {
    let config = load_config(&mut matches)?;
    let mut canvas = config.build_canvas()?;
    let mut session = config.build_session();

    let input: Box<dyn BufRead> = match matches.remove_one::<PathBuf>("script") {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if run_line(&line, &mut canvas, &mut session).is_err() {
            println!("<Invalid Input>");
        }
    }

    let output = matches
        .remove_one::<PathBuf>("output")
        .unwrap_or_else(|| PathBuf::from("out.png"));
    PngEncoder::write_to_file(canvas.renderer(), &output)?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Info by default; filters read from `env` override it.
fn logger(env: env_logger::Env<'_>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info).parse_env(env);
    builder
}

fn main() -> ExitCode {
    logger(env_logger::Env::default()).init();

    match run(get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
