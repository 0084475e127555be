//! launch_composition CLI

use clap::Parser;
use launch_composition::{
    compose, emitter::CodeEmitter, error::Result, package::PackageLocator, write_outputs,
    AmentIndex, GeneratedSource, LaunchTarget,
};
use std::{path::PathBuf, process};

/// Package this tool installs its code template with
const SELF_PACKAGE: &str = "launch_composition";

const BANNER_START: &str =
    "================================ Generated C++ code start. ================================";
const BANNER_END: &str =
    "================================ Generated C++ code end. ================================";

#[derive(Parser)]
#[command(name = "launch_composition")]
#[command(about = "Generate a statically composed ROS 2 node from a launch file", long_about = None)]
#[command(version)]
struct Cli {
    /// Output file path for the generated C++ source
    output: Option<PathBuf>,

    /// Package containing the launch file
    #[arg(short, long, default_value = "perception_bringup")]
    package: String,

    /// Launch file name inside the package's launch directory
    #[arg(short, long, default_value = "perception_bringup.launch.xml")]
    launch_file: String,

    /// Launch file path, bypassing package lookup
    #[arg(long, conflicts_with_all = ["package", "launch_file"])]
    launch_path: Option<PathBuf>,

    /// Directory containing the code template
    #[arg(short, long)]
    template_dir: Option<PathBuf>,

    /// Template file name inside the template directory
    #[arg(long, default_value = launch_composition::emitter::DEFAULT_TEMPLATE)]
    template: String,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let index = AmentIndex::from_env();
    let emitter = build_emitter(&cli, &index)?;

    let target = match cli.launch_path {
        Some(path) => LaunchTarget::Path(path),
        None => LaunchTarget::package(cli.package, cli.launch_file),
    };

    let sources = compose(&target, &index, &emitter)?;
    if sources.is_empty() {
        log::warn!("No node containers found, nothing to generate");
        return Ok(());
    }

    for source in &sources {
        print_source(source);
    }

    if let Some(output) = &cli.output {
        write_outputs(&sources, output)?;
    }
    Ok(())
}

/// Explicit template directory, then the one installed with this package,
/// then the built-in template
fn build_emitter(cli: &Cli, index: &AmentIndex) -> Result<CodeEmitter> {
    let template_dir = match &cli.template_dir {
        Some(dir) => Some(dir.clone()),
        None => index
            .package_prefix(SELF_PACKAGE)
            .ok()
            .map(|prefix| prefix.join("lib").join(SELF_PACKAGE)),
    };

    let emitter = match template_dir {
        Some(dir) => CodeEmitter::from_dir(&dir)?,
        None => {
            log::debug!("Using built-in template");
            CodeEmitter::builtin()?
        }
    };
    Ok(emitter.with_template_name(cli.template.clone()))
}

fn print_source(source: &GeneratedSource) {
    if let Some(name) = &source.container_name {
        log::info!("Container: {}", name);
    }
    print!("{}", framed(source));
}

/// Generated code between the start and end banners, one per line
fn framed(source: &GeneratedSource) -> String {
    format!("{}\n{}\n{}\n", BANNER_START, source.code, BANNER_END)
}
