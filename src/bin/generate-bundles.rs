//! Generates the bundle configuration file of a Composer project.
//!
//! Meant to run as a Composer script after install/update; exits non-zero
//! when a module declares its bundles incorrectly.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use module_bundles::observability::{TracingConfig, init_tracing_subscriber};
use module_bundles::{GeneratorConfig, InstalledPackageRepository, ModuleBundleFinder};

#[derive(Debug, Parser)]
#[command(
    name = "generate-bundles",
    version,
    about = "Generate the bundle configuration from installed Composer modules"
)]
struct Cli {
    /// JSON configuration file [default: module-bundles.json]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Composer project root
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Composer vendor directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    vendor_dir: Option<PathBuf>,

    /// Output file, relative to the project root
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Package type that marks a package as a module
    #[arg(long, value_name = "TYPE")]
    module_type: Option<String>,

    /// Ignore bundles declared by the root package
    #[arg(long)]
    no_root_package: bool,

    /// Print the configuration instead of writing it
    #[arg(long)]
    stdout: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.project_dir {
            config.project_dir = dir.clone();
        }
        if let Some(dir) = &self.vendor_dir {
            config.vendor_dir = dir.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        if let Some(module_type) = &self.module_type {
            config.module_type = module_type.clone();
        }
        if self.no_root_package {
            config.include_root_package = false;
        }
    }
}

fn run(cli: &Cli) -> module_bundles::Result<()> {
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::debug!(?config, "Resolved configuration");

    let finder = ModuleBundleFinder::new(InstalledPackageRepository::from_config(&config));

    if cli.stdout {
        print!("{}", finder.create_bundle_configuration_yaml()?);
        return Ok(());
    }

    let path = finder.write_bundle_configuration(config.resolved_output_path())?;
    tracing::info!(path = %path.display(), "Bundle configuration generated");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing_subscriber(&TracingConfig::from_verbosity(cli.verbose)) {
        eprintln!("warning: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
