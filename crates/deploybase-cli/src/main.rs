mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_BASE_ERROR, EXIT_FAILURE};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "deploybase",
    version,
    about = "Parse, validate, and convert deployment base strings"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a base string and print its canonical form.
    Parse {
        /// Base string, e.g. "ubuntu/20.04/stable".
        base: String,
        /// Target architecture (repeatable).
        #[arg(short, long = "arch")]
        arch: Vec<String>,
    },
    /// Validate every target in a targets manifest.
    Check {
        /// Path to the targets manifest.
        #[arg(default_value = "deploybase.toml")]
        manifest: PathBuf,
    },
    /// Write a starter targets manifest.
    Init {
        /// Where to write the manifest.
        #[arg(short, long, default_value = "deploybase.toml")]
        output: PathBuf,
        /// Initial base string.
        #[arg(long, default_value = "ubuntu/22.04/stable")]
        base: String,
        /// Target architecture (repeatable).
        #[arg(short, long = "arch")]
        arch: Vec<String>,
        /// Overwrite an existing manifest.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the structured record for a base string.
    Encode {
        /// Base string to encode.
        base: String,
        /// Emit TOML instead of JSON.
        #[arg(long, default_value_t = false)]
        toml: bool,
    },
    /// Read a structured JSON record and print the base string.
    Decode {
        /// Path to a JSON record, or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
    /// List known operating systems.
    Os,
    /// List known architectures and their aliases.
    Arches,
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages in the specified directory.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("DEPLOYBASE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Parse { base, arch } => commands::parse::run(&base, &arch, json_output),
        Commands::Check { manifest } => commands::check::run(&manifest, json_output),
        Commands::Init {
            output,
            base,
            arch,
            force,
        } => commands::init::run(&output, &base, &arch, force, json_output),
        Commands::Encode { base, toml } => commands::encode::run(&base, toml),
        Commands::Decode { input } => commands::decode::run(&input, json_output),
        Commands::Os => commands::list::run_os(json_output),
        Commands::Arches => commands::list::run_arches(json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("invalid base string")
                || msg.starts_with("manifest error:")
                || msg.starts_with("failed to parse manifest")
                || msg.starts_with("unsupported manifest_version")
                || msg.starts_with("manifest declares no targets")
            {
                EXIT_BASE_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
