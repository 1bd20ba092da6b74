use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// PCL interpreter and tooling.
///
/// PCL is a tiny imperative scripting language over integers. This CLI runs
/// PCL programs and provides small tooling commands for inspecting them.
///
/// EXAMPLES:
///     pcl run main.pcl          Run a PCL program
///     pcl check main.pcl        Parse without running
///     pcl ast main.pcl          Dump the AST as JSON
#[derive(Parser)]
#[command(name = "pcl")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a PCL source file
    ///
    /// Parses and interprets the file. The program's `print` statements go
    /// to stdout and its `?` expressions read from stdin. Exits nonzero on
    /// syntax or runtime errors.
    #[command(visible_alias = "r")]
    Run {
        /// Path to the PCL source file
        file: String,
    },

    /// Parse a PCL source file without running it
    ///
    /// Reports syntax errors and exits nonzero if any are found; produces no
    /// output for a well-formed file.
    #[command(visible_alias = "c")]
    Check {
        /// Path to the PCL source file
        file: String,
    },

    /// Dump the AST to JSON
    ///
    /// Parses the source file and prints the node arena in a versioned JSON
    /// format for tooling or debugging purposes.
    Ast {
        /// Path to the PCL source file
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => commands::run::run(&file),
        Commands::Check { file } => commands::check::check(&file),
        Commands::Ast { file } => commands::ast::dump(&file),
    }
}
