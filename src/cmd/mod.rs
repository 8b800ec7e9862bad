mod check;
mod render;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datastencil")]
#[command(author = "Helge Sverre <helge.sverre@gmail.com>")]
#[command(version)]
#[command(about = "Render realistic test data from placeholder templates", long_about = None)]
pub struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render rows from a template
    Render {
        /// Template text, e.g. "INSERT INTO t VALUES ('{guid}', {int:min:1|max:9});"
        template: Option<String>,

        /// Read the template from a file
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,

        /// YAML job file (template, template_file, count, seed, delimiter, output)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of rows to render [default: 1]
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Text written after every row [default: newline]
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Show progress during rendering
        #[arg(short, long)]
        progress: bool,

        /// Print run statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile a template and describe the resulting callstack
    Check {
        /// Template text
        template: Option<String>,

        /// Read the template from a file
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,

        /// Print the callstack as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render {
            template,
            file,
            config,
            count,
            seed,
            output,
            delimiter,
            progress,
            json,
        } => render::run(
            template, file, config, count, seed, output, delimiter, progress, json,
        ),
        Commands::Check {
            template,
            file,
            json,
        } => check::run(template, file, json),
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "datastencil",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
