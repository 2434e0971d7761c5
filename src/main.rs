use anyhow::Context;
use clap::{Parser, Subcommand};
use listview_compiler::compile::columns::COLUMNS;
use listview_compiler::{compile, config, diagnostics, render, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listview-compiler")]
#[command(about = "Compile list view configurations into job server view XML", long_about = None)]
struct Cli {
    /// Log debug details (unknown columns, ignored filters).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one view configuration (YAML or JSON) to XML.
    Compile {
        input: PathBuf,

        /// Write to this file instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// List the recognised column identifiers.
    Columns,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.cmd {
        Commands::Compile { input, out } => {
            // 1) Load + parse.
            let view = config::load_view(&input)?;

            // 2) Compile; library errors are tagged with the source file.
            let root = compile(&view).map_err(|e| {
                anyhow::anyhow!(diagnostics::error_message(format!(
                    "{}: {}",
                    input.display(),
                    e
                )))
            })?;

            // 3) Render.
            let xml = render::render_xml(&root);
            match out {
                Some(path) => {
                    std::fs::write(&path, xml)
                        .with_context(|| format!("write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => print!("{}", xml),
            }
        }
        Commands::Columns => {
            for (id, tag) in COLUMNS {
                println!("{:<14} {}", id, tag);
            }
        }
    }

    Ok(())
}
