use swagger_annotations::{
    Annotation, Config, LogDiagnostics, Operation, OperationDeclaration, ParseContext, Result,
};

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
struct SwaggerAnnotations {
    /// YAML configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    subcommand: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the operation as a JSON document
    Render {
        declaration_location: PathBuf,
        #[clap(long)]
        pretty: bool,
    },
    /// Check the operation and its parameters
    Validate { declaration_location: PathBuf },
}

fn build(location: &Path, config: &Config) -> Result<(Operation, ParseContext)> {
    let declaration = OperationDeclaration::load(location)?;
    Ok(declaration.build(config, &LogDiagnostics))
}

fn run(args: SwaggerAnnotations) -> Result<bool> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.subcommand {
        Command::Render {
            declaration_location,
            pretty,
        } => {
            let (operation, ctx) = build(&declaration_location, &config)?;
            if !operation.validate(&ctx, &LogDiagnostics) {
                log::warn!("operation `{}` in {ctx} is invalid", operation.nickname);
            }
            let document = operation.to_document()?;
            let json = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            println!("{json}");
            Ok(true)
        }
        Command::Validate {
            declaration_location,
        } => {
            let (operation, ctx) = build(&declaration_location, &config)?;
            let valid = operation.validate(&ctx, &LogDiagnostics);
            if valid {
                log::info!("operation `{}` in {ctx} is valid", operation.nickname);
            } else {
                log::error!("operation `{}` in {ctx} is invalid", operation.nickname);
            }
            Ok(valid)
        }
    }
}

fn main() {
    pretty_env_logger::init();
    let args = SwaggerAnnotations::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
