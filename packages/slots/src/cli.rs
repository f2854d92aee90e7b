//! Command-line interface for the slots pipeline.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Options, DEFAULT_DELIMITER, DEFAULT_PATTERN};
use crate::error::{Result, SlotsError};
use crate::io::{read_tree, write_tree};
use crate::matter::Matter;
use crate::pipeline::process;

/// Pagefold Slots - divide document contents into named slots for templating.
#[derive(Parser)]
#[command(name = "pagefold-slots")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split slots in every matched document of a source tree.
    Process {
        /// Source directory to read documents from
        input: PathBuf,

        /// Output directory (default: build/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Glob pattern selecting documents to process
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Front-matter delimiter token
        #[arg(short, long, default_value = DEFAULT_DELIMITER)]
        delimiter: String,

        /// Do not parse leading front matter when loading documents
        #[arg(long)]
        no_front_matter: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            pattern,
            delimiter,
            no_front_matter,
        } => process_command(&input, output.as_deref(), pattern, delimiter, !no_front_matter),
    }
}

/// Execute the process command.
fn process_command(
    input: &Path,
    output: Option<&Path>,
    pattern: String,
    delimiter: String,
    front_matter: bool,
) -> Result<()> {
    // Validate the input directory before reading anything
    if !input.exists() {
        return Err(SlotsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input directory does not exist: {}", input.display()),
        )));
    }
    if !input.is_dir() {
        return Err(SlotsError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a directory: {}", input.display()),
        )));
    }

    let output = output.map_or_else(|| PathBuf::from("build"), Path::to_path_buf);

    println!(
        "{} {} into {}",
        style("Processing").bold(),
        style(input.display()).cyan(),
        style(output.display()).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Reading documents...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let matter = Matter::new([delimiter]);
    let mut files = match read_tree(input, &matter, front_matter) {
        Ok(files) => files,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Splitting slots...");

    let options = Options::new().with_pattern(pattern);
    let report = match process(&mut files, &matter, &options) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing output...");

    let written = match write_tree(&files, &output) {
        Ok(written) => written,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Documents: {}", files.len());
    println!("  Matched: {}", style(report.matched.len()).cyan());
    if !report.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(report.warnings.len()).yellow().bold()
        );
        for warning in &report.warnings {
            println!("    {warning}");
        }
    }

    println!();
    println!(
        "{} {} file(s) under {}",
        style("Saved:").green().bold(),
        written.len(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_process() {
        let cli = Cli::parse_from(["pagefold-slots", "process", "content"]);

        let Commands::Process {
            input,
            output,
            pattern,
            delimiter,
            no_front_matter,
        } = cli.command;
        assert_eq!(input, PathBuf::from("content"));
        assert!(output.is_none());
        assert_eq!(pattern, "**/*.md");
        assert_eq!(delimiter, "---");
        assert!(!no_front_matter);
    }

    #[test]
    fn test_cli_parse_process_with_flags() {
        let cli = Cli::parse_from([
            "pagefold-slots",
            "process",
            "content",
            "--output",
            "dist",
            "--pattern",
            "**/*.njk",
            "--no-front-matter",
        ]);

        let Commands::Process {
            output,
            pattern,
            no_front_matter,
            ..
        } = cli.command;
        assert_eq!(output, Some(PathBuf::from("dist")));
        assert_eq!(pattern, "**/*.njk");
        assert!(no_front_matter);
    }
}
