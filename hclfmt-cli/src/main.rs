mod files;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use hclfmt_core::{PrintConfig, format};

#[derive(Parser)]
#[command(name = "hclfmt")]
#[command(about = "Rewrite HCL files in canonical format", long_about = None)]
struct Cli {
    /// Path to an HCL file or directory, or `-` for stdin
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Check if files are formatted (don't modify)
    #[arg(long, short)]
    check: bool,

    /// Show diff of formatting changes
    #[arg(long)]
    diff: bool,

    /// Recursively format all HCL files in directory
    #[arg(long, short)]
    recursive: bool,

    /// Extra spaces after the tab of each indentation level
    #[arg(long, default_value_t = 0)]
    space_width: usize,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = PrintConfig::new(cli.space_width);

    let result = if cli.path.as_os_str() == "-" {
        run_stdin(&config)
    } else {
        run_fmt(&cli.path, &config, cli.check, cli.diff, cli.recursive)
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_stdin(config: &PrintConfig) -> Result<(), String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    let formatted = format(&content, config).map_err(|e| e.to_string())?;
    io::stdout()
        .write_all(formatted.as_bytes())
        .map_err(|e| format!("Failed to write stdout: {}", e))
}

/// What happened to a single file
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Clean,
    Changed,
    Failed(String),
}

/// Options shared by every file of one invocation
struct Run<'a> {
    config: &'a PrintConfig,
    check: bool,
    show_diff: bool,
}

impl Run<'_> {
    fn process(&self, path: &Path) -> Outcome {
        let original = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => return Outcome::Failed(format!("cannot read: {}", e)),
        };
        let formatted = match format(&original, self.config) {
            Ok(text) => text,
            Err(e) => return Outcome::Failed(e.to_string()),
        };

        if formatted == original {
            return Outcome::Clean;
        }
        if self.show_diff {
            print_diff(path, &original, &formatted);
        }
        if !self.check
            && let Err(e) = fs::write(path, &formatted)
        {
            return Outcome::Failed(format!("cannot write: {}", e));
        }
        Outcome::Changed
    }
}

/// Tally of outcomes, turned into the exit status once every file is done
#[derive(Default)]
struct Summary {
    clean: usize,
    changed: usize,
    failed: usize,
}

impl Summary {
    fn record(&mut self, path: &Path, outcome: Outcome, check: bool) {
        match outcome {
            Outcome::Clean => {
                log::debug!("{} already formatted", path.display());
                self.clean += 1;
            }
            Outcome::Changed if check => {
                println!("{} {}", "Unformatted:".yellow(), path.display());
                self.changed += 1;
            }
            Outcome::Changed => {
                println!("{} {}", "Formatted:".green(), path.display());
                self.changed += 1;
            }
            Outcome::Failed(reason) => {
                eprintln!("{} {}: {}", "Skipped:".red(), path.display(), reason);
                self.failed += 1;
            }
        }
    }

    fn finish(self, check: bool) -> Result<(), String> {
        let total = self.clean + self.changed + self.failed;
        if self.failed > 0 {
            return Err(format!(
                "{} of {} file(s) could not be formatted",
                self.failed, total
            ));
        }
        if check && self.changed > 0 {
            return Err(format!("{} of {} file(s) need formatting", self.changed, total));
        }

        let verb = if check { "checked" } else { "formatted" };
        println!(
            "{}",
            format!("{} file(s) {}, {} changed.", total, verb, self.changed)
                .green()
                .bold()
        );
        Ok(())
    }
}

fn run_fmt(
    path: &Path,
    config: &PrintConfig,
    check: bool,
    show_diff: bool,
    recursive: bool,
) -> Result<(), String> {
    let files = files::collect(path, recursive)?;
    if files.is_empty() {
        println!("{}", "No HCL files found.".yellow());
        return Ok(());
    }
    log::debug!("formatting {} file(s)", files.len());

    let run = Run {
        config,
        check,
        show_diff,
    };
    let mut summary = Summary::default();
    for file in &files {
        summary.record(file, run.process(file), check);
    }
    summary.finish(check)
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("{} {}", "---".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for hunk in diff.unified_diff().context_radius(2).iter_hunks() {
        println!("{}", hunk.header().to_string().cyan());
        for change in hunk.iter_changes() {
            let line = match change.tag() {
                ChangeTag::Delete => format!("-{}", change).red(),
                ChangeTag::Insert => format!("+{}", change).green(),
                ChangeTag::Equal => format!(" {}", change).normal(),
            };
            print!("{}", line);
            if change.missing_newline() {
                println!();
            }
        }
    }
}
