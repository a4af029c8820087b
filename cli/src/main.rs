//! mdreport CLI - text to PDF report tool

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdreport::{ConvertOptions, JsonFormat};

#[derive(Parser)]
#[command(name = "mdreport")]
#[command(version)]
#[command(about = "Convert markdown-subset text documents to PDF reports", long_about = None)]
struct Cli {
    /// Input text file (prompted for when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file (defaults to the input name with .pdf appended)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Conversion preset
    #[arg(long, value_enum, default_value = "plain")]
    preset: PresetArg,

    /// Report title for the cover page and PDF metadata
    #[arg(long)]
    title: Option<String>,

    /// Directory containing the TTF font family
    #[arg(long, value_name = "DIR")]
    fonts: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a text file to a PDF report
    Convert {
        /// Input text file (prompted for when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output PDF file (defaults to the input name with .pdf appended)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Conversion preset
        #[arg(long, value_enum, default_value = "plain")]
        preset: PresetArg,

        /// Report title for the cover page and PDF metadata
        #[arg(long)]
        title: Option<String>,

        /// Directory containing the TTF font family
        #[arg(long, value_name = "DIR")]
        fonts: Option<PathBuf>,
    },

    /// Parse a text file and print the layout tree as JSON
    Inspect {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Conversion preset (affects italics and section breaks)
        #[arg(long, value_enum, default_value = "plain")]
        preset: PresetArg,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Plain converter: no cover page, bold emphasis only
    Plain,
    /// Titled report: cover page, section page breaks, italics
    Report,
}

impl From<PresetArg> for ConvertOptions {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Plain => ConvertOptions::plain(),
            PresetArg::Report => ConvertOptions::report(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            preset,
            title,
            fonts,
        }) => cmd_convert(input, output, preset, title, fonts),
        Some(Commands::Inspect {
            input,
            compact,
            preset,
        }) => cmd_inspect(&input, compact, preset),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_convert(cli.input, cli.output, cli.preset, cli.title, cli.fonts),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    preset: PresetArg,
    title: Option<String>,
    fonts: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = match input {
        Some(path) => path,
        None => prompt_for_input()?,
    };
    let output = output.unwrap_or_else(|| derive_output(&input));

    let mut options: ConvertOptions = preset.into();
    if let Some(title) = title {
        options = options.with_title(title);
    }
    if let Some(dir) = fonts {
        options.render = options.render.with_font_dir(dir);
    }

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing input...");
    let doc = mdreport::parse_file_with_options(&input, options.parse)?;
    pb.inc(1);

    pb.set_message("Rendering PDF...");
    log::debug!("writing {} node(s) to {}", doc.node_count(), output.display());
    mdreport::render::render_to_file(&doc, &output, &options.render)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{} {}", "Created".green().bold(), output.display());
    println!("  {} {} block(s)", "├─".dimmed(), doc.node_count());
    println!("  {} {} heading(s)", "└─".dimmed(), doc.headings().len());

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    compact: bool,
    preset: PresetArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let options: ConvertOptions = preset.into();
    let doc = mdreport::parse_file_with_options(input, options.parse)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", mdreport::render::to_json(&doc, format)?);

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "mdreport".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
}

/// Ask for an input filename on stdin.
fn prompt_for_input() -> Result<PathBuf, Box<dyn std::error::Error>> {
    print!("Input file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("no input file given".into());
    }

    Ok(PathBuf::from(trimmed))
}

/// Output path: the input name with `.pdf` appended.
fn derive_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".pdf");
    PathBuf::from(name)
}
