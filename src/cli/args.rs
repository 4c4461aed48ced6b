//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Pull every `str` out of nested files into a CSV catalog or flat JSON files
//! - `apply`: Merge translations back into nested files (to an output folder or in place)
//! - `init`: Write a default `.wordlocrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Apply(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Flat representation used on the translator side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One CSV catalog for the whole folder (`file::label:index` ids)
    #[default]
    Csv,
    /// One flat JSON per nested file (`label_index` ids)
    Flat,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Skip files that fail to parse or write instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Folder of nested message JSON files
    pub input_root: PathBuf,

    /// CSV catalog to write (csv) or folder for flat JSON files (flat)
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Indent width of flat JSON files (overrides config file)
    #[arg(long)]
    pub indent: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// Folder of nested message JSON files (overrides config file)
    #[arg(env = "WORDLOC_INPUT_ROOT")]
    pub input_root: Option<PathBuf>,

    /// CSV catalog (csv) or folder of flat JSON files (flat) (overrides config file)
    #[arg(env = "WORDLOC_TRANSLATIONS_ROOT")]
    pub translations: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Write merged files here instead of in place (required for csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Prompt for folders not given as arguments or in the config file
    #[arg(short, long)]
    pub interactive: bool,

    /// Suffix appended to originals replaced in place (overrides config file)
    #[arg(long)]
    pub backup_suffix: Option<String>,

    /// Indent width of rewritten nested files (overrides config file)
    #[arg(long)]
    pub indent: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into a CSV catalog or flat JSON files
    Extract(ExtractCommand),
    /// Apply translations back into nested message files
    Apply(ApplyCommand),
    /// Initialize a new .wordlocrc.json configuration file
    Init,
}
