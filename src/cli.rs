// File: ./src/cli.rs
//! Command-line parsing and help text.
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal view.
    View,
    /// Text grid on stdout.
    Print { color: bool },
    /// Stage intervals on stdout.
    Stages,
    /// Write the default config file.
    Init,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

fn default_command() -> Command {
    if cfg!(feature = "tui") {
        Command::View
    } else {
        Command::Print { color: false }
    }
}

/// Parses the arguments after the binary name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

    let mut root: Option<PathBuf> = None;
    let mut command: Option<Command> = None;
    let mut no_color = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                return Ok(CliArgs {
                    root,
                    command: Command::Help,
                });
            }
            "--root" | "-r" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--root requires a path"))?;
                root = Some(PathBuf::from(value));
                i += 1; // Also consumed the value
            }
            "--no-color" => no_color = true,
            "print" if command.is_none() => command = Some(Command::Print { color: true }),
            "stages" if command.is_none() => command = Some(Command::Stages),
            "init" if command.is_none() => command = Some(Command::Init),
            "view" if command.is_none() => command = Some(Command::View),
            other => anyhow::bail!("Unknown argument '{}'. See --help.", other),
        }
        i += 1;
    }

    let command = match command.unwrap_or_else(default_command) {
        Command::Print { color } => Command::Print {
            color: color && !no_color,
        },
        other => other,
    };

    Ok(CliArgs { root, command })
}

pub fn print_help(binary_name: &str) {
    println!(
        "Lifegrid v{} - A lifetime in months, colored by life stage",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} print [--no-color]", binary_name);
    println!("    {} stages", binary_name);
    println!("    {} init", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("COMMANDS:");
    println!("    (none)                Open the interactive grid (needs the 'tui' feature)");
    println!("    print                 Print the grid as text to stdout");
    println!("    stages                Print each stage with its start and end month");
    println!("    init                  Write the default config.toml if none exists");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    --no-color            Plain glyphs without ANSI colors (print).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the grid for help");
    println!();
    println!("ENVIRONMENT:");
    println!(
        "    {}=debug       Raise the log level of lifegrid.log",
        crate::logging::LOG_LEVEL_ENV
    );
}
