use anyhow::Result;
use lifegrid::cli::{self, Command};
use lifegrid::config::Config;
use lifegrid::context::{AppContext, StandardContext};
use lifegrid::render::{self, TextOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args(std::env::args().skip(1))?;
    if args.command == Command::Help {
        cli::print_help("lifegrid");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());

    // Logging is best-effort; a read-only data dir should not stop rendering.
    if let Err(e) = lifegrid::logging::init(&ctx, lifegrid::logging::level_from_env()) {
        eprintln!("Warning: file logging disabled: {:#}", e);
    }

    if args.command == Command::Init {
        return init_config(&ctx);
    }

    let config = Config::load_or_default(&ctx)?;

    match args.command {
        Command::Print { color } => {
            let (model, grid) = lifegrid::build(&config);
            let opts = TextOptions {
                color,
                target_years: config.target_years,
            };
            print!("{}", render::render_text(&model, &grid, &opts));
        }
        Command::Stages => {
            let (model, _) = lifegrid::build(&config);
            print!("{}", render::render_stage_table(&model));
        }
        Command::View => run_view(config)?,
        Command::Help | Command::Init => {}
    }
    Ok(())
}

fn init_config(ctx: &dyn AppContext) -> Result<()> {
    let path = Config::get_path_string(ctx)?;
    if ctx.get_config_file_path()?.exists() {
        println!("Config already exists at: {}", path);
        return Ok(());
    }
    Config::default().save(ctx)?;
    log::info!("Wrote default config to {}", path);
    println!("Configuration saved to: {}", path);
    Ok(())
}

#[cfg(feature = "tui")]
fn run_view(config: Config) -> Result<()> {
    lifegrid::tui::run(config)
}

#[cfg(not(feature = "tui"))]
fn run_view(_config: Config) -> Result<()> {
    anyhow::bail!("This build has no terminal view; use 'lifegrid print'")
}
