//! Arpio CLI - manage disaster recovery applications and recovery points

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod cli;
mod models;
mod output;

use arpio::Result;
use cli::{AppCommands, Cli, Commands, GlobalOptions, RecoveryPointCommands};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("arpio version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "arpio", &mut std::io::stdout());
            Ok(())
        }
        Commands::App(app_cmd) => match app_cmd {
            AppCommands::List => cli::app::list(&opts).await,
            AppCommands::Get { app_id } => cli::app::get(&opts, &app_id).await,
            AppCommands::Find { name, wait } => cli::app::find(&opts, &name, wait).await,
            AppCommands::Create { file } => cli::app::create(&opts, &file).await,
            AppCommands::Update { file } => cli::app::update(&opts, &file).await,
            AppCommands::Delete { app_id, yes } => cli::app::delete(&opts, &app_id, yes).await,
        },
        Commands::Rp(rp_cmd) => match rp_cmd {
            RecoveryPointCommands::List { app, window } => {
                cli::recovery_point::list(&opts, &app, &window).await
            }
            RecoveryPointCommands::Get {
                app,
                recovery_point_id,
            } => cli::recovery_point::get(&opts, &app, &recovery_point_id).await,
            RecoveryPointCommands::Latest { app, window, wait } => {
                cli::recovery_point::latest(&opts, &app, &window, wait).await
            }
            RecoveryPointCommands::Protect {
                app,
                recovery_point_id,
            } => cli::recovery_point::protect(&opts, &app, &recovery_point_id).await,
            RecoveryPointCommands::Resources {
                app,
                recovery_point_id,
            } => cli::recovery_point::resources(&opts, &app, &recovery_point_id).await,
        },
    }
}
