use clap::{Parser, Subcommand};
use rosterwatch_cli::commands;
use rosterwatch_cli::logging::init_logging;
use rosterwatch_cli::readline;
use rosterwatch_core::Category;
use rosterwatch_core::app_state::AppState;
use rosterwatch_core::rainbow::RainbowParam;
use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();

    let presence_available = std::env::var_os("ROSTERWATCH_PRESENCE").is_some();
    let state = Arc::new(RwLock::new(AppState::new(presence_available)));

    if let Some(path) = std::env::args().nth(1) {
        commands::load_roster(&path, Arc::clone(&state)).await;
        commands::flush_messages(Arc::clone(&state)).await;
    }

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                commands::flush_messages(Arc::clone(&state)).await;
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "temporary war/helper/mute lists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    AddTempWar {
        name: String,
        #[arg(trailing_var_arg = true)]
        reason: Vec<String>,
    },
    DelTempWar {
        name: String,
    },
    AddTempHelper {
        name: String,
        #[arg(trailing_var_arg = true)]
        reason: Vec<String>,
    },
    DelTempHelper {
        name: String,
    },
    AddTempMute {
        name: String,
        #[arg(trailing_var_arg = true)]
        reason: Vec<String>,
    },
    DelTempMute {
        name: String,
    },
    ListTemp,
    /// Drop every temporary entry
    ClearTemp,
    OnlineInfo {
        /// Only the two count lines, without the frame
        #[arg(short, long)]
        compact: bool,
    },
    PlayerInfo {
        name: String,
    },
    Votekick {
        name: String,
        #[arg(trailing_var_arg = true)]
        reason: Vec<String>,
    },
    SaveSkin,
    RestoreSkin,
    RainbowSpeed {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
    },
    RainbowBoth {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
    },
    RainbowSat {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        dummy: Option<i32>,
    },
    RainbowLht {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        dummy: Option<i32>,
    },
    RainbowBody {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        dummy: Option<i32>,
    },
    RainbowFeet {
        #[arg(allow_negative_numbers = true)]
        value: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        dummy: Option<i32>,
    },
    RainbowConfig,
    LoadRoster {
        #[arg(short, long)]
        path: String,
    },
    SaveRoster {
        #[arg(short, long)]
        path: String,
    },
    SaveConfig,
    Exit,
}

async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "rosterwatch".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        // The reason is accepted for command compatibility but not stored
        Some(Commands::AddTempWar { name, .. }) => {
            commands::add_temp(Category::War, name, state).await
        }
        Some(Commands::DelTempWar { name }) => {
            commands::del_temp(Category::War, name, state).await
        }
        Some(Commands::AddTempHelper { name, .. }) => {
            commands::add_temp(Category::Helper, name, state).await
        }
        Some(Commands::DelTempHelper { name }) => {
            commands::del_temp(Category::Helper, name, state).await
        }
        Some(Commands::AddTempMute { name, .. }) => {
            commands::add_temp(Category::Mute, name, state).await
        }
        Some(Commands::DelTempMute { name }) => {
            commands::del_temp(Category::Mute, name, state).await
        }
        Some(Commands::ListTemp) => commands::list_temp(state).await,
        Some(Commands::ClearTemp) => commands::clear_temp(state).await,
        Some(Commands::OnlineInfo { compact }) => commands::online_info(*compact, state).await,
        Some(Commands::PlayerInfo { name }) => commands::player_info(name, state).await,
        Some(Commands::Votekick { name, reason }) => {
            commands::votekick(name, &reason.join(" "), state).await
        }
        Some(Commands::SaveSkin) => commands::save_skin(state).await,
        Some(Commands::RestoreSkin) => commands::restore_skin(state).await,
        Some(Commands::RainbowSpeed { value }) => {
            commands::rainbow_param(RainbowParam::Speed, *value, None, state).await
        }
        Some(Commands::RainbowBoth { value }) => {
            commands::rainbow_param(RainbowParam::BothPlayers, *value, None, state).await
        }
        Some(Commands::RainbowSat { value, dummy }) => {
            commands::rainbow_param(RainbowParam::Saturation, *value, *dummy, state).await
        }
        Some(Commands::RainbowLht { value, dummy }) => {
            commands::rainbow_param(RainbowParam::Lightness, *value, *dummy, state).await
        }
        Some(Commands::RainbowBody { value, dummy }) => {
            commands::rainbow_param(RainbowParam::Body, *value, *dummy, state).await
        }
        Some(Commands::RainbowFeet { value, dummy }) => {
            commands::rainbow_param(RainbowParam::Feet, *value, *dummy, state).await
        }
        Some(Commands::RainbowConfig) => commands::rainbow_config(state).await,
        Some(Commands::LoadRoster { path }) => commands::load_roster(path, state).await,
        Some(Commands::SaveRoster { path }) => commands::save_roster(path, state).await,
        Some(Commands::SaveConfig) => commands::save_config(state).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
