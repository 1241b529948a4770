use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use serde_json::json;

use steam_gamepath::config::{self, GamePathConfig};
use steam_gamepath::paths::PATH_SETTINGS;
use steam_gamepath::platform::steam::{self, locator_for};
use steam_gamepath::{GamePathError, PlatformConfig};

#[derive(Parser, Debug)]
#[command(
    name = "steam-gamepath",
    version,
    about = "Locate an installed Steam game's directory from Steam's library manifests"
)]
struct Cli {
    /// Steam app id of the game to locate (defaults to the game in settings.json)
    app_id: Option<u32>,

    /// Use this game directory instead of asking Steam
    #[arg(long, value_name = "PATH", conflicts_with = "app_id")]
    manual: Option<PathBuf>,

    /// Steam install directory, skipping detection
    #[arg(long, value_name = "PATH")]
    steam_root: Option<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store the selected game and Steam directory in the settings file
    #[arg(long)]
    save_config: bool,

    /// Print every Steam library folder and the app ids it holds, then exit
    #[arg(long)]
    list_libraries: bool,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_FOUND: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;
const EXIT_AMBIGUOUS: u8 = 3;

/// What a successful run reported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Found,
    NotFound,
}

fn exit_status(result: &Result<Outcome, GamePathError>) -> u8 {
    match result {
        Ok(Outcome::Found) => EXIT_FOUND,
        Ok(Outcome::NotFound) => EXIT_NOT_FOUND,
        Err(GamePathError::AmbiguousInstallation { .. }) => EXIT_AMBIGUOUS,
        Err(_) => EXIT_ERROR,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.json {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let result = run(&cli);
    if let Err(e) = &result {
        report_error(&cli, e);
    }
    ExitCode::from(exit_status(&result))
}

fn run(cli: &Cli) -> Result<Outcome, GamePathError> {
    let config_path = cli.config.clone().unwrap_or_else(|| PATH_SETTINGS.clone());
    info!("loading config from {}", config_path.display());
    let mut cfg = config::load_cfg(&config_path)?;

    info!("parsing config");
    if let Some(root) = &cli.steam_root {
        cfg.steam_root = Some(root.clone());
    }
    if let Some(app_id) = cli.app_id {
        cfg.game = Some(PlatformConfig::Steam { steam_appid: app_id });
    } else if let Some(path) = &cli.manual {
        cfg.game = Some(PlatformConfig::Manual {
            path_gameroot: path.clone(),
        });
    }

    if cli.save_config {
        config::save_cfg(&config_path, &cfg)?;
        info!("settings saved to {}", config_path.display());
    }

    if cli.list_libraries {
        return list_libraries(cli, &cfg);
    }

    let game = selected_game(&cfg, &config_path)?;

    let platform = game.as_platform(cfg.steam_root.as_deref());
    info!(
        "finding game path ({} {})",
        platform.name(),
        platform.app_identifier().unwrap_or_default()
    );
    let found = platform.game_root_path()?;

    info!("checking game path");
    let outcome = match &found {
        Some(path) => {
            if cli.json {
                print_json(json!({
                    "status": "found",
                    "platform": platform.name(),
                    "app_id": platform.app_identifier(),
                    "path": path,
                }));
            } else {
                println!("{}", path.display());
            }
            Outcome::Found
        }
        None => {
            if cli.json {
                print_json(json!({
                    "status": "not_found",
                    "platform": platform.name(),
                    "app_id": platform.app_identifier(),
                }));
            } else {
                eprintln!("Game is not installed.");
            }
            Outcome::NotFound
        }
    };
    Ok(outcome)
}

fn selected_game<'a>(
    cfg: &'a GamePathConfig,
    config_path: &Path,
) -> Result<&'a PlatformConfig, GamePathError> {
    cfg.game.as_ref().ok_or_else(|| GamePathError::Config {
        path: config_path.to_path_buf(),
        message: "no game selected: pass an APP_ID or --manual, or set \"game\"".to_string(),
    })
}

fn list_libraries(cli: &Cli, cfg: &GamePathConfig) -> Result<Outcome, GamePathError> {
    let steam_root = locator_for(cfg.steam_root.as_deref()).locate_steam_root()?;
    let libraries = steam::list_libraries(&steam_root)?;

    if cli.json {
        print_json(json!({
            "status": "found",
            "steam_root": steam_root,
            "libraries": libraries,
        }));
        return Ok(Outcome::Found);
    }

    println!("Steam: {}", steam_root.display());
    for library in &libraries {
        let apps: Vec<&str> = library.apps.keys().map(String::as_str).collect();
        if library.label.is_empty() {
            println!("{}", library.path.display());
        } else {
            println!("{} ({})", library.path.display(), library.label);
        }
        if apps.is_empty() {
            println!("  apps: -");
        } else {
            println!("  apps: {}", apps.join(", "));
        }
    }
    Ok(Outcome::Found)
}

fn report_error(cli: &Cli, e: &GamePathError) {
    if cli.json {
        let mut out = json!({
            "status": "error",
            "kind": e.kind(),
            "message": e.to_string(),
        });
        if let GamePathError::AmbiguousInstallation { candidates, .. } = e {
            out["status"] = json!("ambiguous");
            out["candidates"] = json!(candidates);
        }
        print_json(out);
        return;
    }

    error!("{e}");
    if let GamePathError::AmbiguousInstallation { app_id, candidates } = e {
        eprintln!("App {app_id} appears in more than one Steam library:");
        for (i, candidate) in candidates.iter().enumerate() {
            eprintln!("  {}. '{}'", i + 1, candidate.display());
        }
        eprintln!("Cannot tell which copy to use. Pass the game directory with --manual instead.");
    }
}

fn print_json(value: serde_json::Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{text}"),
        Err(e) => error!("unable to format output: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_per_outcome() {
        assert_eq!(exit_status(&Ok(Outcome::Found)), 0);
        assert_eq!(exit_status(&Ok(Outcome::NotFound)), 2);

        let ambiguous = GamePathError::AmbiguousInstallation {
            app_id: 480,
            candidates: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(exit_status(&Err(ambiguous)), 3);

        let not_installed = GamePathError::PlatformNotFound {
            detail: "no Steam".to_string(),
        };
        assert_eq!(exit_status(&Err(not_installed)), 1);
    }

    #[test]
    fn test_missing_game_is_config_error() {
        let cfg = GamePathConfig::default();
        let err = selected_game(&cfg, Path::new("/tmp/settings.json")).unwrap_err();
        assert_eq!(err.kind(), "config");
        assert_eq!(exit_status(&Err(err)), 1);
    }

    #[test]
    fn test_selected_game_from_config() {
        let cfg = GamePathConfig {
            game: Some(PlatformConfig::Steam { steam_appid: 480 }),
            ..Default::default()
        };
        let game = selected_game(&cfg, Path::new("settings.json")).unwrap();
        assert!(matches!(game, PlatformConfig::Steam { steam_appid: 480 }));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
