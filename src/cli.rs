//! Command dispatch for the pokearena binary.

use std::sync::Arc;

use crate::catalog::PokeApiClient;
use crate::config::AppConfig;
use crate::server;
use crate::service::PokemonService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Compare,
    Fetch,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("compare") => Some(Command::Compare),
        Some("fetch") => Some(Command::Fetch),
        _ => None,
    }
}

pub async fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve().await,
        Some(Command::Compare) => handle_compare(args).await,
        Some(Command::Fetch) => handle_fetch(args).await,
        None => {
            eprintln!("usage: pokearena <serve|compare|fetch>");
            2
        }
    }
}

fn build_service(config: &AppConfig) -> Result<Arc<PokemonService>, i32> {
    match PokeApiClient::new(config) {
        Ok(client) => Ok(Arc::new(PokemonService::new(Arc::new(client)))),
        Err(err) => {
            eprintln!("failed to build catalog client: {err}");
            Err(1)
        }
    }
}

async fn handle_serve() -> i32 {
    let config = AppConfig::from_env();
    let service = match build_service(&config) {
        Ok(service) => service,
        Err(code) => return code,
    };
    match server::run_server(&config, service).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

async fn handle_compare(args: &[String]) -> i32 {
    let (Some(first), Some(second)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: pokearena compare <pokemon1> <pokemon2>");
        return 2;
    };

    let config = AppConfig::from_env();
    let service = match build_service(&config) {
        Ok(service) => service,
        Err(code) => return code,
    };

    match service.compare(first, second).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize comparison result: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("compare failed: {err}");
            1
        }
    }
}

async fn handle_fetch(args: &[String]) -> i32 {
    let Some(name_or_id) = args.get(2) else {
        eprintln!("usage: pokearena fetch <name-or-id>");
        return 2;
    };

    let config = AppConfig::from_env();
    let service = match build_service(&config) {
        Ok(service) => service,
        Err(code) => return code,
    };

    match service.pokemon_detail(name_or_id).await {
        Ok(Some(detail)) => match serde_json::to_string_pretty(&detail) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize pokemon detail: {err}");
                1
            }
        },
        Ok(None) => {
            eprintln!("pokemon '{name_or_id}' not found");
            1
        }
        Err(err) => {
            eprintln!("fetch failed: {err}");
            1
        }
    }
}
