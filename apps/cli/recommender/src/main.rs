use recommender::controller::RecommendController;
use recommender::error::RecommenderError;
use recommender::logger::initialize as logger_initialize;

use client_core::RecommendClient;
use client_core::config::AppConfig;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::{Write, stdout};
use std::panic::Location;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};

const PROMPT: &str = "query> ";
const QUIT_COMMAND: &str = "quit";
const APP_DIR_NAME: &str = "recommender";

#[tokio::main]
async fn main() -> Result<(), RecommenderError> {
    dotenvy::dotenv().ok();

    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| RecommenderError::Recommender {
            message: String::from("Failed to resolve data directory"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    create_dir_all(&log_dir).map_err(|e| RecommenderError::Recommender {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger_initialize(&log_dir)?;

    info!("Assessment recommender starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| RecommenderError::Recommender {
            message: String::from("Failed to resolve config directory"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let config = AppConfig::load(&config_dir).map_err(|e| RecommenderError::Core {
        message: format!("Failed to load config: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let base_url = config.resolve_base_url();
    info!("Recommendation service: {base_url}");

    let client = RecommendClient::new(&base_url).map_err(|e| RecommenderError::Core {
        message: format!("Failed to construct client: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if client.check_health().await {
        info!("Recommendation service is healthy");
    } else {
        warn!("Recommendation service did not answer the health probe; queries may fail");
    }

    let mut controller = RecommendController::new(client, stdout(), config.service.top_k);
    let mut lines = BufReader::new(stdin()).lines();

    loop {
        print!("{PROMPT}");
        stdout().flush().map_err(|e| RecommenderError::Recommender {
            message: format!("Failed to flush prompt: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let line = lines.next_line().await.map_err(|e| RecommenderError::Recommender {
            message: format!("Failed to read input: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // EOF ends the session the same way `quit` does.
        let Some(line) = line else { break };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        controller
            .handle_query(&line)
            .await
            .map_err(|e| RecommenderError::Recommender {
                message: format!("Failed to write output: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    info!("Assessment recommender exiting");
    Ok(())
}
