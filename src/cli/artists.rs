use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::SessionManager,
    spotify::{MusicService, WebClient, auth::AccountsEndpoint},
    types::ArtistTableRow,
    warning,
};

pub async fn search(query: String) {
    let sessions = match SessionManager::load(AccountsEndpoint).await {
        Ok(s) => s,
        Err(e) => {
            error!(
                "Failed to load session. Please run moodlist auth\n Error: {}",
                e
            );
        }
    };
    let client = WebClient::new(sessions);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = client.search_artist(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(Some(artist)) => {
            let table = Table::new(vec![ArtistTableRow {
                name: artist.name,
                id: artist.id,
            }]);
            println!("{}", table);
        }
        Ok(None) => info!("No artists found for '{}'.", query),
        Err(e) => warning!("Search failed: {}", e),
    }
}
