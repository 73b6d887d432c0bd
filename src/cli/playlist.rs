use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{self, PlaylistOutcome, SelectionSet, SessionManager},
    mood::{self, Mood},
    spotify::{MusicService, WebClient, auth::AccountsEndpoint},
    success, warning,
};

pub async fn playlist(mood: Mood, artist_queries: Vec<String>, limit: u32) {
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

    let user = match client.current_user().await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch user profile: {}", e),
    };
    info!(
        "Logged in as {}",
        user.display_name.clone().unwrap_or_else(|| user.id.clone())
    );

    let mut selection = SelectionSet::new();
    if artist_queries.is_empty() {
        accumulate_interactively(&client, &mut selection).await;
    } else {
        for query in &artist_queries {
            search_and_add(&client, &mut selection, query).await;
        }
    }

    if selection.is_empty() {
        warning!("No artists selected.");
        return;
    }

    // one sample stands for the whole creation attempt
    let mut rng = rand::rng();
    let targets = mood::sample(mood, &mut rng);

    let pb = spinner("Creating playlist...");
    let outcome = management::create_and_populate(
        &client,
        &user.id,
        mood,
        selection.artists(),
        &targets,
        limit,
    )
    .await;
    pb.finish_and_clear();

    match outcome {
        Ok(PlaylistOutcome::Populated {
            playlist_id,
            track_count,
        }) => {
            selection.clear();
            success!(
                "Playlist created with {} tracks! Playlist ID: {}",
                track_count,
                playlist_id
            );
        }
        Ok(PlaylistOutcome::Empty { playlist_id }) => {
            selection.clear();
            info!(
                "No tracks matched the {} mood criteria. Playlist {} was created empty.",
                mood, playlist_id
            );
        }
        Err(e) => warning!("Failed to create playlist: {}", e),
    }
}

async fn accumulate_interactively(client: &WebClient, selection: &mut SelectionSet) {
    loop {
        if selection.is_full() {
            info!(
                "Selection is full ({} artists).",
                management::MAX_SEED_ARTISTS
            );
            break;
        }

        let Some(query) = prompt_query() else {
            break;
        };
        search_and_add(client, selection, &query).await;
    }
}

async fn search_and_add(client: &WebClient, selection: &mut SelectionSet, query: &str) {
    let pb = spinner("Searching artists...");
    let result = client.search_artist(query).await;
    pb.finish_and_clear();

    match result {
        Ok(Some(artist)) => match selection.add(artist.clone()) {
            Ok(true) => success!("Added {} to the selection.", artist.name),
            Ok(false) => info!("{} is already selected.", artist.name),
            Err(e) => warning!("{}", e),
        },
        Ok(None) => info!("No artists found for '{}'.", query),
        Err(e) => warning!("Search failed: {}", e),
    }
}

fn prompt_query() -> Option<String> {
    use std::io::{self, Write};

    print!("Search for an artist (or type 'done' to finish): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return None;
    }

    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("done") {
        return None;
    }
    Some(line.to_string())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
