use crate::{
    Res,
    mood::{Mood, TargetFeatures},
    spotify::MusicService,
    types::{ArtistRef, CreatePlaylistRequest},
};

use super::{recommend, selection::MAX_SEED_ARTISTS};

/// Outcome of one playlist-creation flow.
///
/// `Empty` is a valid, reportable result ("no tracks matched"), not an error;
/// the playlist exists but holds no tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistOutcome {
    Empty {
        playlist_id: String,
    },
    Populated {
        playlist_id: String,
        track_count: usize,
    },
}

/// Creates a mood playlist and fills it with recommended tracks.
///
/// The recommendation request is assembled first so a seedless flow is
/// rejected before any remote side effect. After that the playlist is created
/// before recommendations are fetched, so a created-but-empty playlist may
/// transiently exist; no rollback is attempted if a later step fails.
pub async fn create_and_populate<C: MusicService>(
    client: &C,
    user_id: &str,
    mood: Mood,
    seeds: &[ArtistRef],
    targets: &TargetFeatures,
    limit: u32,
) -> Res<PlaylistOutcome> {
    let request = recommend::build_request(seeds, targets, limit)?;

    // Resolve display names per seed id; names in the selection may be stale.
    let mut names = Vec::new();
    for seed in seeds.iter().take(MAX_SEED_ARTISTS) {
        let artist = client.artist(&seed.id).await?;
        names.push(artist.name);
    }

    let playlist = client
        .create_playlist(
            user_id,
            &CreatePlaylistRequest {
                name: format!("{} Mood Playlist", mood.title()),
                description: format!(
                    "A playlist for the {} mood featuring artists: {}",
                    mood,
                    names.join(", ")
                ),
                public: true,
                collaborative: false,
            },
        )
        .await?;

    let tracks = client.recommendations(&request).await?;
    if tracks.is_empty() {
        return Ok(PlaylistOutcome::Empty {
            playlist_id: playlist.id,
        });
    }

    let uris: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    client.add_items(&playlist.id, &uris).await?;

    Ok(PlaylistOutcome::Populated {
        playlist_id: playlist.id,
        track_count: uris.len(),
    })
}
