// SPDX-License-Identifier: MIT

//! Static per-service lookup tables: icons, filter labels, import hints,
//! cache lifetimes and the experimental flag.

use std::time::Duration;

use crate::services::registry::ServiceId;

/// Raw resource id reported for services without import support.
pub const NOT_SUPPORTED: i32 = -1;

/// Placeholder artwork shown for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    YouTube,
    Cloud,
    Gadse,
    PeerTube,
    Bandcamp,
    NicoNico,
    Circle,
}

impl Icon {
    /// Name of the drawable backing this icon.
    pub fn resource_name(self) -> &'static str {
        match self {
            Icon::YouTube => "place_holder_youtube",
            Icon::Cloud => "place_holder_cloud",
            Icon::Gadse => "place_holder_gadse",
            Icon::PeerTube => "place_holder_peertube",
            Icon::Bandcamp => "place_holder_bandcamp",
            Icon::NicoNico => "place_holder_niconico",
            Icon::Circle => "place_holder_circle",
        }
    }
}

/// Localizable strings referenced by the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StringRes {
    Search = 1,
    All,
    Videos,
    Channels,
    Playlists,
    Tracks,
    Users,
    Conferences,
    Events,
    Songs,
    Albums,
    Artists,
    Lives,
    Animes,
    MoviesAndTv,
    TagsOnly,
    SortBy,
    SortOrder,
    Features,
    SortPopular,
    SortView,
    SortBookmark,
    SortLikes,
    SortComments,
    SortBulletComments,
    SortLength,
    SortPublishTime,
    SortLastCommentTime,
    SortVideoCount,
    SortOverall,
    SortRelevance,
    SortRating,
    SortAscending,
    ImportYoutubeInstructions,
    ImportSoundcloudInstructions,
    ImportSoundcloudInstructionsHint,
}

impl StringRes {
    /// Stable numeric id of the resource.
    pub fn resource_id(self) -> i32 {
        self as i32
    }

    /// Collapses an optional resource into its id, or [`NOT_SUPPORTED`].
    pub fn id_or_unsupported(res: Option<StringRes>) -> i32 {
        res.map_or(NOT_SUPPORTED, StringRes::resource_id)
    }
}

/// Resolves string resources for the current locale.
pub trait Localizer {
    fn get_string(&self, res: StringRes) -> String;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn get_string(&self, res: StringRes) -> String {
        let s = match res {
            StringRes::Search => "Search",
            StringRes::All => "All",
            StringRes::Videos => "Videos",
            StringRes::Channels => "Channels",
            StringRes::Playlists => "Playlists",
            StringRes::Tracks => "Tracks",
            StringRes::Users => "Users",
            StringRes::Conferences => "Conferences",
            StringRes::Events => "Events",
            StringRes::Songs => "Songs",
            StringRes::Albums => "Albums",
            StringRes::Artists => "Artists",
            StringRes::Lives => "Lives",
            StringRes::Animes => "Animes",
            StringRes::MoviesAndTv => "Movies & TV",
            StringRes::TagsOnly => "Tags only",
            StringRes::SortBy => "Sort by",
            StringRes::SortOrder => "Sort order",
            StringRes::Features => "Features",
            StringRes::SortPopular => "Popular",
            StringRes::SortView => "Most viewed",
            StringRes::SortBookmark => "Most bookmarked",
            StringRes::SortLikes => "Most liked",
            StringRes::SortComments => "Most comments",
            StringRes::SortBulletComments => "Most bullet comments",
            StringRes::SortLength => "Length",
            StringRes::SortPublishTime => "Publish time",
            StringRes::SortLastCommentTime => "Last comment time",
            StringRes::SortVideoCount => "Video count",
            StringRes::SortOverall => "Overall",
            StringRes::SortRelevance => "Relevance",
            StringRes::SortRating => "Rating",
            StringRes::SortAscending => "Ascending",
            StringRes::ImportYoutubeInstructions => {
                "Import YouTube subscriptions from Google takeout: open takeout.google.com, \
                 export \"YouTube and YouTube Music\" subscriptions, then select the \
                 downloaded subscriptions file."
            }
            StringRes::ImportSoundcloudInstructions => {
                "Import a SoundCloud profile by typing either the URL or your ID."
            }
            StringRes::ImportSoundcloudInstructionsHint => "yourid, soundcloud.com/yourid",
        };
        s.to_string()
    }
}

pub fn icon(id: ServiceId) -> Icon {
    match id.0 {
        0 => Icon::YouTube,
        1 => Icon::Cloud,
        2 => Icon::Gadse,
        3 => Icon::PeerTube,
        4 => Icon::Bandcamp,
        5 | 6 => Icon::NicoNico,
        _ => Icon::Circle,
    }
}

/// Maps a content or sort filter key to its string resource.
pub fn filter_label(filter: &str) -> Option<StringRes> {
    let res = match filter {
        "search" => StringRes::Search,
        "all" => StringRes::All,
        "videos" | "sepia_videos" | "music_videos" => StringRes::Videos,
        "channels" => StringRes::Channels,
        "playlists" | "music_playlists" => StringRes::Playlists,
        "tracks" => StringRes::Tracks,
        "users" => StringRes::Users,
        "conferences" => StringRes::Conferences,
        "events" => StringRes::Events,
        "music_songs" => StringRes::Songs,
        "music_albums" => StringRes::Albums,
        "music_artists" => StringRes::Artists,
        "lives" => StringRes::Lives,
        "animes" => StringRes::Animes,
        "movies_and_tv" => StringRes::MoviesAndTv,
        "tags_only" => StringRes::TagsOnly,
        "sortby" => StringRes::SortBy,
        "sortorder" => StringRes::SortOrder,
        "features" => StringRes::Features,
        "sort_popular" => StringRes::SortPopular,
        "sort_view" => StringRes::SortView,
        "sort_bookmark" => StringRes::SortBookmark,
        "sort_likes" => StringRes::SortLikes,
        "sort_comments" => StringRes::SortComments,
        "sort_bullet_comments" => StringRes::SortBulletComments,
        "sort_length" => StringRes::SortLength,
        "sort_publish_time" => StringRes::SortPublishTime,
        "sort_last_comment_time" => StringRes::SortLastCommentTime,
        "sort_video_count" => StringRes::SortVideoCount,
        "sort_overall" => StringRes::SortOverall,
        "sort_relevance" => StringRes::SortRelevance,
        "sort_rating" => StringRes::SortRating,
        "sort_ascending" => StringRes::SortAscending,
        _ => return None,
    };
    Some(res)
}

/// Localized label for a filter key; unknown keys are returned unchanged.
pub fn translated_filter_label(filter: &str, localizer: &dyn Localizer) -> String {
    match filter_label(filter) {
        Some(res) => localizer.get_string(res),
        None => filter.to_string(),
    }
}

/// Instructions for importing subscriptions, if the service supports it.
pub fn import_instructions(id: ServiceId) -> Option<StringRes> {
    match id {
        ServiceId::YOUTUBE => Some(StringRes::ImportYoutubeInstructions),
        ServiceId::SOUNDCLOUD => Some(StringRes::ImportSoundcloudInstructions),
        _ => None,
    }
}

/// Input hint for services that import from a channel URL.
pub fn import_instructions_hint(id: ServiceId) -> Option<StringRes> {
    match id {
        ServiceId::SOUNDCLOUD => Some(StringRes::ImportSoundcloudInstructionsHint),
        _ => None,
    }
}

/// How long extracted data from a service stays fresh.
pub fn cache_expiration(id: ServiceId) -> Duration {
    match id {
        ServiceId::SOUNDCLOUD => Duration::from_secs(5 * 60),
        ServiceId::NICONICO => Duration::from_secs(2 * 60),
        _ => Duration::from_secs(60 * 60),
    }
}

pub fn cache_expiration_millis(id: ServiceId) -> u64 {
    u64::try_from(cache_expiration(id).as_millis()).unwrap_or(u64::MAX)
}

/// Whether a service is still considered experimental.
pub fn is_experimental(name: &str) -> bool {
    !matches!(name, "YouTube" | "BiliBili" | "NicoNico")
}
