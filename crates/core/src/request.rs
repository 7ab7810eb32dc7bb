//! Typed request model for every RPC endpoint the service exposes.
//!
//! Requests arrive already decoded from the wire and are read-only from here
//! on. Identifiers are optional because callers may omit them entirely; free
//! text, page sizes and lists fall back to their empty values when omitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Placeholder written instead of credential values when a request is rendered.
pub const REDACTED: &str = "<redacted>";

fn redact<S: Serializer>(_value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentOnVideoRequest {
    pub user_id: Option<String>,
    pub video_id: Option<String>,
    pub comment_id: Option<String>,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserCommentsRequest {
    pub user_id: Option<String>,
    pub page_size: i32,
    pub starting_comment_id: Option<String>,
    pub paging_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVideoCommentsRequest {
    pub video_id: Option<String>,
    pub page_size: i32,
    pub starting_comment_id: Option<String>,
    pub paging_state: Option<String>,
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateVideoRequest {
    pub video_id: Option<String>,
    pub user_id: Option<String>,
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRatingRequest {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserRatingRequest {
    pub video_id: Option<String>,
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchVideosRequest {
    pub query: String,
    pub page_size: i32,
    pub paging_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetQuerySuggestionsRequest {
    pub query: String,
    pub page_size: i32,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPlaybackStartedRequest {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetNumberOfPlaysRequest {
    pub video_ids: Vec<Option<String>>,
}

// ---------------------------------------------------------------------------
// Suggested videos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRelatedVideosRequest {
    pub video_id: Option<String>,
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyCredentialsRequest {
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserProfileRequest {
    pub user_ids: Vec<Option<String>>,
}

// ---------------------------------------------------------------------------
// Video catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitUploadedVideoRequest {
    pub video_id: Option<String>,
    pub user_id: Option<String>,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub upload_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitYouTubeVideoRequest {
    pub video_id: Option<String>,
    pub user_id: Option<String>,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub you_tube_video_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVideoRequest {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVideoPreviewsRequest {
    pub video_ids: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetLatestVideoPreviewsRequest {
    pub page_size: i32,
    pub starting_video_id: Option<String>,
    pub paging_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserVideoPreviewsRequest {
    pub user_id: Option<String>,
    pub page_size: i32,
    pub starting_video_id: Option<String>,
    pub paging_state: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// A decoded request for one of the service endpoints.
///
/// On the wire this is `{"method": "CreateUser", "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    CommentOnVideo(CommentOnVideoRequest),
    GetUserComments(GetUserCommentsRequest),
    GetVideoComments(GetVideoCommentsRequest),
    RateVideo(RateVideoRequest),
    GetRating(GetRatingRequest),
    GetUserRating(GetUserRatingRequest),
    SearchVideos(SearchVideosRequest),
    GetQuerySuggestions(GetQuerySuggestionsRequest),
    RecordPlaybackStarted(RecordPlaybackStartedRequest),
    GetNumberOfPlays(GetNumberOfPlaysRequest),
    GetRelatedVideos(GetRelatedVideosRequest),
    CreateUser(CreateUserRequest),
    VerifyCredentials(VerifyCredentialsRequest),
    GetUserProfile(GetUserProfileRequest),
    SubmitUploadedVideo(SubmitUploadedVideoRequest),
    SubmitYouTubeVideo(SubmitYouTubeVideoRequest),
    GetVideo(GetVideoRequest),
    GetVideoPreviews(GetVideoPreviewsRequest),
    GetLatestVideoPreviews(GetLatestVideoPreviewsRequest),
    GetUserVideoPreviews(GetUserVideoPreviewsRequest),
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::CommentOnVideo(_) => RequestKind::CommentOnVideo,
            Request::GetUserComments(_) => RequestKind::GetUserComments,
            Request::GetVideoComments(_) => RequestKind::GetVideoComments,
            Request::RateVideo(_) => RequestKind::RateVideo,
            Request::GetRating(_) => RequestKind::GetRating,
            Request::GetUserRating(_) => RequestKind::GetUserRating,
            Request::SearchVideos(_) => RequestKind::SearchVideos,
            Request::GetQuerySuggestions(_) => RequestKind::GetQuerySuggestions,
            Request::RecordPlaybackStarted(_) => RequestKind::RecordPlaybackStarted,
            Request::GetNumberOfPlays(_) => RequestKind::GetNumberOfPlays,
            Request::GetRelatedVideos(_) => RequestKind::GetRelatedVideos,
            Request::CreateUser(_) => RequestKind::CreateUser,
            Request::VerifyCredentials(_) => RequestKind::VerifyCredentials,
            Request::GetUserProfile(_) => RequestKind::GetUserProfile,
            Request::SubmitUploadedVideo(_) => RequestKind::SubmitUploadedVideo,
            Request::SubmitYouTubeVideo(_) => RequestKind::SubmitYouTubeVideo,
            Request::GetVideo(_) => RequestKind::GetVideo,
            Request::GetVideoPreviews(_) => RequestKind::GetVideoPreviews,
            Request::GetLatestVideoPreviews(_) => RequestKind::GetLatestVideoPreviews,
            Request::GetUserVideoPreviews(_) => RequestKind::GetUserVideoPreviews,
        }
    }
}

/// Renders the wire form of the request, with credentials redacted.
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str(self.kind().method()),
        }
    }
}

// ---------------------------------------------------------------------------
// Variant tags
// ---------------------------------------------------------------------------

/// Fieldless tag for each [`Request`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    CommentOnVideo,
    GetUserComments,
    GetVideoComments,
    RateVideo,
    GetRating,
    GetUserRating,
    SearchVideos,
    GetQuerySuggestions,
    RecordPlaybackStarted,
    GetNumberOfPlays,
    GetRelatedVideos,
    CreateUser,
    VerifyCredentials,
    GetUserProfile,
    SubmitUploadedVideo,
    SubmitYouTubeVideo,
    GetVideo,
    GetVideoPreviews,
    GetLatestVideoPreviews,
    GetUserVideoPreviews,
}

impl RequestKind {
    /// Every request kind, in declaration order.
    pub const ALL: [RequestKind; 20] = [
        RequestKind::CommentOnVideo,
        RequestKind::GetUserComments,
        RequestKind::GetVideoComments,
        RequestKind::RateVideo,
        RequestKind::GetRating,
        RequestKind::GetUserRating,
        RequestKind::SearchVideos,
        RequestKind::GetQuerySuggestions,
        RequestKind::RecordPlaybackStarted,
        RequestKind::GetNumberOfPlays,
        RequestKind::GetRelatedVideos,
        RequestKind::CreateUser,
        RequestKind::VerifyCredentials,
        RequestKind::GetUserProfile,
        RequestKind::SubmitUploadedVideo,
        RequestKind::SubmitYouTubeVideo,
        RequestKind::GetVideo,
        RequestKind::GetVideoPreviews,
        RequestKind::GetLatestVideoPreviews,
        RequestKind::GetUserVideoPreviews,
    ];

    /// Method name as it appears in the `method` field on the wire.
    pub fn method(self) -> &'static str {
        match self {
            RequestKind::CommentOnVideo => "CommentOnVideo",
            RequestKind::GetUserComments => "GetUserComments",
            RequestKind::GetVideoComments => "GetVideoComments",
            RequestKind::RateVideo => "RateVideo",
            RequestKind::GetRating => "GetRating",
            RequestKind::GetUserRating => "GetUserRating",
            RequestKind::SearchVideos => "SearchVideos",
            RequestKind::GetQuerySuggestions => "GetQuerySuggestions",
            RequestKind::RecordPlaybackStarted => "RecordPlaybackStarted",
            RequestKind::GetNumberOfPlays => "GetNumberOfPlays",
            RequestKind::GetRelatedVideos => "GetRelatedVideos",
            RequestKind::CreateUser => "CreateUser",
            RequestKind::VerifyCredentials => "VerifyCredentials",
            RequestKind::GetUserProfile => "GetUserProfile",
            RequestKind::SubmitUploadedVideo => "SubmitUploadedVideo",
            RequestKind::SubmitYouTubeVideo => "SubmitYouTubeVideo",
            RequestKind::GetVideo => "GetVideo",
            RequestKind::GetVideoPreviews => "GetVideoPreviews",
            RequestKind::GetLatestVideoPreviews => "GetLatestVideoPreviews",
            RequestKind::GetUserVideoPreviews => "GetUserVideoPreviews",
        }
    }

    /// Human-readable label used at the end of every failure message.
    pub fn label(self) -> &'static str {
        match self {
            RequestKind::CommentOnVideo => "comment on video request",
            RequestKind::GetUserComments => "get user comments request",
            RequestKind::GetVideoComments => "get video comments request",
            RequestKind::RateVideo => "rate video request",
            RequestKind::GetRating => "get video rating request",
            RequestKind::GetUserRating => "get user rating request",
            RequestKind::SearchVideos => "search videos request",
            RequestKind::GetQuerySuggestions => "get query suggestions request",
            RequestKind::RecordPlaybackStarted => "record playback started request",
            RequestKind::GetNumberOfPlays => "get number of plays request",
            RequestKind::GetRelatedVideos => "get related videos request",
            RequestKind::CreateUser => "create user request",
            RequestKind::VerifyCredentials => "verify credentials request",
            RequestKind::GetUserProfile => "get user profile request",
            RequestKind::SubmitUploadedVideo => "submit uploaded video request",
            RequestKind::SubmitYouTubeVideo => "submit youtube video request",
            RequestKind::GetVideo => "get video request",
            RequestKind::GetVideoPreviews => "get video previews request",
            RequestKind::GetLatestVideoPreviews => "get latest video previews request",
            RequestKind::GetUserVideoPreviews => "get user video previews request",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

impl FromStr for RequestKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| kind.method() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown method '{s}'")))
    }
}

/// Binds a request payload type to its variant tag.
pub trait Endpoint: Send + Sync + 'static {
    const KIND: RequestKind;
}

macro_rules! endpoint {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Endpoint for $ty {
                const KIND: RequestKind = RequestKind::$kind;
            }
        )*
    };
}

endpoint! {
    CommentOnVideoRequest => CommentOnVideo,
    GetUserCommentsRequest => GetUserComments,
    GetVideoCommentsRequest => GetVideoComments,
    RateVideoRequest => RateVideo,
    GetRatingRequest => GetRating,
    GetUserRatingRequest => GetUserRating,
    SearchVideosRequest => SearchVideos,
    GetQuerySuggestionsRequest => GetQuerySuggestions,
    RecordPlaybackStartedRequest => RecordPlaybackStarted,
    GetNumberOfPlaysRequest => GetNumberOfPlays,
    GetRelatedVideosRequest => GetRelatedVideos,
    CreateUserRequest => CreateUser,
    VerifyCredentialsRequest => VerifyCredentials,
    GetUserProfileRequest => GetUserProfile,
    SubmitUploadedVideoRequest => SubmitUploadedVideo,
    SubmitYouTubeVideoRequest => SubmitYouTubeVideo,
    GetVideoRequest => GetVideo,
    GetVideoPreviewsRequest => GetVideoPreviews,
    GetLatestVideoPreviewsRequest => GetLatestVideoPreviews,
    GetUserVideoPreviewsRequest => GetUserVideoPreviews,
}
