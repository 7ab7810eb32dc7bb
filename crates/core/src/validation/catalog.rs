//! Static rule registration table: one rule set per request variant.
//!
//! Every variant has a named field here, so adding a request variant without
//! registering rules for it does not compile. Empty rule sets are caught when
//! the [`Validator`](super::validator::Validator) is built.

use crate::request::*;

use super::rules::{RuleSet, MAX_BULK_IDS};

#[derive(Debug, Default)]
pub struct RuleCatalog {
    pub comment_on_video: RuleSet<CommentOnVideoRequest>,
    pub get_user_comments: RuleSet<GetUserCommentsRequest>,
    pub get_video_comments: RuleSet<GetVideoCommentsRequest>,
    pub rate_video: RuleSet<RateVideoRequest>,
    pub get_rating: RuleSet<GetRatingRequest>,
    pub get_user_rating: RuleSet<GetUserRatingRequest>,
    pub search_videos: RuleSet<SearchVideosRequest>,
    pub get_query_suggestions: RuleSet<GetQuerySuggestionsRequest>,
    pub record_playback_started: RuleSet<RecordPlaybackStartedRequest>,
    pub get_number_of_plays: RuleSet<GetNumberOfPlaysRequest>,
    pub get_related_videos: RuleSet<GetRelatedVideosRequest>,
    pub create_user: RuleSet<CreateUserRequest>,
    pub verify_credentials: RuleSet<VerifyCredentialsRequest>,
    pub get_user_profile: RuleSet<GetUserProfileRequest>,
    pub submit_uploaded_video: RuleSet<SubmitUploadedVideoRequest>,
    pub submit_youtube_video: RuleSet<SubmitYouTubeVideoRequest>,
    pub get_video: RuleSet<GetVideoRequest>,
    pub get_video_previews: RuleSet<GetVideoPreviewsRequest>,
    pub get_latest_video_previews: RuleSet<GetLatestVideoPreviewsRequest>,
    pub get_user_video_previews: RuleSet<GetUserVideoPreviewsRequest>,
}

impl RuleCatalog {
    /// The rules the service ships with.
    pub fn standard() -> Self {
        Self {
            comment_on_video: RuleSet::<CommentOnVideoRequest>::new()
                .required("user id", |r| r.user_id.as_deref())
                .required("video id", |r| r.video_id.as_deref())
                .required("comment id", |r| r.comment_id.as_deref())
                .provided("comment", |r| r.comment.as_str()),
            get_user_comments: RuleSet::<GetUserCommentsRequest>::new()
                .required("user id", |r| r.user_id.as_deref())
                .positive("page size", |r| r.page_size),
            get_video_comments: RuleSet::<GetVideoCommentsRequest>::new()
                .required("video id", |r| r.video_id.as_deref())
                .positive("page size", |r| r.page_size),
            rate_video: RuleSet::<RateVideoRequest>::new()
                .required("video id", |r| r.video_id.as_deref())
                .required("user id", |r| r.user_id.as_deref()),
            get_rating: RuleSet::<GetRatingRequest>::new()
                .required("video id", |r| r.video_id.as_deref()),
            get_user_rating: RuleSet::<GetUserRatingRequest>::new()
                .required("video id", |r| r.video_id.as_deref())
                .required("user id", |r| r.user_id.as_deref()),
            search_videos: RuleSet::<SearchVideosRequest>::new()
                .provided("query string", |r| r.query.as_str())
                .positive("page size", |r| r.page_size),
            get_query_suggestions: RuleSet::<GetQuerySuggestionsRequest>::new()
                .provided("query string", |r| r.query.as_str())
                .positive("page size", |r| r.page_size),
            record_playback_started: RuleSet::<RecordPlaybackStartedRequest>::new()
                .required("video id", |r| r.video_id.as_deref()),
            // Unlike the other bulk lookups, an empty batch is rejected here.
            get_number_of_plays: RuleSet::<GetNumberOfPlaysRequest>::new()
                .non_empty("video ids", |r| r.video_ids.len())
                .at_most("video ids", MAX_BULK_IDS, |r| r.video_ids.len())
                .each_present("video ids", |r| r.video_ids.as_slice()),
            get_related_videos: RuleSet::<GetRelatedVideosRequest>::new()
                .required("video id", |r| r.video_id.as_deref()),
            create_user: RuleSet::<CreateUserRequest>::new()
                .required("user id", |r| r.user_id.as_deref())
                .provided("password", |r| r.password.as_str())
                .provided("email", |r| r.email.as_str()),
            verify_credentials: RuleSet::<VerifyCredentialsRequest>::new()
                .provided("email", |r| r.email.as_str())
                .provided("password", |r| r.password.as_str()),
            get_user_profile: RuleSet::<GetUserProfileRequest>::new()
                .at_most("user ids", MAX_BULK_IDS, |r| r.user_ids.len())
                .each_present("user ids", |r| r.user_ids.as_slice()),
            submit_uploaded_video: RuleSet::<SubmitUploadedVideoRequest>::new()
                .required("video id", |r| r.video_id.as_deref())
                .required("user id", |r| r.user_id.as_deref())
                .provided("video name", |r| r.name.as_str())
                .provided("video description", |r| r.description.as_str())
                .non_empty("video tags", |r| r.tags.len())
                .provided("video upload url", |r| r.upload_url.as_str()),
            submit_youtube_video: RuleSet::<SubmitYouTubeVideoRequest>::new()
                .required("video id", |r| r.video_id.as_deref())
                .required("user id", |r| r.user_id.as_deref())
                .provided("video name", |r| r.name.as_str())
                .provided("video description", |r| r.description.as_str())
                .provided("youtube video id", |r| r.you_tube_video_id.as_str()),
            get_video: RuleSet::<GetVideoRequest>::new()
                .required("video id", |r| r.video_id.as_deref()),
            get_video_previews: RuleSet::<GetVideoPreviewsRequest>::new()
                .at_most("video ids", MAX_BULK_IDS, |r| r.video_ids.len())
                .each_present("video ids", |r| r.video_ids.as_slice()),
            get_latest_video_previews: RuleSet::<GetLatestVideoPreviewsRequest>::new()
                .positive("page size", |r| r.page_size),
            get_user_video_previews: RuleSet::<GetUserVideoPreviewsRequest>::new()
                .required("user id", |r| r.user_id.as_deref())
                .positive("page size", |r| r.page_size),
        }
    }

    /// Number of rules registered per variant, in [`RequestKind::ALL`] order.
    pub fn coverage(&self) -> [(RequestKind, usize); 20] {
        [
            (self.comment_on_video.kind(), self.comment_on_video.len()),
            (self.get_user_comments.kind(), self.get_user_comments.len()),
            (self.get_video_comments.kind(), self.get_video_comments.len()),
            (self.rate_video.kind(), self.rate_video.len()),
            (self.get_rating.kind(), self.get_rating.len()),
            (self.get_user_rating.kind(), self.get_user_rating.len()),
            (self.search_videos.kind(), self.search_videos.len()),
            (self.get_query_suggestions.kind(), self.get_query_suggestions.len()),
            (self.record_playback_started.kind(), self.record_playback_started.len()),
            (self.get_number_of_plays.kind(), self.get_number_of_plays.len()),
            (self.get_related_videos.kind(), self.get_related_videos.len()),
            (self.create_user.kind(), self.create_user.len()),
            (self.verify_credentials.kind(), self.verify_credentials.len()),
            (self.get_user_profile.kind(), self.get_user_profile.len()),
            (self.submit_uploaded_video.kind(), self.submit_uploaded_video.len()),
            (self.submit_youtube_video.kind(), self.submit_youtube_video.len()),
            (self.get_video.kind(), self.get_video.len()),
            (self.get_video_previews.kind(), self.get_video_previews.len()),
            (self.get_latest_video_previews.kind(), self.get_latest_video_previews.len()),
            (self.get_user_video_previews.kind(), self.get_user_video_previews.len()),
        ]
    }
}
