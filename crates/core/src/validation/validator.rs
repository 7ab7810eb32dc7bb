//! Rule evaluator: pure logic, no side effects.

use crate::error::CoreError;
use crate::request::{Endpoint, Request};

use super::aggregator::ErrorAggregator;
use super::catalog::RuleCatalog;
use super::rules::{RuleSet, ValidationOutcome};

/// Holds the rule set of every request variant and evaluates requests
/// against them.
///
/// Built once at startup and shared read-only afterwards; each call to
/// [`Validator::validate`] works on its own aggregator.
#[derive(Debug)]
pub struct Validator {
    catalog: RuleCatalog,
}

impl Validator {
    /// Fails if any request variant ended up with an empty rule set.
    pub fn new(catalog: RuleCatalog) -> Result<Self, CoreError> {
        if let Some((kind, _)) = catalog.coverage().into_iter().find(|(_, count)| *count == 0) {
            return Err(CoreError::Registration { kind });
        }
        Ok(Self { catalog })
    }

    /// Evaluate every rule registered for the request's variant.
    ///
    /// Evaluation never stops early: all failures are reported, in
    /// registration order.
    pub fn validate(&self, request: &Request) -> ValidationOutcome {
        let mut aggregator = ErrorAggregator::new(request);
        let c = &self.catalog;

        match request {
            Request::CommentOnVideo(r) => evaluate(&c.comment_on_video, r, &mut aggregator),
            Request::GetUserComments(r) => evaluate(&c.get_user_comments, r, &mut aggregator),
            Request::GetVideoComments(r) => evaluate(&c.get_video_comments, r, &mut aggregator),
            Request::RateVideo(r) => evaluate(&c.rate_video, r, &mut aggregator),
            Request::GetRating(r) => evaluate(&c.get_rating, r, &mut aggregator),
            Request::GetUserRating(r) => evaluate(&c.get_user_rating, r, &mut aggregator),
            Request::SearchVideos(r) => evaluate(&c.search_videos, r, &mut aggregator),
            Request::GetQuerySuggestions(r) => {
                evaluate(&c.get_query_suggestions, r, &mut aggregator)
            }
            Request::RecordPlaybackStarted(r) => {
                evaluate(&c.record_playback_started, r, &mut aggregator)
            }
            Request::GetNumberOfPlays(r) => evaluate(&c.get_number_of_plays, r, &mut aggregator),
            Request::GetRelatedVideos(r) => evaluate(&c.get_related_videos, r, &mut aggregator),
            Request::CreateUser(r) => evaluate(&c.create_user, r, &mut aggregator),
            Request::VerifyCredentials(r) => evaluate(&c.verify_credentials, r, &mut aggregator),
            Request::GetUserProfile(r) => evaluate(&c.get_user_profile, r, &mut aggregator),
            Request::SubmitUploadedVideo(r) => {
                evaluate(&c.submit_uploaded_video, r, &mut aggregator)
            }
            Request::SubmitYouTubeVideo(r) => {
                evaluate(&c.submit_youtube_video, r, &mut aggregator)
            }
            Request::GetVideo(r) => evaluate(&c.get_video, r, &mut aggregator),
            Request::GetVideoPreviews(r) => evaluate(&c.get_video_previews, r, &mut aggregator),
            Request::GetLatestVideoPreviews(r) => {
                evaluate(&c.get_latest_video_previews, r, &mut aggregator)
            }
            Request::GetUserVideoPreviews(r) => {
                evaluate(&c.get_user_video_previews, r, &mut aggregator)
            }
        }

        aggregator.finish()
    }
}

fn evaluate<R: Endpoint>(rules: &RuleSet<R>, request: &R, aggregator: &mut ErrorAggregator<'_>) {
    let label = R::KIND.label();
    for rule in rules.rules() {
        if rule.fails(request) {
            aggregator.record(rule.field, rule.kind, rule.message(label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::*;
    use crate::validation::rules::ViolationKind;
    use assert_matches::assert_matches;

    fn id() -> Option<String> {
        Some(uuid::Uuid::new_v4().to_string())
    }

    fn ids(n: usize) -> Vec<Option<String>> {
        (0..n).map(|_| id()).collect()
    }

    fn validator() -> Validator {
        Validator::new(RuleCatalog::standard()).unwrap()
    }

    /// Failure lines only, without the header.
    fn failure_lines(outcome: &ValidationOutcome) -> Vec<&str> {
        outcome.description.lines().skip(1).collect()
    }

    /// A fully populated, valid request of the given kind.
    fn valid(kind: RequestKind) -> Request {
        match kind {
            RequestKind::CommentOnVideo => Request::CommentOnVideo(CommentOnVideoRequest {
                user_id: id(),
                video_id: id(),
                comment_id: id(),
                comment: "Great video".into(),
            }),
            RequestKind::GetUserComments => Request::GetUserComments(GetUserCommentsRequest {
                user_id: id(),
                page_size: 10,
                ..Default::default()
            }),
            RequestKind::GetVideoComments => Request::GetVideoComments(GetVideoCommentsRequest {
                video_id: id(),
                page_size: 10,
                ..Default::default()
            }),
            RequestKind::RateVideo => Request::RateVideo(RateVideoRequest {
                video_id: id(),
                user_id: id(),
                rating: 5,
            }),
            RequestKind::GetRating => Request::GetRating(GetRatingRequest { video_id: id() }),
            RequestKind::GetUserRating => Request::GetUserRating(GetUserRatingRequest {
                video_id: id(),
                user_id: id(),
            }),
            RequestKind::SearchVideos => Request::SearchVideos(SearchVideosRequest {
                query: "cassandra".into(),
                page_size: 10,
                paging_state: None,
            }),
            RequestKind::GetQuerySuggestions => {
                Request::GetQuerySuggestions(GetQuerySuggestionsRequest {
                    query: "cass".into(),
                    page_size: 5,
                })
            }
            RequestKind::RecordPlaybackStarted => {
                Request::RecordPlaybackStarted(RecordPlaybackStartedRequest { video_id: id() })
            }
            RequestKind::GetNumberOfPlays => {
                Request::GetNumberOfPlays(GetNumberOfPlaysRequest { video_ids: ids(3) })
            }
            RequestKind::GetRelatedVideos => {
                Request::GetRelatedVideos(GetRelatedVideosRequest { video_id: id() })
            }
            RequestKind::CreateUser => Request::CreateUser(CreateUserRequest {
                user_id: id(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@example.com".into(),
                password: "s3cret".into(),
            }),
            RequestKind::VerifyCredentials => Request::VerifyCredentials(VerifyCredentialsRequest {
                email: "jane@example.com".into(),
                password: "s3cret".into(),
            }),
            RequestKind::GetUserProfile => {
                Request::GetUserProfile(GetUserProfileRequest { user_ids: ids(2) })
            }
            RequestKind::SubmitUploadedVideo => {
                Request::SubmitUploadedVideo(SubmitUploadedVideoRequest {
                    video_id: id(),
                    user_id: id(),
                    name: "Intro".into(),
                    description: "An introduction".into(),
                    tags: vec!["intro".into()],
                    upload_url: "https://uploads.example.com/intro.mp4".into(),
                })
            }
            RequestKind::SubmitYouTubeVideo => {
                Request::SubmitYouTubeVideo(SubmitYouTubeVideoRequest {
                    video_id: id(),
                    user_id: id(),
                    name: "Intro".into(),
                    description: "An introduction".into(),
                    tags: Vec::new(),
                    you_tube_video_id: "dQw4w9WgXcQ".into(),
                })
            }
            RequestKind::GetVideo => Request::GetVideo(GetVideoRequest { video_id: id() }),
            RequestKind::GetVideoPreviews => {
                Request::GetVideoPreviews(GetVideoPreviewsRequest { video_ids: ids(2) })
            }
            RequestKind::GetLatestVideoPreviews => {
                Request::GetLatestVideoPreviews(GetLatestVideoPreviewsRequest {
                    page_size: 10,
                    ..Default::default()
                })
            }
            RequestKind::GetUserVideoPreviews => {
                Request::GetUserVideoPreviews(GetUserVideoPreviewsRequest {
                    user_id: id(),
                    page_size: 10,
                    ..Default::default()
                })
            }
        }
    }

    #[test]
    fn valid_requests_pass_for_every_kind() {
        let validator = validator();
        for kind in RequestKind::ALL {
            let outcome = validator.validate(&valid(kind));
            assert!(outcome.valid, "{kind}: {}", outcome.description);
            assert!(outcome.description.is_empty());
        }
    }

    #[test]
    fn empty_catalog_fails_registration() {
        assert_matches!(
            Validator::new(RuleCatalog::default()),
            Err(CoreError::Registration { kind: RequestKind::CommentOnVideo })
        );
    }

    #[test]
    fn unregistered_kind_is_named() {
        let mut catalog = RuleCatalog::standard();
        catalog.get_video = RuleSet::new();
        assert_matches!(
            Validator::new(catalog),
            Err(CoreError::Registration { kind: RequestKind::GetVideo })
        );
    }

    #[test]
    fn omitted_identifier_is_reported_once() {
        let request = Request::RateVideo(RateVideoRequest {
            video_id: None,
            user_id: id(),
            rating: 3,
        });
        let outcome = validator().validate(&request);
        assert!(!outcome.valid);
        let lines = failure_lines(&outcome);
        assert_eq!(lines, ["\t\tvideo id should be provided for rate video request"]);
        assert_eq!(outcome.description.matches("video id").count(), 1);
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let mut request = CreateUserRequest {
            user_id: Some("   ".into()),
            email: "jane@example.com".into(),
            password: "\t".into(),
            ..Default::default()
        };
        let outcome = validator().validate(&Request::CreateUser(request.clone()));
        assert_eq!(
            failure_lines(&outcome),
            [
                "\t\tuser id should be provided for create user request",
                "\t\tpassword should be provided for create user request",
            ]
        );

        request.user_id = id();
        request.password = "pw".into();
        assert!(validator().validate(&Request::CreateUser(request)).valid);
    }

    #[test]
    fn evaluation_is_not_short_circuited() {
        let request = Request::SubmitUploadedVideo(SubmitUploadedVideoRequest::default());
        let outcome = validator().validate(&request);
        let fields: Vec<_> = outcome.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "video id",
                "user id",
                "video name",
                "video description",
                "video tags",
                "video upload url",
            ]
        );
        assert_eq!(failure_lines(&outcome).len(), 6);
        assert_eq!(outcome.violations[4].kind, ViolationKind::CollectionEmpty);
    }

    #[test]
    fn header_names_the_request() {
        let request = Request::GetVideo(GetVideoRequest::default());
        let outcome = validator().validate(&request);
        let header = outcome.description.lines().next().unwrap();
        assert_eq!(header, format!("Validation error for '{request}' : "));
        assert!(header.contains("GetVideo"));
    }

    #[test]
    fn page_size_boundary() {
        let validator = validator();
        for (page_size, valid) in [(-1, false), (0, false), (1, true)] {
            let request = Request::SearchVideos(SearchVideosRequest {
                query: "q".into(),
                page_size,
                paging_state: None,
            });
            let outcome = validator.validate(&request);
            assert_eq!(outcome.valid, valid, "page_size = {page_size}");
            if !valid {
                assert_eq!(
                    failure_lines(&outcome),
                    ["\t\tpage size should be strictly positive for search videos request"]
                );
            }
        }
    }

    #[test]
    fn bulk_lookup_cap_is_twenty() {
        let validator = validator();

        let at_cap = Request::GetVideoPreviews(GetVideoPreviewsRequest { video_ids: ids(20) });
        assert!(validator.validate(&at_cap).valid);

        let over_cap = Request::GetVideoPreviews(GetVideoPreviewsRequest { video_ids: ids(21) });
        let outcome = validator.validate(&over_cap);
        assert_eq!(
            failure_lines(&outcome),
            ["\t\tcannot get more than 20 video ids at once for get video previews request"]
        );
        assert_eq!(
            outcome.violations[0].kind,
            ViolationKind::CollectionTooLarge { max: 20 }
        );

        let over_cap = Request::GetUserProfile(GetUserProfileRequest { user_ids: ids(21) });
        assert!(!validator.validate(&over_cap).valid);
    }

    #[test]
    fn blank_element_in_bulk_lookup_fails() {
        let mut video_ids = ids(5);
        video_ids[2] = Some(String::new());
        let request = Request::GetNumberOfPlays(GetNumberOfPlaysRequest { video_ids });
        let outcome = validator().validate(&request);
        assert_eq!(
            failure_lines(&outcome),
            ["\t\tprovided video ids values cannot be null or blank for get number of plays request"]
        );
        assert_eq!(outcome.violations[0].kind, ViolationKind::CollectionElementInvalid);
    }

    #[test]
    fn oversized_batch_with_null_reports_both() {
        let mut user_ids = ids(25);
        user_ids[0] = None;
        let request = Request::GetUserProfile(GetUserProfileRequest { user_ids });
        let outcome = validator().validate(&request);
        let kinds: Vec<_> = outcome.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            [
                ViolationKind::CollectionTooLarge { max: 20 },
                ViolationKind::CollectionElementInvalid,
            ]
        );
    }

    #[test]
    fn empty_batches_are_decided_per_endpoint() {
        let validator = validator();
        let plays = Request::GetNumberOfPlays(GetNumberOfPlaysRequest::default());
        let outcome = validator.validate(&plays);
        assert_eq!(
            failure_lines(&outcome),
            ["\t\tvideo ids should be provided for get number of plays request"]
        );

        let previews = Request::GetVideoPreviews(GetVideoPreviewsRequest::default());
        assert!(validator.validate(&previews).valid);
        let profiles = Request::GetUserProfile(GetUserProfileRequest::default());
        assert!(validator.validate(&profiles).valid);
    }

    #[test]
    fn validating_twice_gives_identical_outcomes() {
        let validator = validator();
        let request = Request::CommentOnVideo(CommentOnVideoRequest::default());
        let first = validator.validate(&request);
        let second = validator.validate(&request);
        assert_eq!(first, second);
        assert_eq!(failure_lines(&first).len(), 4);
    }

    #[test]
    fn concurrent_validation_matches_sequential() {
        let validator = validator();
        let requests: Vec<Request> = RequestKind::ALL
            .iter()
            .flat_map(|kind| {
                let empty: Request = serde_json::from_value(serde_json::json!({
                    "method": kind.method(),
                    "params": {}
                }))
                .unwrap();
                [valid(*kind), empty]
            })
            .collect();

        let sequential: Vec<_> = requests.iter().map(|r| validator.validate(r)).collect();
        let validator = &validator;
        let concurrent: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = requests
                .iter()
                .map(|r| scope.spawn(move || validator.validate(r)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
    }

    /// Field name each rule reports for a given wire key.
    fn field_for(key: &str) -> String {
        match key {
            "query" => "query string".into(),
            "name" => "video name".into(),
            "description" => "video description".into(),
            "tags" => "video tags".into(),
            "upload_url" => "video upload url".into(),
            "you_tube_video_id" => "youtube video id".into(),
            other => other.replace('_', " "),
        }
    }

    /// Parameters a request may omit without being rejected.
    fn may_be_omitted(kind: RequestKind, key: &str) -> bool {
        match key {
            "paging_state" | "starting_comment_id" | "starting_video_id" | "rating"
            | "first_name" | "last_name" => true,
            "tags" => kind == RequestKind::SubmitYouTubeVideo,
            "video_ids" | "user_ids" => kind != RequestKind::GetNumberOfPlays,
            _ => false,
        }
    }

    #[test]
    fn each_omitted_parameter_blames_only_itself() {
        let validator = validator();
        for kind in RequestKind::ALL {
            let wire = serde_json::to_value(valid(kind)).unwrap();
            let keys: Vec<String> = wire["params"].as_object().unwrap().keys().cloned().collect();
            assert!(!keys.is_empty(), "{kind}");

            for key in keys {
                let mut stripped = wire.clone();
                stripped["params"].as_object_mut().unwrap().remove(&key);
                let request: Request = serde_json::from_value(stripped).unwrap();
                let outcome = validator.validate(&request);

                if may_be_omitted(kind, &key) {
                    assert!(outcome.valid, "{kind} without {key}: {}", outcome.description);
                    continue;
                }

                assert!(!outcome.valid, "{kind} without {key} passed");
                assert_eq!(outcome.violations.len(), 1, "{kind} without {key}");
                let field = &outcome.violations[0].field;
                assert_eq!(*field, field_for(&key), "{kind} without {key}");

                let lines = failure_lines(&outcome);
                assert_eq!(lines.len(), 1);
                assert_eq!(
                    lines.iter().filter(|l| l.contains(field.as_str())).count(),
                    1,
                    "{kind} without {key}"
                );
                assert!(lines[0].ends_with(&format!("for {}", kind.label())));
            }
        }
    }
}
