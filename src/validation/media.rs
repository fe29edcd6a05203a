//! Validation of the review step: media links and the publish confirmation.

use super::{FieldPath, Issue, IssueKind, Limits};
use crate::event::Media;
use url::Url;

pub fn validate_media(media: &Media, limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("thumbnailUrl", &media.thumbnail_url),
        ("bannerUrl", &media.banner_url),
        ("videoUrl", &media.video_url),
    ] {
        // Blank means the link was left out
        let value = value.trim();
        if !value.is_empty() && Url::parse(value).is_err() {
            issues.push(Issue::new(
                FieldPath::field(field),
                IssueKind::Constraint,
                "Enter a valid URL",
            ));
        }
    }

    for (index, value) in media.gallery_urls.iter().enumerate() {
        if Url::parse(value.trim()).is_err() {
            issues.push(Issue::new(
                FieldPath::field("galleryUrls").index(index),
                IssueKind::Constraint,
                "Enter a valid URL",
            ));
        }
    }

    if limits.require_agreement && !media.agree {
        issues.push(Issue::new(
            FieldPath::field("agree"),
            IssueKind::Constraint,
            "Confirm the details before publishing",
        ));
    }

    issues
}
