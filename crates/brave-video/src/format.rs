//! Text rendering of video results

use crate::api::VideoResult;

/// Separator placed between rendered results
pub const RESULT_SEPARATOR: &str = "\n---\n";

/// Renders a result list into the text handed back to the agent
pub trait VideoFormatter: Send + Sync {
    /// Render every result, preserving order
    fn format_video_results(&self, results: &[VideoResult]) -> String;
}

/// Default formatter: one labelled block per result
///
/// ```text
/// Title: ...
/// URL: ...
/// Description: ...
/// Duration: ...
/// ---
/// Title: ...
/// ```
///
/// Lines for fields upstream did not send are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_one(video: &VideoResult) -> String {
        let mut lines = vec![format!("Title: {}", video.title), format!("URL: {}", video.url)];

        if let Some(description) = &video.description {
            lines.push(format!("Description: {description}"));
        }
        if let Some(age) = &video.age {
            lines.push(format!("Age: {age}"));
        }

        let data = &video.video;
        if let Some(duration) = &data.duration {
            lines.push(format!("Duration: {duration}"));
        }
        if let Some(views) = data.views {
            lines.push(format!("Views: {views}"));
        }
        if let Some(creator) = &data.creator {
            lines.push(format!("Creator: {creator}"));
        }
        if let Some(requires) = data.requires_subscription {
            let answer = if requires { "yes" } else { "no" };
            lines.push(format!("Requires subscription: {answer}"));
        }
        if let Some(tags) = data.tags.as_ref().filter(|t| !t.is_empty()) {
            lines.push(format!("Tags: {}", tags.join(", ")));
        }
        if let Some(author) = &data.author {
            match &author.url {
                Some(url) => lines.push(format!("Author: {} ({url})", author.name)),
                None => lines.push(format!("Author: {}", author.name)),
            }
        }

        let thumbnail = data.thumbnail.as_ref().or(video.thumbnail.as_ref());
        if let Some(thumbnail) = thumbnail.filter(|t| !t.src.is_empty()) {
            lines.push(format!("Thumbnail: {}", thumbnail.src));
        }

        lines.join("\n")
    }
}

impl VideoFormatter for PlainTextFormatter {
    fn format_video_results(&self, results: &[VideoResult]) -> String {
        results
            .iter()
            .map(Self::format_one)
            .collect::<Vec<_>>()
            .join(RESULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Profile, Thumbnail, VideoData};

    fn video(title: &str) -> VideoResult {
        VideoResult {
            url: format!("https://example.com/{title}"),
            title: title.to_string(),
            description: Some(format!("About {title}")),
            age: Some("1 week ago".to_string()),
            video: VideoData {
                duration: Some("3:45".to_string()),
                views: Some(987),
                creator: Some("Chan".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_block() {
        let text = PlainTextFormatter.format_video_results(&[video("cats")]);
        assert_eq!(
            text,
            "Title: cats\n\
             URL: https://example.com/cats\n\
             Description: About cats\n\
             Age: 1 week ago\n\
             Duration: 3:45\n\
             Views: 987\n\
             Creator: Chan"
        );
    }

    #[test]
    fn test_extended_fields() {
        let mut v = video("dogs");
        v.video.requires_subscription = Some(true);
        v.video.tags = Some(vec!["pets".to_string(), "funny".to_string()]);
        v.video.author = Some(Profile {
            name: "doglover".to_string(),
            url: Some("https://example.com/@doglover".to_string()),
            ..Default::default()
        });
        v.thumbnail = Some(Thumbnail {
            src: "https://imgs.example/dogs.jpg".to_string(),
            original: None,
        });

        let text = PlainTextFormatter.format_video_results(&[v]);
        assert!(text.contains("Requires subscription: yes"));
        assert!(text.contains("Tags: pets, funny"));
        assert!(text.contains("Author: doglover (https://example.com/@doglover)"));
        assert!(text.ends_with("Thumbnail: https://imgs.example/dogs.jpg"));
    }

    #[test]
    fn test_order_and_separator() {
        let text = PlainTextFormatter.format_video_results(&[video("b"), video("a")]);
        let blocks: Vec<_> = text.split(RESULT_SEPARATOR).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Title: b"));
        assert!(blocks[1].starts_with("Title: a"));
    }

    #[test]
    fn test_empty_tags_omitted() {
        let mut v = video("x");
        v.video.tags = Some(Vec::new());
        assert!(!PlainTextFormatter.format_video_results(&[v]).contains("Tags:"));
    }
}
