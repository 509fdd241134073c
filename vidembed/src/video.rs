use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};

use crate::dom::MediaElement;
use crate::metadata::VideoMetadata;

/**
    Per-instance configuration.
*/
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoOptions {
    pub id: Option<String>,
    /// Pre-fetched metadata; when present no request is made.
    pub data: Option<VideoMetadata>,
    /// Target poster width for the image service.
    pub optimum_width: Option<u32>,
    /// Render a poster placeholder instead of the video element.
    pub placeholder: bool,
    /// Show the video name over the placeholder.
    pub placeholder_title: bool,
    /// Show a play button on the placeholder.
    pub play_button: bool,
    /// Classes applied to the placeholder image and video element.
    #[serde(deserialize_with = "class_list")]
    pub classes: Vec<String>,
}

const ATTRIBUTE_PREFIX: &str = "data-n-video-";

impl VideoOptions {
    /**
        Read options from `data-n-video-*` element attributes.

        Flags are on when present unless their value is `"false"`. Classes are
        space separated. Other attributes are ignored.
    */
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut opts = Self::default();

        for (name, value) in attributes {
            let Some(key) = name.as_ref().strip_prefix(ATTRIBUTE_PREFIX) else {
                continue;
            };
            let value = value.as_ref();
            match key {
                "id" => opts.id = Some(value.trim().to_string()),
                "optimum-width" => opts.optimum_width = value.trim().parse().ok(),
                "placeholder" => opts.placeholder = flag(value),
                "placeholder-title" => opts.placeholder_title = flag(value),
                "play-button" => opts.play_button = flag(value),
                "classes" => opts.classes = value.split_whitespace().map(String::from).collect(),
                _ => {}
            }
        }

        opts
    }
}

fn flag(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("false")
}

fn class_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::One(s)) => s.split_whitespace().map(String::from).collect(),
        Some(Raw::Many(v)) => v,
        None => Vec::new(),
    })
}

/**
    Playback-capable base shared by video providers: identity, options and the
    live media element once one exists.
*/
pub struct Video {
    id: String,
    opts: VideoOptions,
    classes: Vec<String>,
    el: RefCell<Option<Rc<dyn MediaElement>>>,
}

impl Video {
    pub fn new(id: impl Into<String>, opts: VideoOptions) -> Self {
        let classes = opts.classes.clone();
        Self {
            id: id.into(),
            opts,
            classes,
            el: RefCell::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn opts(&self) -> &VideoOptions {
        &self.opts
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn element(&self) -> Option<Rc<dyn MediaElement>> {
        self.el.borrow().clone()
    }

    pub(crate) fn set_element(&self, el: Rc<dyn MediaElement>) {
        *self.el.borrow_mut() = Some(el);
    }

    pub fn pause(&self) {
        if let Some(el) = self.element() {
            el.pause();
        }
    }

    /**
        Playback progress in whole percent, 0 without an element or duration.
    */
    pub fn progress(&self) -> u8 {
        self.element().map_or(0, |el| progress_of(el.as_ref()))
    }
}

pub(crate) fn progress_of(el: &dyn MediaElement) -> u8 {
    let duration = el.duration();
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    // NaN saturates to 0 in the cast
    (100.0 * el.current_time() / duration).trunc().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, VirtualMedia};

    fn video_at(current_time: f64, duration: f64) -> Video {
        let media = VirtualMedia::new(Node::new("video"));
        media.set_position(current_time, duration);
        let video = Video::new("123", VideoOptions::default());
        video.set_element(Rc::new(media));
        video
    }

    #[test]
    fn test_progress_without_element() {
        assert_eq!(Video::new("123", VideoOptions::default()).progress(), 0);
    }

    #[test]
    fn test_progress_unknown_duration() {
        assert_eq!(video_at(5.0, f64::NAN).progress(), 0);
        assert_eq!(video_at(5.0, 0.0).progress(), 0);
        assert_eq!(video_at(5.0, f64::INFINITY).progress(), 0);
    }

    #[test]
    fn test_progress_truncates() {
        assert_eq!(video_at(5.0, 10.0).progress(), 50);
        assert_eq!(video_at(2.0, 3.0).progress(), 66);
        assert_eq!(video_at(10.0, 10.0).progress(), 100);
    }

    #[test]
    fn test_pause_forwards_to_element() {
        let media = Rc::new(VirtualMedia::new(Node::new("video")));
        let video = Video::new("123", VideoOptions::default());
        video.pause();
        video.set_element(media.clone());
        video.pause();
        assert_eq!(media.pause_calls(), 1);
    }

    #[test]
    fn test_options_from_attributes() {
        let opts = VideoOptions::from_attributes([
            ("data-n-video-source", "brightcove"),
            ("data-n-video-id", " 4084879507001 "),
            ("data-n-video-optimum-width", "710"),
            ("data-n-video-placeholder", "true"),
            ("data-n-video-placeholder-title", ""),
            ("data-n-video-play-button", "false"),
            ("data-n-video-classes", "video  video--wide"),
            ("class", "ignored"),
        ]);

        assert_eq!(opts.id.as_deref(), Some("4084879507001"));
        assert_eq!(opts.optimum_width, Some(710));
        assert!(opts.placeholder);
        assert!(opts.placeholder_title);
        assert!(!opts.play_button);
        assert_eq!(opts.classes, vec!["video", "video--wide"]);
        assert!(opts.data.is_none());
    }

    #[test]
    fn test_options_from_json() {
        let opts: VideoOptions = serde_json::from_str(
            r#"{"optimumWidth": 300, "placeholder": true, "playButton": true, "classes": "a b",
                "data": {"id": 1, "name": "Clip"}}"#,
        )
        .unwrap();
        assert_eq!(opts.optimum_width, Some(300));
        assert!(opts.placeholder && opts.play_button && !opts.placeholder_title);
        assert_eq!(opts.classes, vec!["a", "b"]);
        assert_eq!(opts.data.unwrap().name.as_deref(), Some("Clip"));

        let opts: VideoOptions = serde_json::from_str(r#"{"classes": ["x"]}"#).unwrap();
        assert_eq!(opts.classes, vec!["x"]);
    }
}
