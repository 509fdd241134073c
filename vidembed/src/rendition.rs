use crate::metadata::Rendition;

/**
    Picks the rendition to play from the variants a video offers.
*/
pub trait RenditionSelector {
    fn select<'a>(&self, renditions: &'a [Rendition]) -> Option<&'a Rendition>;
}

impl<F> RenditionSelector for F
where
    F: for<'a> Fn(&'a [Rendition]) -> Option<&'a Rendition>,
{
    fn select<'a>(&self, renditions: &'a [Rendition]) -> Option<&'a Rendition> {
        self(renditions)
    }
}

/**
    Default selection: restrict to the preferred container when any rendition
    uses it, then take the narrowest rendition at least `optimum_width` wide,
    or the widest one when no width is given or none is wide enough.
*/
#[derive(Clone, Debug)]
pub struct AppropriateRendition {
    pub container: String,
    pub optimum_width: Option<u32>,
}

impl AppropriateRendition {
    pub fn for_width(optimum_width: u32) -> Self {
        Self {
            optimum_width: Some(optimum_width),
            ..Self::default()
        }
    }
}

impl Default for AppropriateRendition {
    fn default() -> Self {
        Self {
            container: "MP4".to_string(),
            optimum_width: None,
        }
    }
}

impl RenditionSelector for AppropriateRendition {
    fn select<'a>(&self, renditions: &'a [Rendition]) -> Option<&'a Rendition> {
        let playable: Vec<&Rendition> = renditions
            .iter()
            .filter(|r| !r.url.is_empty() && r.audio_only != Some(true))
            .collect();

        let preferred: Vec<&Rendition> = playable
            .iter()
            .copied()
            .filter(|r| {
                r.video_container
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(&self.container))
            })
            .collect();

        let mut candidates = if preferred.is_empty() {
            playable
        } else {
            preferred
        };
        // Stable sort keeps API order among equal widths
        candidates.sort_by_key(|r| r.frame_width.unwrap_or(0));

        self.optimum_width
            .and_then(|width| {
                candidates
                    .iter()
                    .copied()
                    .find(|r| r.frame_width.unwrap_or(0) >= width)
            })
            .or_else(|| candidates.last().copied())
    }
}
