/*!
    Brightcove video embed component.

    A component fetches metadata for a video id, picks a rendition, and renders
    either a placeholder (poster, optional title and play button) or a native
    video element into its host container. All components on a page share a
    [`PlaybackCoordinator`] so that starting one video pauses the others.

    DOM work goes through the [`Host`] seam. [`VirtualHost`] keeps everything in
    memory; the `web` feature provides a binding to the real DOM.
*/

mod brightcove;
mod coordinator;
mod dom;
mod error;
mod fetch;
mod metadata;
mod poster;
mod render;
mod rendition;
mod tracking;
mod video;

#[cfg(feature = "web")]
pub mod web;

pub use brightcove::{Brightcove, VideoState};
pub use coordinator::PlaybackCoordinator;
pub use dom::{Host, MediaElement, MediaEvent, MediaHandler, Node, Role, VirtualHost, VirtualMedia};
pub use error::{Error, Result};
pub use fetch::{DEFAULT_API_BASE, Endpoints, MetadataClient, MetadataSource};
pub use metadata::{Rendition, VideoInfo, VideoMetadata};
pub use poster::{DEFAULT_IMAGE_BASE, poster_url, update_poster_url};
pub use render::{placeholder_nodes, video_node};
pub use rendition::{AppropriateRendition, RenditionSelector};
pub use tracking::{TRACKING_EVENT, TrackingEvent};
pub use video::{Video, VideoOptions};
