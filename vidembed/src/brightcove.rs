use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::coordinator::PlaybackCoordinator;
use crate::dom::{Host, MediaElement, MediaEvent, MediaHandler, Role};
use crate::error::{Error, Result};
use crate::fetch::{Endpoints, MetadataClient, MetadataSource};
use crate::metadata::{Rendition, VideoInfo, VideoMetadata};
use crate::poster::{DEFAULT_IMAGE_BASE, poster_url};
use crate::render::{PLACEHOLDER_CLASS, PLAYER_CLASS, placeholder_nodes, video_node};
use crate::rendition::{AppropriateRendition, RenditionSelector};
use crate::tracking::TrackingEvent;
use crate::video::{Video, VideoOptions};

/// Media events reported to analytics.
const TRACKED_EVENTS: [MediaEvent; 3] = [MediaEvent::Play, MediaEvent::Pause, MediaEvent::Ended];

/**
    Lifecycle of a component.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoState {
    Uninitialized,
    /// Metadata request in flight.
    Loading,
    /// Metadata could not be loaded; nothing rendered.
    Failed,
    /// Loaded, but no playable rendition; nothing rendered.
    Empty,
    /// Poster placeholder shown, waiting for the play button.
    Placeholder,
    /// Video element mounted, not started.
    Ready,
    Playing,
    Paused,
    Ended,
}

struct Loaded {
    data: VideoMetadata,
    poster_image: Option<String>,
    rendition: Option<Rendition>,
}

/// State reachable from element event handlers.
struct Inner<H: Host> {
    video: Video,
    host: Rc<H>,
    loaded: RefCell<Option<Loaded>>,
    state: Cell<VideoState>,
}

/**
    Brightcove-hosted video rendered into a [`Host`].

    `init` fetches metadata (or takes it from the options), then renders either
    the placeholder or the video element. Live elements report play, pause
    and ended to analytics and take part in single-active-player coordination.
*/
pub struct Brightcove<H: Host, S = MetadataClient, R = AppropriateRendition> {
    inner: Rc<Inner<H>>,
    source: S,
    selector: R,
    coordinator: Rc<PlaybackCoordinator>,
    image_base: String,
}

impl<H: Host + 'static> Brightcove<H> {
    /**
        Component using the default API and image service and the page-wide
        coordinator.
    */
    pub fn new(id: impl Into<String>, opts: VideoOptions, host: Rc<H>) -> Self {
        Self::with_source(id, opts, host, MetadataClient::new())
    }

    pub fn with_endpoints(mut self, endpoints: &Endpoints) -> Self {
        self.source = MetadataClient::with_base(endpoints.api_base.as_str());
        self.image_base = endpoints.image_base.clone();
        self
    }
}

impl<H: Host + 'static, S: MetadataSource> Brightcove<H, S> {
    pub fn with_source(id: impl Into<String>, opts: VideoOptions, host: Rc<H>, source: S) -> Self {
        let optimum_width = opts.optimum_width;
        Self {
            inner: Rc::new(Inner {
                video: Video::new(id, opts),
                host,
                loaded: RefCell::new(None),
                state: Cell::new(VideoState::Uninitialized),
            }),
            source,
            selector: AppropriateRendition {
                optimum_width,
                ..Default::default()
            },
            coordinator: PlaybackCoordinator::shared(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }
}

impl<H, S, R> Brightcove<H, S, R>
where
    H: Host + 'static,
    S: MetadataSource,
    R: RenditionSelector,
{
    pub fn with_selector<R2: RenditionSelector>(self, selector: R2) -> Brightcove<H, S, R2> {
        Brightcove {
            inner: self.inner,
            source: self.source,
            selector,
            coordinator: self.coordinator,
            image_base: self.image_base,
        }
    }

    pub fn with_coordinator(mut self, coordinator: Rc<PlaybackCoordinator>) -> Self {
        self.coordinator = coordinator;
        self
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    pub fn id(&self) -> &str {
        self.inner.video.id()
    }

    pub fn video(&self) -> &Video {
        &self.inner.video
    }

    pub fn host(&self) -> &Rc<H> {
        &self.inner.host
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn coordinator(&self) -> &Rc<PlaybackCoordinator> {
        &self.coordinator
    }

    pub fn state(&self) -> VideoState {
        self.inner.state.get()
    }

    pub fn data(&self) -> Option<VideoMetadata> {
        self.inner.loaded.borrow().as_ref().map(|l| l.data.clone())
    }

    pub fn poster_image(&self) -> Option<String> {
        self.inner
            .loaded
            .borrow()
            .as_ref()
            .and_then(|l| l.poster_image.clone())
    }

    pub fn rendition(&self) -> Option<Rendition> {
        self.inner
            .loaded
            .borrow()
            .as_ref()
            .and_then(|l| l.rendition.clone())
    }

    /**
        Load metadata and render. On failure nothing is rendered and the error
        is returned for the caller to handle.
    */
    pub async fn init(&self) -> Result<()> {
        self.inner.state.set(VideoState::Loading);

        if let Err(e) = self.get_data().await {
            log::warn!("[brightcove] Failed to load video {}: {}", self.id(), e);
            self.inner.state.set(VideoState::Failed);
            return Err(e);
        }

        self.render_video();
        Ok(())
    }

    /**
        Resolve metadata from the options or the metadata source, then derive
        the poster URL and pick a rendition.
    */
    pub async fn get_data(&self) -> Result<()> {
        let opts = self.inner.video.opts();

        let data = match &opts.data {
            Some(data) => {
                log::debug!("[brightcove] Using supplied data for {}", self.id());
                data.clone()
            }
            None => self.source.fetch(self.id()).await?,
        };

        let poster_image = data
            .video_still_url
            .as_deref()
            .map(|still| poster_url(&self.image_base, still, opts.optimum_width));
        let rendition = self.selector.select(&data.renditions).cloned();

        log::debug!(
            "[brightcove] Loaded {} ({} renditions, selected {:?})",
            self.id(),
            data.renditions.len(),
            rendition.as_ref().map(|r| r.url.as_str())
        );

        *self.inner.loaded.borrow_mut() = Some(Loaded {
            data,
            poster_image,
            rendition,
        });
        Ok(())
    }

    /**
        Render the placeholder or the video element. Does nothing without a
        selected rendition.
    */
    pub fn render_video(&self) -> &Self {
        if self.rendition().is_none() {
            log::debug!("[brightcove] No playable rendition for {}", self.id());
            self.inner.state.set(VideoState::Empty);
            return self;
        }

        if self.inner.video.opts().placeholder {
            add_placeholder(&self.inner, &self.coordinator);
        } else {
            add_video(&self.inner, &self.coordinator);
        }
        self
    }

    /**
        Display projection of the loaded metadata.
    */
    pub fn info(&self) -> Result<VideoInfo> {
        let loaded = self.inner.loaded.borrow();
        let loaded = loaded.as_ref().ok_or_else(|| Error::NotLoaded {
            id: self.id().to_string(),
        })?;
        loaded.data.info(loaded.poster_image.as_deref())
    }

    pub fn get_progress(&self) -> u8 {
        self.inner.video.progress()
    }

    pub fn pause(&self) {
        self.inner.video.pause();
    }
}

fn add_video<H: Host + 'static>(
    inner: &Rc<Inner<H>>,
    coordinator: &Rc<PlaybackCoordinator>,
) -> Option<Rc<dyn MediaElement>> {
    let node = {
        let loaded = inner.loaded.borrow();
        let loaded = loaded.as_ref()?;
        let rendition = loaded.rendition.as_ref()?;
        video_node(
            loaded.poster_image.as_deref(),
            &rendition.url,
            inner.video.classes(),
        )
    };

    let media: Rc<dyn MediaElement> = match inner.host.mount_media(&node) {
        Ok(media) => media,
        Err(e) => {
            log::warn!("[brightcove] Could not mount video for {}: {}", inner.video.id(), e);
            inner.state.set(VideoState::Failed);
            return None;
        }
    };
    inner.host.add_class(PLAYER_CLASS);

    let tracker = tracking_handler(inner);
    for event in TRACKED_EVENTS {
        media.on(event, Rc::clone(&tracker));
    }

    let state = state_handler(inner);
    for event in [MediaEvent::Playing, MediaEvent::Pause, MediaEvent::Ended] {
        media.on(event, Rc::clone(&state));
    }

    let element = Rc::downgrade(&media);
    let on_playing = Rc::clone(coordinator);
    media.on(
        MediaEvent::Playing,
        Rc::new(move |_: MediaEvent| {
            if let Some(element) = element.upgrade() {
                on_playing.request_play(&element);
            }
        }),
    );

    let on_stop = Rc::clone(coordinator);
    let clear: MediaHandler = Rc::new(move |_: MediaEvent| on_stop.clear());
    media.on(MediaEvent::Suspend, Rc::clone(&clear));
    media.on(MediaEvent::Ended, clear);

    inner.video.set_element(Rc::clone(&media));
    inner.state.set(VideoState::Ready);
    log::debug!("[brightcove] Mounted video element for {}", inner.video.id());

    Some(media)
}

fn add_placeholder<H: Host + 'static>(inner: &Rc<Inner<H>>, coordinator: &Rc<PlaybackCoordinator>) {
    let opts = inner.video.opts();

    let nodes = {
        let loaded = inner.loaded.borrow();
        let Some(loaded) = loaded.as_ref() else {
            return;
        };
        let title = opts
            .placeholder_title
            .then(|| loaded.data.name.clone().unwrap_or_default());
        placeholder_nodes(
            loaded.poster_image.as_deref(),
            inner.video.classes(),
            title.as_deref(),
            opts.play_button,
        )
    };

    inner.host.add_class(PLACEHOLDER_CLASS);
    for node in &nodes {
        inner.host.append(node);
    }
    inner.state.set(VideoState::Placeholder);

    if opts.play_button {
        let weak = Rc::downgrade(inner);
        let coordinator = Rc::clone(coordinator);
        inner.host.on_click(
            Role::PlayButton,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    activate(&inner, &coordinator);
                }
            }),
        );
    }
}

/**
    Swap the placeholder for the video element and start playback.
*/
fn activate<H: Host + 'static>(inner: &Rc<Inner<H>>, coordinator: &Rc<PlaybackCoordinator>) {
    if inner.state.get() != VideoState::Placeholder {
        return;
    }
    log::debug!("[brightcove] Play requested for {}", inner.video.id());

    inner.host.remove(Role::PlayButton);
    if inner.video.opts().placeholder_title {
        inner.host.remove(Role::Title);
    }
    remove_placeholder(inner);

    if let Some(media) = add_video(inner, coordinator) {
        media.play();
        media.focus();
    }
}

fn remove_placeholder<H: Host>(inner: &Inner<H>) {
    inner.host.remove_class(PLACEHOLDER_CLASS);
    inner.host.remove(Role::Placeholder);
}

fn tracking_handler<H: Host + 'static>(inner: &Rc<Inner<H>>) -> MediaHandler {
    let weak = Rc::downgrade(inner);
    Rc::new(move |event: MediaEvent| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let tracking = TrackingEvent::media(inner.video.id(), event, inner.video.progress());
        inner.host.dispatch(&tracking);
    })
}

fn state_handler<H: Host + 'static>(inner: &Rc<Inner<H>>) -> MediaHandler {
    let weak = Rc::downgrade(inner);
    Rc::new(move |event: MediaEvent| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let state = match event {
            MediaEvent::Play | MediaEvent::Playing => VideoState::Playing,
            MediaEvent::Pause => VideoState::Paused,
            MediaEvent::Ended => VideoState::Ended,
            MediaEvent::Suspend => return,
        };
        inner.state.set(state);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, VirtualHost, VirtualMedia};

    const ID: &str = "4084879507001";

    struct FakeSource {
        calls: Cell<usize>,
        response: Option<VideoMetadata>,
    }

    impl FakeSource {
        fn ok(data: VideoMetadata) -> Self {
            Self {
                calls: Cell::new(0),
                response: Some(data),
            }
        }

        fn not_found() -> Self {
            Self {
                calls: Cell::new(0),
                response: None,
            }
        }
    }

    impl MetadataSource for FakeSource {
        async fn fetch(&self, id: &str) -> Result<VideoMetadata> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone().ok_or_else(|| Error::Status {
                id: id.to_string(),
                status: 404,
                status_text: "Not Found".to_string(),
            })
        }
    }

    fn metadata() -> VideoMetadata {
        serde_json::from_value(serde_json::json!({
            "id": ID,
            "name": "Markets in a minute",
            "length": 61000,
            "publishedDate": "0",
            "shortDescription": "Short",
            "longDescription": "Long",
            "tags": ["markets"],
            "videoStillURL": "still.jpg",
            "renditions": [
                {"url": "low.mp4", "frameWidth": 480, "videoContainer": "MP4"},
                {"url": "high.mp4", "frameWidth": 1280, "videoContainer": "MP4"}
            ]
        }))
        .unwrap()
    }

    fn component(
        opts: VideoOptions,
        source: FakeSource,
    ) -> Brightcove<VirtualHost, FakeSource> {
        Brightcove::with_source(ID, opts, Rc::new(VirtualHost::new()), source)
            .with_coordinator(Rc::new(PlaybackCoordinator::new()))
    }

    fn placeholder_opts() -> VideoOptions {
        VideoOptions {
            placeholder: true,
            placeholder_title: true,
            play_button: true,
            classes: vec!["video".to_string()],
            ..Default::default()
        }
    }

    fn live_media(video: &Brightcove<VirtualHost, FakeSource>) -> Rc<VirtualMedia> {
        video.host().media().expect("video element mounted")
    }

    #[tokio::test]
    async fn test_supplied_data_skips_fetch() {
        let opts = VideoOptions {
            data: Some(metadata()),
            ..Default::default()
        };
        let video = component(opts, FakeSource::ok(metadata()));

        video.init().await.unwrap();

        assert_eq!(video.source().calls.get(), 0);
        assert_eq!(video.state(), VideoState::Ready);
        assert_eq!(video.data(), Some(metadata()));
    }

    #[tokio::test]
    async fn test_fetches_when_no_data_supplied() {
        let video = component(VideoOptions::default(), FakeSource::ok(metadata()));
        video.init().await.unwrap();
        assert_eq!(video.source().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_nothing() {
        let video = component(VideoOptions::default(), FakeSource::not_found());

        let err = video.init().await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains(ID));
        assert!(message.contains("404"));

        assert_eq!(video.state(), VideoState::Failed);
        assert!(video.host().children().is_empty());
        assert!(video.host().classes().is_empty());
    }

    #[tokio::test]
    async fn test_no_rendition_renders_nothing() {
        let mut data = metadata();
        data.renditions.clear();
        let video = component(placeholder_opts(), FakeSource::ok(data));

        video.init().await.unwrap();

        assert_eq!(video.state(), VideoState::Empty);
        assert!(video.host().children().is_empty());
        assert!(video.rendition().is_none());
    }

    #[tokio::test]
    async fn test_renders_video_element() {
        let opts = VideoOptions {
            optimum_width: Some(200),
            classes: vec!["video".to_string(), "video--wide".to_string()],
            ..Default::default()
        };
        let video = component(opts, FakeSource::ok(metadata()))
            .with_image_base("http://images.test");

        video.init().await.unwrap();

        let host = video.host();
        assert!(host.has_class("n-video--player"));
        let node = host.child(Role::Video).unwrap();
        assert_eq!(node.tag, "video");
        assert_eq!(node.attribute("controls"), Some("true"));
        // Narrowest rendition at least as wide as the optimum width
        assert_eq!(node.attribute("src"), Some("low.mp4"));
        assert_eq!(
            node.attribute("poster"),
            Some("http://images.test/image/v1/images/raw/still.jpg?source=next&fit=scale-down&width=200")
        );
        assert_eq!(node.class_name(), "video video--wide");

        let media = live_media(&video);
        assert_eq!(media.node(), &node);
        for event in [
            MediaEvent::Play,
            MediaEvent::Pause,
            MediaEvent::Ended,
            MediaEvent::Playing,
            MediaEvent::Suspend,
        ] {
            assert!(media.listener_count(event) > 0, "no listener for {:?}", event);
        }
    }

    #[tokio::test]
    async fn test_custom_selector() {
        fn first(renditions: &[Rendition]) -> Option<&Rendition> {
            renditions.first()
        }

        let video = component(VideoOptions::default(), FakeSource::ok(metadata())).with_selector(first);
        video.init().await.unwrap();
        assert_eq!(video.rendition().unwrap().url, "low.mp4");
    }

    #[tokio::test]
    async fn test_placeholder_rendering() {
        let video = component(placeholder_opts(), FakeSource::ok(metadata()));
        video.init().await.unwrap();

        let host = video.host();
        assert_eq!(video.state(), VideoState::Placeholder);
        assert!(host.has_class("n-video--placeholder"));
        assert_eq!(
            host.roles(),
            vec![Some(Role::Placeholder), Some(Role::Title), Some(Role::PlayButton)]
        );
        assert_eq!(
            host.child(Role::Title).unwrap().text.as_deref(),
            Some("Markets in a minute")
        );
        assert!(host.media().is_none());
        assert_eq!(video.get_progress(), 0);
    }

    #[tokio::test]
    async fn test_play_click_swaps_placeholder_for_video() {
        let video = component(placeholder_opts(), FakeSource::ok(metadata()));
        video.init().await.unwrap();
        let host = video.host();

        assert!(host.click(Role::PlayButton));

        assert_eq!(host.roles(), vec![Some(Role::Video)]);
        assert!(!host.has_class("n-video--placeholder"));
        assert!(host.has_class("n-video--player"));

        let media = live_media(&video);
        assert!(media.is_playing());
        assert!(media.is_focused());
        assert_eq!(media.play_calls(), 1);

        // One-way: the button is gone
        assert!(!host.click(Role::PlayButton));
        assert_eq!(host.roles(), vec![Some(Role::Video)]);
        assert_eq!(media.play_calls(), 1);
    }

    #[tokio::test]
    async fn test_placeholder_without_button_stays() {
        let opts = VideoOptions {
            placeholder: true,
            ..Default::default()
        };
        let video = component(opts, FakeSource::ok(metadata()));
        video.init().await.unwrap();

        let host = video.host();
        assert_eq!(host.roles(), vec![Some(Role::Placeholder)]);
        assert!(!host.click(Role::Placeholder));
        assert_eq!(video.state(), VideoState::Placeholder);
    }

    /// Container whose video element can never be mounted.
    #[derive(Default)]
    struct NoMediaHost(VirtualHost);

    impl Host for NoMediaHost {
        type Media = VirtualMedia;

        fn add_class(&self, class: &str) {
            self.0.add_class(class)
        }

        fn remove_class(&self, class: &str) {
            self.0.remove_class(class)
        }

        fn append(&self, node: &Node) {
            self.0.append(node)
        }

        fn remove(&self, role: Role) {
            self.0.remove(role)
        }

        fn mount_media(&self, node: &Node) -> Result<Rc<VirtualMedia>> {
            Err(Error::Dom(format!("cannot mount <{}>", node.tag)))
        }

        fn on_click(&self, role: Role, handler: Box<dyn Fn()>) {
            self.0.on_click(role, handler)
        }

        fn dispatch(&self, event: &TrackingEvent) {
            self.0.dispatch(event)
        }
    }

    #[tokio::test]
    async fn test_failed_mount_leaves_no_player_class() {
        let host = Rc::new(NoMediaHost::default());
        let source = FakeSource::ok(metadata());
        let video = Brightcove::with_source(ID, placeholder_opts(), Rc::clone(&host), source)
            .with_coordinator(Rc::new(PlaybackCoordinator::new()));
        video.init().await.unwrap();
        assert_eq!(video.state(), VideoState::Placeholder);

        assert!(host.0.click(Role::PlayButton));

        assert!(!host.0.has_class("n-video--player"));
        assert!(!host.0.has_class("n-video--placeholder"));
        assert!(host.0.children().is_empty());
        assert!(video.video().element().is_none());
        assert_eq!(video.state(), VideoState::Failed);
    }

    #[tokio::test]
    async fn test_malformed_numbers_still_render() {
        for length in [serde_json::json!("61000"), serde_json::json!(-1)] {
            let mut raw = serde_json::to_value(metadata()).unwrap();
            raw["length"] = length;
            raw["renditions"][0]["frameWidth"] = serde_json::json!("480");
            let data: VideoMetadata = serde_json::from_value(raw).unwrap();

            let video = component(VideoOptions::default(), FakeSource::ok(data));
            video.init().await.unwrap();

            assert_eq!(video.state(), VideoState::Ready);
            let info = video.info().unwrap();
            assert_eq!(info.length, None);
            assert_eq!(info.name.as_deref(), Some("Markets in a minute"));
            assert_eq!(info.published_date, "1970-01-01T00:00:00.000Z");
        }
    }

    #[tokio::test]
    async fn test_tracking_events() {
        let video = component(VideoOptions::default(), FakeSource::ok(metadata()));
        video.init().await.unwrap();
        let media = live_media(&video);

        media.set_position(5.0, 10.0);
        media.emit(MediaEvent::Play);
        media.set_position(7.5, 10.0);
        media.emit(MediaEvent::Pause);
        media.emit(MediaEvent::Playing);
        media.emit(MediaEvent::Suspend);

        let events = video.host().tracking_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], TrackingEvent::media(ID, MediaEvent::Play, 50));
        assert_eq!(events[1].event, "pause");
        assert_eq!(events[1].progress, 75);
        assert_eq!(events[1].content_id, ID);
    }

    #[tokio::test]
    async fn test_state_follows_media_events() {
        let video = component(VideoOptions::default(), FakeSource::ok(metadata()));
        video.init().await.unwrap();
        let media = live_media(&video);

        media.emit(MediaEvent::Playing);
        assert_eq!(video.state(), VideoState::Playing);
        media.emit(MediaEvent::Pause);
        assert_eq!(video.state(), VideoState::Paused);
        media.emit(MediaEvent::Ended);
        assert_eq!(video.state(), VideoState::Ended);
    }

    #[tokio::test]
    async fn test_only_one_video_plays() {
        let coordinator = Rc::new(PlaybackCoordinator::new());
        let first = component(VideoOptions::default(), FakeSource::ok(metadata()))
            .with_coordinator(Rc::clone(&coordinator));
        let second = component(VideoOptions::default(), FakeSource::ok(metadata()))
            .with_coordinator(Rc::clone(&coordinator));
        first.init().await.unwrap();
        second.init().await.unwrap();

        let a = live_media(&first);
        let b = live_media(&second);

        a.play();
        a.emit(MediaEvent::Playing);
        b.play();
        b.emit(MediaEvent::Playing);

        assert_eq!(a.pause_calls(), 1);
        assert!(!a.is_playing());
        assert_eq!(b.pause_calls(), 0);
        assert!(b.is_playing());

        let current = coordinator.currently_playing().unwrap();
        assert!(std::ptr::addr_eq(Rc::as_ptr(&current), Rc::as_ptr(&b)));

        // Natural stop of the requested video leaves it current
        b.emit(MediaEvent::Ended);
        assert!(coordinator.currently_playing().is_some());
    }

    #[tokio::test]
    async fn test_info() {
        let video = component(VideoOptions::default(), FakeSource::ok(metadata()));
        assert!(matches!(video.info(), Err(Error::NotLoaded { .. })));

        video.init().await.unwrap();
        let info = video.info().unwrap();
        assert_eq!(info.id.as_deref(), Some(ID));
        assert_eq!(info.name.as_deref(), Some("Markets in a minute"));
        assert_eq!(info.published_date, "1970-01-01T00:00:00.000Z");
        assert_eq!(info.published_date_readable, "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(info.length, Some(61000));
        assert_eq!(info.tags, vec!["markets"]);
        assert_eq!(
            info.poster_image.as_deref(),
            Some("https://next-geebee.ft.com/image/v1/images/raw/still.jpg?source=next")
        );
    }

    #[tokio::test]
    async fn test_progress_and_pause() {
        let video = component(VideoOptions::default(), FakeSource::ok(metadata()));
        assert_eq!(video.get_progress(), 0);

        video.init().await.unwrap();
        let media = live_media(&video);
        assert_eq!(video.get_progress(), 0);

        media.set_position(5.0, 10.0);
        assert_eq!(video.get_progress(), 50);

        video.pause();
        assert_eq!(media.pause_calls(), 1);
    }
}
