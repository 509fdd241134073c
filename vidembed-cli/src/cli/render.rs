use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use vidembed::{Brightcove, Endpoints, Role, VideoOptions, VideoState, VirtualHost};

#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Brightcove video id
    pub id: String,

    /// Use metadata from a JSON file instead of the API
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Render a poster placeholder instead of the video element
    #[arg(long)]
    pub placeholder: bool,

    /// Show the video name over the placeholder
    #[arg(long)]
    pub placeholder_title: bool,

    /// Show a play button on the placeholder
    #[arg(long)]
    pub play_button: bool,

    /// Class for the image / video element (repeatable)
    #[arg(long)]
    pub class: Vec<String>,

    /// Poster width to request from the image service
    #[arg(long)]
    pub optimum_width: Option<u32>,

    /// Press the play button after rendering
    #[arg(long)]
    pub play: bool,
}

impl RenderCommand {
    pub async fn run(self, endpoints: &Endpoints) -> Result<()> {
        let opts = VideoOptions {
            id: Some(self.id.clone()),
            data: super::load_data(self.data.as_deref())?,
            optimum_width: self.optimum_width,
            placeholder: self.placeholder,
            placeholder_title: self.placeholder_title,
            play_button: self.play_button,
            classes: self.class,
        };

        let host = Rc::new(VirtualHost::new());
        let video = Brightcove::new(&self.id, opts, Rc::clone(&host)).with_endpoints(endpoints);
        video
            .init()
            .await
            .with_context(|| format!("Failed to load video {}", self.id))?;

        if self.play && !host.click(Role::PlayButton) {
            log::warn!("Nothing to play: no play button rendered");
        }

        if video.state() == VideoState::Empty {
            log::warn!("Video {} has no playable rendition", self.id);
        }

        println!("{}", host.to_html());
        Ok(())
    }
}
