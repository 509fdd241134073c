use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use vidembed::{Brightcove, Endpoints, VideoOptions, VirtualHost};

#[derive(Parser, Debug)]
pub struct InfoCommand {
    /// Brightcove video id
    pub id: String,

    /// Use metadata from a JSON file instead of the API
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Poster width to request from the image service
    #[arg(long)]
    pub optimum_width: Option<u32>,
}

impl InfoCommand {
    pub async fn run(self, endpoints: &Endpoints) -> Result<()> {
        let opts = VideoOptions {
            data: super::load_data(self.data.as_deref())?,
            optimum_width: self.optimum_width,
            ..Default::default()
        };

        let video = Brightcove::new(&self.id, opts, Rc::new(VirtualHost::new()))
            .with_endpoints(endpoints);
        video
            .init()
            .await
            .with_context(|| format!("Failed to load video {}", self.id))?;

        let info = video.info()?;
        println!("{}", serde_json::to_string_pretty(&info)?);

        match video.rendition() {
            Some(rendition) => log::info!("Selected rendition: {}", rendition.url),
            None => log::info!("No playable rendition"),
        }

        Ok(())
    }
}
