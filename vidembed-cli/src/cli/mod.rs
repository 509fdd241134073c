use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vidembed::{DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, Endpoints, VideoMetadata};

mod info;
mod poster;
mod render;

pub use info::InfoCommand;
pub use poster::PosterCommand;
pub use render::RenderCommand;

#[derive(Parser, Debug)]
#[command(name = "vidembed")]
#[command(about = "Fetch, inspect and render Brightcove video embeds")]
pub struct Args {
    /// Video metadata API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Image resizing service base URL
    #[arg(long, global = true, default_value = DEFAULT_IMAGE_BASE)]
    pub image_base: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a video and print its display info as JSON
    Info(InfoCommand),
    /// Load a video and print the markup its container ends up with
    Render(RenderCommand),
    /// Print the poster URL for an image
    Poster(PosterCommand),
}

impl Args {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            api_base: self.api_base.clone(),
            image_base: self.image_base.clone(),
        }
    }

    pub async fn run(self) -> Result<()> {
        let endpoints = self.endpoints();
        match self.command {
            Command::Info(cmd) => cmd.run(&endpoints).await,
            Command::Render(cmd) => cmd.run(&endpoints).await,
            Command::Poster(cmd) => cmd.run(&endpoints),
        }
    }
}

/**
    Read pre-fetched metadata from a JSON file, if one was given.
*/
fn load_data(path: Option<&Path>) -> Result<Option<VideoMetadata>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(data))
}
