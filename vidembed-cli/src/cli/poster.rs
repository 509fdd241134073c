use anyhow::Result;
use clap::Parser;
use vidembed::{Endpoints, poster_url};

#[derive(Parser, Debug)]
pub struct PosterCommand {
    /// Raw image reference, usually the video still URL
    pub image: String,

    /// Scale the image down to this width
    #[arg(long)]
    pub width: Option<u32>,
}

impl PosterCommand {
    pub fn run(self, endpoints: &Endpoints) -> Result<()> {
        println!("{}", poster_url(&endpoints.image_base, &self.image, self.width));
        Ok(())
    }
}
