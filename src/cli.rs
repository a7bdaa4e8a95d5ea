use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-stores")]
#[command(author, version, about = "Manage the local photo gallery stores")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Uploaded photos
    #[command(subcommand)]
    Photos(PhotoCommands),

    /// Albums and their photos
    #[command(subcommand)]
    Albums(AlbumCommands),

    /// UI theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),
}

#[derive(Subcommand)]
pub enum PhotoCommands {
    /// List stored photos
    List {
        /// Output as JSON (without image data)
        #[arg(long)]
        json: bool,
    },

    /// Upload image files, one after another
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Delete a photo by id
    Delete { id: f64 },

    /// Delete every photo
    Clear,
}

#[derive(Subcommand)]
pub enum AlbumCommands {
    /// List albums
    List,

    /// Create an album
    Create {
        name: String,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Rename an album
    Rename { id: String, name: String },

    /// Delete an album and forget its photos
    Delete { id: String },

    /// Set the photos of an album
    AddPhotos {
        album: String,

        #[arg(required = true)]
        photo_ids: Vec<f64>,
    },

    /// Show the photo ids of an album
    Photos { album: String },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        #[arg(value_parser = ["light", "dark"])]
        theme: String,
    },

    /// Forget the stored theme and use the default
    Reset,
}
