mod cli;

use clap::Parser;
use cli::{AlbumCommands, Cli, Commands, PhotoCommands, ThemeCommands};
use gallery_stores::models::{AlbumUpdate, NewAlbum, Theme};
use gallery_stores::services::album_photo_service;
use gallery_stores::{AppConfig, AppError, GalleryContext};

fn main() {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick a level from the verbose flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_command(&config, cli.command))
}

async fn run_command(config: &AppConfig, command: Commands) -> Result<(), AppError> {
    let ctx = GalleryContext::open(config)?;
    ctx.init().await;

    match command {
        Commands::Photos(cmd) => run_photos(&ctx, cmd).await,
        Commands::Albums(cmd) => run_albums(&ctx, cmd),
        Commands::Theme(cmd) => run_theme(&ctx, cmd),
    }
}

async fn run_photos(ctx: &GalleryContext, cmd: PhotoCommands) -> Result<(), AppError> {
    match cmd {
        PhotoCommands::List { json } => {
            let photos = ctx.photos.photos();
            if json {
                let listing: Vec<_> = photos
                    .into_iter()
                    .map(|mut p| {
                        p.src = String::new();
                        p
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for p in photos {
                    println!(
                        "{}\t{}\t{}x{}\t{} bytes",
                        p.id,
                        p.alt,
                        p.width.unwrap_or(0),
                        p.height.unwrap_or(0),
                        p.file_size.unwrap_or(0)
                    );
                }
            }
        }
        PhotoCommands::Upload { files } => {
            let mut progress = ctx.photos.state().upload_progress.subscribe();
            let watcher = tokio::spawn(async move {
                while progress.changed().await.is_ok() {
                    let value = *progress.borrow_and_update();
                    log::debug!("Upload progress: {:.0}%", value);
                }
            });

            let result = ctx.photos.upload_paths(files.as_slice()).await;
            watcher.abort();

            for photo in result? {
                println!("Uploaded {} as {}", photo.alt, photo.id);
            }
        }
        PhotoCommands::Delete { id } => {
            ctx.photos.delete_photo(id).await?;
            println!("Deleted {}", id);
        }
        PhotoCommands::Clear => {
            ctx.photos.clear_all_photos().await?;
            println!("All photos deleted");
        }
    }
    Ok(())
}

fn run_albums(ctx: &GalleryContext, cmd: AlbumCommands) -> Result<(), AppError> {
    let conn = &ctx.conn;
    match cmd {
        AlbumCommands::List => {
            for album in ctx.albums.albums.get() {
                println!(
                    "{}\t{}\t{} photos",
                    album.id,
                    album.name,
                    album_photo_service::get_photo_count(conn, &album.id)
                );
            }
        }
        AlbumCommands::Create { name, description } => {
            let album = ctx.albums.create_album(
                conn,
                NewAlbum {
                    name,
                    description,
                    cover_photo_id: None,
                },
            )?;
            println!("Created {}", album.id);
        }
        AlbumCommands::Rename { id, name } => {
            require_album(ctx, &id)?;
            ctx.albums.update_album(
                conn,
                &id,
                &AlbumUpdate {
                    name: Some(name),
                    ..AlbumUpdate::default()
                },
            );
        }
        AlbumCommands::Delete { id } => {
            require_album(ctx, &id)?;
            ctx.albums.delete_album(conn, &id);
            album_photo_service::remove_all_photos_from_album(conn, &id);
        }
        AlbumCommands::AddPhotos { album, photo_ids } => {
            require_album(ctx, &album)?;
            album_photo_service::add_photos_to_album(conn, &album, &photo_ids);
        }
        AlbumCommands::Photos { album } => {
            for id in album_photo_service::get_album_photos(conn, &album) {
                println!("{}", id);
            }
        }
    }
    Ok(())
}

fn require_album(ctx: &GalleryContext, id: &str) -> Result<(), AppError> {
    ctx.albums
        .get_album(id)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Album {}", id)))
}

fn run_theme(ctx: &GalleryContext, cmd: ThemeCommands) -> Result<(), AppError> {
    let theme = match cmd {
        ThemeCommands::Show => ctx.theme.get(),
        ThemeCommands::Toggle => ctx.theme.toggle_theme(&ctx.conn),
        ThemeCommands::Reset => ctx.theme.reset_theme(&ctx.conn),
        ThemeCommands::Set { theme } => {
            let theme = Theme::parse(&theme)
                .ok_or_else(|| AppError::Validation(format!("Unknown theme: {}", theme)))?;
            ctx.theme.set_theme(&ctx.conn, theme);
            theme
        }
    };
    println!("{}", theme);
    Ok(())
}
