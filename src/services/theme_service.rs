use crate::database::local_storage;
use crate::models::Theme;
use photo_gallery::Observable;
use rusqlite::Connection;

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Current UI theme, persisted on every change
#[derive(Debug, Clone)]
pub struct ThemeStore {
    pub theme: Observable<Theme>,
}

impl ThemeStore {
    /// Starts from the stored theme, or dark when nothing valid is stored
    pub fn load(conn: &Connection) -> Self {
        let initial = match local_storage::get_item(conn, THEME_KEY) {
            Ok(stored) => stored.as_deref().and_then(Theme::parse).unwrap_or_default(),
            Err(e) => {
                log::error!("Failed to load theme: {}", e);
                Theme::default()
            }
        };

        let store = Self {
            theme: Observable::new(initial),
        };
        store.persist(conn, initial);
        store
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, conn: &Connection, theme: Theme) {
        self.theme.set(theme);
        self.persist(conn, theme);
    }

    /// Switches between light and dark and returns the new theme
    pub fn toggle_theme(&self, conn: &Connection) -> Theme {
        self.theme.update(|prev| prev.toggled());
        let theme = self.theme.get();
        self.persist(conn, theme);
        theme
    }

    /// Forgets the stored preference and goes back to the default theme
    pub fn reset_theme(&self, conn: &Connection) -> Theme {
        if let Err(e) = local_storage::remove_item(conn, THEME_KEY) {
            log::error!("Failed to remove theme: {}", e);
        }
        self.theme.set(Theme::default());
        Theme::default()
    }

    fn persist(&self, conn: &Connection, theme: Theme) {
        if let Err(e) = local_storage::set_item(conn, THEME_KEY, theme.as_str()) {
            log::error!("Failed to save theme: {}", e);
        }
    }
}
