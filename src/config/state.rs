// src/config/state.rs
use super::options::AppOptions;

/// Which table the central panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Reviews,
    Frequencies,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub view: View,

    /// Frequencies tab -> how many of the top words to list
    pub top_words: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            view: View::Reviews,
            top_words: super::consts::GUI_TOP_WORDS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Startup state: defaults plus whatever the environment configures (`WORDNET_DIR`).
    pub fn from_env() -> Self {
        Self { options: AppOptions::from_env(), ..Self::default() }
    }
}
