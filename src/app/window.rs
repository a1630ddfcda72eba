// SPDX-License-Identifier: MPL-2.0
//! Per-window viewer state.

use crate::application::Playlist;
use crate::config::{
    DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, WELCOME_WINDOW_SIZE, ZOOM_STEP,
};
use crate::domain::PlaybackOptions;
use crate::error::VideoError;
use crate::media::{self, MediaType};
use crate::ui::menu::MenuSection;
use crate::video_player::{PlaybackKey, PlaybackKind, PlaybackMessage};
use iced::widget::image;
use iced::{window, Size};
use std::path::PathBuf;
use std::sync::Arc;

/// How the current item is put on screen.
#[derive(Debug, Clone)]
pub enum Presentation {
    /// Decoded lazily by the image widget.
    Still(image::Handle),
    /// Frames come from the playback subscription.
    Playing {
        kind: PlaybackKind,
        frame: Option<image::Handle>,
        error: Option<VideoError>,
    },
}

impl Presentation {
    fn for_path(path: &std::path::Path) -> Self {
        match media::detect_media_type(path) {
            Some(MediaType::Video) => Self::playing(PlaybackKind::Clip),
            _ if media::is_animated(path) => Self::playing(PlaybackKind::Animation),
            _ => Self::Still(image::Handle::from_path(path)),
        }
    }

    fn playing(kind: PlaybackKind) -> Self {
        Self::Playing {
            kind,
            frame: None,
            error: None,
        }
    }
}

/// Everything one viewer window owns. Nothing here is shared between windows.
#[derive(Debug)]
pub struct ViewerWindow {
    /// `None` while the window shows the welcome view.
    pub playlist: Option<Playlist>,
    pub options: PlaybackOptions,
    pub presentation: Option<Presentation>,
    /// Bumped whenever the current item changes, restarting playback.
    pub generation: u64,
    pub fullscreen: bool,
    /// Remembered across welcome mode, applied only while media is shown.
    pub zoom: f32,
    /// Last known logical size of the window.
    pub size: Size,
    pub hovering: bool,
    /// File awaiting an answer from the delete confirmation dialog.
    pub pending_delete: Option<PathBuf>,
    pub open_menu: Option<MenuSection>,
}

impl ViewerWindow {
    #[must_use]
    pub fn new(options: PlaybackOptions) -> Self {
        Self {
            playlist: None,
            options,
            presentation: None,
            generation: 0,
            fullscreen: false,
            zoom: DEFAULT_ZOOM_FACTOR,
            size: Size::new(WELCOME_WINDOW_SIZE.0, WELCOME_WINDOW_SIZE.1),
            hovering: false,
            pending_delete: None,
            open_menu: None,
        }
    }

    #[must_use]
    pub fn is_showing_media(&self) -> bool {
        self.playlist.is_some()
    }

    /// Replaces the playlist wholesale and shows its current item.
    pub fn set_playlist(&mut self, playlist: Option<Playlist>) {
        self.playlist = playlist;
        self.pending_delete = None;
        self.refresh_presentation();
    }

    /// Rebuilds the presentation for the current item.
    pub fn refresh_presentation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.presentation = self
            .playlist
            .as_ref()
            .map(|playlist| Presentation::for_path(playlist.current()));
    }

    /// Identity of the playback session this window needs, if any.
    #[must_use]
    pub fn playback_key(&self, id: window::Id) -> Option<PlaybackKey> {
        let playlist = self.playlist.as_ref()?;
        match self.presentation {
            Some(Presentation::Playing {
                kind, error: None, ..
            }) => Some(PlaybackKey {
                window: id,
                generation: self.generation,
                path: playlist.current().to_path_buf(),
                kind,
            }),
            _ => None,
        }
    }

    /// Applies a playback message, dropping those from an older session.
    pub fn apply_playback(&mut self, generation: u64, message: PlaybackMessage) {
        if generation != self.generation {
            return;
        }
        let Some(Presentation::Playing { frame, error, .. }) = &mut self.presentation else {
            return;
        };
        match message {
            PlaybackMessage::Frame(decoded) => {
                *frame = Some(image::Handle::from_rgba(
                    decoded.width,
                    decoded.height,
                    Arc::unwrap_or_clone(decoded.rgba_data),
                ));
            }
            PlaybackMessage::Error(err) => {
                *frame = None;
                *error = Some(err);
            }
        }
    }

    /// Scale factor the window is drawn at. The fixed-size welcome screen
    /// is never zoomed.
    #[must_use]
    pub fn effective_zoom(&self) -> f32 {
        if self.is_showing_media() {
            self.zoom
        } else {
            DEFAULT_ZOOM_FACTOR
        }
    }

    /// Window size in layout units, after zoom.
    #[must_use]
    pub fn viewport(&self) -> Size {
        let zoom = self.effective_zoom();
        Size::new(self.size.width / zoom, self.size.height / zoom)
    }

    pub fn zoom_in(&mut self) {
        if !self.is_showing_media() {
            tracing::debug!("zoom ignored on the welcome screen");
            return;
        }
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        if !self.is_showing_media() {
            tracing::debug!("zoom ignored on the welcome screen");
            return;
        }
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM_FACTOR);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = DEFAULT_ZOOM_FACTOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::DecodedFrame;

    fn playlist(names: &[&str]) -> Playlist {
        let items = names.iter().map(PathBuf::from).collect();
        Playlist::from_items(items, PlaybackOptions::default(), &mut rand::rng())
            .expect("non-empty playlist")
    }

    fn frame() -> DecodedFrame {
        DecodedFrame {
            rgba_data: Arc::new(vec![0u8; 4]),
            width: 1,
            height: 1,
            pts_secs: 0.0,
        }
    }

    #[test]
    fn new_window_shows_welcome() {
        let window = ViewerWindow::new(PlaybackOptions::default());
        assert!(!window.is_showing_media());
        assert!(window.presentation.is_none());
    }

    #[test]
    fn videos_play_and_images_stay_still() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());

        window.set_playlist(Some(playlist(&["/m/clip.webm", "/m/photo.png"])));
        assert!(matches!(
            window.presentation,
            Some(Presentation::Playing {
                kind: PlaybackKind::Clip,
                ..
            })
        ));

        if let Some(playlist) = window.playlist.as_mut() {
            playlist.advance(crate::domain::NavigationDirection::Next);
        }
        window.refresh_presentation();
        assert!(matches!(window.presentation, Some(Presentation::Still(_))));
    }

    #[test]
    fn playback_key_changes_with_each_item() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        let id = window::Id::unique();
        window.set_playlist(Some(playlist(&["/m/a.mp4", "/m/b.mp4"])));

        let first = window.playback_key(id).expect("clip key");
        window.refresh_presentation();
        let second = window.playback_key(id).expect("clip key");

        assert_ne!(first, second);
        assert_eq!(second.kind, PlaybackKind::Clip);
    }

    #[test]
    fn stale_frames_are_ignored() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        window.set_playlist(Some(playlist(&["/m/a.mp4"])));
        let stale = window.generation.wrapping_sub(1);

        window.apply_playback(stale, PlaybackMessage::Frame(frame()));
        assert!(matches!(
            window.presentation,
            Some(Presentation::Playing { frame: None, .. })
        ));

        window.apply_playback(window.generation, PlaybackMessage::Frame(frame()));
        assert!(matches!(
            window.presentation,
            Some(Presentation::Playing { frame: Some(_), .. })
        ));
    }

    #[test]
    fn playback_error_stops_the_session() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        let id = window::Id::unique();
        window.set_playlist(Some(playlist(&["/m/a.mp4"])));

        window.apply_playback(
            window.generation,
            PlaybackMessage::Error(VideoError::NoVideoStream),
        );

        assert!(window.playback_key(id).is_none());
    }

    #[test]
    fn clearing_the_playlist_returns_to_welcome() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        window.set_playlist(Some(playlist(&["/m/a.png"])));
        window.pending_delete = Some(PathBuf::from("/m/a.png"));

        window.set_playlist(None);

        assert!(!window.is_showing_media());
        assert!(window.presentation.is_none());
        assert!(window.pending_delete.is_none());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        window.set_playlist(Some(playlist(&["/m/a.png"])));
        for _ in 0..100 {
            window.zoom_in();
        }
        assert_eq!(window.zoom, MAX_ZOOM_FACTOR);
        for _ in 0..100 {
            window.zoom_out();
        }
        assert_eq!(window.zoom, MIN_ZOOM_FACTOR);
        window.reset_zoom();
        assert_eq!(window.zoom, DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn welcome_screen_is_never_zoomed() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());

        for _ in 0..30 {
            window.zoom_in();
        }

        assert_eq!(window.zoom, DEFAULT_ZOOM_FACTOR);
        assert_eq!(window.effective_zoom(), DEFAULT_ZOOM_FACTOR);
        assert_eq!(window.viewport(), window.size);
    }

    #[test]
    fn zoom_returns_with_media() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        window.set_playlist(Some(playlist(&["/m/a.png"])));
        window.zoom_in();
        let zoomed = window.zoom;

        window.set_playlist(None);
        assert_eq!(window.effective_zoom(), DEFAULT_ZOOM_FACTOR);

        window.set_playlist(Some(playlist(&["/m/a.png"])));
        assert_eq!(window.effective_zoom(), zoomed);
    }

    #[test]
    fn viewport_shrinks_with_zoom() {
        let mut window = ViewerWindow::new(PlaybackOptions::default());
        window.set_playlist(Some(playlist(&["/m/a.png"])));
        window.size = Size::new(900.0, 600.0);
        window.zoom = 2.0;

        assert_eq!(window.viewport(), Size::new(450.0, 300.0));
    }
}
