// SPDX-License-Identifier: MPL-2.0
//! Native dialogs backed by `rfd`.
//!
//! Every function is async and meant to be driven by `Task::perform`, so the
//! event loop keeps running while a dialog is open. Labels are passed in
//! already translated.

use std::path::PathBuf;

use rfd::{
    AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel,
};

use crate::media::extensions;

/// Translated labels for the file pickers.
#[derive(Debug, Clone)]
pub struct PickerLabels {
    pub title: String,
    pub filter_name: String,
}

/// Asks for one supported media file; `None` when cancelled.
pub async fn select_file(labels: PickerLabels) -> Option<PathBuf> {
    let filter = extensions::dialog_filter_extensions();
    let picked = AsyncFileDialog::new()
        .set_title(&labels.title)
        .add_filter(&labels.filter_name, &filter)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf());
    tracing::debug!(selected = picked.is_some(), "file dialog closed");
    picked
}

/// Asks for one directory; `None` when cancelled.
pub async fn select_directory(title: String) -> Option<PathBuf> {
    let picked = AsyncFileDialog::new()
        .set_title(&title)
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf());
    tracing::debug!(selected = picked.is_some(), "directory dialog closed");
    picked
}

/// Shows a modal error notice with a single dismiss button.
pub async fn show_error(title: String, message: String, dismiss: String) {
    tracing::debug!(%title, %message, "showing error notice");
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(&title)
        .set_description(&message)
        .set_buttons(MessageButtons::OkCustom(dismiss))
        .show()
        .await;
}

/// Asks the user to confirm a deletion. Closing the dialog counts as "No".
pub async fn confirm_delete(title: String, message: String) -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(&title)
        .set_description(&message)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    is_confirmation(&answer)
}

fn is_confirmation(answer: &MessageDialogResult) -> bool {
    matches!(answer, MessageDialogResult::Yes | MessageDialogResult::Ok)
}
