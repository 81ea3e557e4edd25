use rfd::{MessageButtons, MessageDialog, MessageLevel};

const ERROR_TITLE: &str = "Ente Tray Error";

/// Blocks until the user acknowledges the dialog.
pub fn show_error(message: &str) {
    let _ = MessageDialog::new()
        .set_title(ERROR_TITLE)
        .set_description(message)
        .set_level(MessageLevel::Error)
        .set_buttons(MessageButtons::Ok)
        .show();
}
