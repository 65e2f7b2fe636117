//! System clipboard access.

use kitchen_engine::App;

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}

/// Perform a copy queued with [`App::request_copy`], if any, and report the
/// result back to the app.
pub fn service_copy_request(app: &mut App) {
    let Some(url) = app.take_copy_request() else {
        return;
    };
    let result = copy_to_clipboard(&url);
    if result.is_ok() {
        tracing::info!(url = %url, "Copied URL to clipboard");
    }
    app.finish_copy(&url, result);
}
