//! Platform glue for the export panel.

/// Spawn a fire-and-forget future on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Put text on the system clipboard. Uses the async browser clipboard on
/// wasm and `arboard` everywhere else.
pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|_| "clipboard write was rejected".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut board = arboard::Clipboard::new().map_err(|err| err.to_string())?;
        board.set_text(text).map_err(|err| err.to_string())
    }
}
