use crate::core::{PlayRequest, PlaybackError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Fire a one-shot sound. Each call gets its own media element, so a new
// play overlaps anything still sounding instead of queuing behind it.
pub fn play(request: &PlayRequest) -> Result<(), PlaybackError> {
    let el = web::HtmlAudioElement::new_with_src(&request.path).map_err(|e| {
        PlaybackError::Create {
            path: request.path.clone(),
            reason: format!("{:?}", e),
        }
    })?;
    el.set_volume(request.gain.clamp(0.0, 1.0) as f64);
    let promise: js_sys::Promise = el.play().map_err(|e| PlaybackError::Rejected {
        path: request.path.clone(),
        reason: format!("{:?}", e),
    })?;

    // Load/decode failures only surface through the promise.
    let path = request.path.clone();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            let err = PlaybackError::Rejected {
                path,
                reason: format!("{:?}", e),
            };
            log::warn!("[audio] {}", err);
        }
    });
    log::debug!(
        "[audio] play {} ({}) gain={:.2}",
        request.glyph,
        request.path,
        request.gain
    );
    Ok(())
}

/// `play`, with failures reported to the console.
pub fn play_logged(request: &PlayRequest) {
    if let Err(e) = play(request) {
        log::warn!("[audio] {}", e);
    }
}
