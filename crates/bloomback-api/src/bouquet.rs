use axum::{Json, extract::Path, response::IntoResponse};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Serialize;

use bloomback_bouquet::{TOTAL_FRAMES, render_frame};

#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub frame: u32,
    pub width: u32,
    pub height: u32,
    pub total_frames: u32,
    /// Base64 RGBA bytes, row-major from the top-left.
    pub pixels: String,
}

/// One frame of the bouquet animation. Stateless and deterministic, so
/// clients can fetch frames in any order; numbers past the end return the
/// held final image. The render itself is a ~17k-pixel fill, cheap enough
/// to stay on the async thread.
pub async fn get_frame(Path(frame): Path<u32>) -> impl IntoResponse {
    let surface = render_frame(frame);

    Json(FrameResponse {
        frame,
        width: surface.width(),
        height: surface.height(),
        total_frames: TOTAL_FRAMES,
        pixels: B64.encode(surface.data()),
    })
}
