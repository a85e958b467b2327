//! `getUserMedia` camera and canvas-encoded snapshots.
//!
//! ERROR HANDLING
//! ==============
//! A rejected `getUserMedia` promise maps to `PermissionDenied` when the
//! browser names it `NotAllowedError`, otherwise `Unavailable`. Snapshot
//! failures (no frame yet, canvas unavailable) surface as `Encode`.

#[cfg(feature = "hydrate")]
pub use browser::{BrowserCamera, BrowserStream};

#[cfg(not(feature = "hydrate"))]
pub use unavailable::UnavailableStream;

/// Stream type held by the capture widget in this build.
#[cfg(feature = "hydrate")]
pub type DeviceStream = BrowserStream;

/// Stream type held by the capture widget in this build.
#[cfg(not(feature = "hydrate"))]
pub type DeviceStream = UnavailableStream;

/// Storage for the capture machine. Browser streams are `!Send`; the
/// server-side placeholder is not, so it can live in ordinary sync storage.
#[cfg(feature = "hydrate")]
pub type StreamStorage = leptos::prelude::LocalStorage;

#[cfg(not(feature = "hydrate"))]
pub type StreamStorage = leptos::prelude::SyncStorage;

#[cfg(feature = "hydrate")]
mod browser {
    use reports::{Camera, CameraError, CapturedImage, FacingMode, VideoStream};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints,
        MediaStreamTrack,
    };

    /// Camera that renders its stream into a caller-owned `<video>`.
    pub struct BrowserCamera {
        video: HtmlVideoElement,
    }

    impl BrowserCamera {
        pub fn new(video: HtmlVideoElement) -> Self {
            Self { video }
        }
    }

    impl Camera for BrowserCamera {
        type Stream = BrowserStream;

        async fn acquire(&self, facing: FacingMode) -> Result<BrowserStream, CameraError> {
            let devices = web_sys::window()
                .ok_or(CameraError::Unavailable)?
                .navigator()
                .media_devices()
                .map_err(|_| CameraError::Unavailable)?;

            let video = js_sys::Object::new();
            js_sys::Reflect::set(&video, &"facingMode".into(), &facing.as_str().into())
                .map_err(|_| CameraError::Unavailable)?;
            let constraints = MediaStreamConstraints::new();
            constraints.set_video(&video);
            constraints.set_audio(&JsValue::FALSE);

            let promise = devices
                .get_user_media_with_constraints(&constraints)
                .map_err(|_| CameraError::Unavailable)?;
            let media: MediaStream = JsFuture::from(promise)
                .await
                .map_err(|e| classify(&e))?
                .dyn_into()
                .map_err(|_| CameraError::Unavailable)?;

            self.video.set_src_object(Some(&media));
            if let Ok(playing) = self.video.play() {
                let _ = JsFuture::from(playing).await;
            }
            Ok(BrowserStream { media, video: self.video.clone() })
        }
    }

    fn classify(error: &JsValue) -> CameraError {
        let name = js_sys::Reflect::get(error, &"name".into())
            .ok()
            .and_then(|n| n.as_string())
            .unwrap_or_default();
        leptos::logging::warn!("getUserMedia rejected: {name}");
        if name == "NotAllowedError" || name == "SecurityError" {
            CameraError::PermissionDenied
        } else {
            CameraError::Unavailable
        }
    }

    /// A live `MediaStream` bound to its preview element.
    pub struct BrowserStream {
        media: MediaStream,
        video: HtmlVideoElement,
    }

    impl BrowserStream {
        fn tracks(&self) -> impl Iterator<Item = MediaStreamTrack> {
            self.media
                .get_tracks()
                .iter()
                .filter_map(|t| t.dyn_into::<MediaStreamTrack>().ok())
                .collect::<Vec<_>>()
                .into_iter()
        }
    }

    impl VideoStream for BrowserStream {
        fn snapshot(&self, quality: f64) -> Result<CapturedImage, CameraError> {
            let (width, height) = (self.video.video_width(), self.video.video_height());
            if width == 0 || height == 0 {
                return Err(CameraError::Encode("no video frame yet".to_owned()));
            }
            let canvas: HtmlCanvasElement = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.create_element("canvas").ok())
                .and_then(|el| el.dyn_into().ok())
                .ok_or_else(|| CameraError::Encode("canvas unavailable".to_owned()))?;
            canvas.set_width(width);
            canvas.set_height(height);

            let ctx: CanvasRenderingContext2d = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into().ok())
                .ok_or_else(|| CameraError::Encode("2d context unavailable".to_owned()))?;
            ctx.draw_image_with_html_video_element(&self.video, 0.0, 0.0)
                .map_err(|e| CameraError::Encode(format!("{e:?}")))?;

            let data_url = canvas
                .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(quality))
                .map_err(|e| CameraError::Encode(format!("{e:?}")))?;
            CapturedImage::from_data_url(&data_url).map_err(|e| CameraError::Encode(e.to_string()))
        }

        fn stop(&mut self) {
            for track in self.tracks() {
                track.stop();
            }
            // The preview may already show a newer stream.
            if self.video.src_object().as_ref() == Some(&self.media) {
                self.video.set_src_object(None);
            }
        }
    }

    impl Drop for BrowserStream {
        fn drop(&mut self) {
            self.stop();
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod unavailable {
    use reports::{CameraError, CapturedImage, VideoStream};

    /// Placeholder stream for builds without a browser. Never constructed.
    pub struct UnavailableStream;

    impl VideoStream for UnavailableStream {
        fn snapshot(&self, _quality: f64) -> Result<CapturedImage, CameraError> {
            Err(CameraError::Unavailable)
        }

        fn stop(&mut self) {}
    }
}
