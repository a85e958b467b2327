//! Camera capture state machine.
//!
//! DESIGN
//! ======
//! `CameraCapture` moves through `Idle -> Acquiring -> Streaming -> Captured`
//! and back:
//!
//! - `Idle -> Acquiring`: explicit open request for a rear-facing stream. Only
//!   one request can be outstanding.
//! - `Acquiring -> Streaming`: the platform delivered a stream. A failure
//!   returns to `Idle` and records an error for the view. No retry.
//! - `Streaming -> Captured`: take photo; encodes the current frame as JPEG and
//!   stops every track of the stream.
//! - `Streaming -> Idle`: cancel; stops the stream without an image.
//! - `Captured -> Idle`: clear; drops the image.
//!
//! Acquisition is split into [`CameraCapture::begin`] and
//! [`CameraCapture::attach`] so a UI can run the platform request without
//! holding a borrow of the machine across the await.
//!
//! Dropping the machine releases any held stream. Releasing while acquiring
//! abandons the request; its stream is stopped when it arrives.

#[cfg(test)]
#[path = "camera_test.rs"]
mod tests;

use std::future::Future;

use crate::model::CapturedImage;

/// JPEG quality used for snapshots.
pub const JPEG_QUALITY: f64 = 0.8;

/// Message shown when a stream cannot be acquired.
pub const ACCESS_DENIED_MESSAGE: &str = "Camera access denied. Please allow camera permissions.";

/// Message shown when a frame cannot be encoded.
pub const CAPTURE_FAILED_MESSAGE: &str = "Could not capture a photo. Please try again.";

/// Which physical camera to prefer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FacingMode {
    /// Rear camera, pointed at the scene.
    #[default]
    Environment,
}

impl FacingMode {
    /// Value for the `facingMode` media constraint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
        }
    }
}

/// Failures reported by a camera device or stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no camera available")]
    Unavailable,
    #[error("frame encoding failed: {0}")]
    Encode(String),
}

impl CameraError {
    /// Text suitable for inline display under the camera control.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied | Self::Unavailable => ACCESS_DENIED_MESSAGE,
            Self::Encode(_) => CAPTURE_FAILED_MESSAGE,
        }
    }
}

/// Requests the machine refused or could not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("cannot {action} while camera is {phase:?}")]
    InvalidTransition { action: &'static str, phase: CameraPhase },
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// A live handle to a device video feed.
pub trait VideoStream {
    /// Encode the current frame as a still image.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::Encode`] if no frame can be produced.
    fn snapshot(&self, quality: f64) -> Result<CapturedImage, CameraError>;

    /// Stop every underlying track. Must be idempotent.
    fn stop(&mut self);
}

/// A device able to hand out video streams.
pub trait Camera {
    type Stream: VideoStream;

    /// Request a stream; resolves once the platform answers.
    fn acquire(&self, facing: FacingMode) -> impl Future<Output = Result<Self::Stream, CameraError>>;
}

/// Observable phase of a [`CameraCapture`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraPhase {
    #[default]
    Idle,
    /// Waiting for the platform to answer an open request.
    Acquiring,
    Streaming,
    Captured,
}

enum State<S> {
    Idle,
    Acquiring,
    Streaming(S),
    Captured(CapturedImage),
}

/// Camera capture widget state.
pub struct CameraCapture<S: VideoStream> {
    state: State<S>,
    error: Option<CameraError>,
}

impl<S: VideoStream> CameraCapture<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { state: State::Idle, error: None }
    }

    /// Start in `Captured` holding a previously taken image.
    #[must_use]
    pub fn restore(image: CapturedImage) -> Self {
        Self { state: State::Captured(image), error: None }
    }

    #[must_use]
    pub fn phase(&self) -> CameraPhase {
        match self.state {
            State::Idle => CameraPhase::Idle,
            State::Acquiring => CameraPhase::Acquiring,
            State::Streaming(_) => CameraPhase::Streaming,
            State::Captured(_) => CameraPhase::Captured,
        }
    }

    /// Message for the most recent failed attempt.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(CameraError::user_message)
    }

    #[must_use]
    pub fn image(&self) -> Option<&CapturedImage> {
        match &self.state {
            State::Captured(image) => Some(image),
            _ => None,
        }
    }

    /// Start an acquisition attempt and move to `Acquiring`. Clears the
    /// previous attempt's error and returns the camera to ask for.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidTransition`] unless idle, including
    /// while an earlier request is still outstanding.
    pub fn begin(&mut self) -> Result<FacingMode, CaptureError> {
        self.expect_phase(CameraPhase::Idle, "open camera")?;
        self.state = State::Acquiring;
        self.error = None;
        Ok(FacingMode::Environment)
    }

    /// Deliver the outcome of an acquisition started with [`Self::begin`].
    ///
    /// A stream that arrives after the request was abandoned is stopped at
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Camera`] if acquisition failed (the error is also
    /// kept for display), or [`CaptureError::InvalidTransition`] unless
    /// acquiring.
    pub fn attach(&mut self, result: Result<S, CameraError>) -> Result<(), CaptureError> {
        if let Err(invalid) = self.expect_phase(CameraPhase::Acquiring, "attach stream") {
            if let Ok(mut stream) = result {
                stream.stop();
            }
            return Err(invalid);
        }
        match result {
            Ok(stream) => {
                self.state = State::Streaming(stream);
                Ok(())
            }
            Err(e) => {
                self.state = State::Idle;
                self.error = Some(e.clone());
                Err(CaptureError::Camera(e))
            }
        }
    }

    /// Snapshot the live frame, release the stream, and keep the image.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidTransition`] unless streaming, or
    /// [`CaptureError::Camera`] if encoding fails (the stream keeps running).
    pub fn take_photo(&mut self) -> Result<CapturedImage, CaptureError> {
        let State::Streaming(stream) = &self.state else {
            return Err(self.invalid("take photo"));
        };
        let image = match stream.snapshot(JPEG_QUALITY) {
            Ok(image) => image,
            Err(e) => {
                self.error = Some(e.clone());
                return Err(e.into());
            }
        };
        if let State::Streaming(mut stream) = std::mem::replace(&mut self.state, State::Captured(image.clone())) {
            stream.stop();
        }
        self.error = None;
        Ok(image)
    }

    /// Stop streaming without taking a photo.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidTransition`] unless streaming.
    pub fn cancel(&mut self) -> Result<(), CaptureError> {
        self.expect_phase(CameraPhase::Streaming, "cancel")?;
        self.release();
        Ok(())
    }

    /// Discard the captured image.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidTransition`] unless an image is held.
    pub fn clear(&mut self) -> Result<(), CaptureError> {
        self.expect_phase(CameraPhase::Captured, "clear photo")?;
        self.state = State::Idle;
        Ok(())
    }

    /// Stop any held stream or abandon a pending request, falling back to
    /// `Idle`. A captured image is kept.
    pub fn release(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Streaming(mut stream) => stream.stop(),
            State::Captured(image) => self.state = State::Captured(image),
            State::Idle | State::Acquiring => {}
        }
    }

    fn expect_phase(&self, phase: CameraPhase, action: &'static str) -> Result<(), CaptureError> {
        if self.phase() == phase { Ok(()) } else { Err(self.invalid(action)) }
    }

    fn invalid(&self, action: &'static str) -> CaptureError {
        CaptureError::InvalidTransition { action, phase: self.phase() }
    }
}

impl<S: VideoStream> Default for CameraCapture<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: VideoStream> Drop for CameraCapture<S> {
    fn drop(&mut self) {
        self.release();
    }
}
