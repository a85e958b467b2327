//! Photo capture widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `reports` camera machine. The `<video>` element stays mounted
//! (hidden unless streaming) because the browser camera renders into it
//! during acquisition. Photos are handed to the page via `on_capture`; the
//! page owns the image and passes it back in so a remounted widget reopens
//! on the same preview.
//!
//! ERROR HANDLING
//! ==============
//! Acquisition failures show a single inline message and leave the widget
//! idle. The open button stays disabled while a request is pending. Any held
//! stream is released when the widget unmounts.

use leptos::prelude::*;
use reports::{CameraCapture as Capture, CameraPhase, CapturedImage};

use crate::device::camera::{DeviceStream, StreamStorage};

#[component]
pub fn CameraCapture(
    #[prop(into)] image: Signal<Option<CapturedImage>>,
    on_capture: Callback<CapturedImage>,
    on_clear: Callback<()>,
    /// Disables every control, e.g. while the report is being verified.
    #[prop(into, default = Signal::stored(false))]
    locked: Signal<bool>,
) -> impl IntoView {
    let capture = StoredValue::<Capture<DeviceStream>, StreamStorage>::new_with_storage(
        image.get_untracked().map_or_else(Capture::new, Capture::restore),
    );
    let phase = RwSignal::new(capture.with_value(Capture::phase));
    let error = RwSignal::new(None::<&'static str>);
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let sync = move || {
        capture.with_value(|c| {
            phase.set(c.phase());
            error.set(c.error_message());
        });
    };

    let on_open = move |_| {
        let Some(Ok(facing)) = capture.try_update_value(Capture::begin) else {
            return;
        };
        sync();

        let fail = move |e: reports::CameraError| {
            if let Some(Err(e)) = capture.try_update_value(|c| c.attach(Err(e))) {
                leptos::logging::warn!("camera unavailable: {e}");
            }
            sync();
        };

        #[cfg(feature = "hydrate")]
        {
            use reports::Camera as _;

            let Some(video) = video_ref.get_untracked() else {
                fail(reports::CameraError::Unavailable);
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::device::camera::BrowserCamera::new(video).acquire(facing).await;
                match capture.try_update_value(|c| c.attach(result)) {
                    // Unmounted while waiting; the stream was dropped and stopped.
                    None => return,
                    Some(Err(e)) => leptos::logging::warn!("camera unavailable: {e}"),
                    Some(Ok(())) => {}
                }
                sync();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (facing, video_ref);
            fail(reports::CameraError::Unavailable);
        }
    };

    let on_take = move |_| {
        let taken = capture.try_update_value(Capture::take_photo);
        sync();
        match taken {
            Some(Ok(photo)) => on_capture.run(photo),
            Some(Err(e)) => leptos::logging::warn!("capture failed: {e}"),
            None => {}
        }
    };

    let on_cancel = move |_| {
        if let Some(Err(e)) = capture.try_update_value(Capture::cancel) {
            leptos::logging::warn!("cancel failed: {e}");
        }
        sync();
    };

    let on_clear_click = move |_| {
        if capture.try_update_value(Capture::clear).is_some_and(|r| r.is_ok()) {
            sync();
            on_clear.run(());
        }
    };

    on_cleanup(move || capture.update_value(Capture::release));

    let acquiring = move || phase.get() == CameraPhase::Acquiring;
    let preview_src = move || image.get().map(|i| i.as_data_url().to_owned()).unwrap_or_default();

    view! {
        <div class="camera-capture">
            <Show when=move || phase.get() == CameraPhase::Captured>
                <div class="camera-capture__preview">
                    <img src=preview_src alt="Captured"/>
                    <button
                        class="button button--danger camera-capture__clear"
                        aria-label="Remove photo"
                        disabled=move || locked.get()
                        on:click=on_clear_click
                    >
                        "✕"
                    </button>
                </div>
            </Show>
            <div class="camera-capture__live" class:hidden=move || phase.get() != CameraPhase::Streaming>
                <video node_ref=video_ref autoplay="" playsinline="" muted=""></video>
                <div class="camera-capture__actions">
                    <button class="button button--primary" disabled=move || locked.get() on:click=on_take>
                        "📷 Capture Photo"
                    </button>
                    <button class="button button--outline" aria-label="Close camera" on:click=on_cancel>
                        "✕"
                    </button>
                </div>
            </div>
            <Show when=move || matches!(phase.get(), CameraPhase::Idle | CameraPhase::Acquiring)>
                <button
                    class="button button--dashed camera-capture__open"
                    disabled=move || locked.get() || acquiring()
                    on:click=on_open
                >
                    {move || if acquiring() { "Opening camera…" } else { "📷 Open Camera" }}
                </button>
                {move || error.get().map(|message| view! { <p class="camera-capture__error">{message}</p> })}
            </Show>
        </div>
    }
}
