//! Upload page: pick a match video and queue it for coach review.
//!
//! SYSTEM CONTEXT
//! ==============
//! File storage belongs to the hosted backend; this page only validates the
//! selection and records the queued clip locally.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

pub const SUPPORTED_VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "m4v", "webm", "avi"];

/// A file the user picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedClip {
    pub name: String,
    pub size_bytes: u64,
}

/// Where the upload form is in its flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Ready(SelectedClip),
    Rejected(String),
    Queued(SelectedClip),
}

impl UploadStatus {
    /// Status after the user picks `clip`.
    pub fn select(clip: SelectedClip) -> Self {
        if is_supported_video(&clip.name) {
            Self::Ready(clip)
        } else {
            Self::Rejected(format!("{} is not a supported video file", clip.name))
        }
    }

    /// Status after the user submits. Only a ready clip can be queued.
    #[must_use]
    pub fn submit(self) -> Self {
        match self {
            Self::Ready(clip) => Self::Queued(clip),
            other => other,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Case-insensitive extension check against [`SUPPORTED_VIDEO_EXTENSIONS`].
pub fn is_supported_video(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Human-readable size: `"512 B"`, `"1.5 KB"`, `"48.2 MB"`.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let status = RwSignal::new(UploadStatus::Idle);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let size_bytes = file.size().max(0.0) as u64;
                    status.set(UploadStatus::select(SelectedClip { name: file.name(), size_bytes }));
                }
                None => status.set(UploadStatus::Idle),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.update(|s| *s = std::mem::take(s).submit());
    };

    let message = move || match status.get() {
        UploadStatus::Idle => "Choose a match video to get started.".to_owned(),
        UploadStatus::Ready(clip) => format!("{} ({})", clip.name, format_file_size(clip.size_bytes)),
        UploadStatus::Rejected(reason) => reason,
        UploadStatus::Queued(clip) => format!("{} queued for coach review.", clip.name),
    };

    view! {
        <div class="upload-page">
            <h1>"Upload a match"</h1>
            <form class="upload-form" on:submit=on_submit>
                <label class="upload-form__picker">
                    <span>"Video file"</span>
                    <input type="file" accept="video/*" on:change=on_change/>
                </label>
                <p
                    class="upload-form__status"
                    class:upload-form__status--error=move || matches!(status.get(), UploadStatus::Rejected(_))
                >
                    {message}
                </p>
                <button class="btn upload-form__submit" type="submit" disabled=move || !status.get().can_submit()>
                    "Send to coach"
                </button>
            </form>
        </div>
    }
}
