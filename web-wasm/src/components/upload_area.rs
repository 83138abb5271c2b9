//! アップロードエリアコンポーネント

use eco_qnet_common::is_image_media_type;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

/// 画像を1枚受け取る。ドロップは先頭ファイルが image/* の時だけ受け付ける
#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| first_file(&files));

            // 画像以外は黙って無視
            if let Some(file) = file.filter(|f| is_image_media_type(&f.type_())) {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| first_file(&files)) {
            on_file_selected(file);
        }
        // 同じファイルを再選択できるように
        input.set_value("");
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="hidden-input"
            node_ref=input_ref
            on:change=on_change
        />
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drop a camera trap image here or click to browse"</p>
            <p class="text-muted">"Supported: JPEG, PNG, and other image formats"</p>
        </div>
    }
}

fn first_file(files: &FileList) -> Option<File> {
    files.get(0)
}
