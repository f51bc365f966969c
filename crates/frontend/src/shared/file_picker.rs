//! Reads `(name, size)` pairs out of file inputs and drop events.
//! File contents are never read.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

fn describe(list: &FileList) -> Vec<(String, u64)> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| (file.name(), file.size() as u64))
        .collect()
}

/// Files chosen in an `<input type="file">`; the input is cleared so the same
/// file can be picked again
pub fn picked_files(ev: &Event) -> Vec<(String, u64)> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = input.files().map(|list| describe(&list)).unwrap_or_default();
    input.set_value("");
    files
}

pub fn dropped_files(ev: &DragEvent) -> Vec<(String, u64)> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| describe(&list))
        .unwrap_or_default()
}
