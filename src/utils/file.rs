//! Browser `File` handles as a [`FileSource`].

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::core::FileSource;
use crate::core::error::FileReadError;

impl FileSource for web_sys::File {
    fn display_name(&self) -> String {
        self.name()
    }

    fn size(&self) -> Option<u64> {
        let size = web_sys::Blob::size(self);
        (size.is_finite() && size >= 0.0).then_some(size as u64)
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(read_error)?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Convert a rejected read promise into a [`FileReadError`].
fn read_error(err: JsValue) -> FileReadError {
    match err.dyn_into::<web_sys::DomException>() {
        Ok(ex) => FileReadError::from_dom_exception(&ex.name(), &ex.message()),
        Err(other) => FileReadError::Io(
            other
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
    }
}
