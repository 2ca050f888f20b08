//! Browser platform glue: persistent storage, the debounce timer, and
//! blob downloads.
//!
//! On the web target these go through `web-sys`. Non-web builds get
//! in-memory/no-op fallbacks so native `cargo test` works.

/// Which browser store a key lives in. `Local` survives the tab,
/// `Session` is per-tab (used for the one-shot alert flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Local,
    Session,
}

#[cfg(feature = "web")]
mod imp {
    use super::Store;
    use wasm_bindgen::JsCast;

    fn storage(store: Store) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match store {
            Store::Local => window.local_storage().ok().flatten(),
            Store::Session => window.session_storage().ok().flatten(),
        }
    }

    pub fn get(store: Store, key: &str) -> Option<String> {
        storage(store)?.get_item(key).ok().flatten()
    }

    pub fn set(store: Store, key: &str, value: &str) {
        if let Some(s) = storage(store) {
            let _ = s.set_item(key, value);
        }
    }

    pub fn remove(store: Store, key: &str) {
        if let Some(s) = storage(store) {
            let _ = s.remove_item(key);
        }
    }

    pub async fn sleep_ms(ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    /// Materialize the bytes as an object URL, trigger a save under the
    /// given filename, and release the URL once the click is dispatched.
    pub fn save_file(nombre: &str, content_type: &str, bytes: &[u8]) -> Result<(), String> {
        let window = web_sys::window().ok_or("sin ventana del navegador")?;
        let document = window.document().ok_or("sin documento")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let opciones = web_sys::BlobPropertyBag::new();
        opciones.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opciones)
            .map_err(|_| "no se pudo crear el blob".to_string())?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "no se pudo crear el object URL".to_string())?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "no se pudo crear el enlace".to_string())?
            .dyn_into()
            .map_err(|_| "no se pudo crear el enlace".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(nombre);

        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
        }
        anchor.click();
        anchor.remove();

        // Release the temporary object reference once the save is triggered.
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
}

#[cfg(not(feature = "web"))]
mod imp {
    use super::Store;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static LOCAL: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
        static SESSION: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    fn with<R>(store: Store, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        match store {
            Store::Local => LOCAL.with(|m| f(&mut m.borrow_mut())),
            Store::Session => SESSION.with(|m| f(&mut m.borrow_mut())),
        }
    }

    pub fn get(store: Store, key: &str) -> Option<String> {
        with(store, |m| m.get(key).cloned())
    }

    pub fn set(store: Store, key: &str, value: &str) {
        with(store, |m| {
            m.insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(store: Store, key: &str) {
        with(store, |m| {
            m.remove(key);
        });
    }

    pub async fn sleep_ms(_ms: u32) {}

    pub fn save_file(_nombre: &str, _content_type: &str, _bytes: &[u8]) -> Result<(), String> {
        Ok(())
    }
}

pub fn get(store: Store, key: &str) -> Option<String> {
    imp::get(store, key)
}

pub fn set(store: Store, key: &str, value: &str) {
    imp::set(store, key, value)
}

pub fn remove(store: Store, key: &str) {
    imp::remove(store, key)
}

/// Suspend the current task for `ms` milliseconds. Dropping the future
/// cancels the timer, which is what makes the debounce window abortable.
pub async fn sleep_ms(ms: u32) {
    imp::sleep_ms(ms).await
}

pub fn save_file(nombre: &str, content_type: &str, bytes: &[u8]) -> Result<(), String> {
    imp::save_file(nombre, content_type, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_por_clave() {
        set(Store::Local, "k", "v");
        assert_eq!(get(Store::Local, "k").as_deref(), Some("v"));
        remove(Store::Local, "k");
        assert_eq!(get(Store::Local, "k"), None);
    }

    #[test]
    fn los_stores_no_se_mezclan() {
        set(Store::Local, "flag", "a");
        set(Store::Session, "flag", "b");
        assert_eq!(get(Store::Local, "flag").as_deref(), Some("a"));
        assert_eq!(get(Store::Session, "flag").as_deref(), Some("b"));
        remove(Store::Session, "flag");
        assert_eq!(get(Store::Local, "flag").as_deref(), Some("a"));
        remove(Store::Local, "flag");
    }

    #[test]
    fn save_file_fallback_no_falla() {
        assert!(save_file("a.pdf", "application/pdf", &[1, 2, 3]).is_ok());
    }
}
