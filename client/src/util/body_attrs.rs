//! Removes attributes that browser extensions inject into `<body>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Extensions such as ColorZilla write `cz-shortcut-listen` onto `<body>`
//! before hydration runs, so the live DOM no longer matches the server HTML
//! and hydration logs a mismatch. Cleanup is client-only; server builds never
//! see a DOM.
//!
//! DESIGN
//! ======
//! `BodyCleanupGuard::install` is the single entry point. At most one guard is
//! live per thread (the browser main thread in practice). While it lives, a
//! `MutationObserver` strips the listed attributes whenever they reappear.
//! Dropping the guard disconnects the observer and frees the registration.

use std::cell::Cell;

/// Attributes removed from `<body>` on install and whenever re-added.
pub const UNEXPECTED_BODY_ATTRIBUTES: &[&str] = &["cz-shortcut-listen"];

thread_local! {
    static REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Whether a cleanup guard is currently installed on this thread.
pub fn is_registered() -> bool {
    REGISTERED.with(Cell::get)
}

/// Keeps body attribute cleanup active until dropped.
#[must_use = "dropping the guard stops the cleanup immediately"]
pub struct BodyCleanupGuard {
    #[cfg(feature = "hydrate")]
    observer: Option<dom::AttributeObserver>,
}

impl BodyCleanupGuard {
    /// Strip the attributes now and keep stripping them until the guard drops.
    ///
    /// Returns `None` when another guard is already installed.
    pub fn install() -> Option<Self> {
        if REGISTERED.with(|r| r.replace(true)) {
            return None;
        }

        #[cfg(feature = "hydrate")]
        {
            dom::strip_body_attributes(UNEXPECTED_BODY_ATTRIBUTES);
            let observer = dom::AttributeObserver::watch(UNEXPECTED_BODY_ATTRIBUTES);
            if observer.is_none() {
                log::warn!("body attribute observer unavailable; only the initial cleanup ran");
            }
            Some(Self { observer })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Some(Self {})
        }
    }
}

impl Drop for BodyCleanupGuard {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        drop(self.observer.take());
        REGISTERED.with(|r| r.set(false));
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};

    fn body() -> Option<HtmlElement> {
        web_sys::window()?.document()?.body()
    }

    pub fn strip_body_attributes(attributes: &[&str]) {
        let Some(body) = body() else {
            return;
        };
        for attr in attributes {
            if body.has_attribute(attr) {
                let _ = body.remove_attribute(attr);
            }
        }
    }

    /// Connected observer plus the JS callback it calls into.
    pub struct AttributeObserver {
        observer: MutationObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
    }

    impl AttributeObserver {
        pub fn watch(attributes: &'static [&'static str]) -> Option<Self> {
            let body = body()?;
            let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
                move |records: js_sys::Array, _observer: MutationObserver| {
                    let readded = records
                        .iter()
                        .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                        .any(|record| {
                            record.type_() == "attributes"
                                && record.attribute_name().is_some_and(|name| attributes.contains(&name.as_str()))
                        });
                    if readded {
                        strip_body_attributes(attributes);
                    }
                },
            );

            let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
            let options = MutationObserverInit::new();
            options.set_attributes(true);
            let filter: js_sys::Array = attributes.iter().map(|a| JsValue::from_str(a)).collect();
            options.set_attribute_filter(&filter);
            observer.observe_with_options(&body, &options).ok()?;

            Some(Self { observer, _callback: callback })
        }
    }

    impl Drop for AttributeObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
#[path = "body_attrs_test.rs"]
mod tests;
