//! Same-document auth-change signalling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Code that writes or clears session keys, including the external login and
//! register pages, dispatches [`AUTH_STATUS_CHANGE`] on `document`. The event
//! does not bubble, so [`forward_to_window`] installs one `document` listener
//! that re-raises it on `window`, where every mounted header listens (next to
//! the cross-tab `storage` event) and re-checks token presence.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Name of the custom DOM event.
pub const AUTH_STATUS_CHANGE: &str = "authStatusChange";

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static FORWARDER_INSTALLED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// True for the first caller on this thread only.
#[cfg(any(test, feature = "hydrate"))]
fn claim_forwarder() -> bool {
    !FORWARDER_INSTALLED.with(|installed| installed.replace(true))
}

#[cfg(feature = "hydrate")]
fn dispatch_on(target: &web_sys::EventTarget) {
    match web_sys::CustomEvent::new(AUTH_STATUS_CHANGE) {
        Ok(event) => {
            let _ = target.dispatch_event(&event);
        }
        Err(e) => log::warn!("could not create {AUTH_STATUS_CHANGE} event: {e:?}"),
    }
}

/// Notify listeners in this document that session keys changed.
pub fn publish_auth_change() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            dispatch_on(&document);
        }
    }
}

/// Re-raise `document`-level auth changes on `window`.
///
/// Installed once for the page lifetime; later calls are no-ops.
pub fn forward_to_window() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        if !claim_forwarder() {
            return;
        }

        let forward = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| dispatch_on(&window));
        match document.add_event_listener_with_callback(AUTH_STATUS_CHANGE, forward.as_ref().unchecked_ref()) {
            Ok(()) => forward.forget(),
            Err(e) => log::warn!("could not listen for {AUTH_STATUS_CHANGE} on document: {e:?}"),
        }
    }
}
