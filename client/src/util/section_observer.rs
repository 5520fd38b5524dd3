//! Viewport-intersection watcher for page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs one `IntersectionObserver` over every section element present in
//! the document. The trigger band starts 20% below the top of the viewport
//! and ends 70% above the bottom, so a section activates once it reaches
//! the upper part of the screen. Dropping the handle disconnects the
//! observer and releases the JS callback.

#[cfg(test)]
#[path = "section_observer_test.rs"]
mod section_observer_test;

use crate::state::section::SectionId;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// `rootMargin` for the observer.
pub const ROOT_MARGIN: &str = "-20% 0px -70% 0px";

/// Any overlap with the trigger band counts as intersecting.
pub const THRESHOLD: f64 = 0.0;

/// Live observer. Disconnects on drop.
pub struct SectionObserver {
    observed: Vec<SectionId>,
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl SectionObserver {
    /// Observe `sections`, delivering each batch of `(element_id,
    /// is_intersecting)` entries to `on_batch` in delivery order.
    ///
    /// Sections without a matching element are skipped. Returns `None` when
    /// there is no document or the browser refuses to create the observer.
    pub fn install<F>(sections: &[SectionId], on_batch: F) -> Option<Self>
    where
        F: FnMut(Vec<(String, bool)>) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut on_batch = on_batch;
            let document = web_sys::window()?.document()?;

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    let batch = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                        .map(|entry| (entry.target().id(), entry.is_intersecting()))
                        .collect::<Vec<_>>();
                    on_batch(batch);
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(ROOT_MARGIN);
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
            let observer =
                match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                    Ok(observer) => observer,
                    Err(e) => {
                        log::warn!("intersection observer unavailable: {e:?}");
                        return None;
                    }
                };

            let mut observed = Vec::with_capacity(sections.len());
            for &section in sections {
                match document.get_element_by_id(section.as_str()) {
                    Some(el) => {
                        observer.observe(&el);
                        observed.push(section);
                    }
                    None => log::debug!("section #{section} not in document; skipped"),
                }
            }
            Some(Self { observed, observer, _callback: callback })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (sections, on_batch);
            None
        }
    }

    /// Sections that had an element at install time.
    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        self.observer.disconnect();
    }
}
