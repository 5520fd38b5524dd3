//! The one-page portfolio.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section in document order and owns the section tracker.
//! The tracker is installed after mount, once the section elements exist,
//! and is released when the page's reactive owner is disposed.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::certifications::Certifications;
use crate::components::contact::Contact;
use crate::components::experience::ExperienceTimeline;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::section::{SectionId, SectionTracker};
use crate::util::section_observer::SectionObserver;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let active = use_active_section();

    view! {
        <div class="portfolio-container">
            <Navbar active=active/>
            <main>
                <Hero/>
                <About/>
                <ExperienceTimeline/>
                <Projects/>
                <Skills/>
                <Certifications/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}

/// Install the section observer and hand out the read side of the active
/// section. The write side stays inside the observer callback, and the
/// observer is released when the page unmounts.
fn use_active_section() -> ReadSignal<SectionId> {
    let (active, set_active) = signal(SectionId::default());
    let observer = StoredValue::new_local(None::<SectionObserver>);

    Effect::new(move |_| {
        let mut tracker = SectionTracker::default();
        let installed = SectionObserver::install(&SectionId::ALL, move |batch| {
            if tracker.observe(batch.iter().map(|(id, hit)| (id.as_str(), *hit))) {
                set_active.set(tracker.active());
            }
        });
        if let Some(handle) = &installed {
            log::debug!("observing {} of {} sections", handle.observed().len(), SectionId::ALL.len());
        }
        observer.set_value(installed);
    });

    on_cleanup(move || {
        // Dropping the handle disconnects the observer.
        let _ = observer.try_update_value(Option::take);
    });

    active
}
