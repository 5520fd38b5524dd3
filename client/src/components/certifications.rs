//! Certification cards.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::IconGlyph;
use crate::components::section_title::SectionTitle;
use crate::content::Icon;
use crate::state::section::SectionId;

#[component]
pub fn Certifications() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let cards = content
        .with_value(|c| c.certifications.clone())
        .into_iter()
        .map(|cert| {
            view! {
                <div class="card certification">
                    <div class="certification__icon">
                        <IconGlyph icon=Icon::Award/>
                    </div>
                    <div>
                        <h3 class="certification__title">{cert}</h3>
                        <div class="certification__verified">
                            <div class="status-dot"></div>
                            <span>"Verified Certification"</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Certifications.as_str() class="section">
            <SectionTitle
                title="Certifications & Learning"
                subtitle="Continuous growth and professional development"
            />
            <div class="grid grid-3">{cards}</div>
        </section>
    }
}
