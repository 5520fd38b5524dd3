//! Page footer with social links and copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::LinkGlyph;

pub fn copyright_line(year: u16, name: &str) -> String {
    format!("© {year} {name}. Built with ❤️ using Rust and Leptos")
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let (profile, socials) = content.with_value(|c| (c.profile.clone(), c.socials.clone()));
    let copyright = copyright_line(profile.copyright_year, &profile.name);

    let links = socials
        .into_iter()
        .map(|link| {
            let (target, rel) = link.anchor_attrs();
            view! {
                <a class="footer__social" href=link.href target=target rel=rel aria-label=link.label>
                    <LinkGlyph kind=link.kind/>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer__content">
                <div class="footer__brand">
                    <span>{profile.name}</span>
                </div>
                <div class="footer__socials">{links}</div>
                <p class="footer__copyright">{copyright}</p>
            </div>
        </footer>
    }
}
