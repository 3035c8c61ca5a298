use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::contact::LinkLauncher;
use crate::content::SocialLink;
use crate::motion::choreography::footer;

use super::animated::{use_reveal, Animated};
use super::launcher::BrowserLauncher;

fn year_of(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|dt| dt.year())
}

/// Copyright year, taken from when the site was built.
fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

#[component]
pub fn Footer(
    name: &'static str,
    socials: &'static [SocialLink],
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let trigger = use_reveal("footer", is_visible);
    view! {
        <footer class="px-6 py-12 border-t border-[#1E293B]">
            <Animated
                motion=footer::BODY
                trigger
                class="flex flex-col items-center gap-4 max-w-6xl mx-auto"
            >
                <div class="flex gap-4">
                    {socials
                        .iter()
                        .map(|social| {
                            view! {
                                <button
                                    title=social.label.clone()
                                    class="flex items-center justify-center w-10 h-10 rounded-full bg-[#1E293B] hover:bg-[#334155] text-lg"
                                    on:click=move |_| BrowserLauncher.open(&social.url)
                                >
                                    {social.icon.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-[#64748B]">
                    {format!("© {} {name}. All rights reserved.", copyright_year())}
                </p>
                <p class="text-xs text-[#475569]">"Built with Rust and Leptos"</p>
            </Animated>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of_build_stamp() {
        assert_eq!(year_of("2025-03-14T09:26:53.589793+00:00"), Some(2025));
        assert_eq!(year_of("not a date"), None);
        assert!(copyright_year() >= 2024);
    }
}
