use std::time::Duration;

use leptos::{either::Either, ev, html, prelude::*};
use leptos_meta::Title;

use crate::content::portfolio;
use crate::motion::{
    scroll::ScrollHost,
    section::{SectionKey, VisibilityMap, VisibilityTracker},
    MotionSettings,
};

use super::animated::{now_ms, FrameClock};
use super::contact::ContactSection;
use super::experience::ExperienceSection;
use super::footer::Footer;
use super::hero::HeroSection;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::stats::StatsSection;

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Smoothly scroll the window so `y` is at the top of the viewport.
fn scroll_to_offset(y: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let content = match portfolio() {
        Ok(content) => content,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-[#EF4444]">"This portfolio couldn't be loaded."</p>
            });
        }
    };
    let settings: MotionSettings = content.settings;

    FrameClock::provide();

    let (visibility, set_visibility) = signal(VisibilityMap::default());
    let (scroll_y, set_scroll_y) = signal(0.0);
    let host = StoredValue::new(ScrollHost::new(settings.scroll_throttle_ms));
    let tracker = StoredValue::new(None::<VisibilityTracker>);
    let flush_scheduled = StoredValue::new(false);
    let contact_ref = NodeRef::<html::Div>::new();

    // recompute flags after the scroll handler has returned
    let run_tracker = move |offset: f64| {
        set_timeout(
            move || {
                let changed = tracker
                    .try_update_value(|t| t.as_mut().and_then(|t| t.update(offset)))
                    .flatten();
                if let Some(map) = changed {
                    set_visibility.set(map);
                }
            },
            Duration::ZERO,
        );
    };

    let flush = move || {
        flush_scheduled.set_value(false);
        if let Some(offset) = host.try_update_value(|h| h.flush(now_ms())).flatten() {
            run_tracker(offset);
        }
    };

    let on_scroll = move || {
        let offset = scroll_offset();
        let now = now_ms();
        set_scroll_y.set(offset);
        match host.try_update_value(|h| h.on_scroll(offset, now)).flatten() {
            Some(offset) => run_tracker(offset),
            None => {
                let wait = host.with_value(|h| h.flush_wait_ms(now));
                if let (Some(wait), false) = (wait, flush_scheduled.get_value()) {
                    flush_scheduled.set_value(true);
                    // a millisecond late so the throttle is open when it lands
                    set_timeout(flush, Duration::from_secs_f64((wait + 1.0) / 1000.0));
                }
            }
        }
    };

    // mount: size the thresholds and catch up with a restored scroll position
    Effect::new(move |_| {
        let height = viewport_height();
        log::debug!("sizing section thresholds for a {height}px viewport");
        tracker.set_value(Some(VisibilityTracker::new(height)));
        let offset = scroll_offset();
        set_scroll_y.set(offset);
        run_tracker(offset);

        let handle = window_event_listener(ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    });

    if settings.recompute_on_resize {
        let size = leptos_use::use_window_size();
        Effect::watch(
            move || size.height.get(),
            move |height, _, _| {
                let height = *height;
                if height.is_finite() {
                    tracker.update_value(|t| {
                        if let Some(t) = t.as_mut() {
                            t.resize(height);
                        }
                    });
                    run_tracker(scroll_offset());
                }
            },
            false,
        );
    }

    // the contact anchor is taken from the first layout only
    Effect::new(move |_| {
        if let Some(el) = contact_ref.get() {
            let y = el.get_bounding_client_rect().top() + scroll_offset();
            if host.try_update_value(|h| h.on_contact_layout(y)).unwrap_or_default() {
                log::debug!("contact section measured at {y}px");
            }
        }
    });

    let scroll_to_contact = Callback::new(move |_: ()| {
        let (target, measured) = host.with_value(|h| (h.contact_target(), h.contact_anchor().is_some()));
        if !measured {
            log::debug!("contact section not laid out yet, scrolling to the top");
        }
        scroll_to_offset(target);
    });

    let flag = move |key: SectionKey| Signal::derive(move || visibility.get().presenter_flag(key));

    Either::Left(view! {
        <Title text="Portfolio" />
        <div class="min-h-screen w-full bg-[#0F172A] text-[#F8FAFC]">
            <HeroSection
                profile=&content.profile
                is_visible=flag(SectionKey::Hero)
                scroll_y=scroll_y
                on_get_in_touch=scroll_to_contact
            />
            <StatsSection
                stats=&content.stats
                is_visible=flag(SectionKey::Stats)
                settings
            />
            <SkillsSection categories=&content.skills is_visible=flag(SectionKey::Skills) />
            <ExperienceSection
                entries=&content.experience
                is_visible=flag(SectionKey::Experience)
            />
            <ProjectsSection projects=&content.projects is_visible=flag(SectionKey::Projects) />
            <div node_ref=contact_ref id={SectionKey::Contact.id()}>
                <ContactSection info=&content.contact is_visible=flag(SectionKey::Contact) />
            </div>
            <Footer
                name=&content.profile.name
                socials=&content.socials
                is_visible=flag(SectionKey::Footer)
            />
        </div>
    })
}
