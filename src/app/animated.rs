use leptos::prelude::*;

use crate::motion::{
    choreography::ElementMotion,
    presenter::{sample, RevealTrigger},
};

/// Latest animation-frame timestamp, shared by every presenter on the page.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock(Signal<f64>);

impl FrameClock {
    pub fn provide() -> Self {
        let (now, set_now) = signal(0.0);
        // no-op while rendering on the server; the loop runs until the page
        // unmounts, so its pause/resume controls go unused
        let _frame_loop = leptos_use::use_raf_fn(move |args| set_now.set(args.timestamp));
        let clock = Self(now.into());
        provide_context(clock);
        clock
    }

    pub fn track(&self) {
        self.0.track();
    }
}

pub fn use_frame_clock() -> FrameClock {
    expect_context::<FrameClock>()
}

/// Current time on the frame clock's timescale. The first frame may not
/// have ticked yet when a section fires at mount, so read the wall clock
/// directly where there is one.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    if let Some(performance) = window().performance() {
        return performance.now();
    }
    use_context::<FrameClock>()
        .map(|clock| clock.0.get_untracked())
        .unwrap_or_default()
}

/// Latch a section's trigger the first time `is_visible` turns true.
pub fn use_reveal(name: &'static str, is_visible: Signal<bool>) -> ReadSignal<RevealTrigger> {
    let (trigger, set_trigger) = signal(RevealTrigger::Pending);
    Effect::new(move |_| {
        let visible = is_visible.get();
        let mut current = trigger.get_untracked();
        if current.on_visibility_change(visible, now_ms()) {
            log::debug!("{name}: entrance animation started");
            set_trigger.set(current);
        }
    });
    trigger
}

/// Inline style of one element; stops following the clock once settled.
pub fn motion_style(motion: Signal<ElementMotion>, trigger: ReadSignal<RevealTrigger>) -> Memo<String> {
    let clock = use_frame_clock();
    Memo::new(move |_| {
        let motion = motion.get();
        let trigger = trigger.get();
        let now = now_ms();
        if let Some(at) = trigger.fired_at() {
            if now - at < motion.total_ms() {
                clock.track();
            }
        }
        sample(&motion, trigger, now).to_css()
    })
}

#[component]
pub fn Animated(
    #[prop(into)] motion: Signal<ElementMotion>,
    trigger: ReadSignal<RevealTrigger>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let style = motion_style(motion, trigger);
    view! {
        <div class=class style=move || style.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    trigger: ReadSignal<RevealTrigger>,
    label: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Animated
            motion=crate::motion::choreography::SECTION_HEADER
            trigger
            class="flex flex-col items-center text-center mb-10"
        >
            <span class="text-xs font-semibold uppercase tracking-[0.2em] text-[#6366F1] mb-2">
                {label}
            </span>
            <h2 class="text-3xl md:text-4xl font-bold text-[#F8FAFC] mb-3">{title}</h2>
            <p class="max-w-xl text-base text-[#94A3B8]">{description}</p>
        </Animated>
    }
}
