use leptos::{either::Either, prelude::*};

use crate::contact::LinkLauncher;
use crate::content::Profile;
use crate::motion::choreography::hero;

use super::animated::{now_ms, use_frame_clock, use_reveal, Animated};
use super::launcher::BrowserLauncher;

/// Background circles drift at these fractions of the scroll offset.
const PARALLAX_RATES: [f64; 2] = [0.3, -0.2];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
fn PulseDot() -> impl IntoView {
    let clock = use_frame_clock();
    let started = StoredValue::new(None::<f64>);
    Effect::new(move |_| started.set_value(Some(now_ms())));

    let style = move || {
        clock.track();
        let scale = started
            .get_value()
            .map_or(hero::PULSE.rest, |start| hero::PULSE.sample(now_ms() - start));
        format!("transform: scale({scale:.4});")
    };

    view! { <span class="inline-block w-2 h-2 rounded-full bg-[#10B981]" style=style></span> }
}

#[component]
pub fn HeroSection(
    profile: &'static Profile,
    #[prop(into)] is_visible: Signal<bool>,
    scroll_y: ReadSignal<f64>,
    on_get_in_touch: Callback<()>,
) -> impl IntoView {
    let trigger = use_reveal("hero", is_visible);
    let parallax = move |rate: f64| {
        move || format!("transform: translateY({:.1}px);", scroll_y.get() * rate)
    };

    view! {
        <section
            id="hero"
            class="relative flex flex-col items-center justify-center min-h-screen px-6 overflow-hidden"
        >
            <div
                class="absolute -top-24 -left-24 w-72 h-72 rounded-full bg-[#6366F1]/20 blur-3xl"
                style=parallax(PARALLAX_RATES[0])
            ></div>
            <div
                class="absolute -bottom-24 -right-24 w-96 h-96 rounded-full bg-[#EC4899]/10 blur-3xl"
                style=parallax(PARALLAX_RATES[1])
            ></div>
            <Animated
                motion=hero::BADGE
                trigger
                class="flex items-center gap-2 px-4 py-1 mb-6 rounded-full border border-[#334155] bg-[#1E293B]"
            >
                <PulseDot />
                <span class="text-sm text-[#94A3B8]">"Available for opportunities"</span>
            </Animated>
            <Animated motion=hero::PROFILE trigger class="mb-6">
                {match profile.photo.as_ref() {
                    Some(src) => {
                        Either::Left(
                            view! {
                                <img
                                    src=src.clone()
                                    alt=profile.name.clone()
                                    class="w-36 h-36 rounded-full object-cover border-4 border-[#6366F1]"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="flex items-center justify-center w-36 h-36 rounded-full border-4 border-[#6366F1] bg-[#1E293B] text-4xl font-bold">
                                    {initials(&profile.name)}
                                </div>
                            },
                        )
                    }
                }}
            </Animated>
            <Animated motion=hero::TITLE trigger>
                <h1 class="text-4xl md:text-6xl font-bold text-center mb-3">{profile.name.clone()}</h1>
            </Animated>
            <Animated motion=hero::ROLE trigger>
                <p class="text-lg md:text-xl font-medium text-[#6366F1] text-center mb-4">
                    {profile.role.clone()}
                </p>
            </Animated>
            <Animated motion=hero::DESCRIPTION trigger class="max-w-2xl">
                <p class="text-base text-[#94A3B8] text-center leading-relaxed mb-8">
                    {profile.description.clone()}
                </p>
            </Animated>
            <Animated motion=hero::BUTTONS trigger class="flex flex-wrap justify-center gap-4">
                <button
                    class="px-6 py-3 rounded-lg font-semibold bg-[#6366F1] hover:bg-[#4F46E5]"
                    on:click=move |_| on_get_in_touch.run(())
                >
                    "Get In Touch"
                </button>
                <button
                    class="px-6 py-3 rounded-lg font-semibold border border-[#6366F1] text-[#6366F1] hover:bg-[#6366F1]/10"
                    on:click=move |_| BrowserLauncher.open(&profile.cv_url)
                >
                    "Download CV"
                </button>
            </Animated>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Aayush Shrestha"), "AS");
        assert_eq!(initials("  cher "), "c");
        assert_eq!(initials("Mary Ann Evans"), "MA");
    }
}
