use std::time::Duration;

use leptos::prelude::*;

use crate::content::Stat;
use crate::motion::{
    choreography::stats,
    counter::{CountUp, CounterRun, CounterTick},
    presenter::RevealTrigger,
    MotionSettings,
};

use super::animated::{use_reveal, Animated};

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

#[component]
fn StatCard(
    index: usize,
    stat: &'static Stat,
    trigger: ReadSignal<RevealTrigger>,
    settings: MotionSettings,
) -> impl IntoView {
    let motion = stats::card(index);
    let target = stat.target().unwrap_or_default();
    let run = StoredValue::new(CounterRun::new(CountUp::with_steps(
        target,
        settings.counter_steps,
    )));
    let (count, set_count) = signal(0);
    let delay = StoredValue::new(None::<TimeoutHandle>);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    let clear = move || {
        if let Some(handle) = delay.try_get_value().flatten() {
            handle.clear();
        }
        if let Some(handle) = ticker.try_get_value().flatten() {
            handle.clear();
        }
    };

    let tick = move || match run.try_update_value(CounterRun::tick) {
        Some(CounterTick::Show(value)) => set_count.set(value),
        Some(CounterTick::Last(value)) => {
            set_count.set(value);
            clear();
        }
        Some(CounterTick::Idle) | None => {}
    };

    let start_counting = move || {
        if !run.try_update_value(CounterRun::start).unwrap_or_default() {
            return;
        }
        let period = run.with_value(|r| r.interval_ms(settings.counter_duration_ms));
        match set_interval_with_handle(tick, millis(period)) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't start counter for {:?}: {e:?}", stat.label),
        }
    };

    // the counter starts once the card itself has started to appear
    Effect::new(move |_| {
        if !trigger.get().is_fired() || !run.try_update_value(CounterRun::schedule).unwrap_or_default() {
            return;
        }
        match set_timeout_with_handle(start_counting, millis(motion.delay_ms)) {
            Ok(handle) => delay.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't schedule counter for {:?}: {e:?}", stat.label),
        }
    });
    on_cleanup(move || {
        if run.try_update_value(CounterRun::cancel).unwrap_or(true) {
            clear();
        }
    });

    view! {
        <Animated
            motion
            trigger
            class="flex flex-col items-center p-6 rounded-2xl bg-[#1E293B] border border-[#334155]"
        >
            <span class="text-4xl font-bold text-[#6366F1]">
                {move || count.get()}
                {stat.suffix().to_string()}
            </span>
            <span class="mt-2 text-sm text-[#94A3B8]">{stat.label.clone()}</span>
        </Animated>
    }
}

#[component]
pub fn StatsSection(
    stats: &'static [Stat],
    #[prop(into)] is_visible: Signal<bool>,
    settings: MotionSettings,
) -> impl IntoView {
    let trigger = use_reveal("stats", is_visible);
    view! {
        <section id="stats" class="px-6 py-16">
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-5xl mx-auto">
                {stats
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| view! { <StatCard index stat trigger settings /> })
                    .collect_view()}
            </div>
        </section>
    }
}
