use leptos::prelude::*;

use crate::content::ExperienceEntry;
use crate::motion::choreography::experience;

use super::animated::{use_reveal, Animated, SectionHeader};

#[component]
pub fn ExperienceSection(
    entries: &'static [ExperienceEntry],
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let trigger = use_reveal("experience", is_visible);
    view! {
        <section id="experience" class="px-6 py-20">
            <SectionHeader
                trigger
                label="Career"
                title="Work Experience"
                description="Where I've been building mobile apps, and what I did there."
            />
            <div class="flex flex-col gap-6 max-w-4xl mx-auto">
                {entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <Animated
                                motion=experience::card(index)
                                trigger
                                class="relative p-6 rounded-2xl bg-[#1E293B] border-l-4 border-[#6366F1]"
                            >
                                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-3">
                                    <div>
                                        <h3 class="text-lg font-semibold">{entry.title.clone()}</h3>
                                        <p class="text-[#6366F1] font-medium">{entry.company.clone()}</p>
                                        <p class="text-sm text-[#64748B]">{entry.location.clone()}</p>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class="text-sm text-[#94A3B8]">{entry.period.clone()}</span>
                                        {entry
                                            .is_current
                                            .then(|| {
                                                view! {
                                                    <span class="px-2 py-0.5 rounded-full text-xs font-semibold bg-[#10B981]/20 text-[#10B981]">
                                                        "Current"
                                                    </span>
                                                }
                                            })}
                                    </div>
                                </div>
                                <ul class="list-disc list-inside space-y-1 text-sm text-[#CBD5E1]">
                                    {entry
                                        .responsibilities
                                        .iter()
                                        .map(|line| view! { <li>{line.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </Animated>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
