use leptos::prelude::*;

use crate::content::SkillCategory;
use crate::motion::{choreography::skills, presenter::RevealTrigger};

use super::animated::{use_reveal, Animated, SectionHeader};

#[component]
fn SkillCard(
    index: usize,
    category: &'static SkillCategory,
    trigger: ReadSignal<RevealTrigger>,
) -> impl IntoView {
    let accent = category.color.clone();
    view! {
        <Animated
            motion=skills::category(index)
            trigger
            class="p-6 rounded-2xl bg-[#1E293B] border border-[#334155]"
        >
            <div class="flex items-center gap-3 mb-4">
                <span
                    class="flex items-center justify-center w-10 h-10 rounded-lg text-xl"
                    style=format!("background-color: {accent}22;")
                >
                    {category.icon.clone()}
                </span>
                <h3 class="text-lg font-semibold" style=format!("color: {accent};")>
                    {category.title.clone()}
                </h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {category
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <Animated
                                motion=skills::tag(index, i)
                                trigger
                                class="px-3 py-1 rounded-full text-xs bg-[#0F172A] border border-[#334155] text-[#CBD5E1]"
                            >
                                {item.clone()}
                            </Animated>
                        }
                    })
                    .collect_view()}
            </div>
        </Animated>
    }
}

#[component]
pub fn SkillsSection(
    categories: &'static [SkillCategory],
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let trigger = use_reveal("skills", is_visible);
    view! {
        <section id="skills" class="px-6 py-20">
            <SectionHeader
                trigger
                label="Expertise"
                title="Skills & Technologies"
                description="The languages, frameworks and tools I build with every day."
            />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-6xl mx-auto">
                {categories
                    .iter()
                    .enumerate()
                    .map(|(index, category)| view! { <SkillCard index category trigger /> })
                    .collect_view()}
            </div>
        </section>
    }
}
