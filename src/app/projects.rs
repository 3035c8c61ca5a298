use leptos::prelude::*;
use leptos_use::use_window_size;

use crate::content::Project;
use crate::motion::choreography::{grid_columns, projects};

use super::animated::{use_reveal, Animated, SectionHeader};

#[component]
pub fn ProjectsSection(
    projects: &'static [Project],
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let trigger = use_reveal("projects", is_visible);
    let size = use_window_size();
    let columns = Memo::new(move |_| grid_columns(size.width.get()));

    view! {
        <section id="projects" class="px-6 py-20">
            <SectionHeader
                trigger
                label="Portfolio"
                title="Featured Projects"
                description="A selection of apps I've designed, built and shipped."
            />
            <div class=format!("{} gap-6 max-w-6xl mx-auto", projects::GRID_CLASS)>
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        let motion = Signal::derive(move || projects::card(index, columns.get()));
                        let accent = project.color.clone();
                        view! {
                            <Animated
                                motion
                                trigger
                                class="flex flex-col p-6 rounded-2xl bg-[#1E293B] border border-[#334155]"
                            >
                                <div
                                    class="h-1 w-12 rounded-full mb-4"
                                    style=format!("background-color: {accent};")
                                ></div>
                                <h3 class="text-lg font-semibold mb-2">{project.title.clone()}</h3>
                                <p class="flex-grow text-sm text-[#94A3B8] leading-relaxed mb-4">
                                    {project.description.clone()}
                                </p>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <span
                                                    class="px-2 py-0.5 rounded text-xs"
                                                    style=format!("color: {accent}; background-color: {accent}1A;")
                                                >
                                                    {tag.clone()}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Animated>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
