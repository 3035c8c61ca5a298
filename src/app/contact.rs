use leptos::{html, prelude::*};

use crate::contact::{self, LinkLauncher, MISSING_INFORMATION_HINT};
use crate::content::ContactInfo;
use crate::motion::{choreography::contact as motion, presenter::RevealTrigger};

use super::animated::{use_reveal, Animated, SectionHeader};
use super::launcher::{alert, BrowserLauncher};

#[component]
fn ContactItem(
    index: usize,
    trigger: ReadSignal<RevealTrigger>,
    icon: &'static str,
    label: &'static str,
    value: String,
    href: String,
) -> impl IntoView {
    view! {
        <Animated motion=motion::item(index) trigger>
            <button
                class="flex items-center gap-4 w-full p-4 rounded-xl bg-[#1E293B] border border-[#334155] text-left hover:border-[#6366F1]"
                on:click=move |_| BrowserLauncher.open(&href)
            >
                <span class="flex items-center justify-center w-10 h-10 rounded-lg bg-[#6366F1]/20 text-xl">
                    {icon}
                </span>
                <span class="flex flex-col">
                    <span class="text-xs uppercase tracking-wide text-[#64748B]">{label}</span>
                    <span class="text-sm font-medium">{value}</span>
                </span>
            </button>
        </Animated>
    }
}

#[component]
fn ContactForm(recipient: &'static str, trigger: ReadSignal<RevealTrigger>) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let input_class = "w-full px-4 py-3 rounded-lg bg-[#0F172A] border border-[#334155] focus:outline-none focus:ring-2 focus:ring-[#6366F1]";

    view! {
        <Animated
            motion=motion::FORM
            trigger
            class="p-6 rounded-2xl bg-[#1E293B] border border-[#334155]"
        >
            <form
                class="flex flex-col gap-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let value = |r: NodeRef<html::Input>| {
                        r.get_untracked().map(|el| el.value()).unwrap_or_default()
                    };
                    let message = message_ref
                        .get_untracked()
                        .map(|el| el.value())
                        .unwrap_or_default();
                    let sent = contact::send(
                        &BrowserLauncher,
                        recipient,
                        &value(name_ref),
                        &value(email_ref),
                        &value(subject_ref),
                        &message,
                    );
                    if let Err(e) = sent {
                        log::debug!("contact form rejected: {e}");
                        alert(MISSING_INFORMATION_HINT);
                    }
                }
            >
                <input node_ref=name_ref type="text" placeholder="Your Name *" class=input_class />
                <input node_ref=email_ref type="email" placeholder="Your Email *" class=input_class />
                <input node_ref=subject_ref type="text" placeholder="Subject" class=input_class />
                <textarea
                    node_ref=message_ref
                    rows="5"
                    placeholder="Your Message *"
                    class=input_class
                ></textarea>
                <button
                    type="submit"
                    class="px-6 py-3 rounded-lg font-semibold bg-[#6366F1] hover:bg-[#4F46E5]"
                >
                    "Send Message"
                </button>
            </form>
        </Animated>
    }
}

#[component]
pub fn ContactSection(
    info: &'static ContactInfo,
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let trigger = use_reveal("contact", is_visible);
    let items = [
        ("✉️", "Email", info.email.clone(), contact::mailto(&info.email)),
        ("📞", "Phone", info.phone.clone(), contact::tel(&info.phone)),
        ("🔗", "LinkedIn", info.linkedin_label.clone(), info.linkedin_url.clone()),
    ];

    view! {
        <section class="px-6 py-20">
            <SectionHeader
                trigger
                label="Contact"
                title="Get In Touch"
                description="Have a project in mind or just want to say hello? My inbox is open."
            />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 max-w-6xl mx-auto">
                <div class="flex flex-col gap-4">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, label, value, href))| {
                            view! { <ContactItem index trigger icon label value href /> }
                        })
                        .collect_view()}
                    <Animated motion=motion::item(3) trigger>
                        <p class="flex items-center gap-2 p-4 text-sm text-[#94A3B8]">
                            "📍 " {info.location.clone()}
                        </p>
                    </Animated>
                </div>
                <ContactForm recipient=&info.email trigger />
            </div>
        </section>
    }
}
