use crate::api::ChromaTuneClient;
use crate::components::Icon;
use crate::state::{submit_search, VibeState};
use dioxus::prelude::*;

fn run_search(state: Signal<VibeState>, query: Signal<String>, client: ChromaTuneClient) {
    spawn(async move {
        let raw = query.peek().clone();
        submit_search(&state, &client, &raw).await;
    });
}

#[component]
pub fn VibePanel() -> Element {
    let state = use_context::<Signal<VibeState>>();
    let client = use_context::<ChromaTuneClient>();
    let mut query_input = use_signal(String::new);

    let is_searching = state.read().is_searching();

    let on_keydown = {
        let client = client.clone();
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter {
                run_search(state, query_input, client.clone());
            }
        }
    };

    rsx! {
        div { class: "p-6 rounded-xl bg-zinc-900/50 border border-zinc-800 flex flex-col gap-4 min-h-[300px] justify-center",
            div { class: "flex flex-col gap-2",
                h2 { class: "text-2xl font-bold text-white", "How's the vibe?" }
                p { class: "text-zinc-400", "Upload a photo or describe the setting." }
            }

            div { class: "flex gap-2",
                input {
                    class: "flex-1 h-12 px-4 bg-zinc-950/80 border border-zinc-700 rounded-lg text-lg text-white placeholder:text-zinc-600 focus:outline-none focus:border-green-500",
                    placeholder: "e.g. 'Late night drive in Tokyo'",
                    value: "{query_input}",
                    oninput: move |e| query_input.set(e.value()),
                    onkeydown: on_keydown,
                }
                button {
                    class: "h-12 w-12 shrink-0 flex items-center justify-center rounded-lg bg-white text-black hover:bg-zinc-200 disabled:opacity-60",
                    disabled: is_searching,
                    onclick: move |_| run_search(state, query_input, client.clone()),
                    if is_searching {
                        Icon { name: "loader".to_string(), class: "h-5 w-5".to_string() }
                    } else {
                        Icon { name: "zap".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
            }

            // Image vibes are not wired to the backend yet
            div {
                class: "mt-4 border-2 border-dashed border-zinc-800 rounded-lg p-8 text-center text-zinc-600 cursor-not-allowed",
                title: "Coming soon",
                Icon {
                    name: "upload".to_string(),
                    class: "w-6 h-6 mx-auto mb-2".to_string(),
                }
                span { class: "text-sm", "Drop an image here for AI Vision analysis (coming soon)" }
            }
        }
    }
}
