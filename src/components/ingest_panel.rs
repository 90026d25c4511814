use crate::api::ChromaTuneClient;
use crate::components::Icon;
use crate::state::{submit_ingest, Submission, VibeState};
use dioxus::prelude::*;

#[component]
pub fn IngestPanel() -> Element {
    let state = use_context::<Signal<VibeState>>();
    let client = use_context::<ChromaTuneClient>();
    // Local so typing does not re-render the other panels.
    let mut playlist_input = use_signal(String::new);

    let is_ingesting = state.read().is_ingesting();

    let on_sync = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            let raw = playlist_input.peek().clone();
            // A failed sync keeps the text so the user can retry.
            if submit_ingest(&state, &client, &raw).await == Submission::Succeeded {
                playlist_input.set(String::new());
            }
        });
    };

    rsx! {
        div { class: "p-6 rounded-xl bg-zinc-900/50 border border-zinc-800 flex flex-col gap-4",
            div { class: "flex items-center gap-2 text-zinc-400",
                Icon { name: "disc".to_string(), class: "w-5 h-5".to_string() }
                span { class: "text-sm font-medium", "Connect Source" }
            }
            input {
                class: "w-full px-3 py-2 bg-zinc-950 border border-zinc-800 rounded-lg text-white placeholder:text-zinc-600 focus:outline-none focus:border-green-500",
                placeholder: "Spotify Playlist ID",
                value: "{playlist_input}",
                oninput: move |e| playlist_input.set(e.value()),
            }
            button {
                class: "w-full py-2 rounded-lg bg-green-500 hover:bg-green-400 text-black font-bold transition-all disabled:opacity-60",
                disabled: is_ingesting,
                onclick: on_sync,
                if is_ingesting {
                    span { class: "flex items-center justify-center gap-2",
                        Icon { name: "loader".to_string(), class: "h-4 w-4".to_string() }
                        "Syncing..."
                    }
                } else {
                    "Sync Playlist"
                }
            }
        }
    }
}
