use crate::api::SongMatch;
use crate::components::{use_app_config, Icon};
use crate::state::VibeState;
use dioxus::prelude::*;

#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<Signal<VibeState>>();
    let config = use_app_config();

    let Some(results) = state.read().results().cloned() else {
        return rsx! {};
    };
    let clamp = config.clamp_match_percent;

    rsx! {
        section { class: "space-y-4 pb-20",
            div { class: "flex items-center justify-between",
                h3 { class: "text-xl font-semibold text-white", "AI Recommendations" }
                span { class: "text-xs font-mono text-green-500 border border-green-500/20 px-2 py-1 rounded bg-green-500/10",
                    "{results.len()} matches"
                }
            }

            if let Some(analysis) = results.vibe_analysis.clone().filter(|text| !text.trim().is_empty()) {
                p { class: "text-sm text-zinc-400 italic", "\"{analysis}\"" }
            }

            if results.is_empty() {
                p { class: "text-zinc-500", "No songs matched that vibe." }
            } else {
                div { class: "grid gap-3",
                    for (index , song) in results.songs.iter().enumerate() {
                        SongMatchRow {
                            key: "{index}",
                            song: song.clone(),
                            clamp: clamp,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SongMatchRow(song: SongMatch, clamp: bool) -> Element {
    let percent = if clamp {
        song.match_percent_clamped()
    } else {
        song.match_percent()
    };

    rsx! {
        a {
            class: "group flex items-center justify-between p-4 rounded-xl bg-zinc-900/40 hover:bg-zinc-800 border border-transparent hover:border-zinc-700 transition-all",
            href: "{song.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "flex items-center gap-4",
                div { class: "w-10 h-10 rounded bg-zinc-800 flex items-center justify-center text-zinc-500 group-hover:text-green-500 transition-colors",
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                }
                div {
                    div { class: "font-medium text-white group-hover:text-green-400 transition-colors",
                        "{song.name}"
                    }
                    div { class: "text-sm text-zinc-500", "{song.artist}" }
                }
            }
            div { class: "text-zinc-600 text-sm font-mono", "Match: {percent}%" }
        }
    }
}
