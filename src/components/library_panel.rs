use crate::api::PlaylistRef;
use crate::components::Icon;
use crate::state::{LibraryView, VibeState, EMPTY_LIBRARY_MESSAGE};
use dioxus::prelude::*;

#[component]
pub fn LibraryPanel() -> Element {
    let state = use_context::<Signal<VibeState>>();

    let (loading, count, playlists) = {
        let state = state.read();
        let count = state.library().len();
        match state.library_view() {
            LibraryView::Loading => (true, count, Vec::new()),
            LibraryView::Empty => (false, count, Vec::new()),
            LibraryView::Playlists(list) => (false, count, list.to_vec()),
        }
    };

    rsx! {
        div { class: "p-6 rounded-xl bg-zinc-900/50 border border-zinc-800 flex flex-col gap-3",
            h3 { class: "text-sm font-medium text-zinc-400",
                if count == 0 {
                    "Your Library"
                } else {
                    "Your Library ({count})"
                }
            }
            if loading {
                div { class: "flex items-center justify-center py-6",
                    Icon {
                        name: "loader".to_string(),
                        class: "w-6 h-6 text-zinc-500".to_string(),
                    }
                }
            } else if playlists.is_empty() {
                p { class: "text-sm text-zinc-500", "{EMPTY_LIBRARY_MESSAGE}" }
            } else {
                div { class: "flex flex-col gap-2",
                    for playlist in playlists {
                        PlaylistRow { key: "{playlist.id}", playlist: playlist.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PlaylistRow(playlist: PlaylistRef) -> Element {
    let title = if playlist.name.trim().is_empty() {
        playlist.id.clone()
    } else {
        playlist.name.clone()
    };

    rsx! {
        a {
            class: "group flex items-center gap-3 p-2 rounded-lg hover:bg-zinc-800 transition-colors",
            href: "{playlist.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            {match playlist.image.as_ref() {
                Some(image) => rsx! {
                    img { class: "w-10 h-10 rounded object-cover", src: "{image}" }
                },
                None => rsx! {
                    div { class: "w-10 h-10 rounded bg-zinc-800 flex items-center justify-center text-zinc-500",
                        Icon { name: "music".to_string(), class: "w-4 h-4".to_string() }
                    }
                },
            }}
            span { class: "text-sm text-white truncate group-hover:text-green-400", "{title}" }
        }
    }
}
