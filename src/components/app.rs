use crate::api::ChromaTuneClient;
use crate::components::{Icon, IngestPanel, LibraryPanel, ResultsPanel, ToastStack, VibePanel};
use crate::config::{load_config, AppConfig};
use crate::state::{load_library, VibeState};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(load_config);
    let client = use_hook(|| ChromaTuneClient::from_config(&config));
    let state = use_signal(VibeState::new);

    // Provide state via context
    use_context_provider(|| config.clone());
    use_context_provider(|| client.clone());
    use_context_provider(|| state);

    // Load the playlist library once on mount
    use_effect(move || {
        let client = client.clone();
        tracing::debug!(base_url = client.base_url(), "loading playlist library on mount");
        spawn(async move {
            load_library(&state, &client).await;
        });
    });

    rsx! {
        div { class: "min-h-screen bg-zinc-950 text-white font-sans overflow-hidden",
            main { class: "max-w-4xl mx-auto px-6 py-12 flex flex-col gap-12",
                header { class: "flex items-center gap-3",
                    div { class: "p-3 bg-gradient-to-br from-green-400 to-green-600 rounded-xl shadow-lg",
                        Icon {
                            name: "music".to_string(),
                            class: "w-8 h-8 text-black".to_string(),
                        }
                    }
                    h1 { class: "text-4xl font-bold tracking-tighter", "Chroma-Tune" }
                }

                section { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    div { class: "col-span-3 md:col-span-1 flex flex-col gap-6",
                        IngestPanel {}
                        LibraryPanel {}
                    }
                    div { class: "col-span-3 md:col-span-2", VibePanel {} }
                }

                ResultsPanel {}
            }
            ToastStack {}
        }
    }
}

/// Used by views that need settings after mount.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
