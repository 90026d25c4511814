use crate::components::{use_app_config, Icon};
use crate::state::{Notification, NotificationLevel, VibeState};
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
async fn toast_delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(target_arch = "wasm32")]
async fn toast_delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

pub(crate) fn level_style(level: NotificationLevel) -> (&'static str, &'static str) {
    match level {
        NotificationLevel::Info => ("loader", "border-zinc-700 text-zinc-300"),
        NotificationLevel::Success => ("check", "border-green-500/40 text-green-400"),
        NotificationLevel::Warning => ("alert", "border-amber-500/40 text-amber-400"),
        NotificationLevel::Error => ("alert", "border-red-500/40 text-red-400"),
    }
}

#[component]
pub fn ToastStack() -> Element {
    let mut state = use_context::<Signal<VibeState>>();
    let config = use_app_config();
    let mut scheduled_up_to = use_signal(|| 0u64);
    let ttl_ms = config.notification_ttl_ms;

    // Schedule auto-dismiss once per notification id.
    use_effect(move || {
        let high_water = *scheduled_up_to.peek();
        let fresh: Vec<u64> = state
            .read()
            .notifications()
            .iter()
            .map(|n| n.id)
            .filter(|id| *id > high_water)
            .collect();
        let Some(latest) = fresh.iter().copied().max() else {
            return;
        };
        scheduled_up_to.set(latest);
        for id in fresh {
            spawn(async move {
                toast_delay_ms(ttl_ms).await;
                state.write().dismiss_notification(id);
            });
        }
    });

    let notifications: Vec<Notification> = state.read().notifications().to_vec();

    rsx! {
        div { class: "fixed bottom-6 right-6 z-50 flex flex-col gap-2 w-80",
            for note in notifications {
                {
                    let (icon, style) = level_style(note.level);
                    let id = note.id;
                    rsx! {
                        div {
                            key: "{id}",
                            class: "flex items-start gap-3 p-4 rounded-xl bg-zinc-900 border shadow-lg {style}",
                            Icon { name: icon.to_string(), class: "w-5 h-5 shrink-0".to_string() }
                            div { class: "flex-1 min-w-0",
                                p { class: "font-semibold text-white text-sm", "{note.title}" }
                                p { class: "text-xs text-zinc-400", "{note.description}" }
                            }
                            button {
                                class: "text-zinc-500 hover:text-white",
                                onclick: move |_| {
                                    state.write().dismiss_notification(id);
                                },
                                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
