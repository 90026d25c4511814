//! The components module contains all shared components for our app.

mod app;
mod icons;
mod ingest_panel;
mod library_panel;
mod results;
mod toasts;
mod vibe_panel;

pub use app::*;
pub use icons::*;
pub use ingest_panel::*;
pub use library_panel::*;
pub use results::*;
pub use toasts::*;
pub use vibe_panel::*;

#[cfg(test)]
mod tests {
    use super::toasts::level_style;
    use crate::state::NotificationLevel;

    const STYLESHEET: &str = include_str!("../../assets/tailwind.css");

    const SOURCES: [(&str, &str); 7] = [
        ("app.rs", include_str!("app.rs")),
        ("icons.rs", include_str!("icons.rs")),
        ("ingest_panel.rs", include_str!("ingest_panel.rs")),
        ("library_panel.rs", include_str!("library_panel.rs")),
        ("results.rs", include_str!("results.rs")),
        ("toasts.rs", include_str!("toasts.rs")),
        ("vibe_panel.rs", include_str!("vibe_panel.rs")),
    ];

    fn literal_classes(source: &str) -> Vec<&str> {
        source
            .split("class: \"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .flat_map(str::split_whitespace)
            .filter(|class| !class.contains('{'))
            .collect()
    }

    fn stylesheet_defines(class: &str) -> bool {
        let mut selector = String::from(".");
        for ch in class.chars() {
            if matches!(ch, '/' | ':' | '[' | ']') {
                selector.push('\\');
            }
            selector.push(ch);
        }
        STYLESHEET.match_indices(&selector).any(|(at, _)| {
            STYLESHEET[at + selector.len()..]
                .chars()
                .next()
                .is_some_and(|next| !(next.is_ascii_alphanumeric() || next == '-' || next == '\\'))
        })
    }

    #[test]
    fn every_component_class_has_a_rule() {
        let missing: Vec<String> = SOURCES
            .iter()
            .flat_map(|(file, source)| {
                literal_classes(source)
                    .into_iter()
                    .filter(|class| !stylesheet_defines(class))
                    .map(move |class| format!("{file}: {class}"))
            })
            .collect();
        assert!(missing.is_empty(), "classes without a rule: {missing:?}");
    }

    #[test]
    fn toast_level_classes_have_rules() {
        for level in [
            NotificationLevel::Info,
            NotificationLevel::Success,
            NotificationLevel::Warning,
            NotificationLevel::Error,
        ] {
            let (_, style) = level_style(level);
            for class in style.split_whitespace() {
                assert!(stylesheet_defines(class), "{level:?}: {class}");
            }
        }
    }

    #[test]
    fn layout_and_overlay_rules_are_present() {
        for class in [
            "fixed",
            "z-50",
            "md:grid-cols-3",
            "disabled:opacity-60",
            "animate-spin",
            "min-h-[300px]",
        ] {
            assert!(stylesheet_defines(class), "{class}");
        }
    }
}
