//! Icon Component
//!
//! Stroke-style SVG outlines for every `Icon`.

use leptos::prelude::*;
use portfolio_core::icons::Icon;

fn outline(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Github => &["M9 19c-4.3 1.4 -4.3 -2.5 -6 -3m12 5v-3.5c0 -1 .1 -1.4 -.5 -2c2.8 -.3 5.5 -1.4 5.5 -6a4.6 4.6 0 0 0 -1.3 -3.2a4.2 4.2 0 0 0 -.1 -3.2s-1.1 -.3 -3.5 1.3a12.3 12.3 0 0 0 -6.2 0c-2.4 -1.6 -3.5 -1.3 -3.5 -1.3a4.2 4.2 0 0 0 -.1 3.2a4.6 4.6 0 0 0 -1.3 3.2c0 4.6 2.7 5.7 5.5 6c-.6 .6 -.6 1.2 -.5 2v3.5"],
        Icon::Linkedin => &[
            "M4 6a2 2 0 0 1 2 -2h12a2 2 0 0 1 2 2v12a2 2 0 0 1 -2 2h-12a2 2 0 0 1 -2 -2z",
            "M8 11l0 5",
            "M8 8l0 .01",
            "M12 16l0 -5",
            "M16 16v-3a2 2 0 0 0 -4 0",
        ],
        Icon::Mail => &[
            "M3 7a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v10a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2v-10z",
            "M3 7l9 6l9 -6",
        ],
        Icon::Phone => &["M5 4h4l2 5l-2.5 1.5a11 11 0 0 0 5 5l1.5 -2.5l5 2v4a2 2 0 0 1 -2 2a16 16 0 0 1 -15 -15a2 2 0 0 1 2 -2"],
        Icon::MapPin => &[
            "M9 11a3 3 0 1 0 6 0a3 3 0 0 0 -6 0",
            "M17.657 16.657l-4.243 4.243a2 2 0 0 1 -2.827 0l-4.244 -4.243a8 8 0 1 1 11.314 0z",
        ],
        Icon::Clock => &["M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0", "M12 7v5l3 3"],
        Icon::Android => &[
            "M4 10l0 6",
            "M20 10l0 6",
            "M7 9h10v8a1 1 0 0 1 -1 1h-8a1 1 0 0 1 -1 -1v-8a5 5 0 0 1 10 0",
            "M8 3l1 2",
            "M16 3l-1 2",
            "M9 18l0 3",
            "M15 18l0 3",
        ],
        Icon::World => &[
            "M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0",
            "M3.6 9h16.8",
            "M3.6 15h16.8",
            "M11.5 3a17 17 0 0 0 0 18",
            "M12.5 3a17 17 0 0 1 0 18",
        ],
        Icon::ArrowsCross => &["M16 4h4v4", "M15 9l5 -5", "M20 16v4h-4", "M15 15l5 5", "M4 4l5 5", "M4 20l5 -5"],
        Icon::DeviceDesktop => &[
            "M3 5a1 1 0 0 1 1 -1h16a1 1 0 0 1 1 1v10a1 1 0 0 1 -1 1h-16a1 1 0 0 1 -1 -1v-10z",
            "M7 20h10",
            "M9 16v4",
            "M15 16v4",
        ],
        Icon::DeviceLaptop => &[
            "M3 19l18 0",
            "M5 7a1 1 0 0 1 1 -1h12a1 1 0 0 1 1 1v8a1 1 0 0 1 -1 1h-12a1 1 0 0 1 -1 -1z",
        ],
        Icon::Stack => &["M12 4l-8 4l8 4l8 -4l-8 -4", "M4 12l8 4l8 -4", "M4 16l8 4l8 -4"],
        Icon::Server => &[
            "M3 7a3 3 0 0 1 3 -3h12a3 3 0 0 1 3 3v2a3 3 0 0 1 -3 3h-12a3 3 0 0 1 -3 -3z",
            "M3 15a3 3 0 0 1 3 -3h12a3 3 0 0 1 3 3v2a3 3 0 0 1 -3 3h-12a3 3 0 0 1 -3 -3z",
            "M7 8l0 .01",
            "M7 16l0 .01",
        ],
        Icon::Database => &[
            "M4 6a8 3 0 1 0 16 0a8 3 0 1 0 -16 0",
            "M4 6v6a8 3 0 0 0 16 0v-6",
            "M4 12v6a8 3 0 0 0 16 0v-6",
        ],
        Icon::Brain => &[
            "M15.5 13a3.5 3.5 0 0 0 -3.5 3.5v1a3.5 3.5 0 0 0 7 0v-1.8",
            "M8.5 13a3.5 3.5 0 0 1 3.5 3.5v1a3.5 3.5 0 0 1 -7 0v-1.8",
            "M17.5 16a3.5 3.5 0 0 0 0 -7h-.5",
            "M19 9.3v-2.8a3.5 3.5 0 0 0 -7 0",
            "M6.5 16a3.5 3.5 0 0 1 0 -7h.5",
            "M5 9.3v-2.8a3.5 3.5 0 0 1 7 0v10",
        ],
        Icon::Sparkles => &["M16 18a2 2 0 0 1 2 2a2 2 0 0 1 2 -2a2 2 0 0 1 -2 -2a2 2 0 0 1 -2 2zm0 -12a2 2 0 0 1 2 2a2 2 0 0 1 2 -2a2 2 0 0 1 -2 -2a2 2 0 0 1 -2 2zm-7 12a6 6 0 0 1 6 -6a6 6 0 0 1 -6 -6a6 6 0 0 1 -6 6a6 6 0 0 1 6 6z"],
        Icon::CodeCircle => &["M10 14l-2 -2l2 -2", "M14 10l2 2l-2 2", "M12 3a9 9 0 1 0 0 18a9 9 0 0 0 0 -18z"],
        Icon::ChevronDown => &["M6 9l6 6l6 -6"],
        Icon::ChevronUp => &["M6 15l6 -6l6 6"],
        Icon::Menu => &["M4 6l16 0", "M4 12l16 0", "M4 18l16 0"],
        Icon::Close => &["M18 6l-12 12", "M6 6l12 12"],
        Icon::ExternalLink => &[
            "M12 6h-6a2 2 0 0 0 -2 2v10a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-6",
            "M11 13l9 -9",
            "M15 4h5v5",
        ],
        Icon::Download => &["M4 17v2a2 2 0 0 0 2 2h12a2 2 0 0 0 2 -2v-2", "M7 11l5 5l5 -5", "M12 4l0 12"],
        Icon::Send => &["M10 14l11 -11", "M21 3l-6.5 18a.55 .55 0 0 1 -1 0l-3.5 -7l-7 -3.5a.55 .55 0 0 1 0 -1l18 -6.5"],
    }
}

#[component]
pub fn IconView(
    icon: Icon,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {}", class)
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {outline(icon).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
