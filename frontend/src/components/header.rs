use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-person-rays"></i> {" Character Turnaround Generator"}</h1>
            <p class="subtitle">{"Upload one character image and get green screen, view and T-pose sheets"}</p>
        </header>
    }
}
