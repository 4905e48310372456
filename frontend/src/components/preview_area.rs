use super::super::{Model, Msg};
use super::utils::debounce;
use shared::TRANSFORMATION_STEPS;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    if model.session.source().is_none() {
        return html! {};
    }

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            { render_uploaded_preview(model) }
            { render_run_status(model) }
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="generate-btn"
                    style="background-color: var(--clear-color);"
                    disabled={model.session.in_progress()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearImage)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    id="generate-btn"
                    class="generate-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Generate)
                    })}
                    disabled={model.session.in_progress()}
                >
                    { render_generate_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_uploaded_preview(model: &Model) -> Html {
    match &model.preview_url {
        Some(url) => html! {
            <img id="uploaded-image-preview"
                src={url.to_string()}
                alt="Uploaded character" />
        },
        None => html! {
            <div class="unavailable-preview">
                <p>{"Preview unavailable"}</p>
            </div>
        },
    }
}

fn render_run_status(model: &Model) -> Html {
    if !model.session.in_progress() {
        return html! {};
    }

    let total = TRANSFORMATION_STEPS.len();
    let completed = model.session.results().len().min(total - 1);
    let label = model.session.current_step().unwrap_or("...");

    html! {
        <div class="run-status">
            <i class="fa-solid fa-spinner fa-spin"></i>
            <p>{ format!("Generating {} ({} of {})...", label, completed + 1, total) }</p>
        </div>
    }
}

fn render_generate_button_content(model: &Model) -> Html {
    if model.session.in_progress() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Generating..."}</> }
    } else {
        html! { <><i class="fa-solid fa-wand-magic-sparkles"></i>{" Generate Turnaround"}</> }
    }
}
