use super::super::{Model, Msg};
use super::utils::{debounce, download_filename};
use shared::GeneratedImage;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let results = model.session.results();
    if results.is_empty() {
        return html! {};
    }

    let link = ctx.link().clone();

    html! {
        <div class="results-container">
            <div class="results-header">
                <h2>{ format!("Generated Views: {} / 7", results.len()) }</h2>
                <button
                    id="download-all-btn"
                    class="generate-btn"
                    disabled={model.session.in_progress()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::DownloadAll)
                    })}
                >
                    <i class="fa-solid fa-file-zipper"></i>{" Download All"}
                </button>
            </div>
            <div class="results-grid">
                { for results.iter().map(render_result_card) }
            </div>
        </div>
    }
}

fn render_result_card(image: &GeneratedImage) -> Html {
    html! {
        <div class="result-card" key={image.id.clone()}>
            <img src={image.src.clone()} alt={image.name.clone()} />
            <div class="card-body">
                <h3>{ &image.name }</h3>
                <p>{ &image.description }</p>
                <a
                    class="download-btn"
                    href={image.src.clone()}
                    download={download_filename(&image.name)}
                >
                    <i class="fa-solid fa-download"></i>{" Download"}
                </a>
            </div>
        </div>
    }
}
