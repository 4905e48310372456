use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{GeneratedImage, GenerationSession};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod api;
mod components;

use components::{handlers, header, preview_area, results, theme_toggle, upload_section, utils};

// Yew msg components
enum Msg {
    // Upload operations
    ImageSelected(GlooFile),
    ClearImage,

    // Generation operations
    Generate,
    StepCompleted(GeneratedImage),
    RunFinished(Result<(), String>),
    DownloadAll,

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    session: GenerationSession<GlooFile>,
    preview_url: Option<ObjectUrl>,
    is_dragging: bool,
    theme: String,
    api_key: Option<&'static str>,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: GenerationSession::new(),
            preview_url: None,
            is_dragging: false,
            theme: "light".to_string(),
            api_key: option_env!("GEMINI_API_KEY"),
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Upload operations
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, file),
            Msg::ClearImage => handlers::handle_clear_image(self),

            // Generation operations
            Msg::Generate => handlers::handle_generate(self, ctx),
            Msg::StepCompleted(image) => handlers::handle_step_completed(self, image),
            Msg::RunFinished(outcome) => handlers::handle_run_finished(self, outcome),
            Msg::DownloadAll => handlers::handle_download_all(self),

            // UI states
            Msg::SetError(error) => {
                if let Some(message) = error {
                    self.session.set_error(message);
                }
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { preview_area::render_preview_area(self, ctx) }
                    { utils::render_error_message(self) }
                    { results::render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Character Turnaround Generator | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
