use super::super::Model;
use super::super::Msg;
use crate::api::GeminiEditor;
use crate::components::utils;
use gloo_file::futures::read_as_data_url;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{GeneratedImage, SessionError, TRANSFORMATION_STEPS, run_pipeline};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::html::Scope;
use yew::prelude::*;

pub fn handle_image_selected(model: &mut Model, file: GlooFile) -> bool {
    // The result collection belongs to the active run until it finishes.
    if model.session.in_progress() {
        return false;
    }
    // Replacing the upload drops prior results and error before anything
    // else happens.
    model.session.select(file.clone());
    model.preview_url = Some(ObjectUrl::from(file));
    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    if model.session.in_progress() {
        return false;
    }
    model.session.clear();
    model.preview_url = None;
    true
}

pub fn handle_generate(model: &mut Model, ctx: &Context<Model>) -> bool {
    let file = match model.session.begin() {
        Ok(file) => file,
        // A second click while a run is active is ignored.
        Err(SessionError::RunInProgress) => return false,
        Err(err @ SessionError::NoImageSelected) => {
            model.session.set_error(err.to_string());
            return true;
        }
    };

    model.session.set_current_step(TRANSFORMATION_STEPS[0].name);

    let api_key = model.api_key;
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = run_generation(api_key, file, &link).await;
        link.send_message(Msg::RunFinished(outcome));
    });

    true
}

async fn run_generation(
    api_key: Option<&'static str>,
    file: GlooFile,
    link: &Scope<Model>,
) -> Result<(), String> {
    // The client is rebuilt per run, so a missing key fails here, before
    // any step executes.
    let editor = GeminiEditor::new(api_key).map_err(|e| e.to_string())?;

    let data_url = read_as_data_url(&file)
        .await
        .map_err(|e| format!("Could not read the uploaded image: {e}"))?;
    let (mime_type, payload) = utils::split_data_url(&data_url)
        .ok_or_else(|| "Could not read the uploaded image: unrecognized data URL".to_string())?;

    run_pipeline(&editor, payload, mime_type, |image| {
        link.send_message(Msg::StepCompleted(image));
    })
    .await
    .map_err(|e| e.to_string())
}

pub fn handle_step_completed(model: &mut Model, image: GeneratedImage) -> bool {
    model.session.push(image);
    let completed = model.session.results().len();
    if let Some(next) = TRANSFORMATION_STEPS.get(completed) {
        model.session.set_current_step(next.name);
    }
    true
}

pub fn handle_run_finished(model: &mut Model, outcome: Result<(), String>) -> bool {
    if let Err(message) = &outcome {
        log::error!("Generation run failed: {}", message);
    }
    model.session.finish(outcome);
    true
}

pub fn handle_download_all(model: &mut Model) -> bool {
    for image in model.session.results() {
        utils::trigger_download(image);
    }
    false
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            event.prevent_default();
            process_file_list(ctx, file_list);
            return true;
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    let mut selected = None;

    for i in 0..file_list.length() {
        if let Some(file) = file_list.item(i) {
            if file.type_().starts_with("image/") {
                // Single-upload app: the first image wins.
                if selected.is_none() {
                    selected = Some(GlooFile::from(file));
                }
            } else {
                log::warn!("Skipping non-image file: {}", file.name());
            }
        }
    }

    match selected {
        Some(file) => ctx.link().send_message(Msg::ImageSelected(file)),
        None => ctx
            .link()
            .send_message(Msg::SetError(Some("No valid image file selected.".into()))),
    }
}
