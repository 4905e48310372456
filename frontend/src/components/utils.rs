use super::super::Model;
use gloo_timers::callback::Timeout;
use shared::GeneratedImage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Splits a `data:<mime>;base64,<payload>` URL into its MIME type and
/// base64 payload.
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime_type = header.strip_suffix(";base64")?;
    Some((mime_type, payload))
}

pub fn download_filename(name: &str) -> String {
    format!("{}.png", name.to_lowercase().replace(' ', "-"))
}

/// Saves one generated image through a synthesized anchor click.
pub fn trigger_download(image: &GeneratedImage) {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .unwrap()
        .dyn_into()
        .unwrap();
    anchor.set_href(&image.src);
    anchor.set_download(&download_filename(&image.name));
    anchor.click();
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.session.error() {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_base64_data_url() {
        let (mime_type, payload) = split_data_url("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(mime_type, "image/jpeg");
        assert_eq!(payload, "AAAA");
    }

    #[test]
    fn rejects_non_base64_data_urls() {
        assert!(split_data_url("data:text/plain,hello").is_none());
        assert!(split_data_url("http://example.com/image.png").is_none());
        assert!(split_data_url("data:image/png;base64").is_none());
    }

    #[test]
    fn download_filename_is_kebab_case_png() {
        assert_eq!(download_filename("T-Pose Front"), "t-pose-front.png");
        assert_eq!(download_filename("Green Screen"), "green-screen.png");
    }
}
