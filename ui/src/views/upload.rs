use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::core::config::use_wizard_config;
use crate::core::platform;
use crate::core::timing::sleep_ms;
use crate::i18n;
use crate::t;
use crate::wizard::upload::validate_upload;
use crate::wizard::{ImageFrame, PinCoordinate, UploadDraft, UploadError, UploadedImage};

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn UploadStep(on_complete: EventHandler<(UploadedImage, PinCoordinate)>) -> Element {
    let _lang = i18n::use_language();
    let config = use_wizard_config();
    let delay_ms = config.pin_prompt_delay_ms;

    let mut draft = use_signal(UploadDraft::default);
    let mut image_node = use_signal(|| Option::<Rc<MountedData>>::None);

    let on_file_change = move |evt: FormEvent| {
        spawn(ingest_first_file(evt.files(), draft, delay_ms));
    };

    // Dropping onto the shown image replaces it.
    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        spawn(ingest_first_file(evt.files(), draft, delay_ms));
    };

    let on_image_click = move |evt: MouseEvent| {
        let click = evt.client_coordinates();
        spawn(async move {
            let Some(node) = image_node() else {
                return;
            };
            match node.get_client_rect().await {
                Ok(rect) => {
                    let frame = ImageFrame::new(rect.size.width, rect.size.height);
                    let pin = PinCoordinate::from_click(
                        click.x,
                        click.y,
                        rect.origin.x,
                        rect.origin.y,
                        frame,
                    );
                    if draft.with_mut(|d| d.place_pin(pin)) {
                        debug!(x = pin.x, y = pin.y, "pin placed");
                    }
                }
                Err(err) => warn!("could not measure the uploaded image: {err:?}"),
            }
        });
    };

    let snapshot = draft();
    let ready = snapshot.ready();
    let error_message = snapshot.error().map(describe_error);
    let prompt_visible = snapshot.prompt_visible();

    rsx! {
        section { class: "page upload",
            if prompt_visible {
                div { class: "upload__prompt",
                    p { {t!("upload-pin-prompt")} }
                }
            }

            div { class: "upload__body",
                if let Some(image) = snapshot.image() {
                    div {
                        class: "upload__frame",
                        ondragover: move |evt: DragEvent| evt.prevent_default(),
                        ondrop: on_drop,
                        div {
                            class: "upload__image-wrap",
                            onclick: on_image_click,
                            img {
                                class: "upload__image",
                                src: "{image.url}",
                                alt: t!("upload-image-alt"),
                                draggable: "false",
                                onmounted: move |evt: MountedEvent| image_node.set(Some(evt.data())),
                            }

                            if let Some(pin) = snapshot.pin() {
                                div {
                                    class: "pin",
                                    style: "{pin_style(pin)}",
                                    div { class: "pin__head" }
                                    div { class: "pin__stem" }
                                }
                            } else if prompt_visible {
                                div { class: "upload__hint",
                                    p { {t!("upload-pin-hint")} }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "upload__header",
                        div { class: "brand brand--large",
                            img { class: "brand__logo", src: LOGO, alt: "BioCircuit" }
                            h1 { class: "brand__name", "BioCircuit" }
                        }
                        p { class: "upload__lead", {t!("upload-lead")} }
                    }

                    label {
                        class: "dropzone",
                        ondragover: move |evt: DragEvent| evt.prevent_default(),
                        ondrop: on_drop,
                        input {
                            class: "visually-hidden",
                            r#type: "file",
                            accept: ".png,.jpg,.jpeg",
                            multiple: false,
                            onchange: on_file_change,
                        }
                        div { class: "dropzone__icon", aria_hidden: "true", "📄" }
                        p { class: "dropzone__title", {t!("upload-dropzone-title")} }
                        p { class: "dropzone__meta", {t!("upload-dropzone-types")} }
                    }
                }

                if let Some((image, pin)) = ready {
                    button {
                        r#type: "button",
                        class: "button button--accent button--block",
                        onclick: move |_| {
                            info!(image = %image.name, "upload stage complete");
                            on_complete.call((image.clone(), pin));
                        },
                        {t!("upload-continue")}
                    }
                }

                if let Some(message) = error_message {
                    p { class: "upload__error", role: "alert", "{message}" }
                }
            }
        }
    }
}

/// Read the first dropped or selected file and feed it to the draft.
async fn ingest_first_file(
    files: Option<Arc<dyn FileEngine>>,
    mut draft: Signal<UploadDraft>,
    delay_ms: u64,
) {
    let Some(engine) = files else {
        return;
    };
    let Some(name) = engine.files().into_iter().next() else {
        return;
    };

    match engine.read_file(&name).await {
        Some(bytes) => accept_file(name, &bytes, draft, delay_ms),
        None => {
            warn!(file = %name, "failed to read upload");
            draft.with_mut(|d| d.reject(UploadError::Unreadable { name }));
        }
    }
}

fn accept_file(name: String, bytes: &[u8], mut draft: Signal<UploadDraft>, delay_ms: u64) {
    let accepted = validate_upload(&name, bytes).and_then(|media_type| {
        platform::image_url(bytes, media_type.mime())
            .map(|url| UploadedImage {
                name: name.clone(),
                media_type,
                byte_len: bytes.len(),
                url,
            })
            .map_err(|err| {
                warn!(file = %name, "{err}");
                UploadError::Unreadable { name: name.clone() }
            })
    });

    match accepted {
        Ok(image) => {
            info!(file = %image.name, mime = image.media_type.mime(), bytes = image.byte_len, "image accepted");
            if let Some(previous) = draft.with_mut(|d| d.accept(image)) {
                platform::release_image_url(&previous.url);
            }
            let token = draft.peek().prompt_token();
            spawn(async move {
                sleep_ms(delay_ms).await;
                if !draft.with_mut(|d| d.reveal_prompt(token)) {
                    debug!(token, "pin prompt superseded by a newer image");
                }
            });
        }
        Err(err) => {
            warn!("upload rejected: {err}");
            draft.with_mut(|d| d.reject(err));
        }
    }
}

fn describe_error(err: &UploadError) -> String {
    match err {
        UploadError::Empty { .. } | UploadError::UnsupportedType { .. } => {
            t!("upload-error-type")
        }
        UploadError::Unreadable { .. } => t!("upload-error-read"),
    }
}

/// Pin marker position as a percentage of the image box, so it follows the
/// image when the layout resizes.
fn pin_style(pin: PinCoordinate) -> String {
    let left = percent(pin.x, pin.frame.width);
    let top = percent(pin.y, pin.frame.height);
    format!("left: {left:.2}%; top: {top:.2}%;")
}

fn percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        (value / total * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_style_uses_percentages() {
        let pin = PinCoordinate::new(120.0, 80.0, ImageFrame::new(480.0, 320.0));
        assert_eq!(pin_style(pin), "left: 25.00%; top: 25.00%;");
    }

    #[test]
    fn zero_sized_frame_pins_to_origin() {
        let pin = PinCoordinate::new(10.0, 10.0, ImageFrame::new(0.0, 0.0));
        assert_eq!(pin_style(pin), "left: 0.00%; top: 0.00%;");
    }
}
