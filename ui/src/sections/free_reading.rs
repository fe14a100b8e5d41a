use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{platform, timing};
use crate::forms::{FormMachine, SUBMIT_LATENCY_MS, SUCCESS_LINGER_MS};
use crate::i18n;
use crate::t;

const READING_IMAGE_URL: &str = "https://images.unsplash.com/photo-1555421689-ca7b66d2c868?auto=format&fit=crop&q=80&w=600&h=400";

const FIELDS: &[&str] = &["name", "email", "birthdate", "question"];

#[derive(Debug, Clone, Copy)]
enum ReadingEvent {
    Submit,
    Delivered { submit_id: u64 },
    Dismiss { submit_id: u64 },
}

/// Free-reading lead capture with the simulated asynchronous round trip:
/// `Idle → Submitting → (1.5s) → Success → (5s) → Idle`. The two timed
/// transitions are queued as delayed events carrying their submit id, so a
/// timer that outlives its submission is ignored by the state machine.
#[component]
pub fn FreeReading() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    let mut machine = use_signal(|| FormMachine::new(FIELDS));

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ReadingEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let machine_ref = machine;

        use_coroutine(move |mut rx: UnboundedReceiver<ReadingEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut machine_signal = machine_ref;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ReadingEvent::Submit => {
                            let started = machine_signal
                                .with_mut(|form| form.begin_submit().map(|id| (id, form.values())));
                            if let Some((submit_id, values)) = started {
                                // No backend exists; the request is logged and discarded.
                                tracing::info!(?values, "free reading request submitted");
                                queue_transition(
                                    sender_slot.clone(),
                                    ReadingEvent::Delivered { submit_id },
                                    SUBMIT_LATENCY_MS,
                                );
                            }
                        }
                        ReadingEvent::Delivered { submit_id } => {
                            if machine_signal.with_mut(|form| form.complete_submit(submit_id)) {
                                queue_transition(
                                    sender_slot.clone(),
                                    ReadingEvent::Dismiss { submit_id },
                                    SUCCESS_LINGER_MS,
                                );
                            }
                        }
                        ReadingEvent::Dismiss { submit_id } => {
                            machine_signal.with_mut(|form| form.dismiss_success(submit_id));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let snapshot = machine();

    if snapshot.is_success() {
        return rsx! {
            section { id: "reading", class: "reading reading--success",
                div { class: "card reading__success",
                    span { class: "reading__success-icon", aria_hidden: "true", "✓" }
                    h3 { {t!("reading-success-title")} }
                    p { {t!("reading-success-body")} }
                    div { class: "reading__success-actions",
                        a { class: "button button--primary", href: "#services", {t!("reading-success-services")} }
                        a { class: "button button--outline", href: "#contact", {t!("reading-success-contact")} }
                    }
                }
            }
        };
    }

    let is_submitting = snapshot.is_submitting();
    let name_value = snapshot.field("name").to_string();
    let email_value = snapshot.field("email").to_string();
    let birthdate_value = snapshot.field("birthdate").to_string();
    let question_value = snapshot.field("question").to_string();

    let name_placeholder = t!("reading-form-name-placeholder");
    let email_placeholder = t!("reading-form-email-placeholder");
    let question_placeholder = t!("reading-form-question-placeholder");
    let image_alt = t!("reading-image-alt");

    rsx! {
        section { id: "reading", class: "reading",
            div { class: "section-heading",
                span { class: "section-heading__badge", {t!("reading-badge")} }
                h2 { {t!("reading-title")} }
                p { {t!("reading-lead")} }
            }

            div { class: "reading__columns",
                div { class: "card reading__form",
                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            coroutine.send(ReadingEvent::Submit);
                        },

                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "reading-name", {t!("reading-form-name")} }
                                input {
                                    id: "reading-name",
                                    name: "name",
                                    r#type: "text",
                                    required: true,
                                    value: "{name_value}",
                                    placeholder: "{name_placeholder}",
                                    oninput: move |evt| machine.with_mut(|form| form.set_field("name", evt.value())),
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "reading-email", {t!("reading-form-email")} }
                                input {
                                    id: "reading-email",
                                    name: "email",
                                    r#type: "email",
                                    required: true,
                                    value: "{email_value}",
                                    placeholder: "{email_placeholder}",
                                    oninput: move |evt| machine.with_mut(|form| form.set_field("email", evt.value())),
                                }
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "reading-birthdate", {t!("reading-form-birthdate")} }
                            input {
                                id: "reading-birthdate",
                                name: "birthdate",
                                r#type: "date",
                                required: true,
                                value: "{birthdate_value}",
                                oninput: move |evt| machine.with_mut(|form| form.set_field("birthdate", evt.value())),
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "reading-question", {t!("reading-form-question")} }
                            textarea {
                                id: "reading-question",
                                name: "question",
                                rows: 4,
                                value: "{question_value}",
                                placeholder: "{question_placeholder}",
                                oninput: move |evt| machine.with_mut(|form| form.set_field("question", evt.value())),
                            }
                        }

                        div { class: "form-field form-field--consent",
                            input { id: "reading-consent", r#type: "checkbox", required: true }
                            label { r#for: "reading-consent", {t!("reading-consent")} }
                        }

                        button {
                            r#type: "submit",
                            class: "button button--secondary button--block",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "spinner", aria_hidden: "true" }
                                {t!("reading-submitting")}
                            } else {
                                {t!("reading-submit")}
                            }
                        }
                    }
                }

                div { class: "reading__aside",
                    img { class: "reading__image", src: READING_IMAGE_URL, alt: "{image_alt}" }
                    div { class: "reading__scope",
                        h3 { {t!("reading-scope-title")} }
                        ul {
                            {crate::catalog::READING_SCOPE_KEYS.iter().map(|key| {
                                let item = i18n::text(key);
                                rsx! { li { key: "{key}", "{item}" } }
                            })}
                        }
                    }
                    div { class: "reading__note",
                        h4 { {t!("reading-note-title")} }
                        p { {t!("reading-note-body")} }
                    }
                }
            }
        }
    }
}

fn queue_transition(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ReadingEvent>>>>,
    event: ReadingEvent,
    delay_ms: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(event);
        });
    }
}
