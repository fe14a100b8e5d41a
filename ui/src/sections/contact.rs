use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::catalog;
use crate::forms::FormMachine;
use crate::i18n;
use crate::t;

const FIELDS: &[&str] = &["name", "email", "phone", "service", "message"];

/// Consultation contact form. Submission is synchronous: the fields are
/// cleared immediately and a one-shot acknowledgment banner appears; the
/// next edit dismisses it. Service options derive from the service catalog
/// plus an "other" entry.
#[component]
pub fn Contact() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    let mut machine = use_signal(|| FormMachine::new(FIELDS));
    let snapshot = machine();

    let name_value = snapshot.field("name").to_string();
    let email_value = snapshot.field("email").to_string();
    let phone_value = snapshot.field("phone").to_string();
    let service_value = snapshot.field("service").to_string();
    let message_value = snapshot.field("message").to_string();

    let name_placeholder = t!("contact-form-name-placeholder");
    let email_placeholder = t!("contact-form-email-placeholder");
    let phone_placeholder = t!("contact-form-phone-placeholder");
    let message_placeholder = t!("contact-form-message-placeholder");

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "section-heading",
                h2 { {t!("contact-title")} }
                p { {t!("contact-lead")} }
            }

            div { class: "card contact__form",
                if snapshot.is_success() {
                    div { class: "contact__ack", role: "status", {t!("contact-ack")} }
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let values = machine.with_mut(|form| form.submit_immediate());
                        // No backend exists; the request is logged and discarded.
                        tracing::info!(?values, "consultation request submitted");
                    },

                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "contact-name", {t!("contact-form-name")} }
                            input {
                                id: "contact-name",
                                name: "name",
                                r#type: "text",
                                required: true,
                                value: "{name_value}",
                                placeholder: "{name_placeholder}",
                                oninput: move |evt| machine.with_mut(|form| form.set_field("name", evt.value())),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-email", {t!("contact-form-email")} }
                            input {
                                id: "contact-email",
                                name: "email",
                                r#type: "email",
                                required: true,
                                value: "{email_value}",
                                placeholder: "{email_placeholder}",
                                oninput: move |evt| machine.with_mut(|form| form.set_field("email", evt.value())),
                            }
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "contact-phone", {t!("contact-form-phone")} }
                            input {
                                id: "contact-phone",
                                name: "phone",
                                r#type: "tel",
                                required: true,
                                value: "{phone_value}",
                                placeholder: "{phone_placeholder}",
                                oninput: move |evt| machine.with_mut(|form| form.set_field("phone", evt.value())),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-service", {t!("contact-form-service")} }
                            select {
                                id: "contact-service",
                                name: "service",
                                required: true,
                                value: "{service_value}",
                                onchange: move |evt| machine.with_mut(|form| form.set_field("service", evt.value())),
                                option { value: "", {t!("contact-form-service-placeholder")} }
                                {catalog::SERVICES.iter().map(|service| {
                                    let title = service.title();
                                    rsx! {
                                        option { key: "{service.id}", value: "{service.id}", "{title}" }
                                    }
                                })}
                                option { value: "other", {t!("contact-form-service-other")} }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "contact-message", {t!("contact-form-message")} }
                        textarea {
                            id: "contact-message",
                            name: "message",
                            rows: 5,
                            required: true,
                            value: "{message_value}",
                            placeholder: "{message_placeholder}",
                            oninput: move |evt| machine.with_mut(|form| form.set_field("message", evt.value())),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary button--block",
                        {t!("contact-submit")}
                    }
                }
            }
        }
    }
}
