//! Contact Section Component
//!
//! Contact details and social links from their collections, plus a message
//! form whose submission is simulated.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::contact_form::{ContactField, ContactForm, FormError, SubmitState, SUBMIT_DELAY_MS};
use portfolio_core::icons::{icon_for_label, Icon};
use portfolio_core::{ContactInfo, Placeholders, Presentation};

use super::icon::IconView;
use super::social_links::SocialLinks;
use super::status_message::placeholder_view;
use crate::hooks::{use_contact_info, MountGuard};

#[component]
fn ContactInfoCard(info: ContactInfo) -> impl IntoView {
    let icon = icon_for_label(&info.label);

    view! {
        <li class="contact-info-item">
            {icon.map(|icon| view! { <IconView icon=icon class="contact-info-icon" /> })}
            <div>
                <h4 class="contact-info-label">{info.label}</h4>
                <p class="contact-info-value">{info.value}</p>
                {(!info.description.is_empty()).then(|| view! {
                    <p class="contact-info-description">{info.description}</p>
                })}
            </div>
        </li>
    }
}

#[component]
fn ContactInfoList() -> impl IntoView {
    let info = use_contact_info();

    view! {
        <ul class="contact-info">
            {move || info.with(|state| match state.presentation() {
                Presentation::Items(items) => items
                    .iter()
                    .cloned()
                    .map(|info| view! { <ContactInfoCard info=info /> })
                    .collect_view()
                    .into_any(),
                other => placeholder_view(Placeholders::CONTACT_INFO, &other).into_any(),
            })}
        </ul>
    }
}

#[component]
fn FormField(
    field: ContactField,
    form: RwSignal<ContactForm>,
    set_submit_state: WriteSignal<SubmitState>,
) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase());
    let value = move || form.with(|f| f.get(field).to_string());
    let edit = move |text: String| {
        form.update(|f| f.set(field, text));
        set_submit_state.update(|state| {
            if *state == SubmitState::Sent {
                *state = SubmitState::Idle;
            }
        });
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea id=id.clone() name=id.clone() rows="5" prop:value=value on:input=move |ev| edit(event_target_value(&ev)) />
        }
        .into_any(),
        ContactField::Email => view! {
            <input id=id.clone() name=id.clone() type="email" prop:value=value on:input=move |ev| edit(event_target_value(&ev)) />
        }
        .into_any(),
        _ => view! {
            <input id=id.clone() name=id.clone() type="text" prop:value=value on:input=move |ev| edit(event_target_value(&ev)) />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=id>{field.label()}</label>
            {input}
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (submit_state, set_submit_state) = signal(SubmitState::Idle);
    let (errors, set_errors) = signal(Vec::<FormError>::new());
    let guard = MountGuard::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit_state.get_untracked() == SubmitState::Submitting {
            return;
        }

        let message = form.get_untracked();
        if let Err(problems) = message.validate() {
            set_errors.set(problems);
            return;
        }
        set_errors.set(Vec::new());
        set_submit_state.set(SubmitState::Submitting);

        let guard = guard.clone();
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            if !guard.is_mounted() {
                return;
            }
            tracing::info!(
                name = %message.name,
                email = %message.email,
                subject = %message.subject,
                message = %message.message,
                "contact message submitted"
            );
            form.update(ContactForm::reset);
            set_submit_state.set(SubmitState::Sent);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            {ContactField::ALL.iter().map(|field| view! {
                <FormField field=*field form=form set_submit_state=set_submit_state />
            }).collect_view()}

            <Show when=move || errors.with(|e| !e.is_empty())>
                <ul class="form-errors" role="alert">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e.to_string()}</li> }).collect_view()}
                </ul>
            </Show>

            <button
                class="button primary"
                type="submit"
                disabled=move || submit_state.get() == SubmitState::Submitting
            >
                <IconView icon=Icon::Send />
                {move || match submit_state.get() {
                    SubmitState::Submitting => "Sending...",
                    _ => "Send Message",
                }}
            </button>

            <Show when=move || submit_state.get() == SubmitState::Sent>
                <p class="form-success" role="status">"Thanks! Your message has been sent."</p>
            </Show>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section contact-section">
            <div class="section-inner">
                <h2 class="section-title">"Get In Touch"</h2>
                <p class="section-subtitle">
                    "Have a project in mind or just want to say hello? My inbox is open."
                </p>

                <div class="contact-grid">
                    <div class="contact-details">
                        <ContactInfoList />
                        <h3>"Find me online"</h3>
                        <SocialLinks show_usernames=true class="contact-social" />
                    </div>
                    <ContactFormView />
                </div>
            </div>
        </section>
    }
}
