use leptos::{either::Either, ev, prelude::*, task::spawn_local};

use crate::{
    config::{EmailJsConfig, CONTACT_EMAIL, CONTACT_PHONE, LOCATION},
    contact::{submit, ContactForm, EmailJsSender, Field, FormErrors, SubmitStatus},
};

use super::cursor::cursor_hover;

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FormErrors>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{field}");
    let error = move || errors.with(|e| e.get(field).map(str::to_string));
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    };
    let input_class = "w-full px-4 py-3 rounded-lg border bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-foreground/40";

    view! {
        <div class="flex flex-col gap-2">
            <label for=id.clone() class="text-sm font-medium">
                {field.label()}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=field.as_str()
                            rows="6"
                            class=input_class
                            class=("border-red-500", move || error().is_some())
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            name=field.as_str()
                            type=if field == Field::Email { "email" } else { "text" }
                            class=input_class
                            class=("border-red-500", move || error().is_some())
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || error().map(|msg| view! { <p class="text-sm text-red-500">{msg}</p> })}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        pending.set(true);
        status.set(SubmitStatus::Idle);

        spawn_local(async move {
            let sender = EmailJsSender::new(EmailJsConfig::from_env());
            match submit(&snapshot, sender.config().recipient, &sender).await {
                Ok(outcome) => {
                    if outcome == SubmitStatus::Success {
                        form.set(ContactForm::default());
                    }
                    errors.set(FormErrors::default());
                    status.set(outcome);
                }
                Err(field_errors) => {
                    log::debug!("contact form has {} invalid fields", field_errors.len());
                    errors.set(field_errors);
                }
            }
            pending.set(false);
        });
    };

    let status_message = move || match status.get() {
        SubmitStatus::Idle => None,
        SubmitStatus::Success => Some(Either::Left(view! {
            <p class="p-4 rounded-lg bg-green-100 text-green-800" role="status">
                "Thank you! Your message has been sent. I'll get back to you soon."
            </p>
        })),
        SubmitStatus::Error => Some(Either::Right(view! {
            <p class="p-4 rounded-lg bg-red-100 text-red-800" role="alert">
                "Sorry, something went wrong. Please try again or email me directly."
            </p>
        })),
    };

    view! {
        <section id="contact" class="py-24 bg-background text-foreground">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="badge">"Contact"</span>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mt-4">"Let's Work Together"</h2>
                    <p class="text-lg text-muted mt-4 max-w-2xl mx-auto">
                        "Have a project in mind? Send a message and I'll reply within a day or two."
                    </p>
                </div>
                <div class="grid gap-12 lg:grid-cols-[1fr_2fr]">
                    <div class="flex flex-col gap-6">
                        <ContactInfo icon="extra-email" label="Email" href=format!("mailto:{CONTACT_EMAIL}") value=CONTACT_EMAIL />
                        <ContactInfo icon="extra-phone" label="Phone" href=format!("tel:{CONTACT_PHONE}") value=CONTACT_PHONE />
                        <ContactInfo icon="extra-location" label="Location" value=LOCATION />
                    </div>
                    <form class="flex flex-col gap-6" novalidate=true on:submit=on_submit>
                        <div class="grid gap-6 md:grid-cols-2">
                            <FormField field=Field::Name form errors />
                            <FormField field=Field::Email form errors />
                        </div>
                        <FormField field=Field::Subject form errors />
                        <FormField field=Field::Message form errors multiline=true />
                        {status_message}
                        <button
                            type="submit"
                            class="btn btn-primary self-start"
                            disabled=move || pending.get()
                            use:cursor_hover
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="w-12 h-12 rounded-full border border-foreground/30 flex items-center justify-center text-xl">
                <i class=icon aria-hidden="true"></i>
            </span>
            <div>
                <p class="text-sm text-muted">{label}</p>
                {match href {
                    Some(href) => Either::Left(view! {
                        <a href=href class="font-medium hover:underline" use:cursor_hover>{value}</a>
                    }),
                    None => Either::Right(view! { <p class="font-medium">{value}</p> }),
                }}
            </div>
        </div>
    }
}
