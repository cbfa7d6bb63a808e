//! Contact Page
//!
//! Controlled name, email and message inputs. Submitting logs the form
//! contents and sends nothing. State lives in the page, so navigating away
//! and back mounts an empty form.

use leptos::*;
use outbreak::contact::{ContactField, ContactForm};

/// Contact form page
#[component]
pub fn Contact() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.with(|f| f.submit());
    };

    view! {
        <div class="max-w-lg mx-auto bg-white rounded-xl shadow p-6">
            <h1 class="text-3xl font-bold mb-6">"Contact Us"</h1>

            <form on:submit=on_submit class="space-y-4">
                <TextInput form=form field=ContactField::Name input_type="text" />
                <TextInput form=form field=ContactField::Email input_type="email" />

                <div>
                    <label class="block text-sm font-medium mb-1" for=ContactField::Message.name()>
                        {ContactField::Message.label()}
                    </label>
                    <textarea
                        id=ContactField::Message.name()
                        name=ContactField::Message.name()
                        rows="5"
                        class="w-full border border-gray-300 rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                        }
                    />
                </div>

                <button type="submit" class="bg-blue-500 text-white py-2 px-4 rounded-md">
                    "Submit"
                </button>
            </form>
        </div>
    }
}

/// Single-line labelled input bound to one form field
#[component]
fn TextInput(
    form: RwSignal<ContactForm>,
    field: ContactField,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium mb-1" for=field.name()>
                {field.label()}
            </label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                class="w-full border border-gray-300 rounded-md px-3 py-2"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
