use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icon::{Icon, IconView};
use crate::content::{self, ContactChannel};
use crate::navigation::Section;

const INPUT_CLASSES: &str = "w-full px-4 py-2 border border-slate-300 rounded-lg focus:ring-2 focus:ring-cyan-500 focus:border-cyan-500 outline-none transition-all";

fn channel_row(channel: &ContactChannel) -> Html {
    let value_class = if channel.ltr {
        "text-xl font-bold text-slate-900 text-right"
    } else {
        "text-lg font-medium text-slate-900"
    };
    html! {
        <div key={channel.label} class="flex items-center gap-4 group">
            <div class="w-12 h-12 bg-cyan-100 rounded-full flex items-center justify-center text-cyan-600 group-hover:bg-cyan-600 group-hover:text-white transition-colors">
                <IconView icon={channel.icon} class="text-xl" />
            </div>
            <div>
                <p class="text-sm text-slate-500">{ channel.label }</p>
                <p class={value_class} dir={channel.ltr.then_some("ltr")}>{ channel.value }</p>
            </div>
        </div>
    }
}

/// Enquiry form. Nothing is sent: there is no backend to receive it.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <form class="space-y-4" onsubmit={onsubmit}>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label for="contact-name" class="block text-sm font-medium text-slate-700 mb-1">{"שם מלא"}</label>
                    <input id="contact-name" type="text" class={INPUT_CLASSES} />
                </div>
                <div>
                    <label for="contact-phone" class="block text-sm font-medium text-slate-700 mb-1">{"טלפון"}</label>
                    <input id="contact-phone" type="tel" class={INPUT_CLASSES} />
                </div>
            </div>

            <div>
                <label for="contact-topic" class="block text-sm font-medium text-slate-700 mb-1">{"נושא הפנייה"}</label>
                <select id="contact-topic" class={classes!(INPUT_CLASSES, "bg-white", "text-slate-700")}>
                    { for content::CONTACT_TOPICS.iter().map(|topic| html! {
                        <option key={*topic}>{ *topic }</option>
                    }) }
                </select>
            </div>

            <div>
                <label for="contact-message" class="block text-sm font-medium text-slate-700 mb-1">{"הודעה"}</label>
                <textarea id="contact-message" rows="4" class={INPUT_CLASSES} />
            </div>

            <Button kind="submit" class={classes!("w-full", "justify-center")}>
                {"שלח פנייה"}
                <IconView icon={Icon::ArrowLeft} class="mr-2" />
            </Button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                <div>
                    <h2 class="text-4xl font-bold text-slate-900 mb-6">{ content::CONTACT_TITLE }</h2>
                    <p class="text-lg text-slate-600 mb-8">{ content::CONTACT_LEAD }</p>
                    <div class="space-y-6">
                        { for content::CONTACT_CHANNELS.iter().map(channel_row) }
                    </div>
                </div>

                <div class="bg-white p-8 rounded-2xl shadow-lg border border-slate-100">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
