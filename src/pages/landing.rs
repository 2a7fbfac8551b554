use yew::prelude::*;

use crate::components::navbar::NavigationShell;
use crate::navigation::Section;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::services::Services;
use crate::sections::stats::StatsBar;
use crate::sections::technology::Technology;
use crate::utils::scroll::element_exists;

fn check_section_anchors() {
    for section in Section::ALL {
        match element_exists(section.id()) {
            Ok(true) => {}
            Ok(false) => log::error!("No element with id `{}`; its menu entries do nothing", section),
            Err(e) => log::debug!("Skipping anchor check: {}", e),
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Menu ids and section anchors must agree; a mismatch would make
    // navigation silently do nothing.
    {
        use_effect_with_deps(
            move |_| {
                if cfg!(debug_assertions) {
                    check_section_anchors();
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div dir="rtl" class="font-sans text-slate-800 bg-slate-50 min-h-screen">
            <NavigationShell>
                <Hero />
                <StatsBar />
                <Services />
                <Technology />
                <About />
                <Contact />
                <Footer />
            </NavigationShell>
        </div>
    }
}
