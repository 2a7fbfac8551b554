use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconView};
use crate::components::remote_image::{logo_sources, RemoteImage};
use crate::config;
use crate::navigation::{self, NavAction, NavState, Section, Viewport};
use crate::utils::scroll::{DomViewport, ScrollListener};

/// Scroll-to-section action shared with the content below the header.
#[derive(Clone, PartialEq)]
pub struct SectionNavigator(Callback<Section>);

impl Default for SectionNavigator {
    fn default() -> Self {
        Self(Callback::from(|_: Section| ()))
    }
}

impl SectionNavigator {
    /// Click handler that navigates to `section`.
    pub fn to(&self, section: Section) -> Callback<MouseEvent> {
        let inner = self.0.clone();
        Callback::from(move |_: MouseEvent| inner.emit(section))
    }
}

/// Navigator provided by the enclosing [`NavigationShell`]; a no-op outside one.
#[hook]
pub fn use_section_navigator() -> SectionNavigator {
    use_context::<SectionNavigator>().unwrap_or_default()
}

pub fn header_classes(scrolled: bool) -> Classes {
    if scrolled {
        classes!("fixed", "w-full", "z-50", "transition-all", "duration-300", "bg-white/95", "backdrop-blur-md", "shadow-md", "py-2")
    } else {
        classes!("fixed", "w-full", "z-50", "transition-all", "duration-300", "bg-transparent", "py-4")
    }
}

pub fn cta_variant(scrolled: bool) -> ButtonVariant {
    if scrolled {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Fixed header plus the navigation state for everything it wraps.
#[function_component(NavigationShell)]
pub fn navigation_shell(props: &NavigationShellProps) -> Html {
    let nav = use_reducer_eq(NavState::default);
    let logo_failed = use_state_eq(|| false);

    // Scroll listener lives exactly as long as the shell
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = match ScrollListener::attach(move |offset| {
                    dispatcher.dispatch(NavAction::Scrolled(offset))
                }) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::warn!("Scroll styling disabled: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    // Built once so the context value stays equal across renders.
    let navigator = {
        let dispatcher = nav.dispatcher();
        use_memo(
            move |_| {
                SectionNavigator(Callback::from(move |section: Section| {
                    // A missing target leaves the page as it is.
                    match navigation::navigate(&DomViewport, section.id()) {
                        Ok(action) => dispatcher.dispatch(action),
                        Err(e) => log::debug!("Navigation skipped: {}", e),
                    }
                }))
            },
            (),
        )
    };

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let scroll_to_top = Callback::from(|_: MouseEvent| DomViewport.scroll_to_top());

    let on_logo_fallback = use_callback(
        |next: usize, _| log::debug!("Logo source failed, trying #{}", next),
        (),
    );

    let on_logo_exhausted = {
        let logo_failed = logo_failed.clone();
        use_memo(move |_| Callback::from(move |_: ()| logo_failed.set(true)), ())
    };

    let scrolled = nav.scrolled;
    let menu_open = nav.menu_open;

    html! {
        <>
            <nav class={header_classes(scrolled)}>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center">
                    <div class="flex items-center gap-3 cursor-pointer" onclick={scroll_to_top}>
                        <RemoteImage
                            sources={logo_sources()}
                            alt="RST Israel Logo"
                            class="h-16 w-auto object-contain"
                            on_fallback={on_logo_fallback}
                            on_exhausted={(*on_logo_exhausted).clone()}
                        />
                        if *logo_failed {
                            <div>
                                <span class={classes!("text-2xl", "font-bold", "tracking-tighter", if scrolled { "text-cyan-600" } else { "text-white" })}>{"RST"}</span>
                                <span class={classes!("text-2xl", "font-bold", "tracking-tighter", if scrolled { "text-slate-800" } else { "text-white" })}>{"ISRAEL"}</span>
                            </div>
                        }
                    </div>

                    <div class={classes!("hidden", "md:flex", "items-center", "gap-8", "font-medium", if scrolled { "text-slate-700" } else { "text-white/90" })}>
                        { for Section::ALL.iter().map(|&section| html! {
                            <button key={section.id()} onclick={navigator.to(section)} class="hover:text-cyan-500 transition-colors">
                                { section.label() }
                            </button>
                        }) }
                    </div>

                    <div class="hidden md:block">
                        <Button variant={cta_variant(scrolled)} onclick={navigator.to(Section::Contact)}>
                            <IconView icon={Icon::Phone} />
                            { config::PHONE }
                        </Button>
                    </div>

                    <button class="md:hidden text-cyan-600" onclick={toggle_menu} aria-expanded={menu_open.to_string()}>
                        if menu_open {
                            <IconView icon={Icon::Close} class="text-3xl" />
                        } else {
                            <IconView icon={Icon::Menu} class={classes!("text-3xl", if scrolled { "text-slate-800" } else { "text-white" })} />
                        }
                    </button>
                </div>

                if menu_open {
                    <div class="md:hidden absolute top-full left-0 w-full bg-white shadow-xl border-t border-slate-100">
                        <div class="flex flex-col p-4 gap-4 text-center">
                            { for Section::ALL.iter().map(|&section| {
                                let class = if section == Section::Contact {
                                    "py-2 text-cyan-600 font-bold"
                                } else {
                                    "py-2 text-slate-700 font-medium border-b border-slate-50"
                                };
                                html! {
                                    <button key={section.id()} onclick={navigator.to(section)} class={class}>
                                        { section.label() }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                }
            </nav>
            <ContextProvider<SectionNavigator> context={(*navigator).clone()}>
                { for props.children.iter() }
            </ContextProvider<SectionNavigator>>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_follows_scroll_state() {
        let resting = header_classes(false);
        assert!(resting.contains("bg-transparent"));
        assert!(resting.contains("py-4"));

        let scrolled = header_classes(true);
        assert!(scrolled.contains("shadow-md"));
        assert!(scrolled.contains("py-2"));
        assert!(!scrolled.contains("bg-transparent"));
    }

    #[test]
    fn call_button_turns_primary_once_scrolled() {
        assert_eq!(cta_variant(false), ButtonVariant::Secondary);
        assert_eq!(cta_variant(true), ButtonVariant::Primary);
    }
}
