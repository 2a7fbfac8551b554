//! Image that walks an ordered list of sources when loading fails.
//!
//! The component only reacts to the browser's `error` event; fetching and
//! caching stay with the browser.

use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStep {
    /// Retry with the source at this index.
    Next(usize),
    /// Every source failed.
    Exhausted,
}

/// Position in a list of `len` candidate sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChain {
    len: usize,
    index: usize,
}

impl FallbackChain {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn at(len: usize, index: usize) -> Self {
        Self { len, index }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<usize> {
        (self.index < self.len).then_some(self.index)
    }

    /// Called after the current source failed.
    pub fn advance(&mut self) -> FallbackStep {
        if self.index < self.len {
            self.index += 1;
        }
        match self.current() {
            Some(next) => FallbackStep::Next(next),
            None => FallbackStep::Exhausted,
        }
    }
}

/// Themed remote logo, then the copy shipped with the site.
pub fn logo_sources() -> Vec<AttrValue> {
    vec![
        AttrValue::Static(config::REMOTE_LOGO),
        AttrValue::from(config::asset_url(config::LOCAL_LOGO)),
    ]
}

#[derive(Properties, PartialEq)]
pub struct RemoteImageProps {
    /// Tried in order; the first is the primary resource.
    pub sources: Vec<AttrValue>,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired with the index of the source being tried next.
    #[prop_or_default]
    pub on_fallback: Option<Callback<usize>>,
    #[prop_or_default]
    pub on_exhausted: Option<Callback<()>>,
}

#[function_component(RemoteImage)]
pub fn remote_image(props: &RemoteImageProps) -> Html {
    let index = use_state_eq(|| 0usize);
    let chain = FallbackChain::at(props.sources.len(), *index);

    let onerror = {
        let index = index.clone();
        let on_fallback = props.on_fallback.clone();
        let on_exhausted = props.on_exhausted.clone();
        Callback::from(move |_: Event| {
            let mut chain = chain;
            let step = chain.advance();
            index.set(chain.position());
            match step {
                FallbackStep::Next(next) => {
                    if let Some(cb) = &on_fallback {
                        cb.emit(next);
                    }
                }
                FallbackStep::Exhausted => {
                    if let Some(cb) = &on_exhausted {
                        cb.emit(());
                    }
                }
            }
        })
    };

    match chain.current().and_then(|i| props.sources.get(i)) {
        Some(src) => html! {
            <img src={src.clone()} alt={props.alt.clone()} class={props.class.clone()} onerror={onerror} />
        },
        None => html! {},
    }
}
