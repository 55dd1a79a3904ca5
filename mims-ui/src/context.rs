/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Context providers for the application
//!
//! Holds the colour theme shared by every toggle on the page and applies it
//! to the document root.

use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class placed on `<html>`; the stylesheet keys its palette on it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub enum ThemeAction {
    Toggle,
    Set(Theme),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let theme = match action {
            ThemeAction::Toggle => self.theme.toggled(),
            ThemeAction::Set(theme) => theme,
        };
        if theme == self.theme {
            return self;
        }
        Rc::new(ThemeState { theme })
    }
}

/// Theme context handed out by [`ThemeProvider`].
pub type ThemeCtx = UseReducerHandle<ThemeState>;

/// Follows the operating system preference, dark when unknown.
pub fn initial_theme() -> Theme {
    let prefers_light = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Swap the theme class on the document element.
pub fn apply_theme(theme: Theme) {
    let classes = gloo_utils::document_element().class_list();
    let _ = classes.remove_1(theme.toggled().class_name());
    if let Err(e) = classes.add_1(theme.class_name()) {
        log::warn!("Could not apply theme {theme:?}: {e:?}");
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub initial: Option<Theme>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let initial = props.initial;
    let state = use_reducer(move || ThemeState {
        theme: initial.unwrap_or_else(initial_theme),
    });

    {
        let theme = state.theme;
        use_effect_with(theme, move |theme| {
            log::debug!("Theme set to {theme:?}");
            apply_theme(*theme);
        });
    }

    html! {
        <ContextProvider<ThemeCtx> context={state}>
            { props.children.clone() }
        </ContextProvider<ThemeCtx>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_dark_and_light() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn reducer_handles_toggle_and_set() {
        let state = Rc::new(ThemeState::default());
        let state = state.reduce(ThemeAction::Toggle);
        assert_eq!(state.theme, Theme::Light);

        let same = state.clone().reduce(ThemeAction::Set(Theme::Light));
        assert!(Rc::ptr_eq(&state, &same));

        let state = same.reduce(ThemeAction::Set(Theme::Dark));
        assert!(state.theme.is_dark());
    }
}
