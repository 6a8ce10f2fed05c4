use yew::prelude::*;

/// Shared light/dark state. Owned by the app root and handed down through
/// context; `toggle` is the only way any section flips it.
#[derive(Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().expect("Theme context not provided")
}
