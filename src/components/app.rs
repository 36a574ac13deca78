use super::{error_panel::ErrorPanel, game_view::GameView};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::state::MarkerRegistryHandle;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::default());
    let catalog = use_memo((), |_| Catalog::embedded());
    // Owned here so both the tiles and the connector canvas see one registry
    let markers = use_state(MarkerRegistryHandle::default);

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            if let Err(err) = &*catalog {
                gloo::console::error!(format!("failed to load catalog: {err}"));
            }
            || ()
        });
    }

    let content = match &*catalog {
        Ok(catalog) => html! { <GameView catalog={catalog.clone()} /> },
        Err(err) => html! { <ErrorPanel message={err.to_string()} /> },
    };

    html! {
        <ContextProvider<GameConfig> context={(*config).clone()}>
            <ContextProvider<MarkerRegistryHandle> context={(*markers).clone()}>
                { content }
            </ContextProvider<MarkerRegistryHandle>>
        </ContextProvider<GameConfig>>
    }
}
