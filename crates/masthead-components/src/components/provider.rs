use dioxus::prelude::*;
use masthead_common::AuthorRegistry;

/// Makes `registry` available to every author component below it.
#[component]
pub fn RegistryProvider(registry: AuthorRegistry, children: Element) -> Element {
    use_context_provider(|| registry.clone());
    rsx! {
        {children}
    }
}

/// The nearest [`AuthorRegistry`] provided above this component.
///
/// Author components render nothing without one.
pub fn use_author_registry() -> Option<AuthorRegistry> {
    let registry = try_use_context::<AuthorRegistry>();
    if registry.is_none() {
        tracing::warn!("no AuthorRegistry in context, author components will render nothing");
    }
    registry
}
