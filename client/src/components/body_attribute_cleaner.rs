//! Mounts the `<body>` attribute cleanup for the lifetime of the app.

use leptos::prelude::*;

/// Renders nothing. In the browser it installs a
/// [`BodyCleanupGuard`](crate::util::body_attrs::BodyCleanupGuard) once the
/// app is hydrated and drops it when this component's owner is cleaned up.
#[component]
pub fn BodyAttributeCleaner() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::body_attrs::BodyCleanupGuard;

        let guard = StoredValue::new_local(None::<BodyCleanupGuard>);

        Effect::new(move || {
            if guard.with_value(Option::is_some) {
                return;
            }
            if let Some(installed) = BodyCleanupGuard::install() {
                guard.set_value(Some(installed));
            } else {
                log::debug!("body attribute cleanup already registered");
            }
        });

        on_cleanup(move || {
            let _ = guard.try_update_value(Option::take);
        });
    }
}
