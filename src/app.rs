//! Root application component with the session gate and routing.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::loading::LoadingIndicator;
use crate::config::GateConfig;
use crate::pages::{chat::ChatPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage};
use crate::state::credentials::CredentialHandler;
use crate::state::session::{SessionGate, SessionHandle};
use crate::util::auth::{self, Decision, Screen};
use crate::util::storage::{MarkerStore, default_store};

/// Root application component.
///
/// Owns the session gate, shares it with pages through context, and reads the
/// persisted marker once after mount. Until that read completes only the
/// loading indicator renders; no route is decided on pre-read status.
///
/// `store` defaults to `localStorage` in the browser. Without a
/// `credential_handler` the login and register forms report that sign-in is
/// unavailable.
#[component]
pub fn App(
    #[prop(optional)] config: Option<GateConfig>,
    #[prop(optional)] store: Option<Arc<dyn MarkerStore>>,
    #[prop(optional)] credential_handler: Option<CredentialHandler>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let store = store.unwrap_or_else(default_store);
    let session = SessionHandle::new(
        RwSignal::new(SessionGate::new()),
        store,
        config.marker_key.as_str(),
    );

    provide_context(config.clone());
    provide_context(session.clone());
    if let Some(handler) = credential_handler {
        provide_context(handler);
    }

    // Effects run after the first render, so the bootstrapping view is
    // painted before the marker is read.
    let init = session.clone();
    Effect::new(move || {
        init.initialize();
    });

    let ready = session.clone();

    view! {
        <Title text=config.app_title.clone()/>

        <Show
            when=move || ready.status().is_ready()
            fallback=|| view! { <LoadingIndicator/> }
        >
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=StaticSegment(auth::Route::Login.segment())
                        view=|| view! { <Guarded route=auth::Route::Login/> }
                    />
                    <Route
                        path=StaticSegment(auth::Route::Register.segment())
                        view=|| view! { <Guarded route=auth::Route::Register/> }
                    />
                    <Route
                        path=StaticSegment(auth::Route::Chat.segment())
                        view=|| view! { <Guarded route=auth::Route::Chat/> }
                    />
                    <Route
                        path=StaticSegment(auth::Route::Root.segment())
                        view=|| view! { <Guarded route=auth::Route::Root/> }
                    />
                </Routes>
            </Router>
        </Show>
    }
}

/// Render whatever the route guard decides for `route`, re-deciding only when
/// the decision itself changes.
#[component]
fn Guarded(route: auth::Route) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let decision = Memo::new(move |_| session.decide(route));

    move || match decision.get() {
        Decision::Render(screen) => render_screen(screen),
        Decision::Redirect(target) => {
            log::debug!("routing: {} -> {}", route.path(), target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}

fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::Loading => view! { <LoadingIndicator/> }.into_any(),
        Screen::Login => view! { <LoginPage/> }.into_any(),
        Screen::Register => view! { <RegisterPage/> }.into_any(),
        Screen::Chat => view! { <ChatPage/> }.into_any(),
    }
}
