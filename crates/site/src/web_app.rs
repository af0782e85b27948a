use std::rc::Rc;

use desktop_runtime::{DesktopHostContext, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{HttpFileBrowserService, WebAudioPort};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Brage Stofringshaug" />
        <Meta name="description" content="A personal portfolio presented as a simulated desktop OS." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_context = DesktopHostContext::new(
        Rc::new(WebAudioPort::new()),
        Rc::new(HttpFileBrowserService),
    );

    view! {
        <DesktopProvider host_context=host_context>
            <DesktopShell />
        </DesktopProvider>
    }
}
