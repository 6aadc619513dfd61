//! Timeline, wishlist, and gallery pages.
//!
//! Each page is a titled panel; content sources live outside this crate.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;

#[component]
fn FeaturePanel(name: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="feature" data-feature=name>
            <p class="feature__blurb">{blurb}</p>
            <div class="feature__empty">"Nothing here yet."</div>
        </section>
    }
}

#[component]
pub fn TimelinePage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout title="Timeline">
                <FeaturePanel name="timeline" blurb="Moments you have shared, newest first."/>
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout title="Wishlist">
                <FeaturePanel name="wishlist" blurb="Places to go and things to do together."/>
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout title="Gallery">
                <FeaturePanel name="gallery" blurb="Your personal photo collection."/>
            </Layout>
        </ProtectedRoute>
    }
}
