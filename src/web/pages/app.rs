// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::home::Home;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/face-blur-web.css" />
		<Title text="Face Blur" />

		<Router>
			<Routes fallback=|| view! { <MissingPage /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

#[component]
fn MissingPage() -> impl IntoView {
	#[cfg(feature = "ssr")]
	set_not_found_status();

	view! { <NotFound /> }
}

/// Marks the server response as a 404. Does nothing when rendering outside of a request.
#[cfg(feature = "ssr")]
fn set_not_found_status() {
	use axum::http::StatusCode;
	use leptos_axum::ResponseOptions;

	if let Some(response_options) = use_context::<ResponseOptions>() {
		response_options.set_status(StatusCode::NOT_FOUND);
	}
}
