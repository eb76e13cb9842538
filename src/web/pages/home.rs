// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main id="home_page" class="flex flex-col items-center p-16">
			<h1 class="font-extrabold text-5xl">"Face Blur"</h1>
			<p class="text-xl">"Find and obscure the faces in your images and videos."</p>
		</main>
	}
}
