// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

/// Static "page not found" view. Renders the same markup every time and touches no context,
/// so setting the response status is left to whatever routes here.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="flex items-center w-screen p-16">
			<div class="container flex flex-col items-center">
				<div class="flex flex-col gap-6 max-w-md text-center">
					<h2 class="font-extrabold text-9xl text-gray-600 dark:text-gray-100">
						<span class="sr-only">"Error"</span>
						"404"
					</h2>
					<p class="text-2xl md:text-3xl dark:text-gray-300">"Sorry, we couldn't find this page."</p>
					<a
						href="/"
						class="px-8 py-4 text-xl font-semibold rounded bg-amber-400 text-gray-50 hover:bg-amber-600"
					>
						"Back to home"
					</a>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render() -> String {
		view! { <NotFound /> }.to_html()
	}

	#[test]
	fn shows_error_code() {
		assert!(render().contains("404"));
	}

	#[test]
	fn error_label_is_screen_reader_only() {
		let html = render();
		assert!(html.contains(r#"<span class="sr-only">Error</span>"#));
		assert!(html.find("sr-only").unwrap() < html.find("404").unwrap());
	}

	#[test]
	fn shows_message_verbatim() {
		assert!(render().contains("Sorry, we couldn't find this page."));
	}

	#[test]
	fn has_single_link_back_to_root() {
		let html = render();
		assert_eq!(html.matches("<a ").count(), 1);
		assert_eq!(html.matches("href=").count(), 1);
		assert!(html.contains(r#"href="/""#));
		assert!(html.contains("Back to home</a>"));
	}

	#[test]
	fn renders_identically_each_time() {
		assert_eq!(render(), render());
	}
}
