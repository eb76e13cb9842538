// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{FromRef, Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn run_server_task(config: Arc<ConfigData>) {
	let task_result = run_server(config).await;
	if let Err(error) = task_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
}

async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;

	let app_state = AppState {
		leptos_options: web_config.leptos_options,
		config,
	};
	let site_addr = bind_addr(&app_state);
	let app = build_router(app_state);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(&site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

fn bind_addr(app_state: &AppState) -> String {
	let config = Arc::<ConfigData>::from_ref(app_state);
	config.web.bind_addr.clone()
}

/// Builds the full router: rendered app routes, then static files, then the app's not-found fallback.
pub fn build_router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.layer(TraceLayer::new_for_http())
		.with_state(app_state)
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let response = get_static_file(uri.clone(), &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		response.into_response()
	} else {
		tracing::debug!(path = %uri.path(), "No route or static file matched");
		let leptos_options = state.leptos_options.clone();
		let handler = render_app_to_stream(move || shell(leptos_options.clone()));
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}
