// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use face_blur_web::config::parse_config;
use face_blur_web::web::server::run_server_task;
use std::sync::Arc;

#[tokio::main]
async fn main() -> miette::Result<()> {
	let config = parse_config("config.kdl").await?;

	tracing_subscriber::fmt().with_max_level(config.log.level).init();
	tracing::debug!(?config, "Loaded configuration");

	run_server_task(Arc::new(config)).await;

	Ok(())
}
