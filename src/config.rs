// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, bail, ensure};
use std::net::SocketAddr;
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_str(config_path, &config_file_contents)
}

/// Parses the contents of a config file. `source_name` is only used in error messages.
pub fn parse_config_str(source_name: &str, contents: &str) -> miette::Result<ConfigData> {
	let config_document: KdlDocument = contents.parse().into_diagnostic()?;

	let Some(web_node) = config_document.get("web") else {
		bail!("{}: missing `web` block", source_name);
	};
	let web = WebConfig::from_node(source_name, web_node)?;

	let log = match config_document.get("log") {
		Some(log_node) => LogConfig::from_node(source_name, log_node)?,
		None => LogConfig::default(),
	};

	Ok(ConfigData { web, log })
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log: LogConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

impl WebConfig {
	fn from_node(source_name: &str, node: &KdlNode) -> miette::Result<Self> {
		let Some(children) = node.children() else {
			bail!("{}: `web` block is empty", source_name);
		};
		let Some(bind_addr) = children.get_arg("bind_addr") else {
			bail!("{}: missing `web.bind_addr`", source_name);
		};
		let Some(bind_addr) = bind_addr.as_string() else {
			bail!("{}: `web.bind_addr` must be a string", source_name);
		};
		ensure!(
			bind_addr.parse::<SocketAddr>().is_ok(),
			"{}: `web.bind_addr` is not a socket address: {}",
			source_name,
			bind_addr
		);

		Ok(Self {
			bind_addr: bind_addr.to_string(),
		})
	}
}

#[derive(Debug)]
pub struct LogConfig {
	pub level: Level,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self { level: Level::INFO }
	}
}

impl LogConfig {
	fn from_node(source_name: &str, node: &KdlNode) -> miette::Result<Self> {
		let Some(level) = node.children().and_then(|children| children.get_arg("level")) else {
			return Ok(Self::default());
		};
		let Some(level) = level.as_string() else {
			bail!("{}: `log.level` must be a string", source_name);
		};
		let Ok(level) = level.parse::<Level>() else {
			bail!("{}: unknown log level: {}", source_name, level);
		};

		Ok(Self { level })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_config() {
		let config = parse_config_str(
			"config.kdl",
			r#"
			web {
				bind_addr "127.0.0.1:3000"
			}
			log {
				level "debug"
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
		assert_eq!(config.log.level, Level::DEBUG);
	}

	#[test]
	fn log_level_defaults_to_info() {
		let config = parse_config_str("config.kdl", "web {\n\tbind_addr \"0.0.0.0:8080\"\n}\n").unwrap();
		assert_eq!(config.log.level, Level::INFO);

		let config = parse_config_str("config.kdl", "web {\n\tbind_addr \"0.0.0.0:8080\"\n}\nlog\n").unwrap();
		assert_eq!(config.log.level, Level::INFO);
	}

	#[test]
	fn log_level_is_case_insensitive() {
		let config = parse_config_str(
			"config.kdl",
			"web {\n\tbind_addr \"[::1]:3000\"\n}\nlog {\n\tlevel \"WARN\"\n}\n",
		)
		.unwrap();
		assert_eq!(config.log.level, Level::WARN);
	}

	#[test]
	fn rejects_missing_web_block() {
		let error = parse_config_str("config.kdl", "log {\n\tlevel \"info\"\n}\n").unwrap_err();
		assert!(error.to_string().contains("missing `web` block"));
	}

	#[test]
	fn rejects_missing_bind_addr() {
		let error = parse_config_str("config.kdl", "web {\n}\n").unwrap_err();
		assert!(error.to_string().contains("missing `web.bind_addr`"));
	}

	#[test]
	fn rejects_non_string_bind_addr() {
		let error = parse_config_str("config.kdl", "web {\n\tbind_addr 3000\n}\n").unwrap_err();
		assert!(error.to_string().contains("must be a string"));
	}

	#[test]
	fn rejects_invalid_bind_addr() {
		let error = parse_config_str("config.kdl", "web {\n\tbind_addr \"localhost\"\n}\n").unwrap_err();
		assert!(error.to_string().contains("not a socket address"));
	}

	#[test]
	fn rejects_unknown_log_level() {
		let error = parse_config_str(
			"config.kdl",
			"web {\n\tbind_addr \"127.0.0.1:3000\"\n}\nlog {\n\tlevel \"loud\"\n}\n",
		)
		.unwrap_err();
		assert!(error.to_string().contains("unknown log level: loud"));
	}

	#[test]
	fn rejects_non_string_log_level() {
		let error = parse_config_str(
			"config.kdl",
			"web {\n\tbind_addr \"127.0.0.1:3000\"\n}\nlog {\n\tlevel 3\n}\n",
		)
		.unwrap_err();
		assert!(error.to_string().contains("`log.level` must be a string"));
	}

	#[test]
	fn rejects_malformed_kdl() {
		assert!(parse_config_str("config.kdl", "web {\n\tbind_addr \"127.0.0.1:3000\"\n").is_err());
	}
}
