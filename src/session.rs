//! Session hand-off
//!
//! The client does not connect to the voice backend itself. When the start
//! control is activated it builds a [`StartCall`] from the configuration and
//! hands it to a [`SessionLauncher`], which owns provisioning.

use crate::config::{AppConfig, Sandbox};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Request handed to the session launcher when a call starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCall {
    /// Backend agent profile, if one is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    /// Sandbox to provision through, `None` when the sandbox feature is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_id: Option<String>,
    pub pre_connect_buffer: bool,
    pub chat_input: bool,
    pub video_input: bool,
    pub screen_share: bool,
}

impl StartCall {
    pub fn from_config(config: &AppConfig) -> Self {
        let sandbox_id = match config.sandbox() {
            Sandbox::Enabled(id) => Some(id),
            Sandbox::Disabled => None,
        };

        Self {
            agent_name: config.agent_name().map(str::to_string),
            sandbox_id,
            pre_connect_buffer: config.is_pre_connect_buffer_enabled,
            chat_input: config.supports_chat_input,
            video_input: config.supports_video_input,
            screen_share: config.supports_screen_share,
        }
    }
}

/// External collaborator that turns a start request into a live session
#[cfg_attr(test, mockall::automock)]
pub trait SessionLauncher {
    fn launch(&mut self, request: &StartCall) -> Result<()>;
}

/// Writes each request as one JSON line, for a supervising process to pick up
pub struct JsonLineLauncher<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineLauncher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLineLauncher<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SessionLauncher for JsonLineLauncher<W> {
    fn launch(&mut self, request: &StartCall) -> Result<()> {
        let line = serde_json::to_string(request).context("Failed to serialize start request")?;
        writeln!(self.writer, "{}", line).context("Failed to write start request")?;
        self.writer.flush().context("Failed to flush start request")?;

        tracing::info!(
            agent = request.agent_name.as_deref().unwrap_or("<none>"),
            sandbox = request.sandbox_id.is_some(),
            "Start request handed off"
        );
        Ok(())
    }
}
