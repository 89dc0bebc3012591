// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! midir backend.
//!
//! This module provides a midir implementation of the transport traits,
//! giving the device session cross-platform access to the system's MIDI
//! ports. midir clients are single-use (connecting consumes them), so a
//! fresh client is created per enumeration or connection.

use anyhow::{anyhow, Result};

use super::{InputConnection, MessageHandler, MidiOutput, MidiTransport};

/// midir-backed MIDI transport.
pub struct MidirTransport {
    client_name: String,
}

impl MidirTransport {
    /// Create a transport whose midir clients carry the given name.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

impl Default for MidirTransport {
    fn default() -> Self {
        Self::new("apc40")
    }
}

/// Keeps a midir input connection alive; dropping it closes the port.
struct MidirInputConnection {
    _connection: midir::MidiInputConnection<()>,
}

impl InputConnection for MidirInputConnection {}

struct MidirOutput {
    connection: midir::MidiOutputConnection,
}

impl MidiOutput for MidirOutput {
    fn send(&mut self, message: &[u8]) -> Result<()> {
        self.connection
            .send(message)
            .map_err(|e| anyhow!("Failed to send MIDI message: {}", e))
    }
}

impl MidiTransport for MidirTransport {
    fn input_port_names(&self) -> Vec<String> {
        match midir::MidiInput::new(&self.client_name) {
            Ok(input) => input
                .ports()
                .iter()
                .filter_map(|p| input.port_name(p).ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn output_port_names(&self) -> Vec<String> {
        match midir::MidiOutput::new(&self.client_name) {
            Ok(output) => output
                .ports()
                .iter()
                .filter_map(|p| output.port_name(p).ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn connect_input(
        &mut self,
        port_name: &str,
        mut handler: MessageHandler,
    ) -> Result<Box<dyn InputConnection>> {
        let mut input = midir::MidiInput::new(&self.client_name)
            .map_err(|e| anyhow!("Failed to create MIDI input client: {}", e))?;
        input.ignore(midir::Ignore::None);

        let port = input
            .ports()
            .into_iter()
            .find(|p| {
                input
                    .port_name(p)
                    .map(|name| name == port_name)
                    .unwrap_or(false)
            })
            .ok_or_else(|| anyhow!("MIDI input port '{}' not found", port_name))?;

        let connection = input
            .connect(
                &port,
                "apc40-input",
                move |_timestamp, message, _| handler(message),
                (),
            )
            .map_err(|e| anyhow!("Failed to connect MIDI input: {}", e))?;

        Ok(Box::new(MidirInputConnection {
            _connection: connection,
        }))
    }

    fn connect_output(&mut self, port_name: &str) -> Result<Box<dyn MidiOutput>> {
        let output = midir::MidiOutput::new(&self.client_name)
            .map_err(|e| anyhow!("Failed to create MIDI output client: {}", e))?;

        let port = output
            .ports()
            .into_iter()
            .find(|p| {
                output
                    .port_name(p)
                    .map(|name| name == port_name)
                    .unwrap_or(false)
            })
            .ok_or_else(|| anyhow!("MIDI output port '{}' not found", port_name))?;

        let connection = output
            .connect(&port, "apc40-output")
            .map_err(|e| anyhow!("Failed to connect MIDI output: {}", e))?;

        Ok(Box::new(MidirOutput { connection }))
    }
}

/// List all available MIDI input port names.
pub fn list_inputs() -> Vec<String> {
    MidirTransport::default().input_port_names()
}

/// List all available MIDI output port names.
pub fn list_outputs() -> Vec<String> {
    MidirTransport::default().output_port_names()
}
