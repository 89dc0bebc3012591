// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI I/O abstraction layer.
//!
//! This module provides a trait-based abstraction over MIDI transport,
//! so the device session never touches OS MIDI APIs directly and tests
//! can substitute a scripted transport.

pub mod midir_backend;

pub use midir_backend::{list_inputs, list_outputs, MidirTransport};

use anyhow::Result;

/// Callback invoked with the raw bytes of each inbound MIDI message.
pub type MessageHandler = Box<dyn FnMut(&[u8]) + Send + 'static>;

/// Trait for MIDI output implementations.
///
/// # Arguments to `send`
/// * `message` - Raw MIDI bytes (e.g., `[0x90, 0x35, 1]` for Note On)
pub trait MidiOutput: Send {
    /// Send a MIDI message immediately.
    fn send(&mut self, message: &[u8]) -> Result<()>;
}

/// A live MIDI input registration.
///
/// The handler passed at connect time keeps firing for as long as this
/// handle is alive; dropping the handle closes the input.
pub trait InputConnection: Send {}

/// Trait for MIDI transport backends: port enumeration plus opening
/// input and output connections by exact port name.
pub trait MidiTransport: Send {
    /// Names of the available input ports.
    fn input_port_names(&self) -> Vec<String>;

    /// Names of the available output ports.
    fn output_port_names(&self) -> Vec<String>;

    /// Open the named input port, delivering every inbound message to
    /// `handler`.
    fn connect_input(
        &mut self,
        port_name: &str,
        handler: MessageHandler,
    ) -> Result<Box<dyn InputConnection>>;

    /// Open the named output port.
    fn connect_output(&mut self, port_name: &str) -> Result<Box<dyn MidiOutput>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock MIDI output for testing
    struct MockMidiOutput {
        messages: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl MidiOutput for MockMidiOutput {
        fn send(&mut self, message: &[u8]) -> Result<()> {
            self.messages.lock().unwrap().push(message.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_mock_output_captures_messages() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let mut output = MockMidiOutput {
            messages: Arc::clone(&messages),
        };

        output.send(&[0x90, 0x35, 1]).unwrap();
        output.send(&[0xB0, 0x07, 0]).unwrap();

        let captured = messages.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0], vec![0x90, 0x35, 1]);
        assert_eq!(captured[1], vec![0xB0, 0x07, 0]);
    }

    #[test]
    fn test_output_is_object_safe() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let mut output: Box<dyn MidiOutput> = Box::new(MockMidiOutput { messages });
        output.send(&[0x80, 0x35, 0]).unwrap();
    }
}
