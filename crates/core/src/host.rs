//! Interfaces to the host player.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};

/// The configuration file read when the host does not name one.
pub const DEFAULT_INPUT_CONF: &str = "~~/input.conf";

/// Read access to the host player.
pub trait Host {
    /// Returns the value of the `input-conf` property.
    fn input_conf(&self) -> Option<String>;

    /// Reads a file, expanding host path prefixes such as `~~/`.
    fn read_file(&self, path: &str) -> io::Result<String>;
}

/// Fire-and-forget delivery of commands to the host player.
pub trait Dispatch {
    /// Queues a command. It may be dropped; nothing is reported back.
    fn command_async(&self, command: &str);
}

impl<F> Dispatch for F
where
    F: Fn(&str),
{
    fn command_async(&self, command: &str) {
        self(command);
    }
}

/// A [`Dispatch`] that forwards commands to a channel.
///
/// The host drains the [`Receiver`] on its own thread.
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: Sender<String>,
}

impl CommandSender {
    /// Creates a new [`CommandSender`] and the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, Receiver<String>) {
        let (sender, receiver) = mpsc::channel();

        (Self { sender }, receiver)
    }
}

impl Dispatch for CommandSender {
    fn command_async(&self, command: &str) {
        if self.sender.send(command.to_owned()).is_err() {
            log::debug!("Command dropped, receiver is gone: {command}");
        }
    }
}
