//! Boundary with the rendering side.
//!
//! A [`Canvas`] is an opaque drawing surface that accepts UV-addressed draw
//! commands. Brushes never learn whether a command succeeded.

use std::collections::HashMap;

use glam::Vec2;

use crate::types::{BoardId, WheelUniform};

/// A single draw command in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasCommand {
    /// Center of the drawn quad in pixels
    pub center: Vec2,
    /// Quad size in pixels
    pub size: Vec2,
    /// Quad rotation in degrees
    pub rotation: f32,
    /// Material parameters for the stroke
    pub params: WheelUniform,
}

/// Opaque drawing surface
pub trait Canvas {
    fn draw(&mut self, command: CanvasCommand);
}

/// Canvas that keeps every command it receives.
///
/// Useful as a command buffer for a renderer that flushes once per frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Take all recorded commands, leaving the canvas empty
    pub fn drain(&mut self) -> Vec<CanvasCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, command: CanvasCommand) {
        self.commands.push(command);
    }
}

/// Resolves the canvas a board renders into
pub trait CanvasProvider {
    fn canvas(&mut self, board: BoardId) -> Option<&mut dyn Canvas>;
}

impl<C: Canvas> CanvasProvider for HashMap<BoardId, C> {
    fn canvas(&mut self, board: BoardId) -> Option<&mut dyn Canvas> {
        self.get_mut(&board).map(|c| c as &mut dyn Canvas)
    }
}
