//! Per-key color sourcing
//!
//! A frame takes its colors either from the effect canvas or from a constant,
//! depending on the lighting mode. Shutdown bypasses the mode entirely.

use crate::{
    color::{BLACK, Rgb},
    config::CANVAS,
    layout::Coordinate,
    settings::{LightingConfiguration, LightingMode},
};

/// Provider of the effect canvas for the current frame
///
/// Implemented by the host bridge. Closures taking a [`Coordinate`] work too.
pub trait FrameColors {
    /// Color of the canvas cell at `coordinate`
    fn color_at(&self, coordinate: Coordinate) -> Rgb;
}

impl<F> FrameColors for F
where
    F: Fn(Coordinate) -> Rgb,
{
    fn color_at(&self, coordinate: Coordinate) -> Rgb {
        self(coordinate)
    }
}

const CANVAS_CELLS: usize = CANVAS.width as usize * CANVAS.height as usize;

/// Owned snapshot of the device canvas, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasFrame {
    cells: [Rgb; CANVAS_CELLS],
}

impl CanvasFrame {
    /// Canvas with every cell set to `color`
    pub const fn filled(color: Rgb) -> Self {
        Self {
            cells: [color; CANVAS_CELLS],
        }
    }

    /// Set one cell, ignoring coordinates outside the canvas
    pub fn set(&mut self, coordinate: Coordinate, color: Rgb) {
        if let Some(i) = Self::index(coordinate) {
            self.cells[i] = color;
        }
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<Rgb> {
        Self::index(coordinate).map(|i| self.cells[i])
    }

    fn index(coordinate: Coordinate) -> Option<usize> {
        coordinate.in_canvas().then(|| {
            usize::from(coordinate.y) * usize::from(CANVAS.width) + usize::from(coordinate.x)
        })
    }
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self::filled(BLACK)
    }
}

impl FrameColors for CanvasFrame {
    fn color_at(&self, coordinate: Coordinate) -> Rgb {
        self.get(coordinate).unwrap_or(BLACK)
    }
}

/// Color source for one packet
pub enum ColorSource<'a, F: FrameColors + ?Sized> {
    /// Sample the canvas at each key
    Canvas(&'a F),
    /// One color for every key, from the lighting configuration
    Forced(Rgb),
    /// One color for every key, applied on shutdown
    Override(Rgb),
}

impl<'a, F: FrameColors + ?Sized> ColorSource<'a, F> {
    /// Source selected by the configured lighting mode
    pub fn for_frame(configuration: &LightingConfiguration, frame: &'a F) -> Self {
        match configuration.lighting_mode {
            LightingMode::Canvas => Self::Canvas(frame),
            LightingMode::Forced => Self::Forced(configuration.forced_color),
        }
    }

    /// Source for the terminal shutdown packet
    ///
    /// Suspending turns the keys off; otherwise the shutdown color applies.
    /// The lighting mode plays no part.
    pub fn for_shutdown(system_suspending: bool, configuration: &LightingConfiguration) -> Self {
        Self::Override(shutdown_color(system_suspending, configuration))
    }

    /// Color of the key at `coordinate`
    pub fn sample(&self, coordinate: Coordinate) -> Rgb {
        match self {
            Self::Canvas(frame) => frame.color_at(coordinate),
            Self::Forced(color) | Self::Override(color) => *color,
        }
    }
}

/// Color of the key at `coordinate` for a regular frame
pub fn sample<F: FrameColors + ?Sized>(
    coordinate: Coordinate,
    configuration: &LightingConfiguration,
    frame: &F,
) -> Rgb {
    ColorSource::for_frame(configuration, frame).sample(coordinate)
}

/// Color applied to every key on shutdown
pub fn shutdown_color(system_suspending: bool, configuration: &LightingConfiguration) -> Rgb {
    if system_suspending {
        BLACK
    } else {
        configuration.shutdown_color
    }
}
