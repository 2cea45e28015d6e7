//! Render cycle - two-state machine driving the keyboard
//!
//! `Active` is entered on construction and re-entered by every frame.
//! `Shutdown` is terminal: after the shutdown packet nothing else is sent for
//! the rest of the device session.

use core::fmt;

use crate::{
    driver::{ReportTransport, TransportError},
    layout::LayoutTable,
    packet::{PacketBuilder, REPORT_LEN},
    settings::LightingConfiguration,
    source::{CanvasFrame, ColorSource, FrameColors},
};

/// Render cycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Rendering frames
    Active,
    /// Shutdown packet sent, no further output
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Report could not be written
    Transport(TransportError),
    /// Render or shutdown requested after the terminal shutdown
    SessionEnded,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Transport(e) => write!(f, "transport error: {}", e),
            RenderError::SessionEnded => write!(f, "device session already shut down"),
        }
    }
}

impl core::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            RenderError::Transport(e) => Some(e),
            RenderError::SessionEnded => None,
        }
    }
}

impl From<TransportError> for RenderError {
    fn from(e: TransportError) -> Self {
        RenderError::Transport(e)
    }
}

/// Render cycle for one device session
///
/// Generic over `T: ReportTransport` so the same pipeline drives the real
/// device and test doubles.
pub struct RenderCycle<T: ReportTransport> {
    /// Validated key layout
    layout: LayoutTable,
    /// Packet assembly for `layout`
    builder: PacketBuilder,
    /// Report output
    transport: T,
    state: CycleState,
    /// Packets sent this session
    frames: u32,
}

impl<T: ReportTransport> RenderCycle<T> {
    pub fn new(layout: LayoutTable, transport: T) -> Self {
        let builder = PacketBuilder::new(&layout);
        Self {
            layout,
            builder,
            transport,
            state: CycleState::Active,
            frames: 0,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Packets sent this session
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Render one frame
    ///
    /// Colors come from `frame` or the forced color, as selected by
    /// `configuration`. Returns once the packet is sent and the settle delay
    /// has elapsed.
    pub fn render<F>(
        &mut self,
        configuration: &LightingConfiguration,
        frame: &F,
    ) -> Result<(), RenderError>
    where
        F: FrameColors + ?Sized,
    {
        if self.state == CycleState::Shutdown {
            return Err(RenderError::SessionEnded);
        }
        let source = ColorSource::for_frame(configuration, frame);
        self.transmit(&source)
    }

    /// Send the shutdown packet and enter the terminal state
    ///
    /// All keys go dark when the system is suspending; otherwise they show the
    /// configured shutdown color. The state becomes `Shutdown` even if the
    /// write fails.
    pub fn shutdown(
        &mut self,
        system_suspending: bool,
        configuration: &LightingConfiguration,
    ) -> Result<(), RenderError> {
        if self.state == CycleState::Shutdown {
            return Err(RenderError::SessionEnded);
        }
        self.state = CycleState::Shutdown;

        #[cfg(feature = "log")]
        log::info!(
            "render: shutdown after {} frames, suspending={}",
            self.frames,
            system_suspending
        );

        let source = ColorSource::<CanvasFrame>::for_shutdown(system_suspending, configuration);
        self.transmit(&source)
    }

    fn transmit<F>(&mut self, source: &ColorSource<'_, F>) -> Result<(), RenderError>
    where
        F: FrameColors + ?Sized,
    {
        let packet = self.builder.build_from(&self.layout, source);
        if let Err(e) = self.transport.send(&packet, REPORT_LEN) {
            #[cfg(feature = "log")]
            log::warn!("render: report write failed: {}", e);
            return Err(e.into());
        }
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }
}
