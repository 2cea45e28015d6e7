#![no_std]

//! AdamantiuN Akira per-key RGB driver
//!
//! Architecture layers:
//! - `layout` - Key name / canvas coordinate / LED slot table
//! - `color` - [`Rgb`] type and `#RRGGBB` parsing
//! - `settings` - Lighting mode, user settings and parameter schema
//! - `source` - Per-key color sourcing (canvas, forced, shutdown)
//! - `packet` - Lighting report assembly
//! - `driver` - Transport abstraction ([`ReportTransport`] trait + writer)
//! - `engine` - Render cycle state machine
//! - `plugin` - Host lifecycle surface
//!
//! The render cycle is generic over `ReportTransport`, so the pipeline runs
//! the same against the device and against test doubles.

pub mod color;
pub mod config;
pub mod driver;
pub mod endpoint;
pub mod engine;
pub mod error;
pub mod layout;
pub mod packet;
pub mod plugin;
pub mod settings;
pub mod source;

// Color exports
pub use color::{ColorFormatError, Rgb, parse_hex, to_hex};

// Driver exports
pub use driver::{ReportTransport, ReportWriter, TransportError};

// Endpoint exports
pub use endpoint::EndpointDescriptor;

// Engine exports
pub use engine::{CycleState, RenderCycle, RenderError};

pub use error::Error;

// Layout exports
pub use layout::{Coordinate, KeyLayoutEntry, LayoutError, LayoutTable};

// Packet exports
pub use packet::{Packet, PacketBuilder};

pub use plugin::AkiraPlugin;

// Settings exports
pub use settings::{ConfigurationError, LightingConfiguration, LightingMode, LightingSettings};

// Source exports
pub use source::{CanvasFrame, ColorSource, FrameColors};
