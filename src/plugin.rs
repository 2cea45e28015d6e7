//! Host lifecycle surface
//!
//! The lighting host drives a device plugin through a fixed set of calls:
//! metadata getters consumed once at load, then `Initialize`, a `Render` per
//! frame, and a final `Shutdown`. The getters are free functions here; the
//! per-session calls live on [`AkiraPlugin`].

use crate::{
    config::{CANVAS, CONFLICTING_PROCESSES, DEVICE},
    driver::ReportTransport,
    endpoint::{self, EndpointDescriptor},
    engine::{CycleState, RenderCycle},
    error::Error,
    layout::{AKIRA_KEYS, LayoutTable},
    settings::{LightingConfiguration, LightingSettings, PARAMETERS, ParameterSpec},
    source::FrameColors,
};

pub const fn device_type() -> &'static str {
    DEVICE.device_type
}

pub const fn name() -> &'static str {
    DEVICE.name
}

pub const fn publisher() -> &'static str {
    DEVICE.publisher
}

/// Troubleshooting page, relative to the host documentation root
pub const fn documentation() -> &'static str {
    DEVICE.documentation
}

pub const fn image_url() -> &'static str {
    DEVICE.image_url
}

pub const fn vendor_id() -> u16 {
    DEVICE.vendor_id
}

pub const fn product_id() -> u16 {
    DEVICE.product_id
}

/// Canvas footprint `[width, height]` before scaling
pub const fn size() -> [u8; 2] {
    [CANVAS.width, CANVAS.height]
}

pub const fn default_position() -> [i32; 2] {
    [CANVAS.default_position.0, CANVAS.default_position.1]
}

pub const fn default_scale() -> f32 {
    CANVAS.default_scale
}

/// Key names, index-aligned with [`led_positions`]
pub fn led_names() -> impl ExactSizeIterator<Item = &'static str> {
    AKIRA_KEYS.iter().map(|key| key.name)
}

/// Key coordinates `[x, y]`, index-aligned with [`led_names`]
pub fn led_positions() -> impl ExactSizeIterator<Item = [u8; 2]> {
    AKIRA_KEYS
        .iter()
        .map(|key| [key.coordinate.x, key.coordinate.y])
}

/// User-editable parameters
pub const fn controllable_parameters() -> &'static [ParameterSpec] {
    &PARAMETERS
}

pub const fn validate(endpoint: &EndpointDescriptor) -> bool {
    endpoint::validate(endpoint)
}

/// Processes that must exit before the host initializes the plugin
pub const fn conflicting_processes() -> &'static [&'static str] {
    &CONFLICTING_PROCESSES
}

/// Plugin instance for one device session
pub struct AkiraPlugin<T: ReportTransport> {
    cycle: RenderCycle<T>,
    configuration: LightingConfiguration,
}

impl<T: ReportTransport> AkiraPlugin<T> {
    /// Build the layout and bind the transport
    ///
    /// Fails only on broken layout data.
    pub fn new(transport: T) -> Result<Self, Error> {
        let layout = LayoutTable::akira()?;

        #[cfg(feature = "log")]
        log::debug!(
            "plugin: {} keys, packet {} bytes",
            layout.len(),
            layout.packet_len()
        );

        Ok(Self {
            cycle: RenderCycle::new(layout, transport),
            configuration: LightingConfiguration::new(),
        })
    }

    /// The device needs no setup sequence
    pub fn initialize(&mut self) {
        #[cfg(feature = "log")]
        log::info!("plugin: {} initialized", DEVICE.name);
    }

    /// Current validated configuration
    pub fn configuration(&self) -> &LightingConfiguration {
        &self.configuration
    }

    /// Apply user settings pushed by the host
    ///
    /// On error the previous configuration remains in effect.
    pub fn update_settings(&mut self, settings: &LightingSettings) -> Result<(), Error> {
        self.configuration.apply(settings)?;
        Ok(())
    }

    /// Apply user settings from the host's JSON property map
    pub fn update_settings_json(&mut self, json: &str) -> Result<(), Error> {
        self.configuration.apply_json(json)?;
        Ok(())
    }

    /// Send one frame
    pub fn render<F>(&mut self, frame: &F) -> Result<(), Error>
    where
        F: FrameColors + ?Sized,
    {
        self.cycle.render(&self.configuration, frame)?;
        Ok(())
    }

    /// Send the shutdown colors and end the session
    pub fn shutdown(&mut self, system_suspending: bool) -> Result<(), Error> {
        self.cycle.shutdown(system_suspending, &self.configuration)?;
        Ok(())
    }

    pub fn state(&self) -> CycleState {
        self.cycle.state()
    }

    pub fn layout(&self) -> &LayoutTable {
        self.cycle.layout()
    }

    pub fn transport(&self) -> &T {
        self.cycle.transport()
    }
}
