#![allow(clippy::unreadable_literal)]

use embassy_time::Duration;

pub struct DeviceConfig {
    pub device_type: &'static str,
    pub name: &'static str,
    pub publisher: &'static str,
    pub documentation: &'static str,
    pub image_url: &'static str,
    pub vendor_id: u16,
    pub product_id: u16,
}

pub struct CanvasConfig {
    pub width: u8,
    pub height: u8,
    pub default_position: (i32, i32),
    pub default_scale: f32,
}

pub struct ReportConfig {
    /// Fixed prefix of every lighting report
    pub header: [u8; 8],
    /// Length the host pads every report to
    pub length: usize,
    /// Mandatory pause after each report write
    pub settle_delay: Duration,
    /// Cadence at which the host invokes a render
    pub frame_interval: Duration,
}

pub struct EndpointConfig {
    pub interface: i32,
    pub usage: u16,
    pub usage_page: u16,
    pub collection: u16,
}

pub const DEVICE: DeviceConfig = DeviceConfig {
    device_type: "keyboard",
    name: "AdamantiuN Akira",
    publisher: "Rafael Julio Lemos Silva",
    documentation: "troubleshooting/sinowealth",
    image_url: "https://assets.signalrgb.com/devices/brands/leobog/keyboards/hi75.png",
    vendor_id: 0x258a,
    product_id: 0x010c,
};

pub const CANVAS: CanvasConfig = CanvasConfig {
    width: 15,
    height: 6,
    default_position: (0, 0),
    default_scale: 1.0,
};

pub const REPORT: ReportConfig = ReportConfig {
    header: [0x06, 0x08, 0x00, 0x00, 0x01, 0x00, 0x7a, 0x01],
    length: 520,
    settle_delay: Duration::from_millis(1),
    frame_interval: Duration::from_millis(30),
};

pub const ENDPOINT: EndpointConfig = EndpointConfig {
    interface: 1,
    usage: 0x0001,
    usage_page: 0xff00,
    collection: 0x0006,
};

/// Vendor software that owns the device while running
pub const CONFLICTING_PROCESSES: [&str; 1] = ["OemDrv.exe"];
