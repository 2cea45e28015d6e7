//! Report transport abstraction
//!
//! The host owns the USB connection and exposes a report-write primitive.
//! [`ReportTransport`] is that seam; the render cycle is generic over it.
//! Implementations must pause for the settle delay after every write.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_io::{Error as _, ErrorKind, Write};

use crate::config::REPORT;

/// Failure writing a report to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Device is gone or the connection was closed
    Disconnected,
    /// Packet does not fit the report length
    ReportTooLong { len: usize, max: usize },
    /// Underlying write failed
    Write(ErrorKind),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Disconnected => write!(f, "device disconnected"),
            TransportError::ReportTooLong { len, max } => {
                write!(f, "packet of {} bytes exceeds report length {}", len, max)
            }
            TransportError::Write(kind) => write!(f, "report write failed: {:?}", kind),
        }
    }
}

impl core::error::Error for TransportError {}

/// Report transport trait
///
/// Implement this trait to connect the render cycle to a device.
pub trait ReportTransport {
    /// Write `packet` as a report of `length` bytes, then wait the settle delay
    fn send(&mut self, packet: &[u8], length: usize) -> Result<(), TransportError>;
}

impl<T: ReportTransport + ?Sized> ReportTransport for &mut T {
    fn send(&mut self, packet: &[u8], length: usize) -> Result<(), TransportError> {
        (**self).send(packet, length)
    }
}

/// Transport over a byte sink, such as a hidraw node
///
/// Pads each packet with zeros to the report length, flushes, and pauses.
pub struct ReportWriter<W, D> {
    writer: W,
    delay: D,
}

impl<W: Write, D: DelayNs> ReportWriter<W, D> {
    pub fn new(writer: W, delay: D) -> Self {
        Self { writer, delay }
    }

    /// Release the sink and delay
    pub fn into_inner(self) -> (W, D) {
        (self.writer, self.delay)
    }

    fn write_report(&mut self, packet: &[u8], length: usize) -> Result<(), W::Error> {
        const PADDING: [u8; 64] = [0; 64];

        self.writer.write_all(packet)?;
        let mut remaining = length - packet.len();
        while remaining > 0 {
            let chunk = remaining.min(PADDING.len());
            self.writer.write_all(&PADDING[..chunk])?;
            remaining -= chunk;
        }
        self.writer.flush()
    }
}

impl<W: Write, D: DelayNs> ReportTransport for ReportWriter<W, D> {
    fn send(&mut self, packet: &[u8], length: usize) -> Result<(), TransportError> {
        if packet.len() > length {
            return Err(TransportError::ReportTooLong {
                len: packet.len(),
                max: length,
            });
        }

        let result = self.write_report(packet, length);
        // The device needs the pause even after a failed write.
        settle(&mut self.delay);

        result.map_err(|e| match e.kind() {
            ErrorKind::NotConnected | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
                TransportError::Disconnected
            }
            kind => TransportError::Write(kind),
        })
    }
}

/// Wait the post-report settle delay
pub fn settle<D: DelayNs + ?Sized>(delay: &mut D) {
    let micros = u32::try_from(REPORT.settle_delay.as_micros()).unwrap_or(u32::MAX);
    delay.delay_us(micros);
}
