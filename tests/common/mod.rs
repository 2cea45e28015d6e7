//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use akira_rgb::{ReportTransport, TransportError};
use embedded_hal::delay::DelayNs;
use embedded_io::{ErrorKind, ErrorType, Write};

/// Transport recording every report it is asked to send.
#[derive(Default)]
pub struct RecordingTransport {
    pub reports: Vec<(Vec<u8>, usize)>,
    pub fail_with: Option<TransportError>,
}

impl RecordingTransport {
    pub fn failing(error: TransportError) -> Self {
        Self {
            reports: Vec::new(),
            fail_with: Some(error),
        }
    }

    pub fn last_packet(&self) -> &[u8] {
        &self.reports.last().expect("no report sent").0
    }
}

impl ReportTransport for RecordingTransport {
    fn send(&mut self, packet: &[u8], length: usize) -> Result<(), TransportError> {
        if let Some(error) = self.fail_with {
            return Err(error);
        }
        self.reports.push((packet.to_vec(), length));
        Ok(())
    }
}

/// Delay that only records the requested durations.
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}

/// Byte sink collecting everything written to it.
#[derive(Default)]
pub struct VecSink {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl ErrorType for VecSink {
    type Error = core::convert::Infallible;
}

impl Write for VecSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Byte sink whose writes always fail with the given kind.
pub struct BrokenSink(pub ErrorKind);

impl ErrorType for BrokenSink {
    type Error = ErrorKind;
}

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(self.0)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Split a packet body into `(r, g, b)` triples.
pub fn triples(packet: &[u8]) -> Vec<(u8, u8, u8)> {
    packet[8..]
        .chunks_exact(3)
        .map(|c| (c[0], c[1], c[2]))
        .collect()
}
