//! Lighting report assembly
//!
//! Packet layout:
//!
//! ```text
//! offset  0: 06 08 00 00 01 00 7a 01   header
//! offset  8: r g b                     slot 0
//! offset 11: r g b                     slot 1
//! ...
//! ```
//!
//! The RGB buffer spans every slot up to the highest one in the layout.
//! Slots without a key stay zero. The host pads the packet to the report
//! length on write.

use heapless::Vec;

use crate::{
    color::Rgb,
    config::REPORT,
    layout::LayoutTable,
    source::{ColorSource, FrameColors},
};

pub const HEADER_LEN: usize = REPORT.header.len();

/// Device report length, the upper bound of any packet
pub const REPORT_LEN: usize = REPORT.length;

pub type Packet = Vec<u8, REPORT_LEN>;

/// Builds lighting packets for one layout
///
/// Every packet from the same builder has the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketBuilder {
    buffer_len: usize,
}

impl PacketBuilder {
    pub fn new(layout: &LayoutTable) -> Self {
        Self {
            buffer_len: layout.buffer_len(),
        }
    }

    /// Length of the RGB buffer after the header
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Header plus RGB buffer
    pub fn packet_len(&self) -> usize {
        HEADER_LEN + self.buffer_len
    }

    /// Assemble a packet from `(slot, color)` pairs
    pub fn build<I>(&self, colors: I) -> Packet
    where
        I: IntoIterator<Item = (u8, Rgb)>,
    {
        let mut packet = Packet::new();
        // Layout construction caps the highest slot so the packet fits the report.
        let _ = packet.extend_from_slice(&REPORT.header);
        let _ = packet.resize(self.packet_len(), 0);

        let buffer = &mut packet[HEADER_LEN..];
        for (slot, color) in colors {
            let offset = usize::from(slot) * 3;
            debug_assert!(
                offset + 3 <= buffer.len(),
                "slot {} outside the RGB buffer",
                slot
            );
            if let Some(triple) = buffer.get_mut(offset..offset + 3) {
                triple.copy_from_slice(&[color.r, color.g, color.b]);
            }
        }

        debug_assert_eq!(packet.len(), self.packet_len());
        packet
    }

    /// Assemble a packet sampling every key of `layout` from `source`
    pub fn build_from<F>(&self, layout: &LayoutTable, source: &ColorSource<'_, F>) -> Packet
    where
        F: FrameColors + ?Sized,
    {
        self.build(
            layout
                .iter()
                .map(|entry| (entry.slot, source.sample(entry.coordinate))),
        )
    }
}
