//! Integration tests for the report writer transport.

mod common;

use akira_rgb::{ReportTransport, ReportWriter, TransportError};
use common::{BrokenSink, RecordingDelay, VecSink};
use embedded_io::ErrorKind;

#[test]
fn pads_report_to_requested_length() {
    let mut writer = ReportWriter::new(VecSink::default(), RecordingDelay::default());

    writer.send(&[6, 8, 0, 0, 1, 0, 0x7a, 1, 255, 0, 0], 520).unwrap();

    let (sink, _) = writer.into_inner();
    assert_eq!(sink.bytes.len(), 520);
    assert_eq!(&sink.bytes[..11], &[6, 8, 0, 0, 1, 0, 0x7a, 1, 255, 0, 0]);
    assert!(sink.bytes[11..].iter().all(|&b| b == 0));
    assert_eq!(sink.flushes, 1);
}

#[test]
fn pauses_one_millisecond_after_every_send() {
    let mut writer = ReportWriter::new(VecSink::default(), RecordingDelay::default());

    writer.send(&[1; 8], 520).unwrap();
    writer.send(&[2; 8], 520).unwrap();

    let (_, delay) = writer.into_inner();
    assert_eq!(delay.total_ns, 2_000_000);
}

#[test]
fn exact_length_report_needs_no_padding() {
    let mut writer = ReportWriter::new(VecSink::default(), RecordingDelay::default());

    writer.send(&[7; 64], 64).unwrap();

    let (sink, _) = writer.into_inner();
    assert_eq!(sink.bytes, vec![7; 64]);
}

#[test]
fn oversized_packet_is_rejected_before_writing() {
    let mut writer = ReportWriter::new(VecSink::default(), RecordingDelay::default());

    let err = writer.send(&[0; 521], 520).unwrap_err();

    assert_eq!(err, TransportError::ReportTooLong { len: 521, max: 520 });
    let (sink, delay) = writer.into_inner();
    assert!(sink.bytes.is_empty());
    assert_eq!(delay.calls, 0);
}

#[test]
fn closed_connection_maps_to_disconnected() {
    let mut writer = ReportWriter::new(BrokenSink(ErrorKind::BrokenPipe), RecordingDelay::default());

    assert_eq!(writer.send(&[0; 8], 520), Err(TransportError::Disconnected));

    let (_, delay) = writer.into_inner();
    assert_eq!(delay.total_ns, 1_000_000);
}

#[test]
fn other_write_failures_keep_their_kind() {
    let mut writer = ReportWriter::new(BrokenSink(ErrorKind::TimedOut), RecordingDelay::default());

    assert_eq!(
        writer.send(&[0; 8], 520),
        Err(TransportError::Write(ErrorKind::TimedOut))
    );
}
