#![cfg(feature = "async-io")]

// Integration tests for the async Deflate framing streams
// Tests cover: compat readers, agreement with the one-shot helpers, error propagation

use futures_util::{Stream, StreamExt};
use sniffrs::compress::{compress_deflate, decompress_deflate};
use sniffrs::{SniffError, deflate_stream, inflate_stream};
use tokio_util::compat::TokioAsyncReadCompatExt;

async fn collect_frames<S>(stream: S) -> Vec<u8>
where
    S: Stream<Item = Result<bytes::Bytes, SniffError>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut out = Vec::new();
    while let Some(frame) = stream.next().await {
        out.extend_from_slice(&frame.expect("stream must not fail"));
    }
    out
}

// ============================================================================
// Round Trips
// ============================================================================

#[tokio::test]
async fn test_compat_reader_round_trip() {
    let data = b"async roundtrip payload ".repeat(4096);

    let reader = tokio::io::BufReader::new(&data[..]).compat();
    let compressed = collect_frames(deflate_stream(reader)).await;
    assert!(compressed.len() < data.len(), "Repetitive data must shrink");

    let reader = tokio::io::BufReader::new(&compressed[..]).compat();
    let restored = collect_frames(inflate_stream(reader)).await;
    assert_eq!(restored, data, "Round trip must restore every byte");
}

#[tokio::test]
async fn test_stream_output_feeds_the_one_shot() {
    let data: Vec<u8> = (0..50_000u32).flat_map(|i| i.to_le_bytes()).collect();

    let compressed = collect_frames(deflate_stream(&data[..])).await;

    let restored = decompress_deflate(&compressed).unwrap();
    assert_eq!(restored, data);
}

#[tokio::test]
async fn test_one_shot_output_feeds_the_stream() {
    let data = b"the quick brown fox jumps over the lazy dog ".repeat(1000);
    let compressed = compress_deflate(&data).unwrap();

    let restored = collect_frames(inflate_stream(&compressed[..])).await;
    assert_eq!(restored, data);
}

#[tokio::test]
async fn test_empty_input_round_trip() {
    let empty: &[u8] = &[];

    let compressed = collect_frames(deflate_stream(empty)).await;
    assert!(
        !compressed.is_empty(),
        "Even empty input carries a stream trailer"
    );

    let restored = collect_frames(inflate_stream(&compressed[..])).await;
    assert!(restored.is_empty());
}

// ============================================================================
// Frame Semantics
// ============================================================================

#[tokio::test]
async fn test_frames_are_never_empty() {
    let data = b"frame content ".repeat(8192);

    let mut stream = std::pin::pin!(deflate_stream(&data[..]));
    while let Some(frame) = stream.next().await {
        assert!(
            !frame.unwrap().is_empty(),
            "Empty frames must be skipped, not yielded"
        );
    }
}

// ============================================================================
// Error Propagation
// ============================================================================

#[tokio::test]
async fn test_corrupt_input_surfaces_io_error() {
    // 0xFF opens a block with the reserved type, which cannot decode.
    let bogus = [0xFF, 0x07, 0xAA, 0xBB, 0xCC, 0xDD];

    let reader = tokio::io::BufReader::new(&bogus[..]).compat();
    let mut stream = std::pin::pin!(inflate_stream(reader));

    let mut saw_error = false;
    while let Some(frame) = stream.next().await {
        if let Err(err) = frame {
            assert!(matches!(err, SniffError::Io(_)));
            saw_error = true;
            break;
        }
    }
    assert!(saw_error, "Corrupt input must surface an error item");
}

#[tokio::test]
async fn test_truncated_input_errors_through_compat() {
    let data = b"truncation test data ".repeat(64);
    let compressed = compress_deflate(&data).unwrap();
    let cut = &compressed[..compressed.len() - 4];

    let reader = tokio::io::BufReader::new(cut).compat();
    let mut stream = std::pin::pin!(inflate_stream(reader));

    let mut saw_error = false;
    while let Some(frame) = stream.next().await {
        if frame.is_err() {
            saw_error = true;
            break;
        }
    }
    assert!(saw_error, "A cut-off stream must surface an error item");
}
