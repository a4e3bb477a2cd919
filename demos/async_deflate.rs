//! Async streaming compression example.
//!
//! Compresses a generated buffer through `deflate_stream`, then feeds
//! the result back through `inflate_stream` and checks the round trip.
//!
//! Run with:
//!     cargo run --example async_deflate --features async-io

use futures_util::StreamExt;
use sniffrs::{deflate_stream, inflate_stream};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"streaming compression demo ".repeat(10_000);
    println!("Input: {} bytes\n", data.len());

    // tokio readers adapt through tokio-util's compat layer.
    let reader = tokio::io::BufReader::new(&data[..]).compat();

    let mut packed = Vec::new();
    let mut frames = 0;

    let mut stream = std::pin::pin!(deflate_stream(reader));
    while let Some(frame) = stream.next().await {
        let frame = frame?;
        frames += 1;
        packed.extend_from_slice(&frame);
        println!("Frame {}: {} bytes", frames, frame.len());
    }

    println!("\nCompressed: {} bytes in {} frames", packed.len(), frames);

    let mut restored = Vec::new();
    let mut stream = std::pin::pin!(inflate_stream(&packed[..]));
    while let Some(frame) = stream.next().await {
        restored.extend_from_slice(&frame?);
    }

    assert_eq!(restored, data);
    println!("Round trip OK: {} bytes restored", restored.len());

    Ok(())
}
