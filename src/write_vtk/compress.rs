//! zlib compressed binary data, as read by `vtkZLibDataCompressor`.
//!
//! The raw bytes of an array are split into blocks of [`BLOCK_SIZE`] bytes and every block is
//! compressed on its own. The array is preceded by a header of `UInt64` values:
//!
//! ```text
//! [number of blocks, block size, size of the last partial block, compressed size of each block...]
//! ```
//!
//! The size of the last block is `0` if the last block is full. The header and the
//! compressed blocks are base64 encoded separately and concatenated.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// uncompressed size of every block except (possibly) the last one
pub const BLOCK_SIZE: usize = 32 * 1024;

/// the `compressor` attribute value of the `VTKFile` element
pub(crate) const COMPRESSOR_NAME: &str = "vtkZLibDataCompressor";

/// compress `data`, returning the block header and the concatenated compressed blocks
pub(crate) fn compress_blocks(data: &[u8]) -> Result<(Vec<u64>, Vec<u8>), std::io::Error> {
    let num_blocks = (data.len() + BLOCK_SIZE - 1) / BLOCK_SIZE;
    let last_block = data.len() % BLOCK_SIZE;

    let mut header = Vec::with_capacity(3 + num_blocks);
    header.push(num_blocks as u64);
    header.push(BLOCK_SIZE as u64);
    header.push(last_block as u64);

    let mut compressed = Vec::new();

    for block in data.chunks(BLOCK_SIZE) {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(block)?;
        let bytes = encoder.finish()?;

        header.push(bytes.len() as u64);
        compressed.extend_from_slice(&bytes);
    }

    Ok((header, compressed))
}

/// compress and base64 encode `data` for an inline `DataArray`
pub(crate) fn encode_compressed(data: &[u8]) -> Result<String, std::io::Error> {
    let (header, compressed) = compress_blocks(data)?;

    let mut header_bytes = Vec::with_capacity(header.len() * 8);
    header
        .iter()
        .for_each(|value| header_bytes.extend_from_slice(&value.to_le_bytes()));

    let mut encoded = base64::encode(header_bytes.as_slice());
    encoded.push_str(&base64::encode(compressed.as_slice()));

    Ok(encoded)
}
