// File: crates/bench-render-skia/src/png.rs
// Summary: PNG chunk helpers; stamps the physical resolution (pHYs) into encoded bytes.

use anyhow::{bail, Result};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const METERS_PER_INCH: f64 = 0.0254;
// pHYs unit specifier for "pixels per meter".
const UNIT_METER: u8 = 1;

/// One chunk inside an encoded PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: [u8; 4],
    pub data: &'a [u8],
}

/// Walk the chunks of `png`, stopping after `IEND`.
pub fn chunks(png: &[u8]) -> Result<Vec<Chunk<'_>>> {
    if !png.starts_with(&SIGNATURE) {
        bail!("not a PNG stream");
    }
    let mut out = Vec::new();
    let mut pos = SIGNATURE.len();
    while pos + 8 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        let kind = [png[pos + 4], png[pos + 5], png[pos + 6], png[pos + 7]];
        let end = pos + 8 + len + 4;
        if end > png.len() {
            bail!("truncated {} chunk", String::from_utf8_lossy(&kind));
        }
        out.push(Chunk { kind, data: &png[pos + 8..pos + 8 + len] });
        pos = end;
        if &kind == b"IEND" {
            break;
        }
    }
    Ok(out)
}

/// DPI expressed as pixels per meter, rounded.
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Return `png` with a `pHYs` chunk for `dpi` right after `IHDR`, replacing any existing one.
pub fn with_dpi(png: &[u8], dpi: u32) -> Result<Vec<u8>> {
    let chunks = chunks(png)?;
    if chunks.first().map(|c| &c.kind) != Some(b"IHDR") {
        bail!("PNG stream does not start with IHDR");
    }
    let ppm = pixels_per_meter(dpi).to_be_bytes();
    let mut phys = Vec::with_capacity(9);
    phys.extend_from_slice(&ppm);
    phys.extend_from_slice(&ppm);
    phys.push(UNIT_METER);

    let mut out = Vec::with_capacity(png.len() + 21);
    out.extend_from_slice(&SIGNATURE);
    for (i, chunk) in chunks.iter().enumerate() {
        if &chunk.kind == b"pHYs" {
            continue;
        }
        write_chunk(&mut out, chunk.kind, chunk.data);
        if i == 0 {
            write_chunk(&mut out, *b"pHYs", &phys);
        }
    }
    Ok(out)
}

fn write_chunk(out: &mut Vec<u8>, kind: [u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(&kind);
    out.extend_from_slice(data);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&kind);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
}
