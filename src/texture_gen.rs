use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const WIDTH: u32 = 256;
pub const HEIGHT: u32 = 256;
pub const MAXVAL: u32 = 255;
pub const OUTPUT_PATH: &str = "test.ppm";

/// Compute the channel triple for one coordinate.
/// The pattern is a pure function of (x, y): red follows the column, green
/// follows the row, and blue is their product, each wrapped to one byte.
pub fn pixel(x: u32, y: u32) -> [u8; 3] {
    [(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8]
}

/// The P6 header: magic, dimensions, and maxval as raw ASCII lines.
pub fn header(width: u32, height: u32, maxval: u32) -> String {
    format!("P6\n{width} {height}\n{maxval}\n")
}

// Stream the header followed by the raw pixel grid, row-major from the top row.
pub fn write_ppm<W: Write>(mut w: W, width: u32, height: u32, maxval: u32) -> Result<()> {
    w.write_all(header(width, height, maxval).as_bytes())?;

    for y in 0..height {
        for x in 0..width {
            w.write_all(&pixel(x, y))?;
        }
    }

    Ok(())
}

pub fn generate_texture() -> Result<()> {
    println!("Generating {OUTPUT_PATH}...");

    let path = Path::new(OUTPUT_PATH);
    let mut out_file = BufWriter::new(
        File::create(path).with_context(|| format!("Can't create {}", path.display()))?,
    );
    write_ppm(&mut out_file, WIDTH, HEIGHT, MAXVAL)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file.flush().context("Failed to flush output file")?;

    println!("✓ Generated {OUTPUT_PATH}");
    Ok(())
}
