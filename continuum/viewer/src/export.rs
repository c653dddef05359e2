// Image and CSV exports of the current view.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use egui::ColorImage;
use engine::aggregate::MarkerReadout;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("image of {0}x{1} pixels cannot be encoded")]
    Size(usize, usize),
}

/// Write an RGBA raster as PNG.
pub fn write_png(img: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let [w, h] = img.size;
    let (Ok(wu), Ok(hu)) = (u32::try_from(w), u32::try_from(h)) else {
        return Err(ExportError::Size(w, h));
    };
    let bytes: Vec<u8> = img.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buf = image::RgbaImage::from_raw(wu, hu, bytes).ok_or(ExportError::Size(w, h))?;
    buf.save(path)?;
    Ok(())
}

/// Write marker readouts as CSV.
///
/// Format:
/// - First line: `# metric=<name>`
/// - Header: `id,name,x,y,width,height,value`
/// - One row per placed marker, in list order; names are quoted
pub fn write_readouts_csv(path: &Path, metric: &str, readouts: &[MarkerReadout]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "# metric={}", metric)?;
    writeln!(file, "id,name,x,y,width,height,value")?;
    for r in readouts {
        writeln!(
            file,
            "{},{},{:.6},{:.6},{:.6},{:.6},{:.3}",
            r.id,
            quote(&r.name),
            r.center.x,
            r.center.y,
            r.footprint.width,
            r.footprint.height,
            r.value
        )?;
    }
    Ok(())
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
