use crate::canvas::{Canvas, GLYPH, PRIMARY};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Resource directory, relative to the project root, that holds the mipmap folders
pub const RES_DIR: &str = "app/src/main/res";

/// One density bucket: its mipmap folder name and the launcher icon size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub folder: &'static str,
    pub size: u32,
}

pub const ICON_SPECS: &[IconSpec] = &[
    IconSpec { folder: "mipmap-mdpi", size: 48 },
    IconSpec { folder: "mipmap-hdpi", size: 72 },
    IconSpec { folder: "mipmap-xhdpi", size: 96 },
    IconSpec { folder: "mipmap-xxhdpi", size: 144 },
    IconSpec { folder: "mipmap-xxxhdpi", size: 192 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    Square,
    Round,
}

impl IconShape {
    pub const ALL: [IconShape; 2] = [IconShape::Square, IconShape::Round];

    pub fn file_name(self) -> &'static str {
        match self {
            IconShape::Square => "ic_launcher.png",
            IconShape::Round => "ic_launcher_round.png",
        }
    }
}

/// Inclusive pixel rectangle, `(x0, y0)` to `(x1, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// Placement of the three-stroke monogram for a given icon size.
///
/// All values use integer division so every size maps to exact pixel
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayout {
    pub size: u32,
    pub padding: u32,
    pub thickness: u32,
    pub middle_y: u32,
}

impl GlyphLayout {
    pub fn new(size: u32) -> Self {
        let padding = size / 4;
        let thickness = size / 8;
        Self {
            size,
            padding,
            thickness,
            middle_y: size / 2 - thickness / 2,
        }
    }

    pub fn vertical(&self) -> Stroke {
        Stroke {
            x0: self.padding,
            y0: self.padding,
            x1: self.padding + self.thickness,
            y1: self.size - self.padding,
        }
    }

    pub fn top(&self) -> Stroke {
        Stroke {
            x0: self.padding,
            y0: self.padding,
            x1: self.size - self.padding,
            y1: self.padding + self.thickness,
        }
    }

    pub fn middle(&self) -> Stroke {
        Stroke {
            x0: self.padding,
            y0: self.middle_y,
            x1: self.size - self.padding - self.thickness,
            y1: self.middle_y + self.thickness,
        }
    }

    /// Strokes in paint order
    pub fn strokes(&self) -> [Stroke; 3] {
        [self.vertical(), self.top(), self.middle()]
    }
}

/// Paint a launcher icon: brand background (full square or inscribed circle)
/// with the white monogram on top.
pub fn create_icon(size: u32, shape: IconShape) -> Canvas {
    let mut canvas = Canvas::new(size);

    match shape {
        IconShape::Round => canvas.fill_ellipse(PRIMARY),
        IconShape::Square => canvas.fill_rect(0, 0, size, size, PRIMARY),
    }

    for stroke in GlyphLayout::new(size).strokes() {
        canvas.fill_rect(stroke.x0, stroke.y0, stroke.x1, stroke.y1, GLYPH);
    }

    canvas
}

/// Write the square and round launcher icons for every density under `root`.
///
/// Stops at the first failure; icons written before it are left in place.
pub fn generate_icons(root: &Path) -> Result<()> {
    let res_dir = root.join(RES_DIR);

    println!("Generating Android launcher icons...");

    for spec in ICON_SPECS {
        let mipmap_dir = res_dir.join(spec.folder);
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create directory {}", mipmap_dir.display()))?;

        for shape in IconShape::ALL {
            let icon = create_icon(spec.size, shape);
            let output_path = mipmap_dir.join(shape.file_name());
            save_png(&icon, &output_path)?;
            println!("  ✓ Generated {}/{}/{}", RES_DIR, spec.folder, shape.file_name());
        }
    }

    Ok(())
}

/// Paths of every file `generate_icons` writes under `root`
pub fn output_paths(root: &Path) -> Vec<PathBuf> {
    let res_dir = root.join(RES_DIR);
    ICON_SPECS
        .iter()
        .flat_map(|spec| {
            let mipmap_dir = res_dir.join(spec.folder);
            IconShape::ALL.map(|shape| mipmap_dir.join(shape.file_name()))
        })
        .collect()
}

pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(canvas.as_image().as_raw(), &mut writer, canvas.size())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    writer.flush().context("Failed to flush PNG")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
