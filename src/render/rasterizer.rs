//! Glyph sample rendering and montage assembly.

use std::path::{Path, PathBuf};

use crate::config::RenderStyle;
use crate::error::{FontcullError, Result};
use crate::shell::{display_command, execute, CommandOptions};

/// Text drawn for every font: punctuation, uppercase, lowercase, digits.
pub const GLYPH_SAMPLE: &str =
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\nABCDEFGHIJKLMNOPQRSTUVWXYZ\nabcdefghijklmnopqrstuvwxyz\n0123456789 0O 1lI {}[]()<>";

/// Vertical gap between montage tiles, in pixels.
pub const MONTAGE_GAP: u32 = 12;

/// Turns font files into images.
pub trait Rasterizer {
    /// Render [`GLYPH_SAMPLE`] in `font` to `output`.
    fn render_sample(&self, font: &Path, style: &RenderStyle, output: &Path) -> Result<()>;

    /// Stack `images` vertically into `output`, each labeled with its file stem.
    fn montage(&self, images: &[PathBuf], output: &Path) -> Result<()>;
}

/// Escape text for an ImageMagick `label:` so it is drawn literally.
///
/// ```
/// use fontcull::render::escape_label;
///
/// assert_eq!(escape_label("100% \\o/"), "100%% \\\\o/");
/// ```
pub fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('%', "%%")
}

/// [`Rasterizer`] backed by ImageMagick's `magick`.
#[derive(Debug, Clone)]
pub struct MagickRasterizer {
    magick: PathBuf,
}

impl MagickRasterizer {
    /// Create a rasterizer using the given `magick` executable.
    pub fn new(magick: PathBuf) -> Self {
        Self { magick }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let magick = self.magick.to_string_lossy();
        let result = execute(&magick, args, &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            tracing::debug!("magick stderr: {}", result.stderr.trim());
            Err(FontcullError::CommandFailed {
                command: display_command(&magick, args),
                code: result.exit_code,
            })
        }
    }
}

/// Arguments rendering one sample image.
pub fn sample_args(font: &str, style: &RenderStyle, output: &str) -> Vec<String> {
    vec![
        "-size".to_string(),
        format!("{}x", style.width),
        "-background".to_string(),
        style.bg.clone(),
        "-fill".to_string(),
        style.fg.clone(),
        "-font".to_string(),
        font.to_string(),
        "-pointsize".to_string(),
        style.pointsize.to_string(),
        format!("label:{}", escape_label(GLYPH_SAMPLE)),
        output.to_string(),
    ]
}

/// Arguments assembling a labeled vertical montage.
pub fn montage_args(images: &[String], output: &str) -> Vec<String> {
    let mut args = vec![
        "montage".to_string(),
        "-background".to_string(),
        "none".to_string(),
        "-label".to_string(),
        "%t".to_string(),
    ];
    args.extend(images.iter().cloned());
    args.extend([
        "-tile".to_string(),
        "1x".to_string(),
        "-geometry".to_string(),
        format!("+0+{}", MONTAGE_GAP),
        output.to_string(),
    ]);
    args
}

impl Rasterizer for MagickRasterizer {
    fn render_sample(&self, font: &Path, style: &RenderStyle, output: &Path) -> Result<()> {
        let args = sample_args(&font.to_string_lossy(), style, &output.to_string_lossy());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }

    fn montage(&self, images: &[PathBuf], output: &Path) -> Result<()> {
        let images: Vec<String> = images
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let args = montage_args(&images, &output.to_string_lossy());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }
}
