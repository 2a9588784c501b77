use crate::png::{self, Rgba};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The placeholder set a default run produces: Tauri's desktop icon
/// filenames at their expected resolutions.
const PLACEHOLDER_SET: [(u32, &str); 4] = [
    (32, "32x32.png"),
    (32, "icon.png"),
    (128, "128x128.png"),
    (256, "128x128@2x.png"),
];

/// Encode a solid-color square PNG and write it to `path`.
///
/// The bytes land in a `.tmp` sibling first and are renamed into place, so
/// an interrupted run never leaves a truncated PNG behind.
pub fn write_png(path: &Path, size: u32, color: Rgba) -> Result<()> {
    let bytes = png::encode(size, size, color)?;

    let tmp_path = path.with_extension("png.tmp");
    fs::write(&tmp_path, &bytes)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move icon into place at {}", path.display()))?;

    Ok(())
}

/// Generate the fixed four-file placeholder set into `out_dir`.
pub fn generate_placeholder_set(out_dir: &Path, color: Rgba) -> Result<()> {
    println!("Generating placeholder icons...");
    for (size, filename) in PLACEHOLDER_SET {
        write_png(&out_dir.join(filename), size, color)?;
        println!("  ✓ Generated {filename}");
    }
    println!("✓ All icons created");
    Ok(())
}

/// Generate one `<size>x<size>.png` per requested size into `out_dir`.
pub fn generate_custom_sizes(out_dir: &Path, sizes: &[u32], color: Rgba) -> Result<()> {
    println!("Generating custom PNG sizes...");
    for &size in sizes {
        let filename = format!("{size}x{size}.png");
        write_png(&out_dir.join(&filename), size, color)?;
        println!("  ✓ Generated {filename}");
    }
    println!("✓ All icons created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_png_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&path, 8, Rgba::new(10, 20, 30, 255)).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("icon.png.tmp").exists());
    }

    #[test]
    fn test_write_png_rejects_zero_size_without_creating_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");

        let result = write_png(&path, 0, Rgba::new(0, 0, 0, 255));

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("bad.png.tmp").exists());
    }

    #[test]
    fn test_placeholder_set_filenames() {
        let dir = TempDir::new().unwrap();

        generate_placeholder_set(dir.path(), Rgba::new(41, 128, 185, 255)).unwrap();

        for name in ["32x32.png", "icon.png", "128x128.png", "128x128@2x.png"] {
            assert!(dir.path().join(name).exists(), "{name} should exist");
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_files() {
        let dir = TempDir::new().unwrap();
        let color = Rgba::new(41, 128, 185, 255);

        generate_placeholder_set(dir.path(), color).unwrap();

        let a = std::fs::read(dir.path().join("32x32.png")).unwrap();
        let b = std::fs::read(dir.path().join("icon.png")).unwrap();
        assert_eq!(a, b);
    }
}
