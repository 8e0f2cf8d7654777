//! Output filename derivation.

/// Suffix inserted between base name and extension.
pub const DEFAULT_SUFFIX: &str = "-with-watermark";

/// `"photo.jpg"` becomes `"photo-with-watermark.jpg"`.
///
/// The extension is whatever follows the last dot of the final path
/// component, so `"archive.tar.gz"` becomes `"archive.tar-with-watermark.gz"`.
/// Names without an extension (including dotfiles) get the suffix appended.
pub fn output_filename(filename: &str) -> String {
    output_filename_with_suffix(filename, DEFAULT_SUFFIX)
}

pub fn output_filename_with_suffix(filename: &str, suffix: &str) -> String {
    let name_start = filename
        .rfind(|c| c == '/' || c == '\\')
        .map_or(0, |i| i + 1);

    match filename[name_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = name_start + dot;
            format!("{}{}.{}", &filename[..dot], suffix, &filename[dot + 1..])
        }
        _ => format!("{}{}", filename, suffix),
    }
}
