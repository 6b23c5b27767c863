//! Nerd Font icon mapping for file entries.
//!
//! Maps file extensions and special filenames to Nerd Font unicode glyphs.
//! Purely presentational; the fallback glyphs keep the table total.

use fsnek_core::fs::entry::FileEntry;

/// Returns a Nerd Font icon for the given file entry.
pub fn icon_for_entry(entry: &FileEntry) -> &'static str {
    if entry.is_dir() {
        return "\u{f07b} "; // folder
    }

    let name = entry.name();
    if let Some(icon) = icon_for_filename(name) {
        return icon;
    }

    let ext = entry
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    icon_for_extension(ext)
}

fn icon_for_filename(name: &str) -> Option<&'static str> {
    let icon = match name.to_lowercase().as_str() {
        "makefile" | "gnumakefile" => "\u{e779} ",
        "dockerfile" => "\u{f308} ",
        "cargo.toml" | "cargo.lock" => "\u{e7a8} ",
        ".gitignore" | ".gitmodules" | ".gitattributes" => "\u{e702} ",
        "license" | "license.md" | "license.txt" => "\u{f0219} ",
        "readme.md" | "readme" | "readme.txt" => "\u{e73e} ",
        _ => return None,
    };
    Some(icon)
}

fn icon_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        // Programming languages
        "rs" => "\u{e7a8} ",
        "py" | "pyw" | "pyi" => "\u{e73c} ",
        "js" | "mjs" | "cjs" => "\u{e74e} ",
        "ts" | "mts" | "cts" => "\u{e628} ",
        "go" => "\u{e724} ",
        "c" | "h" => "\u{e61e} ",
        "cpp" | "cc" | "cxx" | "hpp" => "\u{e61d} ",
        "rb" | "erb" => "\u{e791} ",
        "lua" => "\u{e620} ",
        "sql" => "\u{e706} ",

        // Shell & config
        "sh" | "bash" | "zsh" | "fish" => "\u{f489} ",
        "vim" | "vimrc" => "\u{e62b} ",
        "toml" | "ini" | "cfg" | "conf" => "\u{e615} ",
        "yaml" | "yml" => "\u{e6a8} ",

        // Web & markup
        "html" | "htm" => "\u{e736} ",
        "css" | "scss" | "sass" | "less" => "\u{e749} ",
        "svg" => "\u{e7c5} ",

        // Data & docs
        "json" | "jsonc" | "json5" => "\u{e60b} ",
        "xml" => "\u{e619} ",
        "md" | "markdown" | "mdx" => "\u{e73e} ",
        "txt" | "text" => "\u{f15c} ",
        "pdf" => "\u{f1c1} ",
        "csv" => "\u{f1c3} ",

        // Archives
        "zip" | "tar" | "gz" | "bz2" | "xz" | "7z" | "rar" => "\u{f410} ",

        // Images
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "ico" => "\u{f1c5} ",

        // Audio / video
        "mp3" | "wav" | "flac" | "ogg" | "aac" => "\u{f001} ",
        "mp4" | "avi" | "mkv" | "mov" | "webm" => "\u{f03d} ",

        // Misc
        "lock" => "\u{f023} ",
        "log" => "\u{f18d} ",

        // Default
        _ => "\u{f15b} ",
    }
}
