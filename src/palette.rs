use serde::Serialize;

/// A background/foreground color pair for one album, keyed by a stable
/// identifier used in page routes.
///
/// Entries are compile-time constants. Nothing is added, removed, or mutated
/// after process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlbumColor {
    /// Stable identifier, unique across the table.
    pub key: &'static str,
    /// Display name as printed on the album art.
    pub name: &'static str,
    /// Page background, "#rrggbb".
    pub background: &'static str,
    /// Text color on that background, "#rrggbb".
    pub foreground: &'static str,
}

/// All album color entries, in release-listing order. Consumers that render a
/// listing iterate this slice directly; declaration order is the display order.
pub const ALBUM_COLORS: &[AlbumColor] = &[
    AlbumColor {
        key: "bratdeluxe",
        name: "Brat deluxe",
        background: "#ffffff",
        foreground: "#000000",
    },
    AlbumColor {
        key: "brat",
        name: "BRAT",
        background: "#8ace00",
        foreground: "#000000",
    },
    AlbumColor {
        key: "crash",
        name: "CRASH",
        background: "#019bd9",
        foreground: "#f70000",
    },
    AlbumColor {
        key: "howimfeelingnow",
        name: "how i'm feeling now",
        background: "#ffffff",
        foreground: "#c1c1c1",
    },
    AlbumColor {
        key: "charli",
        name: "Charli",
        background: "#918a84",
        foreground: "#000000",
    },
    AlbumColor {
        key: "pop2",
        name: "Pop 2",
        background: "#c9a1dd",
        foreground: "#000000",
    },
    AlbumColor {
        key: "number1angel",
        name: "Number 1 Angel",
        background: "#d20001",
        foreground: "#ff1000",
    },
    AlbumColor {
        key: "sucker",
        name: "SUCKER",
        background: "#f5abcc",
        foreground: "#ffffff",
    },
    AlbumColor {
        key: "trueromance",
        name: "True Romance",
        background: "#700150",
        foreground: "#ffffff",
    },
];

/// Look up the color entry for an album key.
///
/// Returns `None` for unknown keys (no logging at this layer). Picking a
/// fallback entry or rejecting the key is the caller's call.
pub fn color_for(key: &str) -> Option<&'static AlbumColor> {
    ALBUM_COLORS.iter().find(|entry| entry.key == key)
}
