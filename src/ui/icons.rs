//! Shared UI icons and emojis.
//!
//! Each icon falls back to a plain ASCII marker on terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!]");

// Output indicators
pub static FILE_NEW: Emoji<'_, '_> = Emoji("📄 ", "+");
pub static KEY: Emoji<'_, '_> = Emoji("🔑 ", "-");
