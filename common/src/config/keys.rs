//! Shared store keys written by the main application.

/// Current affirmation text.
pub const AFFIRMATION_TEXT: &str = "affirmation_text";

/// Display name of the selected persona.
pub const PERSONA_NAME: &str = "persona_name";

/// Text color, also the border color of the brutalist style.
pub const THEME_TEXT_COLOR: &str = "theme_text_color";

/// Gradient start color, also the block color of the brutalist style.
pub const THEME_COLOR_START: &str = "theme_color_start";

/// Gradient end color.
pub const THEME_COLOR_END: &str = "theme_color_end";

/// Theme name; `"brutalist"` selects the flat style.
pub const THEME_NAME: &str = "theme_name";

// =============================================================================
// Fallback Values
// =============================================================================

/// Shown until the app has stored an affirmation.
pub const DEFAULT_AFFIRMATION: &str = "Open app to load affirmation";

/// Persona shown when none has been selected.
pub const DEFAULT_PERSONA: &str = "DELUSIONS";
