//! Persona status captions shown in the decorated widget's footer.

/// Caption for personas without a dedicated line.
pub const DEFAULT_STATUS: &str = "STAY DELUSIONAL";

/// Footer caption for a persona name.
///
/// Matching ignores case; unknown names (including the empty string) get
/// [`DEFAULT_STATUS`].
pub fn status_caption(persona: &str) -> &'static str {
    match persona.to_lowercase().as_str() {
        "overthinker" => "ANALYZING VOID...",
        "adhd brain" => "SQUIRREL DETECTED.",
        "burnt out" => "CRITICAL FAILURE.",
        "builder" => "SHIPPING BUGS...",
        "striver" => "CHASING GHOSTS.",
        _ => DEFAULT_STATUS,
    }
}

/// Persona line, keeping the name exactly as stored.
pub fn persona_caption(persona: &str) -> String { format!("FROM {persona}") }
