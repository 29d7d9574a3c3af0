//! Text-only widget: the current affirmation and nothing else.

use crate::config::keys;
use crate::host::WidgetInstanceId;
use crate::store::PreferenceStore;
use crate::view::{LayoutId, TextFieldId, ViewTemplate};
use crate::widgets::WidgetProvider;

/// Renders the standard layout's single text view.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextWidgetRenderer;

impl TextWidgetRenderer {
    pub const fn new() -> Self { Self }
}

impl WidgetProvider for TextWidgetRenderer {
    fn render(&self, store: &dyn PreferenceStore, _instance: WidgetInstanceId) -> ViewTemplate {
        let mut view = ViewTemplate::new(LayoutId::Standard);
        view.set_text(
            TextFieldId::Text,
            store.string_or(keys::AFFIRMATION_TEXT, keys::DEFAULT_AFFIRMATION),
        );
        view
    }
}
