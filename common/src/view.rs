//! View templates handed to the launcher for one widget instance.
//!
//! A template names its layout and carries the values of the layout's fields:
//! up to three text views and one image view. Fields the renderer never set
//! keep whatever the layout declares, which is why every accessor returns an
//! `Option`.

use heapless::LinearMap;

use crate::bitmap::Bitmap;
use crate::colors::Argb8888;

/// Number of text views in the largest layout.
pub const TEXT_FIELD_COUNT: usize = 3;

/// Layout resource a template is inflated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LayoutId {
    /// Text-only widget.
    Standard,
    /// Widget with persona, footer and background image.
    Large,
}

/// Text views present in the widget layouts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TextFieldId {
    /// Affirmation body.
    Text,
    /// "FROM ..." line.
    Persona,
    /// Persona status caption.
    Footer,
}

impl TextFieldId {
    pub const ALL: [Self; TEXT_FIELD_COUNT] = [Self::Text, Self::Persona, Self::Footer];
}

/// Value of one text view.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct TextField {
    pub text: String,
    /// `None` keeps the layout's own text color.
    pub color: Option<Argb8888>,
}

/// Populated view for one widget instance.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewTemplate {
    layout: LayoutId,
    text_fields: LinearMap<TextFieldId, TextField, TEXT_FIELD_COUNT>,
    background: Option<Bitmap>,
}

impl ViewTemplate {
    pub fn new(layout: LayoutId) -> Self {
        Self {
            layout,
            text_fields: LinearMap::new(),
            background: None,
        }
    }

    pub const fn layout(&self) -> LayoutId { self.layout }

    pub fn set_text(&mut self, id: TextFieldId, text: impl Into<String>) {
        let text = text.into();
        match self.text_fields.get_mut(&id) {
            Some(field) => field.text = text,
            None => self.insert_field(id, TextField { text, color: None }),
        }
    }

    pub fn set_text_color(&mut self, id: TextFieldId, color: Argb8888) {
        match self.text_fields.get_mut(&id) {
            Some(field) => field.color = Some(color),
            None => self.insert_field(id, TextField {
                text: String::new(),
                color: Some(color),
            }),
        }
    }

    pub fn set_background(&mut self, bitmap: Bitmap) { self.background = Some(bitmap); }

    pub fn field(&self, id: TextFieldId) -> Option<&TextField> { self.text_fields.get(&id) }

    pub fn text(&self, id: TextFieldId) -> Option<&str> { self.field(id).map(|f| f.text.as_str()) }

    pub fn text_color(&self, id: TextFieldId) -> Option<Argb8888> { self.field(id).and_then(|f| f.color) }

    pub fn background(&self) -> Option<&Bitmap> { self.background.as_ref() }

    /// Hand the background over, e.g. to a launcher that takes ownership.
    pub fn take_background(&mut self) -> Option<Bitmap> { self.background.take() }

    /// Number of fields this template sets, background included.
    pub fn field_count(&self) -> usize { self.text_fields.len() + usize::from(self.background.is_some()) }

    fn insert_field(&mut self, id: TextFieldId, field: TextField) {
        // Capacity covers every TextFieldId, so this insert cannot fail
        self.text_fields.insert(id, field).ok();
    }
}
