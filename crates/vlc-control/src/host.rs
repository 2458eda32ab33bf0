/// Read access to the host editor's active document view.
pub trait EditorView {
    /// Currently selected text; empty when nothing is selected.
    fn selection(&self) -> String;
}

impl EditorView for &str {
    fn selection(&self) -> String {
        (*self).to_string()
    }
}

impl EditorView for String {
    fn selection(&self) -> String {
        self.clone()
    }
}
