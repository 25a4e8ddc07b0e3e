// ClipDeck - Edition d'une ligne de texte
//
// Tampon d'edition utilise pour modifier le titre d'un favori. Le
// curseur est un index d'octet toujours place sur une frontiere de
// caractere.

use crate::history::truncate::display_width;

/// Tampon d'edition sur une ligne.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineEditor {
    /// Cree un editeur contenant `text`, curseur en fin de ligne.
    pub fn new(text: &str) -> Self {
        let buffer = text.lines().next().unwrap_or("").to_string();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Supprime le caractere avant le curseur.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Supprime le caractere sous le curseur.
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Colonne du curseur en cellules.
    pub fn cursor_column(&self) -> usize {
        display_width(&self.buffer[..self.cursor])
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..].chars().next().map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_first_line() {
        let ed = LineEditor::new("title\nsecond");
        assert_eq!(ed.text(), "title");
        assert_eq!(ed.cursor_column(), 5);
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut ed = LineEditor::new("caf");
        ed.insert('é');
        assert_eq!(ed.text(), "café");
        ed.backspace();
        ed.backspace();
        assert_eq!(ed.text(), "ca");
        ed.insert('\n');
        assert_eq!(ed.text(), "ca");
    }

    #[test]
    fn test_cursor_moves() {
        let mut ed = LineEditor::new("日本");
        ed.left();
        assert_eq!(ed.cursor_column(), 2);
        ed.insert('x');
        assert_eq!(ed.text(), "日x本");
        ed.home();
        ed.delete();
        assert_eq!(ed.text(), "x本");
        ed.left();
        ed.end();
        ed.right();
        ed.delete();
        assert_eq!(ed.text(), "x本");
    }
}
