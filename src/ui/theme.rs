// ClipDeck - Gestion des themes (clair/sombre)
// Palettes de couleurs pour le rendu terminal
//
// Ce module definit les palettes utilisees par le rendu. Les couleurs
// sont des `DisplayColor` RGB converties en couleurs crossterm au
// moment du dessin.
//
// # Palettes
// Chaque palette contient les couleurs pour : fond, selection, texte
// principal/secondaire/selectionne, bordure, numero de favori, ligne
// de depot et barre d'etat.
//
// # Estompage
// `fade_base` sert de base a l'estompage des captures anciennes : en
// theme sombre le texte s'assombrit, en theme clair le fond se teinte.

use crate::config::settings::ThemeMode;
use crate::history::entry::DisplayColor;
use crossterm::style::Color;

/// Palette de couleurs pour le rendu terminal.
#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    /// Couleur de fond
    pub bg: DisplayColor,
    /// Couleur de fond de l'element selectionne
    pub bg_selected: DisplayColor,
    /// Couleur du texte principal
    pub text: DisplayColor,
    /// Couleur du texte secondaire (age, origine)
    pub text_secondary: DisplayColor,
    /// Couleur du texte selectionne
    pub text_selected: DisplayColor,
    /// Couleur des bordures et en-tetes inactifs
    pub border: DisplayColor,
    /// Couleur du numero des favoris
    pub number: DisplayColor,
    /// Couleur de la ligne de depot
    pub drop_line: DisplayColor,
    /// Couleur de fond de la barre d'etat
    pub status_bg: DisplayColor,
    /// Couleur de base des captures, assombrie avec l'age
    pub fade_base: DisplayColor,
    /// L'estompage teinte le fond (sinon le texte)
    pub fade_on_bg: bool,
}

const fn rgb(r: u8, g: u8, b: u8) -> DisplayColor {
    DisplayColor::new(r, g, b)
}

/// Palette du theme clair.
pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    bg: rgb(255, 255, 255),
    bg_selected: rgb(0, 120, 212),
    text: rgb(30, 30, 30),
    text_secondary: rgb(130, 130, 130),
    text_selected: rgb(255, 255, 255),
    border: rgb(200, 200, 200),
    number: rgb(200, 140, 0),
    drop_line: rgb(0, 120, 212),
    status_bg: rgb(245, 245, 245),
    fade_base: rgb(255, 255, 255),
    fade_on_bg: true,
};

/// Palette du theme sombre.
pub const DARK_PALETTE: ThemePalette = ThemePalette {
    bg: rgb(32, 32, 32),
    bg_selected: rgb(0, 120, 212),
    text: rgb(230, 230, 230),
    text_secondary: rgb(150, 150, 150),
    text_selected: rgb(255, 255, 255),
    border: rgb(60, 60, 60),
    number: rgb(255, 185, 0),
    drop_line: rgb(255, 185, 0),
    status_bg: rgb(45, 45, 45),
    fade_base: rgb(230, 230, 230),
    fade_on_bg: false,
};

/// Retourne la palette du mode demande.
pub fn get_palette(mode: ThemeMode) -> &'static ThemePalette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}

/// Convertit une couleur d'affichage en couleur terminal.
pub fn to_color(c: DisplayColor) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = get_palette(ThemeMode::Light);
        let dark = get_palette(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(rgb(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
