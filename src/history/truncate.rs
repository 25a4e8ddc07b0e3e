// ClipDeck - Troncature des titres a la largeur d'affichage
//
// Les largeurs sont mesurees en cellules de terminal avec
// `unicode-width` (un caractere CJK occupe deux cellules).
//
// # Politique
// Troncature par la fin : si la largeur du texte depasse la largeur
// disponible, on garde le plus long prefixe qui laisse la place au
// marqueur "…", puis on ajoute le marqueur. Le resultat ne depasse
// jamais la largeur disponible.

use crate::constants::{ELLIPSIS, ICON_WIDTH, LABEL_SPACING};
use unicode_width::UnicodeWidthStr;

/// Largeur affichee d'une chaine, en cellules.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Largeur disponible pour un titre dans une vue de `view_width` cellules.
pub fn available_title_width(view_width: usize) -> usize {
    view_width
        .saturating_sub(ICON_WIDTH)
        .saturating_sub(4 * LABEL_SPACING)
}

/// Tronque `text` par la fin pour tenir dans `max_width` cellules.
///
/// Quand la largeur ne permet meme pas d'afficher le marqueur, le
/// resultat est vide.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let marker = ELLIPSIS.width();
    if max_width < marker {
        return String::new();
    }
    let budget = max_width - marker;

    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let next = idx + ch.len_utf8();
        if text[..next].width() > budget {
            break;
        }
        end = next;
    }

    let mut out = String::with_capacity(end + ELLIPSIS.len());
    out.push_str(&text[..end]);
    out.push_str(ELLIPSIS);
    out
}

/// Apercu d'une ligne : premiere ligne, tabulations et caracteres de
/// controle remplaces, tronquee a `max_width`.
pub fn line_preview(text: &str, max_width: usize) -> String {
    let first = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let clean: String = first
        .chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();
    let more_lines = text.trim_end().lines().filter(|l| !l.trim().is_empty()).count() > 1;
    if more_lines && clean.width() + ELLIPSIS.width() <= max_width {
        return format!("{}{}", clean, ELLIPSIS);
    }
    truncate_end(&clean, max_width)
}
