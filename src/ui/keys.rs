// ClipDeck - Raccourcis clavier
//
// Traduit une touche en commande selon la liste active. Les commandes
// produites portent sur l'entree selectionnee ; `App` ignore celles qui
// ne s'appliquent pas a la liste active (ex: `f` dans les favoris).
//
// | Touche            | Commande                        |
// |-------------------|---------------------------------|
// | Haut / Bas        | selection precedente / suivante |
// | Gauche / Droite   | changer de liste                |
// | Entree            | copier l'entree                 |
// | Suppr             | supprimer l'entree              |
// | f                 | ajouter aux favoris             |
// | e / F2            | modifier le titre               |
// | p                 | coller sur le service           |
// | Ctrl+Haut / Bas   | deplacer le favori              |
// | 1 a 9             | copier le favori numero N       |
// | Espace            | suspendre / reprendre la capture|
// | c                 | vider l'historique              |
// | q / Echap         | quitter                         |

use crate::app::commands::{ActiveList, Command};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commande associee a une touche, `None` si la touche est ignoree.
pub fn map_key(key: &KeyEvent, focus: ActiveList) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let favorites = focus == ActiveList::Favorites;

    let cmd = match key.code {
        KeyCode::Up if ctrl && favorites => Command::MoveSelectedUp,
        KeyCode::Down if ctrl && favorites => Command::MoveSelectedDown,
        KeyCode::Char('c') if ctrl => Command::Quit,
        _ if ctrl => return None,
        KeyCode::Up => Command::SelectPrev,
        KeyCode::Down => Command::SelectNext,
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => Command::SwitchList(None),
        KeyCode::Enter => Command::PickSelected,
        KeyCode::Delete | KeyCode::Backspace => Command::RemoveSelected,
        KeyCode::F(2) if favorites => Command::EditSelectedTitle,
        KeyCode::Char('e') if favorites => Command::EditSelectedTitle,
        KeyCode::Char('f') if !favorites => Command::PromoteSelected,
        KeyCode::Char('p') => Command::PasteSelected,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('c') => Command::ClearHistory,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(d @ '1'..='9') => Command::PickFavoriteNumber(d as usize - '1' as usize),
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_favorites_keys() {
        let f = ActiveList::Favorites;
        assert_eq!(map_key(&key(KeyCode::Delete), f), Some(Command::RemoveSelected));
        assert_eq!(map_key(&key(KeyCode::Left), f), Some(Command::SwitchList(None)));
        assert_eq!(map_key(&key(KeyCode::Right), f), Some(Command::SwitchList(None)));
        assert_eq!(map_key(&key(KeyCode::F(2)), f), Some(Command::EditSelectedTitle));
        assert_eq!(map_key(&ctrl(KeyCode::Up), f), Some(Command::MoveSelectedUp));
        assert_eq!(map_key(&ctrl(KeyCode::Down), f), Some(Command::MoveSelectedDown));
        assert_eq!(map_key(&key(KeyCode::Char('f')), f), None);
    }

    #[test]
    fn test_history_keys() {
        let h = ActiveList::History;
        assert_eq!(map_key(&key(KeyCode::Char('f')), h), Some(Command::PromoteSelected));
        assert_eq!(map_key(&key(KeyCode::Char('e')), h), None);
        assert_eq!(map_key(&ctrl(KeyCode::Up), h), None);
        assert_eq!(map_key(&key(KeyCode::Up), h), Some(Command::SelectPrev));
        assert_eq!(map_key(&key(KeyCode::Enter), h), Some(Command::PickSelected));
    }

    #[test]
    fn test_number_keys() {
        let h = ActiveList::History;
        assert_eq!(map_key(&key(KeyCode::Char('1')), h), Some(Command::PickFavoriteNumber(0)));
        assert_eq!(map_key(&key(KeyCode::Char('9')), h), Some(Command::PickFavoriteNumber(8)));
        assert_eq!(map_key(&key(KeyCode::Char('0')), h), None);
    }

    #[test]
    fn test_quit_and_release() {
        let h = ActiveList::History;
        assert_eq!(map_key(&key(KeyCode::Esc), h), Some(Command::Quit));
        assert_eq!(map_key(&ctrl(KeyCode::Char('c')), h), Some(Command::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('c')), h), Some(Command::ClearHistory));
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(&release, h), None);
    }
}
