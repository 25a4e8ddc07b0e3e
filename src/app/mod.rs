// ClipDeck - Orchestrateur principal
// Connecte tous les composants : clipboard, history, storage, paste, UI
//
// Ce module est le coeur de ClipDeck. `App` possede l'historique et les
// favoris, les passerelles de persistance, le presse-papiers et le
// service de collage, ainsi que l'etat d'interface (liste active,
// selections, menu, message d'etat).
//
// # Architecture
// L'application est mono-thread : la boucle d'evenements du terminal
// appelle `App::handle` pour chaque commande et `App::tick` a chaque
// expiration du delai de scrutation. Aucune operation ne s'execute en
// parallele, les listes ne sont donc jamais verrouillees.
//
// # Persistance
// Apres chaque commande et chaque tick, les listes modifiees sont
// ecrites via leur passerelle. Un echec est journalise et la liste
// reste a ecrire : elle est retentee au tick suivant et a la sortie.
//
// # Cycle de vie
// 1. `App::new()` : chargement des listes (un echec donne une liste vide)
// 2. `handle()` / `tick()` : commandes et scrutation du presse-papiers
// 3. `shutdown()` : sauvegarde finale

use crate::app::commands::{ActiveList, Command, Flow};
use crate::app::drag::{DragOutcome, DragPayload};
use crate::app::menu::MenuState;
use crate::clipboard::monitor::ClipboardMonitor;
use crate::clipboard::ClipboardSource;
use crate::config::settings::Settings;
use crate::history::entry::{default_title, ClipEntry, DisplayColor, EntryId, FavoriteEntry};
use crate::history::favorites::FavoriteList;
use crate::history::ring::{FadePolicy, HistoryRing};
use crate::paste::PasteService;
use crate::storage::gateway::PersistenceGateway;
use crate::ui::{theme, DragPreview, Presenter, Region};
use chrono::{DateTime, Utc};

/// Commandes de l'application.
pub mod commands;
/// Glisser-deposer des favoris.
pub mod drag;
/// Menu contextuel.
pub mod menu;

/// Collaborateurs externes de l'application.
pub struct Services {
    pub history_store: Box<dyn PersistenceGateway<ClipEntry>>,
    pub favorites_store: Box<dyn PersistenceGateway<FavoriteEntry>>,
    pub clipboard: Box<dyn ClipboardSource>,
    pub paste: Box<dyn PasteService>,
}

/// Application principale ClipDeck.
///
/// Cette structure n'est pas thread-safe : elle est utilisee
/// exclusivement depuis le thread de la boucle d'evenements.
pub struct App {
    /// Historique des captures
    history: HistoryRing,
    /// Favoris
    favorites: FavoriteList,
    services: Services,
    monitor: ClipboardMonitor,
    settings: Settings,
    fade: FadePolicy,
    fade_base: DisplayColor,
    /// Liste ayant le focus
    focus: ActiveList,
    /// Minute des ages affiches dans l'historique
    shown_minute: i64,
    history_selected: usize,
    favorites_selected: usize,
    menu: MenuState,
    /// Message de la barre d'etat
    status: Option<String>,
    clock: fn() -> DateTime<Utc>,
}

impl App {
    /// Cree l'application et charge les listes persistees.
    ///
    /// Un echec de chargement n'est pas fatal : il est journalise et la
    /// liste concernee demarre vide.
    pub fn new(settings: Settings, mut services: Services, view_width: usize) -> Self {
        let mut history = HistoryRing::new(settings.limit);
        match services.history_store.load() {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "history loaded");
                history.load_from(entries);
            }
            Err(e) => tracing::warn!(error = %e, "failed to load history, starting empty"),
        }

        let mut favorites = FavoriteList::new(view_width);
        match services.favorites_store.load() {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "favorites loaded");
                favorites.load_from(entries);
            }
            Err(e) => tracing::warn!(error = %e, "failed to load favorites, starting empty"),
        }

        let mut monitor = ClipboardMonitor::new(settings.paused);
        monitor.prime(services.clipboard.as_mut());

        let palette = theme::get_palette(settings.theme);
        let mut app = Self {
            history,
            favorites,
            services,
            monitor,
            fade: settings.fade_policy(),
            fade_base: palette.fade_base,
            settings,
            focus: ActiveList::History,
            shown_minute: 0,
            history_selected: 0,
            favorites_selected: 0,
            menu: MenuState::Idle,
            status: None,
            clock: Utc::now,
        };
        app.refresh_colors();
        app
    }

    /// Remplace l'horloge (tests).
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self.refresh_colors();
        self
    }

    /// Execute une commande.
    pub fn handle(&mut self, cmd: Command, presenter: &mut dyn Presenter) -> Flow {
        let flow = self.dispatch(cmd, presenter);
        self.persist_dirty();
        flow
    }

    /// Tick periodique : scrutation du presse-papiers, estompage, sauvegarde.
    pub fn tick(&mut self, now: DateTime<Utc>, presenter: &mut dyn Presenter) {
        if let Some(text) = self.monitor.poll(self.services.clipboard.as_mut()) {
            let origin = self.services.clipboard.origin();
            self.dispatch(Command::CaptureClip { text, origin }, presenter);
        }
        if !self.history.is_empty() {
            let faded = self.history.update_colors(now, &self.fade, self.fade_base);
            let minute = now.timestamp().div_euclid(60);
            if faded || minute != self.shown_minute {
                self.shown_minute = minute;
                presenter.request_redraw(Region::History);
            }
        }
        self.persist_dirty();
    }

    /// Sauvegarde finale avant de quitter.
    pub fn shutdown(&mut self) {
        self.persist_dirty();
        tracing::info!(
            history = self.history.len(),
            favorites = self.favorites.len(),
            "clipdeck stopped"
        );
    }

    fn dispatch(&mut self, cmd: Command, presenter: &mut dyn Presenter) -> Flow {
        match cmd {
            Command::CaptureClip { text, origin } => self.on_capture(text, origin, presenter),

            Command::Select { list, index } => {
                self.focus = list;
                self.set_selected(list, index);
                presenter.request_redraw(Region::All);
            }
            Command::SelectPrev => {
                let index = self.selected(self.focus).saturating_sub(1);
                self.set_selected(self.focus, index);
                presenter.request_redraw(self.focus_region());
            }
            Command::SelectNext => {
                let index = self.selected(self.focus) + 1;
                self.set_selected(self.focus, index);
                presenter.request_redraw(self.focus_region());
            }
            Command::SwitchList(target) => {
                self.focus = target.unwrap_or_else(|| self.focus.toggled());
                presenter.request_redraw(Region::All);
            }

            Command::PickSelected => match self.selected_id() {
                Some((ActiveList::History, id)) => return self.pick_clip(id, presenter),
                Some((ActiveList::Favorites, id)) => return self.pick_favorite(id, presenter),
                None => {}
            },
            Command::PickClip(id) => return self.pick_clip(id, presenter),
            Command::PickFavorite(id) => return self.pick_favorite(id, presenter),
            Command::PickFavoriteNumber(position) => {
                if let Some(id) = self.favorites.by_position(position).map(|e| e.id) {
                    return self.pick_favorite(id, presenter);
                }
            }

            Command::PromoteSelected => {
                if let Some((ActiveList::History, id)) = self.selected_id() {
                    self.promote_to_favorite(id, presenter);
                }
            }
            Command::PromoteToFavorite(id) => self.promote_to_favorite(id, presenter),
            Command::RemoveSelected => match self.selected_id() {
                Some((ActiveList::History, id)) => self.remove_clip(id, presenter),
                Some((ActiveList::Favorites, id)) => self.remove_favorite(id, presenter),
                None => {}
            },
            Command::RemoveClip(id) => self.remove_clip(id, presenter),
            Command::ClearHistory => {
                self.history.clear();
                self.history_selected = 0;
                self.set_status("Historique vide");
                presenter.request_redraw(Region::All);
            }

            Command::RemoveFavorite(id) => self.remove_favorite(id, presenter),
            Command::MoveFavorite { from, to } => self.move_favorite(from, to, presenter),
            Command::MoveSelectedUp => {
                if self.focus == ActiveList::Favorites {
                    if let Some(index) = self.favorites.move_up(self.favorites_selected) {
                        self.favorites_selected = index;
                        presenter.request_redraw(Region::Favorites);
                    }
                }
            }
            Command::MoveSelectedDown => {
                if self.focus == ActiveList::Favorites {
                    if let Some(index) = self.favorites.move_down(self.favorites_selected) {
                        self.favorites_selected = index;
                        presenter.request_redraw(Region::Favorites);
                    }
                }
            }
            Command::BeginDrag { index } => self.begin_drag(index, presenter),
            Command::DropFavorite { payload, drop_index } => {
                self.drop_favorite(&payload, drop_index, presenter)
            }
            Command::EditSelectedTitle => {
                if let Some((ActiveList::Favorites, id)) = self.selected_id() {
                    self.edit_title(id, presenter);
                }
            }
            Command::EditTitle(id) => self.edit_title(id, presenter),
            Command::CommitTitle { id, title } => self.commit_title(id, &title, presenter),

            Command::PasteSelected => {
                if let Some(text) = self.selected_text() {
                    self.paste_text(&text, presenter);
                }
            }
            Command::PasteClip(id) => {
                let text = self.history.index_of(id).and_then(|i| self.history.get(i)).map(|e| e.text.clone());
                if let Some(text) = text {
                    self.paste_text(&text, presenter);
                }
            }
            Command::PasteFavorite(id) => {
                let text = self
                    .favorites
                    .index_of(id)
                    .and_then(|i| self.favorites.get(i))
                    .map(|e| e.text.clone());
                if let Some(text) = text {
                    self.paste_text(&text, presenter);
                }
            }

            Command::OpenMenu { point, list, index } => {
                if self.menu != MenuState::Idle {
                    tracing::debug!("context menu already open");
                    return Flow::Continue;
                }
                if index != self.selected(list) {
                    return Flow::Continue;
                }
                let id = match list {
                    ActiveList::History => self.history.get(index).map(|e| e.id),
                    ActiveList::Favorites => self.favorites.get(index).map(|e| e.id),
                };
                if let Some(id) = id {
                    let items = menu::build_menu(list, id, self.services.paste.name());
                    self.menu = MenuState::MenuOpen;
                    presenter.show_popup_menu(point, items);
                }
            }
            Command::MenuClosed => {
                self.menu = MenuState::Idle;
                presenter.request_redraw(Region::All);
            }

            Command::TogglePause => {
                let paused = !self.monitor.is_paused();
                self.monitor.set_paused(paused);
                self.settings.paused = paused;
                tracing::info!(paused, "capture toggled");
                self.set_status(if paused { "Capture en pause" } else { "Capture reprise" });
                presenter.request_redraw(Region::Status);
            }
            Command::Resize { view_width } => {
                if view_width != self.favorites.view_width() {
                    self.favorites.relayout(view_width);
                }
                presenter.request_redraw(Region::All);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn on_capture(&mut self, text: String, origin: String, presenter: &mut dyn Presenter) {
        let now = (self.clock)();
        tracing::debug!(len = text.len(), origin = %origin, "clip captured");
        self.add_to_history(text, origin, now);
        presenter.request_redraw(Region::History);
    }

    /// Insere une capture en tete de l'historique.
    ///
    /// Une selection en tete reste en tete ; ailleurs, elle suit son entree.
    fn add_to_history(&mut self, text: String, origin: String, now: DateTime<Utc>) {
        let followed = match self.history_selected {
            0 => None,
            i => self.history.get(i).map(|e| e.id),
        };
        self.history.add_clip(text, origin, now);
        self.history.update_colors(now, &self.fade, self.fade_base);
        self.history_selected = followed
            .and_then(|id| self.history.index_of(id))
            .unwrap_or(0);
        self.clamp_selection();
    }

    /// Copie une capture dans le presse-papiers et la remonte en tete.
    fn pick_clip(&mut self, id: EntryId, presenter: &mut dyn Presenter) -> Flow {
        let Some(index) = self.history.index_of(id) else {
            return Flow::Continue;
        };
        let Some(text) = self.history.get(index).map(|e| e.text.clone()) else {
            return Flow::Continue;
        };
        if !self.copy_to_clipboard(&text) {
            presenter.request_redraw(Region::Status);
            return Flow::Continue;
        }
        let now = (self.clock)();
        self.history.promote_to_top(index, now);
        self.history.update_colors(now, &self.fade, self.fade_base);
        self.history_selected = 0;
        self.set_status("Copie dans le presse-papiers");
        presenter.request_redraw(Region::All);
        self.after_select()
    }

    /// Copie un favori dans le presse-papiers ; son texte rejoint l'historique.
    fn pick_favorite(&mut self, id: EntryId, presenter: &mut dyn Presenter) -> Flow {
        let entry = self
            .favorites
            .index_of(id)
            .and_then(|i| self.favorites.get(i))
            .map(|e| (e.text.clone(), e.origin.clone()));
        let Some((text, origin)) = entry else {
            return Flow::Continue;
        };
        if !self.copy_to_clipboard(&text) {
            presenter.request_redraw(Region::Status);
            return Flow::Continue;
        }
        let now = (self.clock)();
        self.add_to_history(text, origin, now);
        self.set_status("Copie dans le presse-papiers");
        presenter.request_redraw(Region::All);
        self.after_select()
    }

    fn after_select(&self) -> Flow {
        if self.settings.close_after_select {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn promote_to_favorite(&mut self, id: EntryId, presenter: &mut dyn Presenter) {
        let Some(clip) = self.history.index_of(id).and_then(|i| self.history.get(i)) else {
            return;
        };
        let favorite = FavoriteEntry::from_clip(clip);
        self.favorites.add_favorite(favorite.text, favorite.origin, Some(favorite.title));
        self.set_status("Ajoute aux favoris");
        presenter.request_redraw(Region::Favorites);
        presenter.request_redraw(Region::Status);
    }

    fn remove_clip(&mut self, id: EntryId, presenter: &mut dyn Presenter) {
        if let Some(index) = self.history.index_of(id) {
            self.history.remove(index);
            self.clamp_selection();
            presenter.request_redraw(Region::History);
        }
    }

    fn remove_favorite(&mut self, id: EntryId, presenter: &mut dyn Presenter) {
        if let Some(index) = self.favorites.index_of(id) {
            self.favorites.remove_item(index);
            self.clamp_selection();
            presenter.request_redraw(Region::Favorites);
        }
    }

    fn move_favorite(&mut self, from: usize, to: usize, presenter: &mut dyn Presenter) {
        if self.favorites.is_empty() {
            return;
        }
        self.favorites.move_item(from, to);
        self.favorites_selected = to.min(self.favorites.len() - 1);
        presenter.request_redraw(Region::Favorites);
    }

    fn begin_drag(&mut self, index: usize, presenter: &mut dyn Presenter) {
        let Some(entry) = self.favorites.get(index) else {
            return;
        };
        let payload = DragPayload {
            text: entry.text.clone(),
            origin_index: index,
        };
        let preview = DragPreview {
            label: entry.display_title.clone(),
        };
        self.focus = ActiveList::Favorites;
        self.favorites_selected = index;
        match presenter.begin_drag(payload.clone(), preview) {
            DragOutcome::Dropped(drop_index) => self.drop_favorite(&payload, drop_index, presenter),
            DragOutcome::Pending => {}
        }
    }

    fn drop_favorite(
        &mut self,
        payload: &DragPayload,
        drop_index: Option<usize>,
        presenter: &mut dyn Presenter,
    ) {
        let Some(from) = drag::locate_payload(&self.favorites, payload) else {
            tracing::debug!("dragged favorite no longer exists");
            presenter.request_redraw(Region::Favorites);
            return;
        };
        let to = drag::resolve_drop_index(drop_index, self.favorites.len());
        self.move_favorite(from, to, presenter);
    }

    fn edit_title(&mut self, id: EntryId, presenter: &mut dyn Presenter) {
        if let Some(entry) = self.favorites.index_of(id).and_then(|i| self.favorites.get(i)) {
            presenter.edit_title(id, &entry.title);
        }
    }

    /// Applique un nouveau titre ; un titre vide revient au titre par defaut.
    fn commit_title(&mut self, id: EntryId, title: &str, presenter: &mut dyn Presenter) {
        let Some(index) = self.favorites.index_of(id) else {
            return;
        };
        let title = title.trim();
        let title = if title.is_empty() {
            self.favorites.get(index).map(|e| default_title(&e.text)).unwrap_or_default()
        } else {
            title.to_string()
        };
        self.favorites.set_title(index, title);
        presenter.request_redraw(Region::Favorites);
    }

    /// Publie un texte ; l'URL obtenue est copiee et ajoutee a l'historique.
    fn paste_text(&mut self, text: &str, presenter: &mut dyn Presenter) {
        let service = self.services.paste.name().to_string();
        match self.services.paste.paste(text) {
            Ok(url) => {
                if self.copy_to_clipboard(&url) {
                    let now = (self.clock)();
                    self.add_to_history(url.clone(), service, now);
                    self.set_status(format!("URL copiee : {}", url));
                }
            }
            Err(e) => {
                tracing::warn!(service = %service, error = %e, "paste failed");
                self.set_status(format!("Echec du collage : {}", e));
            }
        }
        presenter.request_redraw(Region::All);
    }

    /// Ecrit dans le presse-papiers sans que le moniteur le capture.
    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        match self.services.clipboard.write_text(text) {
            Ok(()) => {
                self.monitor.mark_own(text);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.set_status(format!("Echec de la copie : {}", e));
                false
            }
        }
    }

    /// Ecrit les listes modifiees. Une liste dont l'ecriture echoue reste
    /// modifiee et sera reecrite au prochain appel.
    fn persist_dirty(&mut self) {
        if self.history.is_dirty() {
            match self.services.history_store.save(self.history.as_slice()) {
                Ok(()) => {
                    tracing::debug!(count = self.history.len(), "history saved");
                    self.history.reset_dirty();
                }
                Err(e) => tracing::warn!(error = %e, "failed to save history"),
            }
        }
        if self.favorites.is_dirty() {
            match self.services.favorites_store.save(self.favorites.as_slice()) {
                Ok(()) => {
                    tracing::debug!(count = self.favorites.len(), "favorites saved");
                    self.favorites.reset_dirty();
                }
                Err(e) => tracing::warn!(error = %e, "failed to save favorites"),
            }
        }
    }

    fn refresh_colors(&mut self) {
        let now = (self.clock)();
        self.history.update_colors(now, &self.fade, self.fade_base);
        self.shown_minute = now.timestamp().div_euclid(60);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    fn set_selected(&mut self, list: ActiveList, index: usize) {
        match list {
            ActiveList::History => {
                self.history_selected = index.min(self.history.len().saturating_sub(1));
            }
            ActiveList::Favorites => {
                self.favorites_selected = index.min(self.favorites.len().saturating_sub(1));
            }
        }
    }

    fn clamp_selection(&mut self) {
        self.set_selected(ActiveList::History, self.history_selected);
        self.set_selected(ActiveList::Favorites, self.favorites_selected);
    }

    fn focus_region(&self) -> Region {
        match self.focus {
            ActiveList::History => Region::History,
            ActiveList::Favorites => Region::Favorites,
        }
    }

    fn selected_id(&self) -> Option<(ActiveList, EntryId)> {
        let id = match self.focus {
            ActiveList::History => self.history.get(self.history_selected)?.id,
            ActiveList::Favorites => self.favorites.get(self.favorites_selected)?.id,
        };
        Some((self.focus, id))
    }

    fn selected_text(&self) -> Option<String> {
        match self.focus {
            ActiveList::History => self.history.get(self.history_selected).map(|e| e.text.clone()),
            ActiveList::Favorites => self.favorites.get(self.favorites_selected).map(|e| e.text.clone()),
        }
    }

    // --- Accesseurs pour le rendu ---

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    pub fn favorites(&self) -> &FavoriteList {
        &self.favorites
    }

    pub fn focus(&self) -> ActiveList {
        self.focus
    }

    /// Index selectionne dans la liste donnee.
    pub fn selected(&self, list: ActiveList) -> usize {
        match list {
            ActiveList::History => self.history_selected,
            ActiveList::Favorites => self.favorites_selected,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.monitor.is_paused()
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    #[cfg(test)]
    fn clipboard_mut(&mut self) -> &mut dyn ClipboardSource {
        self.services.clipboard.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::paste::FakePasteService;
    use crate::storage::gateway::MemoryGateway;
    use crate::ui::{RecordingPresenter, ScreenPoint};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    struct Fixture {
        app: App,
        history: MemoryGateway<ClipEntry>,
        favorites: MemoryGateway<FavoriteEntry>,
        paste: FakePasteService,
        ui: RecordingPresenter,
    }

    fn fixture_with(settings: Settings, history: Vec<ClipEntry>, favorites: Vec<FavoriteEntry>) -> Fixture {
        let history = MemoryGateway::with(history);
        let favorites = MemoryGateway::with(favorites);
        let paste = FakePasteService::default();
        let services = Services {
            history_store: Box::new(history.clone()),
            favorites_store: Box::new(favorites.clone()),
            clipboard: Box::new(MemoryClipboard::new()),
            paste: Box::new(paste.clone()),
        };
        let app = App::new(settings, services, 80).with_clock(t0);
        Fixture { app, history, favorites, paste, ui: RecordingPresenter::default() }
    }

    fn fixture() -> Fixture {
        fixture_with(Settings::default(), Vec::new(), Vec::new())
    }

    fn with_favorites(titles: &[&str]) -> Fixture {
        let favs = titles.iter().map(|t| FavoriteEntry::new(*t, "app", None)).collect();
        fixture_with(Settings::default(), Vec::new(), favs)
    }

    fn fav_titles(app: &App) -> Vec<String> {
        app.favorites().iter().map(|e| e.title.clone()).collect()
    }

    fn clip_texts(app: &App) -> Vec<String> {
        app.history().iter().map(|e| e.text.clone()).collect()
    }

    impl Fixture {
        fn run(&mut self, cmd: Command) -> Flow {
            self.app.handle(cmd, &mut self.ui)
        }

        fn capture(&mut self, text: &str) {
            self.run(Command::CaptureClip { text: text.into(), origin: "term".into() });
        }

        fn copy_externally(&mut self, text: &str) {
            self.app.clipboard_mut().write_text(text).unwrap();
            self.app.tick(t0(), &mut self.ui);
        }
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let history = MemoryGateway::with(vec![ClipEntry::new("x", "app", t0())]);
        history.fail.set(true);
        let favorites = MemoryGateway::with(vec![]);
        let services = Services {
            history_store: Box::new(history),
            favorites_store: Box::new(favorites),
            clipboard: Box::new(MemoryClipboard::new()),
            paste: Box::new(FakePasteService::default()),
        };
        let app = App::new(Settings::default(), services, 80);
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_loaded_lists_keep_order() {
        let f = fixture_with(
            Settings::default(),
            vec![ClipEntry::new("new", "a", t0()), ClipEntry::new("old", "a", t0())],
            vec![FavoriteEntry::new("b", "a", None), FavoriteEntry::new("a", "a", None)],
        );
        assert_eq!(clip_texts(&f.app), vec!["new", "old"]);
        assert_eq!(fav_titles(&f.app), vec!["b", "a"]);
    }

    #[test]
    fn test_tick_captures_and_persists() {
        let mut f = fixture();
        f.copy_externally("hello");
        assert_eq!(clip_texts(&f.app), vec!["hello"]);
        assert_eq!(f.history.saved.borrow()[0].text, "hello");
        assert!(f.ui.redraws.contains(&Region::History));

        f.app.tick(t0(), &mut f.ui);
        assert_eq!(f.app.history().len(), 1);
    }

    #[test]
    fn test_capture_dedupes_and_caps() {
        let settings = Settings { limit: 2, ..Settings::default() };
        let mut f = fixture_with(settings, Vec::new(), Vec::new());
        for text in ["a", "b", "a", "c"] {
            f.capture(text);
        }
        assert_eq!(clip_texts(&f.app), vec!["c", "a"]);
    }

    #[test]
    fn test_pick_clip_promotes_and_is_not_recaptured() {
        let mut f = fixture();
        f.copy_externally("first");
        f.copy_externally("second");
        let id = f.app.history().get(1).unwrap().id;
        assert_eq!(f.run(Command::PickClip(id)), Flow::Continue);
        assert_eq!(clip_texts(&f.app), vec!["first", "second"]);
        assert_eq!(f.app.clipboard_mut().read_text().as_deref(), Some("first"));

        f.app.tick(t0(), &mut f.ui);
        assert_eq!(f.app.history().len(), 2);
        assert_eq!(f.app.status(), Some("Copie dans le presse-papiers"));
    }

    #[test]
    fn test_close_after_select_quits() {
        let settings = Settings { close_after_select: true, ..Settings::default() };
        let mut f = fixture_with(settings, Vec::new(), Vec::new());
        f.capture("x");
        assert_eq!(f.run(Command::PickSelected), Flow::Quit);
    }

    #[test]
    fn test_promote_then_pick_by_number() {
        let mut f = fixture();
        f.capture("snippet one");
        f.capture("snippet two");
        f.run(Command::PromoteSelected);
        let id = f.app.history().get(1).unwrap().id;
        f.run(Command::PromoteToFavorite(id));
        assert_eq!(fav_titles(&f.app), vec!["snippet two", "snippet one"]);
        assert_eq!(f.favorites.saved.borrow().len(), 2);

        f.run(Command::PickFavoriteNumber(1));
        assert_eq!(f.app.clipboard_mut().read_text().as_deref(), Some("snippet one"));
        assert_eq!(f.app.history().get(0).unwrap().text, "snippet one");
    }

    #[test]
    fn test_move_favorite_scenario() {
        let mut f = with_favorites(&["A", "B", "C"]);
        f.run(Command::MoveFavorite { from: 0, to: 2 });
        assert_eq!(fav_titles(&f.app), vec!["B", "C", "A"]);
        let saved = f.favorites.saved.borrow();
        let positions: Vec<_> = saved.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(saved[2].title, "A");
    }

    #[test]
    fn test_move_selected_up_down() {
        let mut f = with_favorites(&["A", "B", "C"]);
        f.run(Command::Select { list: ActiveList::Favorites, index: 0 });
        f.run(Command::MoveSelectedDown);
        assert_eq!(fav_titles(&f.app), vec!["B", "A", "C"]);
        assert_eq!(f.app.selected(ActiveList::Favorites), 1);
        f.run(Command::MoveSelectedUp);
        assert_eq!(fav_titles(&f.app), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_immediate_drop_without_index_lands_at_end() {
        let mut f = with_favorites(&["A", "B", "C"]);
        f.ui.drag_outcome = Some(DragOutcome::Dropped(None));
        f.run(Command::BeginDrag { index: 0 });
        assert_eq!(f.ui.drags[0].0, DragPayload { text: "A".into(), origin_index: 0 });
        assert_eq!(fav_titles(&f.app), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_on_item_takes_its_slot() {
        let mut f = with_favorites(&["A", "B", "C", "D"]);
        f.run(Command::BeginDrag { index: 3 });
        let payload = f.ui.drags[0].0.clone();
        f.run(Command::DropFavorite { payload, drop_index: Some(1) });
        assert_eq!(fav_titles(&f.app), vec!["A", "D", "B", "C"]);
        assert_eq!(f.app.selected(ActiveList::Favorites), 1);
    }

    #[test]
    fn test_drop_after_list_changed() {
        let mut f = with_favorites(&["A", "B", "C"]);
        f.run(Command::BeginDrag { index: 2 });
        let payload = f.ui.drags[0].0.clone();
        let first = f.app.favorites().get(0).unwrap().id;
        f.run(Command::RemoveFavorite(first));
        f.run(Command::DropFavorite { payload, drop_index: Some(0) });
        assert_eq!(fav_titles(&f.app), vec!["C", "B"]);

        let stale = DragPayload { text: "gone".into(), origin_index: 0 };
        f.run(Command::DropFavorite { payload: stale, drop_index: Some(1) });
        assert_eq!(fav_titles(&f.app), vec!["C", "B"]);
    }

    #[test]
    fn test_menu_refuses_to_open_twice() {
        let mut f = with_favorites(&["A"]);
        let open = Command::OpenMenu {
            point: ScreenPoint::new(5, 2),
            list: ActiveList::Favorites,
            index: 0,
        };
        f.run(open.clone());
        f.run(open.clone());
        assert_eq!(f.ui.menus.len(), 1);
        assert_eq!(f.app.menu_state(), MenuState::MenuOpen);

        f.run(Command::MenuClosed);
        assert_eq!(f.app.menu_state(), MenuState::Idle);
        f.run(open);
        assert_eq!(f.ui.menus.len(), 2);
    }

    #[test]
    fn test_menu_only_on_selected_item() {
        let mut f = with_favorites(&["A", "B"]);
        f.run(Command::OpenMenu { point: ScreenPoint::default(), list: ActiveList::Favorites, index: 1 });
        assert!(f.ui.menus.is_empty());
        assert_eq!(f.app.menu_state(), MenuState::Idle);
    }

    #[test]
    fn test_menu_command_targets_entry_by_identity() {
        let mut f = with_favorites(&["A", "B"]);
        f.run(Command::OpenMenu { point: ScreenPoint::default(), list: ActiveList::Favorites, index: 0 });
        let remove = f.ui.menus[0].1[2].command.clone();
        f.run(Command::MenuClosed);
        f.run(Command::MoveFavorite { from: 0, to: 1 });
        f.run(remove);
        assert_eq!(fav_titles(&f.app), vec!["B"]);
    }

    #[test]
    fn test_edit_and_commit_title() {
        let mut f = with_favorites(&["body text"]);
        f.run(Command::SwitchList(Some(ActiveList::Favorites)));
        f.run(Command::EditSelectedTitle);
        let (id, current) = f.ui.edits[0].clone();
        assert_eq!(current, "body text");

        f.run(Command::CommitTitle { id, title: "  Renamed  ".into() });
        assert_eq!(f.app.favorites().get(0).unwrap().title, "Renamed");
        assert_eq!(f.favorites.saved.borrow()[0].title, "Renamed");

        f.run(Command::CommitTitle { id, title: "   ".into() });
        assert_eq!(f.app.favorites().get(0).unwrap().title, "body text");
    }

    #[test]
    fn test_paste_adds_url_to_history() {
        let mut f = with_favorites(&["share me"]);
        let id = f.app.favorites().get(0).unwrap().id;
        f.run(Command::PasteFavorite(id));
        assert_eq!(*f.paste.received.borrow(), vec!["share me".to_string()]);
        let top = f.app.history().get(0).unwrap();
        assert_eq!(top.text, "http://paste.test/1");
        assert_eq!(top.origin, "paste.test");
        assert_eq!(f.app.clipboard_mut().read_text().as_deref(), Some("http://paste.test/1"));

        f.app.tick(t0(), &mut f.ui);
        assert_eq!(f.app.history().len(), 1);
    }

    #[test]
    fn test_paste_failure_sets_status() {
        let history = MemoryGateway::with(vec![ClipEntry::new("x", "app", t0())]);
        let services = Services {
            history_store: Box::new(history),
            favorites_store: Box::new(MemoryGateway::with(vec![])),
            clipboard: Box::new(MemoryClipboard::new()),
            paste: Box::new(FakePasteService { fail: true, ..FakePasteService::default() }),
        };
        let mut app = App::new(Settings::default(), services, 80).with_clock(t0);
        let mut ui = RecordingPresenter::default();
        app.handle(Command::PasteSelected, &mut ui);
        assert_eq!(app.history().len(), 1);
        assert!(app.status().unwrap().starts_with("Echec du collage"));
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let mut f = fixture();
        for text in ["a", "b", "c"] {
            f.capture(text);
        }
        f.run(Command::Select { list: ActiveList::History, index: 2 });
        f.run(Command::RemoveSelected);
        assert_eq!(clip_texts(&f.app), vec!["c", "b"]);
        assert_eq!(f.app.selected(ActiveList::History), 1);

        f.run(Command::ClearHistory);
        assert!(f.app.history().is_empty());
        assert_eq!(f.app.selected(ActiveList::History), 0);
        f.run(Command::RemoveSelected);
    }

    #[test]
    fn test_select_clamped() {
        let mut f = with_favorites(&["A", "B"]);
        f.run(Command::Select { list: ActiveList::Favorites, index: 9 });
        assert_eq!(f.app.selected(ActiveList::Favorites), 1);
        f.run(Command::SelectNext);
        assert_eq!(f.app.selected(ActiveList::Favorites), 1);
        f.run(Command::SwitchList(None));
        assert_eq!(f.app.focus(), ActiveList::History);
    }

    #[test]
    fn test_toggle_pause_skips_capture() {
        let mut f = fixture();
        f.run(Command::TogglePause);
        assert!(f.app.is_paused());
        f.copy_externally("private");
        assert!(f.app.history().is_empty());

        f.run(Command::TogglePause);
        f.app.tick(t0(), &mut f.ui);
        assert!(f.app.history().is_empty());
        f.copy_externally("public");
        assert_eq!(clip_texts(&f.app), vec!["public"]);
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let mut f = fixture();
        f.history.fail.set(true);
        f.capture("kept");
        assert_eq!(clip_texts(&f.app), vec!["kept"]);
        assert_eq!(f.history.saves.get(), 0);

        f.history.fail.set(false);
        f.capture("next");
        assert_eq!(f.history.saved.borrow().len(), 2);
    }

    #[test]
    fn test_failed_save_is_written_on_shutdown() {
        let mut f = fixture();
        f.history.fail.set(true);
        f.capture("important");
        f.history.fail.set(false);
        f.app.shutdown();
        let saved: Vec<_> = f.history.saved.borrow().iter().map(|e| e.text.clone()).collect();
        assert_eq!(saved, vec!["important"]);
    }

    #[test]
    fn test_failed_save_retried_on_tick() {
        let mut f = with_favorites(&["A", "B"]);
        f.favorites.fail.set(true);
        f.run(Command::MoveFavorite { from: 0, to: 1 });
        f.favorites.fail.set(false);
        f.app.tick(t0(), &mut f.ui);
        assert_eq!(f.favorites.saved.borrow()[0].title, "B");
        assert_eq!(f.favorites.saves.get(), 1);
    }

    #[test]
    fn test_duplicate_clips_dropped_at_load() {
        let f = fixture_with(
            Settings::default(),
            vec![ClipEntry::new("x", "a", t0()), ClipEntry::new("x", "b", t0())],
            Vec::new(),
        );
        assert_eq!(clip_texts(&f.app), vec!["x"]);
        assert_eq!(f.app.history().get(0).unwrap().origin, "a");
    }

    #[test]
    fn test_tick_redraws_only_when_display_changes() {
        let mut f = fixture_with(Settings::default(), vec![ClipEntry::new("x", "a", t0())], Vec::new());
        f.app.tick(t0(), &mut f.ui);
        f.app.tick(t0() + Duration::seconds(10), &mut f.ui);
        assert!(f.ui.redraws.is_empty());

        f.app.tick(t0() + Duration::minutes(1), &mut f.ui);
        assert_eq!(f.ui.redraws, vec![Region::History]);
        f.app.tick(t0() + Duration::minutes(10), &mut f.ui);
        assert_eq!(f.ui.redraws.len(), 2);
    }

    #[test]
    fn test_capture_keeps_selected_entry() {
        let mut f = fixture();
        for text in ["a", "b", "c"] {
            f.capture(text);
        }
        f.run(Command::Select { list: ActiveList::History, index: 1 });
        f.capture("d");
        assert_eq!(f.app.selected(ActiveList::History), 2);
        assert_eq!(f.app.history().get(2).unwrap().text, "b");

        f.run(Command::Select { list: ActiveList::History, index: 0 });
        f.capture("e");
        assert_eq!(f.app.selected(ActiveList::History), 0);
        assert_eq!(f.app.history().get(0).unwrap().text, "e");
    }

    #[test]
    fn test_capture_of_selected_text_follows_it_to_top() {
        let mut f = fixture();
        for text in ["a", "b", "c"] {
            f.capture(text);
        }
        f.run(Command::Select { list: ActiveList::History, index: 2 });
        f.capture("a");
        assert_eq!(clip_texts(&f.app), vec!["a", "c", "b"]);
        assert_eq!(f.app.selected(ActiveList::History), 0);
    }

    #[test]
    fn test_resize_relayouts_titles() {
        let mut f = with_favorites(&["A rather long favorite title"]);
        f.run(Command::Resize { view_width: 15 });
        let title = &f.app.favorites().get(0).unwrap().display_title;
        assert!(title.ends_with(crate::constants::ELLIPSIS));
        assert!(f.ui.redraws.contains(&Region::All));
    }
}
