// ClipDeck - Interface terminal
// Boucle d'evenements, rendu et presentateur crossterm
//
// Ce module pilote le terminal en mode brut (ecran alternatif, capture
// de la souris) et traduit les evenements clavier/souris en commandes
// pour `App`.
//
// # Boucle
// `run` attend un evenement avec un delai egal a l'intervalle de
// scrutation. A l'expiration du delai, `App::tick` lit le
// presse-papiers. L'ecran est redessine entierement quand une zone a
// ete invalidee.
//
// # Souris
// - clic gauche : selection (et focus) de l'entree
// - glisser sur un favori : deplacement, ligne de depot affichee
// - clic droit : menu contextuel de l'entree
// - molette : selection precedente / suivante
//
// # Restauration
// `TerminalGuard` remet le terminal dans son etat initial a la sortie,
// y compris en cas d'erreur.

use crate::app::commands::{ActiveList, Command, Flow};
use crate::app::drag::{drop_indicator, DragOutcome, DragPayload, DropIndicator};
use crate::app::menu::MenuItem;
use crate::app::App;
use crate::constants::{ICON_WIDTH, LABEL_SPACING};
use crate::error::{CdError, CdResult};
use crate::history::entry::EntryId;
use crate::history::truncate::{display_width, line_preview, truncate_end};
use crate::ui::keys::map_key;
use crate::ui::layout::{scroll_offset, Layout, Pane};
use crate::ui::prompt::LineEditor;
use crate::ui::theme::{get_palette, to_color, ThemePalette};
use crate::ui::{DragPreview, Presenter, Region, ScreenPoint};
use chrono::Utc;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const HELP_TEXT: &str = "Entree copier | f favori | e titre | p coller | Espace pause | q quitter";

fn term_err(e: io::Error) -> CdError {
    CdError::Terminal(e.to_string())
}

/// Mode brut + ecran alternatif, restaures a la destruction.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> CdResult<Self> {
        terminal::enable_raw_mode().map_err(term_err)?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )
        .map_err(term_err)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            ResetColor,
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Glisser en cours.
#[derive(Debug)]
struct DragState {
    payload: DragPayload,
    preview: DragPreview,
    hover: Option<usize>,
    pointer: Option<ScreenPoint>,
}

/// Menu contextuel affiche.
#[derive(Debug)]
struct MenuOverlay {
    point: ScreenPoint,
    items: Vec<MenuItem>,
    cursor: usize,
}

impl MenuOverlay {
    fn label(item: &MenuItem) -> String {
        match item.shortcut {
            Some(c) => format!(" {}  ({})", item.label, c),
            None => format!(" {}", item.label),
        }
    }

    /// Rectangle du menu, ramene dans l'ecran.
    fn rect(&self, cols: u16, rows: u16) -> Pane {
        let width = self
            .items
            .iter()
            .map(|i| display_width(&Self::label(i)) + 1)
            .max()
            .unwrap_or(0)
            .min(cols as usize) as u16;
        let height = (self.items.len() as u16).min(rows);
        Pane {
            x: self.point.column.min(cols.saturating_sub(width)),
            y: self.point.row.saturating_add(1).min(rows.saturating_sub(height)),
            width,
            height,
        }
    }

    fn item_at(&self, p: ScreenPoint, cols: u16, rows: u16) -> Option<usize> {
        let rect = self.rect(cols, rows);
        if !rect.contains(p) {
            return None;
        }
        Some((p.row - rect.y) as usize).filter(|i| *i < self.items.len())
    }
}

/// Edition du titre d'un favori.
#[derive(Debug)]
struct TitlePrompt {
    id: EntryId,
    editor: LineEditor,
}

/// Presentateur terminal : conserve les surcouches demandees par `App`.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    dirty: bool,
    drag: Option<DragState>,
    menu: Option<MenuOverlay>,
    prompt: Option<TitlePrompt>,
}

impl Presenter for TerminalPresenter {
    fn request_redraw(&mut self, region: Region) {
        tracing::trace!(?region, "redraw requested");
        self.dirty = true;
    }

    fn begin_drag(&mut self, payload: DragPayload, preview: DragPreview) -> DragOutcome {
        self.drag = Some(DragState {
            payload,
            preview,
            hover: None,
            pointer: None,
        });
        self.dirty = true;
        DragOutcome::Pending
    }

    fn show_popup_menu(&mut self, point: ScreenPoint, items: Vec<MenuItem>) {
        self.menu = Some(MenuOverlay { point, items, cursor: 0 });
        self.dirty = true;
    }

    fn edit_title(&mut self, id: EntryId, current: &str) {
        self.prompt = Some(TitlePrompt {
            id,
            editor: LineEditor::new(current),
        });
        self.dirty = true;
    }
}

/// Etat de la vue : disposition, defilement, bouton presse.
#[derive(Debug)]
struct View {
    layout: Layout,
    rows: u16,
    history_offset: usize,
    favorites_offset: usize,
    /// Favori sous le bouton gauche presse (debut de glisser possible)
    pressed: Option<(ScreenPoint, usize)>,
}

impl View {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            layout: Layout::compute(cols, rows),
            rows,
            history_offset: 0,
            favorites_offset: 0,
            pressed: None,
        }
    }

    /// Liste et index de l'entree sous le pointeur.
    fn hit(&self, p: ScreenPoint, app: &App) -> Option<(ActiveList, Option<usize>)> {
        let history = &self.layout.history;
        let favorites = &self.layout.favorites;
        if history.contains(p) {
            Some((
                ActiveList::History,
                history.item_at(p, self.history_offset, app.history().len()),
            ))
        } else if favorites.contains(p) {
            Some((
                ActiveList::Favorites,
                favorites.item_at(p, self.favorites_offset, app.favorites().len()),
            ))
        } else {
            None
        }
    }

    /// Traduit un evenement en commandes.
    fn translate(&mut self, ev: Event, app: &App, presenter: &mut TerminalPresenter) -> Vec<Command> {
        match ev {
            Event::Resize(cols, rows) => {
                self.layout = Layout::compute(cols, rows);
                self.rows = rows;
                vec![Command::Resize {
                    view_width: self.layout.favorites_view_width(),
                }]
            }
            Event::Key(key) if key.kind != KeyEventKind::Release => self.on_key(key, app, presenter),
            Event::Mouse(mouse) => self.on_mouse(mouse, app, presenter),
            _ => Vec::new(),
        }
    }

    fn on_key(&mut self, key: KeyEvent, app: &App, presenter: &mut TerminalPresenter) -> Vec<Command> {
        if let Some(prompt) = presenter.prompt.as_mut() {
            presenter.dirty = true;
            let editor = &mut prompt.editor;
            match key.code {
                KeyCode::Enter => {
                    if let Some(prompt) = presenter.prompt.take() {
                        return vec![Command::CommitTitle {
                            id: prompt.id,
                            title: prompt.editor.text().to_string(),
                        }];
                    }
                }
                KeyCode::Esc => presenter.prompt = None,
                KeyCode::Backspace => editor.backspace(),
                KeyCode::Delete => editor.delete(),
                KeyCode::Left => editor.left(),
                KeyCode::Right => editor.right(),
                KeyCode::Home => editor.home(),
                KeyCode::End => editor.end(),
                KeyCode::Char(c) => editor.insert(c),
                _ => {}
            }
            return Vec::new();
        }

        if let Some(menu) = presenter.menu.as_mut() {
            presenter.dirty = true;
            let count = menu.items.len();
            let chosen = match key.code {
                KeyCode::Up => {
                    menu.cursor = menu.cursor.saturating_sub(1);
                    return Vec::new();
                }
                KeyCode::Down => {
                    menu.cursor = (menu.cursor + 1).min(count.saturating_sub(1));
                    return Vec::new();
                }
                KeyCode::Enter => Some(menu.cursor),
                KeyCode::Char(c) => menu.items.iter().position(|i| i.shortcut == Some(c)),
                _ => None,
            };
            return close_menu(presenter, chosen);
        }

        if presenter.drag.is_some() {
            return Vec::new();
        }
        map_key(&key, app.focus()).into_iter().collect()
    }

    fn on_mouse(&mut self, mouse: MouseEvent, app: &App, presenter: &mut TerminalPresenter) -> Vec<Command> {
        let point = ScreenPoint::new(mouse.column, mouse.row);

        if presenter.prompt.is_some() {
            return Vec::new();
        }

        if let Some(menu) = presenter.menu.as_mut() {
            let item = menu.item_at(point, self.layout.width, self.rows);
            return match mouse.kind {
                MouseEventKind::Moved => {
                    if let Some(i) = item {
                        menu.cursor = i;
                        presenter.dirty = true;
                    }
                    Vec::new()
                }
                MouseEventKind::Down(MouseButton::Left) => close_menu(presenter, item),
                MouseEventKind::Down(_) => close_menu(presenter, None),
                _ => Vec::new(),
            };
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = None;
                match self.hit(point, app) {
                    Some((list, Some(index))) => {
                        if list == ActiveList::Favorites {
                            self.pressed = Some((point, index));
                        }
                        vec![Command::Select { list, index }]
                    }
                    Some((list, None)) => vec![Command::SwitchList(Some(list))],
                    None => Vec::new(),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = presenter.drag.as_mut() {
                    drag.pointer = Some(point);
                    drag.hover = self.layout.favorites.item_at(
                        point,
                        self.favorites_offset,
                        app.favorites().len(),
                    );
                    presenter.dirty = true;
                    return Vec::new();
                }
                match self.pressed {
                    Some((origin, index)) if origin != point => {
                        self.pressed = None;
                        vec![Command::BeginDrag { index }]
                    }
                    _ => Vec::new(),
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed = None;
                match presenter.drag.take() {
                    Some(drag) => {
                        presenter.dirty = true;
                        let drop_index = self.layout.favorites.item_at(
                            point,
                            self.favorites_offset,
                            app.favorites().len(),
                        );
                        vec![Command::DropFavorite {
                            payload: drag.payload,
                            drop_index,
                        }]
                    }
                    None => Vec::new(),
                }
            }
            MouseEventKind::Down(MouseButton::Right) => match self.hit(point, app) {
                Some((list, Some(index))) => vec![
                    Command::Select { list, index },
                    Command::OpenMenu { point, list, index },
                ],
                _ => Vec::new(),
            },
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => match self.hit(point, app) {
                Some((list, _)) => {
                    let step = if mouse.kind == MouseEventKind::ScrollUp {
                        Command::SelectPrev
                    } else {
                        Command::SelectNext
                    };
                    vec![Command::SwitchList(Some(list)), step]
                }
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // --- Rendu ---

    fn draw(&mut self, out: &mut impl Write, app: &App, presenter: &TerminalPresenter) -> io::Result<()> {
        let palette = get_palette(app.settings().theme);
        let layout = self.layout;
        self.history_offset = scroll_offset(
            app.selected(ActiveList::History),
            self.history_offset,
            layout.history.visible_rows(),
        );
        self.favorites_offset = scroll_offset(
            app.selected(ActiveList::Favorites),
            self.favorites_offset,
            layout.favorites.visible_rows(),
        );

        queue!(
            out,
            SetBackgroundColor(to_color(palette.bg)),
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.draw_history(out, app, palette)?;
        self.draw_favorites(out, app, palette)?;
        for row in 0..layout.status_row {
            put(out, layout.separator, row, "│", 1, to_color(palette.border), to_color(palette.bg))?;
        }
        if let Some(drag) = &presenter.drag {
            self.draw_drag(out, app, drag, palette)?;
        }
        draw_status(out, app, &layout, palette)?;
        if let Some(menu) = &presenter.menu {
            draw_menu(out, menu, layout.width, self.rows, palette)?;
        }
        match &presenter.prompt {
            Some(prompt) => {
                let label = "Titre : ";
                let text = format!("{}{}", label, prompt.editor.text());
                put(
                    out,
                    0,
                    layout.status_row,
                    &text,
                    layout.width as usize,
                    to_color(palette.text_selected),
                    to_color(palette.bg_selected),
                )?;
                let col = (display_width(label) + prompt.editor.cursor_column()).min(layout.width as usize);
                queue!(out, cursor::MoveTo(col as u16, layout.status_row), cursor::Show)?;
            }
            None => queue!(out, cursor::Hide)?,
        }
        queue!(out, ResetColor)?;
        out.flush()
    }

    fn draw_header(
        out: &mut impl Write,
        pane: &Pane,
        title: &str,
        focused: bool,
        palette: &ThemePalette,
    ) -> io::Result<()> {
        let (fg, bg) = if focused {
            (palette.text_selected, palette.bg_selected)
        } else {
            (palette.text_secondary, palette.border)
        };
        put(out, pane.x, pane.y, title, pane.width as usize, to_color(fg), to_color(bg))
    }

    fn draw_history(&self, out: &mut impl Write, app: &App, palette: &ThemePalette) -> io::Result<()> {
        let pane = self.layout.history;
        if pane.height == 0 {
            return Ok(());
        }
        let focused = app.focus() == ActiveList::History;
        let title = format!(" Historique ({})", app.history().len());
        Self::draw_header(out, &pane, &title, focused, palette)?;

        let now = app.now();
        let selected = app.selected(ActiveList::History);
        let width = pane.width as usize;
        for (index, entry) in app.history().iter().enumerate().skip(self.history_offset) {
            let Some(row) = pane.row_of(index, self.history_offset) else {
                break;
            };
            let age = entry.age_display(now);
            let age_width = display_width(&age) + 1;
            let text_width = width.saturating_sub(age_width + 1);
            let line = format!(" {}", line_preview(&entry.text, text_width));

            let (fg, bg, age_fg) = if index == selected && focused {
                (palette.text_selected, palette.bg_selected, palette.text_selected)
            } else if palette.fade_on_bg {
                (palette.text, entry.display_color, palette.text_secondary)
            } else {
                (entry.display_color, palette.bg, palette.text_secondary)
            };
            put(out, pane.x, row, &line, width.saturating_sub(age_width), to_color(fg), to_color(bg))?;
            if age_width < width {
                let x = pane.x + (width - age_width) as u16;
                put(out, x, row, &format!("{} ", age), age_width, to_color(age_fg), to_color(bg))?;
            }
        }
        Ok(())
    }

    fn draw_favorites(&self, out: &mut impl Write, app: &App, palette: &ThemePalette) -> io::Result<()> {
        let pane = self.layout.favorites;
        if pane.height == 0 || pane.width == 0 {
            return Ok(());
        }
        let focused = app.focus() == ActiveList::Favorites;
        let title = format!(" Favoris ({})", app.favorites().len());
        Self::draw_header(out, &pane, &title, focused, palette)?;

        let selected = app.selected(ActiveList::Favorites);
        let width = pane.width as usize;
        let spacing = " ".repeat(LABEL_SPACING);
        for (index, entry) in app.favorites().iter().enumerate().skip(self.favorites_offset) {
            let Some(row) = pane.row_of(index, self.favorites_offset) else {
                break;
            };
            let (fg, bg, num_fg) = if index == selected && focused {
                (palette.text_selected, palette.bg_selected, palette.text_selected)
            } else {
                (palette.text, palette.bg, palette.number)
            };
            let number = format!("{:>w$}", entry.position + 1, w = ICON_WIDTH - 1);
            let icon = truncate_end(&number, ICON_WIDTH);
            put(out, pane.x, row, &format!("{}{}", spacing, icon), ICON_WIDTH + LABEL_SPACING, to_color(num_fg), to_color(bg))?;
            let x = pane.x + (ICON_WIDTH + LABEL_SPACING) as u16;
            let label = format!("{}{}", spacing, entry.display_title);
            put(
                out,
                x,
                row,
                &label,
                width.saturating_sub(ICON_WIDTH + LABEL_SPACING),
                to_color(fg),
                to_color(bg),
            )?;
        }
        Ok(())
    }

    fn draw_drag(&self, out: &mut impl Write, app: &App, drag: &DragState, palette: &ThemePalette) -> io::Result<()> {
        let pane = self.layout.favorites;
        let row = match drop_indicator(drag.hover, app.favorites().len()) {
            DropIndicator::Before(i) => pane.row_of(i, self.favorites_offset).map(|r| r.saturating_sub(1)),
            DropIndicator::AfterLast(i) => pane
                .row_of(i, self.favorites_offset)
                .map(|r| r + 1)
                .filter(|r| *r < pane.y + pane.height),
            DropIndicator::Top => Some(pane.items_top()),
        };
        if let Some(row) = row {
            let line = "─".repeat(pane.width as usize);
            put(out, pane.x, row, &line, pane.width as usize, to_color(palette.drop_line), to_color(palette.bg))?;
        }
        if let Some(p) = drag.pointer {
            let label = format!(" {} ", drag.preview.label);
            let width = display_width(&label).min(self.layout.width.saturating_sub(p.column) as usize);
            put(out, p.column, p.row, &label, width, to_color(palette.text_selected), to_color(palette.bg_selected))?;
        }
        Ok(())
    }
}

fn draw_status(out: &mut impl Write, app: &App, layout: &Layout, palette: &ThemePalette) -> io::Result<()> {
    let width = layout.width as usize;
    let bg = to_color(palette.status_bg);
    let message = app.status().unwrap_or(HELP_TEXT);
    let tag = if app.is_paused() { "EN PAUSE " } else { "" };
    let left = format!(" {}", message);
    put(out, 0, layout.status_row, &left, width.saturating_sub(tag.len()), to_color(palette.text_secondary), bg)?;
    if !tag.is_empty() && tag.len() <= width {
        let x = (width - tag.len()) as u16;
        put(out, x, layout.status_row, tag, tag.len(), to_color(palette.number), bg)?;
    }
    Ok(())
}

fn draw_menu(out: &mut impl Write, menu: &MenuOverlay, cols: u16, rows: u16, palette: &ThemePalette) -> io::Result<()> {
    let rect = menu.rect(cols, rows);
    for (i, item) in menu.items.iter().enumerate().take(rect.height as usize) {
        let (fg, bg) = if i == menu.cursor {
            (palette.text_selected, palette.bg_selected)
        } else {
            (palette.text, palette.status_bg)
        };
        let label = MenuOverlay::label(item);
        put(out, rect.x, rect.y + i as u16, &label, rect.width as usize, to_color(fg), to_color(bg))?;
    }
    Ok(())
}

/// Ferme le menu ; un element choisi produit sa commande apres `MenuClosed`.
fn close_menu(presenter: &mut TerminalPresenter, chosen: Option<usize>) -> Vec<Command> {
    presenter.dirty = true;
    let Some(menu) = presenter.menu.take() else {
        return Vec::new();
    };
    let mut commands = vec![Command::MenuClosed];
    if let Some(item) = chosen.and_then(|i| menu.items.into_iter().nth(i)) {
        commands.push(item.command);
    }
    commands
}

/// Ajuste un texte a `width` cellules : tronque ou complete par des espaces.
fn fit(text: &str, width: usize) -> String {
    let w = display_width(text);
    if w > width {
        let cut = truncate_end(text, width);
        let pad = width - display_width(&cut);
        format!("{}{}", cut, " ".repeat(pad))
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

fn put(out: &mut impl Write, x: u16, y: u16, text: &str, width: usize, fg: Color, bg: Color) -> io::Result<()> {
    if width == 0 {
        return Ok(());
    }
    queue!(
        out,
        cursor::MoveTo(x, y),
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(fit(text, width))
    )
}

/// Lance l'interface et boucle jusqu'a la commande `Quit`.
pub fn run(app: &mut App) -> CdResult<()> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    let (cols, rows) = terminal::size().map_err(term_err)?;
    let mut view = View::new(cols, rows);
    let mut presenter = TerminalPresenter::default();
    app.handle(
        Command::Resize {
            view_width: view.layout.favorites_view_width(),
        },
        &mut presenter,
    );

    let tick_rate = Duration::from_millis(app.settings().poll_interval_ms);
    let mut last_tick = Instant::now();
    tracing::info!(cols, rows, "terminal ui started");

    loop {
        if presenter.dirty {
            view.draw(&mut out, app, &presenter).map_err(term_err)?;
            presenter.dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(term_err)? {
            let ev = event::read().map_err(term_err)?;
            for cmd in view.translate(ev, app, &mut presenter) {
                if app.handle(cmd, &mut presenter) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick(Utc::now(), &mut presenter);
            last_tick = Instant::now();
        }
    }
}
