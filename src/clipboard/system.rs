// ClipDeck - Presse-papiers systeme
//
// Implementation de `ClipboardSource` sur copypasta (X11, Wayland via
// X11, macOS, Windows). Si le contexte systeme ne peut pas etre cree
// (session sans affichage), le contenu est conserve en memoire pour
// que l'application reste utilisable.

use crate::clipboard::{ClipboardSource, MemoryClipboard};
use crate::error::{CdError, CdResult};
use copypasta::{ClipboardContext, ClipboardProvider};

/// Presse-papiers du systeme, avec repli en memoire.
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
    fallback: MemoryClipboard,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let ctx = match ClipboardContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable, using in-memory clipboard");
                None
            }
        };
        Self {
            ctx,
            fallback: MemoryClipboard::new(),
        }
    }

    /// Le presse-papiers systeme est-il disponible ?
    pub fn is_system(&self) -> bool {
        self.ctx.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        match self.ctx.as_mut() {
            Some(ctx) => ctx.get_contents().ok().filter(|t| !t.is_empty()),
            None => self.fallback.read_text(),
        }
    }

    fn write_text(&mut self, text: &str) -> CdResult<()> {
        match self.ctx.as_mut() {
            Some(ctx) => ctx
                .set_contents(text.to_string())
                .map_err(|e| CdError::Clipboard(e.to_string())),
            None => self.fallback.write_text(text),
        }
    }
}
