use copypasta_ext::prelude::ClipboardProvider;
use copypasta_ext::{ wayland_bin, x11_bin };
use log::debug;

use crate::errors::PassgenError;

/// Somewhere a generated password can be handed off to.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), PassgenError>;
}

/// The desktop clipboard, reached through the platform's clipboard binary
/// (`wl-copy` on Wayland, `xclip`/`xsel` on X11).
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn context() -> Result<Box<dyn ClipboardProvider>, PassgenError> {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            debug!("using wayland clipboard binary");
            let ctx = wayland_bin::ClipboardContext::new()
                .map_err(|e| PassgenError::Clipboard(e.to_string()))?;
            return Ok(Box::new(ctx));
        }

        debug!("using x11 clipboard binary");
        let ctx = x11_bin::ClipboardContext::new()
            .map_err(|e| PassgenError::Clipboard(e.to_string()))?;
        Ok(Box::new(ctx))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PassgenError> {
        let mut ctx = Self::context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| PassgenError::Clipboard(e.to_string()))
    }
}

/// Discards everything. Used where no clipboard exists.
#[derive(Default)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), PassgenError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_accepts_anything() {
        let mut clipboard = NoopClipboard;
        assert!(clipboard.write_text("s3cr3t").is_ok());
        assert!(clipboard.write_text("").is_ok());
    }

    #[test]
    fn writers_are_object_safe() {
        let mut writers: Vec<Box<dyn ClipboardWriter>> = vec![Box::new(NoopClipboard)];
        for writer in writers.iter_mut() {
            assert!(writer.write_text("x").is_ok());
        }
    }
}
