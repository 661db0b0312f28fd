//! Output plumbing shared by every command
//!
//! - `logging`: tracing subscriber setup and verbosity levels
//! - `PagerWriter`: `Write` adapter over the minus pager

pub mod logging;

use minus::Pager;
use std::io::{self, Write};
use tracing::debug;

/// Collects an explanation and hands it to the minus pager on flush
///
/// Writes are kept as raw bytes and decoded only when the explainer flushes,
/// so a multi-byte character (such as the `’` in concept cheatsheet headings)
/// may arrive split across two writes. Invalid UTF-8 is rejected at flush.
///
/// ```ignore
/// let pager = Pager::new();
/// let explainer = Explainer::new(Box::new(PagerWriter::new(pager.clone())));
/// explainer.lookup(Tool::Git, Mode::Advanced, "rebase")?;
/// explainer.flush()?;
/// minus::page_all(pager)?;
/// ```
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
    paged: usize,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter {
            pager,
            pending: Vec::new(),
            paged: 0,
        }
    }

    /// Bytes written since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Bytes already handed to the pager.
    pub fn paged(&self) -> usize {
        self.paged
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let text = std::str::from_utf8(&self.pending)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;

        self.paged += self.pending.len();
        debug!(bytes = self.pending.len(), "handed explanation to pager");
        self.pending.clear();
        Ok(())
    }
}
