use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Output sink shared by every explainer command.
///
/// Commands are implemented as `impl Explainer` blocks under `commands/`, each
/// writing its text block to the wrapped writer (stdout, the pager or a buffer
/// in tests).
pub struct Explainer {
    writer: RefCell<Box<dyn Write>>,
}

impl Explainer {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Explainer {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn flush(&self) -> anyhow::Result<()> {
        self.writer().flush()?;
        Ok(())
    }
}
