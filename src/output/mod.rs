pub mod table;

use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub enum Output {
    #[default]
    Raw,
    Override(Arc<Mutex<Box<dyn Write + Send + Sync>>>),
}

impl Output {
    pub fn println(&self, s: impl AsRef<str>) -> std::io::Result<()> {
        match self {
            Output::Raw => writeln!(std::io::stdout().lock(), "{}", s.as_ref()),
            Output::Override(mutex) => {
                let mut writer = mutex
                    .lock()
                    .map_err(|_| std::io::Error::other("output writer is poisoned"))?;
                writeln!(writer, "{}", s.as_ref())
            }
        }
    }
}
