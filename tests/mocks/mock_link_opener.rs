use contact_desk::error::LinkError;
use contact_desk::messaging::LinkOpener;
use std::sync::{Arc, Mutex};

/// Mock link opener that records links instead of opening them.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
    broken: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following open fail.
    pub fn break_opener(&self) {
        *self.broken.lock().unwrap() = true;
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for MockLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        if *self.broken.lock().unwrap() {
            return Err(LinkError::OpenFailed("no browser".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
