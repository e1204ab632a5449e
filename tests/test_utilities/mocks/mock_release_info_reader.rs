use cvescan::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ReleaseInfoReader serving canned lsb-release content and counting reads
#[derive(Clone)]
pub struct MockReleaseInfoReader {
    content: Option<String>,
    reads: Arc<AtomicUsize>,
}

impl MockReleaseInfoReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn ubuntu(codename: &str) -> Self {
        Self::new(&format!(
            "DISTRIB_ID=Ubuntu\nDISTRIB_RELEASE=00.00\nDISTRIB_CODENAME={}\n",
            codename
        ))
    }

    /// Simulates a host without release metadata
    pub fn unavailable() -> Self {
        Self {
            content: None,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ReleaseInfoReader for MockReleaseInfoReader {
    fn read_release_info(&self) -> OptionsResult<ReleaseInfo> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let path = PathBuf::from(DEFAULT_LSB_RELEASE_PATH);
        match &self.content {
            Some(content) => Ok(ReleaseInfo::parse(&path, content)),
            None => Err(OptionsError::HostMetadataUnavailable {
                path,
                details: "No such file or directory (os error 2)".to_string(),
            }),
        }
    }
}
