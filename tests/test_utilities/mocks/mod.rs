/// Mock implementations for testing
mod mock_release_info_reader;

pub use mock_release_info_reader::MockReleaseInfoReader;
